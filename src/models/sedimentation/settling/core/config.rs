/// Solver configuration for the settling velocity iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SettlingConfig {
    /// Relative velocity change between passes that counts as converged.
    ///
    /// Must lie strictly between 0 and 1.
    pub tolerance: f64,

    /// Maximum number of passes before giving up.
    pub max_iters: usize,
}

impl Default for SettlingConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.001,
            max_iters: 100,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: SettlingConfig = toml::from_str("max_iters = 25").unwrap();
        assert_eq!(
            config,
            SettlingConfig {
                tolerance: 0.001,
                max_iters: 25,
            }
        );

        let empty: SettlingConfig = toml::from_str("").unwrap();
        assert_eq!(empty, SettlingConfig::default());
    }
}
