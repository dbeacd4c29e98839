/// Flow regime around a settling particle, classified by Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowRegime {
    /// Laminar flow, `Re < 1`.
    Stokes,
    /// `1 <= Re <= 1000`.
    Transitional,
    /// Turbulent flow, `Re > 1000`.
    Newton,
}

impl FlowRegime {
    /// Classifies a Reynolds number.
    #[must_use]
    pub fn from_reynolds(re: f64) -> Self {
        if re < 1.0 {
            Self::Stokes
        } else if re <= 1000.0 {
            Self::Transitional
        } else {
            Self::Newton
        }
    }

    /// Drag coefficient for this regime.
    ///
    /// Returns `None` in the Stokes regime, where the velocity has a closed
    /// form and no drag coefficient is needed.
    #[must_use]
    pub fn drag_coefficient(self, re: f64) -> Option<f64> {
        match self {
            Self::Stokes => None,
            Self::Transitional => Some(24.0 / re + 3.0 / re.sqrt() + 0.34),
            Self::Newton => Some(0.4),
        }
    }
}
