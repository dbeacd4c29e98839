use std::fmt;

/// Exponents over the base dimensions length, mass, time and temperature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
    pub temperature: i8,
}

impl Dimension {
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0);
    pub const LENGTH: Self = Self::new(1, 0, 0, 0);
    pub const MASS: Self = Self::new(0, 1, 0, 0);
    pub const TIME: Self = Self::new(0, 0, 1, 0);
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 1);
    pub const AREA: Self = Self::new(2, 0, 0, 0);
    pub const VOLUME: Self = Self::new(3, 0, 0, 0);
    pub const VELOCITY: Self = Self::new(1, 0, -1, 0);
    pub const ACCELERATION: Self = Self::new(1, 0, -2, 0);
    pub const MASS_DENSITY: Self = Self::new(-3, 1, 0, 0);
    pub const DYNAMIC_VISCOSITY: Self = Self::new(-1, 1, -1, 0);
    pub const KINEMATIC_VISCOSITY: Self = Self::new(2, 0, -1, 0);
    pub const VOLUME_RATE: Self = Self::new(3, 0, -1, 0);
    pub const MASS_RATE: Self = Self::new(0, 1, -1, 0);

    #[must_use]
    pub const fn new(length: i8, mass: i8, time: i8, temperature: i8) -> Self {
        Self {
            length,
            mass,
            time,
            temperature,
        }
    }

    /// Dimension of a product, or `None` if an exponent overflows.
    #[must_use]
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        match (
            self.length.checked_add(rhs.length),
            self.mass.checked_add(rhs.mass),
            self.time.checked_add(rhs.time),
            self.temperature.checked_add(rhs.temperature),
        ) {
            (Some(length), Some(mass), Some(time), Some(temperature)) => {
                Some(Self::new(length, mass, time, temperature))
            }
            _ => None,
        }
    }

    /// Dimension of a quotient, or `None` if an exponent overflows.
    #[must_use]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        match (
            self.length.checked_sub(rhs.length),
            self.mass.checked_sub(rhs.mass),
            self.time.checked_sub(rhs.time),
            self.temperature.checked_sub(rhs.temperature),
        ) {
            (Some(length), Some(mass), Some(time), Some(temperature)) => {
                Some(Self::new(length, mass, time, temperature))
            }
            _ => None,
        }
    }

    /// Dimension raised to an integer power, or `None` if an exponent overflows.
    #[must_use]
    pub const fn checked_powi(self, n: i8) -> Option<Self> {
        match (
            self.length.checked_mul(n),
            self.mass.checked_mul(n),
            self.time.checked_mul(n),
            self.temperature.checked_mul(n),
        ) {
            (Some(length), Some(mass), Some(time), Some(temperature)) => {
                Some(Self::new(length, mass, time, temperature))
            }
            _ => None,
        }
    }

    /// Dimension of a square root, if every exponent is even.
    #[must_use]
    pub const fn sqrt(self) -> Option<Self> {
        if self.length % 2 != 0
            || self.mass % 2 != 0
            || self.time % 2 != 0
            || self.temperature % 2 != 0
        {
            return None;
        }
        Some(Self::new(
            self.length / 2,
            self.mass / 2,
            self.time / 2,
            self.temperature / 2,
        ))
    }

    #[must_use]
    pub fn is_dimensionless(self) -> bool {
        self == Self::DIMENSIONLESS
    }
}

/// Formats as SI base symbols, e.g. `kg·m^-3` for a density.
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }

        let factors = [
            ("kg", self.mass),
            ("m", self.length),
            ("s", self.time),
            ("K", self.temperature),
        ];

        let mut first = true;
        for (symbol, exponent) in factors {
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            if exponent == 1 {
                f.write_str(symbol)?;
            } else {
                write!(f, "{symbol}^{exponent}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_dimensions_compose() {
        assert_eq!(
            Dimension::LENGTH.checked_div(Dimension::TIME),
            Some(Dimension::VELOCITY)
        );
        assert_eq!(
            Dimension::VOLUME_RATE.checked_div(Dimension::AREA),
            Some(Dimension::VELOCITY)
        );
        assert_eq!(
            Dimension::DYNAMIC_VISCOSITY.checked_div(Dimension::MASS_DENSITY),
            Some(Dimension::KINEMATIC_VISCOSITY)
        );
        assert_eq!(Dimension::LENGTH.checked_powi(3), Some(Dimension::VOLUME));
    }

    #[test]
    fn reynolds_group_is_dimensionless() {
        let re = Dimension::VELOCITY
            .checked_mul(Dimension::MASS_DENSITY)
            .and_then(|d| d.checked_mul(Dimension::LENGTH))
            .and_then(|d| d.checked_div(Dimension::DYNAMIC_VISCOSITY))
            .unwrap();
        assert!(re.is_dimensionless());
    }

    #[test]
    fn sqrt_requires_even_exponents() {
        assert_eq!(Dimension::AREA.sqrt(), Some(Dimension::LENGTH));
        assert_eq!(
            Dimension::VELOCITY.checked_powi(2).and_then(Dimension::sqrt),
            Some(Dimension::VELOCITY)
        );
        assert_eq!(Dimension::VOLUME.sqrt(), None);
    }

    #[test]
    fn exponent_overflow_is_none() {
        assert_eq!(Dimension::AREA.checked_powi(100), None);
        assert_eq!(Dimension::new(127, 0, 0, 0).checked_mul(Dimension::LENGTH), None);
        assert_eq!(Dimension::new(-128, 0, 0, 0).checked_div(Dimension::LENGTH), None);
        assert_eq!(Dimension::AREA.checked_powi(63), Some(Dimension::new(126, 0, 0, 0)));
    }

    #[test]
    fn display() {
        assert_eq!(Dimension::MASS_DENSITY.to_string(), "kg·m^-3");
        assert_eq!(Dimension::VELOCITY.to_string(), "m·s^-1");
        assert_eq!(Dimension::DIMENSIONLESS.to_string(), "1");
    }
}
