use std::{
    cmp::Ordering,
    fmt,
    ops::{Div, Mul, Neg},
};

use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared,
    area::square_meter,
    diffusion_coefficient::square_meter_per_second,
    dynamic_viscosity::pascal_second,
    f64::{
        Acceleration, Area, DynamicViscosity, Length, MassDensity, MassRate, Ratio,
        ThermodynamicTemperature, Time, Velocity, Volume, VolumeRate,
    },
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
    time::second,
    velocity::meter_per_second,
    volume::cubic_meter,
    volume_rate::cubic_meter_per_second,
};

use super::{Dimension, KinematicViscosity};

/// Errors from dimension-checked [`UnitValue`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Two values (or a value and a target type) disagree on dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
    },

    /// The square root of a value with an odd dimension exponent.
    #[error("square root of {dimension} is not a whole dimension")]
    OddRoot { dimension: Dimension },

    /// A dimension exponent left the range of `i8`.
    #[error("dimension exponent overflow from {dimension}")]
    ExponentOverflow { dimension: Dimension },
}

/// A physical quantity whose dimension is known only at runtime.
///
/// The magnitude is always stored in SI base units (m, kg, s, K), so
/// converting between equivalent units never changes it. Temperatures are
/// absolute kelvin.
///
/// Scaling by a bare `f64` always succeeds. Every operation that touches the
/// dimension is checked and returns a [`UnitError`] on a mismatch or on
/// exponent overflow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitValue {
    value: f64,
    dimension: Dimension,
}

impl UnitValue {
    /// Creates a value from an SI magnitude and its dimension.
    #[must_use]
    pub const fn new(value: f64, dimension: Dimension) -> Self {
        Self { value, dimension }
    }

    #[must_use]
    pub const fn dimensionless(value: f64) -> Self {
        Self::new(value, Dimension::DIMENSIONLESS)
    }

    /// Returns the magnitude in SI base units.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns the SI magnitude if the dimension is `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::DimensionMismatch`] otherwise.
    pub fn value_in(&self, expected: Dimension) -> Result<f64, UnitError> {
        self.require(expected)?;
        Ok(self.value)
    }

    /// Adds two values of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_add(self, rhs: Self) -> Result<Self, UnitError> {
        rhs.require(self.dimension)?;
        Ok(Self::new(self.value + rhs.value, self.dimension))
    }

    /// Subtracts a value of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, UnitError> {
        rhs.require(self.dimension)?;
        Ok(Self::new(self.value - rhs.value, self.dimension))
    }

    /// Compares two values of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_cmp(&self, rhs: &Self) -> Result<Option<Ordering>, UnitError> {
        rhs.require(self.dimension)?;
        Ok(self.value.partial_cmp(&rhs.value))
    }

    /// Takes the square root, halving every dimension exponent.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::OddRoot`] if any exponent is odd.
    pub fn sqrt(self) -> Result<Self, UnitError> {
        let dimension = self.dimension.sqrt().ok_or(UnitError::OddRoot {
            dimension: self.dimension,
        })?;
        Ok(Self::new(self.value.sqrt(), dimension))
    }

    /// Multiplies two values, adding their dimension exponents.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::ExponentOverflow`] if an exponent overflows.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, UnitError> {
        let dimension = self.dimension.checked_mul(rhs.dimension).ok_or(
            UnitError::ExponentOverflow {
                dimension: self.dimension,
            },
        )?;
        Ok(Self::new(self.value * rhs.value, dimension))
    }

    /// Divides two values, subtracting their dimension exponents.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::ExponentOverflow`] if an exponent overflows.
    pub fn checked_div(self, rhs: Self) -> Result<Self, UnitError> {
        let dimension = self.dimension.checked_div(rhs.dimension).ok_or(
            UnitError::ExponentOverflow {
                dimension: self.dimension,
            },
        )?;
        Ok(Self::new(self.value / rhs.value, dimension))
    }

    /// Raises the value to an integer power.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::ExponentOverflow`] if an exponent overflows.
    pub fn checked_powi(self, n: i8) -> Result<Self, UnitError> {
        let dimension = self.dimension.checked_powi(n).ok_or(UnitError::ExponentOverflow {
            dimension: self.dimension,
        })?;
        Ok(Self::new(self.value.powi(i32::from(n)), dimension))
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs(), self.dimension)
    }

    fn require(&self, expected: Dimension) -> Result<(), UnitError> {
        if self.dimension == expected {
            Ok(())
        } else {
            Err(UnitError::DimensionMismatch {
                expected,
                found: self.dimension,
            })
        }
    }
}

impl Mul<f64> for UnitValue {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.dimension)
    }
}

impl Div<f64> for UnitValue {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.dimension)
    }
}

impl Neg for UnitValue {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, self.dimension)
    }
}

impl From<f64> for UnitValue {
    fn from(value: f64) -> Self {
        Self::dimensionless(value)
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dimension.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.dimension)
        }
    }
}

macro_rules! uom_conversions {
    ($($quantity:ident: $unit:ident => $dimension:ident),* $(,)?) => {
        $(
            impl From<$quantity> for UnitValue {
                fn from(quantity: $quantity) -> Self {
                    Self::new(quantity.get::<$unit>(), Dimension::$dimension)
                }
            }

            impl TryFrom<UnitValue> for $quantity {
                type Error = UnitError;

                fn try_from(value: UnitValue) -> Result<Self, Self::Error> {
                    Ok($quantity::new::<$unit>(value.value_in(Dimension::$dimension)?))
                }
            }
        )*
    };
}

uom_conversions! {
    Length: meter => LENGTH,
    Area: square_meter => AREA,
    Volume: cubic_meter => VOLUME,
    Time: second => TIME,
    Velocity: meter_per_second => VELOCITY,
    Acceleration: meter_per_second_squared => ACCELERATION,
    MassDensity: kilogram_per_cubic_meter => MASS_DENSITY,
    DynamicViscosity: pascal_second => DYNAMIC_VISCOSITY,
    KinematicViscosity: square_meter_per_second => KINEMATIC_VISCOSITY,
    VolumeRate: cubic_meter_per_second => VOLUME_RATE,
    MassRate: kilogram_per_second => MASS_RATE,
    ThermodynamicTemperature: kelvin => TEMPERATURE,
    Ratio: ratio => DIMENSIONLESS,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::millipascal_second, length::millimeter,
        mass_density::gram_per_cubic_centimeter, thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn stokes_velocity_from_runtime_values() {
        let g = UnitValue::new(9.81, Dimension::ACCELERATION);
        let delta_rho = UnitValue::new(503.0, Dimension::MASS_DENSITY);
        let d = UnitValue::from(Length::new::<millimeter>(0.1));
        let mu = UnitValue::from(DynamicViscosity::new::<millipascal_second>(1.0));

        let v = g
            .checked_mul(delta_rho)
            .and_then(|x| x.checked_mul(d.checked_powi(2)?))
            .and_then(|x| x.checked_div(mu * 18.0))
            .unwrap();

        assert_eq!(v.dimension(), Dimension::VELOCITY);
        let v = Velocity::try_from(v).unwrap();
        assert_relative_eq!(
            v.get::<meter_per_second>(),
            9.81 * 503.0 * 1e-8 / 0.018,
            max_relative = 1e-12
        );
    }

    #[test]
    fn conversions_preserve_magnitude() {
        let rho = MassDensity::new::<gram_per_cubic_centimeter>(0.9982);
        let value = UnitValue::from(rho);
        assert_relative_eq!(value.value(), 998.2, max_relative = 1e-12);

        let back = MassDensity::try_from(value).unwrap();
        assert_relative_eq!(back.get::<gram_per_cubic_centimeter>(), 0.9982);
    }

    #[test]
    fn temperatures_are_absolute_kelvin() {
        let t = UnitValue::from(ThermodynamicTemperature::new::<degree_celsius>(20.0));
        assert_relative_eq!(t.value(), 293.15, max_relative = 1e-12);
        assert_eq!(t.dimension(), Dimension::TEMPERATURE);
    }

    #[test]
    fn addition_requires_matching_dimensions() {
        let rho_p = UnitValue::new(2650.0, Dimension::MASS_DENSITY);
        let rho_w = UnitValue::new(997.0, Dimension::MASS_DENSITY);
        let delta = rho_p.checked_sub(rho_w).unwrap();
        assert_relative_eq!(delta.value(), 1653.0);

        let d = UnitValue::new(0.6e-3, Dimension::LENGTH);
        assert_eq!(
            rho_p.checked_add(d),
            Err(UnitError::DimensionMismatch {
                expected: Dimension::MASS_DENSITY,
                found: Dimension::LENGTH,
            })
        );
    }

    #[test]
    fn comparison_requires_matching_dimensions() {
        let a = UnitValue::new(1.0, Dimension::LENGTH);
        let b = UnitValue::new(2.0, Dimension::LENGTH);
        assert_eq!(a.checked_cmp(&b), Ok(Some(Ordering::Less)));
        assert!(a.checked_cmp(&UnitValue::dimensionless(2.0)).is_err());
    }

    #[test]
    fn sqrt_of_velocity_squared() {
        let v_sq = UnitValue::new(0.0144, Dimension::new(2, 0, -2, 0));
        let v = v_sq.sqrt().unwrap();
        assert_eq!(v.dimension(), Dimension::VELOCITY);
        assert_relative_eq!(v.value(), 0.12, max_relative = 1e-12);

        let volume = UnitValue::new(8.0, Dimension::VOLUME);
        assert!(matches!(volume.sqrt(), Err(UnitError::OddRoot { .. })));
    }

    #[test]
    fn try_from_rejects_wrong_dimension() {
        let rho = UnitValue::new(997.0, Dimension::MASS_DENSITY);
        assert!(matches!(
            DynamicViscosity::try_from(rho),
            Err(UnitError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn exponent_overflow_is_an_error() {
        let area = UnitValue::new(2.0, Dimension::AREA);
        assert!(matches!(
            area.checked_powi(100),
            Err(UnitError::ExponentOverflow { .. })
        ));

        let huge = UnitValue::new(1.0, Dimension::new(127, 0, 0, 0));
        let length = UnitValue::new(1.0, Dimension::LENGTH);
        assert_eq!(
            huge.checked_mul(length),
            Err(UnitError::ExponentOverflow {
                dimension: Dimension::new(127, 0, 0, 0),
            })
        );
        assert!(huge.checked_div(length).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(
            UnitValue::new(0.5, Dimension::VELOCITY).to_string(),
            "0.5 m·s^-1"
        );
        assert_eq!(UnitValue::dimensionless(3.0).to_string(), "3");
    }
}
