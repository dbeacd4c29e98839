//! Tabulated properties of liquid water at atmospheric pressure.
//!
//! Density, dynamic viscosity and kinematic viscosity are tabulated from
//! 1.6 °C to 80 °C. A lookup snaps to the nearest tabulated temperature
//! rather than interpolating, so results match published reference values
//! exactly. Temperatures outside the table return the 20 °C entry.
//!
//! ```
//! use sedimentation_models::support::water;
//! use uom::si::mass_density::gram_per_cubic_centimeter;
//!
//! let rho = water::density(20.0);
//! assert!((rho.get::<gram_per_cubic_centimeter>() - 0.9982).abs() < 1e-12);
//!
//! // 20.4 °C snaps to the 20 °C entry.
//! assert_eq!(water::density(20.4), rho);
//! ```

mod data;
mod table;

use thiserror::Error;
use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    dynamic_viscosity::millipascal_second,
    f64::{DynamicViscosity, MassDensity, ThermodynamicTemperature},
    mass_density::gram_per_cubic_centimeter,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::units::{Dimension, KinematicViscosity, UnitValue};

use table::PropertyTable;

/// Lowest tabulated temperature, °C.
pub const MIN_CELSIUS: f64 = 1.6;

/// Highest tabulated temperature, °C.
pub const MAX_CELSIUS: f64 = 80.0;

/// Temperature whose entry is returned outside the tabulated range, °C.
pub const DEFAULT_CELSIUS: f64 = 20.0;

/// One square millimeter per second, in m²/s.
const SQUARE_MILLIMETER_PER_SECOND: f64 = 1e-6;

/// Errors from [`lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WaterPropertyError {
    /// The temperature is neither a bare Celsius number nor a temperature.
    #[error("invalid temperature {value}: expected °C or a temperature quantity")]
    InvalidArgument { value: UnitValue },
}

/// A tabulated water property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaterProperty {
    /// Mass density, tabulated in g/cm³.
    Density,
    /// Dynamic viscosity, tabulated in mPa·s.
    DynamicViscosity,
    /// Kinematic viscosity, tabulated in mm²/s.
    KinematicViscosity,
}

impl WaterProperty {
    fn table(self) -> &'static PropertyTable {
        match self {
            Self::Density => &data::DENSITY,
            Self::DynamicViscosity => &data::DYNAMIC_VISCOSITY,
            Self::KinematicViscosity => &data::KINEMATIC_VISCOSITY,
        }
    }

    /// Returns the tabulated value in the table's own unit.
    ///
    /// Out-of-range temperatures (including `NaN`) return the 20 °C entry.
    #[must_use]
    pub fn tabulated(self, temperature: impl Into<WaterTemperature>) -> f64 {
        let celsius = temperature.into().celsius();
        let table = self.table();
        if (MIN_CELSIUS..=MAX_CELSIUS).contains(&celsius) {
            table.nearest(celsius)
        } else {
            table.nearest(DEFAULT_CELSIUS)
        }
    }

    /// Returns the property as a runtime [`UnitValue`].
    #[must_use]
    pub fn at(self, temperature: impl Into<WaterTemperature>) -> UnitValue {
        match self {
            Self::Density => density(temperature).into(),
            Self::DynamicViscosity => dynamic_viscosity(temperature).into(),
            Self::KinematicViscosity => kinematic_viscosity(temperature).into(),
        }
    }
}

/// A water temperature, given as bare Celsius or as a quantity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WaterTemperature(f64);

impl WaterTemperature {
    #[must_use]
    pub fn celsius(self) -> f64 {
        self.0
    }
}

impl From<f64> for WaterTemperature {
    fn from(celsius: f64) -> Self {
        Self(celsius)
    }
}

impl From<ThermodynamicTemperature> for WaterTemperature {
    fn from(temperature: ThermodynamicTemperature) -> Self {
        Self(temperature.get::<degree_celsius>())
    }
}

/// Density of water at the nearest tabulated temperature.
pub fn density(temperature: impl Into<WaterTemperature>) -> MassDensity {
    MassDensity::new::<gram_per_cubic_centimeter>(WaterProperty::Density.tabulated(temperature))
}

/// Dynamic viscosity of water at the nearest tabulated temperature.
pub fn dynamic_viscosity(temperature: impl Into<WaterTemperature>) -> DynamicViscosity {
    DynamicViscosity::new::<millipascal_second>(
        WaterProperty::DynamicViscosity.tabulated(temperature),
    )
}

/// Kinematic viscosity of water at the nearest tabulated temperature.
pub fn kinematic_viscosity(temperature: impl Into<WaterTemperature>) -> KinematicViscosity {
    KinematicViscosity::new::<square_meter_per_second>(
        WaterProperty::KinematicViscosity.tabulated(temperature) * SQUARE_MILLIMETER_PER_SECOND,
    )
}

/// Looks up a property for a temperature only known at runtime.
///
/// A dimensionless value is read as °C; a temperature value is converted.
///
/// # Errors
///
/// Returns [`WaterPropertyError::InvalidArgument`] if the value has any other
/// dimension or is `NaN`. Infinite temperatures are out of range and return
/// the 20 °C entry like any other.
pub fn lookup(
    property: WaterProperty,
    temperature: &UnitValue,
) -> Result<UnitValue, WaterPropertyError> {
    let invalid = || WaterPropertyError::InvalidArgument { value: *temperature };

    if temperature.value().is_nan() {
        return Err(invalid());
    }

    let temperature = match temperature.dimension() {
        Dimension::DIMENSIONLESS => WaterTemperature::from(temperature.value()),
        Dimension::TEMPERATURE => {
            WaterTemperature::from(ThermodynamicTemperature::new::<kelvin>(temperature.value()))
        }
        _ => return Err(invalid()),
    };

    Ok(property.at(temperature))
}
