//! Terminal settling velocity of a discrete particle in water.
//!
//! [`TerminalVelocity`] is the [`twine_core::Model`] adapter; the iteration
//! itself lives in the internal `core` module.
//!
//! ```
//! use sedimentation_models::models::sedimentation::settling::{
//!     FlowRegime, SettlingInput, TerminalVelocity,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     dynamic_viscosity::millipascal_second,
//!     f64::{DynamicViscosity, Length, MassDensity},
//!     length::millimeter,
//!     mass_density::kilogram_per_cubic_meter,
//!     velocity::meter_per_second,
//! };
//!
//! let input = SettlingInput::new(
//!     Length::new::<millimeter>(0.6),
//!     MassDensity::new::<kilogram_per_cubic_meter>(2650.0),
//! )
//! .with_water_density(MassDensity::new::<kilogram_per_cubic_meter>(997.0))
//! .with_water_dynamic_viscosity(DynamicViscosity::new::<millipascal_second>(0.89));
//!
//! let settling = TerminalVelocity::default().call(&input).unwrap();
//! assert_eq!(settling.regime, FlowRegime::Transitional);
//! assert!((settling.velocity.get::<meter_per_second>() - 0.114).abs() < 0.001);
//! ```

mod core;

pub use self::core::{
    FlowRegime, Settling, SettlingConfig, SettlingError, SettlingInput, SettlingValues,
    standard_gravity, terminal_velocity,
};

use twine_core::Model;

/// Settling velocity model with a fixed solver configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TerminalVelocity {
    config: SettlingConfig,
}

impl TerminalVelocity {
    #[must_use]
    pub fn new(config: SettlingConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SettlingConfig {
        &self.config
    }
}

impl Model for TerminalVelocity {
    type Input = SettlingInput;
    type Output = Settling;
    type Error = SettlingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        terminal_velocity(input, &self.config)
    }
}
