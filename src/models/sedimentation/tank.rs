//! Sedimentation tank (primary clarifier) design.
//!
//! ```
//! use sedimentation_models::models::sedimentation::tank::{
//!     Clarifier, SedimentationTank, TankGeometry,
//! };
//! use sedimentation_models::support::units::{cubic_meters_per_day, meters_per_day};
//! use twine_core::Model;
//! use uom::si::{
//!     area::square_meter,
//!     f64::{MassDensity, Time},
//!     mass_density::kilogram_per_cubic_meter,
//!     time::hour,
//! };
//!
//! let tank = SedimentationTank::builder(
//!     cubic_meters_per_day(10_000.0),
//!     MassDensity::new::<kilogram_per_cubic_meter>(0.3),
//!     MassDensity::new::<kilogram_per_cubic_meter>(0.2),
//! )
//! .tss_removal_efficiency(0.6)
//! .bod_removal_efficiency(0.3)
//! .surface_overflow_velocity(meters_per_day(40.0))
//! .detention_time(Time::new::<hour>(2.0))
//! .build()
//! .unwrap();
//!
//! let designed = Clarifier::default().call(&tank).unwrap();
//! let design = designed.design().unwrap();
//! assert!((design.surface_area.get::<square_meter>() - 250.0).abs() < 1e-9);
//! assert!(matches!(design.geometry, TankGeometry::Rectangular { .. }));
//! ```

mod core;

pub use self::core::{
    DesignRange, DesignRanges, DesignWarning, SedimentationTank, SedimentationTankBuilder,
    TankDesign, TankError, TankGeometry, TankShape,
};

use twine_core::Model;

/// Tank design model, checking designs against a set of [`DesignRanges`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Clarifier {
    ranges: DesignRanges,
}

impl Clarifier {
    #[must_use]
    pub fn new(ranges: DesignRanges) -> Self {
        Self { ranges }
    }

    #[must_use]
    pub fn ranges(&self) -> &DesignRanges {
        &self.ranges
    }
}

impl Model for Clarifier {
    type Input = SedimentationTank;
    type Output = SedimentationTank;
    type Error = TankError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mut tank = input.clone();
        tank.calculate_design_with(&self.ranges)?;
        Ok(tank)
    }
}
