//! Physical units: [`uom`] for typed quantities, [`UnitValue`] at runtime.
//!
//! Models in this crate take and return [`uom`] quantities, so a density can
//! never be passed where a viscosity is expected.
//!
//! Some callers only learn the dimension of a value at runtime (a form field,
//! a parsed table). [`UnitValue`] carries an SI magnitude together with a
//! [`Dimension`] exponent vector, and converts into the matching [`uom`] type
//! through `TryFrom`:
//!
//! ```
//! use sedimentation_models::support::units::{Dimension, UnitValue};
//! use uom::si::{f64::Length, length::millimeter};
//!
//! let d = UnitValue::new(0.6e-3, Dimension::LENGTH);
//! let d = Length::try_from(d).unwrap();
//! assert!((d.get::<millimeter>() - 0.6).abs() < 1e-12);
//!
//! let wrong = UnitValue::new(997.0, Dimension::MASS_DENSITY);
//! assert!(Length::try_from(wrong).is_err());
//! ```

mod dimension;
mod quantities;
mod unit_value;

pub use dimension::Dimension;
pub use quantities::{
    KinematicViscosity, SECONDS_PER_DAY, SolidsLoadingRate, WeirLoadingRate, cubic_meters_per_day,
    cubic_meters_per_meter_day, kilograms_per_square_meter_day, meters_per_day,
};
pub use unit_value::{UnitError, UnitValue};
