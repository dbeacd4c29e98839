//! Supporting utilities used by models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs may change as the models evolve.

pub mod constraint;
pub mod reynolds;
pub mod units;
pub mod water;
