//! # Sedimentation Models
//!
//! Particle settling and sedimentation tank models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//!   - [`models::sedimentation::settling`]: terminal settling velocity of a
//!     discrete particle, iterating on the flow regime.
//!   - [`models::sedimentation::tank`]: closed-form sizing of a primary
//!     clarifier.
//! - [`support`]: Supporting utilities used by models: numeric constraints,
//!   units, water property tables and the particle Reynolds number.
//!
//! ## Diagnostics
//!
//! Models emit [`tracing`] events (`trace` per iteration, `debug` on
//! completion, `warn` for out-of-range designs). Install a subscriber in the
//! host application to see them.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for configuration and result types,
//!   so solver settings and design ranges can be loaded from a config file.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
