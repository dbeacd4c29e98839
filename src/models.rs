//! Public sedimentation models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the computation and domain logic live. The [`twine_core::Model`]
//! implementation is a thin adapter that delegates to that core API; the
//! `core` module itself is not part of the public API, only the types it
//! exchanges are re-exported.

pub mod sedimentation;
