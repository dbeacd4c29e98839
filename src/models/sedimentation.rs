//! Sedimentation models.
//!
//! - [`settling`]: terminal settling velocity of a single discrete particle.
//! - [`tank`]: sizing of a sedimentation tank (primary clarifier) from its
//!   hydraulic and solids loading.
//!
//! Both assume ideal (type I) discrete settling: particles settle
//! independently, are not resuspended, and the tank is in plug flow with no
//! settling in its inlet and outlet zones.

pub mod settling;
pub mod tank;
