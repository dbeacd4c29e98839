use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while building or designing a sedimentation tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TankError {
    /// A design parameter is outside its domain.
    #[error("invalid value for `{name}`")]
    InvalidArgument {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A parameter needed by the design was neither given nor derivable.
    #[error("missing design parameter `{0}`")]
    MissingParameter(&'static str),

    /// Overflow velocity, detention time and side water depth were all given.
    #[error(
        "surface overflow velocity, detention time and side water depth cannot all be given"
    )]
    OverSpecified,
}
