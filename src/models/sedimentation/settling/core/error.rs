use thiserror::Error;
use uom::si::f64::MassDensity;

use crate::support::{constraint::ConstraintError, units::UnitError};

/// Errors that can occur while solving for a settling velocity.
#[derive(Debug, Error)]
pub enum SettlingError {
    /// A runtime value did not have the dimension its field requires.
    #[error("invalid type for `{name}`")]
    InvalidType {
        name: &'static str,
        #[source]
        source: UnitError,
    },

    /// An input or configuration value is outside its domain.
    #[error("invalid value for `{name}`")]
    InvalidArgument {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The particle is not denser than the water, so it does not settle.
    #[error(
        "particle density {particle_density:?} must exceed water density {water_density:?}"
    )]
    PhysicallyImpossible {
        particle_density: MassDensity,
        water_density: MassDensity,
    },

    /// The iteration budget ran out before the velocity converged.
    #[error("settling velocity calculation did not converge within {iters} iterations")]
    Convergence { iters: usize },
}
