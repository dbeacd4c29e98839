//! Fixed-point iteration for the terminal settling velocity.
//!
//! The particle's drag coefficient depends on its Reynolds number, which in
//! turn depends on the velocity being solved for. Starting from the Stokes
//! law estimate, each pass picks a drag correlation for the current flow
//! regime and recomputes the velocity from the force balance, until the
//! relative change falls below the configured tolerance.

mod config;
mod error;
mod input;
mod regime;
mod resolved;
mod results;

pub use config::SettlingConfig;
pub use error::SettlingError;
pub use input::{SettlingInput, SettlingValues, standard_gravity};
pub use regime::FlowRegime;
pub use results::Settling;

use tracing::{debug, trace};
use uom::si::{f64::Ratio, ratio::ratio, velocity::meter_per_second};

use crate::support::reynolds::reynolds_number;

use resolved::Resolved;

/// Solves for the terminal settling velocity of a particle.
///
/// All inputs are validated before the first iteration. If the Stokes
/// estimate puts the particle in laminar flow (`Re < 1`), the Stokes velocity
/// is returned as is, on whichever iteration that happens.
///
/// # Errors
///
/// - [`SettlingError::InvalidArgument`] if an input or config value is out of
///   its domain.
/// - [`SettlingError::PhysicallyImpossible`] if the particle is not denser
///   than the water.
/// - [`SettlingError::Convergence`] if `config.max_iters` passes do not meet
///   the tolerance.
pub fn terminal_velocity(
    input: &SettlingInput,
    config: &SettlingConfig,
) -> Result<Settling, SettlingError> {
    let resolved = Resolved::new(input, config)?;

    let stokes = resolved.stokes_velocity();
    let mut velocity = stokes;

    for iter in 1..=resolved.max_iters {
        let re = reynolds_number(
            velocity,
            resolved.particle_diameter,
            resolved.water_dynamic_viscosity,
            resolved.water_density,
            resolved.shape_factor,
        );
        let regime = FlowRegime::from_reynolds(re);

        let Some(cd) = regime.drag_coefficient(re) else {
            debug!(
                velocity = stokes.get::<meter_per_second>(),
                reynolds = re,
                iter,
                "stokes regime, using closed-form settling velocity"
            );
            return Ok(Settling {
                velocity: stokes,
                reynolds_number: re,
                drag_coefficient: None,
                regime,
                iters: iter,
            });
        };

        let next = resolved.force_balance_velocity(cd);
        let change: Ratio = (next - velocity) / velocity;
        let change = change.get::<ratio>().abs();

        trace!(
            iter,
            reynolds = re,
            drag_coefficient = cd,
            velocity = next.get::<meter_per_second>(),
            change,
            "settling iteration"
        );

        if change < resolved.tolerance {
            debug!(
                velocity = next.get::<meter_per_second>(),
                iter,
                "terminal velocity converged"
            );
            return Ok(Settling {
                velocity: next,
                reynolds_number: re,
                drag_coefficient: Some(cd),
                regime,
                iters: iter,
            });
        }

        velocity = next;
    }

    Err(SettlingError::Convergence {
        iters: resolved.max_iters,
    })
}
