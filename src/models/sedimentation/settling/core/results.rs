use uom::si::f64::Velocity;

use super::FlowRegime;

/// Outcome of a settling velocity solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settling {
    /// Terminal settling velocity.
    pub velocity: Velocity,

    /// Reynolds number that selected the final flow regime.
    ///
    /// It is evaluated at the velocity from the previous pass.
    pub reynolds_number: f64,

    /// Drag coefficient of the final pass, `None` in the Stokes regime.
    pub drag_coefficient: Option<f64>,

    pub regime: FlowRegime,

    /// Number of passes performed, at least 1.
    pub iters: usize,
}
