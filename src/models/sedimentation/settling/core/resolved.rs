//! Validation of settling inputs and resolution of water properties.

use num_traits::Zero;
use uom::si::f64::{Acceleration, DynamicViscosity, Length, MassDensity, Velocity};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitIntervalOpen},
    water,
};

use super::{SettlingConfig, SettlingError, SettlingInput};

/// Validated inputs with every water property filled in.
pub(super) struct Resolved {
    pub particle_diameter: Length,
    pub particle_density: MassDensity,
    pub water_density: MassDensity,
    pub water_dynamic_viscosity: DynamicViscosity,
    pub gravity: Acceleration,
    pub shape_factor: f64,
    pub tolerance: f64,
    pub max_iters: usize,
}

impl Resolved {
    /// Validates the input and config, looking up missing water properties.
    ///
    /// Fields are checked in a fixed order and the first failure is returned.
    pub fn new(input: &SettlingInput, config: &SettlingConfig) -> Result<Self, SettlingError> {
        let particle_diameter = positive("particle_diameter", input.particle_diameter)?;
        let particle_density = positive("particle_density", input.particle_density)?;
        let water_density = positive(
            "water_density",
            input
                .water_density
                .unwrap_or_else(|| water::density(input.temperature)),
        )?;
        let gravity = positive("gravity", input.gravity)?;
        let water_dynamic_viscosity = positive(
            "water_dynamic_viscosity",
            input
                .water_dynamic_viscosity
                .unwrap_or_else(|| water::dynamic_viscosity(input.temperature)),
        )?;

        if particle_density <= water_density {
            return Err(SettlingError::PhysicallyImpossible {
                particle_density,
                water_density,
            });
        }

        if let Some(cd) = input.drag_coefficient {
            positive("drag_coefficient", cd)?;
        }
        let shape_factor = positive("shape_factor", input.shape_factor)?;
        let max_iters = positive("max_iters", config.max_iters)?;
        let tolerance = UnitIntervalOpen::new(config.tolerance)
            .map(Constrained::into_inner)
            .map_err(|source| SettlingError::InvalidArgument {
                name: "tolerance",
                source,
            })?;

        Ok(Self {
            particle_diameter,
            particle_density,
            water_density,
            water_dynamic_viscosity,
            gravity,
            shape_factor,
            tolerance,
            max_iters,
        })
    }

    /// Stokes law velocity, `g·Δρ·d² / (18·μ)`.
    pub fn stokes_velocity(&self) -> Velocity {
        let d = self.particle_diameter;
        self.gravity * self.buoyant_density() * d * d / (self.water_dynamic_viscosity * 18.0)
    }

    /// Velocity balancing gravity, buoyancy and drag, `√(4·g·d·Δρ / (3·Cd·ρw))`.
    pub fn force_balance_velocity(&self, drag_coefficient: f64) -> Velocity {
        let v_squared = self.gravity * self.particle_diameter * self.buoyant_density() * 4.0
            / (self.water_density * (3.0 * drag_coefficient));
        v_squared.sqrt()
    }

    fn buoyant_density(&self) -> MassDensity {
        self.particle_density - self.water_density
    }
}

fn positive<T: PartialOrd + Zero>(name: &'static str, value: T) -> Result<T, SettlingError> {
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| SettlingError::InvalidArgument { name, source })
}
