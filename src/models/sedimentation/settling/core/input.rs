use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, DynamicViscosity, Length, MassDensity, ThermodynamicTemperature},
};

use crate::support::{
    units::{Dimension, UnitError, UnitValue},
    water::{DEFAULT_CELSIUS, WaterTemperature},
};

use super::SettlingError;

/// Standard gravity, 9.80665 m/s².
#[must_use]
pub fn standard_gravity() -> Acceleration {
    Acceleration::new::<meter_per_second_squared>(9.806_65)
}

/// Particle and fluid properties for a settling velocity solve.
///
/// Only the particle is required. Water properties that are left unset are
/// looked up from the water tables at [`temperature`](Self::temperature).
/// Values are checked when the solve starts, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlingInput {
    pub particle_diameter: Length,
    pub particle_density: MassDensity,

    /// Water density, or `None` to look it up at `temperature`.
    pub water_density: Option<MassDensity>,

    /// Gravitational acceleration, 9.81 m/s² unless set.
    pub gravity: Acceleration,

    /// Water dynamic viscosity, or `None` to look it up at `temperature`.
    pub water_dynamic_viscosity: Option<DynamicViscosity>,

    /// Water temperature, 20 °C unless set.
    pub temperature: WaterTemperature,

    /// Initial drag coefficient guess.
    ///
    /// It is validated but not used: the drag coefficient always comes from
    /// the flow regime correlation.
    pub drag_coefficient: Option<f64>,

    /// Particle shape factor, 1 for a sphere.
    pub shape_factor: f64,
}

impl SettlingInput {
    /// Creates an input for a spherical particle in 20 °C water.
    #[must_use]
    pub fn new(particle_diameter: Length, particle_density: MassDensity) -> Self {
        Self {
            particle_diameter,
            particle_density,
            water_density: None,
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
            water_dynamic_viscosity: None,
            temperature: WaterTemperature::from(DEFAULT_CELSIUS),
            drag_coefficient: None,
            shape_factor: 1.0,
        }
    }

    #[must_use]
    pub fn with_water_density(mut self, water_density: MassDensity) -> Self {
        self.water_density = Some(water_density);
        self
    }

    #[must_use]
    pub fn with_gravity(mut self, gravity: Acceleration) -> Self {
        self.gravity = gravity;
        self
    }

    #[must_use]
    pub fn with_water_dynamic_viscosity(mut self, viscosity: DynamicViscosity) -> Self {
        self.water_dynamic_viscosity = Some(viscosity);
        self
    }

    /// Sets the water temperature, in °C or as a temperature quantity.
    #[must_use]
    pub fn with_temperature(mut self, temperature: impl Into<WaterTemperature>) -> Self {
        self.temperature = temperature.into();
        self
    }

    #[must_use]
    pub fn with_drag_coefficient(mut self, drag_coefficient: f64) -> Self {
        self.drag_coefficient = Some(drag_coefficient);
        self
    }

    #[must_use]
    pub fn with_shape_factor(mut self, shape_factor: f64) -> Self {
        self.shape_factor = shape_factor;
        self
    }
}

/// Settling inputs whose dimensions are only known at runtime.
///
/// Converts into a [`SettlingInput`] with `TryFrom`, which checks that each
/// value has the dimension its field requires. A dimensionless temperature is
/// read as °C.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettlingValues {
    pub particle_diameter: UnitValue,
    pub particle_density: UnitValue,
    pub water_density: Option<UnitValue>,
    pub gravity: Option<UnitValue>,
    pub water_dynamic_viscosity: Option<UnitValue>,
    pub temperature: Option<UnitValue>,
    pub drag_coefficient: Option<UnitValue>,
    pub shape_factor: Option<UnitValue>,
}

impl SettlingValues {
    /// Creates values for a particle with every other field unset.
    #[must_use]
    pub fn new(particle_diameter: UnitValue, particle_density: UnitValue) -> Self {
        Self {
            particle_diameter,
            particle_density,
            water_density: None,
            gravity: None,
            water_dynamic_viscosity: None,
            temperature: None,
            drag_coefficient: None,
            shape_factor: None,
        }
    }
}

impl TryFrom<&SettlingValues> for SettlingInput {
    type Error = SettlingError;

    fn try_from(values: &SettlingValues) -> Result<Self, Self::Error> {
        let mut input = SettlingInput::new(
            convert("particle_diameter", values.particle_diameter)?,
            convert("particle_density", values.particle_density)?,
        );

        if let Some(value) = values.water_density {
            input.water_density = Some(convert("water_density", value)?);
        }
        if let Some(value) = values.gravity {
            input.gravity = convert("gravity", value)?;
        }
        if let Some(value) = values.water_dynamic_viscosity {
            input.water_dynamic_viscosity = Some(convert("water_dynamic_viscosity", value)?);
        }
        if let Some(value) = values.temperature {
            input.temperature = temperature(value)?;
        }
        if let Some(value) = values.drag_coefficient {
            input.drag_coefficient = Some(dimensionless("drag_coefficient", value)?);
        }
        if let Some(value) = values.shape_factor {
            input.shape_factor = dimensionless("shape_factor", value)?;
        }

        Ok(input)
    }
}

fn convert<T>(name: &'static str, value: UnitValue) -> Result<T, SettlingError>
where
    T: TryFrom<UnitValue, Error = UnitError>,
{
    T::try_from(value).map_err(|source| SettlingError::InvalidType { name, source })
}

fn dimensionless(name: &'static str, value: UnitValue) -> Result<f64, SettlingError> {
    value
        .value_in(Dimension::DIMENSIONLESS)
        .map_err(|source| SettlingError::InvalidType { name, source })
}

fn temperature(value: UnitValue) -> Result<WaterTemperature, SettlingError> {
    match value.dimension() {
        Dimension::DIMENSIONLESS => Ok(WaterTemperature::from(value.value())),
        _ => {
            let t: ThermodynamicTemperature = convert("temperature", value)?;
            Ok(WaterTemperature::from(t))
        }
    }
}
