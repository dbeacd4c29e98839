//! Particle Reynolds number.

use uom::si::{
    f64::{DynamicViscosity, Length, MassDensity, Ratio, Velocity},
    ratio::ratio,
};

use crate::support::units::{Dimension, UnitError, UnitValue};

/// Returns the particle Reynolds number `Re = φ·ρ·v·d / μ`.
///
/// `shape_factor` (φ) is 1 for a sphere.
///
/// ```
/// use sedimentation_models::support::reynolds::reynolds_number;
/// use uom::si::{
///     dynamic_viscosity::millipascal_second,
///     f64::{DynamicViscosity, Length, MassDensity, Velocity},
///     length::millimeter,
///     mass_density::kilogram_per_cubic_meter,
///     velocity::meter_per_second,
/// };
///
/// let re = reynolds_number(
///     Velocity::new::<meter_per_second>(0.1),
///     Length::new::<millimeter>(1.0),
///     DynamicViscosity::new::<millipascal_second>(1.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
///     1.0,
/// );
/// assert!((re - 100.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn reynolds_number(
    velocity: Velocity,
    particle_diameter: Length,
    fluid_dynamic_viscosity: DynamicViscosity,
    fluid_density: MassDensity,
    shape_factor: f64,
) -> f64 {
    let re: Ratio = velocity * fluid_density * particle_diameter / fluid_dynamic_viscosity;
    re.get::<ratio>() * shape_factor
}

/// Returns the particle Reynolds number for runtime values.
///
/// # Errors
///
/// Returns [`UnitError::DimensionMismatch`] if the inputs do not combine into
/// a dimensionless group, or [`UnitError::ExponentOverflow`] if combining
/// them overflows an exponent.
pub fn reynolds_number_from_values(
    velocity: UnitValue,
    particle_diameter: UnitValue,
    fluid_dynamic_viscosity: UnitValue,
    fluid_density: UnitValue,
    shape_factor: f64,
) -> Result<f64, UnitError> {
    let re = velocity
        .checked_mul(fluid_density)?
        .checked_mul(particle_diameter)?
        .checked_div(fluid_dynamic_viscosity)?;
    Ok(re.value_in(Dimension::DIMENSIONLESS)? * shape_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        dynamic_viscosity::pascal_second, length::meter, mass_density::kilogram_per_cubic_meter,
        velocity::meter_per_second,
    };

    #[test]
    fn sand_grain_in_warm_water() {
        let re = reynolds_number(
            Velocity::new::<meter_per_second>(0.114),
            Length::new::<meter>(0.6e-3),
            DynamicViscosity::new::<pascal_second>(0.89e-3),
            MassDensity::new::<kilogram_per_cubic_meter>(997.0),
            1.0,
        );
        assert_relative_eq!(re, 0.114 * 997.0 * 0.6e-3 / 0.89e-3, max_relative = 1e-12);
    }

    #[test]
    fn scales_with_shape_factor() {
        let args = (
            Velocity::new::<meter_per_second>(0.01),
            Length::new::<meter>(1e-3),
            DynamicViscosity::new::<pascal_second>(1e-3),
            MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
        );
        let sphere = reynolds_number(args.0, args.1, args.2, args.3, 1.0);
        let irregular = reynolds_number(args.0, args.1, args.2, args.3, 0.8);
        assert_relative_eq!(irregular, 0.8 * sphere);
    }

    #[test]
    fn runtime_values_match_typed() {
        let v = Velocity::new::<meter_per_second>(0.05);
        let d = Length::new::<meter>(2e-4);
        let mu = DynamicViscosity::new::<pascal_second>(1.0016e-3);
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(998.2);

        let typed = reynolds_number(v, d, mu, rho, 1.0);
        let runtime =
            reynolds_number_from_values(v.into(), d.into(), mu.into(), rho.into(), 1.0).unwrap();
        assert_relative_eq!(typed, runtime, max_relative = 1e-12);
    }

    #[test]
    fn runtime_values_reject_mismatched_dimensions() {
        let v = UnitValue::new(0.05, Dimension::VELOCITY);
        let d = UnitValue::new(2e-4, Dimension::LENGTH);
        let nu = UnitValue::new(1.0e-6, Dimension::KINEMATIC_VISCOSITY);
        let rho = UnitValue::new(998.2, Dimension::MASS_DENSITY);

        assert!(matches!(
            reynolds_number_from_values(v, d, nu, rho, 1.0),
            Err(UnitError::DimensionMismatch { .. })
        ));
    }
}
