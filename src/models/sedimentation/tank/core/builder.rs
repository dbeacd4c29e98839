use num_traits::Zero;
use uom::si::f64::{Length, MassDensity, Time, Velocity, VolumeRate};

use crate::support::constraint::{
    Constrained, ConstraintError, StrictlyPositive, UnitInterval,
};

use super::{SedimentationTank, TankError, TankShape};

/// Builder for a [`SedimentationTank`].
///
/// Created by [`SedimentationTank::builder`]. Every value is validated by
/// [`build`](Self::build).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SedimentationTankBuilder {
    flow_rate: VolumeRate,
    influent_tss: MassDensity,
    influent_bod: MassDensity,
    peaking_factor: f64,
    tss_removal_efficiency: Option<f64>,
    bod_removal_efficiency: Option<f64>,
    surface_overflow_velocity: Option<Velocity>,
    detention_time: Option<Time>,
    side_water_depth: Option<Length>,
    weir_length: Option<Length>,
    shape: TankShape,
}

impl SedimentationTankBuilder {
    pub(super) fn new(
        flow_rate: VolumeRate,
        influent_tss: MassDensity,
        influent_bod: MassDensity,
    ) -> Self {
        Self {
            flow_rate,
            influent_tss,
            influent_bod,
            peaking_factor: 1.0,
            tss_removal_efficiency: None,
            bod_removal_efficiency: None,
            surface_overflow_velocity: None,
            detention_time: None,
            side_water_depth: None,
            weir_length: None,
            shape: TankShape::default(),
        }
    }

    /// Ratio of peak to average flow, at least 1.
    #[must_use]
    pub fn peaking_factor(mut self, peaking_factor: f64) -> Self {
        self.peaking_factor = peaking_factor;
        self
    }

    /// Fraction of influent TSS removed, from 0 to 1. Required for a design.
    #[must_use]
    pub fn tss_removal_efficiency(mut self, efficiency: f64) -> Self {
        self.tss_removal_efficiency = Some(efficiency);
        self
    }

    /// Fraction of influent BOD removed, from 0 to 1. Required for a design.
    #[must_use]
    pub fn bod_removal_efficiency(mut self, efficiency: f64) -> Self {
        self.bod_removal_efficiency = Some(efficiency);
        self
    }

    #[must_use]
    pub fn surface_overflow_velocity(mut self, velocity: Velocity) -> Self {
        self.surface_overflow_velocity = Some(velocity);
        self
    }

    #[must_use]
    pub fn detention_time(mut self, detention_time: Time) -> Self {
        self.detention_time = Some(detention_time);
        self
    }

    #[must_use]
    pub fn side_water_depth(mut self, depth: Length) -> Self {
        self.side_water_depth = Some(depth);
        self
    }

    #[must_use]
    pub fn weir_length(mut self, weir_length: Length) -> Self {
        self.weir_length = Some(weir_length);
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: TankShape) -> Self {
        self.shape = shape;
        self
    }

    /// Validates the parameters and builds the tank.
    ///
    /// # Errors
    ///
    /// - [`TankError::InvalidArgument`] if a value is outside its domain.
    /// - [`TankError::OverSpecified`] if the overflow velocity, detention time
    ///   and side water depth are all given.
    pub fn build(self) -> Result<SedimentationTank, TankError> {
        let flow_rate = positive("flow_rate", self.flow_rate)?;
        let influent_tss = positive("influent_tss", self.influent_tss)?;
        let influent_bod = positive("influent_bod", self.influent_bod)?;
        let peaking_factor = at_least_one("peaking_factor", self.peaking_factor)?;
        let tss_removal_efficiency = self
            .tss_removal_efficiency
            .map(|e| efficiency("tss_removal_efficiency", e))
            .transpose()?;
        let bod_removal_efficiency = self
            .bod_removal_efficiency
            .map(|e| efficiency("bod_removal_efficiency", e))
            .transpose()?;

        let surface_overflow_velocity = self
            .surface_overflow_velocity
            .map(|v| positive("surface_overflow_velocity", v))
            .transpose()?;
        let detention_time = self
            .detention_time
            .map(|t| positive("detention_time", t))
            .transpose()?;
        let side_water_depth = self
            .side_water_depth
            .map(|h| positive("side_water_depth", h))
            .transpose()?;
        let weir_length = self
            .weir_length
            .map(|l| positive("weir_length", l))
            .transpose()?;

        if let TankShape::Rectangular {
            length_to_width_ratio,
        } = self.shape
        {
            positive("length_to_width_ratio", length_to_width_ratio)?;
        }

        if surface_overflow_velocity.is_some()
            && detention_time.is_some()
            && side_water_depth.is_some()
        {
            return Err(TankError::OverSpecified);
        }

        Ok(SedimentationTank {
            flow_rate,
            influent_tss,
            influent_bod,
            peaking_factor,
            tss_removal_efficiency,
            bod_removal_efficiency,
            surface_overflow_velocity,
            detention_time,
            side_water_depth,
            weir_length,
            shape: self.shape,
            design: None,
        })
    }
}

fn positive<T: PartialOrd + Zero>(name: &'static str, value: T) -> Result<T, TankError> {
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| TankError::InvalidArgument { name, source })
}

fn efficiency(name: &'static str, value: f64) -> Result<f64, TankError> {
    UnitInterval::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| TankError::InvalidArgument { name, source })
}

fn at_least_one(name: &'static str, value: f64) -> Result<f64, TankError> {
    let source = if value.is_nan() {
        ConstraintError::NotANumber
    } else if value < 1.0 {
        ConstraintError::BelowMinimum
    } else {
        return Ok(value);
    };
    Err(TankError::InvalidArgument { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        length::meter, mass_density::kilogram_per_cubic_meter, time::hour,
        volume_rate::cubic_meter_per_second,
    };

    use crate::support::units::meters_per_day;

    fn builder() -> SedimentationTankBuilder {
        SedimentationTank::builder(
            VolumeRate::new::<cubic_meter_per_second>(0.1),
            MassDensity::new::<kilogram_per_cubic_meter>(0.3),
            MassDensity::new::<kilogram_per_cubic_meter>(0.2),
        )
    }

    fn invalid_name(result: Result<SedimentationTank, TankError>) -> &'static str {
        match result {
            Err(TankError::InvalidArgument { name, .. }) => name,
            other => panic!("expected an invalid argument, got {other:?}"),
        }
    }

    #[test]
    fn defaults() {
        let tank = builder().build().unwrap();
        assert_eq!(tank.peaking_factor(), 1.0);
        assert_eq!(tank.tss_removal_efficiency(), None);
        assert_eq!(tank.bod_removal_efficiency(), None);
        assert_eq!(tank.shape(), TankShape::default());
        assert!(tank.design().is_none());
    }

    #[test]
    fn rejects_out_of_domain_values() {
        assert_eq!(
            invalid_name(
                SedimentationTank::builder(
                    VolumeRate::new::<cubic_meter_per_second>(0.0),
                    MassDensity::new::<kilogram_per_cubic_meter>(0.3),
                    MassDensity::new::<kilogram_per_cubic_meter>(0.2),
                )
                .build()
            ),
            "flow_rate"
        );
        assert_eq!(
            invalid_name(builder().peaking_factor(0.8).build()),
            "peaking_factor"
        );
        assert_eq!(
            invalid_name(builder().tss_removal_efficiency(1.2).build()),
            "tss_removal_efficiency"
        );
        assert_eq!(
            invalid_name(builder().bod_removal_efficiency(-0.1).build()),
            "bod_removal_efficiency"
        );
        assert_eq!(
            invalid_name(builder().side_water_depth(Length::new::<meter>(-3.0)).build()),
            "side_water_depth"
        );
        assert_eq!(
            invalid_name(
                builder()
                    .shape(TankShape::Rectangular {
                        length_to_width_ratio: 0.0
                    })
                    .build()
            ),
            "length_to_width_ratio"
        );
    }

    #[test]
    fn peaking_factor_below_one_is_below_minimum() {
        assert!(matches!(
            builder().peaking_factor(0.5).build(),
            Err(TankError::InvalidArgument {
                source: ConstraintError::BelowMinimum,
                ..
            })
        ));
        assert!(matches!(
            builder().peaking_factor(f64::NAN).build(),
            Err(TankError::InvalidArgument {
                source: ConstraintError::NotANumber,
                ..
            })
        ));
    }

    #[test]
    fn all_three_sizing_parameters_over_specify() {
        let result = builder()
            .surface_overflow_velocity(meters_per_day(40.0))
            .detention_time(Time::new::<hour>(2.0))
            .side_water_depth(Length::new::<meter>(3.5))
            .build();
        assert_eq!(result, Err(TankError::OverSpecified));
    }
}
