//! Closed-form sizing of a sedimentation tank.
//!
//! The surface area follows from the flow rate and the surface overflow
//! velocity. The depth or detention time that was not given is derived from
//! the other and the area. Nothing here iterates.

mod builder;
mod design;
mod error;
mod geometry;
mod ranges;

pub use builder::SedimentationTankBuilder;
pub use design::TankDesign;
pub use error::TankError;
pub use geometry::{TankGeometry, TankShape};
pub use ranges::{DesignRange, DesignRanges, DesignWarning};

use tracing::{debug, warn};
use uom::si::{
    area::square_meter,
    f64::{Area, Length, MassDensity, MassRate, Time, Velocity, Volume, VolumeRate},
    length::meter,
    time::hour,
};

use crate::support::units::{SolidsLoadingRate, WeirLoadingRate};

/// A sedimentation tank (primary clarifier) and, once calculated, its design.
///
/// Exactly one sizing route must be available when the design is calculated:
/// a surface overflow velocity, or a detention time together with a side
/// water depth.
#[derive(Debug, Clone, PartialEq)]
pub struct SedimentationTank {
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
    design: Option<TankDesign>,
}

impl SedimentationTank {
    /// Starts building a tank for an average flow rate and influent loads.
    #[must_use]
    pub fn builder(
        flow_rate: VolumeRate,
        influent_tss: MassDensity,
        influent_bod: MassDensity,
    ) -> SedimentationTankBuilder {
        SedimentationTankBuilder::new(flow_rate, influent_tss, influent_bod)
    }

    #[must_use]
    pub fn flow_rate(&self) -> VolumeRate {
        self.flow_rate
    }

    #[must_use]
    pub fn influent_tss(&self) -> MassDensity {
        self.influent_tss
    }

    #[must_use]
    pub fn influent_bod(&self) -> MassDensity {
        self.influent_bod
    }

    #[must_use]
    pub fn peaking_factor(&self) -> f64 {
        self.peaking_factor
    }

    #[must_use]
    pub fn tss_removal_efficiency(&self) -> Option<f64> {
        self.tss_removal_efficiency
    }

    #[must_use]
    pub fn bod_removal_efficiency(&self) -> Option<f64> {
        self.bod_removal_efficiency
    }

    #[must_use]
    pub fn weir_length(&self) -> Option<Length> {
        self.weir_length
    }

    #[must_use]
    pub fn shape(&self) -> TankShape {
        self.shape
    }

    /// The calculated design, if [`calculate_design`](Self::calculate_design)
    /// has succeeded.
    #[must_use]
    pub fn design(&self) -> Option<&TankDesign> {
        self.design.as_ref()
    }

    /// Calculates the design against the default [`DesignRanges`].
    ///
    /// # Errors
    ///
    /// See [`calculate_design_with`](Self::calculate_design_with).
    pub fn calculate_design(&mut self) -> Result<&Self, TankError> {
        self.calculate_design_with(&DesignRanges::default())
    }

    /// Calculates the design, warning about values outside `ranges`.
    ///
    /// On success the design is stored on the tank, replacing any previous
    /// one. On failure the tank is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TankError::MissingParameter`] if a removal efficiency is
    /// missing or neither sizing route is available.
    pub fn calculate_design_with(&mut self, ranges: &DesignRanges) -> Result<&Self, TankError> {
        let design = self.size(ranges)?;
        self.design = Some(design);
        Ok(self)
    }

    fn size(&self, ranges: &DesignRanges) -> Result<TankDesign, TankError> {
        let tss_removal = self
            .tss_removal_efficiency
            .ok_or(TankError::MissingParameter("tss_removal_efficiency"))?;
        let bod_removal = self
            .bod_removal_efficiency
            .ok_or(TankError::MissingParameter("bod_removal_efficiency"))?;

        let surface_overflow_velocity =
            match (self.surface_overflow_velocity, self.detention_time, self.side_water_depth) {
                (Some(velocity), _, _) => velocity,
                (None, Some(time), Some(depth)) => depth / time,
                (None, Some(_), None) => {
                    return Err(TankError::MissingParameter("side_water_depth"));
                }
                (None, None, _) => {
                    return Err(TankError::MissingParameter("surface_overflow_velocity"));
                }
            };

        let surface_area: Area = self.flow_rate / surface_overflow_velocity;
        let geometry = self.shape.geometry(surface_area);

        let (detention_time, side_water_depth, volume) =
            match (self.detention_time, self.side_water_depth) {
                (Some(time), depth) => {
                    let volume: Volume = self.flow_rate * time;
                    (time, depth.unwrap_or_else(|| volume / surface_area), volume)
                }
                (None, Some(depth)) => {
                    let volume: Volume = surface_area * depth;
                    (volume / self.flow_rate, depth, volume)
                }
                (None, None) => return Err(TankError::MissingParameter("detention_time")),
            };

        let peak_flow_rate = self.flow_rate * self.peaking_factor;
        let peak_overflow_velocity: Velocity = peak_flow_rate / surface_area;

        let sludge_mass_rate: MassRate =
            self.flow_rate * self.influent_tss * tss_removal;
        let solids_loading_rate: SolidsLoadingRate =
            self.flow_rate * self.influent_tss / surface_area;
        let weir_loading_rate = self
            .weir_length
            .map(|weir| -> WeirLoadingRate { self.flow_rate / weir });

        let warnings = ranges.check(
            surface_overflow_velocity,
            detention_time,
            solids_loading_rate,
            weir_loading_rate,
        );
        for warning in &warnings {
            warn!(%warning, "tank design outside typical range");
        }

        debug!(
            surface_area = surface_area.get::<square_meter>(),
            depth = side_water_depth.get::<meter>(),
            detention_hours = detention_time.get::<hour>(),
            warnings = warnings.len(),
            "sedimentation tank sized"
        );

        Ok(TankDesign {
            surface_overflow_velocity,
            surface_area,
            geometry,
            side_water_depth,
            detention_time,
            volume,
            effluent_tss: self.influent_tss * (1.0 - tss_removal),
            effluent_bod: self.influent_bod * (1.0 - bod_removal),
            peak_flow_rate,
            peak_overflow_velocity,
            sludge_mass_rate,
            solids_loading_rate,
            weir_loading_rate,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, mass_rate::kilogram_per_second,
        velocity::meter_per_second, volume::cubic_meter,
    };

    use crate::support::units::{SECONDS_PER_DAY, cubic_meters_per_day, meters_per_day};

    fn kg_m3(value: f64) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(value)
    }

    /// 10,000 m³/d of raw sewage with 300 mg/L TSS and 200 mg/L BOD.
    fn builder() -> SedimentationTankBuilder {
        SedimentationTank::builder(cubic_meters_per_day(10_000.0), kg_m3(0.3), kg_m3(0.2))
            .tss_removal_efficiency(0.6)
            .bod_removal_efficiency(0.3)
    }

    fn designed(builder: SedimentationTankBuilder) -> TankDesign {
        let mut tank = builder.build().unwrap();
        tank.calculate_design().unwrap();
        tank.design().cloned().unwrap()
    }

    #[test]
    fn rectangular_tank_from_overflow_and_detention() {
        let design = designed(
            builder()
                .surface_overflow_velocity(meters_per_day(40.0))
                .detention_time(Time::new::<hour>(2.0))
                .weir_length(Length::new::<meter>(40.0)),
        );

        assert_relative_eq!(
            design.surface_area.get::<square_meter>(),
            250.0,
            max_relative = 1e-12
        );
        let TankGeometry::Rectangular { length, width } = design.geometry else {
            panic!("expected a rectangular tank");
        };
        assert_relative_eq!(width.get::<meter>(), 62.5_f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(length.get::<meter>(), 4.0 * 62.5_f64.sqrt(), max_relative = 1e-12);

        assert_relative_eq!(
            design.volume.get::<cubic_meter>(),
            10_000.0 / 12.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            design.side_water_depth.get::<meter>(),
            10.0 / 3.0,
            max_relative = 1e-12
        );

        assert_relative_eq!(
            design.solids_loading_rate.value * SECONDS_PER_DAY,
            12.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            design.weir_loading_rate.unwrap().value * SECONDS_PER_DAY,
            250.0,
            max_relative = 1e-12
        );
        assert!(design.warnings.is_empty(), "{:?}", design.warnings);
    }

    #[test]
    fn circular_tank_has_only_a_diameter() {
        let design = designed(
            builder()
                .surface_overflow_velocity(meters_per_day(40.0))
                .side_water_depth(Length::new::<meter>(3.5))
                .shape(TankShape::Circular),
        );

        let TankGeometry::Circular { diameter } = design.geometry else {
            panic!("expected a circular tank");
        };
        assert_relative_eq!(
            diameter.get::<meter>(),
            (1000.0 / std::f64::consts::PI).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn detention_time_is_derived_from_depth() {
        let design = designed(
            builder()
                .surface_overflow_velocity(meters_per_day(40.0))
                .side_water_depth(Length::new::<meter>(3.5)),
        );

        assert_relative_eq!(design.volume.get::<cubic_meter>(), 875.0, max_relative = 1e-12);
        assert_relative_eq!(design.detention_time.get::<hour>(), 2.1, max_relative = 1e-12);
    }

    #[test]
    fn overflow_velocity_is_derived_from_depth_and_detention() {
        let design = designed(
            builder()
                .detention_time(Time::new::<hour>(2.0))
                .side_water_depth(Length::new::<meter>(3.5)),
        );

        assert_relative_eq!(
            design.surface_overflow_velocity.get::<meter_per_second>() * SECONDS_PER_DAY,
            42.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            design.surface_area.get::<square_meter>(),
            10_000.0 / 42.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(design.side_water_depth.get::<meter>(), 3.5);
    }

    #[test]
    fn effluent_and_sludge() {
        let design = designed(
            builder()
                .surface_overflow_velocity(meters_per_day(40.0))
                .detention_time(Time::new::<hour>(2.0)),
        );

        assert_relative_eq!(
            design.effluent_tss.get::<kilogram_per_cubic_meter>(),
            0.12,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            design.effluent_bod.get::<kilogram_per_cubic_meter>(),
            0.14,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            design.sludge_mass_rate.get::<kilogram_per_second>() * SECONDS_PER_DAY,
            1800.0,
            max_relative = 1e-12
        );
        assert!(design.weir_loading_rate.is_none());
    }

    #[test]
    fn peak_flow_scales_overflow() {
        let design = designed(
            builder()
                .peaking_factor(2.5)
                .surface_overflow_velocity(meters_per_day(40.0))
                .detention_time(Time::new::<hour>(2.0)),
        );

        assert_relative_eq!(
            design.peak_overflow_velocity.get::<meter_per_second>() * SECONDS_PER_DAY,
            100.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            design.peak_flow_rate.value * SECONDS_PER_DAY,
            25_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn high_overflow_rate_warns_but_succeeds() {
        let design = designed(
            builder()
                .surface_overflow_velocity(meters_per_day(80.0))
                .detention_time(Time::new::<hour>(2.0)),
        );

        assert_eq!(design.warnings.len(), 1);
        assert!(matches!(
            design.warnings[0],
            DesignWarning::OverflowVelocity { .. }
        ));
    }

    #[test]
    fn missing_parameters() {
        let mut only_overflow = builder()
            .surface_overflow_velocity(meters_per_day(40.0))
            .build()
            .unwrap();
        assert!(matches!(
            only_overflow.calculate_design(),
            Err(TankError::MissingParameter("detention_time"))
        ));
        assert!(only_overflow.design().is_none());

        let mut only_detention = builder()
            .detention_time(Time::new::<hour>(2.0))
            .build()
            .unwrap();
        assert!(matches!(
            only_detention.calculate_design(),
            Err(TankError::MissingParameter("side_water_depth"))
        ));

        let mut nothing = builder().build().unwrap();
        assert!(matches!(
            nothing.calculate_design(),
            Err(TankError::MissingParameter("surface_overflow_velocity"))
        ));
    }

    #[test]
    fn removal_efficiencies_are_required() {
        let sized = |b: SedimentationTankBuilder| {
            b.surface_overflow_velocity(meters_per_day(40.0))
                .detention_time(Time::new::<hour>(2.0))
                .build()
                .unwrap()
        };
        let influent =
            || SedimentationTank::builder(cubic_meters_per_day(10_000.0), kg_m3(0.3), kg_m3(0.2));

        let mut no_tss = sized(influent().bod_removal_efficiency(0.3));
        assert!(matches!(
            no_tss.calculate_design(),
            Err(TankError::MissingParameter("tss_removal_efficiency"))
        ));
        assert!(no_tss.design().is_none());

        let mut no_bod = sized(influent().tss_removal_efficiency(0.6));
        assert!(matches!(
            no_bod.calculate_design(),
            Err(TankError::MissingParameter("bod_removal_efficiency"))
        ));

        let mut neither = sized(influent());
        assert!(neither.calculate_design().is_err());
    }

    #[test]
    fn recalculation_replaces_the_design() {
        let mut tank = builder()
            .surface_overflow_velocity(meters_per_day(40.0))
            .detention_time(Time::new::<hour>(2.0))
            .build()
            .unwrap();
        let first = tank.calculate_design().unwrap().design().cloned();
        let second = tank.calculate_design().unwrap().design().cloned();
        assert_eq!(first, second);
    }
}
