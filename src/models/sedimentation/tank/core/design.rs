use uom::si::f64::{Area, Length, MassDensity, MassRate, Time, Velocity, Volume, VolumeRate};

use crate::support::units::{SolidsLoadingRate, WeirLoadingRate};

use super::{DesignWarning, TankGeometry};

/// Computed design of a sedimentation tank.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TankDesign {
    /// Surface overflow velocity at average flow, given or `depth / detention`.
    pub surface_overflow_velocity: Velocity,
    pub surface_area: Area,
    pub geometry: TankGeometry,
    pub side_water_depth: Length,
    pub detention_time: Time,
    pub volume: Volume,

    pub effluent_tss: MassDensity,
    pub effluent_bod: MassDensity,

    pub peak_flow_rate: VolumeRate,
    pub peak_overflow_velocity: Velocity,

    /// Suspended solids captured as primary sludge.
    pub sludge_mass_rate: MassRate,
    pub solids_loading_rate: SolidsLoadingRate,

    /// Flow over the effluent weir per unit length, if a weir length was given.
    pub weir_loading_rate: Option<WeirLoadingRate>,

    /// Values outside their typical ranges. Empty for a conventional design.
    pub warnings: Vec<DesignWarning>,
}
