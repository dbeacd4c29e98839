use uom::{
    si::{
        ISQ, Quantity, SI,
        area::square_meter,
        diffusion_coefficient::square_meter_per_second,
        f64::{Area, DiffusionCoefficient, Length, MassRate, Velocity, VolumeRate},
        length::meter,
        mass_rate::kilogram_per_second,
        velocity::meter_per_second,
        volume_rate::cubic_meter_per_second,
    },
    typenum::{N1, N2, P1, P2, Z0},
};

/// Seconds in one day, for rates quoted per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Kinematic viscosity, m²/s in SI.
///
/// `uom` names this dimension after diffusion; viscosity is the same quantity.
pub type KinematicViscosity = DiffusionCoefficient;

/// Weir loading rate (flow per unit weir length), m³/(m·s) in SI.
///
/// Shares its dimension with kinematic viscosity.
pub type WeirLoadingRate = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Solids loading rate (mass per unit area and time), kg/(m²·s) in SI.
pub type SolidsLoadingRate = Quantity<ISQ<N2, P1, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// A velocity given in m/d, the usual unit for surface overflow rates.
#[must_use]
pub fn meters_per_day(value: f64) -> Velocity {
    Velocity::new::<meter_per_second>(value / SECONDS_PER_DAY)
}

/// A flow rate given in m³/d.
#[must_use]
pub fn cubic_meters_per_day(value: f64) -> VolumeRate {
    VolumeRate::new::<cubic_meter_per_second>(value / SECONDS_PER_DAY)
}

/// A solids loading rate given in kg/(m²·d).
#[must_use]
pub fn kilograms_per_square_meter_day(value: f64) -> SolidsLoadingRate {
    MassRate::new::<kilogram_per_second>(value / SECONDS_PER_DAY)
        / Area::new::<square_meter>(1.0)
}

/// A weir loading rate given in m³/(m·d).
#[must_use]
pub fn cubic_meters_per_meter_day(value: f64) -> WeirLoadingRate {
    cubic_meters_per_day(value) / Length::new::<meter>(1.0)
}
