use std::fmt;

use uom::si::{
    f64::{Time, Velocity},
    time::hour,
    velocity::meter_per_second,
};

use crate::support::units::{
    SECONDS_PER_DAY, SolidsLoadingRate, WeirLoadingRate, cubic_meters_per_meter_day,
    kilograms_per_square_meter_day, meters_per_day,
};

/// Inclusive bounds on a design value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DesignRange<Q> {
    pub min: Q,
    pub max: Q,
}

impl<Q: PartialOrd> DesignRange<Q> {
    #[must_use]
    pub fn new(min: Q, max: Q) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, value: &Q) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Typical design ranges for a primary clarifier.
///
/// The defaults are common textbook values. A design outside them is still
/// computed, with a [`DesignWarning`] for each value that falls outside.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DesignRanges {
    /// Surface overflow velocity at average flow, 24 to 60 m/d.
    pub overflow_velocity: DesignRange<Velocity>,

    /// Hydraulic detention time, 1.5 to 2.5 h.
    pub detention_time: DesignRange<Time>,

    /// Solids loading rate, 10 to 40 kg/(m²·d).
    pub solids_loading_rate: DesignRange<SolidsLoadingRate>,

    /// Weir loading rate, 125 to 500 m³/(m·d).
    pub weir_loading_rate: DesignRange<WeirLoadingRate>,
}

impl Default for DesignRanges {
    fn default() -> Self {
        Self {
            overflow_velocity: DesignRange::new(meters_per_day(24.0), meters_per_day(60.0)),
            detention_time: DesignRange::new(Time::new::<hour>(1.5), Time::new::<hour>(2.5)),
            solids_loading_rate: DesignRange::new(
                kilograms_per_square_meter_day(10.0),
                kilograms_per_square_meter_day(40.0),
            ),
            weir_loading_rate: DesignRange::new(
                cubic_meters_per_meter_day(125.0),
                cubic_meters_per_meter_day(500.0),
            ),
        }
    }
}

impl DesignRanges {
    /// Returns a warning for each value outside its range.
    ///
    /// The weir loading rate is only checked when it is known.
    #[must_use]
    pub fn check(
        &self,
        overflow_velocity: Velocity,
        detention_time: Time,
        solids_loading_rate: SolidsLoadingRate,
        weir_loading_rate: Option<WeirLoadingRate>,
    ) -> Vec<DesignWarning> {
        let mut warnings = Vec::new();

        if !self.overflow_velocity.contains(&overflow_velocity) {
            warnings.push(DesignWarning::OverflowVelocity {
                value: overflow_velocity,
                range: self.overflow_velocity,
            });
        }
        if !self.detention_time.contains(&detention_time) {
            warnings.push(DesignWarning::DetentionTime {
                value: detention_time,
                range: self.detention_time,
            });
        }
        if !self.solids_loading_rate.contains(&solids_loading_rate) {
            warnings.push(DesignWarning::SolidsLoadingRate {
                value: solids_loading_rate,
                range: self.solids_loading_rate,
            });
        }
        if let Some(wlr) = weir_loading_rate.filter(|wlr| !self.weir_loading_rate.contains(wlr)) {
            warnings.push(DesignWarning::WeirLoadingRate {
                value: wlr,
                range: self.weir_loading_rate,
            });
        }

        warnings
    }
}

/// A design value outside its typical range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DesignWarning {
    OverflowVelocity {
        value: Velocity,
        range: DesignRange<Velocity>,
    },
    DetentionTime {
        value: Time,
        range: DesignRange<Time>,
    },
    SolidsLoadingRate {
        value: SolidsLoadingRate,
        range: DesignRange<SolidsLoadingRate>,
    },
    WeirLoadingRate {
        value: WeirLoadingRate,
        range: DesignRange<WeirLoadingRate>,
    },
}

impl fmt::Display for DesignWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let daily = |si: f64| si * SECONDS_PER_DAY;
        let (label, value, min, max, unit) = match self {
            Self::OverflowVelocity { value, range } => (
                "surface overflow rate",
                daily(value.get::<meter_per_second>()),
                daily(range.min.get::<meter_per_second>()),
                daily(range.max.get::<meter_per_second>()),
                "m/d",
            ),
            Self::DetentionTime { value, range } => (
                "detention time",
                value.get::<hour>(),
                range.min.get::<hour>(),
                range.max.get::<hour>(),
                "h",
            ),
            Self::SolidsLoadingRate { value, range } => (
                "solids loading rate",
                daily(value.value),
                daily(range.min.value),
                daily(range.max.value),
                "kg/(m²·d)",
            ),
            Self::WeirLoadingRate { value, range } => (
                "weir loading rate",
                daily(value.value),
                daily(range.min.value),
                daily(range.max.value),
                "m³/(m·d)",
            ),
        };
        write!(
            f,
            "{label} of {value:.2} {unit} is outside the typical range {min:.1} to {max:.1} {unit}"
        )
    }
}
