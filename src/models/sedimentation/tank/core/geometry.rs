use std::f64::consts::PI;

use uom::si::f64::{Area, Length};

/// Plan shape of a tank, chosen before its size is known.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TankShape {
    Rectangular { length_to_width_ratio: f64 },
    Circular,
}

impl Default for TankShape {
    /// A rectangular tank four times as long as it is wide.
    fn default() -> Self {
        Self::Rectangular {
            length_to_width_ratio: 4.0,
        }
    }
}

impl TankShape {
    /// Sizes this shape to the given surface area.
    #[must_use]
    pub fn geometry(self, surface_area: Area) -> TankGeometry {
        match self {
            Self::Rectangular {
                length_to_width_ratio,
            } => {
                let width: Length = (surface_area / length_to_width_ratio).sqrt();
                TankGeometry::Rectangular {
                    length: width * length_to_width_ratio,
                    width,
                }
            }
            Self::Circular => TankGeometry::Circular {
                diameter: (surface_area * 4.0 / PI).sqrt(),
            },
        }
    }
}

/// Plan dimensions of a sized tank.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TankGeometry {
    Rectangular { length: Length, width: Length },
    Circular { diameter: Length },
}

impl TankGeometry {
    #[must_use]
    pub fn surface_area(&self) -> Area {
        match *self {
            Self::Rectangular { length, width } => length * width,
            Self::Circular { diameter } => diameter * diameter * PI / 4.0,
        }
    }
}
