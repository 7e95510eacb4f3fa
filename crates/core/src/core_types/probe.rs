//! Two-rod probe geometry

use serde::{Deserialize, Serialize};

use super::units::Centimeters;

/// Geometry of a two-parallel-rod soil probe
///
/// The probe is a pair of parallel rods of length `L` and diameter `D`,
/// driven into the soil a distance `W` apart (all in centimeters). The
/// geometry is configured once at startup and never mutated; the cell
/// constant is derived from it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeGeometry {
    /// Rod length `L` driven into the soil
    pub rod_length: Centimeters,
    /// Rod diameter `D`
    pub rod_diameter: Centimeters,
    /// Center-to-center rod separation `W`
    pub rod_separation: Centimeters,
}

impl ProbeGeometry {
    /// The reference probe: two 7.5 cm rods of 0.5 cm diameter, 1.1 cm apart
    pub const REFERENCE: ProbeGeometry = ProbeGeometry {
        rod_length: Centimeters::new(7.5),
        rod_diameter: Centimeters::new(0.5),
        rod_separation: Centimeters::new(1.1),
    };

    /// Create a probe geometry from dimensions in centimeters.
    /// Asserts all dimensions are strictly positive.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(rod_length: f64, rod_diameter: f64, rod_separation: f64) -> Self {
        assert!(
            rod_length > 0.0,
            "ProbeGeometry::new: rod length must be positive"
        );
        assert!(
            rod_diameter > 0.0,
            "ProbeGeometry::new: rod diameter must be positive"
        );
        assert!(
            rod_separation > 0.0,
            "ProbeGeometry::new: rod separation must be positive"
        );
        ProbeGeometry {
            rod_length: Centimeters::new(rod_length),
            rod_diameter: Centimeters::new(rod_diameter),
            rod_separation: Centimeters::new(rod_separation),
        }
    }
}

impl Default for ProbeGeometry {
    fn default() -> Self {
        Self::REFERENCE
    }
}
