//! Derived measurement values

use serde::{Deserialize, Serialize};

use super::units::{MicroSiemensPerCentimeter, OhmCentimeters, Ohms};

/// Electrical quantities derived from a single AD reading
///
/// Computed freshly per reading and never cached: the only precomputed
/// value in the conversion chain is the probe cell constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMeasurement {
    /// Equivalent probe resistance recovered from the voltage divider
    pub resistance: Ohms,
    /// Soil resistivity, resistance normalized by the cell constant
    pub resistivity: OhmCentimeters,
    /// Soil conductivity in the firmware's display convention
    pub conductivity: MicroSiemensPerCentimeter,
}
