//! Field reference conductivities
//!
//! Conductivity readings taken with the reference probe in known
//! substrates. There is a lot of dispersion in soil conductivity
//! measurements, and the soil/water mix differs with substrate structure
//! and dissolved ions (e.g. from fertilizers), so these are comparative
//! anchors rather than absolute truth: measure your own substrate dry,
//! freshly watered and fertilized to establish working references.

use serde::{Deserialize, Serialize};

use super::units::MicroSiemensPerCentimeter;

/// A known-substrate conductivity anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldReference {
    /// Substrate description
    pub label: &'static str,
    /// Conductivity measured with the reference probe
    pub conductivity: MicroSiemensPerCentimeter,
}

impl FieldReference {
    /// Water with dissolved salt
    pub const SALTED_WATER: FieldReference = FieldReference {
        label: "salted water",
        conductivity: MicroSiemensPerCentimeter::new(98.0),
    };

    /// Tap water
    pub const TAP_WATER: FieldReference = FieldReference {
        label: "tap water",
        conductivity: MicroSiemensPerCentimeter::new(45.0),
    };

    /// Potted substrate, five minutes after watering
    pub const WATERED_POT: FieldReference = FieldReference {
        label: "pot, 5 min after watering",
        conductivity: MicroSiemensPerCentimeter::new(54.0),
    };

    /// Dry potted substrate
    pub const DRY_POT: FieldReference = FieldReference {
        label: "dry pot",
        conductivity: MicroSiemensPerCentimeter::new(15.0),
    };

    /// All reference anchors, driest first
    pub const ALL: [FieldReference; 4] = [
        Self::DRY_POT,
        Self::TAP_WATER,
        Self::WATERED_POT,
        Self::SALTED_WATER,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_ordered_by_moisture_and_ions() {
        // Dry soil conducts least; dissolved salt conducts most.
        assert!(FieldReference::DRY_POT.conductivity < FieldReference::TAP_WATER.conductivity);
        assert!(FieldReference::TAP_WATER.conductivity < FieldReference::WATERED_POT.conductivity);
        assert!(
            FieldReference::WATERED_POT.conductivity < FieldReference::SALTED_WATER.conductivity
        );
    }

    #[test]
    fn test_all_is_sorted_ascending() {
        let values: Vec<f64> = FieldReference::ALL
            .iter()
            .map(|r| r.conductivity.value())
            .collect();
        let mut sorted = values.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(values, sorted);
    }
}
