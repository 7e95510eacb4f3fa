//! Measurement circuit constants

use serde::{Deserialize, Serialize};

use super::units::Ohms;

/// Fixed electrical constants of the measurement circuit
///
/// The probe sits in series with a reference resistor `R1`; the AD
/// converter samples the voltage across `R1`, so a reading of 0 means no
/// current limiting by the probe (a short) and a reading at full scale
/// means the full supply drops across `R1`. Configured once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitConstants {
    /// Series reference resistance `R1`
    pub series_resistance: Ohms,
    /// Full-scale AD value (e.g. 1023 for a 10-bit converter)
    pub ad_full_scale: u32,
}

impl CircuitConstants {
    /// The reference circuit: 2200 Ω series resistor, 10-bit AD converter
    pub const REFERENCE: CircuitConstants = CircuitConstants {
        series_resistance: Ohms::new(2200.0),
        ad_full_scale: 1023,
    };

    /// Create circuit constants. Asserts both values are strictly positive.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(series_resistance: f64, ad_full_scale: u32) -> Self {
        assert!(
            series_resistance > 0.0,
            "CircuitConstants::new: series resistance must be positive"
        );
        assert!(
            ad_full_scale > 0,
            "CircuitConstants::new: AD full scale must be positive"
        );
        CircuitConstants {
            series_resistance: Ohms::new(series_resistance),
            ad_full_scale,
        }
    }
}

impl Default for CircuitConstants {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_circuit() {
        let circuit = CircuitConstants::default();
        assert_eq!(circuit.series_resistance.value(), 2200.0);
        assert_eq!(circuit.ad_full_scale, 1023);
    }

    #[test]
    #[should_panic(expected = "AD full scale must be positive")]
    fn test_zero_full_scale_rejected() {
        let _ = CircuitConstants::new(2200.0, 0);
    }
}
