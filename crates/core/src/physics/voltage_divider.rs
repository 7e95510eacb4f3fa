//! Voltage-divider inversion
//!
//! The probe forms a voltage divider with the series resistor `R1`, and
//! the AD converter samples the voltage across `R1` linearly. Inverting
//! the divider equation recovers the equivalent probe resistance from the
//! raw AD code.

use crate::core_types::{CircuitConstants, Ohms};

use super::MeasurementError;

/// Recover the equivalent probe resistance (Ω) from a raw AD code
///
/// # Formula
/// ```text
/// R = R1 × a / (AD_max - a)
/// ```
///
/// Where:
/// - **R1** = series resistance (Ω)
/// - **a** = raw AD reading
/// - **`AD_max`** = full-scale AD value
///
/// A reading of 0 yields exactly 0 Ω: a short across the probe, which is a
/// legitimate measurement, not an error.
///
/// # Errors
/// - [`MeasurementError::FullScaleReading`] when `a == AD_max` (the divider
///   denominator is zero)
/// - [`MeasurementError::ReadingOutOfRange`] when `a > AD_max`
pub fn resistance_from_reading(
    reading: u32,
    circuit: &CircuitConstants,
) -> Result<Ohms, MeasurementError> {
    let full_scale = circuit.ad_full_scale;
    if reading > full_scale {
        return Err(MeasurementError::ReadingOutOfRange {
            reading,
            full_scale,
        });
    }
    if reading == full_scale {
        return Err(MeasurementError::FullScaleReading { full_scale });
    }

    let reading = f64::from(reading);
    let denominator = f64::from(full_scale) - reading;
    Ok(Ohms::new(
        circuit.series_resistance.value() * reading / denominator,
    ))
}

/// Expected AD code for a known probe resistance
///
/// The inverse of [`resistance_from_reading`]:
///
/// ```text
/// a = R × AD_max / (R + R1)
/// ```
///
/// Returned as a real number (the AD converter would quantize it). Useful
/// for choosing `R1` so the readings of a given substrate land in a
/// comfortable part of the AD range, and for consistency checks against
/// the forward conversion.
pub fn expected_reading(resistance: Ohms, circuit: &CircuitConstants) -> f64 {
    resistance.value() * f64::from(circuit.ad_full_scale)
        / (resistance.value() + circuit.series_resistance.value())
}
