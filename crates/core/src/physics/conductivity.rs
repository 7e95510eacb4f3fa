//! Resistivity and conductivity from a raw AD reading
//!
//! Both conversions go through the voltage-divider inversion first and
//! then normalize by the probe cell constant: resistivity is the
//! resistance scaled into an intrinsic material property, conductivity is
//! its geometry-scaled reciprocal.

use crate::core_types::{CircuitConstants, MicroSiemensPerCentimeter, OhmCentimeters, PerCentimeter};

use super::voltage_divider::resistance_from_reading;
use super::MeasurementError;

/// Microsiemens per siemens, the firmware's display scaling
const MICROSIEMENS_PER_SIEMENS: f64 = 1e6;

/// Soil resistivity (Ω·cm) from a raw AD reading
///
/// # Formula
/// ```text
/// ρ = R / Kr
/// ```
///
/// A zero reading yields 0 Ω·cm (the 0 Ω short divided by the cell
/// constant), which is well-defined.
///
/// # Errors
/// - Everything [`resistance_from_reading`] raises
/// - [`MeasurementError::DegenerateCellConstant`] when `Kr == 0`
pub fn resistivity_from_reading(
    reading: u32,
    cell_constant: PerCentimeter,
    circuit: &CircuitConstants,
) -> Result<OhmCentimeters, MeasurementError> {
    let resistance = resistance_from_reading(reading, circuit)?;
    if cell_constant.value() == 0.0 {
        return Err(MeasurementError::DegenerateCellConstant);
    }

    Ok(resistance / cell_constant)
}

/// Soil conductivity (µS/cm) from a raw AD reading
///
/// # Formula
/// ```text
/// g = (Kr / R) × 1e6
/// ```
///
/// The cell constant turns the raw conductance `1/R` into a bulk material
/// property per centimeter; the `1e6` factor converts siemens to
/// microsiemens to match the firmware display convention.
///
/// # Errors
/// - Everything [`resistance_from_reading`] raises
/// - [`MeasurementError::ShortCircuitReading`] when the reading is 0: the
///   recovered resistance is 0 Ω and its reciprocal is undefined
pub fn conductivity_from_reading(
    reading: u32,
    cell_constant: PerCentimeter,
    circuit: &CircuitConstants,
) -> Result<MicroSiemensPerCentimeter, MeasurementError> {
    let resistance = resistance_from_reading(reading, circuit)?;
    if resistance.value() == 0.0 {
        return Err(MeasurementError::ShortCircuitReading);
    }

    let conductance = cell_constant.value() / resistance.value();
    Ok(MicroSiemensPerCentimeter::new(
        conductance * MICROSIEMENS_PER_SIEMENS,
    ))
}
