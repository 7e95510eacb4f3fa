//! Temperature normalization of conductivity readings
//!
//! Soil conductivity rises roughly 2 % to 3 % per °C, so readings taken at
//! different soil temperatures are only comparable after normalizing to a
//! common reference temperature.

use crate::core_types::MicroSiemensPerCentimeter;

use super::MeasurementError;

/// Reference temperature conductivities are normalized to (°C)
pub const REFERENCE_TEMPERATURE_C: f64 = 25.0;

/// Default linear temperature coefficient (2 %/°C, low end of the 2-3 % range)
pub const TEMPERATURE_COEFFICIENT_PER_C: f64 = 0.02;

/// Normalize a measured conductivity to the 25 °C reference
///
/// # Formula
/// ```text
/// g25 = g / (1 + k × (T - 25))
/// ```
///
/// Where:
/// - **g** = conductivity measured at soil temperature T (µS/cm)
/// - **k** = linear temperature coefficient (1/°C)
/// - **T** = soil temperature at measurement time (°C)
///
/// # Errors
/// [`MeasurementError::InvalidTemperatureCompensation`] when the factor
/// `1 + k(T - 25)` is not positive (temperatures far enough below the
/// reference that the linear model breaks down). The raw value is never
/// silently passed through.
pub fn compensate_to_reference(
    conductivity: MicroSiemensPerCentimeter,
    soil_temperature_c: f64,
    coefficient_per_c: f64,
) -> Result<MicroSiemensPerCentimeter, MeasurementError> {
    let factor = 1.0 + coefficient_per_c * (soil_temperature_c - REFERENCE_TEMPERATURE_C);
    if factor <= 0.0 {
        return Err(MeasurementError::InvalidTemperatureCompensation { factor });
    }

    Ok(MicroSiemensPerCentimeter::new(
        conductivity.value() / factor,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_temperature_is_identity() {
        let g = MicroSiemensPerCentimeter::new(45.0);
        let g25 =
            compensate_to_reference(g, REFERENCE_TEMPERATURE_C, TEMPERATURE_COEFFICIENT_PER_C)
                .unwrap();
        assert_eq!(g25, g);
    }

    #[test]
    fn test_warm_soil_reads_high() {
        // 1100 µS/cm at 30 °C normalizes to 1000 µS/cm at 25 °C with k = 0.02
        let g = MicroSiemensPerCentimeter::new(1100.0);
        let g25 = compensate_to_reference(g, 30.0, TEMPERATURE_COEFFICIENT_PER_C).unwrap();
        assert_relative_eq!(g25.value(), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_cold_soil_reads_low() {
        let g = MicroSiemensPerCentimeter::new(900.0);
        let g25 = compensate_to_reference(g, 20.0, TEMPERATURE_COEFFICIENT_PER_C).unwrap();
        assert_relative_eq!(g25.value(), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_non_positive_factor_rejected() {
        // 1 + 0.02 × (-30 - 25) = -0.1
        let g = MicroSiemensPerCentimeter::new(45.0);
        let err =
            compensate_to_reference(g, -30.0, TEMPERATURE_COEFFICIENT_PER_C).unwrap_err();
        assert!(matches!(
            err,
            MeasurementError::InvalidTemperatureCompensation { factor } if factor <= 0.0
        ));
    }
}
