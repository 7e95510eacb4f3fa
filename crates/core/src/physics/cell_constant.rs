//! Cell constant of a two-parallel-rod probe
//!
//! The cell constant relates the resistance measured between the rods to
//! the resistivity of the medium around them. The derivation assumes a
//! uniform field distribution between the electrodes and ignores end
//! effects and inhomogeneity of the soil, which is adequate for the
//! comparative measurements the probe is used for.

use std::f64::consts::PI;

use crate::core_types::{PerCentimeter, ProbeGeometry};

use super::MeasurementError;

/// Derive the probe cell constant (1/cm)
///
/// # Formula
/// ```text
/// Kr = ln(2W/D - 1) / (L × π)
/// ```
///
/// Where:
/// - **L** = rod length (cm)
/// - **D** = rod diameter (cm)
/// - **W** = rod separation (cm)
///
/// The result is finite with the sign of `ln(2W/D - 1)`: positive for the
/// usual `2W > 2D` spacings, negative when the rods sit closer than a
/// diameter apart, and exactly zero at `2W/D = 2`. A zero cell constant is
/// a valid derivation; it only becomes an error when later used as a
/// divisor.
///
/// # Errors
/// [`MeasurementError::NonPhysicalGeometry`] when `2W/D - 1 <= 0`, i.e.
/// the rods would overlap and the logarithm is undefined.
pub fn derive_cell_constant(
    geometry: &ProbeGeometry,
) -> Result<PerCentimeter, MeasurementError> {
    let log_argument =
        2.0 * geometry.rod_separation.value() / geometry.rod_diameter.value() - 1.0;
    if log_argument <= 0.0 {
        return Err(MeasurementError::NonPhysicalGeometry { log_argument });
    }

    Ok(PerCentimeter::new(
        log_argument.ln() / (geometry.rod_length.value() * PI),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_probe_cell_constant() {
        let kr = derive_cell_constant(&ProbeGeometry::REFERENCE).unwrap();

        // ln(2·1.1/0.5 - 1) / (7.5·π)
        assert_relative_eq!(kr.value(), 0.05193864244722068, max_relative = 1e-12);
    }

    #[test]
    fn test_sign_follows_log_argument() {
        // 2W/D - 1 = 3.4 > 1: positive
        let wide = derive_cell_constant(&ProbeGeometry::REFERENCE).unwrap();
        assert!(wide.value() > 0.0);

        // 2·0.3/0.5 - 1 = 0.2 < 1: negative
        let narrow = derive_cell_constant(&ProbeGeometry::new(7.5, 0.5, 0.3)).unwrap();
        assert!(narrow.value() < 0.0);
    }

    #[test]
    fn test_cell_constant_is_finite_for_valid_geometries() {
        for separation in [0.3, 0.5, 1.1, 2.0, 10.0] {
            let geometry = ProbeGeometry::new(7.5, 0.5, separation);
            let kr = derive_cell_constant(&geometry).unwrap();
            assert!(kr.value().is_finite(), "Kr not finite for W = {separation}");
        }
    }

    #[test]
    fn test_equal_separation_and_diameter_gives_zero() {
        // 2W/D = 2 makes the logarithm argument exactly 1, so Kr = ln(1) = 0
        let geometry = ProbeGeometry::new(7.5, 0.5, 0.5);
        let kr = derive_cell_constant(&geometry).unwrap();
        assert_eq!(kr.value(), 0.0);
    }

    #[test]
    fn test_overlapping_rods_rejected() {
        // 2·0.2/0.5 - 1 = -0.2: the rods would overlap
        let geometry = ProbeGeometry::new(7.5, 0.5, 0.2);
        let err = derive_cell_constant(&geometry).unwrap_err();
        assert!(matches!(
            err,
            MeasurementError::NonPhysicalGeometry { log_argument } if log_argument < 0.0
        ));
    }
}
