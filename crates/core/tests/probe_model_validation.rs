//! Probe Model Validation Test Suite
//!
//! End-to-end validation of the conversion chain against values computed
//! from the model formulas at the reference configuration, plus the
//! numeric properties the chain must hold across the whole AD code range.
//!
//! # Test Categories
//! 1. Reference configuration golden values
//! 2. Divider inversion properties (monotonicity, exact zero, round trip)
//! 3. Conductivity/resistivity consistency identities
//! 4. Error taxonomy coverage
//! 5. Temperature normalization
//! 6. Field reference plausibility
//!
//! Run tests with: `cargo test --test probe_model_validation`

use approx::assert_relative_eq;
use soil_conductivity_core::{
    compensate_to_reference, expected_reading, CircuitConstants, ConductivityCalculator,
    FieldReference, MeasurementError, Ohms, ProbeGeometry, TEMPERATURE_COEFFICIENT_PER_C,
};

fn reference_calculator() -> ConductivityCalculator {
    ConductivityCalculator::new(ProbeGeometry::REFERENCE, CircuitConstants::REFERENCE)
        .expect("reference geometry is physical")
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 1: REFERENCE CONFIGURATION GOLDEN VALUES
// ═══════════════════════════════════════════════════════════════════════════════

/// The reference probe (L = 7.5 cm, D = 0.5 cm, W = 1.1 cm) has
/// Kr = ln(2·1.1/0.5 - 1) / (7.5·π) = 0.0519386… 1/cm
#[test]
fn test_reference_cell_constant() {
    let calculator = reference_calculator();
    assert_relative_eq!(
        calculator.cell_constant().value(),
        0.05193864244722068,
        max_relative = 1e-12
    );
    // The value the report prints: Kr·1e6 to three decimals
    assert_eq!(
        format!("{:.3}", calculator.cell_constant().value() * 1e6),
        "51938.642"
    );
}

/// Reading 394 on the reference circuit (R1 = 2200 Ω, 10-bit AD)
#[test]
fn test_reference_reading_full_chain() {
    let measurement = reference_calculator().measure(394).expect("mid-range reading");

    assert_relative_eq!(
        measurement.resistance.value(),
        1378.060413354531,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        measurement.resistivity.value(),
        26532.468859864726,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        measurement.conductivity.value(),
        37.6896701653228,
        max_relative = 1e-12
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 2: DIVIDER INVERSION PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════════

/// Resistance is strictly increasing and strictly positive on `[1, AD_max - 1]`
#[test]
fn test_resistance_monotonic_over_full_range() {
    let calculator = reference_calculator();
    let mut previous = calculator.resistance(1).unwrap();
    assert!(previous.value() > 0.0);

    for reading in 2..1023 {
        let current = calculator.resistance(reading).unwrap();
        assert!(
            current > previous,
            "resistance not strictly increasing at reading {reading}"
        );
        previous = current;
    }
}

/// A zero reading recovers exactly 0 Ω, with no rounding slack
#[test]
fn test_zero_reading_exact_zero_resistance() {
    assert_eq!(reference_calculator().resistance(0).unwrap().value(), 0.0);
}

/// Feeding the recovered resistance back through the inverse divider
/// reproduces the reading within 1e-9 relative over the whole code range
#[test]
fn test_divider_round_trip_over_full_range() {
    let calculator = reference_calculator();
    let circuit = calculator.circuit();
    for reading in 1..1023 {
        let resistance = calculator.resistance(reading).unwrap();
        let recovered = expected_reading(resistance, &circuit);
        assert_relative_eq!(recovered, f64::from(reading), max_relative = 1e-9);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 3: CONSISTENCY IDENTITIES
// ═══════════════════════════════════════════════════════════════════════════════

/// g = Kr·1e6 / R and ρ = R / Kr for every non-failing reading
#[test]
fn test_conductivity_resistivity_identities() {
    let calculator = reference_calculator();
    let kr = calculator.cell_constant().value();

    for reading in 1..1023 {
        let measurement = calculator.measure(reading).unwrap();
        let resistance = measurement.resistance.value();
        assert_relative_eq!(
            measurement.conductivity.value(),
            kr * 1e6 / resistance,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            measurement.resistivity.value(),
            resistance / kr,
            max_relative = 1e-12
        );
    }
}

/// Wetter soil conducts more and reads lower: conductivity must fall
/// monotonically as the reading climbs
#[test]
fn test_conductivity_monotonically_decreasing() {
    let calculator = reference_calculator();
    let mut previous = calculator.conductivity(1).unwrap();
    for reading in 2..1023 {
        let current = calculator.conductivity(reading).unwrap();
        assert!(
            current < previous,
            "conductivity not strictly decreasing at reading {reading}"
        );
        previous = current;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 4: ERROR TAXONOMY COVERAGE
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_every_failure_point_is_typed() {
    let calculator = reference_calculator();

    // Full-scale reading: divider denominator is zero
    assert_eq!(
        calculator.resistance(1023).unwrap_err(),
        MeasurementError::FullScaleReading { full_scale: 1023 }
    );

    // Beyond full scale
    assert_eq!(
        calculator.resistance(4096).unwrap_err(),
        MeasurementError::ReadingOutOfRange {
            reading: 4096,
            full_scale: 1023,
        }
    );

    // Zero reading in the conductivity leg
    assert_eq!(
        calculator.conductivity(0).unwrap_err(),
        MeasurementError::ShortCircuitReading
    );

    // Overlapping rods have no defined cell constant
    let overlap = ConductivityCalculator::new(
        ProbeGeometry::new(7.5, 0.5, 0.2),
        CircuitConstants::REFERENCE,
    );
    assert!(matches!(
        overlap.unwrap_err(),
        MeasurementError::NonPhysicalGeometry { .. }
    ));

    // A zero cell constant (2W/D = 2) derives fine but cannot divide
    let degenerate = ConductivityCalculator::new(
        ProbeGeometry::new(7.5, 0.5, 0.5),
        CircuitConstants::REFERENCE,
    )
    .expect("zero cell constant is a valid derivation");
    assert_eq!(
        degenerate.resistivity(394).unwrap_err(),
        MeasurementError::DegenerateCellConstant
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 5: TEMPERATURE NORMALIZATION
// ═══════════════════════════════════════════════════════════════════════════════

/// A reading taken in 30 °C soil normalizes 1/1.1 lower at k = 0.02
#[test]
fn test_temperature_normalization_of_measured_conductivity() {
    let conductivity = reference_calculator().conductivity(394).unwrap();
    let normalized =
        compensate_to_reference(conductivity, 30.0, TEMPERATURE_COEFFICIENT_PER_C).unwrap();
    assert_relative_eq!(
        normalized.value(),
        conductivity.value() / 1.1,
        max_relative = 1e-12
    );

    let frozen = compensate_to_reference(conductivity, -30.0, TEMPERATURE_COEFFICIENT_PER_C);
    assert!(matches!(
        frozen.unwrap_err(),
        MeasurementError::InvalidTemperatureCompensation { .. }
    ));
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 6: FIELD REFERENCE PLAUSIBILITY
// ═══════════════════════════════════════════════════════════════════════════════

/// Every field reference conductivity corresponds to an on-scale AD code
/// of the reference probe/circuit, i.e. the anchors are actually
/// observable with the hardware they were measured on
#[test]
fn test_field_references_land_on_scale() {
    let calculator = reference_calculator();
    let kr = calculator.cell_constant().value();
    let circuit = calculator.circuit();

    for reference in FieldReference::ALL {
        // Invert g = Kr·1e6/R to the resistance this anchor implies
        let resistance = kr * 1e6 / reference.conductivity.value();
        let code = expected_reading(Ohms::new(resistance), &circuit);
        assert!(
            code > 0.0 && code < f64::from(circuit.ad_full_scale),
            "{} implies off-scale code {code:.1}",
            reference.label
        );
    }
}
