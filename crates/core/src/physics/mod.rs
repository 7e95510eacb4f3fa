//! Electrical conversion formulas for the two-rod probe model
//!
//! Every operation here is a one-shot pure computation over immutable
//! configuration constants: no state machine, no retries, no I/O. Failures
//! are definitional (out-of-range input, non-physical geometry) and are
//! surfaced immediately as a typed [`MeasurementError`] instead of letting
//! an unguarded division or logarithm propagate infinities or NaN.

pub mod cell_constant;
pub mod conductivity;
pub mod temperature;
pub mod voltage_divider;

pub use cell_constant::derive_cell_constant;
pub use conductivity::{conductivity_from_reading, resistivity_from_reading};
pub use temperature::{
    compensate_to_reference, REFERENCE_TEMPERATURE_C, TEMPERATURE_COEFFICIENT_PER_C,
};
pub use voltage_divider::{expected_reading, resistance_from_reading};

/// Errors raised by the probe conversion formulas
///
/// Each variant carries the offending input so callers can report it; the
/// library itself never prints and never exits the process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasurementError {
    /// Geometry with `2W/D - 1 <= 0`: the cell-constant logarithm is undefined
    NonPhysicalGeometry {
        /// The non-positive logarithm argument `2W/D - 1`
        log_argument: f64,
    },
    /// Cell constant is exactly zero and cannot divide a resistance
    DegenerateCellConstant,
    /// Reading sits at the AD full-scale value: the divider denominator is zero
    FullScaleReading {
        /// Configured full-scale AD value
        full_scale: u32,
    },
    /// Reading lies beyond the AD converter's range
    ReadingOutOfRange {
        /// The offending reading
        reading: u32,
        /// Configured full-scale AD value
        full_scale: u32,
    },
    /// Zero reading means 0 Ω across the probe: conductance is undefined
    ShortCircuitReading,
    /// Temperature compensation factor `1 + k(T - Tref)` is not positive
    InvalidTemperatureCompensation {
        /// The non-positive compensation factor
        factor: f64,
    },
}

impl std::fmt::Display for MeasurementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementError::NonPhysicalGeometry { log_argument } => write!(
                f,
                "Non-physical probe geometry: logarithm argument 2W/D - 1 = {log_argument} is not positive"
            ),
            MeasurementError::DegenerateCellConstant => {
                write!(f, "Degenerate geometry: cell constant is zero")
            }
            MeasurementError::FullScaleReading { full_scale } => write!(
                f,
                "Reading at AD full scale ({full_scale}): divider denominator is zero"
            ),
            MeasurementError::ReadingOutOfRange {
                reading,
                full_scale,
            } => write!(
                f,
                "Reading {reading} outside the AD range [0, {full_scale})"
            ),
            MeasurementError::ShortCircuitReading => {
                write!(f, "Zero reading (0 Ω across the probe): conductance is undefined")
            }
            MeasurementError::InvalidTemperatureCompensation { factor } => write!(
                f,
                "Temperature compensation factor {factor} is not positive"
            ),
        }
    }
}

impl std::error::Error for MeasurementError {}
