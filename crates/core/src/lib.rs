//! Soil Conductivity Core Library
//!
//! Reference calculator for a two-rod soil conductivity probe read through
//! a voltage divider and an AD converter. Converts a single raw AD reading
//! into the equivalent probe resistance, soil resistivity and soil
//! conductivity, using the probe's derived cell constant. Meant to be
//! cross-checked against the sensor firmware running the same formulas.
//!
//! The conversion chain:
//! - Cell constant from the rod geometry, derived once
//! - Resistance from the AD reading by inverting the divider equation
//! - Resistivity and conductivity by normalizing with the cell constant
//!
//! Every operation is a pure function over immutable constants; all
//! failure points of the raw formulas (full-scale readings, zero-resistance
//! shorts, non-physical geometries) surface as typed errors instead of
//! infinities.

// Core types and utilities
pub mod core_types;

// Conversion formulas
pub mod physics;

// Configuration + derived cell constant front-end
pub mod calculator;

// Re-export core types
pub use core_types::{
    Centimeters, CircuitConstants, DerivedMeasurement, FieldReference,
    MicroSiemensPerCentimeter, OhmCentimeters, Ohms, PerCentimeter, ProbeGeometry,
};

// Re-export the conversion formulas and their error type
pub use physics::{
    compensate_to_reference, conductivity_from_reading, derive_cell_constant, expected_reading,
    resistance_from_reading, resistivity_from_reading, MeasurementError,
    REFERENCE_TEMPERATURE_C, TEMPERATURE_COEFFICIENT_PER_C,
};

pub use calculator::ConductivityCalculator;
