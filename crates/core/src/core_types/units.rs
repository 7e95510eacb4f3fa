//! Semantic unit types for the probe's electrical quantities
//!
//! Newtype wrappers prevent accidental mixing of incompatible units
//! (e.g. a resistance with a resistivity, or a cell constant with a
//! conductivity).
//!
//! # Design Philosophy
//! - All types are f64-backed: this crate is a host-side reference
//!   calculator, so precision wins over footprint
//! - Implements common traits (Deref, Ord, Display, etc.)
//! - Serde support for serialization
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//! - Private inner fields with validated constructors where the quantity
//!   has a physical lower bound
//!
//! # Usage
//! ```
//! use soil_conductivity_core::core_types::units::{Centimeters, Ohms};
//!
//! let length = Centimeters::new(7.5);
//! assert!((*length - 7.5).abs() < f64::EPSILON);
//!
//! // Use standard min/max from Ord trait
//! let r1 = Ohms::new(1000.0);
//! let r2 = Ohms::new(2200.0);
//! assert_eq!(r1.min(r2), Ohms::new(1000.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, Div};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// GEOMETRY TYPES
// ============================================================================

/// Length in centimeters
///
/// Probe dimensions are specified in centimeters so the derived cell
/// constant comes out in 1/cm and conductivities in µS/cm, matching the
/// sensor firmware's display convention.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Centimeters(f64);

impl Eq for Centimeters {}

impl PartialOrd for Centimeters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Centimeters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Centimeters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Centimeters {
    /// Create a new length in centimeters. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Centimeters::new: negative length is invalid");
        Centimeters(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative length).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Centimeters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Centimeters {
    fn from(v: f64) -> Self {
        Centimeters(v)
    }
}

impl From<Centimeters> for f64 {
    fn from(c: Centimeters) -> f64 {
        c.0
    }
}

impl fmt::Display for Centimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} cm", self.0)
    }
}

// ============================================================================
// ELECTRICAL TYPES
// ============================================================================

/// Resistance in ohms
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Ohms(f64);

impl Eq for Ohms {}

impl PartialOrd for Ohms {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ohms {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Ohms {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Ohms {
    /// Create a new resistance. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Ohms::new: negative resistance is invalid");
        Ohms(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative resistance).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Ohms(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Ohms {
    fn from(v: f64) -> Self {
        Ohms(v)
    }
}

impl From<Ohms> for f64 {
    fn from(r: Ohms) -> f64 {
        r.0
    }
}

// Cross-type operation: resistance / cell constant = resistivity
impl Div<PerCentimeter> for Ohms {
    type Output = OhmCentimeters;
    fn div(self, rhs: PerCentimeter) -> OhmCentimeters {
        OhmCentimeters(self.0 / rhs.0)
    }
}

impl fmt::Display for Ohms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} Ω", self.0)
    }
}

/// Probe cell constant in 1/cm
///
/// Relates the resistance measured between the rods to the resistivity of
/// the medium they are embedded in. Unlike the other electrical types this
/// one is unvalidated: the derivation `ln(2W/D - 1) / (L·π)` legitimately
/// produces negative values for close rod spacings and exactly zero when
/// `2W/D = 2`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PerCentimeter(f64);

impl Eq for PerCentimeter {}

impl PartialOrd for PerCentimeter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PerCentimeter {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for PerCentimeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl PerCentimeter {
    /// Create a new cell constant (any finite value, sign carries meaning)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        PerCentimeter(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for PerCentimeter {
    fn from(v: f64) -> Self {
        PerCentimeter(v)
    }
}

impl From<PerCentimeter> for f64 {
    fn from(k: PerCentimeter) -> f64 {
        k.0
    }
}

impl fmt::Display for PerCentimeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} 1/cm", self.0)
    }
}

/// Resistivity in Ω·cm
///
/// Resistance normalized by the cell constant: an intrinsic material
/// property independent of the probe dimensions. Unvalidated, since a
/// negative cell constant yields a negative (non-physical but well-defined)
/// resistivity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct OhmCentimeters(f64);

impl Eq for OhmCentimeters {}

impl PartialOrd for OhmCentimeters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OhmCentimeters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for OhmCentimeters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl OhmCentimeters {
    /// Create a new resistivity
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        OhmCentimeters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for OhmCentimeters {
    fn from(v: f64) -> Self {
        OhmCentimeters(v)
    }
}

impl From<OhmCentimeters> for f64 {
    fn from(r: OhmCentimeters) -> f64 {
        r.0
    }
}

impl fmt::Display for OhmCentimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} Ω·cm", self.0)
    }
}

/// Conductivity in µS/cm
///
/// Conductance scaled by the cell constant, in the microsiemens-per-
/// centimeter convention the sensor firmware displays.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MicroSiemensPerCentimeter(f64);

impl Eq for MicroSiemensPerCentimeter {}

impl PartialOrd for MicroSiemensPerCentimeter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MicroSiemensPerCentimeter {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for MicroSiemensPerCentimeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MicroSiemensPerCentimeter {
    /// Create a new conductivity
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MicroSiemensPerCentimeter(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for MicroSiemensPerCentimeter {
    fn from(v: f64) -> Self {
        MicroSiemensPerCentimeter(v)
    }
}

impl From<MicroSiemensPerCentimeter> for f64 {
    fn from(g: MicroSiemensPerCentimeter) -> f64 {
        g.0
    }
}

impl fmt::Display for MicroSiemensPerCentimeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} µS/cm", self.0)
    }
}
