//! Core value types

pub mod circuit;
pub mod measurement;
pub mod probe;
pub mod reference;
pub mod units;

pub use circuit::CircuitConstants;
pub use measurement::DerivedMeasurement;
pub use probe::ProbeGeometry;
pub use reference::FieldReference;
pub use units::*;
