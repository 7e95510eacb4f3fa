//! Calculator front-end over the conversion formulas
//!
//! Holds the immutable probe and circuit configuration plus the one value
//! that is worth precomputing, the cell constant. Everything else is
//! computed freshly per reading.

use tracing::{debug, trace};

use crate::core_types::{
    CircuitConstants, DerivedMeasurement, MicroSiemensPerCentimeter, OhmCentimeters, Ohms,
    PerCentimeter, ProbeGeometry,
};
use crate::physics::{
    conductivity_from_reading, derive_cell_constant, resistance_from_reading,
    resistivity_from_reading, MeasurementError,
};

/// Stateless soil-conductivity calculator for one probe/circuit pairing
///
/// All methods take `&self` and touch only immutable configuration, so a
/// single instance can be shared freely across threads without
/// coordination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductivityCalculator {
    geometry: ProbeGeometry,
    circuit: CircuitConstants,
    cell_constant: PerCentimeter,
}

impl ConductivityCalculator {
    /// Build a calculator, deriving the cell constant from the geometry
    ///
    /// # Errors
    /// [`MeasurementError::NonPhysicalGeometry`] when the geometry has no
    /// defined cell constant (see [`derive_cell_constant`]).
    pub fn new(
        geometry: ProbeGeometry,
        circuit: CircuitConstants,
    ) -> Result<Self, MeasurementError> {
        let cell_constant = derive_cell_constant(&geometry)?;
        debug!(
            cell_constant = cell_constant.value(),
            series_resistance = circuit.series_resistance.value(),
            ad_full_scale = circuit.ad_full_scale,
            "derived probe cell constant"
        );

        Ok(Self {
            geometry,
            circuit,
            cell_constant,
        })
    }

    /// The configured probe geometry
    #[must_use]
    pub fn geometry(&self) -> ProbeGeometry {
        self.geometry
    }

    /// The configured circuit constants
    #[must_use]
    pub fn circuit(&self) -> CircuitConstants {
        self.circuit
    }

    /// The precomputed cell constant (1/cm)
    #[must_use]
    pub fn cell_constant(&self) -> PerCentimeter {
        self.cell_constant
    }

    /// Equivalent probe resistance (Ω) for a raw AD reading
    ///
    /// # Errors
    /// See [`resistance_from_reading`].
    pub fn resistance(&self, reading: u32) -> Result<Ohms, MeasurementError> {
        resistance_from_reading(reading, &self.circuit)
    }

    /// Soil resistivity (Ω·cm) for a raw AD reading
    ///
    /// # Errors
    /// See [`resistivity_from_reading`].
    pub fn resistivity(&self, reading: u32) -> Result<OhmCentimeters, MeasurementError> {
        resistivity_from_reading(reading, self.cell_constant, &self.circuit)
    }

    /// Soil conductivity (µS/cm) for a raw AD reading
    ///
    /// # Errors
    /// See [`conductivity_from_reading`].
    pub fn conductivity(
        &self,
        reading: u32,
    ) -> Result<MicroSiemensPerCentimeter, MeasurementError> {
        conductivity_from_reading(reading, self.cell_constant, &self.circuit)
    }

    /// All derived quantities for one reading
    ///
    /// Since the conductivity leg rejects a zero reading, `measure` only
    /// succeeds for readings in `[1, AD_max - 1]`; callers that want the
    /// resistance of a short take [`ConductivityCalculator::resistance`]
    /// directly.
    ///
    /// # Errors
    /// The union of the per-quantity error conditions.
    pub fn measure(&self, reading: u32) -> Result<DerivedMeasurement, MeasurementError> {
        trace!(reading, "deriving measurement");
        Ok(DerivedMeasurement {
            resistance: self.resistance(reading)?,
            resistivity: self.resistivity(reading)?,
            conductivity: self.conductivity(reading)?,
        })
    }
}
