use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// One passenger seat, located by its arm from the reference datum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatConfig {
    /// Seat label as printed on the cabin map, e.g. `"2B"`.
    pub seat_number: String,
    /// Arm of the seat in metres.
    pub arm: f64,
    /// Certified maximum occupant weight for this seat.
    pub max_weight_kg: f64,
}

/// One baggage or cargo compartment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompartmentConfig {
    pub name: String,
    pub capacity_kg: f64,
    pub arm: f64,
}

/// Static weight & balance data of one airframe.
///
/// The configuration is read-only for the duration of an optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftConfig {
    /// Registration or fleet id.
    pub id: String,
    pub empty_weight_kg: f64,
    pub empty_arm: f64,
    /// Weight used for the pilot when a flight does not report one.
    pub pilot_standard_weight_kg: f64,
    pub pilot_arm: f64,
    pub fuel_arm: f64,
    /// Maximum takeoff weight.
    pub mtow_kg: f64,
    /// Forward CG limit.
    pub cg_min: f64,
    /// Aft CG limit.
    pub cg_max: f64,
    pub seats: Vec<SeatConfig>,
    pub compartments: Vec<CompartmentConfig>,
    /// Number of sellable seats.
    pub seat_count: usize,
}

/// Structural problems that make an [`AircraftConfig`] unusable.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum AircraftConfigError {
    NoCompartments,
    InvalidCgEnvelope,
    SeatCountMismatch,
    NonPositiveMtow,
    NonPositiveEmptyWeight,
}

impl std::error::Error for AircraftConfigError {}

impl AircraftConfig {
    /// Checks the invariants every engine entry point relies on.
    ///
    /// # Returns
    /// * `Ok(())` if the configuration describes a usable airframe.
    /// * `Err(AircraftConfigError)` naming the first violated invariant otherwise.
    pub fn validate(&self) -> Result<(), AircraftConfigError> {
        if self.compartments.is_empty() {
            return Err(AircraftConfigError::NoCompartments);
        }
        if self.cg_min.is_nan() || self.cg_max.is_nan() || self.cg_min >= self.cg_max {
            return Err(AircraftConfigError::InvalidCgEnvelope);
        }
        if self.seat_count != self.seats.len() {
            return Err(AircraftConfigError::SeatCountMismatch);
        }
        if self.mtow_kg.is_nan() || self.mtow_kg <= 0.0 {
            return Err(AircraftConfigError::NonPositiveMtow);
        }
        if self.empty_weight_kg.is_nan() || self.empty_weight_kg <= 0.0 {
            return Err(AircraftConfigError::NonPositiveEmptyWeight);
        }
        Ok(())
    }

    pub fn seat(&self, seat_number: &str) -> Option<&SeatConfig> {
        self.seats.iter().find(|s| s.seat_number == seat_number)
    }

    pub fn compartment_index(&self, name: &str) -> Option<usize> {
        self.compartments.iter().position(|c| c.name == name)
    }
}
