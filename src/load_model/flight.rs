use super::{AircraftConfig, FreightData, MailData, PassengerData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Case-insensitive comparison of two stop names.
///
/// Stored names are kept as entered, normalization only happens here.
pub fn destinations_match(a: &str, b: &str) -> bool { a.trim().to_lowercase() == b.trim().to_lowercase() }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub leg: u32,
    #[serde(alias = "to")]
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<DateTime<Utc>>,
}

/// A scheduled flight together with the load already committed to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightData {
    pub id: String,
    pub aircraft: AircraftConfig,
    pub departure: DateTime<Utc>,
    pub route: Vec<RouteLeg>,
    /// Reported pilot weight, the aircraft standard is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pilot_weight_kg: Option<f64>,
    #[serde(default)]
    pub fuel_weight_kg: f64,
    #[serde(default)]
    pub passengers: Vec<PassengerData>,
    #[serde(default)]
    pub freight: Vec<FreightData>,
    #[serde(default)]
    pub mail: Vec<MailData>,
}

impl FlightData {
    /// Whether any leg of the route ends at `destination`.
    pub fn serves(&self, destination: &str) -> bool {
        self.route.iter().any(|l| destinations_match(&l.destination, destination))
    }
}
