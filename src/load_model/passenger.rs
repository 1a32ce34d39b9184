use super::Manifested;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Boarding priority of a passenger. Declaration order is boarding order,
/// so sorting ascending puts evacuations first.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PassengerPriority {
    Evac,
    Medical,
    FirstClass,
    #[default]
    Normal,
}

/// Body weight of a passenger as reported at check-in.
///
/// Resolved once when the manifest is read: either a scale reading or the
/// configured standard weight, never an ad-hoc null check at the use site.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum PassengerWeight {
    Actual(f64),
    #[default]
    Standard,
}

impl From<Option<f64>> for PassengerWeight {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(kg) => PassengerWeight::Actual(kg),
            None => PassengerWeight::Standard,
        }
    }
}

impl From<PassengerWeight> for Option<f64> {
    fn from(value: PassengerWeight) -> Self {
        match value {
            PassengerWeight::Actual(kg) => Some(kg),
            PassengerWeight::Standard => None,
        }
    }
}

impl PassengerWeight {
    pub fn resolve(self, standard_kg: f64) -> f64 {
        match self {
            PassengerWeight::Actual(kg) => kg,
            PassengerWeight::Standard => standard_kg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerData {
    pub id: String,
    #[serde(rename = "weightKg", default)]
    pub weight: PassengerWeight,
    #[serde(default)]
    pub baggage_weight_kg: f64,
    pub destination: String,
    #[serde(default)]
    pub priority: PassengerPriority,
    /// Seat taken at check-in, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg: Option<u32>,
}

impl PassengerData {
    /// Body weight used for balance, falling back to `standard_kg`.
    pub fn effective_weight(&self, standard_kg: f64) -> f64 { self.weight.resolve(standard_kg) }
}

impl Manifested for PassengerData {
    fn id(&self) -> &str { &self.id }
    fn destination(&self) -> &str { &self.destination }
}
