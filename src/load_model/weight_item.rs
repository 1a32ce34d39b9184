use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemCategory {
    Empty,
    Pilot,
    Fuel,
    Passenger,
    Baggage,
    Freight,
    Mail,
}

/// A single contributor to the load sheet. Built fresh by every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightItem {
    pub id: String,
    pub category: ItemCategory,
    pub weight_kg: f64,
    pub arm: f64,
    pub moment: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl WeightItem {
    pub fn new(id: impl Into<String>, category: ItemCategory, weight_kg: f64, arm: f64) -> Self {
        Self {
            id: id.into(),
            category,
            weight_kg,
            arm,
            moment: weight_kg * arm,
            compartment: None,
            destination: None,
        }
    }

    #[must_use]
    pub fn in_compartment(mut self, name: &str) -> Self {
        self.compartment = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn bound_for(mut self, destination: &str) -> Self {
        self.destination = Some(destination.to_string());
        self
    }
}
