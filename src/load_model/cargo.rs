use super::{ItemCategory, Manifested};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

const KG_TO_LBS: f64 = 2.204_62;

/// Service class of freight and mail, highest first.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CargoPriority {
    Bypass,
    Priority,
    #[default]
    Standard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreightData {
    pub id: String,
    pub weight_kg: f64,
    pub destination: String,
    #[serde(default)]
    pub priority: CargoPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg: Option<u32>,
}

/// A mail sack. Weight is always kilograms, pounds only exist for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailData {
    pub id: String,
    pub weight_kg: f64,
    #[serde(alias = "destination")]
    pub village: String,
    #[serde(default)]
    pub priority: CargoPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg: Option<u32>,
}

impl MailData {
    pub fn weight_lbs(&self) -> f64 { self.weight_kg * KG_TO_LBS }
}

/// Common view on everything that goes into a compartment instead of a seat.
pub trait CargoItem: Manifested {
    fn weight_kg(&self) -> f64;
    fn priority(&self) -> CargoPriority;
    /// Compartment the item was already stowed in, if any.
    fn compartment(&self) -> Option<&str>;
    fn category(&self) -> ItemCategory;
}

impl Manifested for FreightData {
    fn id(&self) -> &str { &self.id }
    fn destination(&self) -> &str { &self.destination }
}

impl CargoItem for FreightData {
    fn weight_kg(&self) -> f64 { self.weight_kg }
    fn priority(&self) -> CargoPriority { self.priority }
    fn compartment(&self) -> Option<&str> { self.compartment.as_deref() }
    fn category(&self) -> ItemCategory { ItemCategory::Freight }
}

impl Manifested for MailData {
    fn id(&self) -> &str { &self.id }
    fn destination(&self) -> &str { &self.village }
}

impl CargoItem for MailData {
    fn weight_kg(&self) -> f64 { self.weight_kg }
    fn priority(&self) -> CargoPriority { self.priority }
    fn compartment(&self) -> Option<&str> { self.compartment.as_deref() }
    fn category(&self) -> ItemCategory { ItemCategory::Mail }
}
