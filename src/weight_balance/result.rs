use crate::load_model::{Diagnostic, WeightItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Load carried by one compartment after placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompartmentLoad {
    pub name: String,
    pub load_kg: f64,
    pub capacity_kg: f64,
}

impl CompartmentLoad {
    pub fn remaining_kg(&self) -> f64 { self.capacity_kg - self.load_kg }
}

/// Outcome of one weight & balance evaluation.
///
/// `is_valid` holds exactly when the load is within MTOW, the CG lies inside
/// the envelope and no diagnostic of severity error was raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WBResult {
    pub total_weight_kg: f64,
    pub total_moment: f64,
    pub cg: f64,
    pub within_mtow: bool,
    pub within_cg_envelope: bool,
    pub is_valid: bool,
    /// MTOW minus total weight, negative when overweight.
    pub weight_margin_kg: f64,
    /// Distance of the CG behind the forward limit.
    pub cg_margin_forward: f64,
    /// Distance of the CG ahead of the aft limit.
    pub cg_margin_aft: f64,
    pub compartment_loads: Vec<CompartmentLoad>,
    pub items: Vec<WeightItem>,
    /// Passenger id to seat number.
    pub seat_assignments: BTreeMap<String, String>,
    /// Baggage, freight or mail id to compartment name.
    pub compartment_assignments: BTreeMap<String, String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl WBResult {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> { self.diagnostics.iter().filter(|d| d.is_error()) }

    /// Messages of all error diagnostics, joined for display.
    pub fn error_summary(&self) -> String {
        self.errors().map(|d| d.message.as_str()).collect::<Vec<_>>().join("; ")
    }

    pub fn compartment(&self, name: &str) -> Option<&CompartmentLoad> {
        self.compartment_loads.iter().find(|c| c.name == name)
    }
}
