use crate::load_model::Diagnostic;
use crate::weight_balance::{LegResult, WBResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OptimizationStatus {
    /// Everything that can reach its destination was assigned.
    Ok,
    /// Some item with a served destination could not be placed, or a load is invalid.
    Infeasible,
    /// The request itself was malformed.
    Error,
}

/// Condensed load sheet of one leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegSummary {
    pub leg: u32,
    pub destination: String,
    pub total_weight_kg: f64,
    pub cg: f64,
    pub is_valid: bool,
}

impl From<&LegResult> for LegSummary {
    fn from(value: &LegResult) -> Self {
        Self {
            leg: value.leg,
            destination: value.destination.clone(),
            total_weight_kg: value.wb.total_weight_kg,
            cg: value.wb.cg,
            is_valid: value.wb.is_valid,
        }
    }
}

/// Planned load of one flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightAssignment {
    pub flight_id: String,
    pub passenger_ids: Vec<String>,
    pub freight_ids: Vec<String>,
    pub mail_ids: Vec<String>,
    pub total_weight_kg: f64,
    pub cg: f64,
    pub mtow_kg: f64,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_assignments: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment_assignments: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub legs: Vec<LegSummary>,
    /// Set when totals were adjusted arithmetically after the last engine
    /// run, CG, validity and the maps then describe the earlier load.
    #[serde(default)]
    pub balance_stale: bool,
}

impl FlightAssignment {
    pub(crate) fn from_evaluation(
        flight_id: &str,
        ids: (Vec<String>, Vec<String>, Vec<String>),
        wb: &WBResult,
        legs: &[LegResult],
        mtow_kg: f64,
    ) -> Self {
        let (passenger_ids, freight_ids, mail_ids) = ids;
        Self {
            flight_id: flight_id.to_string(),
            passenger_ids,
            freight_ids,
            mail_ids,
            total_weight_kg: wb.total_weight_kg,
            cg: wb.cg,
            mtow_kg,
            is_valid: wb.is_valid,
            seat_assignments: Some(wb.seat_assignments.clone()),
            compartment_assignments: Some(wb.compartment_assignments.clone()),
            legs: legs.iter().map(LegSummary::from).collect(),
            balance_stale: false,
        }
    }

    pub fn weight_margin_kg(&self) -> f64 { self.mtow_kg - self.total_weight_kg }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedItems {
    pub passenger_ids: Vec<String>,
    pub freight_ids: Vec<String>,
    pub mail_ids: Vec<String>,
}

impl UnassignedItems {
    pub fn is_empty(&self) -> bool {
        self.passenger_ids.is_empty() && self.freight_ids.is_empty() && self.mail_ids.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub status: OptimizationStatus,
    pub assignments: Vec<FlightAssignment>,
    pub unassigned: UnassignedItems,
    pub diagnostics: Vec<Diagnostic>,
    pub explanation: String,
}

impl OptimizationResult {
    pub fn assignment(&self, flight_id: &str) -> Option<&FlightAssignment> {
        self.assignments.iter().find(|a| a.flight_id == flight_id)
    }
}
