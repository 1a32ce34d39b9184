use crate::config::PlannerConfig;
use crate::load_model::{FlightData, FreightData, MailData, PassengerData};
use crate::optimizer::{OptimizationRequest, OptimizationResult};
use serde::Serialize;

/// Limits the external service has to respect on top of each aircraft's own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotConstraints {
    pub standard_passenger_weight_kg: f64,
    pub buffer_percentage: f64,
    pub compartment_near_full_ratio: f64,
}

impl From<&PlannerConfig> for SnapshotConstraints {
    fn from(config: &PlannerConfig) -> Self {
        Self {
            standard_passenger_weight_kg: config.standard_passenger_weight_kg,
            buffer_percentage: config.buffer_percentage,
            compartment_near_full_ratio: config.compartment_near_full_ratio,
        }
    }
}

/// Body sent to the external optimizer: the flights with their committed
/// loads, the items the local plan left behind and the local plan itself.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSnapshot<'r> {
    pub flights: &'r [FlightData],
    pub passengers: Vec<&'r PassengerData>,
    pub freight: Vec<&'r FreightData>,
    pub mail: Vec<&'r MailData>,
    pub constraints: SnapshotConstraints,
    pub baseline: &'r OptimizationResult,
}

impl<'r> OptimizationSnapshot<'r> {
    pub fn new(request: &'r OptimizationRequest, baseline: &'r OptimizationResult, config: &PlannerConfig) -> Self {
        let open = &baseline.unassigned;
        Self {
            flights: &request.flights,
            passengers: request.passengers.iter().filter(|p| open.passenger_ids.contains(&p.id)).collect(),
            freight: request.freight.iter().filter(|f| open.freight_ids.contains(&f.id)).collect(),
            mail: request.mail.iter().filter(|m| open.mail_ids.contains(&m.id)).collect(),
            constraints: SnapshotConstraints::from(config),
            baseline,
        }
    }
}
