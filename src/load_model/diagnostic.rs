use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Machine-readable reason of a [`Diagnostic`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    Overweight,
    NearMaxWeight,
    CgOutOfEnvelope,
    SeatNotFound,
    SeatConflict,
    SeatOverweight,
    BaggageOverflow,
    NoCompartment,
    CompartmentOverflow,
    CompartmentNearFull,
    InvalidAircraft,
    DuplicateItemId,
    AssignmentRejected,
    UnassignedPassenger,
    UnassignedFreight,
    UnassignedMail,
    MovedFreight,
    OptimizationTiming,
    ProposalInvalid,
    ExternalProposalAccepted,
    ExternalProposalRejected,
    ExternalServiceFailed,
}

/// One finding of the engine or optimizer. Diagnostics never abort a run,
/// their severity decides whether a load or plan is acceptable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self { severity, code, message: message.into(), flight_id: None, item_id: None }
    }

    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    pub fn info(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, message)
    }

    #[must_use]
    pub fn with_flight(mut self, flight_id: &str) -> Self {
        self.flight_id = Some(flight_id.to_string());
        self
    }

    #[must_use]
    pub fn with_item(mut self, item_id: &str) -> Self {
        self.item_id = Some(item_id.to_string());
        self
    }

    pub fn is_error(&self) -> bool { self.severity == Severity::Error }
}
