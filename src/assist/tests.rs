use super::*;
use crate::config::{AssistConfig, PlannerConfig};
use crate::load_model::DiagnosticCode;
use crate::optimizer::{OptimizationRequest, OptimizationResult, OptimizationStatus};
use crate::test_fixtures::{flight, mail, passenger, single_seater};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Answers every call with the same plan, or times out when it has none.
struct Scripted {
    reply: Option<ProposedPlan>,
    calls: AtomicUsize,
}

impl Scripted {
    fn new(reply: Option<ProposedPlan>) -> Self { Self { reply, calls: AtomicUsize::new(0) } }
}

#[async_trait]
impl ExternalOptimizer for Scripted {
    async fn propose(&self, _snapshot: &OptimizationSnapshot<'_>) -> Result<ProposedPlan, ResponseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().ok_or(ResponseError::Timeout)
    }
}

fn ids(raw: &[&str]) -> Vec<String> { raw.iter().map(|s| (*s).to_string()).collect() }

fn proposed_mail(flight_id: &str, mail_ids: &[&str]) -> ProposedFlight {
    ProposedFlight { flight_id: flight_id.to_string(), mail_ids: ids(mail_ids), ..ProposedFlight::default() }
}

fn plan_of(flights: Vec<ProposedFlight>) -> ProposedPlan { ProposedPlan { assignments: flights } }

/// Two single seaters to Bethel with 300 kg holds and six sacks that only fit
/// when split 150+90+60 / 120+90+90. Earliest-departure first fit leaves m6 behind.
fn packing_request() -> OptimizationRequest {
    OptimizationRequest {
        flights: vec![
            flight("F1", single_seater(), 8, &["Bethel"]),
            flight("F2", single_seater(), 9, &["Bethel"]),
        ],
        passengers: vec![],
        freight: vec![],
        mail: vec![
            mail("m1", 150.0, "Bethel"),
            mail("m2", 120.0, "Bethel"),
            mail("m3", 90.0, "Bethel"),
            mail("m4", 90.0, "Bethel"),
            mail("m5", 90.0, "Bethel"),
            mail("m6", 60.0, "Bethel"),
        ],
    }
}

fn optimal_packing() -> ProposedPlan {
    plan_of(vec![proposed_mail("F1", &["m1", "m4", "m6"]), proposed_mail("F2", &["m2", "m3", "m5"])])
}

fn count(result: &OptimizationResult, code: DiagnosticCode) -> usize {
    result.diagnostics.iter().filter(|d| d.code == code).count()
}

/// Validates `proposal` against the local plan of `request`.
fn validate(config: &PlannerConfig, proposal: &ProposedPlan, request: &OptimizationRequest) -> ProposalVerdict {
    let local = LoadPlanner::new(config).plan(request);
    ProposalValidator::new(config).validate(proposal, request, &local)
}

fn messages(verdict: &ProposalVerdict) -> Vec<&str> { verdict.diagnostics.iter().map(|d| d.message.as_str()).collect() }

#[test]
fn test_local_plan_misses_one_sack() {
    let config = PlannerConfig::default();
    let result = LoadPlanner::new(&config).plan(&packing_request());

    assert_eq!(result.status, OptimizationStatus::Infeasible);
    assert_eq!(result.unassigned.mail_ids, ids(&["m6"]));
    assert_eq!(result.assignment("F1").unwrap().mail_ids, ids(&["m1", "m2"]));
    assert_eq!(result.assignment("F2").unwrap().mail_ids, ids(&["m3", "m4", "m5"]));
}

#[tokio::test]
async fn test_valid_proposal_replaces_local_plan() {
    let config = PlannerConfig::default();
    let assist = Scripted::new(Some(optimal_packing()));
    let result = LoadPlanner::new(&config).run(&packing_request(), Some(&assist)).await;

    assert_eq!(assist.calls.load(Ordering::SeqCst), 1);
    assert_eq!(result.status, OptimizationStatus::Ok);
    assert!(result.unassigned.is_empty());
    let f1 = result.assignment("F1").unwrap();
    assert_eq!(f1.mail_ids, ids(&["m1", "m4", "m6"]));
    assert!(f1.is_valid);
    assert!((f1.total_weight_kg - 990.0).abs() < 1e-9);
    assert_eq!(count(&result, DiagnosticCode::ExternalProposalAccepted), 1);
    assert!(result.explanation.ends_with("Plan proposed by the external optimizer."));
}

#[tokio::test]
async fn test_overloaded_proposal_keeps_local_plan() {
    let config = PlannerConfig::default();
    let greedy = plan_of(vec![proposed_mail("F1", &["m1", "m2", "m6"]), proposed_mail("F2", &["m3", "m4", "m5"])]);
    let assist = Scripted::new(Some(greedy));
    let result = LoadPlanner::new(&config).run(&packing_request(), Some(&assist)).await;

    assert_eq!(result.status, OptimizationStatus::Infeasible);
    assert_eq!(result.unassigned.mail_ids, ids(&["m6"]));
    assert_eq!(count(&result, DiagnosticCode::ExternalProposalRejected), 1);
    let invalid = result.diagnostics.iter().find(|d| d.code == DiagnosticCode::ProposalInvalid).unwrap();
    assert_eq!(invalid.flight_id.as_deref(), Some("F1"));
}

#[tokio::test]
async fn test_empty_proposal_keeps_local_plan() {
    let config = PlannerConfig::default();
    let assist = Scripted::new(Some(plan_of(vec![])));
    let result = LoadPlanner::new(&config).run(&packing_request(), Some(&assist)).await;

    assert_eq!(result.status, OptimizationStatus::Infeasible);
    assert_eq!(result.unassigned.mail_ids, ids(&["m6"]));
    assert_eq!(result.assignment("F1").unwrap().mail_ids, ids(&["m1", "m2"]));
    assert_eq!(count(&result, DiagnosticCode::ExternalProposalAccepted), 0);
    assert_eq!(count(&result, DiagnosticCode::ExternalProposalRejected), 1);
    let invalid = result.diagnostics.iter().find(|d| d.code == DiagnosticCode::ProposalInvalid).unwrap();
    assert_eq!(invalid.message, "Proposal leaves 6 deliverable items unassigned, the local plan only 1");
}

#[test]
fn test_worse_proposal_is_rejected() {
    let config = PlannerConfig::default();
    let sparse = plan_of(vec![proposed_mail("F1", &["m1", "m6"]), proposed_mail("F2", &["m2", "m3"])]);
    let verdict = validate(&config, &sparse, &packing_request());

    assert!(!verdict.accepted);
    assert!(verdict.result.is_none());
    assert_eq!(messages(&verdict), vec!["Proposal leaves 2 deliverable items unassigned, the local plan only 1"]);

    let as_good = plan_of(vec![proposed_mail("F1", &["m1", "m2"]), proposed_mail("F2", &["m3", "m4", "m6"])]);
    assert!(validate(&config, &as_good, &packing_request()).accepted);
}

#[tokio::test]
async fn test_service_failure_falls_back() {
    let config = PlannerConfig::default();
    let assist = Scripted::new(None);
    let result = LoadPlanner::new(&config).run(&packing_request(), Some(&assist)).await;

    assert_eq!(result.status, OptimizationStatus::Infeasible);
    assert_eq!(count(&result, DiagnosticCode::ExternalServiceFailed), 1);
    let failure = result.diagnostics.iter().find(|d| d.code == DiagnosticCode::ExternalServiceFailed).unwrap();
    assert!(failure.message.contains("Timeout"));
}

#[tokio::test]
async fn test_feasible_plan_skips_assistance() {
    let config = PlannerConfig::default();
    let mut request = packing_request();
    request.mail.pop();
    let assist = Scripted::new(Some(optimal_packing()));
    let result = LoadPlanner::new(&config).run(&request, Some(&assist)).await;

    assert_eq!(assist.calls.load(Ordering::SeqCst), 0);
    assert_eq!(result.status, OptimizationStatus::Ok);
}

#[tokio::test]
async fn test_without_assistance_run_matches_plan() {
    let config = PlannerConfig::default();
    let planner = LoadPlanner::new(&config);
    let request = packing_request();
    let ran = planner.run(&request, None).await;
    let planned = planner.plan(&request);

    assert_eq!(ran.status, planned.status);
    assert_eq!(ran.assignments, planned.assignments);
    assert_eq!(ran.unassigned, planned.unassigned);
}

#[test]
fn test_unknown_flight_and_item() {
    let config = PlannerConfig::default();
    let proposal = plan_of(vec![proposed_mail("F9", &["m6"]), proposed_mail("F1", &["ghost"])]);
    let verdict = validate(&config, &proposal, &packing_request());

    assert!(!verdict.accepted);
    assert!(verdict.result.is_none());
    assert_eq!(verdict.diagnostics.len(), 2);
    assert_eq!(verdict.diagnostics[0].flight_id.as_deref(), Some("F9"));
    assert_eq!(verdict.diagnostics[1].item_id.as_deref(), Some("ghost"));
    assert!(verdict.diagnostics.iter().all(|d| d.code == DiagnosticCode::ProposalInvalid));
}

#[test]
fn test_item_placed_twice() {
    let config = PlannerConfig::default();
    let proposal = plan_of(vec![proposed_mail("F1", &["m6"]), proposed_mail("F2", &["m6"])]);
    let verdict = validate(&config, &proposal, &packing_request());

    assert!(!verdict.accepted);
    assert_eq!(messages(&verdict), vec!["Proposal places item m6 more than once"]);
}

#[test]
fn test_item_on_flight_off_its_route() {
    let config = PlannerConfig::default();
    let mut request = packing_request();
    request.flights.push(flight("N1", single_seater(), 10, &["Nome"]));
    let proposal = plan_of(vec![proposed_mail("N1", &["m6"])]);
    let verdict = validate(&config, &proposal, &request);

    assert!(!verdict.accepted);
    assert_eq!(verdict.diagnostics.len(), 1);
    assert_eq!(verdict.diagnostics[0].item_id.as_deref(), Some("m6"));
    assert!(verdict.diagnostics[0].message.contains("does not stop at Bethel"));
}

#[test]
fn test_more_passengers_than_seats() {
    let config = PlannerConfig::default();
    let mut request = packing_request();
    request.passengers = vec![passenger("p1", "Bethel"), passenger("p2", "Bethel")];
    let proposal = plan_of(vec![ProposedFlight {
        flight_id: "F1".to_string(),
        passenger_ids: ids(&["p1", "p2"]),
        ..ProposedFlight::default()
    }]);
    let verdict = validate(&config, &proposal, &request);

    assert!(!verdict.accepted);
    assert_eq!(messages(&verdict), vec!["Flight F1 would carry 2 passengers on 1 seats"]);
}

#[test]
fn test_committed_items_must_stay_on_board() {
    let config = PlannerConfig::default();
    let mut request = packing_request();
    request.mail.clear();
    request.flights[0].mail.push(mail("c1", 100.0, "Bethel"));
    let validator = ProposalValidator::new(&config);
    let local = LoadPlanner::new(&config).plan(&request);

    let dropped = validator.validate(&plan_of(vec![proposed_mail("F1", &[])]), &request, &local);
    assert!(!dropped.accepted);
    assert_eq!(messages(&dropped), vec!["Proposal drops committed item c1"]);

    let moved = validator.validate(&plan_of(vec![proposed_mail("F2", &["c1"])]), &request, &local);
    assert!(!moved.accepted, "F1 is left out, so it keeps c1 and the proposal places it twice");

    let kept = validator.validate(&plan_of(vec![proposed_mail("F2", &[])]), &request, &local);
    assert!(kept.accepted);
    let result = kept.result.unwrap();
    assert_eq!(result.assignment("F1").unwrap().mail_ids, ids(&["c1"]));
    assert!(result.assignment("F2").unwrap().mail_ids.is_empty());
}

#[test]
fn test_proposal_numbers_are_ignored() {
    let body = r#"{
        "status": "ok",
        "assignments": [
            {"flightId": "F1", "mailIds": ["m1", "m4", "m6"], "totalWeightKg": 1.0, "cg": 9.9, "isValid": true},
            {"flightId": "F2", "mailIds": ["m2", "m3", "m5"], "seatAssignments": {"x": "1"}}
        ],
        "explanation": "trust me"
    }"#;
    let proposal: ProposedPlan = serde_json::from_str(body).unwrap();
    assert_eq!(proposal, optimal_packing());

    let config = PlannerConfig::default();
    let result = validate(&config, &proposal, &packing_request()).result.unwrap();
    let f2 = result.assignment("F2").unwrap();
    assert!((f2.total_weight_kg - 990.0).abs() < 1e-9);
    assert!(f2.seat_assignments.as_ref().unwrap().is_empty());
}

#[test]
fn test_snapshot_carries_open_items() {
    let config = PlannerConfig::default();
    let request = packing_request();
    let baseline = LoadPlanner::new(&config).plan(&request);
    let snapshot = OptimizationSnapshot::new(&request, &baseline, &config);

    assert_eq!(snapshot.mail.len(), 1);
    assert_eq!(snapshot.mail[0].id, "m6");
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["constraints"]["standardPassengerWeightKg"], 88.0);
    assert_eq!(json["baseline"]["status"], "infeasible");
    assert_eq!(json["flights"].as_array().unwrap().len(), 2);
}

#[test]
fn test_assist_client_from_config() {
    assert!(AssistClient::from_config(&AssistConfig::default()).unwrap().is_none());

    let config = AssistConfig { base_url: Some("http://localhost:8000/api/".to_string()), timeout_secs: 5 };
    let client = AssistClient::from_config(&config).unwrap().unwrap();
    assert_eq!(client.base_url(), "http://localhost:8000/api");
    assert_eq!(client.name(), "optimization service");
}
