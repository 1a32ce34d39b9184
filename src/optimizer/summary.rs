use super::{
    FlightLoad, ItemPools, OptimizationRequest, OptimizationResult, OptimizationStatus, UnassignedItems,
    explanation::explain, result::FlightAssignment,
};
use crate::load_model::{Diagnostic, DiagnosticCode, Manifested};
use crate::weight_balance::WeightBalanceEngine;

/// Turns the final flight loads of a run into an [`OptimizationResult`].
///
/// Every load is evaluated once more, per flight and per leg, and the
/// engine's diagnostics are attached tagged with the flight id.
///
/// # Arguments
/// * `engine` - Engine used for the final evaluation.
/// * `loads` - Final loads, one per flight.
/// * `request` - The request the loads were planned for.
/// * `unassigned` - Items left without a flight.
/// * `diagnostics` - Diagnostics collected while planning.
pub(crate) fn summarize(
    engine: &WeightBalanceEngine<'_>,
    loads: &[FlightLoad<'_>],
    request: &OptimizationRequest,
    unassigned: UnassignedItems,
    mut diagnostics: Vec<Diagnostic>,
) -> OptimizationResult {
    let mut assignments = Vec::with_capacity(loads.len());
    for load in loads {
        let flight = load.flight;
        let evaluated = engine
            .evaluate(&load.request())
            .and_then(|wb| engine.evaluate_legs(&load.request(), &flight.route).map(|legs| (wb, legs)));
        match evaluated {
            Ok((wb, legs)) => {
                diagnostics.extend(wb.diagnostics.iter().cloned().map(|d| d.with_flight(&flight.id)));
                let ids = (
                    load.passengers.iter().map(|p| p.id.clone()).collect(),
                    load.freight.iter().map(|f| f.id.clone()).collect(),
                    load.mail.iter().map(|m| m.id.clone()).collect(),
                );
                assignments.push(FlightAssignment::from_evaluation(&flight.id, ids, &wb, &legs, flight.aircraft.mtow_kg));
            }
            Err(e) => diagnostics.push(
                Diagnostic::error(DiagnosticCode::InvalidAircraft, format!("Aircraft {} is unusable: {e}", flight.aircraft.id))
                    .with_flight(&flight.id),
            ),
        }
    }

    let pools = ItemPools::new(request);
    let status = derive_status(&diagnostics, &unassigned, request, &pools);
    let explanation = explain(engine.config(), request, &pools, &unassigned, assignments.len());
    OptimizationResult { status, assignments, unassigned, diagnostics, explanation }
}

/// `Infeasible` when an error was raised or when an item with a served
/// destination stayed behind, `Ok` otherwise. Items nobody flies to do not
/// make a plan infeasible.
pub(crate) fn derive_status(
    diagnostics: &[Diagnostic],
    unassigned: &UnassignedItems,
    request: &OptimizationRequest,
    pools: &ItemPools<'_>,
) -> OptimizationStatus {
    let has_error = diagnostics.iter().any(Diagnostic::is_error);
    let served = |destination: Option<&str>| destination.is_some_and(|d| request.is_served(d));
    let missed = unassigned.passenger_ids.iter().any(|id| served(pools.passenger(id).map(Manifested::destination)))
        || unassigned.freight_ids.iter().any(|id| served(pools.freight(id).map(Manifested::destination)))
        || unassigned.mail_ids.iter().any(|id| served(pools.mail(id).map(Manifested::destination)));
    if has_error || missed { OptimizationStatus::Infeasible } else { OptimizationStatus::Ok }
}
