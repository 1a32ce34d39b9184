use super::{
    FlightLoad, OptimizationRequest, OptimizationResult, OptimizationStatus, UnassignedItems,
    flight_state::Stowable, summarize,
};
use crate::config::{CategoryKind, PlannerConfig};
use crate::load_model::{Diagnostic, DiagnosticCode, Manifested};
use crate::weight_balance::WeightBalanceEngine;
use crate::{error, event, info, log};
use itertools::Itertools;
use std::time::Instant;

/// Greedy first-pass planner.
///
/// Items are taken in priority order and offered to every flight serving
/// their destination. A placement is committed on the first flight whose load
/// stays valid according to the [`WeightBalanceEngine`]. A failing item is
/// recorded and never aborts the run.
#[derive(Debug, Clone, Copy)]
pub struct BaselineOptimizer<'c> {
    engine: WeightBalanceEngine<'c>,
}

/// Bookkeeping shared by the three assignment passes.
struct Pass<'l, 'f> {
    loads: &'l mut [FlightLoad<'f>],
    unassigned: UnassignedItems,
    diagnostics: Vec<Diagnostic>,
}

impl<'c> BaselineOptimizer<'c> {
    pub fn new(config: &'c PlannerConfig) -> Self { Self { engine: WeightBalanceEngine::new(config) } }

    /// Builds a best-effort plan for `request` without any external help.
    ///
    /// # Returns
    /// An [`OptimizationResult`] with status `Error` for malformed requests
    /// (unusable aircraft, duplicate ids), otherwise `Ok` or `Infeasible`.
    pub fn optimize(&self, request: &OptimizationRequest) -> OptimizationResult {
        let started = Instant::now();
        if let Some(rejected) = Self::reject_malformed(request) {
            return rejected;
        }

        let mut loads: Vec<FlightLoad<'_>> = request.flights.iter().map(FlightLoad::seeded).collect();
        let mut pass = Pass { loads: &mut loads, unassigned: UnassignedItems::default(), diagnostics: Vec::new() };
        for kind in self.engine.config().assignment_order() {
            match kind {
                CategoryKind::Passenger => self.assign_passengers(request, &mut pass),
                CategoryKind::Mail => self.assign_mail(request, &mut pass),
                CategoryKind::Freight => self.assign_freight(request, &mut pass),
            }
        }
        let Pass { unassigned, diagnostics, .. } = pass;

        let mut result = summarize(&self.engine, &loads, request, unassigned, diagnostics);
        let elapsed = started.elapsed().as_millis();
        result.diagnostics.push(Diagnostic::info(
            DiagnosticCode::OptimizationTiming,
            format!("Baseline optimization took {elapsed} ms"),
        ));
        info!("Baseline plan for {} flights is {} after {elapsed} ms", request.flights.len(), result.status);
        result
    }

    /// Returns an `Error` result when the request cannot be planned at all.
    fn reject_malformed(request: &OptimizationRequest) -> Option<OptimizationResult> {
        let mut diagnostics: Vec<Diagnostic> = request
            .flights
            .iter()
            .filter_map(|f| {
                f.aircraft.validate().err().map(|e| {
                    Diagnostic::error(DiagnosticCode::InvalidAircraft, format!("Aircraft {} is unusable: {e}", f.aircraft.id))
                        .with_flight(&f.id)
                })
            })
            .collect();
        diagnostics.extend(
            request
                .duplicate_ids()
                .into_iter()
                .map(|id| Diagnostic::error(DiagnosticCode::DuplicateItemId, format!("Id {id} is used more than once")).with_item(&id)),
        );
        if diagnostics.is_empty() {
            return None;
        }
        error!("Rejecting optimization request: {} malformed entries", diagnostics.len());
        Some(OptimizationResult {
            status: OptimizationStatus::Error,
            assignments: Vec::new(),
            unassigned: UnassignedItems {
                passenger_ids: request.passengers.iter().map(|p| p.id.clone()).collect(),
                freight_ids: request.freight.iter().map(|f| f.id.clone()).collect(),
                mail_ids: request.mail.iter().map(|m| m.id.clone()).collect(),
            },
            explanation: format!("Optimization aborted, the request has {} malformed entries.", diagnostics.len()),
            diagnostics,
        })
    }

    fn assign_passengers(&self, request: &OptimizationRequest, pass: &mut Pass<'_, '_>) {
        let queue = request
            .passengers
            .iter()
            .sorted_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.destination.to_lowercase().cmp(&b.destination.to_lowercase())));
        for passenger in queue {
            let candidates: Vec<usize> = Self::by_departure(pass.loads, passenger.destination())
                .into_iter()
                .filter(|&idx| {
                    let free = pass.loads[idx].seats_left();
                    if !free {
                        event!("Flight {} has no seat left for {}", pass.loads[idx].flight.id, passenger.id);
                    }
                    free
                })
                .collect();
            if !self.try_assign(passenger, &candidates, pass) {
                Self::record_unassigned(passenger, DiagnosticCode::UnassignedPassenger, request, pass);
                pass.unassigned.passenger_ids.push(passenger.id.clone());
            }
        }
    }

    fn assign_mail(&self, request: &OptimizationRequest, pass: &mut Pass<'_, '_>) {
        let queue = request
            .mail
            .iter()
            .sorted_by(|a, b| a.priority.cmp(&b.priority).then(b.weight_kg.total_cmp(&a.weight_kg)));
        for sack in queue {
            let candidates = Self::by_departure(pass.loads, sack.destination());
            if !self.try_assign(sack, &candidates, pass) {
                Self::record_unassigned(sack, DiagnosticCode::UnassignedMail, request, pass);
                pass.unassigned.mail_ids.push(sack.id.clone());
            }
        }
    }

    fn assign_freight(&self, request: &OptimizationRequest, pass: &mut Pass<'_, '_>) {
        let queue = request
            .freight
            .iter()
            .sorted_by(|a, b| a.priority.cmp(&b.priority).then(b.weight_kg.total_cmp(&a.weight_kg)));
        for item in queue {
            let candidates = self.by_margin(pass.loads, item.destination());
            if !self.try_assign(item, &candidates, pass) {
                Self::record_unassigned(item, DiagnosticCode::UnassignedFreight, request, pass);
                pass.unassigned.freight_ids.push(item.id.clone());
            }
        }
    }

    /// Flights serving `destination`, earliest departure first.
    fn by_departure(loads: &[FlightLoad<'_>], destination: &str) -> Vec<usize> {
        (0..loads.len())
            .filter(|&idx| loads[idx].flight.serves(destination))
            .sorted_by_key(|&idx| loads[idx].flight.departure)
            .collect()
    }

    /// Flights serving `destination`, the one furthest below MTOW first.
    fn by_margin(&self, loads: &[FlightLoad<'_>], destination: &str) -> Vec<usize> {
        let mut ranked: Vec<(usize, f64)> = (0..loads.len())
            .filter(|&idx| loads[idx].flight.serves(destination))
            .filter_map(|idx| self.engine.evaluate(&loads[idx].request()).ok().map(|wb| (idx, wb.weight_margin_kg)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.into_iter().map(|(idx, _)| idx).collect()
    }

    /// Offers `item` to the candidate flights in order and commits it to the
    /// first one whose load stays valid.
    fn try_assign<T: Stowable>(&self, item: &T, candidates: &[usize], pass: &mut Pass<'_, '_>) -> bool {
        for &idx in candidates {
            let load = &mut pass.loads[idx];
            item.clone().stow(load);
            match self.engine.evaluate(&load.request()) {
                Ok(wb) if wb.is_valid => {
                    event!("Assigned {} {} to flight {}", T::KIND, item.id(), load.flight.id);
                    return true;
                }
                Ok(wb) => {
                    T::unstow(load);
                    pass.diagnostics.push(
                        Diagnostic::warning(
                            DiagnosticCode::AssignmentRejected,
                            format!("Flight {} rejected {} {}: {}", load.flight.id, T::KIND, item.id(), wb.error_summary()),
                        )
                        .with_flight(&load.flight.id)
                        .with_item(item.id()),
                    );
                }
                Err(e) => {
                    T::unstow(load);
                    error!("Flight {} cannot be evaluated: {e}", load.flight.id);
                }
            }
        }
        false
    }

    fn record_unassigned<T: Stowable>(item: &T, code: DiagnosticCode, request: &OptimizationRequest, pass: &mut Pass<'_, '_>) {
        let message = if request.is_served(item.destination()) {
            format!("No flight to {} could take {} {}", item.destination(), T::KIND, item.id())
        } else {
            format!("No flight serves {}, {} {} stays behind", item.destination(), T::KIND, item.id())
        };
        log!("{message}");
        pass.diagnostics.push(Diagnostic::warning(code, message).with_item(item.id()));
    }
}
