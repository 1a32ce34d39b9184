use super::{ProposedFlight, ProposedPlan};
use crate::config::PlannerConfig;
use crate::load_model::{Diagnostic, DiagnosticCode, FlightData, Manifested};
use crate::optimizer::{FlightLoad, ItemPools, OptimizationRequest, OptimizationResult, UnassignedItems, summarize};
use crate::weight_balance::WeightBalanceEngine;
use crate::{event, warn};
use std::collections::HashSet;

/// Outcome of checking one external proposal.
#[derive(Debug, Clone)]
pub struct ProposalVerdict {
    pub accepted: bool,
    /// One `PROPOSAL_INVALID` warning per problem found, empty when accepted.
    pub diagnostics: Vec<Diagnostic>,
    /// The re-derived plan, present only when accepted.
    pub result: Option<OptimizationResult>,
}

/// Checks an untrusted [`ProposedPlan`] against a request.
///
/// Only the id lists of the proposal are read. Each proposed flight is
/// rebuilt from the request's own items and evaluated by the engine, flights
/// the proposal leaves out keep their committed load.
#[derive(Debug, Clone, Copy)]
pub struct ProposalValidator<'c> {
    engine: WeightBalanceEngine<'c>,
}

/// Problems found so far, as diagnostics.
struct Findings(Vec<Diagnostic>);

impl Findings {
    fn reject(&mut self, message: String, flight_id: Option<&str>, item_id: Option<&str>) {
        let mut diagnostic = Diagnostic::warning(DiagnosticCode::ProposalInvalid, message);
        if let Some(id) = flight_id {
            diagnostic = diagnostic.with_flight(id);
        }
        if let Some(id) = item_id {
            diagnostic = diagnostic.with_item(id);
        }
        self.0.push(diagnostic);
    }
}

impl<'c> ProposalValidator<'c> {
    pub fn new(config: &'c PlannerConfig) -> Self { Self { engine: WeightBalanceEngine::new(config) } }

    /// Checks `proposal` against `request` and the local plan it would replace.
    ///
    /// # Arguments
    /// * `proposal` - Id lists returned by the external optimizer.
    /// * `request` - The request both plans were made for.
    /// * `local` - The plan kept when the proposal is rejected.
    ///
    /// # Returns
    /// An accepted [`ProposalVerdict`] carrying the re-derived plan, or a
    /// rejected one listing every problem found. A proposal leaving more
    /// deliverable items behind than `local` is rejected even when all of its
    /// flights are valid.
    pub fn validate(
        &self,
        proposal: &ProposedPlan,
        request: &OptimizationRequest,
        local: &OptimizationResult,
    ) -> ProposalVerdict {
        let pools = ItemPools::new(request);
        let mut findings = Findings(Vec::new());
        let mut placed: HashSet<&str> = HashSet::new();

        let proposed: HashSet<&str> = proposal.assignments.iter().map(|a| a.flight_id.as_str()).collect();
        for flight in request.flights.iter().filter(|f| !proposed.contains(f.id.as_str())) {
            placed.extend(flight.passengers.iter().map(|p| p.id.as_str()));
            placed.extend(flight.freight.iter().map(|f| f.id.as_str()));
            placed.extend(flight.mail.iter().map(|m| m.id.as_str()));
        }

        let mut seen_flights: HashSet<&str> = HashSet::new();
        let mut checked: Vec<(&FlightData, &ProposedFlight)> = Vec::new();
        for entry in &proposal.assignments {
            let Some(flight) = request.flight(&entry.flight_id) else {
                findings.reject(format!("Proposal names unknown flight {}", entry.flight_id), Some(&entry.flight_id), None);
                continue;
            };
            if !seen_flights.insert(flight.id.as_str()) {
                findings.reject(format!("Proposal lists flight {} more than once", flight.id), Some(&flight.id), None);
                continue;
            }
            Self::check_items(flight, entry, &pools, &mut placed, &mut findings);
            if entry.passenger_ids.len() > flight.aircraft.seat_count {
                findings.reject(
                    format!(
                        "Flight {} would carry {} passengers on {} seats",
                        flight.id,
                        entry.passenger_ids.len(),
                        flight.aircraft.seat_count
                    ),
                    Some(&flight.id),
                    None,
                );
            }
            checked.push((flight, entry));
        }
        let committed = request.flights.iter().flat_map(|f| {
            let passengers = f.passengers.iter().map(|p| p.id.as_str());
            passengers.chain(f.freight.iter().map(|i| i.id.as_str())).chain(f.mail.iter().map(|m| m.id.as_str()))
        });
        for id in committed.filter(|id| !placed.contains(id)) {
            findings.reject(format!("Proposal drops committed item {id}"), None, Some(id));
        }
        if !findings.0.is_empty() {
            return Self::rejected(findings);
        }

        let mut loads = Vec::with_capacity(request.flights.len());
        for flight in &request.flights {
            let load = match checked.iter().find(|(f, _)| f.id == flight.id) {
                Some((_, entry)) => {
                    match FlightLoad::from_ids(flight, &entry.passenger_ids, &entry.freight_ids, &entry.mail_ids, &pools) {
                        Ok(load) => load,
                        Err(id) => {
                            findings.reject(format!("Proposal names unknown item {id}"), Some(&flight.id), Some(&id));
                            continue;
                        }
                    }
                }
                None => FlightLoad::seeded(flight),
            };
            match self.engine.evaluate(&load.request()) {
                Ok(wb) if wb.is_valid => event!("Proposed load of flight {} is valid", flight.id),
                Ok(wb) => findings.reject(
                    format!("Proposed load of flight {} is invalid: {}", flight.id, wb.error_summary()),
                    Some(&flight.id),
                    None,
                ),
                Err(e) => findings.reject(format!("Flight {} cannot be evaluated: {e}", flight.id), Some(&flight.id), None),
            }
            loads.push(load);
        }
        if !findings.0.is_empty() {
            return Self::rejected(findings);
        }

        let unassigned = UnassignedItems {
            passenger_ids: request.passengers.iter().filter(|p| !placed.contains(p.id.as_str())).map(|p| p.id.clone()).collect(),
            freight_ids: request.freight.iter().filter(|f| !placed.contains(f.id.as_str())).map(|f| f.id.clone()).collect(),
            mail_ids: request.mail.iter().filter(|m| !placed.contains(m.id.as_str())).map(|m| m.id.clone()).collect(),
        };
        let left_behind = Self::deliverable_left_behind(&unassigned, request, &pools);
        let local_left_behind = Self::deliverable_left_behind(&local.unassigned, request, &pools);
        if left_behind > local_left_behind {
            findings.reject(
                format!(
                    "Proposal leaves {left_behind} deliverable items unassigned, the local plan only {local_left_behind}"
                ),
                None,
                None,
            );
            return Self::rejected(findings);
        }

        let result = summarize(&self.engine, &loads, request, unassigned, Vec::new());
        ProposalVerdict { accepted: true, diagnostics: Vec::new(), result: Some(result) }
    }

    /// Unassigned items bound for a stop some flight of `request` serves.
    fn deliverable_left_behind(unassigned: &UnassignedItems, request: &OptimizationRequest, pools: &ItemPools<'_>) -> usize {
        let served = |destination: Option<&str>| destination.is_some_and(|d| request.is_served(d));
        let passengers = unassigned.passenger_ids.iter().filter(|id| served(pools.passenger(id).map(Manifested::destination)));
        let freight = unassigned.freight_ids.iter().filter(|id| served(pools.freight(id).map(Manifested::destination)));
        let mail = unassigned.mail_ids.iter().filter(|id| served(pools.mail(id).map(Manifested::destination)));
        passengers.count() + freight.count() + mail.count()
    }

    /// Id checks of one proposed flight: every item exists, appears once in
    /// the whole plan and is bound for a stop of the flight.
    fn check_items<'a>(
        flight: &FlightData,
        entry: &'a ProposedFlight,
        pools: &ItemPools<'_>,
        placed: &mut HashSet<&'a str>,
        findings: &mut Findings,
    ) {
        let passengers = entry.passenger_ids.iter().map(|id| (id, pools.passenger(id).map(Manifested::destination)));
        let freight = entry.freight_ids.iter().map(|id| (id, pools.freight(id).map(Manifested::destination)));
        let mail = entry.mail_ids.iter().map(|id| (id, pools.mail(id).map(Manifested::destination)));
        for (id, destination) in passengers.chain(freight).chain(mail) {
            let Some(destination) = destination else {
                findings.reject(format!("Proposal names unknown item {id}"), Some(&flight.id), Some(id));
                continue;
            };
            if !placed.insert(id.as_str()) {
                findings.reject(format!("Proposal places item {id} more than once"), Some(&flight.id), Some(id));
            }
            if !flight.serves(destination) {
                findings.reject(
                    format!("Flight {} does not stop at {destination}, the destination of {id}", flight.id),
                    Some(&flight.id),
                    Some(id),
                );
            }
        }
    }

    fn rejected(findings: Findings) -> ProposalVerdict {
        warn!("External proposal rejected with {} problems", findings.0.len());
        ProposalVerdict { accepted: false, diagnostics: findings.0, result: None }
    }
}
