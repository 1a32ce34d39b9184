use super::{FlightLoad, ItemPools, OptimizationRequest, OptimizationResult, result::FlightAssignment};
use crate::config::PlannerConfig;
use crate::load_model::{Diagnostic, DiagnosticCode, FlightData};
use crate::weight_balance::WeightBalanceEngine;
use crate::{info, warn};

/// Single rebalancing pass over a finished plan.
///
/// Freight is moved off flights above MTOW onto flights with at least
/// `rebalance_min_margin_kg` to spare that stop at the freight's destination.
/// Passengers and mail never move. Recorded totals are adjusted by the moved
/// weight without asking the engine again, touched flights are flagged with
/// `balance_stale` unless `revalidate_after_rebalance` is set.
#[derive(Debug, Clone, Copy)]
pub struct LocalSearchImprover<'c> {
    engine: WeightBalanceEngine<'c>,
}

impl<'c> LocalSearchImprover<'c> {
    pub fn new(config: &'c PlannerConfig) -> Self { Self { engine: WeightBalanceEngine::new(config) } }

    /// Runs the pass on `result` in place.
    ///
    /// # Returns
    /// The number of freight items moved.
    pub fn improve(&self, result: &mut OptimizationResult, request: &OptimizationRequest) -> usize {
        let config = self.engine.config();
        let pools = ItemPools::new(request);
        let flights: Vec<Option<&FlightData>> =
            result.assignments.iter().map(|a| request.flight(&a.flight_id)).collect();

        let overweight: Vec<usize> =
            (0..result.assignments.len()).filter(|&i| result.assignments[i].weight_margin_kg() < 0.0).collect();
        let underweight: Vec<usize> = (0..result.assignments.len())
            .filter(|&i| result.assignments[i].weight_margin_kg() >= config.rebalance_min_margin_kg)
            .collect();
        if overweight.is_empty() || underweight.is_empty() {
            return 0;
        }

        let mut touched = vec![false; result.assignments.len()];
        let mut moves = 0;
        for &src in &overweight {
            for freight_id in result.assignments[src].freight_ids.clone() {
                let Some(item) = pools.freight(&freight_id) else {
                    continue;
                };
                let target = underweight.iter().copied().find(|&dst| {
                    flights[dst].is_some_and(|f| f.serves(&item.destination))
                        && result.assignments[dst].weight_margin_kg() >= item.weight_kg
                });
                let Some(dst) = target else {
                    continue;
                };

                Self::move_freight(result, src, dst, &freight_id, item.weight_kg);
                touched[src] = true;
                touched[dst] = true;
                moves += 1;
                let (from, to) = (&result.assignments[src].flight_id, &result.assignments[dst].flight_id);
                info!("Moved freight {freight_id} ({:.1} kg) from {from} to {to}", item.weight_kg);
                let diagnostic = Diagnostic::info(
                    DiagnosticCode::MovedFreight,
                    format!("Moved freight {freight_id} ({:.1} kg) from flight {from} to flight {to}", item.weight_kg),
                )
                .with_flight(to)
                .with_item(&freight_id);
                result.diagnostics.push(diagnostic);
            }
        }

        for idx in (0..touched.len()).filter(|&i| touched[i]) {
            if config.revalidate_after_rebalance {
                if let Some(flight) = flights[idx] {
                    self.revalidate(&mut result.assignments[idx], flight, &pools);
                }
            } else {
                result.assignments[idx].balance_stale = true;
            }
        }
        moves
    }

    fn move_freight(result: &mut OptimizationResult, src: usize, dst: usize, freight_id: &str, weight_kg: f64) {
        let source = &mut result.assignments[src];
        source.freight_ids.retain(|id| id != freight_id);
        source.total_weight_kg -= weight_kg;
        if let Some(map) = source.compartment_assignments.as_mut() {
            map.remove(freight_id);
        }
        let target = &mut result.assignments[dst];
        target.freight_ids.push(freight_id.to_string());
        target.total_weight_kg += weight_kg;
    }

    /// Re-derives totals, CG, validity and maps of a touched flight.
    fn revalidate(&self, assignment: &mut FlightAssignment, flight: &FlightData, pools: &ItemPools<'_>) {
        let load = match FlightLoad::from_ids(
            flight,
            &assignment.passenger_ids,
            &assignment.freight_ids,
            &assignment.mail_ids,
            pools,
        ) {
            Ok(load) => load,
            Err(id) => {
                warn!("Cannot revalidate flight {}: unknown item {id}", flight.id);
                assignment.balance_stale = true;
                return;
            }
        };
        let evaluated = self
            .engine
            .evaluate(&load.request())
            .and_then(|wb| self.engine.evaluate_legs(&load.request(), &flight.route).map(|legs| (wb, legs)));
        match evaluated {
            Ok((wb, legs)) => {
                let ids = (
                    std::mem::take(&mut assignment.passenger_ids),
                    std::mem::take(&mut assignment.freight_ids),
                    std::mem::take(&mut assignment.mail_ids),
                );
                *assignment = FlightAssignment::from_evaluation(&flight.id, ids, &wb, &legs, flight.aircraft.mtow_kg);
            }
            Err(e) => {
                warn!("Cannot revalidate flight {}: {e}", flight.id);
                assignment.balance_stale = true;
            }
        }
    }
}
