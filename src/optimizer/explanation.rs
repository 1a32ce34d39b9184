use super::{ItemPools, OptimizationRequest, UnassignedItems, flight_state::Stowable};
use crate::config::PlannerConfig;
use std::fmt::Write;

/// Unassigned items of one category split by cause.
#[derive(Default)]
struct Shortfall {
    no_route: usize,
    no_route_kg: f64,
    no_fit: usize,
    no_fit_kg: f64,
}

impl Shortfall {
    fn collect<'a, T: Stowable + 'a>(
        ids: &[String],
        lookup: impl Fn(&str) -> Option<&'a T>,
        request: &OptimizationRequest,
        config: &PlannerConfig,
    ) -> Self {
        let mut shortfall = Self::default();
        for item in ids.iter().filter_map(|id| lookup(id.as_str())) {
            let kg = item.manifest_weight(config);
            if request.is_served(item.destination()) {
                shortfall.no_fit += 1;
                shortfall.no_fit_kg += kg;
            } else {
                shortfall.no_route += 1;
                shortfall.no_route_kg += kg;
            }
        }
        shortfall
    }
}

/// Builds the human-readable summary of a plan.
pub(super) fn explain(
    config: &PlannerConfig,
    request: &OptimizationRequest,
    pools: &ItemPools<'_>,
    unassigned: &UnassignedItems,
    flights: usize,
) -> String {
    let mut text = format!(
        "Assigned {}/{} passengers, {}/{} mail items and {}/{} freight items across {flights} flights.",
        pools.passenger_count().saturating_sub(unassigned.passenger_ids.len()),
        pools.passenger_count(),
        pools.mail_count().saturating_sub(unassigned.mail_ids.len()),
        pools.mail_count(),
        pools.freight_count().saturating_sub(unassigned.freight_ids.len()),
        pools.freight_count(),
    );

    let categories = [
        ("passengers", Shortfall::collect(&unassigned.passenger_ids, |id| pools.passenger(id), request, config)),
        ("mail", Shortfall::collect(&unassigned.mail_ids, |id| pools.mail(id), request, config)),
        ("freight", Shortfall::collect(&unassigned.freight_ids, |id| pools.freight(id), request, config)),
    ];
    for (label, s) in categories.iter().filter(|(_, s)| s.no_route + s.no_fit > 0) {
        let _ = write!(
            text,
            " Unassigned {label}: {} with no route ({:.1} kg), {} failed to fit ({:.1} kg).",
            s.no_route, s.no_route_kg, s.no_fit, s.no_fit_kg
        );
    }
    text
}
