use super::{LoadRequest, WBResult, WeightBalanceEngine};
use crate::load_model::{AircraftConfigError, Manifested, RouteLeg, destinations_match};
use serde::{Deserialize, Serialize};

/// Load sheet at the takeoff of one leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    pub leg: u32,
    pub destination: String,
    pub wb: WBResult,
}

impl WeightBalanceEngine<'_> {
    /// Evaluates the load for every leg of a route.
    ///
    /// Leg 1 sees the complete manifest. After each leg every item whose
    /// destination is that leg's stop leaves the aircraft, so an item weighs on
    /// all legs up to and including its own and on none after. Items bound
    /// beyond the last leg stay aboard throughout.
    ///
    /// # Arguments
    /// * `request` - The full manifest at the first takeoff.
    /// * `legs` - Route legs in flying order.
    ///
    /// # Returns
    /// One [`LegResult`] per leg, or the aircraft configuration error.
    pub fn evaluate_legs(
        &self,
        request: &LoadRequest<'_>,
        legs: &[RouteLeg],
    ) -> Result<Vec<LegResult>, AircraftConfigError> {
        let mut passengers = request.passengers.to_vec();
        let mut freight = request.freight.to_vec();
        let mut mail = request.mail.to_vec();
        let mut results = Vec::with_capacity(legs.len());

        for leg in legs {
            let leg_request = LoadRequest { passengers: &passengers, freight: &freight, mail: &mail, ..*request };
            let wb = self.evaluate(&leg_request)?;
            results.push(LegResult { leg: leg.leg, destination: leg.destination.clone(), wb });

            let stays = |item: &dyn Manifested| !destinations_match(item.destination(), &leg.destination);
            passengers.retain(|p| stays(p));
            freight.retain(|f| stays(f));
            mail.retain(|m| stays(m));
        }
        Ok(results)
    }
}
