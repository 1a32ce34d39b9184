use super::ItemPools;
use crate::config::PlannerConfig;
use crate::load_model::{FlightData, FreightData, MailData, Manifested, PassengerData};
use crate::weight_balance::LoadRequest;

/// Mutable load of one flight during a single optimizer run.
///
/// Loads live in a plain `Vec` owned by the run and indexed by position,
/// they are never shared with another run.
#[derive(Debug, Clone)]
pub(crate) struct FlightLoad<'f> {
    pub(crate) flight: &'f FlightData,
    pub(crate) passengers: Vec<PassengerData>,
    pub(crate) freight: Vec<FreightData>,
    pub(crate) mail: Vec<MailData>,
}

impl<'f> FlightLoad<'f> {
    /// Starts from the load already committed to `flight`.
    pub(crate) fn seeded(flight: &'f FlightData) -> Self {
        Self {
            flight,
            passengers: flight.passengers.clone(),
            freight: flight.freight.clone(),
            mail: flight.mail.clone(),
        }
    }

    /// Rebuilds a load from item ids.
    ///
    /// # Returns
    /// * `Ok(FlightLoad)` - All ids were found in `pools`.
    /// * `Err(String)` - The first id that is unknown.
    pub(crate) fn from_ids(
        flight: &'f FlightData,
        passenger_ids: &[String],
        freight_ids: &[String],
        mail_ids: &[String],
        pools: &ItemPools<'_>,
    ) -> Result<Self, String> {
        let passengers = passenger_ids
            .iter()
            .map(|id| pools.passenger(id).cloned().ok_or_else(|| id.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        let freight = freight_ids
            .iter()
            .map(|id| pools.freight(id).cloned().ok_or_else(|| id.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        let mail = mail_ids
            .iter()
            .map(|id| pools.mail(id).cloned().ok_or_else(|| id.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { flight, passengers, freight, mail })
    }

    pub(crate) fn request(&self) -> LoadRequest<'_> {
        LoadRequest::new(
            &self.flight.aircraft,
            self.flight.pilot_weight_kg,
            self.flight.fuel_weight_kg,
            &self.passengers,
            &self.freight,
            &self.mail,
        )
    }

    pub(crate) fn seats_left(&self) -> bool { self.passengers.len() < self.flight.aircraft.seat_count }
}

/// Item kinds the optimizer can tentatively put on and take off a flight.
pub(crate) trait Stowable: Manifested + Clone {
    /// Human-readable kind used in messages.
    const KIND: &'static str;

    fn stow(self, load: &mut FlightLoad<'_>);

    /// Takes back the item stowed last.
    fn unstow(load: &mut FlightLoad<'_>);

    /// Weight the item adds to a flight, used in summaries.
    fn manifest_weight(&self, config: &PlannerConfig) -> f64;
}

impl Stowable for PassengerData {
    const KIND: &'static str = "passenger";

    fn stow(self, load: &mut FlightLoad<'_>) { load.passengers.push(self); }

    fn unstow(load: &mut FlightLoad<'_>) { load.passengers.pop(); }

    fn manifest_weight(&self, config: &PlannerConfig) -> f64 {
        self.effective_weight(config.standard_passenger_weight_kg) + self.baggage_weight_kg
    }
}

impl Stowable for FreightData {
    const KIND: &'static str = "freight";

    fn stow(self, load: &mut FlightLoad<'_>) { load.freight.push(self); }

    fn unstow(load: &mut FlightLoad<'_>) { load.freight.pop(); }

    fn manifest_weight(&self, _config: &PlannerConfig) -> f64 { self.weight_kg }
}

impl Stowable for MailData {
    const KIND: &'static str = "mail";

    fn stow(self, load: &mut FlightLoad<'_>) { load.mail.push(self); }

    fn unstow(load: &mut FlightLoad<'_>) { load.mail.pop(); }

    fn manifest_weight(&self, _config: &PlannerConfig) -> f64 { self.weight_kg }
}
