use crate::config::InputError;
use crate::load_model::{FlightData, FreightData, MailData, Manifested, PassengerData};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};

/// Input of one optimization run: the flights of the day with their
/// committed loads and the pools of items still waiting for a flight.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub flights: Vec<FlightData>,
    #[serde(default)]
    pub passengers: Vec<PassengerData>,
    #[serde(default)]
    pub freight: Vec<FreightData>,
    #[serde(default)]
    pub mail: Vec<MailData>,
}

impl OptimizationRequest {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Unassigned passengers followed by those already booked on a flight.
    pub fn all_passengers(&self) -> impl Iterator<Item = &PassengerData> {
        self.passengers.iter().chain(self.flights.iter().flat_map(|f| f.passengers.iter()))
    }

    pub fn all_freight(&self) -> impl Iterator<Item = &FreightData> {
        self.freight.iter().chain(self.flights.iter().flat_map(|f| f.freight.iter()))
    }

    pub fn all_mail(&self) -> impl Iterator<Item = &MailData> {
        self.mail.iter().chain(self.flights.iter().flat_map(|f| f.mail.iter()))
    }

    pub fn flight(&self, id: &str) -> Option<&FlightData> { self.flights.iter().find(|f| f.id == id) }

    /// Whether at least one flight of the request stops at `destination`.
    pub fn is_served(&self, destination: &str) -> bool { self.flights.iter().any(|f| f.serves(destination)) }

    /// Ids used more than once, either among flights or among manifested items.
    pub fn duplicate_ids(&self) -> Vec<String> {
        let flights = self.flights.iter().map(|f| f.id.as_str()).duplicates();
        let items = self
            .all_passengers()
            .map(Manifested::id)
            .chain(self.all_freight().map(Manifested::id))
            .chain(self.all_mail().map(Manifested::id))
            .duplicates();
        flights.chain(items).map(str::to_string).collect()
    }
}

/// Id index over every item of a request, committed or not.
pub(crate) struct ItemPools<'r> {
    passengers: HashMap<&'r str, &'r PassengerData>,
    freight: HashMap<&'r str, &'r FreightData>,
    mail: HashMap<&'r str, &'r MailData>,
}

impl<'r> ItemPools<'r> {
    pub(crate) fn new(request: &'r OptimizationRequest) -> Self {
        Self {
            passengers: request.all_passengers().map(|p| (p.id.as_str(), p)).collect(),
            freight: request.all_freight().map(|f| (f.id.as_str(), f)).collect(),
            mail: request.all_mail().map(|m| (m.id.as_str(), m)).collect(),
        }
    }

    pub(crate) fn passenger(&self, id: &str) -> Option<&'r PassengerData> { self.passengers.get(id).copied() }

    pub(crate) fn freight(&self, id: &str) -> Option<&'r FreightData> { self.freight.get(id).copied() }

    pub(crate) fn mail(&self, id: &str) -> Option<&'r MailData> { self.mail.get(id).copied() }

    pub(crate) fn passenger_count(&self) -> usize { self.passengers.len() }

    pub(crate) fn freight_count(&self) -> usize { self.freight.len() }

    pub(crate) fn mail_count(&self) -> usize { self.mail.len() }
}
