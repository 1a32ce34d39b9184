//! Small fleet and manifest builders shared by the unit tests.

use crate::load_model::{
    AircraftConfig, CargoPriority, CompartmentConfig, FlightData, FreightData, MailData, PassengerData,
    PassengerPriority, PassengerWeight, RouteLeg, SeatConfig,
};
use chrono::{TimeZone, Utc};

fn seat(number: &str, arm: f64) -> SeatConfig {
    SeatConfig { seat_number: number.to_string(), arm, max_weight_kg: 120.0 }
}

fn compartment(name: &str, capacity_kg: f64, arm: f64) -> CompartmentConfig {
    CompartmentConfig { name: name.to_string(), capacity_kg, arm }
}

/// Four seats, a small forward and a larger aft compartment, MTOW 2000 kg.
/// Empty aircraft plus standard pilot sits at CG 1.917.
pub(crate) fn caravan() -> AircraftConfig {
    AircraftConfig {
        id: "N208TS".to_string(),
        empty_weight_kg: 1000.0,
        empty_arm: 2.0,
        pilot_standard_weight_kg: 90.0,
        pilot_arm: 1.0,
        fuel_arm: 2.2,
        mtow_kg: 2000.0,
        cg_min: 1.6,
        cg_max: 2.4,
        seats: vec![seat("2B", 2.8), seat("1A", 1.2), seat("2A", 2.4), seat("1B", 1.6)],
        compartments: vec![compartment("fwd", 100.0, 1.2), compartment("aft", 200.0, 3.0)],
        seat_count: 4,
    }
}

/// One seat at arm 1.5 and a single 300 kg hold, MTOW 1000 kg, every other arm at 1.0.
pub(crate) fn single_seater() -> AircraftConfig {
    AircraftConfig {
        id: "N185SS".to_string(),
        empty_weight_kg: 600.0,
        empty_arm: 1.0,
        pilot_standard_weight_kg: 90.0,
        pilot_arm: 1.0,
        fuel_arm: 1.0,
        mtow_kg: 1000.0,
        cg_min: 0.9,
        cg_max: 1.6,
        seats: vec![seat("1", 1.5)],
        compartments: vec![compartment("hold", 300.0, 1.0)],
        seat_count: 1,
    }
}

/// [`single_seater`] with compartment A (100 kg, arm 1.0) and B (200 kg, arm 3.0).
pub(crate) fn two_bin_single_seater() -> AircraftConfig {
    AircraftConfig {
        compartments: vec![compartment("A", 100.0, 1.0), compartment("B", 200.0, 3.0)],
        ..single_seater()
    }
}

pub(crate) fn passenger(id: &str, destination: &str) -> PassengerData {
    PassengerData {
        id: id.to_string(),
        weight: PassengerWeight::Standard,
        baggage_weight_kg: 0.0,
        destination: destination.to_string(),
        priority: PassengerPriority::Normal,
        seat_number: None,
        leg: None,
    }
}

pub(crate) fn weighed_passenger(id: &str, kg: f64, destination: &str) -> PassengerData {
    PassengerData { weight: PassengerWeight::Actual(kg), ..passenger(id, destination) }
}

pub(crate) fn freight(id: &str, kg: f64, destination: &str) -> FreightData {
    FreightData {
        id: id.to_string(),
        weight_kg: kg,
        destination: destination.to_string(),
        priority: CargoPriority::Standard,
        compartment: None,
        leg: None,
    }
}

pub(crate) fn mail(id: &str, kg: f64, village: &str) -> MailData {
    MailData {
        id: id.to_string(),
        weight_kg: kg,
        village: village.to_string(),
        priority: CargoPriority::Standard,
        compartment: None,
        leg: None,
    }
}

/// An empty flight departing at `hour` UTC and stopping at `stops` in order.
pub(crate) fn flight(id: &str, aircraft: AircraftConfig, hour: u32, stops: &[&str]) -> FlightData {
    FlightData {
        id: id.to_string(),
        aircraft,
        departure: Utc.with_ymd_and_hms(2024, 3, 14, hour, 0, 0).unwrap(),
        route: stops
            .iter()
            .zip(1..)
            .map(|(stop, leg)| RouteLeg { leg, destination: (*stop).to_string(), eta: None })
            .collect(),
        pilot_weight_kg: None,
        fuel_weight_kg: 0.0,
        passengers: Vec::new(),
        freight: Vec::new(),
        mail: Vec::new(),
    }
}
