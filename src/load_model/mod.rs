//! Value types shared by the weight & balance engine and the optimizer.
//!
//! Nothing in here carries behaviour beyond small accessors, destination
//! matching and aircraft sanity checks.

mod aircraft;
mod cargo;
mod diagnostic;
mod flight;
mod passenger;
mod weight_item;

pub use aircraft::{AircraftConfig, AircraftConfigError, CompartmentConfig, SeatConfig};
pub use cargo::{CargoItem, CargoPriority, FreightData, MailData};
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use flight::{FlightData, RouteLeg, destinations_match};
pub use passenger::{PassengerData, PassengerPriority, PassengerWeight};
pub use weight_item::{ItemCategory, WeightItem};

/// Anything that is put on a manifest and leaves the aircraft somewhere.
pub trait Manifested {
    /// Unique id of the manifested item.
    fn id(&self) -> &str;
    /// Name of the stop where the item disembarks.
    fn destination(&self) -> &str;
}

#[cfg(test)]
mod tests;
