//! Assignment of unassigned passengers, mail and freight onto flights.
//!
//! The [`BaselineOptimizer`] builds a first greedy plan, asking the weight &
//! balance engine about every tentative placement. The [`LocalSearchImprover`]
//! then relieves overweight flights by moving freight between flights that
//! serve the same stop.

mod baseline;
mod explanation;
mod flight_state;
mod local_search;
mod request;
mod result;
mod summary;

pub use baseline::BaselineOptimizer;
pub use local_search::LocalSearchImprover;
pub use request::OptimizationRequest;
pub use result::{FlightAssignment, LegSummary, OptimizationResult, OptimizationStatus, UnassignedItems};

pub(crate) use flight_state::FlightLoad;
pub(crate) use request::ItemPools;
pub(crate) use summary::summarize;
