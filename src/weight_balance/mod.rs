//! Weight & balance computation for a single aircraft load.
//!
//! [`WeightBalanceEngine::evaluate`] turns an aircraft and a manifest into a
//! [`WBResult`], placing passengers into seats and baggage, freight and mail
//! into compartments on the way. [`WeightBalanceEngine::evaluate_legs`] repeats
//! that for every leg of a route while items disembark.

mod compartments;
mod engine;
mod multi_leg;
mod result;
mod seating;

pub use engine::{LoadRequest, WeightBalanceEngine};
pub use multi_leg::LegResult;
pub use result::{CompartmentLoad, WBResult};
