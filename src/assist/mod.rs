//! Optional help from an external optimization service.
//!
//! The service receives an [`OptimizationSnapshot`] of a run that could not
//! place everything and answers with a [`ProposedPlan`]. Proposals are never
//! trusted: the [`ProposalValidator`] rebuilds every proposed flight from ids
//! and only a proposal whose flights all pass the weight & balance engine
//! replaces the local plan. [`LoadPlanner`] ties the steps together.

mod external;
mod planner;
mod snapshot;
mod validator;

pub use crate::http_handler::http_response::optimize_proposal::{ProposedFlight, ProposedPlan};
pub use crate::http_handler::http_response::response_common::ResponseError;
pub use external::{AssistClient, ExternalOptimizer};
pub use planner::LoadPlanner;
pub use snapshot::{OptimizationSnapshot, SnapshotConstraints};
pub use validator::{ProposalValidator, ProposalVerdict};

#[cfg(test)]
mod tests;
