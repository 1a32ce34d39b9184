//! Weight & balance engine and load planner for small bush-airline aircraft.
//!
//! [`weight_balance`] computes totals, CG and diagnostics for one load.
//! [`optimizer`] spreads waiting passengers, mail and freight over the flights
//! of a day. [`assist`] optionally consults an external optimizer and only
//! trusts what the engine confirms.
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

pub mod assist;
pub mod config;
mod http_handler;
pub mod load_model;
mod logger;
pub mod optimizer;
pub mod weight_balance;

#[cfg(test)]
mod test_fixtures;
