//! Caller-owned tunables of the planner.
//!
//! A [`PlannerConfig`] is built once (from defaults or a JSON file) and passed by
//! reference into every entry point. The library never reads the environment.

use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use strum_macros::Display;

/// Item categories in the order the baseline optimizer assigns them.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CategoryKind {
    Passenger,
    Mail,
    Freight,
}

/// Connection settings for the external optimization service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssistConfig {
    /// Root URL of the service, assistance is disabled when unset.
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for AssistConfig {
    fn default() -> Self { Self { base_url: None, timeout_secs: 30 } }
}

impl AssistConfig {
    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Body weight assumed for passengers without a scale reading.
    pub standard_passenger_weight_kg: f64,
    /// Safety buffer below MTOW, in percent. Loads inside it raise `NEAR_MAX_WEIGHT`.
    pub buffer_percentage: f64,
    /// Fill ratio above which a compartment is reported as nearly full.
    pub compartment_near_full_ratio: f64,
    /// Spare margin a flight needs to receive freight during rebalancing.
    pub rebalance_min_margin_kg: f64,
    pub category_order: Vec<CategoryKind>,
    /// Re-run the engine on flights touched by the rebalancing pass.
    pub revalidate_after_rebalance: bool,
    pub assist: AssistConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            standard_passenger_weight_kg: 88.0,
            buffer_percentage: 5.0,
            compartment_near_full_ratio: 0.9,
            rebalance_min_margin_kg: 50.0,
            category_order: vec![CategoryKind::Passenger, CategoryKind::Mail, CategoryKind::Freight],
            revalidate_after_rebalance: false,
            assist: AssistConfig::default(),
        }
    }
}

/// Failure to read a configuration or request file.
#[derive(Debug, Display)]
pub enum InputError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl std::error::Error for InputError {}

impl From<std::io::Error> for InputError {
    fn from(value: std::io::Error) -> Self { InputError::Io(value) }
}

impl From<serde_json::Error> for InputError {
    fn from(value: serde_json::Error) -> Self { InputError::Parse(value) }
}

impl PlannerConfig {
    /// Reads and validates a configuration from a JSON file.
    /// Missing keys keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let raw = std::fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.standard_passenger_weight_kg.is_nan() || self.standard_passenger_weight_kg <= 0.0 {
            return Err(InputError::Invalid("standardPassengerWeightKg must be positive".into()));
        }
        if !(0.0..100.0).contains(&self.buffer_percentage) {
            return Err(InputError::Invalid("bufferPercentage must lie in [0, 100)".into()));
        }
        if self.compartment_near_full_ratio.is_nan()
            || self.compartment_near_full_ratio <= 0.0
            || self.compartment_near_full_ratio > 1.0
        {
            return Err(InputError::Invalid("compartmentNearFullRatio must lie in (0, 1]".into()));
        }
        if self.rebalance_min_margin_kg.is_nan() || self.rebalance_min_margin_kg < 0.0 {
            return Err(InputError::Invalid("rebalanceMinMarginKg must not be negative".into()));
        }
        Ok(())
    }

    /// Fraction of MTOW above which a load counts as near the limit.
    pub fn near_max_ratio(&self) -> f64 { 1.0 - self.buffer_percentage / 100.0 }

    /// The configured category order, completed with any category the
    /// caller left out and stripped of duplicates.
    pub fn assignment_order(&self) -> Vec<CategoryKind> {
        let defaults = [CategoryKind::Passenger, CategoryKind::Mail, CategoryKind::Freight];
        let mut order: Vec<CategoryKind> = Vec::with_capacity(defaults.len());
        for kind in self.category_order.iter().chain(defaults.iter()) {
            if !order.contains(kind) {
                order.push(*kind);
            }
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.standard_passenger_weight_kg, 88.0);
        assert!((config.near_max_ratio() - 0.95).abs() < 1e-12);
        assert_eq!(config.assignment_order(), vec![
            CategoryKind::Passenger,
            CategoryKind::Mail,
            CategoryKind::Freight
        ]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PlannerConfig = serde_json::from_str(
            r#"{"standardPassengerWeightKg": 90.0, "categoryOrder": ["freight", "freight"]}"#,
        )
        .unwrap();
        assert_eq!(config.standard_passenger_weight_kg, 90.0);
        assert_eq!(config.buffer_percentage, 5.0);
        assert_eq!(config.assignment_order(), vec![
            CategoryKind::Freight,
            CategoryKind::Passenger,
            CategoryKind::Mail
        ]);
        assert_eq!(config.assist.timeout_secs, 30);
    }

    #[test]
    fn test_rejects_bad_buffer() {
        let config = PlannerConfig { buffer_percentage: 120.0, ..PlannerConfig::default() };
        assert!(matches!(config.validate(), Err(InputError::Invalid(_))));
    }
}
