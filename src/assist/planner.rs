use super::{ExternalOptimizer, OptimizationSnapshot, ProposalValidator};
use crate::config::PlannerConfig;
use crate::load_model::{Diagnostic, DiagnosticCode};
use crate::optimizer::{
    BaselineOptimizer, LocalSearchImprover, OptimizationRequest, OptimizationResult, OptimizationStatus,
};
use crate::{info, log, warn};

/// Full planning pipeline of one request.
///
/// Runs the [`BaselineOptimizer`] and the [`LocalSearchImprover`], then,
/// when the plan is infeasible and an [`ExternalOptimizer`] is at hand, asks
/// it for a better plan. Every external fault falls back to the local plan.
/// No state outlives a call, concurrent runs share nothing but the config.
#[derive(Debug, Clone, Copy)]
pub struct LoadPlanner<'c> {
    config: &'c PlannerConfig,
    baseline: BaselineOptimizer<'c>,
    improver: LocalSearchImprover<'c>,
    validator: ProposalValidator<'c>,
}

impl<'c> LoadPlanner<'c> {
    pub fn new(config: &'c PlannerConfig) -> Self {
        Self {
            config,
            baseline: BaselineOptimizer::new(config),
            improver: LocalSearchImprover::new(config),
            validator: ProposalValidator::new(config),
        }
    }

    /// Baseline plan followed by one rebalancing pass.
    pub fn plan(&self, request: &OptimizationRequest) -> OptimizationResult {
        let mut result = self.baseline.optimize(request);
        if result.status != OptimizationStatus::Error {
            let moves = self.improver.improve(&mut result, request);
            if moves > 0 {
                log!("Rebalancing moved {moves} freight items");
            }
        }
        result
    }

    /// [`Self::plan`] plus the optional external round trip.
    ///
    /// # Arguments
    /// * `request` - Flights and item pools to plan.
    /// * `assist` - External optimizer to consult, `None` disables assistance.
    ///
    /// # Returns
    /// The validated external plan when one was accepted, the local plan
    /// with a diagnostic about the attempt otherwise.
    pub async fn run(
        &self,
        request: &OptimizationRequest,
        assist: Option<&dyn ExternalOptimizer>,
    ) -> OptimizationResult {
        let mut result = self.plan(request);
        let Some(assist) = assist else {
            return result;
        };
        if result.status != OptimizationStatus::Infeasible {
            return result;
        }

        info!("Plan is infeasible, consulting the {}", assist.name());
        let proposal = {
            let snapshot = OptimizationSnapshot::new(request, &result, self.config);
            assist.propose(&snapshot).await
        };
        match proposal {
            Ok(proposal) => {
                let verdict = self.validator.validate(&proposal, request, &result);
                match verdict.result {
                    Some(mut accepted) if verdict.accepted => {
                        info!("Accepted plan from the {}, status {}", assist.name(), accepted.status);
                        accepted.diagnostics.push(Diagnostic::info(
                            DiagnosticCode::ExternalProposalAccepted,
                            format!("Plan proposed by the {} passed validation and replaces the local plan", assist.name()),
                        ));
                        accepted.explanation = format!("{} Plan proposed by the {}.", accepted.explanation, assist.name());
                        return accepted;
                    }
                    _ => {
                        let problems = verdict.diagnostics.len();
                        result.diagnostics.extend(verdict.diagnostics);
                        result.diagnostics.push(Diagnostic::warning(
                            DiagnosticCode::ExternalProposalRejected,
                            format!("Plan proposed by the {} was rejected with {problems} problems, keeping the local plan", assist.name()),
                        ));
                    }
                }
            }
            Err(e) => {
                warn!("The {} failed: {e}", assist.name());
                result.diagnostics.push(Diagnostic::warning(
                    DiagnosticCode::ExternalServiceFailed,
                    format!("The {} failed ({e}), keeping the local plan", assist.name()),
                ));
            }
        }
        result
    }
}
