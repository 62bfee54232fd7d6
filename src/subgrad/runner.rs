//! Subgradient execution loop.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::{ConfigError, StepSizeRule, SubgradConfig, TargetAnchor};
use super::step::StepSize;
use super::tracker::BoundTracker;
use super::types::RelaxedProblem;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The subgradient infinity norm dropped below `eps_subgradient`: the
    /// recovered candidate satisfies the relaxed constraints to tolerance.
    Converged,
    /// The step size dropped below `eps_step` before the multiplier update.
    StepVanished,
    /// The iteration cap was reached.
    MaxIterations,
}

/// One row of the per-iteration trace.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Lagrangian value at the recovered candidate.
    pub lagrangian: f64,
    /// Tracker gap after this evaluation.
    pub gap: f64,
    /// Subgradient infinity norm.
    pub subgradient_norm: f64,
    /// Step size after the rule was applied this iteration (for the two
    /// early exits, the last applied step).
    pub step: f64,
}

/// Result of a subgradient run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubgradResult<S: Clone> {
    /// The last recovered primal candidate.
    pub solution: S,
    /// Final dual multipliers.
    pub multipliers: Vec<f64>,
    /// Objective value of `solution`.
    pub objective: f64,
    /// Lagrangian value of `solution` under `multipliers`.
    pub lagrangian: f64,
    /// Best (lowest) Lagrangian value seen across the run.
    pub best_bound: f64,
    /// Final tracker gap.
    pub gap: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Why the run stopped.
    pub termination: Termination,
    /// Per-iteration trace; empty when `record_trace` is off.
    pub trace: Vec<IterationRecord>,
}

/// Executes subgradient dual optimization.
pub struct SubgradRunner;

impl SubgradRunner {
    /// Runs the dual loop on `problem` under `config`.
    ///
    /// The configuration is validated up front; a bad configuration is
    /// returned as an error before any iteration. The loop itself cannot
    /// fail: vanishing subgradients and steps are ordinary terminations.
    ///
    /// Multipliers start at all-ones and are updated without sign
    /// projection, matching the closed-form recovery, which accepts
    /// multipliers of either sign.
    pub fn run<P: RelaxedProblem>(
        problem: &P,
        config: &SubgradConfig,
    ) -> Result<SubgradResult<P::Solution>, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };

        let m = problem.multiplier_len();
        let mut multipliers = vec![1.0; m];

        // The random warm start exists to anchor the adaptive target; the
        // first recovery immediately replaces it as the candidate.
        let warm_start = problem.initial_solution(&mut rng);
        let frozen_target = problem.lagrangian(&warm_start, &multipliers);

        let mut tracker = BoundTracker::new();
        let mut step = StepSize::for_rule(config.initial_step, &config.step_rule);
        let mut trace = Vec::new();

        let mut solution = warm_start;
        let mut objective = problem.objective(&solution);
        let mut lagrangian = frozen_target;
        let mut iterations = 0;
        let mut termination = Termination::MaxIterations;

        for iteration in 0..config.max_iterations {
            solution = problem.recover(&multipliers);
            objective = problem.objective(&solution);
            lagrangian = problem.lagrangian(&solution, &multipliers);
            tracker.observe(lagrangian);

            let subgradient = problem.subgradient(&solution);
            let residual_norm = subgradient.iter().fold(0.0f64, |acc, g| acc.max(g.abs()));

            if residual_norm < config.eps_subgradient {
                iterations = iteration + 1;
                termination = Termination::Converged;
                if config.record_trace {
                    trace.push(IterationRecord {
                        iteration,
                        lagrangian,
                        gap: tracker.gap(),
                        subgradient_norm: residual_norm,
                        step: step.value(),
                    });
                }
                break;
            }

            let target = match config.step_rule {
                StepSizeRule::Adaptive {
                    anchor: TargetAnchor::RunningBest,
                    ..
                } => tracker.best(),
                _ => frozen_target,
            };
            let shrunk = step.advance(
                &config.step_rule,
                &subgradient,
                lagrangian,
                target,
                tracker.unimproved_iters(),
                config.unimproved_iter_max,
            );
            if shrunk {
                tracing::debug!(
                    iteration,
                    rho = step.rho(),
                    unimproved = tracker.unimproved_iters(),
                    "stall backoff: halved rho"
                );
                tracker.reset_unimproved();
            }

            if step.value() < config.eps_step {
                iterations = iteration + 1;
                termination = Termination::StepVanished;
                if config.record_trace {
                    trace.push(IterationRecord {
                        iteration,
                        lagrangian,
                        gap: tracker.gap(),
                        subgradient_norm: residual_norm,
                        step: step.value(),
                    });
                }
                break;
            }

            for (price, g) in multipliers.iter_mut().zip(&subgradient) {
                *price -= step.value() * g;
            }

            tracing::trace!(
                iteration,
                lagrangian,
                gap = tracker.gap(),
                residual_norm,
                step = step.value(),
                "dual iteration"
            );
            if config.record_trace {
                trace.push(IterationRecord {
                    iteration,
                    lagrangian,
                    gap: tracker.gap(),
                    subgradient_norm: residual_norm,
                    step: step.value(),
                });
            }
            iterations = iteration + 1;
        }

        tracing::debug!(
            ?termination,
            iterations,
            best_bound = tracker.best(),
            "subgradient run finished"
        );

        Ok(SubgradResult {
            solution,
            multipliers,
            objective,
            lagrangian,
            best_bound: tracker.best(),
            gap: tracker.gap(),
            iterations,
            termination,
            trace,
        })
    }
}
