//! Step-size state and update rules.

use super::config::StepSizeRule;

/// Mutable step-size state for one run.
///
/// Holds the current step `a` and the live adaptive aggressiveness `rho`,
/// together with their initial values so a run can be restarted with
/// [`reset`](StepSize::reset). The rule itself stays in the configuration;
/// this struct only carries what mutates.
#[derive(Debug, Clone)]
pub struct StepSize {
    a: f64,
    a0: f64,
    rho: f64,
    rho0: f64,
}

impl StepSize {
    /// Creates step state with the given initial step and aggressiveness.
    pub fn new(initial_step: f64, rho: f64) -> Self {
        Self {
            a: initial_step,
            a0: initial_step,
            rho,
            rho0: rho,
        }
    }

    /// Creates step state matching the rule's parameters.
    ///
    /// Geometric runs never touch `rho`; it is seeded with its conventional
    /// value so `reset` behaves uniformly.
    pub fn for_rule(initial_step: f64, rule: &StepSizeRule) -> Self {
        match *rule {
            StepSizeRule::Adaptive { rho, .. } => Self::new(initial_step, rho),
            StepSizeRule::Geometric { .. } => Self::new(initial_step, 2.0),
        }
    }

    /// The current step size.
    pub fn value(&self) -> f64 {
        self.a
    }

    /// The live adaptive aggressiveness.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Restores the initial step and aggressiveness.
    pub fn reset(&mut self) {
        self.a = self.a0;
        self.rho = self.rho0;
    }

    /// Advances the step under `rule` and returns whether a stall shrink
    /// occurred.
    ///
    /// - `Geometric`: `a *= power`; never shrinks.
    /// - `Adaptive`: if `unimproved_iters` strictly exceeds
    ///   `unimproved_iter_max`, halve `rho` first and report the shrink
    ///   (the driver resets its stall counter on seeing it); then
    ///   `a = (lagrangian - target) * rho / ||g||^2`, the Polyak form with
    ///   the target standing in for the unknown dual optimum. Overshooting
    ///   the target flips the sign, which the driver observes as a
    ///   vanished step.
    ///
    /// The squared norm is guarded: a numerically vanished subgradient
    /// forces `a = 0` instead of dividing, which the driver then observes
    /// as a vanished step. The driver's convergence check fires before the
    /// division can ever see a zero norm, so the guard is unreachable in
    /// the normal loop.
    pub fn advance(
        &mut self,
        rule: &StepSizeRule,
        subgradient: &[f64],
        lagrangian: f64,
        target: f64,
        unimproved_iters: usize,
        unimproved_iter_max: usize,
    ) -> bool {
        match *rule {
            StepSizeRule::Geometric { power } => {
                self.a *= power;
                false
            }
            StepSizeRule::Adaptive { .. } => {
                let shrink = unimproved_iters > unimproved_iter_max;
                if shrink {
                    self.rho *= 0.5;
                }
                let norm_sq: f64 = subgradient.iter().map(|g| g * g).sum();
                if norm_sq <= f64::EPSILON {
                    self.a = 0.0;
                    return shrink;
                }
                self.a = (lagrangian - target) * self.rho / norm_sq;
                shrink
            }
        }
    }
}
