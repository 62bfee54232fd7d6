//! Subgradient dual optimization.
//!
//! A single-trajectory first-order method for the Lagrangian dual of a
//! relaxed combinatorial problem. At each iteration:
//!
//! 1. Recover a primal candidate from the current multipliers
//!    (closed form, supplied by the problem).
//! 2. Evaluate the objective and the Lagrangian; update the best bound.
//! 3. Compute the subgradient (the relaxed-constraint residual). A
//!    vanishing residual terminates the run.
//! 4. Advance the step size under the configured rule (geometric decay, or
//!    a Polyak-style adaptive rule with stall backoff).
//! 5. Update the multipliers along the subgradient, or stop if the step
//!    has vanished.
//!
//! # References
//!
//! - Held, M., Wolfe, P. & Crowder, H. P. (1974). "Validation of subgradient
//!   optimization", *Mathematical Programming* 6, 62-88.
//! - Polyak, B. T. (1969). "Minimization of unsmooth functionals",
//!   *USSR Computational Mathematics and Mathematical Physics* 9(3), 14-29.
//! - Fisher, M. L. (1981). "The Lagrangian Relaxation Method for Solving
//!   Integer Programming Problems", *Management Science* 27(1), 1-18.

mod config;
mod runner;
mod step;
mod tracker;
mod types;

pub use config::{ConfigError, StepSizeRule, SubgradConfig, TargetAnchor};
pub use runner::{IterationRecord, SubgradResult, SubgradRunner, Termination};
pub use step::StepSize;
pub use tracker::BoundTracker;
pub use types::RelaxedProblem;
