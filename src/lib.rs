//! Lagrangian relaxation toolkit.
//!
//! Computes a dual bound (and a heuristic primal candidate) for
//! facility-opening-and-assignment problems by relaxing the covering
//! constraints into the objective and driving the dual prices with a
//! subgradient method:
//!
//! - **Subgradient driver** (`subgrad`): the generic dual-optimization loop —
//!   multiplier updates, geometric or adaptive (Polyak-style) step-size
//!   control with stall backoff, best-bound tracking, and a per-iteration
//!   trace. Works against any [`subgrad::RelaxedProblem`]; contains no
//!   facility-location concepts.
//! - **Facility location** (`ufl`): the uncapacitated
//!   opening-and-assignment instance with closed-form primal recovery from
//!   dual prices, objective/Lagrangian evaluation, and the covering-residual
//!   subgradient.
//!
//! No external mathematical-programming solver is involved anywhere: primal
//! recovery is closed-form and the dual loop is a pure in-memory computation,
//! deterministic for a fixed seed and configuration.
//!
//! # Example
//!
//! ```
//! use lagrel::subgrad::{SubgradConfig, SubgradRunner};
//! use lagrel::ufl::UflInstance;
//!
//! let instance = UflInstance::from_rows(
//!     vec![vec![1.0, 5.0], vec![5.0, 1.0]],
//!     vec![0.5, 0.5],
//! )
//! .unwrap();
//!
//! let config = SubgradConfig::default().with_seed(42);
//! let result = SubgradRunner::run(&instance, &config).unwrap();
//! assert!(result.iterations <= 1000);
//! ```

pub mod subgrad;
pub mod ufl;
