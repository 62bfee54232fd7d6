//! Uncapacitated facility opening and assignment.
//!
//! An instance holds an assignment-value matrix over demand rows and
//! candidate sites plus a per-site opening cost. The covering constraint
//! (each demand assigned exactly once) is the relaxed family: given dual
//! prices on the demands, a best primal candidate is recoverable in closed
//! form by comparing per-site reduced-value surpluses against opening costs.
//!
//! The module implements [`RelaxedProblem`](crate::subgrad::RelaxedProblem),
//! so instances plug directly into the subgradient driver.
//!
//! # References
//!
//! - Cornuéjols, G., Nemhauser, G. L. & Wolsey, L. A. (1990). "The
//!   uncapacitated facility location problem", in *Discrete Location
//!   Theory*, Wiley.
//! - Fisher, M. L. (1981). "The Lagrangian Relaxation Method for Solving
//!   Integer Programming Problems", *Management Science* 27(1), 1-18.

mod instance;
mod relaxation;
mod solution;

pub use instance::{InstanceError, UflInstance};
pub use solution::UflSolution;
