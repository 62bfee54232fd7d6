//! Core trait for subgradient dual optimization.

use rand::Rng;

/// A combinatorial problem with one family of constraints relaxed into the
/// objective.
///
/// The implementor supplies the problem-specific pieces — primal recovery
/// from multipliers, objective and Lagrangian evaluation, and the
/// relaxed-constraint residual. The driver owns the dual state (multipliers,
/// step size, bound tracking) and never inspects the solution type.
///
/// All methods must be pure: for a fixed instance, identical inputs produce
/// identical outputs. The driver relies on this for reproducibility.
///
/// # Examples
///
/// ```ignore
/// struct Knapsack { weight: Vec<f64>, value: Vec<f64>, capacity: f64 }
///
/// impl RelaxedProblem for Knapsack {
///     type Solution = Vec<bool>;
///
///     fn multiplier_len(&self) -> usize { 1 }
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
///         let mut picked = vec![false; self.weight.len()];
///         picked[rng.random_range(0..picked.len())] = true;
///         picked
///     }
///
///     fn recover(&self, multipliers: &[f64]) -> Vec<bool> {
///         // take items whose value exceeds the priced weight
///         self.weight
///             .iter()
///             .zip(&self.value)
///             .map(|(w, v)| v - multipliers[0] * w > 0.0)
///             .collect()
///     }
///     // ... objective, lagrangian, subgradient
/// }
/// ```
pub trait RelaxedProblem {
    /// The primal candidate type, fully determined by the multipliers.
    type Solution: Clone;

    /// Number of relaxed constraints, i.e. the multiplier vector length.
    fn multiplier_len(&self) -> usize;

    /// A random primal point used to seed the run before the first recovery.
    ///
    /// Its Lagrangian value anchors the adaptive step rule's frozen target.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Recovers a primal candidate from the given multipliers.
    fn recover(&self, multipliers: &[f64]) -> Self::Solution;

    /// The original (unrelaxed) objective value of a candidate.
    fn objective(&self, solution: &Self::Solution) -> f64;

    /// The Lagrangian value: objective plus the priced residual of the
    /// relaxed constraints.
    fn lagrangian(&self, solution: &Self::Solution, multipliers: &[f64]) -> f64;

    /// The relaxed-constraint residual at a candidate, one entry per
    /// multiplier. This is the direction the driver moves the multipliers in.
    fn subgradient(&self, solution: &Self::Solution) -> Vec<f64>;
}
