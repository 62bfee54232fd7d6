//! Closed-form primal recovery and dual evaluation.

use rand::Rng;

use super::instance::UflInstance;
use super::solution::UflSolution;
use crate::subgrad::RelaxedProblem;

impl UflInstance {
    /// Recovers a best primal candidate for the given dual prices.
    ///
    /// For every pair the reduced value is `C[i][j] - multipliers[i]`,
    /// floored at zero. A site opens iff its summed reduced value strictly
    /// exceeds its opening cost; ties stay closed. A demand is assigned to
    /// a site iff the site is open and the unfloored reduced value is
    /// strictly positive; ties stay unassigned. O(demands * sites),
    /// deterministic, and defined for prices of either sign.
    pub fn recover(&self, multipliers: &[f64]) -> UflSolution {
        debug_assert_eq!(multipliers.len(), self.demands());

        let mut open = Vec::with_capacity(self.sites());
        for j in 0..self.sites() {
            let mut surplus = 0.0;
            for (i, price) in multipliers.iter().enumerate() {
                let reduced = self.assign_value(i, j) - price;
                if reduced > 0.0 {
                    surplus += reduced;
                }
            }
            open.push(surplus - self.open_cost(j) > 0.0);
        }

        let mut assign = Vec::with_capacity(self.demands() * self.sites());
        for (i, price) in multipliers.iter().enumerate() {
            for (j, &site_open) in open.iter().enumerate() {
                assign.push(site_open && self.assign_value(i, j) - price > 0.0);
            }
        }

        UflSolution::new(self.sites(), open, assign)
    }

    /// Original objective: assignment values earned minus opening costs paid.
    pub fn objective(&self, solution: &UflSolution) -> f64 {
        let mut total = 0.0;
        for i in 0..self.demands() {
            for j in 0..self.sites() {
                if solution.is_assigned(i, j) {
                    total += self.assign_value(i, j);
                }
            }
        }
        for j in 0..self.sites() {
            if solution.is_open(j) {
                total -= self.open_cost(j);
            }
        }
        total
    }

    /// Lagrangian value: the objective plus the priced residual of each
    /// covering constraint.
    pub fn lagrangian(&self, solution: &UflSolution, multipliers: &[f64]) -> f64 {
        debug_assert_eq!(multipliers.len(), self.demands());

        let mut value = self.objective(solution);
        for (i, price) in multipliers.iter().enumerate() {
            value += price * (1.0 - solution.coverage(i) as f64);
        }
        value
    }

    /// Covering residual `1 - coverage(i)` per demand row.
    pub fn subgradient(&self, solution: &UflSolution) -> Vec<f64> {
        (0..self.demands())
            .map(|i| 1.0 - solution.coverage(i) as f64)
            .collect()
    }

    /// A random warm start: open one site and assign every demand to it.
    pub fn random_solution<R: Rng>(&self, rng: &mut R) -> UflSolution {
        let picked = rng.random_range(0..self.sites());
        let open: Vec<bool> = (0..self.sites()).map(|j| j == picked).collect();
        let mut assign = vec![false; self.demands() * self.sites()];
        for i in 0..self.demands() {
            assign[i * self.sites() + picked] = true;
        }
        UflSolution::new(self.sites(), open, assign)
    }
}

impl RelaxedProblem for UflInstance {
    type Solution = UflSolution;

    fn multiplier_len(&self) -> usize {
        self.demands()
    }

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> UflSolution {
        self.random_solution(rng)
    }

    fn recover(&self, multipliers: &[f64]) -> UflSolution {
        UflInstance::recover(self, multipliers)
    }

    fn objective(&self, solution: &UflSolution) -> f64 {
        UflInstance::objective(self, solution)
    }

    fn lagrangian(&self, solution: &UflSolution, multipliers: &[f64]) -> f64 {
        UflInstance::lagrangian(self, solution, multipliers)
    }

    fn subgradient(&self, solution: &UflSolution) -> Vec<f64> {
        UflInstance::subgradient(self, solution)
    }
}
