//! Instance data and validation.

use thiserror::Error;

/// Errors raised when constructing an instance from external data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// The instance had no demand rows or no candidate sites.
    #[error("instance needs at least one demand row and one candidate site")]
    Empty,
    /// The assignment matrix length did not match `demands * sites`.
    #[error("assignment matrix has {got} entries, expected {expected} ({demands} rows x {sites} sites)")]
    AssignShape {
        got: usize,
        expected: usize,
        demands: usize,
        sites: usize,
    },
    /// The opening-cost vector length did not match the site count.
    #[error("opening cost vector has {got} entries, expected {expected}")]
    OpenShape { got: usize, expected: usize },
    /// A ragged row in row-wise input.
    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    /// A cost entry was NaN or infinite.
    #[error("costs must be finite")]
    NonFinite,
}

/// An uncapacitated facility-opening-and-assignment instance.
///
/// Immutable for the life of a run: `demands x sites` assignment values in
/// row-major order and one opening cost per site. The objective credits the
/// value of every made assignment and charges the opening cost of every
/// opened site.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UflInstance {
    demands: usize,
    sites: usize,
    assign_value: Vec<f64>,
    open_cost: Vec<f64>,
}

impl UflInstance {
    /// Builds an instance from a row-major assignment matrix.
    pub fn new(
        demands: usize,
        sites: usize,
        assign_value: Vec<f64>,
        open_cost: Vec<f64>,
    ) -> Result<Self, InstanceError> {
        if demands == 0 || sites == 0 {
            return Err(InstanceError::Empty);
        }
        if assign_value.len() != demands * sites {
            return Err(InstanceError::AssignShape {
                got: assign_value.len(),
                expected: demands * sites,
                demands,
                sites,
            });
        }
        if open_cost.len() != sites {
            return Err(InstanceError::OpenShape {
                got: open_cost.len(),
                expected: sites,
            });
        }
        if assign_value.iter().chain(&open_cost).any(|v| !v.is_finite()) {
            return Err(InstanceError::NonFinite);
        }
        Ok(Self {
            demands,
            sites,
            assign_value,
            open_cost,
        })
    }

    /// Builds an instance from one `Vec` per demand row.
    ///
    /// # Examples
    ///
    /// ```
    /// use lagrel::ufl::UflInstance;
    ///
    /// let instance = UflInstance::from_rows(
    ///     vec![vec![1.0, 5.0], vec![5.0, 1.0]],
    ///     vec![0.5, 0.5],
    /// )
    /// .unwrap();
    /// assert_eq!(instance.demands(), 2);
    /// assert_eq!(instance.sites(), 2);
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>, open_cost: Vec<f64>) -> Result<Self, InstanceError> {
        let demands = rows.len();
        let sites = open_cost.len();
        if demands == 0 || sites == 0 {
            return Err(InstanceError::Empty);
        }
        let mut assign_value = Vec::with_capacity(demands * sites);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != sites {
                return Err(InstanceError::RaggedRow {
                    row,
                    got: values.len(),
                    expected: sites,
                });
            }
            assign_value.extend(values);
        }
        Self::new(demands, sites, assign_value, open_cost)
    }

    /// Number of demand rows (relaxed covering constraints).
    pub fn demands(&self) -> usize {
        self.demands
    }

    /// Number of candidate sites.
    pub fn sites(&self) -> usize {
        self.sites
    }

    /// Assignment value of demand `i` at site `j`.
    #[inline]
    pub fn assign_value(&self, i: usize, j: usize) -> f64 {
        self.assign_value[i * self.sites + j]
    }

    /// Opening cost of site `j`.
    #[inline]
    pub fn open_cost(&self, j: usize) -> f64 {
        self.open_cost[j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let instance =
            UflInstance::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![1.0; 3]).unwrap();
        assert_eq!(instance.demands(), 2);
        assert_eq!(instance.sites(), 3);
        assert_eq!(instance.assign_value(0, 2), 3.0);
        assert_eq!(instance.assign_value(1, 0), 4.0);
        assert_eq!(instance.open_cost(1), 1.0);
    }

    #[test]
    fn test_empty_rejected() {
        let err = UflInstance::new(0, 3, vec![], vec![1.0; 3]).unwrap_err();
        assert_eq!(err, InstanceError::Empty);

        let err = UflInstance::from_rows(vec![], vec![1.0]).unwrap_err();
        assert_eq!(err, InstanceError::Empty);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let err = UflInstance::new(2, 2, vec![1.0; 3], vec![1.0; 2]).unwrap_err();
        assert!(matches!(err, InstanceError::AssignShape { got: 3, .. }));

        let err = UflInstance::new(2, 2, vec![1.0; 4], vec![1.0; 3]).unwrap_err();
        assert_eq!(
            err,
            InstanceError::OpenShape {
                got: 3,
                expected: 2
            }
        );
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err =
            UflInstance::from_rows(vec![vec![1.0, 2.0], vec![3.0]], vec![1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            InstanceError::RaggedRow {
                row: 1,
                got: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = UflInstance::new(1, 2, vec![1.0, f64::NAN], vec![1.0, 1.0]).unwrap_err();
        assert_eq!(err, InstanceError::NonFinite);

        let err = UflInstance::new(1, 2, vec![1.0, 2.0], vec![f64::INFINITY, 1.0]).unwrap_err();
        assert_eq!(err, InstanceError::NonFinite);
    }
}
