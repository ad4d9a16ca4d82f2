/// The result of solving a standard form program
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Solution status
    pub status: SolutionStatus,
    /// Value of every canonical column; only present when feasible
    pub values: Option<Vec<f64>>,
    /// Optimal objective value of the maximization problem.
    /// 0 when infeasible, +inf when unbounded.
    pub objective_value: f64,
    /// Number of pivots performed, both phases included
    pub pivots: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SolutionStatus {
    /// An optimal solution was found
    Feasible,
    /// No point satisfies all constraints
    Infeasible,
    /// The objective can be made arbitrarily large
    Unbounded,
}

impl Solution {
    pub fn feasible(values: Vec<f64>, objective_value: f64) -> Self {
        Self {
            status: SolutionStatus::Feasible,
            values: Some(values),
            objective_value,
            pivots: 0,
        }
    }

    pub fn infeasible() -> Self {
        Self {
            status: SolutionStatus::Infeasible,
            values: None,
            objective_value: 0.0,
            pivots: 0,
        }
    }

    pub fn unbounded() -> Self {
        Self {
            status: SolutionStatus::Unbounded,
            values: None,
            objective_value: f64::INFINITY,
            pivots: 0,
        }
    }

    pub(crate) fn with_pivots(mut self, pivots: usize) -> Self {
        self.pivots = pivots;
        self
    }

    pub fn is_feasible(&self) -> bool {
        self.status == SolutionStatus::Feasible
    }
}
