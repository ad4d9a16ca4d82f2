use crate::slack_form::{DEFAULT_TOLERANCE, SlackForm};
use crate::solution::Solution;
use crate::standard_form::StandardForm;

/// Two-phase simplex solver for standard form programs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solver {
    /// Tolerance for the phase one feasibility test
    tolerance: f64,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Solve `form` from a fresh slack form; `form` itself is left untouched.
    pub fn solve(&self, form: &StandardForm) -> Solution {
        SlackForm::from_standard_form(form)
            .with_tolerance(self.tolerance)
            .solve()
    }
}
