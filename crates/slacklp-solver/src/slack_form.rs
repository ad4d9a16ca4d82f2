use std::fmt;

use log::{debug, trace};

use crate::matrix::Matrix;
use crate::solution::Solution;
use crate::standard_form::StandardForm;

/// Tolerance used when deciding whether a value is effectively zero
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Which side of the partition a variable is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Basic,
    Nonbasic,
}

/// Result of running the pivoting loop to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotOutcome {
    Optimal,
    Unbounded,
}

/// Next step chosen by Bland's rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotChoice {
    Optimal,
    Unbounded { entering: usize },
    Pivot { entering: usize, leaving: usize },
}

/// Objective set aside while phase one runs
#[derive(Debug, Clone)]
struct SavedObjective {
    c: Vec<f64>,
    constant: f64,
    roles: Vec<Role>,
}

/// Slack form (dictionary) of a standard form program
///
/// z   = constant + sum_{j nonbasic} c[j] * x[j]
/// x_i = b[i] - sum_{j nonbasic} a[i][j] * x[j]    (i basic)
///
/// Variables `0..num_columns` are the canonical columns, the next `num_rows`
/// are the slack variables of each row. `a` is square and indexed by variable
/// id on both axes; rows of nonbasic variables and columns of basic variables
/// are kept at zero.
#[derive(Debug, Clone)]
pub struct SlackForm {
    a: Matrix,
    b: Vec<f64>,
    c: Vec<f64>,
    constant: f64,
    roles: Vec<Role>,
    num_rows: usize,
    num_columns: usize,
    tolerance: f64,
    pivots: usize,
}

impl SlackForm {
    pub fn from_standard_form(form: &StandardForm) -> Self {
        let num_columns = form.num_columns();
        let num_rows = form.num_rows();
        let n = num_columns + num_rows;

        let mut a = Matrix::zeros(n, n);
        let mut b = vec![0.0; n];
        for i in 0..num_rows {
            a.row_mut(num_columns + i)[..num_columns].copy_from_slice(form.a.row(i));
            b[num_columns + i] = form.b[i];
        }
        let mut c = form.c.clone();
        c.resize(n, 0.0);

        let mut roles = vec![Role::Nonbasic; num_columns];
        roles.resize(n, Role::Basic);

        Self {
            a,
            b,
            c,
            constant: form.constant,
            roles,
            num_rows,
            num_columns,
            tolerance: DEFAULT_TOLERANCE,
            pivots: 0,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Total number of variables, canonical columns and slacks together
    pub fn num_variables(&self) -> usize {
        self.roles.len()
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn role(&self, j: usize) -> Role {
        self.roles[j]
    }

    pub fn is_basic(&self, j: usize) -> bool {
        self.roles[j] == Role::Basic
    }

    pub fn basic(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.roles.len()).filter(|&j| self.is_basic(j))
    }

    pub fn nonbasic(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.roles.len()).filter(|&j| !self.is_basic(j))
    }

    pub fn objective_constant(&self) -> f64 {
        self.constant
    }

    pub fn pivots(&self) -> usize {
        self.pivots
    }

    /// The partition covers every variable and has one basic variable per row.
    pub fn check_partition(&self) -> bool {
        let n = self.roles.len();
        self.a.rows() == n
            && self.a.cols() == n
            && self.b.len() == n
            && self.c.len() == n
            && self.basic().count() == self.num_rows
    }

    /// Make nonbasic `entering` basic using the row of basic `leaving`.
    pub fn pivot(&mut self, entering: usize, leaving: usize) {
        let (e, l) = (entering, leaving);
        debug_assert!(!self.is_basic(e) && self.is_basic(l));
        debug_assert!(self.a[(l, e)] != 0.0);

        let n = self.roles.len();
        let pivot = self.a[(l, e)];

        // Solve row l for x_e
        self.b[e] = self.b[l] / pivot;
        for j in 0..n {
            if j != e && !self.is_basic(j) {
                let value = self.a[(l, j)] / pivot;
                self.a[(e, j)] = value;
            }
        }
        self.a[(e, l)] = 1.0 / pivot;

        // Substitute x_e into the remaining rows
        for i in 0..n {
            if i == l || !self.is_basic(i) {
                continue;
            }
            let factor = self.a[(i, e)];
            let shift = factor * self.b[e];
            self.b[i] -= shift;
            for j in 0..n {
                if j != e && !self.is_basic(j) {
                    let delta = factor * self.a[(e, j)];
                    self.a[(i, j)] -= delta;
                }
            }
            let value = -factor * self.a[(e, l)];
            self.a[(i, l)] = value;
            self.a[(i, e)] = 0.0;
        }

        // Substitute x_e into the objective
        let cost = self.c[e];
        self.constant += cost * self.b[e];
        for j in 0..n {
            if j != e && !self.is_basic(j) {
                self.c[j] -= cost * self.a[(e, j)];
            }
        }
        self.c[l] = -cost * self.a[(e, l)];
        self.c[e] = 0.0;

        self.a.row_mut(l).fill(0.0);
        self.b[l] = 0.0;
        self.roles[e] = Role::Basic;
        self.roles[l] = Role::Nonbasic;
        self.pivots += 1;

        trace!(
            "pivot {}: entering: {}, leaving: {}, objective: {}",
            self.pivots, e, l, self.constant,
        );
    }

    /// Pick the next pivot with Bland's rule: the smallest improving entering
    /// index, then the tightest ratio with the smallest leaving index.
    pub fn choose_pivot(&self) -> PivotChoice {
        let Some(entering) = self.nonbasic().find(|&j| self.c[j] > 0.0) else {
            return PivotChoice::Optimal;
        };

        let mut leaving = None;
        let mut best = f64::INFINITY;
        for i in self.basic() {
            let coefficient = self.a[(i, entering)];
            if coefficient > 0.0 {
                let ratio = self.b[i] / coefficient;
                if ratio < best {
                    best = ratio;
                    leaving = Some(i);
                }
            }
        }

        match leaving {
            Some(leaving) => PivotChoice::Pivot { entering, leaving },
            None => PivotChoice::Unbounded { entering },
        }
    }

    /// Pivot until optimal or unbounded. The current basic solution must be
    /// feasible.
    pub fn simplex_pivot(&mut self) -> PivotOutcome {
        loop {
            match self.choose_pivot() {
                PivotChoice::Optimal => return PivotOutcome::Optimal,
                PivotChoice::Unbounded { entering } => {
                    debug!("objective unbounded along variable {}", entering);
                    return PivotOutcome::Unbounded;
                }
                PivotChoice::Pivot { entering, leaving } => self.pivot(entering, leaving),
            }
        }
    }

    /// Rewrite the dictionary so that its basic solution is feasible.
    ///
    /// Returns false if the program has no feasible point.
    pub fn initialize_simplex(&mut self) -> bool {
        let Some(k) = self.most_negative_row() else {
            return true;
        };
        debug!("phase one: most negative row {} ({})", k, self.b[k]);

        let saved = self.attach_auxiliary();
        let x0 = self.roles.len() - 1;
        self.pivot(x0, k);
        // Bounded above by zero, so this always reaches an optimum
        self.simplex_pivot();

        if self.constant.abs() >= self.tolerance {
            debug!(
                "phase one: infeasible, auxiliary objective: {}",
                self.constant
            );
            return false;
        }

        self.drive_out_auxiliary();
        self.detach_auxiliary(saved);

        debug!(
            "phase one: feasible after {} pivots, objective: {}",
            self.pivots, self.constant
        );
        true
    }

    /// Basic row with the most negative `b`, if any is negative
    fn most_negative_row(&self) -> Option<usize> {
        let mut k = None;
        let mut lowest = 0.0;
        for i in self.basic() {
            if self.b[i] < lowest {
                lowest = self.b[i];
                k = Some(i);
            }
        }
        k
    }

    /// Append x0 to every row and replace the objective with `maximize -x0`.
    fn attach_auxiliary(&mut self) -> SavedObjective {
        let saved = SavedObjective {
            c: std::mem::take(&mut self.c),
            constant: self.constant,
            roles: self.roles.clone(),
        };

        let n = self.roles.len();
        let x0 = n;
        self.a.resize(n + 1, n + 1);
        self.b.push(0.0);
        self.roles.push(Role::Nonbasic);
        for i in 0..n {
            if self.is_basic(i) {
                self.a[(i, x0)] = -1.0;
            }
        }
        self.c = vec![0.0; n + 1];
        self.c[x0] = -1.0;
        self.constant = 0.0;
        saved
    }

    /// Pivot x0 out of the basis if it ended phase one basic at zero.
    ///
    /// Enters the column with the largest magnitude in x0's row rather than
    /// the smallest index.
    fn drive_out_auxiliary(&mut self) {
        let x0 = self.roles.len() - 1;
        if !self.is_basic(x0) {
            return;
        }
        let mut entering = None;
        let mut largest = self.tolerance;
        for j in self.nonbasic() {
            let magnitude = self.a[(x0, j)].abs();
            if magnitude > largest {
                largest = magnitude;
                entering = Some(j);
            }
        }
        if let Some(entering) = entering {
            trace!("phase one: x0 degenerate, entering: {}", entering);
            self.pivot(entering, x0);
        }
    }

    /// Drop x0 and rewrite the saved objective over the current partition.
    fn detach_auxiliary(&mut self, saved: SavedObjective) {
        let n = saved.roles.len();
        debug_assert!(!self.is_basic(n), "x0 must be nonbasic before removal");
        self.a.resize(n, n);
        self.b.truncate(n);
        self.roles.truncate(n);

        let mut c = vec![0.0; n];
        let mut constant = saved.constant;
        for i in (0..n).filter(|&i| saved.roles[i] == Role::Nonbasic) {
            if !self.is_basic(i) {
                c[i] += saved.c[i];
            } else {
                constant += saved.c[i] * self.b[i];
                for j in 0..n {
                    if !self.is_basic(j) {
                        c[j] -= saved.c[i] * self.a[(i, j)];
                    }
                }
            }
        }
        self.c = c;
        self.constant = constant;
    }

    /// Values of every variable when the nonbasic ones take the values in
    /// `nonbasic_values` (entries at basic indices are ignored).
    pub fn assignment(&self, nonbasic_values: &[f64]) -> Vec<f64> {
        let n = self.roles.len();
        (0..n)
            .map(|i| {
                if self.is_basic(i) {
                    let row = self.a.row(i);
                    self.b[i]
                        - self
                            .nonbasic()
                            .map(|j| row[j] * nonbasic_values[j])
                            .sum::<f64>()
                } else {
                    nonbasic_values[i]
                }
            })
            .collect()
    }

    /// Values of every variable with all nonbasic variables at zero
    pub fn basic_solution(&self) -> Vec<f64> {
        self.assignment(&vec![0.0; self.roles.len()])
    }

    /// Objective value of the dictionary at `assignment`
    pub fn objective_at(&self, assignment: &[f64]) -> f64 {
        self.constant + self.nonbasic().map(|j| self.c[j] * assignment[j]).sum::<f64>()
    }

    /// Largest violation of the equations `slack_i = b_i - A_i x (+ x0)` of
    /// `original` at `assignment`.
    pub fn max_residual(&self, original: &StandardForm, assignment: &[f64]) -> f64 {
        let x0 = assignment
            .get(self.num_columns + self.num_rows)
            .copied()
            .unwrap_or(0.0);
        (0..self.num_rows)
            .map(|r| {
                let lhs: f64 = original
                    .a
                    .row(r)
                    .iter()
                    .zip(assignment)
                    .map(|(a, x)| a * x)
                    .sum();
                (assignment[self.num_columns + r] - (original.b[r] - lhs + x0)).abs()
            })
            .fold(0.0, f64::max)
    }

    /// Run both phases and read off the optimal basic solution.
    pub fn solve(&mut self) -> Solution {
        if !self.initialize_simplex() {
            return Solution::infeasible().with_pivots(self.pivots);
        }
        if self.simplex_pivot() == PivotOutcome::Unbounded {
            return Solution::unbounded().with_pivots(self.pivots);
        }

        let mut values = self.basic_solution();
        values.truncate(self.num_columns);
        debug!(
            "solved in {} pivots, objective: {}",
            self.pivots, self.constant
        );
        Solution::feasible(values, self.constant).with_pivots(self.pivots)
    }
}

impl fmt::Display for SlackForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = |coefficients: &[f64]| -> Vec<String> {
            self.nonbasic()
                .filter(|&j| coefficients[j].abs() > self.tolerance)
                .map(|j| format!("({:.6})x_{}", coefficients[j], j))
                .collect()
        };

        let mut objective = vec![format!("{:.6}", self.constant)];
        objective.extend(terms(&self.c));
        writeln!(f, "MAXIMIZE:")?;
        writeln!(f, "\t{}", objective.join(" + "))?;
        writeln!(f)?;
        writeln!(f, "CONSTRAINTS:")?;
        for i in self.basic() {
            writeln!(
                f,
                "\tx_{} = {:.6} - ( {} )",
                i,
                self.b[i],
                terms(self.a.row(i)).join(" + ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn form(a: &[Vec<f64>], b: &[f64], c: &[f64]) -> StandardForm {
        StandardForm::new(Matrix::from_rows(a), b.to_vec(), c.to_vec())
    }

    fn clrs() -> StandardForm {
        form(
            &[vec![1.0, 1.0, 3.0], vec![2.0, 2.0, 5.0], vec![4.0, 1.0, 2.0]],
            &[30.0, 24.0, 36.0],
            &[3.0, 1.0, 2.0],
        )
    }

    #[test]
    fn test_initial_dictionary() {
        let slack = SlackForm::from_standard_form(&clrs());
        assert!(slack.check_partition());
        assert_eq!(slack.num_variables(), 6);
        assert_eq!(slack.nonbasic().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(slack.basic().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(slack.role(2), Role::Nonbasic);
        assert_eq!(slack.role(3), Role::Basic);
        assert_eq!(slack.basic_solution(), vec![0.0, 0.0, 0.0, 30.0, 24.0, 36.0]);
    }

    #[test]
    fn test_pivot_matches_clrs() {
        let mut slack = SlackForm::from_standard_form(&clrs());
        slack.pivot(0, 5);

        assert!(slack.check_partition());
        assert_eq!(slack.basic().collect::<Vec<_>>(), vec![0, 3, 4]);
        assert_relative_eq!(slack.objective_constant(), 27.0);
        assert_relative_eq!(slack.b[0], 9.0);
        assert_relative_eq!(slack.b[3], 21.0);
        assert_relative_eq!(slack.b[4], 6.0);
        assert_relative_eq!(slack.a[(0, 1)], 0.25);
        assert_relative_eq!(slack.a[(0, 5)], 0.25);
        assert_relative_eq!(slack.c[1], 0.25);
        assert_relative_eq!(slack.c[2], 0.5);
        assert_relative_eq!(slack.c[5], -0.75);
    }

    #[test]
    fn test_dictionary_stays_consistent() {
        let original = clrs();
        let mut slack = SlackForm::from_standard_form(&original);
        let probe: Vec<f64> = (0..slack.num_variables()).map(|j| 1.0 + j as f64).collect();

        while let PivotChoice::Pivot { entering, leaving } = slack.choose_pivot() {
            slack.pivot(entering, leaving);
            assert!(slack.check_partition());

            let basic = slack.basic_solution();
            assert!(slack.max_residual(&original, &basic) < 1e-9);

            // Every row must agree with the original system, not just b
            let point = slack.assignment(&probe);
            assert!(slack.max_residual(&original, &point) < 1e-9);
            let direct: f64 = original.c.iter().zip(&point).map(|(c, x)| c * x).sum();
            assert_relative_eq!(slack.objective_at(&point), direct, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_simplex_pivot_clrs() {
        let mut slack = SlackForm::from_standard_form(&clrs());
        assert_eq!(slack.simplex_pivot(), PivotOutcome::Optimal);
        assert_relative_eq!(slack.objective_constant(), 28.0, epsilon = 1e-9);
        let x = slack.basic_solution();
        assert_relative_eq!(x[0], 8.0, epsilon = 1e-9);
        assert_relative_eq!(x[1], 4.0, epsilon = 1e-9);
        assert_relative_eq!(x[2], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bland_entering_is_smallest_index() {
        // Column 1 has the larger cost but column 0 comes first
        let slack = SlackForm::from_standard_form(&form(
            &[vec![1.0, 1.0], vec![1.0, 3.0]],
            &[4.0, 6.0],
            &[1.0, 5.0],
        ));
        assert_eq!(slack.choose_pivot(), PivotChoice::Pivot { entering: 0, leaving: 2 });
    }

    #[test]
    fn test_bland_ratio_tie_takes_smallest_row() {
        let slack = SlackForm::from_standard_form(&form(
            &[vec![2.0], vec![1.0], vec![1.0]],
            &[4.0, 2.0, 3.0],
            &[1.0],
        ));
        assert_eq!(slack.choose_pivot(), PivotChoice::Pivot { entering: 0, leaving: 1 });
    }

    #[test]
    fn test_unbounded() {
        let mut slack = SlackForm::from_standard_form(&form(
            &[vec![2.0, 2.0, -1.0], vec![3.0, -2.0, 1.0], vec![1.0, -3.0, 1.0]],
            &[10.0, 10.0, 10.0],
            &[1.0, 3.0, -1.0],
        ));
        assert_eq!(slack.solve().status, crate::SolutionStatus::Unbounded);
    }

    #[test]
    fn test_initialize_simplex_two_phase() {
        // maximize 2x - y s.t. 2x - y <= 2, x - 5y <= -4
        let original = form(&[vec![2.0, -1.0], vec![1.0, -5.0]], &[2.0, -4.0], &[2.0, -1.0]);
        let mut slack = SlackForm::from_standard_form(&original);
        assert!(slack.initialize_simplex());
        assert!(slack.check_partition());

        assert_eq!(slack.basic().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(slack.nonbasic().collect::<Vec<_>>(), vec![0, 3]);
        assert_relative_eq!(slack.objective_constant(), -0.8, epsilon = 1e-12);
        assert_relative_eq!(slack.c[0], 1.8, epsilon = 1e-12);
        assert_relative_eq!(slack.c[3], -0.2, epsilon = 1e-12);
        assert_relative_eq!(slack.b[1], 0.8, epsilon = 1e-12);
        assert_relative_eq!(slack.b[2], 2.8, epsilon = 1e-12);

        let basic = slack.basic_solution();
        assert!(basic.iter().all(|&v| v >= -1e-12));
        assert!(slack.max_residual(&original, &basic) < 1e-9);
    }

    #[test]
    fn test_initialize_simplex_feasible_is_noop() {
        let mut slack = SlackForm::from_standard_form(&clrs());
        assert!(slack.initialize_simplex());
        assert_eq!(slack.pivots(), 0);
        assert_eq!(slack.basic().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    fn phase_one_fixture() -> StandardForm {
        // 2x - y <= 2, x - 5y <= -4
        form(&[vec![2.0, -1.0], vec![1.0, -5.0]], &[2.0, -4.0], &[1.0, 0.0])
    }

    #[test]
    fn test_phase_one_pivots_keep_dictionary_consistent() {
        let original = phase_one_fixture();
        let mut slack = SlackForm::from_standard_form(&original);
        let k = slack.most_negative_row().unwrap();
        assert_eq!(k, 3);

        let saved = slack.attach_auxiliary();
        let x0 = slack.num_variables() - 1;
        assert_eq!(x0, 4);
        let probe: Vec<f64> = (0..=x0).map(|j| 0.5 + j as f64).collect();

        // Rows must agree with the original system with x0 added, and the
        // objective must stay -x0.
        let check = |slack: &SlackForm| {
            assert!(slack.check_partition());
            let point = slack.assignment(&probe);
            assert_eq!(point.len(), x0 + 1);
            assert!(slack.max_residual(&original, &point) < 1e-9);
            assert_relative_eq!(slack.objective_at(&point), -point[x0], epsilon = 1e-9);
        };
        check(&slack);

        slack.pivot(x0, k);
        assert!(slack.is_basic(x0));
        check(&slack);
        assert!(slack.basic_solution().iter().all(|&v| v >= 0.0));

        while let PivotChoice::Pivot { entering, leaving } = slack.choose_pivot() {
            slack.pivot(entering, leaving);
            check(&slack);
        }
        assert_relative_eq!(slack.objective_constant(), 0.0, epsilon = 1e-12);

        slack.drive_out_auxiliary();
        check(&slack);

        slack.detach_auxiliary(saved);
        assert!(slack.check_partition());
        assert_eq!(slack.num_variables(), 4);
        let basic = slack.basic_solution();
        assert!(slack.max_residual(&original, &basic) < 1e-9);
        assert!(basic.iter().all(|&v| v >= -1e-12));
    }

    #[test]
    fn test_degenerate_x0_leaves_through_largest_coefficient() {
        let original = phase_one_fixture();
        let mut slack = SlackForm::from_standard_form(&original);
        slack.attach_auxiliary();
        let x0 = slack.num_variables() - 1;
        slack.pivot(x0, 3);
        assert_eq!(slack.role(x0), Role::Basic);

        // Smallest index would pick column 0
        assert_relative_eq!(slack.a[(x0, 0)].abs(), 1.0);
        assert_relative_eq!(slack.a[(x0, 1)].abs(), 5.0);
        assert_relative_eq!(slack.a[(x0, 3)].abs(), 1.0);

        slack.drive_out_auxiliary();
        assert_eq!(slack.role(x0), Role::Nonbasic);
        assert_eq!(slack.role(1), Role::Basic);
        assert_eq!(slack.role(0), Role::Nonbasic);
        assert_eq!(slack.role(3), Role::Nonbasic);
        assert!(slack.max_residual(&original, &slack.basic_solution()) < 1e-9);
    }

    #[test]
    fn test_degenerate_x0_ignores_rounding_noise() {
        let mut slack = SlackForm::from_standard_form(&phase_one_fixture());
        slack.attach_auxiliary();
        let x0 = slack.num_variables() - 1;
        slack.pivot(x0, 3);

        let nonbasic: Vec<usize> = slack.nonbasic().collect();
        for j in nonbasic {
            slack.a[(x0, j)] = 1e-12;
        }
        slack.drive_out_auxiliary();
        assert!(slack.is_basic(x0));
        assert_eq!(slack.pivots(), 1);
    }

    #[test]
    fn test_initialize_simplex_infeasible() {
        let mut slack = SlackForm::from_standard_form(&form(
            &[vec![1.0, -1.0], vec![-1.0, -1.0], vec![2.0, 1.0]],
            &[-1.0, -3.0, 2.0],
            &[3.0, 1.0],
        ));
        assert!(!slack.initialize_simplex());
    }

    #[test]
    fn test_solve_phase_one_problems() {
        let mut slack = SlackForm::from_standard_form(&form(
            &[vec![-1.0, -4.0, -2.0], vec![-3.0, -2.0, 0.0]],
            &[-8.0, -6.0],
            &[-2.0, -3.0, -1.0],
        ));
        let solution = slack.solve();
        // (0.8, 1.8, 0) and (2, 0, 3) are both optimal
        let x = solution.values.unwrap();
        assert_relative_eq!(solution.objective_value, -7.0, epsilon = 1e-9);
        assert!(x[0] + 4.0 * x[1] + 2.0 * x[2] >= 8.0 - 1e-9);
        assert!(3.0 * x[0] + 2.0 * x[1] >= 6.0 - 1e-9);
        assert!(x.iter().all(|&v| v >= -1e-9));

        let mut slack = SlackForm::from_standard_form(&form(
            &[vec![2.0, -1.0, 2.0], vec![2.0, -3.0, 1.0], vec![-1.0, 1.0, -2.0]],
            &[4.0, -5.0, -1.0],
            &[1.0, -1.0, 1.0],
        ));
        let solution = slack.solve();
        let x = solution.values.unwrap();
        assert_eq!(x.len(), 3);
        assert_relative_eq!(x[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(x[1], 2.8, epsilon = 1e-9);
        assert_relative_eq!(x[2], 3.4, epsilon = 1e-9);
        assert_relative_eq!(solution.objective_value, 0.6, epsilon = 1e-9);
    }

    #[test]
    fn test_display_prunes_zero_terms() {
        let slack = SlackForm::from_standard_form(&form(&[vec![1.0, 0.0]], &[5.0], &[1.0, 0.0]));
        let text = slack.to_string();
        assert!(text.contains("(1.000000)x_0"));
        assert!(!text.contains("x_1"));
        assert!(text.contains("x_2 = 5.000000"));
    }
}
