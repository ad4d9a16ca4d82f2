use std::fmt;

use log::debug;

use crate::error::ModelError;
use crate::matrix::Matrix;
use crate::model::{Constraint, Goal, Objective, Relation, Variable, VariableId};

/// Canonical linear program
///
/// maximize   c^T x + constant
/// subject to A x <= b
///            x >= 0
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardForm {
    pub a: Matrix,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
    pub constant: f64,
}

impl StandardForm {
    /// Panics if the dimensions of `a`, `b` and `c` disagree.
    pub fn new(a: Matrix, b: Vec<f64>, c: Vec<f64>) -> Self {
        assert_eq!(a.rows(), b.len(), "A must have one row per entry of b");
        assert_eq!(a.cols(), c.len(), "A must have one column per entry of c");
        Self {
            a,
            b,
            c,
            constant: 0.0,
        }
    }

    pub fn with_constant(mut self, constant: f64) -> Self {
        self.constant = constant;
        self
    }

    pub fn num_rows(&self) -> usize {
        self.b.len()
    }

    pub fn num_columns(&self) -> usize {
        self.c.len()
    }

    /// Append the row `row . x <= rhs`
    fn push_row(&mut self, row: &[f64], rhs: f64) {
        self.a.push_row(row);
        self.b.push(rhs);
    }
}

impl fmt::Display for StandardForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "maximize {} + c.x", self.constant)?;
        writeln!(f, "c = {:?}", self.c)?;
        writeln!(f, "subject to A x <= b, x >= 0")?;
        for i in 0..self.num_rows() {
            let cells: Vec<String> = self.a.row(i).iter().map(|v| format!("{v:>8.3}")).collect();
            writeln!(f, "  [{}] <= {}", cells.join(" "), self.b[i])?;
        }
        Ok(())
    }
}

/// How one model variable is expressed through nonnegative canonical columns
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Substitution {
    /// `x = lower + x'`
    Shifted { lower: f64, column: usize },
    /// `x = upper - x'`
    Reflected { upper: f64, column: usize },
    /// `x = x_pos - x_neg`
    Split { positive: usize, negative: usize },
}

impl Substitution {
    fn for_variable(variable: &Variable, next_column: &mut usize) -> Self {
        let column = *next_column;
        if variable.lower().is_finite() {
            *next_column += 1;
            Substitution::Shifted {
                lower: variable.lower(),
                column,
            }
        } else if variable.upper().is_finite() {
            *next_column += 1;
            Substitution::Reflected {
                upper: variable.upper(),
                column,
            }
        } else {
            *next_column += 2;
            Substitution::Split {
                positive: column,
                negative: column + 1,
            }
        }
    }

    /// Canonical columns used by this variable, in order
    pub fn columns(&self) -> Vec<usize> {
        match *self {
            Substitution::Shifted { column, .. } | Substitution::Reflected { column, .. } => {
                vec![column]
            }
            Substitution::Split { positive, negative } => vec![positive, negative],
        }
    }

    /// Add `weight * x` to `row` and return the constant term it leaves behind.
    fn accumulate(&self, weight: f64, row: &mut [f64]) -> f64 {
        match *self {
            Substitution::Shifted { lower, column } => {
                row[column] += weight;
                weight * lower
            }
            Substitution::Reflected { upper, column } => {
                row[column] -= weight;
                weight * upper
            }
            Substitution::Split { positive, negative } => {
                row[positive] += weight;
                row[negative] -= weight;
                0.0
            }
        }
    }

    /// Recover the variable's value from canonical column values
    pub fn value(&self, columns: &[f64]) -> f64 {
        match *self {
            Substitution::Shifted { lower, column } => lower + columns[column],
            Substitution::Reflected { upper, column } => upper - columns[column],
            Substitution::Split { positive, negative } => columns[positive] - columns[negative],
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Substitution::Shifted { lower, column } => write!(f, "{lower} + x{column}"),
            Substitution::Reflected { upper, column } => write!(f, "{upper} - x{column}"),
            Substitution::Split { positive, negative } => write!(f, "x{positive} - x{negative}"),
        }
    }
}

/// Maps every model variable to its canonical columns, in registration order
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnMap {
    substitutions: Vec<Substitution>,
    num_columns: usize,
}

impl ColumnMap {
    pub fn substitution(&self, var: VariableId) -> Option<&Substitution> {
        self.substitutions.get(var.index())
    }

    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    /// Total number of canonical columns
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn value(&self, var: VariableId, columns: &[f64]) -> Option<f64> {
        self.substitution(var).map(|s| s.value(columns))
    }

    pub fn values(&self, columns: &[f64]) -> Vec<f64> {
        self.substitutions.iter().map(|s| s.value(columns)).collect()
    }
}

/// Signs with which a constraint is emitted as `<=` rows.
///
/// `a >= b` is `-a <= -b`; `a = b` is both `a <= b` and `-a <= -b`.
fn row_signs(relation: Relation) -> &'static [f64] {
    match relation {
        Relation::Le => &[1.0],
        Relation::Ge => &[-1.0],
        Relation::Eq => &[1.0, -1.0],
    }
}

fn lookup<'a>(map: &'a ColumnMap, var: VariableId) -> Result<&'a Substitution, ModelError> {
    map.substitution(var)
        .ok_or(ModelError::UnknownVariable(var.index()))
}

/// Convert a model into standard form.
///
/// Returns the canonical program together with the column map needed to read
/// variable values back out of a canonical solution.
pub fn build(
    variables: &[Variable],
    constraints: &[Constraint],
    objective: Option<&Objective>,
) -> Result<(StandardForm, ColumnMap), ModelError> {
    let objective = objective.ok_or(ModelError::MissingObjective)?;

    let mut next_column = 0;
    let substitutions: Vec<Substitution> = variables
        .iter()
        .map(|v| Substitution::for_variable(v, &mut next_column))
        .collect();
    let map = ColumnMap {
        substitutions,
        num_columns: next_column,
    };
    let n = map.num_columns;

    let mut form = StandardForm::new(Matrix::zeros(0, n), Vec::new(), vec![0.0; n]);

    // Upper bounds of doubly bounded variables: x' <= upper - lower
    for (variable, substitution) in variables.iter().zip(&map.substitutions) {
        if let Substitution::Shifted { lower, column } = *substitution {
            if variable.upper().is_finite() {
                let mut row = vec![0.0; n];
                row[column] = 1.0;
                form.push_row(&row, variable.upper() - lower);
            }
        }
    }

    for constraint in constraints {
        for &sign in row_signs(constraint.relation()) {
            let mut row = vec![0.0; n];
            let mut rhs = sign * constraint.rhs();
            for (var, weight) in constraint.terms() {
                rhs -= lookup(&map, var)?.accumulate(sign * weight, &mut row);
            }
            form.push_row(&row, rhs);
        }
    }

    // Minimizing f is maximizing -f
    let sign = match objective.goal() {
        Goal::Maximize => 1.0,
        Goal::Minimize => -1.0,
    };
    let mut constant = 0.0;
    for (var, weight) in objective.terms() {
        constant += lookup(&map, var)?.accumulate(sign * weight, &mut form.c);
    }
    form.constant = constant;

    debug!(
        "built standard form: variables: {}, columns: {}, rows: {}, constant: {}",
        variables.len(),
        n,
        form.num_rows(),
        form.constant,
    );

    Ok((form, map))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: usize) -> VariableId {
        VariableId(i)
    }

    #[test]
    fn test_missing_objective() {
        let vars = vec![Variable::nonnegative("x")];
        assert_eq!(build(&vars, &[], None), Err(ModelError::MissingObjective));
    }

    #[test]
    fn test_column_assignment() {
        let vars = vec![
            Variable::nonnegative("a"),
            Variable::unbounded("b"),
            Variable::new("c", f64::NEG_INFINITY, 4.0).unwrap(),
            Variable::new("d", -1.0, 2.0).unwrap(),
        ];
        let (form, map) = build(&vars, &[], Some(&Objective::empty())).unwrap();

        assert_eq!(map.num_columns(), 5);
        assert_eq!(form.num_columns(), 5);
        assert_eq!(map.substitution(id(0)), Some(&Substitution::Shifted { lower: 0.0, column: 0 }));
        assert_eq!(map.substitution(id(1)), Some(&Substitution::Split { positive: 1, negative: 2 }));
        assert_eq!(map.substitution(id(2)), Some(&Substitution::Reflected { upper: 4.0, column: 3 }));
        assert_eq!(map.substitution(id(3)).unwrap().columns(), vec![4]);

        // Only the doubly bounded variable gets a bound row
        assert_eq!(form.num_rows(), 1);
        assert_eq!(form.a.row(0), &[0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(form.b, vec![3.0]);

        let rendered: Vec<String> = map.substitutions().iter().map(|s| s.to_string()).collect();
        assert_eq!(rendered, ["0 + x0", "x1 - x2", "4 - x3", "-1 + x4"]);
    }

    #[test]
    fn test_constraint_translation() {
        let vars = vec![
            Variable::new("x", 2.0, f64::INFINITY).unwrap(),
            Variable::new("y", f64::NEG_INFINITY, 5.0).unwrap(),
            Variable::unbounded("z"),
        ];
        let constraints = vec![
            // x + 2y - z <= 10  =>  x' - 2y' - z1 + z2 <= 10 - 2 - 10
            Constraint::from_terms([(id(0), 1.0), (id(1), 2.0), (id(2), -1.0)], Relation::Le, 10.0)
                .unwrap(),
            // x >= 3  =>  -x' <= -1
            Constraint::from_terms([(id(0), 1.0)], Relation::Ge, 3.0).unwrap(),
            // y = 1  =>  -y' <= -4  and  y' <= 4
            Constraint::from_terms([(id(1), 1.0)], Relation::Eq, 1.0).unwrap(),
        ];
        let (form, _) = build(&vars, &constraints, Some(&Objective::empty())).unwrap();

        assert_eq!(form.num_rows(), 4);
        assert_eq!(form.a.row(0), &[1.0, -2.0, -1.0, 1.0]);
        assert_eq!(form.b[0], -2.0);
        assert_eq!(form.a.row(1), &[-1.0, 0.0, 0.0, 0.0]);
        assert_eq!(form.b[1], -1.0);
        assert_eq!(form.a.row(2), &[0.0, -1.0, 0.0, 0.0]);
        assert_eq!(form.b[2], -4.0);
        assert_eq!(form.a.row(3), &[0.0, 1.0, 0.0, 0.0]);
        assert_eq!(form.b[3], 4.0);
    }

    #[test]
    fn test_objective_translation() {
        let vars = vec![
            Variable::new("x", 1.0, f64::INFINITY).unwrap(),
            Variable::new("y", f64::NEG_INFINITY, 3.0).unwrap(),
        ];
        // minimize 2x + y  =>  maximize -2x' + y' - 2 - 3
        let objective = Objective::minimize([(id(0), 2.0), (id(1), 1.0)]).unwrap();
        let (form, _) = build(&vars, &[], Some(&objective)).unwrap();
        assert_eq!(form.c, vec![-2.0, 1.0]);
        assert_eq!(form.constant, -5.0);
    }

    #[test]
    fn test_repeated_terms_accumulate() {
        let vars = vec![Variable::nonnegative("x")];
        let constraints =
            vec![Constraint::from_terms([(id(0), 1.0), (id(0), 2.0)], Relation::Le, 6.0).unwrap()];
        let (form, _) = build(&vars, &constraints, Some(&Objective::empty())).unwrap();
        assert_eq!(form.a.row(0), &[3.0]);
    }

    #[test]
    fn test_unknown_variable() {
        let vars = vec![Variable::nonnegative("x")];
        let constraints = vec![Constraint::from_terms([(id(3), 1.0)], Relation::Le, 1.0).unwrap()];
        assert_eq!(
            build(&vars, &constraints, Some(&Objective::empty())),
            Err(ModelError::UnknownVariable(3))
        );
    }

    #[test]
    fn test_inverse_mapping() {
        let vars = vec![
            Variable::new("x", 2.0, 8.0).unwrap(),
            Variable::new("y", f64::NEG_INFINITY, 5.0).unwrap(),
            Variable::unbounded("z"),
        ];
        let (_, map) = build(&vars, &[], Some(&Objective::empty())).unwrap();
        let columns = [1.5, 4.0, 0.0, 3.0];
        assert_eq!(map.values(&columns), vec![3.5, 1.0, -3.0]);
    }
}
