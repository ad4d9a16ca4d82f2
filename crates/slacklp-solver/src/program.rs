use log::debug;

use crate::error::ModelError;
use crate::model::{Constraint, Goal, Objective, Variable, VariableId};
use crate::simplex::Solver;
use crate::solution::{Solution, SolutionStatus};
use crate::standard_form::{self, ColumnMap, StandardForm};

/// A linear program under construction.
///
/// Variables, constraints and the objective can be changed freely between
/// solves. Any change drops the cached solution, so queries never observe a
/// result computed for an older model.
#[derive(Debug, Clone, Default)]
pub struct LinearProgram {
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    objective: Option<Objective>,
    solver: Solver,
    solved: Option<Solved>,
}

#[derive(Debug, Clone)]
struct Solved {
    solution: Solution,
    columns: ColumnMap,
}

impl LinearProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self.solved = None;
        self
    }

    fn evict(&mut self) {
        self.solved = None;
    }

    fn push_variable(&mut self, variable: Variable) -> VariableId {
        self.evict();
        self.variables.push(variable);
        VariableId(self.variables.len() - 1)
    }

    pub fn register_variable(
        &mut self,
        name: impl Into<String>,
        lower: f64,
        upper: f64,
    ) -> Result<VariableId, ModelError> {
        let variable = Variable::new(name, lower, upper)?;
        Ok(self.push_variable(variable))
    }

    pub fn register_nonnegative_variable(&mut self, name: impl Into<String>) -> VariableId {
        self.push_variable(Variable::nonnegative(name))
    }

    pub fn register_unbounded_variable(&mut self, name: impl Into<String>) -> VariableId {
        self.push_variable(Variable::unbounded(name))
    }

    fn check_known(&self, variables: &[VariableId]) -> Result<(), ModelError> {
        match variables.iter().find(|v| v.index() >= self.variables.len()) {
            Some(unknown) => Err(ModelError::UnknownVariable(unknown.index())),
            None => Ok(()),
        }
    }

    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<(), ModelError> {
        self.check_known(constraint.variables())?;
        self.evict();
        self.constraints.push(constraint);
        Ok(())
    }

    pub fn set_objective(&mut self, objective: Objective) -> Result<(), ModelError> {
        self.check_known(objective.variables())?;
        self.evict();
        self.objective = Some(objective);
        Ok(())
    }

    pub fn variable(&self, var: VariableId) -> Option<&Variable> {
        self.variables.get(var.index())
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    /// Whether a solution for the current model is cached
    pub fn is_solved(&self) -> bool {
        self.solved.is_some()
    }

    pub fn build_standard_form(&self) -> Result<(StandardForm, ColumnMap), ModelError> {
        standard_form::build(&self.variables, &self.constraints, self.objective.as_ref())
    }

    /// Solve the current model, reusing the cached solution if nothing changed.
    ///
    /// The returned solution is expressed in canonical columns and in the
    /// maximization orientation; use [`value`](Self::value) and
    /// [`objective_value`](Self::objective_value) for model-level answers.
    pub fn solve(&mut self) -> Result<&Solution, ModelError> {
        Ok(&self.solved()?.solution)
    }

    fn solved(&mut self) -> Result<&Solved, ModelError> {
        let solved = match self.solved.take() {
            Some(solved) => solved,
            None => {
                let (form, columns) = self.build_standard_form()?;
                let solution = self.solver.solve(&form);
                debug!(
                    "solved model: status: {:?}, objective: {}, pivots: {}",
                    solution.status, solution.objective_value, solution.pivots,
                );
                Solved { solution, columns }
            }
        };
        Ok(self.solved.insert(solved))
    }

    pub fn status(&mut self) -> Result<SolutionStatus, ModelError> {
        Ok(self.solve()?.status)
    }

    /// Value of `var` in the optimal solution, or `None` unless feasible
    pub fn value(&mut self, var: VariableId) -> Result<Option<f64>, ModelError> {
        self.check_known(&[var])?;
        let solved = self.solved()?;
        Ok(solved
            .solution
            .values
            .as_ref()
            .and_then(|columns| solved.columns.value(var, columns)))
    }

    /// Values of all variables in registration order, or `None` unless feasible
    pub fn values(&mut self) -> Result<Option<Vec<f64>>, ModelError> {
        let solved = self.solved()?;
        Ok(solved
            .solution
            .values
            .as_ref()
            .map(|columns| solved.columns.values(columns)))
    }

    /// Optimal objective in the model's own goal, `None` when infeasible.
    /// Unbounded models report an infinite value.
    pub fn objective_value(&mut self) -> Result<Option<f64>, ModelError> {
        let solution = self.solve()?;
        if solution.status == SolutionStatus::Infeasible {
            return Ok(None);
        }
        let value = solution.objective_value;
        let goal = self.objective.as_ref().map_or(Goal::Maximize, Objective::goal);
        Ok(Some(match goal {
            Goal::Maximize => value,
            Goal::Minimize => -value,
        }))
    }
}
