mod error;
mod matrix;
mod model;
mod program;
mod simplex;
mod slack_form;
mod solution;
mod standard_form;

pub use error::ModelError;
pub use matrix::Matrix;
pub use model::{Constraint, Goal, Objective, Relation, Variable, VariableId};
pub use program::LinearProgram;
pub use simplex::Solver;
pub use slack_form::{DEFAULT_TOLERANCE, PivotChoice, PivotOutcome, Role, SlackForm};
pub use solution::{Solution, SolutionStatus};
pub use standard_form::{ColumnMap, StandardForm, Substitution, build as build_standard_form};
