use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use slacklp_solver::{Constraint, Goal, LinearProgram, ModelError, Objective, Relation, VariableId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Error reading file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid model file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Variable '{0}' is declared twice")]
    DuplicateVariable(String),
    #[error("Unknown variable '{0}'")]
    UnknownVariable(String),
    #[error("{context}: {source}")]
    Model {
        context: String,
        #[source]
        source: ModelError,
    },
}

/// JSON model description
#[derive(Debug, Deserialize)]
pub struct ModelFile {
    pub variables: Vec<VariableSpec>,
    #[serde(default)]
    pub constraints: Vec<ConstraintSpec>,
    #[serde(default)]
    pub objective: Option<ObjectiveSpec>,
}

/// A missing bound means the variable is unbounded in that direction.
#[derive(Debug, Deserialize)]
pub struct VariableSpec {
    pub name: String,
    #[serde(default)]
    pub lower: Option<f64>,
    #[serde(default)]
    pub upper: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ConstraintSpec {
    pub terms: Vec<(String, f64)>,
    pub relation: Relation,
    pub rhs: f64,
}

#[derive(Debug, Deserialize)]
pub struct ObjectiveSpec {
    pub goal: Goal,
    #[serde(default)]
    pub terms: Vec<(String, f64)>,
}

pub fn load(path: &Path) -> Result<LinearProgram, LoadError> {
    let source = std::fs::read_to_string(path)?;
    parse(&source)
}

pub fn parse(source: &str) -> Result<LinearProgram, LoadError> {
    let file: ModelFile = serde_json::from_str(source)?;
    file.into_program()
}

impl ModelFile {
    pub fn into_program(self) -> Result<LinearProgram, LoadError> {
        let mut program = LinearProgram::new();
        let mut ids: HashMap<String, VariableId> = HashMap::new();

        for spec in self.variables {
            if ids.contains_key(&spec.name) {
                return Err(LoadError::DuplicateVariable(spec.name));
            }
            let lower = spec.lower.unwrap_or(f64::NEG_INFINITY);
            let upper = spec.upper.unwrap_or(f64::INFINITY);
            let id = program
                .register_variable(spec.name.clone(), lower, upper)
                .map_err(|source| LoadError::Model {
                    context: format!("variable '{}'", spec.name),
                    source,
                })?;
            ids.insert(spec.name, id);
        }

        for (i, spec) in self.constraints.into_iter().enumerate() {
            let terms = resolve(&ids, spec.terms)?;
            let constraint = Constraint::from_terms(terms, spec.relation, spec.rhs)
                .and_then(|c| program.add_constraint(c));
            constraint.map_err(|source| LoadError::Model {
                context: format!("constraint {i}"),
                source,
            })?;
        }

        let objective = match self.objective {
            Some(spec) => {
                let terms = resolve(&ids, spec.terms)?;
                match spec.goal {
                    Goal::Maximize => Objective::maximize(terms),
                    Goal::Minimize => Objective::minimize(terms),
                }
                .map_err(|source| LoadError::Model {
                    context: "objective".to_string(),
                    source,
                })?
            }
            None => Objective::empty(),
        };
        program
            .set_objective(objective)
            .map_err(|source| LoadError::Model {
                context: "objective".to_string(),
                source,
            })?;

        Ok(program)
    }
}

fn resolve(
    ids: &HashMap<String, VariableId>,
    terms: Vec<(String, f64)>,
) -> Result<Vec<(VariableId, f64)>, LoadError> {
    terms
        .into_iter()
        .map(|(name, weight)| match ids.get(&name) {
            Some(&id) => Ok((id, weight)),
            None => Err(LoadError::UnknownVariable(name)),
        })
        .collect()
}
