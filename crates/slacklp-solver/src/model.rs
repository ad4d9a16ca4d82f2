use crate::error::ModelError;

/// Handle to a variable registered in a [`LinearProgram`](crate::LinearProgram).
///
/// Ids are dense registration indices, so they are only meaningful within the
/// model that handed them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VariableId(pub(crate) usize);

impl VariableId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A real-valued decision variable with (possibly infinite) bounds
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Variable {
    name: String,
    lower: f64,
    upper: f64,
}

impl Variable {
    pub fn new(name: impl Into<String>, lower: f64, upper: f64) -> Result<Self, ModelError> {
        let valid = !lower.is_nan()
            && !upper.is_nan()
            && lower <= upper
            && lower != f64::INFINITY
            && upper != f64::NEG_INFINITY;
        if !valid {
            return Err(ModelError::InvalidBounds { lower, upper });
        }
        Ok(Self {
            name: name.into(),
            lower,
            upper,
        })
    }

    /// Variable restricted to `[0, +inf)`
    pub fn nonnegative(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower: 0.0,
            upper: f64::INFINITY,
        }
    }

    /// Variable that may take any real value
    pub fn unbounded(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    /// Display name, informational only
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Whether `value` lies within the bounds, allowing `tolerance` of slack
    pub fn contains(&self, value: f64, tolerance: f64) -> bool {
        value >= self.lower - tolerance && value <= self.upper + tolerance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    /// Less than or equal (<=)
    #[cfg_attr(feature = "serde", serde(rename = "<="))]
    Le,
    /// Greater than or equal (>=)
    #[cfg_attr(feature = "serde", serde(rename = ">="))]
    Ge,
    /// Equal (=)
    #[cfg_attr(feature = "serde", serde(rename = "="))]
    Eq,
}

impl Relation {
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Le => "<=",
            Relation::Ge => ">=",
            Relation::Eq => "=",
        }
    }
}

/// A linear constraint `sum(weights[k] * variables[k]) <relation> rhs`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Constraint {
    variables: Vec<VariableId>,
    weights: Vec<f64>,
    relation: Relation,
    rhs: f64,
}

impl Constraint {
    pub fn new(
        variables: Vec<VariableId>,
        weights: Vec<f64>,
        relation: Relation,
        rhs: f64,
    ) -> Result<Self, ModelError> {
        check_terms(&variables, &weights)?;
        if !rhs.is_finite() {
            return Err(ModelError::NonFiniteRhs(rhs));
        }
        Ok(Self {
            variables,
            weights,
            relation,
            rhs,
        })
    }

    /// Build a constraint from `(variable, weight)` pairs
    pub fn from_terms(
        terms: impl IntoIterator<Item = (VariableId, f64)>,
        relation: Relation,
        rhs: f64,
    ) -> Result<Self, ModelError> {
        let (variables, weights) = terms.into_iter().unzip();
        Self::new(variables, weights, relation, rhs)
    }

    pub fn variables(&self) -> &[VariableId] {
        &self.variables
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn terms(&self) -> impl Iterator<Item = (VariableId, f64)> + '_ {
        self.variables.iter().copied().zip(self.weights.iter().copied())
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    /// Evaluate the left-hand side at `value_of` and check the relation
    pub fn is_satisfied_by(&self, value_of: impl Fn(VariableId) -> f64, tolerance: f64) -> bool {
        let lhs: f64 = self.terms().map(|(var, w)| w * value_of(var)).sum();
        match self.relation {
            Relation::Le => lhs <= self.rhs + tolerance,
            Relation::Ge => lhs >= self.rhs - tolerance,
            Relation::Eq => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Goal {
    Maximize,
    Minimize,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Objective {
    goal: Goal,
    variables: Vec<VariableId>,
    weights: Vec<f64>,
}

impl Objective {
    pub fn new(goal: Goal, variables: Vec<VariableId>, weights: Vec<f64>) -> Result<Self, ModelError> {
        check_terms(&variables, &weights)?;
        Ok(Self {
            goal,
            variables,
            weights,
        })
    }

    pub fn maximize(terms: impl IntoIterator<Item = (VariableId, f64)>) -> Result<Self, ModelError> {
        let (variables, weights) = terms.into_iter().unzip();
        Self::new(Goal::Maximize, variables, weights)
    }

    pub fn minimize(terms: impl IntoIterator<Item = (VariableId, f64)>) -> Result<Self, ModelError> {
        let (variables, weights) = terms.into_iter().unzip();
        Self::new(Goal::Minimize, variables, weights)
    }

    /// The zero function, for problems that only ask about feasibility
    pub fn empty() -> Self {
        Self {
            goal: Goal::Maximize,
            variables: Vec::new(),
            weights: Vec::new(),
        }
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn variables(&self) -> &[VariableId] {
        &self.variables
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn terms(&self) -> impl Iterator<Item = (VariableId, f64)> + '_ {
        self.variables.iter().copied().zip(self.weights.iter().copied())
    }
}

fn check_terms(variables: &[VariableId], weights: &[f64]) -> Result<(), ModelError> {
    if variables.len() != weights.len() {
        return Err(ModelError::LengthMismatch {
            variables: variables.len(),
            weights: weights.len(),
        });
    }
    if let Some(&w) = weights.iter().find(|w| !w.is_finite()) {
        return Err(ModelError::NonFiniteWeight(w));
    }
    Ok(())
}
