use thiserror::Error;

/// Problems with a model that are detected before any solving happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Expected one weight per variable, got {variables} variables and {weights} weights")]
    LengthMismatch { variables: usize, weights: usize },
    #[error("Constraint right-hand side must be finite, got {0}")]
    NonFiniteRhs(f64),
    #[error("Weights must be finite, got {0}")]
    NonFiniteWeight(f64),
    #[error("Invalid variable bounds [{lower}, {upper}]")]
    InvalidBounds { lower: f64, upper: f64 },
    #[error("Objective function must be specified")]
    MissingObjective,
    #[error("Unknown variable id {0}")]
    UnknownVariable(usize),
}
