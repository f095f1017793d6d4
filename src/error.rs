use thiserror::Error;

/// Coarse classification of a [`SimilarityError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The graphs or their weights cannot be turned into frequencies.
    InvalidInput,

    /// An edge weight attribute holds a non-numeric value.
    Type,

    /// The correlation of the frequency vectors is not defined.
    UndefinedResult,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    #[error("graph {position} should have at least one node")]
    EmptyGraph { position: usize },

    #[error("node label {label} occurs more than once")]
    DuplicateLabel { label: String },

    #[error("weight of edge {src} -> {dst} cannot be negative, got {weight} (mean of {copies} parallel edges)")]
    NegativeWeight {
        src: String,
        dst: String,
        weight: f64,
        copies: usize,
    },

    #[error("weight of edge {src} -> {dst} must be finite, got {weight}")]
    NonFiniteWeight {
        src: String,
        dst: String,
        weight: f64,
    },

    #[error("weight of edge {src} -> {dst} must be numeric, not '{found}'")]
    NonNumericWeight {
        src: String,
        dst: String,
        found: &'static str,
    },

    #[error("the weights of a component of {component_size} nodes cannot all be zero")]
    ZeroLogMass { component_size: usize },

    #[error("frequency mass must be positive, got {total}")]
    NonPositiveMass { total: f64 },

    #[error("frequency vectors differ in length ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("correlation is undefined for a frequency vector without variance")]
    ZeroVariance,
}

impl SimilarityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimilarityError::NonNumericWeight { .. } => ErrorKind::Type,
            SimilarityError::ZeroVariance => ErrorKind::UndefinedResult,
            _ => ErrorKind::InvalidInput,
        }
    }
}
