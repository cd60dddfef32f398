//! Error types for lamina analysis

use thiserror::Error;

/// Main error type for lamina operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LaminaError {
    #[error("Invalid material input: {0}")]
    InvalidMaterialInput(String),

    #[error("Degenerate material: {0}")]
    DegenerateMaterial(String),

    #[error("Lamina needs a composite material, a fiber and matrix pair, or a matrix material")]
    UnderdeterminedLamina,

    #[error("Compliance term in constrained direction {direction} is {value}; constrained stress is undefined")]
    SolverDegeneracy { direction: usize, value: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for lamina operations
pub type LaminaResult<T> = Result<T, LaminaError>;
