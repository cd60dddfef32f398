//! Analysis options and the boundary-condition solver

mod boundary;

use serde::{Deserialize, Serialize};

use crate::error::{LaminaError, LaminaResult};

pub use boundary::{free_response, solve_boundary_conditions};

/// Principal material direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Fiber direction
    One,
    /// In-plane transverse direction
    Two,
    /// Through-thickness direction
    Three,
}

impl Direction {
    /// Look up a direction from its number (1, 2 or 3)
    pub fn from_number(number: usize) -> LaminaResult<Self> {
        match number {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(LaminaError::InvalidInput(format!(
                "direction must be 1, 2 or 3, got {other}"
            ))),
        }
    }

    /// Direction number (1, 2 or 3)
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Zero-based Voigt index of the normal component
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
        }
    }
}

impl TryFrom<usize> for Direction {
    type Error = LaminaError;

    fn try_from(number: usize) -> LaminaResult<Self> {
        Self::from_number(number)
    }
}

/// Options for lamina construction and stress/strain solves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Magnitude at or below which the constrained compliance term is zero
    pub tolerance: f64,
    /// Allowed deviation of fiber + matrix volume fractions from 1
    pub volume_fraction_tolerance: f64,
    /// Enable per-solve debug logging
    pub log: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            volume_fraction_tolerance: 1e-9,
            log: false,
        }
    }
}

impl SolverOptions {
    /// Enable logging
    pub fn with_logging(mut self) -> Self {
        self.log = true;
        self
    }

    /// Set the degeneracy tolerance
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Set the volume fraction tolerance
    pub fn with_volume_fraction_tolerance(mut self, tol: f64) -> Self {
        self.volume_fraction_tolerance = tol;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_numbers() {
        for n in 1..=3 {
            let d = Direction::try_from(n).unwrap();
            assert_eq!(d.number(), n);
            assert_eq!(d.index(), n - 1);
        }
        assert!(matches!(
            Direction::from_number(0),
            Err(LaminaError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_default_options() {
        let opts = SolverOptions::default().with_logging();
        assert_eq!(opts.tolerance, 0.0);
        assert!(opts.log);
    }
}
