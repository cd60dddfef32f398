//! Applied stress tensor

use serde::{Deserialize, Serialize};

use crate::error::{LaminaError, LaminaResult};
use crate::math::Vec6;

/// Symmetric Cauchy stress tensor in material axes (Pa)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct StressTensor {
    /// Components [[s11, t12, t13], [t12, s22, t23], [t13, t23, s33]]
    pub components: [[f64; 3]; 3],
}

impl StressTensor {
    /// Create from a full 3x3 array, which must be symmetric
    pub fn new(components: [[f64; 3]; 3]) -> LaminaResult<Self> {
        for i in 0..3 {
            for j in (i + 1)..3 {
                if components[i][j] != components[j][i] {
                    return Err(LaminaError::InvalidInput(format!(
                        "stress tensor is not symmetric at ({}, {}): {} != {}",
                        i + 1,
                        j + 1,
                        components[i][j],
                        components[j][i]
                    )));
                }
            }
        }
        Ok(Self { components })
    }

    /// Create from normal and shear components
    pub fn from_components(s11: f64, s22: f64, s33: f64, t23: f64, t13: f64, t12: f64) -> Self {
        Self {
            components: [[s11, t12, t13], [t12, s22, t23], [t13, t23, s33]],
        }
    }

    /// Uniaxial stress along a principal direction (1, 2 or 3)
    pub fn uniaxial(direction: usize, value: f64) -> LaminaResult<Self> {
        let mut components = [[0.0; 3]; 3];
        match direction {
            1..=3 => components[direction - 1][direction - 1] = value,
            other => {
                return Err(LaminaError::InvalidInput(format!(
                    "direction must be 1, 2 or 3, got {other}"
                )))
            }
        }
        Ok(Self { components })
    }

    /// In-plane stress state [s11, s22, t12]
    pub fn plane(s11: f64, s22: f64, t12: f64) -> Self {
        Self::from_components(s11, s22, 0.0, 0.0, 0.0, t12)
    }

    /// Flatten to Voigt order [s11, s22, s33, t23, t13, t12]
    pub fn to_voigt(&self) -> Vec6 {
        let s = &self.components;
        Vec6::new(s[0][0], s[1][1], s[2][2], s[1][2], s[0][2], s[0][1])
    }
}
