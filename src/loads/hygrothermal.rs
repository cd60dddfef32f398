//! Non-mechanical (thermal, moisture) strains

use serde::{Deserialize, Serialize};

use crate::elements::Material;
use crate::error::LaminaResult;
use crate::math::{pad_voigt, Vec6};

/// A strain contribution not caused by stress, in Voigt order
/// [e1, e2, e3, g23, g13, g12]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NonMechanicalStrain {
    pub strain: Vec6,
}

impl NonMechanicalStrain {
    /// Wrap a full Voigt strain vector
    pub fn new(strain: Vec6) -> Self {
        Self { strain }
    }

    /// Build from up to 6 components, zero padded
    pub fn from_slice(values: &[f64]) -> LaminaResult<Self> {
        Ok(Self::new(pad_voigt(values)?))
    }

    /// Free thermal strain alpha * dT in material axes
    pub fn thermal(material: &Material, delta_t: f64) -> Self {
        let a = material.alpha;
        Self::new(Vec6::new(a[0], a[1], a[2], 0.0, 0.0, 0.0) * delta_t)
    }

    /// Free swelling strain beta * dM in material axes
    pub fn moisture(material: &Material, delta_m: f64) -> Self {
        let b = material.beta;
        Self::new(Vec6::new(b[0], b[1], b[2], 0.0, 0.0, 0.0) * delta_m)
    }
}
