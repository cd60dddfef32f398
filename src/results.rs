//! Result types for lamina analysis

use serde::{Deserialize, Serialize};

use crate::math::Vec6;

/// Stress and total strain of a ply, both in Voigt order
/// [11, 22, 33, 23, 13, 12]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressStrainState {
    /// Stress vector including any solved constrained component (Pa)
    pub stress: Vec6,
    /// Total strain: mechanical plus non-mechanical
    pub strain: Vec6,
}

impl StressStrainState {
    /// Create from stress and strain vectors
    pub fn new(stress: Vec6, strain: Vec6) -> Self {
        Self { stress, strain }
    }

    /// Split into (stress, strain)
    pub fn into_parts(self) -> (Vec6, Vec6) {
        (self.stress, self.strain)
    }
}
