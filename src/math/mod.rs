//! Mathematical utilities for lamina calculations

pub mod compliance;
pub mod transform;

use nalgebra::{Matrix3, Matrix6, SMatrix, Vector3, Vector6};

use crate::error::{LaminaError, LaminaResult};

pub type Mat3 = Matrix3<f64>;
pub type Mat6 = Matrix6<f64>;
pub type Vec3 = Vector3<f64>;
/// Voigt vector [11, 22, 33, 23, 13, 12]
pub type Vec6 = Vector6<f64>;

// Re-export matrix builders
pub use compliance::{
    compliance_matrix, reduced_compliance_matrix, reduced_stiffness_matrix, stiffness_matrix,
};
pub use transform::{
    rotate_stress, rotate_stress_to_global, transformation_matrix, transformed_compliance,
};

/// Invert a 3x3 compliance or stiffness matrix
pub fn invert3(m: &Mat3, what: &str) -> LaminaResult<Mat3> {
    finite_inverse(m.try_inverse(), what)
}

/// Invert a 6x6 compliance or stiffness matrix
pub fn invert6(m: &Mat6, what: &str) -> LaminaResult<Mat6> {
    finite_inverse(m.try_inverse(), what)
}

fn finite_inverse<const N: usize>(
    inv: Option<SMatrix<f64, N, N>>,
    what: &str,
) -> LaminaResult<SMatrix<f64, N, N>> {
    let inv = inv.ok_or_else(|| LaminaError::DegenerateMaterial(format!("{what} is singular")))?;

    if inv.iter().any(|x| !x.is_finite()) {
        return Err(LaminaError::DegenerateMaterial(format!(
            "{what} inverse is not finite"
        )));
    }

    Ok(inv)
}

/// Pad a strain or stress slice of up to 6 components to a Voigt vector
pub fn pad_voigt(values: &[f64]) -> LaminaResult<Vec6> {
    if values.len() > 6 {
        return Err(LaminaError::InvalidInput(format!(
            "Voigt vector has at most 6 components, got {}",
            values.len()
        )));
    }

    let mut v = Vec6::zeros();
    for (i, &x) in values.iter().enumerate() {
        v[i] = x;
    }
    Ok(v)
}
