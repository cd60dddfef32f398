//! In-plane coordinate transformation of ply matrices

use super::{Mat3, Vec3};

/// Compute the in-plane stress transformation matrix [T] for a ply angle
///
/// # Arguments
/// * `theta` - Ply angle in radians, measured from the global x-axis to the
///   fiber direction
///
/// # Returns
/// 3x3 matrix mapping global [sx, sy, txy] to material [s1, s2, t12]
pub fn transformation_matrix(theta: f64) -> Mat3 {
    let c = theta.cos();
    let s = theta.sin();

    Mat3::new(
        c * c,  s * s,  2.0 * c * s,
        s * s,  c * c,  -2.0 * c * s,
        -c * s, c * s,  c * c - s * s,
    )
}

/// Rotate the reduced compliance matrix into global axes
///
/// [S_bar] = [T]^T [S_reduced] [T]
pub fn transformed_compliance(s_reduced: &Mat3, theta: f64) -> Mat3 {
    let t = transformation_matrix(theta);
    t.transpose() * s_reduced * t
}

/// Rotate an in-plane stress vector from global axes into material axes
pub fn rotate_stress(stress_xy: &Vec3, theta: f64) -> Vec3 {
    transformation_matrix(theta) * stress_xy
}

/// Rotate an in-plane stress vector from material axes back into global axes
pub fn rotate_stress_to_global(stress_12: &Vec3, theta: f64) -> Vec3 {
    transformation_matrix(-theta) * stress_12
}
