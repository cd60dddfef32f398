//! Compliance and stiffness matrices for orthotropic materials
//!
//! Voigt order throughout is [11, 22, 33, 23, 13, 12]. The normal block is
//! built from one Poisson's ratio per direction pair and made symmetric through
//! reciprocity, v_ij / E_i = v_ji / E_j, so S_ij = S_ji = -v_ij / E_i.

use super::{invert3, invert6, Mat3, Mat6};
use crate::elements::Material;
use crate::error::{LaminaError, LaminaResult};

fn check_moduli(e: &[f64; 3], g: &[f64; 3]) -> LaminaResult<()> {
    let named = [
        ("E1", e[0]),
        ("E2", e[1]),
        ("E3", e[2]),
        ("G23", g[0]),
        ("G13", g[1]),
        ("G12", g[2]),
    ];

    for (label, value) in named {
        if !(value.is_finite() && value > 0.0) {
            return Err(LaminaError::DegenerateMaterial(format!(
                "{label} must be positive and finite, got {value}"
            )));
        }
    }
    Ok(())
}

/// Compute the 6x6 compliance matrix [S] of an orthotropic material
///
/// Zero shear moduli are taken from the isotropic relation, as in
/// [`Material::effective_shear_modulus`].
pub fn compliance_matrix(material: &Material) -> LaminaResult<Mat6> {
    let g = material.effective_shear_modulus();
    check_moduli(&material.e, &g)?;

    let [e1, e2, e3] = material.e;
    let [v23, v13, v12] = material.v;
    let [g23, g13, g12] = g;

    let s12 = -v12 / e1;
    let s13 = -v13 / e1;
    let s23 = -v23 / e2;

    let mut s = Mat6::zeros();
    s[(0, 0)] = 1.0 / e1;
    s[(1, 1)] = 1.0 / e2;
    s[(2, 2)] = 1.0 / e3;
    s[(0, 1)] = s12;
    s[(1, 0)] = s12;
    s[(0, 2)] = s13;
    s[(2, 0)] = s13;
    s[(1, 2)] = s23;
    s[(2, 1)] = s23;

    s[(3, 3)] = 1.0 / g23;
    s[(4, 4)] = 1.0 / g13;
    s[(5, 5)] = 1.0 / g12;

    Ok(s)
}

/// Extract the plane-stress compliance matrix [S_reduced] from [S]
///
/// Keeps the 11/22 normal terms and the 12 shear term (sigma_3 = tau_23 =
/// tau_13 = 0).
pub fn reduced_compliance_matrix(s: &Mat6) -> Mat3 {
    Mat3::new(
        s[(0, 0)], s[(0, 1)], 0.0,
        s[(1, 0)], s[(1, 1)], 0.0,
        0.0,       0.0,       s[(5, 5)],
    )
}

/// Stiffness matrix [C] = [S]^-1
pub fn stiffness_matrix(s: &Mat6) -> LaminaResult<Mat6> {
    invert6(s, "compliance matrix")
}

/// Reduced stiffness matrix [Q] = [S_reduced]^-1
pub fn reduced_stiffness_matrix(s_reduced: &Mat3) -> LaminaResult<Mat3> {
    invert3(s_reduced, "reduced compliance matrix")
}
