//! Micromechanics: effective properties of a fiber/matrix composite
//!
//! The composite is treated as transversely isotropic about the fiber axis, so
//! directions 2 and 3 are equivalent. E1 follows the rule of mixtures, E2 and
//! G12 follow Halpin-Tsai, and G23 uses the semi-empirical stress-partitioning
//! relation. The 23 Poisson's ratio closes the transverse-isotropy relation
//! G23 = E3 / (2 (1 + v23)).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::elements::Material;
use crate::error::{LaminaError, LaminaResult};

/// Fiber packing arrangement used by Halpin-Tsai
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ArrayGeometry {
    /// Hexagonal array, xi = 1
    #[default]
    Hexagonal,
    /// Square array, xi = 2
    Square,
}

impl ArrayGeometry {
    /// Halpin-Tsai reinforcement factor
    pub fn xi(self) -> f64 {
        match self {
            Self::Hexagonal => 1.0,
            Self::Square => 2.0,
        }
    }

    /// Look up the geometry from its numeric constant (1 or 2)
    pub fn from_constant(xi: u8) -> LaminaResult<Self> {
        match xi {
            1 => Ok(Self::Hexagonal),
            2 => Ok(Self::Square),
            other => Err(LaminaError::InvalidInput(format!(
                "array geometry must be 1 (hexagonal) or 2 (square), got {other}"
            ))),
        }
    }
}

fn check_volume_fraction(vf: f64) -> LaminaResult<()> {
    if !(0.0..=1.0).contains(&vf) {
        return Err(LaminaError::InvalidInput(format!(
            "fiber volume fraction must be within [0, 1], got {vf}"
        )));
    }
    Ok(())
}

fn degenerate_if_zero(label: &str, value: f64) -> LaminaResult<f64> {
    if value == 0.0 || !value.is_finite() {
        return Err(LaminaError::DegenerateMaterial(format!(
            "{label} is {value}; composite is undefined"
        )));
    }
    Ok(value)
}

fn finite(label: &str, value: f64) -> LaminaResult<f64> {
    if !value.is_finite() {
        return Err(LaminaError::DegenerateMaterial(format!(
            "{label} evaluated to {value}"
        )));
    }
    Ok(value)
}

/// Volume-weighted average of a constituent property
pub fn rule_of_mixtures(fiber: f64, matrix: f64, vf: f64) -> f64 {
    fiber * vf + matrix * (1.0 - vf)
}

/// Halpin-Tsai estimate of a transverse or in-plane shear modulus
///
/// # Arguments
/// * `m_fiber` - Fiber modulus
/// * `m_matrix` - Matrix modulus
/// * `vf` - Fiber volume fraction
/// * `geometry` - Fiber packing arrangement
pub fn halpin_tsai(
    m_fiber: f64,
    m_matrix: f64,
    vf: f64,
    geometry: ArrayGeometry,
) -> LaminaResult<f64> {
    check_volume_fraction(vf)?;
    let m_matrix = degenerate_if_zero("matrix modulus", m_matrix)?;
    let xi = geometry.xi();

    let ratio = m_fiber / m_matrix;
    let eta = (ratio - 1.0) / (ratio + xi);
    let denom = degenerate_if_zero("Halpin-Tsai denominator", 1.0 - eta * vf)?;

    finite("Halpin-Tsai modulus", m_matrix * (1.0 + xi * eta * vf) / denom)
}

/// Out-of-plane shear modulus G23 of the composite
///
/// # Arguments
/// * `g_fiber_23` - Fiber shear modulus in the 23 plane
/// * `g_matrix_23` - Matrix shear modulus in the 23 plane
/// * `v_matrix_23` - Matrix Poisson's ratio in the 23 plane
/// * `vf` - Fiber volume fraction
pub fn transverse_shear_modulus(
    g_fiber_23: f64,
    g_matrix_23: f64,
    v_matrix_23: f64,
    vf: f64,
) -> LaminaResult<f64> {
    check_volume_fraction(vf)?;
    let g_fiber_23 = degenerate_if_zero("fiber shear modulus G23", g_fiber_23)?;
    let vm = 1.0 - vf;

    let g_ratio = g_matrix_23 / g_fiber_23;
    let eta_23 = (3.0 - 4.0 * v_matrix_23 + g_ratio)
        / degenerate_if_zero("matrix 1 - v23", 4.0 * (1.0 - v_matrix_23))?;
    let denom = degenerate_if_zero("G23 denominator", eta_23 * vm + vf * g_ratio)?;

    finite("G23", g_matrix_23 * (vf + eta_23 * vm) / denom)
}

/// Expansion coefficients of the composite for one effect (thermal or moisture)
///
/// The longitudinal value is the stiffness-weighted average; the transverse
/// value corrects the Poisson-weighted average for the constraint imposed by
/// the fibers.
pub fn expansion_coefficients(
    fiber: (&Material, [f64; 3]),
    matrix: (&Material, [f64; 3]),
    composite_v12: f64,
    vf: f64,
) -> LaminaResult<[f64; 3]> {
    check_volume_fraction(vf)?;
    let (fiber, a_f) = fiber;
    let (matrix, a_m) = matrix;
    let vm = 1.0 - vf;

    let stiffness = fiber.e[0] * vf + matrix.e[0] * vm;
    let stiffness = degenerate_if_zero("longitudinal stiffness", stiffness)?;

    let a1 = (fiber.e[0] * a_f[0] * vf + matrix.e[0] * a_m[0] * vm) / stiffness;
    let a2 = (1.0 + fiber.v[2]) * a_f[1] * vf + (1.0 + matrix.v[2]) * a_m[1] * vm
        - a1 * composite_v12;

    Ok([a1, a2, a2])
}

/// Homogenize a fiber and a matrix into an equivalent orthotropic material
///
/// `vf` is the fiber volume fraction; the matrix fraction is `1 - vf`.
pub fn homogenize(
    fiber: &Material,
    matrix: &Material,
    vf: f64,
    geometry: ArrayGeometry,
) -> LaminaResult<Material> {
    check_volume_fraction(vf)?;

    // Unset matrix shear moduli fall back to the isotropic relation
    let g_matrix = matrix.effective_shear_modulus();
    if g_matrix != matrix.g {
        debug!("matrix '{}' shear modulus derived from E and v", matrix.name);
    }

    let e1 = rule_of_mixtures(fiber.e[0], matrix.e[0], vf);
    let e2 = halpin_tsai(fiber.e[1], matrix.e[1], vf, geometry)?;
    let e3 = e2;

    let g12 = halpin_tsai(fiber.g[1], g_matrix[1], vf, geometry)?;
    let g13 = g12;
    let g23 = transverse_shear_modulus(fiber.g[0], g_matrix[0], matrix.v[0], vf)?;

    let mut v = [0, 1, 2].map(|i| rule_of_mixtures(fiber.v[i], matrix.v[i], vf));
    v[0] = finite("v23", e3 / (2.0 * degenerate_if_zero("G23", g23)?) - 1.0)?;

    let alpha = expansion_coefficients((fiber, fiber.alpha), (matrix, matrix.alpha), v[2], vf)?;
    let beta = expansion_coefficients((fiber, fiber.beta), (matrix, matrix.beta), v[2], vf)?;

    let name = if fiber.name.is_empty() && matrix.name.is_empty() {
        String::new()
    } else {
        format!("{}/{}", fiber.name, matrix.name)
    };

    let composite = Material {
        e: [e1, e2, e3],
        v,
        g: [g23, g13, g12],
        alpha,
        beta,
        name,
    };

    debug!(
        "homogenized composite (vf = {vf}, xi = {}): E = {:?}, v = {:?}, G = {:?}",
        geometry.xi(),
        composite.e,
        composite.v,
        composite.g
    );

    Ok(composite)
}
