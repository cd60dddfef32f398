//! Lamina - a single ply of composite material
//!
//! A lamina resolves its effective material once at construction and keeps the
//! matrices derived from it. The material-axis matrices (S, C, S_reduced,
//! C_reduced) never change after construction; the orientation-dependent ones
//! (T, S_bar, Q_bar) are rebuilt together whenever the ply angle changes.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::Material;
use crate::analysis::{self, Direction, SolverOptions};
use crate::error::{LaminaError, LaminaResult};
use crate::loads::{NonMechanicalStrain, StressTensor};
use crate::math::{self, Mat3, Mat6, Vec3, Vec6};
use crate::micromechanics::{self, ArrayGeometry};
use crate::results::StressStrainState;

/// Construction inputs for a [`Lamina`]
///
/// The effective material is chosen in this order: `composite` if given,
/// otherwise `fiber` + `matrix` homogenized, otherwise `matrix` alone as a
/// uniform ply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaminaDefinition {
    /// Fiber constituent
    pub fiber: Option<Material>,
    /// Matrix constituent
    pub matrix: Option<Material>,
    /// Pre-built composite material
    pub composite: Option<Material>,
    /// Fiber volume fraction
    pub fiber_volume: f64,
    /// Matrix volume fraction (None = 1 - fiber_volume)
    pub matrix_volume: Option<f64>,
    /// Ply angle in degrees
    pub orientation_deg: f64,
    /// Ply thickness
    pub thickness: f64,
    /// Fiber packing arrangement
    pub geometry: ArrayGeometry,
}

impl LaminaDefinition {
    /// Ply made of a fiber and a matrix at the given fiber volume fraction
    pub fn from_constituents(fiber: Material, matrix: Material, fiber_volume: f64) -> Self {
        Self {
            fiber: Some(fiber),
            matrix: Some(matrix),
            fiber_volume,
            ..Self::default()
        }
    }

    /// Ply made of a known composite material
    pub fn from_composite(composite: Material) -> Self {
        Self {
            composite: Some(composite),
            ..Self::default()
        }
    }

    pub fn with_fiber(mut self, fiber: Material) -> Self {
        self.fiber = Some(fiber);
        self
    }

    pub fn with_matrix(mut self, matrix: Material) -> Self {
        self.matrix = Some(matrix);
        self
    }

    pub fn with_fiber_volume(mut self, vf: f64) -> Self {
        self.fiber_volume = vf;
        self
    }

    pub fn with_matrix_volume(mut self, vm: f64) -> Self {
        self.matrix_volume = Some(vm);
        self
    }

    /// Set the ply angle in degrees
    pub fn with_orientation(mut self, degrees: f64) -> Self {
        self.orientation_deg = degrees;
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_geometry(mut self, geometry: ArrayGeometry) -> Self {
        self.geometry = geometry;
        self
    }
}

/// A single ply with its effective material and derived matrices
#[derive(Debug, Clone)]
pub struct Lamina {
    fiber: Option<Material>,
    matrix: Option<Material>,
    fiber_volume: f64,
    matrix_volume: f64,
    thickness: f64,
    /// Ply angle in radians
    orientation: f64,
    material: Material,

    s: Mat6,
    c: Mat6,
    s_reduced: Mat3,
    c_reduced: Mat3,

    t: Mat3,
    s_bar: Mat3,
    q_bar: Mat3,
}

/// Orientation-dependent matrices (T, S_bar, Q_bar)
fn orientation_matrices(s_reduced: &Mat3, theta: f64) -> LaminaResult<(Mat3, Mat3, Mat3)> {
    let t = math::transformation_matrix(theta);
    let s_bar = math::transformed_compliance(s_reduced, theta);
    let q_bar = math::invert3(&s_bar, "transformed compliance matrix")?;
    Ok((t, s_bar, q_bar))
}

fn check_orientation(degrees: f64) -> LaminaResult<f64> {
    if !degrees.is_finite() {
        return Err(LaminaError::InvalidInput(format!(
            "orientation must be finite, got {degrees}"
        )));
    }
    Ok(degrees.to_radians())
}

impl Lamina {
    /// Build a lamina with default options
    pub fn new(definition: LaminaDefinition) -> LaminaResult<Self> {
        Self::with_options(definition, &SolverOptions::default())
    }

    /// Build a lamina, resolving its material and assembling all matrices
    pub fn with_options(
        definition: LaminaDefinition,
        options: &SolverOptions,
    ) -> LaminaResult<Self> {
        let LaminaDefinition {
            fiber,
            matrix,
            composite,
            fiber_volume,
            matrix_volume,
            orientation_deg,
            thickness,
            geometry,
        } = definition;

        if !(thickness.is_finite() && thickness >= 0.0) {
            return Err(LaminaError::InvalidInput(format!(
                "thickness must be non-negative, got {thickness}"
            )));
        }
        if !(0.0..=1.0).contains(&fiber_volume) {
            return Err(LaminaError::InvalidInput(format!(
                "fiber volume fraction must be within [0, 1], got {fiber_volume}"
            )));
        }
        if let Some(vm) = matrix_volume {
            let deviation = (fiber_volume + vm - 1.0).abs();
            if deviation.is_nan() || deviation > options.volume_fraction_tolerance {
                return Err(LaminaError::InvalidInput(format!(
                    "volume fractions must sum to 1 (fiber {fiber_volume} + matrix {vm})"
                )));
            }
        }
        let orientation = check_orientation(orientation_deg)?;

        let mut material = match (&composite, &fiber, &matrix) {
            (Some(c), _, _) => c.clone(),
            (None, Some(f), Some(m)) => micromechanics::homogenize(f, m, fiber_volume, geometry)?,
            (None, None, Some(m)) => m.clone(),
            _ => return Err(LaminaError::UnderdeterminedLamina),
        };

        // Materials built field by field may still carry zero shear moduli
        let g = material.effective_shear_modulus();
        if g != material.g {
            debug!("material '{}' shear modulus derived from E and v", material.name);
            material.g = g;
        }

        let s = math::compliance_matrix(&material)?;
        let c = math::stiffness_matrix(&s)?;
        let s_reduced = math::reduced_compliance_matrix(&s);
        let c_reduced = math::reduced_stiffness_matrix(&s_reduced)?;
        let (t, s_bar, q_bar) = orientation_matrices(&s_reduced, orientation)?;

        debug!(
            "lamina '{}' built: E = {:?}, orientation = {orientation_deg} deg, thickness = {thickness}",
            material.name, material.e
        );

        Ok(Self {
            fiber,
            matrix,
            fiber_volume,
            matrix_volume: 1.0 - fiber_volume,
            thickness,
            orientation,
            material,
            s,
            c,
            s_reduced,
            c_reduced,
            t,
            s_bar,
            q_bar,
        })
    }

    /// Change the ply angle (degrees)
    ///
    /// Only T, S_bar and Q_bar are rebuilt. On error the lamina is unchanged.
    pub fn set_orientation_deg(&mut self, degrees: f64) -> LaminaResult<()> {
        let orientation = check_orientation(degrees)?;
        let (t, s_bar, q_bar) = orientation_matrices(&self.s_reduced, orientation)?;

        self.orientation = orientation;
        self.t = t;
        self.s_bar = s_bar;
        self.q_bar = q_bar;

        trace!("lamina '{}' rotated to {degrees} deg", self.material.name);
        Ok(())
    }

    // ========================
    // Accessors
    // ========================

    /// Effective material of the ply
    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn fiber(&self) -> Option<&Material> {
        self.fiber.as_ref()
    }

    pub fn matrix(&self) -> Option<&Material> {
        self.matrix.as_ref()
    }

    pub fn fiber_volume(&self) -> f64 {
        self.fiber_volume
    }

    pub fn matrix_volume(&self) -> f64 {
        self.matrix_volume
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Ply angle in radians
    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    /// Ply angle in degrees
    pub fn orientation_deg(&self) -> f64 {
        self.orientation.to_degrees()
    }

    /// 6x6 compliance matrix [S]
    pub fn compliance(&self) -> &Mat6 {
        &self.s
    }

    /// 6x6 stiffness matrix [C]
    pub fn stiffness(&self) -> &Mat6 {
        &self.c
    }

    /// Plane-stress compliance matrix [S_reduced]
    pub fn reduced_compliance(&self) -> &Mat3 {
        &self.s_reduced
    }

    /// Plane-stress stiffness matrix [Q]
    pub fn reduced_stiffness(&self) -> &Mat3 {
        &self.c_reduced
    }

    /// Stress transformation matrix [T] for the current orientation
    pub fn transformation(&self) -> &Mat3 {
        &self.t
    }

    /// Reduced compliance in global axes [S_bar]
    pub fn transformed_compliance(&self) -> &Mat3 {
        &self.s_bar
    }

    /// Reduced stiffness in global axes [Q_bar]
    pub fn transformed_stiffness(&self) -> &Mat3 {
        &self.q_bar
    }

    // ========================
    // Stress / strain
    // ========================

    /// Material-axis strain from stress, e = S s
    pub fn stress_to_strain(&self, stress: &Vec6) -> Vec6 {
        self.s * stress
    }

    /// Material-axis stress from strain, s = C e
    pub fn strain_to_stress(&self, strain: &Vec6) -> Vec6 {
        self.c * strain
    }

    /// Global in-plane strain [ex, ey, gxy] from stress [sx, sy, txy]
    pub fn plane_stress_to_strain(&self, stress: &Vec3) -> Vec3 {
        self.s_bar * stress
    }

    /// Global in-plane stress [sx, sy, txy] from strain [ex, ey, gxy]
    pub fn plane_strain_to_stress(&self, strain: &Vec3) -> Vec3 {
        self.q_bar * strain
    }

    /// Free thermal strain of the ply material for a temperature change
    pub fn thermal_strain(&self, delta_t: f64) -> NonMechanicalStrain {
        NonMechanicalStrain::thermal(&self.material, delta_t)
    }

    /// Free swelling strain of the ply material for a moisture change
    pub fn moisture_strain(&self, delta_m: f64) -> NonMechanicalStrain {
        NonMechanicalStrain::moisture(&self.material, delta_m)
    }

    /// Stress and strain with one direction geometrically restrained
    pub fn solve_boundary_conditions(
        &self,
        stress: &StressTensor,
        constrained: Direction,
        additional: &[NonMechanicalStrain],
        options: &SolverOptions,
    ) -> LaminaResult<StressStrainState> {
        analysis::solve_boundary_conditions(&self.s, stress, constrained, additional, options)
    }

    /// Stress and strain of the unrestrained ply
    pub fn free_response(
        &self,
        stress: &StressTensor,
        additional: &[NonMechanicalStrain],
    ) -> StressStrainState {
        analysis::free_response(&self.s, stress, additional)
    }
}
