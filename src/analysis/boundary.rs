//! Stress/strain solve with a geometrically constrained direction
//!
//! The ply is free to deform everywhere except along one principal direction,
//! where the total strain (mechanical plus non-mechanical) must vanish. The
//! stress in that direction is the single unknown and is found from row `c` of
//! the compliance relation:
//!
//! ```text
//! 0 = sum_j S[c, j] s_j (j applied) + S[c, c] s_c + e_nm[c]
//! ```

use log::{debug, warn};

use super::{Direction, SolverOptions};
use crate::error::{LaminaError, LaminaResult};
use crate::loads::{NonMechanicalStrain, StressTensor};
use crate::math::{Mat6, Vec6};
use crate::results::StressStrainState;

fn summed_strain(additional: &[NonMechanicalStrain]) -> Vec6 {
    additional
        .iter()
        .fold(Vec6::zeros(), |acc, nm| acc + nm.strain)
}

/// Solve the stress and total strain of a ply restrained in one direction
///
/// # Arguments
/// * `compliance` - 6x6 compliance matrix in material axes
/// * `stress` - Applied stress; the component along `constrained` is solved for
/// * `constrained` - Direction in which no net deformation may occur
/// * `additional` - Non-mechanical strains (thermal, moisture, ...)
/// * `options` - Degeneracy tolerance and logging
///
/// # Returns
/// Full stress vector including the solved constrained stress, and the total
/// strain vector with an exact zero in the constrained direction
pub fn solve_boundary_conditions(
    compliance: &Mat6,
    stress: &StressTensor,
    constrained: Direction,
    additional: &[NonMechanicalStrain],
    options: &SolverOptions,
) -> LaminaResult<StressStrainState> {
    let c = constrained.index();

    let degenerate = |value: f64| LaminaError::SolverDegeneracy {
        direction: constrained.number(),
        value,
    };

    // A negative or NaN tolerance still rejects an exact zero
    let tolerance = options.tolerance.max(0.0);
    let s_cc = compliance[(c, c)];
    if !s_cc.is_finite() || s_cc.abs() <= tolerance {
        return Err(degenerate(s_cc));
    }

    let mut sigma = stress.to_voigt();
    if sigma[c] != 0.0 {
        warn!(
            "applied stress {} in constrained direction {} is replaced by the solved value",
            sigma[c],
            constrained.number()
        );
    }

    // Components carrying an applied load; the constrained one is the unknown
    let mut applied = sigma.map(|s| if s != 0.0 { 1.0 } else { 0.0 });
    applied[c] = 0.0;

    // Sentinel keeps S[c, c] in the row product
    sigma[c] = 1.0;
    let row = compliance.row(c).transpose().component_mul(&sigma);

    let nm_total = summed_strain(additional);
    let net_strain = nm_total[c];

    let sigma_c = -(row.dot(&applied) + net_strain) / s_cc;
    if !sigma_c.is_finite() {
        return Err(degenerate(s_cc));
    }
    sigma[c] = sigma_c;

    let mut strain = compliance * sigma + nm_total;
    strain[c] = 0.0;

    if options.log {
        debug!(
            "constrained direction {}: solved stress {:.6e}, non-mechanical strain {:.6e}",
            constrained.number(),
            sigma_c,
            net_strain
        );
    }

    Ok(StressStrainState::new(sigma, strain))
}

/// Stress and total strain of an unrestrained ply
///
/// Every stress component is taken as applied: strain = S s + e_nm.
pub fn free_response(
    compliance: &Mat6,
    stress: &StressTensor,
    additional: &[NonMechanicalStrain],
) -> StressStrainState {
    let sigma = stress.to_voigt();
    let strain = compliance * sigma + summed_strain(additional);
    StressStrainState::new(sigma, strain)
}
