//! Material properties

use serde::{Deserialize, Serialize};

use super::property::Property;
use crate::error::{LaminaError, LaminaResult};
use crate::math::Mat3;

/// Orthotropic material constants in the principal directions
///
/// Direction pairs follow the order `{23, 13, 12}` for the Poisson ratios and
/// shear moduli, and `{1, 2, 3}` for the moduli and expansion coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Elastic moduli [E1, E2, E3] in Pa
    pub e: [f64; 3],
    /// Poisson's ratios [v23, v13, v12]
    pub v: [f64; 3],
    /// Shear moduli [G23, G13, G12] in Pa
    pub g: [f64; 3],
    /// Thermal expansion coefficients [a1, a2, a3] in 1/K
    pub alpha: [f64; 3],
    /// Moisture expansion coefficients [b1, b2, b3]
    pub beta: [f64; 3],
    /// Label
    pub name: String,
}

impl Material {
    /// Create a material from directional inputs
    ///
    /// `e` is required. Unset or zero shear moduli are derived from `e` and
    /// `v` assuming isotropy, direction by direction.
    pub fn new(
        e: impl Into<Property>,
        v: impl Into<Property>,
        g: impl Into<Property>,
        alpha: impl Into<Property>,
        beta: impl Into<Property>,
        name: &str,
    ) -> LaminaResult<Self> {
        let e = e.into();
        if !e.is_set() {
            return Err(LaminaError::InvalidMaterialInput(
                "elastic modulus is required".to_string(),
            ));
        }

        let mut material = Self {
            e: e.resolve("E")?,
            v: v.into().resolve("v")?,
            g: g.into().resolve("G")?,
            alpha: alpha.into().resolve("alpha")?,
            beta: beta.into().resolve("beta")?,
            name: name.to_string(),
        };

        material.g = material.effective_shear_modulus();

        Ok(material)
    }

    /// Create an isotropic material from E and v
    /// G is calculated as E / (2 * (1 + v))
    pub fn isotropic(e: f64, v: f64) -> LaminaResult<Self> {
        Self::new(e, v, Property::Unset, Property::Unset, Property::Unset, "")
    }

    /// Create a transversely isotropic fiber material
    pub fn orthotropic(e: [f64; 3], v: [f64; 3], g: [f64; 3]) -> LaminaResult<Self> {
        Self::new(e, v, g, Property::Unset, Property::Unset, "")
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the thermal expansion coefficients
    pub fn with_alpha(mut self, alpha: impl Into<Property>) -> LaminaResult<Self> {
        self.alpha = alpha.into().resolve("alpha")?;
        Ok(self)
    }

    /// Set the moisture expansion coefficients
    pub fn with_beta(mut self, beta: impl Into<Property>) -> LaminaResult<Self> {
        self.beta = beta.into().resolve("beta")?;
        Ok(self)
    }

    /// Replace the elastic moduli
    ///
    /// Shear moduli derived at construction are kept as they are; set them
    /// again with [`Material::with_shear_modulus`] if they should follow.
    pub fn with_elastic_modulus(mut self, e: impl Into<Property>) -> LaminaResult<Self> {
        let e = e.into();
        if !e.is_set() {
            return Err(LaminaError::InvalidMaterialInput(
                "elastic modulus is required".to_string(),
            ));
        }
        self.e = e.resolve("E")?;
        Ok(self)
    }

    /// Replace the Poisson's ratios
    ///
    /// Previously derived shear moduli are not recomputed.
    pub fn with_poisson_ratio(mut self, v: impl Into<Property>) -> LaminaResult<Self> {
        self.v = v.into().resolve("v")?;
        Ok(self)
    }

    /// Replace the shear moduli
    ///
    /// Zero components are derived from the current E and v.
    pub fn with_shear_modulus(mut self, g: impl Into<Property>) -> LaminaResult<Self> {
        self.g = g.into().resolve("G")?;
        self.g = self.effective_shear_modulus();
        Ok(self)
    }

    /// Shear moduli derived from E and v, direction by direction
    pub fn isotropic_shear_modulus(&self) -> [f64; 3] {
        [0, 1, 2].map(|i| self.e[i] / (2.0 * (1.0 + self.v[i])))
    }

    /// Shear moduli, with each zero component taken from the isotropic relation
    pub fn effective_shear_modulus(&self) -> [f64; 3] {
        let isotropic = self.isotropic_shear_modulus();
        [0, 1, 2].map(|i| if self.g[i] == 0.0 { isotropic[i] } else { self.g[i] })
    }

    /// Full Poisson's ratio table
    ///
    /// Entry (i, j) is the ratio v_ji; the minor ratios follow from
    /// reciprocity v_ij / E_i = v_ji / E_j.
    pub fn poisson_tensor(&self) -> Mat3 {
        let [v23, v13, v12] = self.v;
        let [e1, e2, e3] = self.e;

        let v21 = v12 * e2 / e1;
        let v31 = v13 * e3 / e1;
        let v32 = v23 * e3 / e2;

        Mat3::new(
            0.0, v21, v31,
            v12, 0.0, v32,
            v13, v23, 0.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_isotropic_material() {
        let mat = Material::isotropic(4.62e9, 0.36).unwrap();
        let expected_g = 4.62e9 / (2.0 * 1.36);
        for g in mat.g {
            assert_relative_eq!(g, expected_g, max_relative = 1e-12);
        }
        assert_eq!(mat.alpha, [0.0; 3]);
    }

    #[test]
    fn test_given_shear_modulus_is_kept() {
        let fiber = Material::orthotropic(
            [233e9, 23.1e9, 23.1e9],
            [0.4, 0.2, 0.2],
            [8.27e9, 8.96e9, 8.96e9],
        )
        .unwrap();
        assert_eq!(fiber.g, [8.27e9, 8.96e9, 8.96e9]);
        assert_eq!(fiber.effective_shear_modulus(), fiber.g);
    }

    #[test]
    fn test_missing_modulus_rejected() {
        let err = Material::new(Property::Unset, 0.3, None::<f64>, None::<f64>, None::<f64>, "x")
            .unwrap_err();
        assert!(matches!(err, LaminaError::InvalidMaterialInput(_)));
    }

    #[test]
    fn test_zero_shear_component_is_derived() {
        let mat = Material::new(
            [10e9, 8e9, 8e9],
            [0.3, 0.25, 0.25],
            [0.0, 3.5e9, 3.5e9],
            Property::Unset,
            Property::Unset,
            "partial",
        )
        .unwrap();
        assert_relative_eq!(mat.g[0], 10e9 / 2.6, max_relative = 1e-12);
        assert_eq!(mat.g[1], 3.5e9);
        assert_eq!(mat.g[2], 3.5e9);
    }

    #[test]
    fn test_effective_shear_modulus_of_raw_material() {
        let mut mat = Material::isotropic(4.62e9, 0.36).unwrap();
        mat.g = [0.0; 3];
        let expected = 4.62e9 / (2.0 * 1.36);
        for g in mat.effective_shear_modulus() {
            assert_relative_eq!(g, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_unset_modulus_replacement_rejected() {
        let err = Material::isotropic(4.62e9, 0.36)
            .unwrap()
            .with_elastic_modulus(Property::Unset)
            .unwrap_err();
        assert!(matches!(err, LaminaError::InvalidMaterialInput(_)));
    }

    #[test]
    fn test_replacing_modulus_keeps_derived_shear() {
        let mat = Material::isotropic(4.62e9, 0.36).unwrap();
        let stiffer = mat.clone().with_elastic_modulus(9.0e9).unwrap();
        assert_eq!(stiffer.e, [9.0e9; 3]);
        assert_eq!(stiffer.g, mat.g);
    }

    #[test]
    fn test_expansion_coefficients() {
        let mat = Material::isotropic(4.62e9, 0.36)
            .unwrap()
            .with_alpha(41.4e-6)
            .unwrap()
            .with_beta([0.0, 0.2, 0.2])
            .unwrap();
        assert_eq!(mat.alpha, [41.4e-6; 3]);
        assert_eq!(mat.beta, [0.0, 0.2, 0.2]);
    }

    #[test]
    fn test_poisson_tensor_reciprocity() {
        let mat = Material::orthotropic(
            [140e9, 10e9, 12e9],
            [0.45, 0.28, 0.3],
            [3.5e9, 5e9, 5e9],
        )
        .unwrap();
        let nu = mat.poisson_tensor();

        // v_ij / E_i == v_ji / E_j for every pair
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_relative_eq!(
                        nu[(j, i)] / mat.e[i],
                        nu[(i, j)] / mat.e[j],
                        max_relative = 1e-12
                    );
                }
            }
        }
    }
}
