//! Directional property inputs
//!
//! Material constants may be given as a single isotropic value, as one value
//! per principal direction, or left unset. Every form resolves to a triple.

use serde::{Deserialize, Serialize};

use crate::error::{LaminaError, LaminaResult};

/// A material constant as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Property {
    /// No value given; resolves to zeros
    #[default]
    Unset,
    /// Isotropic shortcut; broadcast to all three directions
    Scalar(f64),
    /// One value per direction
    Vector3([f64; 3]),
}

impl Property {
    /// Build a property from a slice of length 0, 1 or 3
    pub fn from_slice(values: &[f64]) -> LaminaResult<Self> {
        match *values {
            [] => Ok(Self::Unset),
            [x] => Ok(Self::Scalar(x)),
            [a, b, c] => Ok(Self::Vector3([a, b, c])),
            _ => Err(LaminaError::InvalidMaterialInput(format!(
                "expected 1 or 3 components, got {}",
                values.len()
            ))),
        }
    }

    /// Whether a value was supplied
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Resolve to a canonical triple, rejecting non-finite components
    pub fn resolve(&self, field: &str) -> LaminaResult<[f64; 3]> {
        let triple = match *self {
            Self::Unset => [0.0; 3],
            Self::Scalar(x) => [x; 3],
            Self::Vector3(v) => v,
        };

        if let Some(bad) = triple.iter().find(|x| !x.is_finite()) {
            return Err(LaminaError::InvalidMaterialInput(format!(
                "{field} has non-finite component {bad}"
            )));
        }

        Ok(triple)
    }
}

impl From<f64> for Property {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<[f64; 3]> for Property {
    fn from(value: [f64; 3]) -> Self {
        Self::Vector3(value)
    }
}

impl<T: Into<Property>> From<Option<T>> for Property {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_broadcast() {
        let p = Property::from(4.62e9);
        assert_eq!(p.resolve("E").unwrap(), [4.62e9; 3]);
    }

    #[test]
    fn test_unset_resolves_to_zero() {
        let p: Property = None::<f64>.into();
        assert!(!p.is_set());
        assert_eq!(p.resolve("G").unwrap(), [0.0; 3]);
    }

    #[test]
    fn test_from_slice_lengths() {
        assert_eq!(Property::from_slice(&[]).unwrap(), Property::Unset);
        assert_eq!(Property::from_slice(&[0.3]).unwrap(), Property::Scalar(0.3));
        assert_eq!(
            Property::from_slice(&[1.0, 2.0, 3.0]).unwrap(),
            Property::Vector3([1.0, 2.0, 3.0])
        );

        let err = Property::from_slice(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, LaminaError::InvalidMaterialInput(_)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let p = Property::Vector3([1.0, f64::NAN, 1.0]);
        assert!(matches!(
            p.resolve("E"),
            Err(LaminaError::InvalidMaterialInput(_))
        ));
    }
}
