//! Materials, plies and laminates

mod lamina;
mod laminate;
mod material;
mod property;

pub use lamina::{Lamina, LaminaDefinition};
pub use laminate::Laminate;
pub use material::Material;
pub use property::Property;
