//! Laminate - an ordered stack of plies

use super::Lamina;

/// Plies in stacking order, first added at the bottom
#[derive(Debug, Clone, Default)]
pub struct Laminate {
    plies: Vec<Lamina>,
}

impl Laminate {
    /// Create an empty laminate
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ply on top of the stack
    pub fn add_lamina(&mut self, lamina: Lamina) {
        self.plies.push(lamina);
    }

    /// Plies in stacking order
    pub fn plies(&self) -> &[Lamina] {
        &self.plies
    }

    pub fn len(&self) -> usize {
        self.plies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }

    /// Sum of ply thicknesses
    pub fn total_thickness(&self) -> f64 {
        self.plies.iter().map(Lamina::thickness).sum()
    }
}
