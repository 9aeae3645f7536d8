use crate::snake::{GridCell, GridGeometry};

/// Paints a classified board. Called once per frame and after structural
/// changes (resize, restart).
pub trait Renderer {
    fn paint(&mut self, geometry: &GridGeometry, cells: &[GridCell]);
}
