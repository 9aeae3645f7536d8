use std::collections::VecDeque;
use std::fmt;

use super::types::Coordinate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GridCell {
    #[default]
    Empty,
    Body,
    Head,
    Food,
    /// Grid lines. Only renderers use it; classification never yields it.
    Border,
}

impl GridCell {
    pub fn fill_rgb(&self) -> [u8; 3] {
        match self {
            GridCell::Empty => [0xff, 0xff, 0xff],
            GridCell::Body => [0x00, 0x00, 0x00],
            GridCell::Head => [0xff, 0x00, 0x00],
            GridCell::Food => [0x66, 0xaa, 0xaa],
            GridCell::Border => [0xdd, 0xdd, 0xdd],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    OutOfBounds {
        coordinate: Coordinate,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { coordinate, width, height } => write!(
                f,
                "cell ({}, {}) is outside the {}x{} grid",
                coordinate.x, coordinate.y, width, height
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Pixel size of one cell and the number of cells on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    pub unit_width: f32,
    pub unit_height: f32,
    pub xn: usize,
    pub yn: usize,
}

impl GridGeometry {
    /// Cell counts are raised to at least one.
    pub fn new(unit_width: f32, unit_height: f32, xn: usize, yn: usize) -> Self {
        Self {
            unit_width,
            unit_height,
            xn: xn.max(1),
            yn: yn.max(1),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.xn * self.yn
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x >= 0
            && coordinate.y >= 0
            && (coordinate.x as usize) < self.xn
            && (coordinate.y as usize) < self.yn
    }

    /// Row-major index of a cell.
    pub fn index_of(&self, coordinate: Coordinate) -> Result<usize, GridError> {
        if !self.contains(coordinate) {
            return Err(GridError::OutOfBounds {
                coordinate,
                width: self.xn,
                height: self.yn,
            });
        }
        Ok(coordinate.y as usize * self.xn + coordinate.x as usize)
    }

    pub fn coordinate_of(&self, index: usize) -> Coordinate {
        Coordinate::new((index % self.xn) as i32, (index / self.xn) as i32)
    }

    /// Top-left pixel corner of a cell.
    pub fn origin_of(&self, coordinate: Coordinate) -> (f32, f32) {
        (
            coordinate.x as f32 * self.unit_width,
            coordinate.y as f32 * self.unit_height,
        )
    }

    pub fn pixel_size(&self) -> (f32, f32) {
        (
            self.xn as f32 * self.unit_width,
            self.yn as f32 * self.unit_height,
        )
    }
}

/// Per-cell classification of the board, rebuilt from the snake and food.
#[derive(Clone, Debug)]
pub struct CellGrid {
    geometry: GridGeometry,
    cells: Vec<GridCell>,
}

impl CellGrid {
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            cells: vec![GridCell::Empty; geometry.cell_count()],
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<GridCell> {
        let index = self.geometry.index_of(coordinate).ok()?;
        self.cells.get(index).copied()
    }

    pub fn set_unit_size(&mut self, unit_width: f32, unit_height: f32) {
        self.geometry.unit_width = unit_width;
        self.geometry.unit_height = unit_height;
    }

    pub fn mark(&mut self, index: usize, cell: GridCell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    /// Rebuild every cell. The head is painted last so it wins over food.
    pub fn classify(
        &mut self,
        body: &VecDeque<Coordinate>,
        food: Option<Coordinate>,
    ) -> Result<(), GridError> {
        self.cells.fill(GridCell::Empty);

        for segment in body.iter().skip(1) {
            let index = self.geometry.index_of(*segment)?;
            self.cells[index] = GridCell::Body;
        }

        if let Some(food) = food {
            let index = self.geometry.index_of(food)?;
            self.cells[index] = GridCell::Food;
        }

        if let Some(head) = body.front() {
            let index = self.geometry.index_of(*head)?;
            self.cells[index] = GridCell::Head;
        }

        Ok(())
    }

    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == GridCell::Empty)
            .map(|(index, _)| index)
            .collect()
    }
}
