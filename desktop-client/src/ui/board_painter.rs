use eframe::egui;
use snake_common::Renderer;
use snake_common::snake::{Coordinate, GridCell, GridGeometry};

const GRID_LINE_WIDTH: f32 = 1.0;

fn cell_color(cell: GridCell) -> egui::Color32 {
    let [r, g, b] = cell.fill_rgb();
    egui::Color32::from_rgb(r, g, b)
}

/// Paints the board into an egui painter, anchored at `origin`.
pub struct BoardPainter<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> BoardPainter<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn paint_grid_lines(&self, geometry: &GridGeometry) {
        let stroke = egui::Stroke::new(GRID_LINE_WIDTH, cell_color(GridCell::Border));
        let (width, height) = geometry.pixel_size();

        for i in 0..=geometry.xn {
            let x = self.origin.x + i as f32 * geometry.unit_width;
            self.painter.line_segment(
                [egui::pos2(x, self.origin.y), egui::pos2(x, self.origin.y + height)],
                stroke,
            );
        }
        for j in 0..=geometry.yn {
            let y = self.origin.y + j as f32 * geometry.unit_height;
            self.painter.line_segment(
                [egui::pos2(self.origin.x, y), egui::pos2(self.origin.x + width, y)],
                stroke,
            );
        }
    }
}

impl Renderer for BoardPainter<'_> {
    fn paint(&mut self, geometry: &GridGeometry, cells: &[GridCell]) {
        for (index, cell) in cells.iter().enumerate() {
            let coordinate: Coordinate = geometry.coordinate_of(index);
            let (x0, y0) = geometry.origin_of(coordinate);
            let rect = egui::Rect::from_min_size(
                self.origin + egui::vec2(x0, y0),
                egui::vec2(geometry.unit_width, geometry.unit_height),
            );
            self.painter.rect_filled(rect, 0.0, cell_color(*cell));
        }
        self.paint_grid_lines(geometry);
    }
}
