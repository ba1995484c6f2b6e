use super::{App, Config};
use eframe::egui::{pos2, vec2, Rect, Sense, Stroke, Ui, Vec2};

impl App {
    /// Paints live cells as squares and separates cells with grid lines.
    pub(super) fn draw(&self, ui: &mut Ui) {
        let res = self.cell_resolution;
        let grid = self.simulation.grid();
        let size = vec2(grid.cols() as f32 * res, grid.rows() as f32 * res);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let field = response.rect;

        let side = (res - Config::CELL_SHRINK).max(1.);
        for (x, y) in grid.live_cells() {
            let min = field.min
                + vec2(
                    x as f32 * res + Config::CELL_INSET,
                    y as f32 * res + Config::CELL_INSET,
                );
            let cell = Rect::from_min_size(min, Vec2::splat(side));
            painter.rect_filled(cell, 0., Config::CELL_COLOR);
        }

        let stroke = Stroke::new(Config::GRID_LINE_WIDTH, Config::GRID_LINE_COLOR);
        for x in 0..grid.cols() {
            let px = field.left() + x as f32 * res;
            painter.line_segment([pos2(px, field.top()), pos2(px, field.bottom())], stroke);
        }
        for y in 0..grid.rows() {
            let py = field.top() + y as f32 * res;
            painter.line_segment([pos2(field.left(), py), pos2(field.right(), py)], stroke);
        }
    }
}
