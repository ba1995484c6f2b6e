use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;
    pub const CELL_COLOR: Color32 = Color32::BLACK;
    pub const GRID_LINE_COLOR: Color32 = Color32::BLACK;
    pub const GRID_LINE_WIDTH: f32 = 1.;

    /// Gap between a cell square and the top left grid lines.
    pub const CELL_INSET: f32 = 2.;
    /// How much smaller than the cell pitch a cell square is.
    pub const CELL_SHRINK: f32 = 3.;

    pub const TITLE: &'static str = "Conway's Game of Life";
}
