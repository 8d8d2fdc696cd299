use egui::Rgba;

use crate::Engine;

#[derive(Clone, Copy)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub dead_rgba: Rgba,
    pub alive_rgba: Rgba,
}

impl Engine {
    /// Pixel size of one cell on a canvas of `settings.width x settings.height`.
    pub fn cell_size(&self, settings: Settings) -> (f32, f32) {
        (
            settings.width as f32 / self.cols() as f32,
            settings.height as f32 / self.rows() as f32,
        )
    }

    /// The cell under a canvas pixel, or `None` for anything off the canvas.
    pub fn cell_at(&self, settings: Settings, (px, py): (f32, f32)) -> Option<(i64, i64)> {
        let on_canvas = (0. ..settings.width as f32).contains(&px)
            && (0. ..settings.height as f32).contains(&py);
        if !on_canvas {
            return None;
        }
        let (cell_width, cell_height) = self.cell_size(settings);
        let x = (px / cell_width).floor() as i64;
        let y = (py / cell_height).floor() as i64;
        self.current().index(x, y).map(|_| (x, y))
    }

    /// Rasterises the current buffer, one row of pixels after another.
    pub fn render(&self, settings: Settings) -> Vec<Rgba> {
        let grid = self.current();
        let mut pixels = Vec::with_capacity(settings.height * settings.width);
        for i in 0..settings.height {
            for j in 0..settings.width {
                let y = (i * grid.rows() / settings.height) as i64;
                let x = (j * grid.cols() / settings.width) as i64;
                pixels.push(if grid.is_alive(x, y) {
                    settings.alive_rgba
                } else {
                    settings.dead_rgba
                });
            }
        }
        pixels
    }
}
