use std::time::Instant;

use eframe::{CreationContext, Frame};
use egui::{
    Color32, ColorImage, Context, CornerRadius, Rect, Rgba, Sense, Stroke, StrokeKind,
    TextureHandle, TextureOptions, Ui, Vec2, load::SizedTexture,
};
use life::{Engine, render};
use log::{info, warn};
use rand::Rng;

use crate::{config::Config, scheduler::Scheduler};

pub struct App {
    engine: Engine,
    scheduler: Scheduler,
    settings: render::Settings,
    /// Paint colour of every live cell, picked when the cell comes alive.
    colours: Vec<Option<Color32>>,
    colourful: bool,
    texture: Option<TextureHandle>,
}

impl App {
    /// Called once before the first frame.
    pub fn new(_cc: &CreationContext<'_>, config: Config) -> life::Result<Self> {
        let mut engine = Engine::new(config.rows, config.cols)?;
        engine.randomize();
        info!(
            "seeded {}x{} grid with {} live cells",
            engine.cols(),
            engine.rows(),
            engine.population()
        );
        let mut app = Self {
            colours: vec![None; engine.rows() * engine.cols()],
            engine,
            scheduler: Scheduler::new(config.tick),
            settings: render::Settings {
                width: config.width,
                height: config.height,
                dead_rgba: Rgba::WHITE,
                alive_rgba: Rgba::BLACK,
            },
            colourful: true,
            texture: None,
        };
        app.recolour();
        Ok(app)
    }

    fn step(&mut self) {
        self.engine.advance();
        self.recolour();
    }

    /// Gives newly born cells a colour and forgets the colour of dead ones.
    fn recolour(&mut self) {
        let mut rng = rand::rng();
        let grid = self.engine.current();
        for ((x, y), colour) in grid.coords().zip(self.colours.iter_mut()) {
            match (grid.is_alive(x, y), *colour) {
                (true, None) => *colour = Some(random_colour(&mut rng)),
                (false, Some(_)) => *colour = None,
                _ => (),
            }
        }
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button("Run").clicked() {
                self.scheduler.run();
            }
            if ui.button("Stop").clicked() {
                self.scheduler.stop();
            }
            let idle = !self.scheduler.is_running();
            if ui.add_enabled(idle, egui::Button::new("Step")).clicked() {
                self.step();
            }
            if ui.button("Randomize").clicked() {
                self.engine.randomize();
                self.recolour();
            }
            if ui.button("Clear").clicked() {
                self.engine.clear();
                self.recolour();
            }
            ui.checkbox(&mut self.colourful, "Colours");
            ui.label(format!(
                "{:?}  Generation {}  Population {}",
                self.scheduler.state(),
                self.engine.generation(),
                self.engine.population()
            ));
        });
    }

    fn canvas(&mut self, ui: &mut Ui) {
        let size = Vec2::new(self.settings.width as f32, self.settings.height as f32);
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let origin = response.rect.min;

        let clicked_at = response
            .interact_pointer_pos()
            .filter(|_| response.clicked())
            .map(|pos| pos - origin)
            .and_then(|local| self.engine.cell_at(self.settings, (local.x, local.y)));
        if let Some((x, y)) = clicked_at {
            match self.engine.toggle(x, y) {
                Ok(_) => self.recolour(),
                Err(e) => warn!("ignoring click: {e}"),
            }
        }

        if !self.colourful {
            let pixels = self.engine.render(self.settings);
            let pixels: Vec<Color32> = pixels.into_iter().map(From::from).collect();
            let image = ColorImage::new([self.settings.width, self.settings.height], pixels);
            let options = TextureOptions::NEAREST;
            let texture = match self.texture.take() {
                Some(mut t) if t.size() == image.size => {
                    t.set(image, options);
                    t
                }
                _ => ui.ctx().load_texture("life", image, options),
            };
            let sized_texture = SizedTexture::new(&texture, size);
            egui::Image::new(sized_texture).paint_at(ui, response.rect);
            self.texture = Some(texture);
            return;
        }

        let (cell_width, cell_height) = self.engine.cell_size(self.settings);
        let cell = Vec2::new(cell_width, cell_height);
        let grid = self.engine.current();
        for ((x, y), colour) in grid.coords().zip(&self.colours) {
            let min = origin + Vec2::new(x as f32 * cell_width, y as f32 * cell_height);
            let rect = Rect::from_min_size(min, cell);
            let fill = colour.unwrap_or(Color32::WHITE);
            painter.rect_filled(rect, CornerRadius::ZERO, fill);
            painter.rect_stroke(
                rect,
                CornerRadius::ZERO,
                Stroke::new(1.0, Color32::LIGHT_GRAY),
                StrokeKind::Inside,
            );
        }
    }
}

fn random_colour(rng: &mut impl Rng) -> Color32 {
    Color32::from_rgba_unmultiplied(
        rng.random(),
        rng.random(),
        rng.random(),
        rng.random_range(56..=255),
    )
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));

        // Advance first, then paint whatever is current after the swap.
        if self.scheduler.due(Instant::now()) {
            self.step();
        }
        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui));

        if let Some(wait) = self.scheduler.until_next(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
