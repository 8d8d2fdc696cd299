mod app;
mod config;
mod scheduler;

use app::App;
use config::Config;

fn main() -> eframe::Result<()> {
    env_logger::init();
    let config = Config::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width as f32 + 16., config.height as f32 + 56.]),
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config)?))),
    )
}
