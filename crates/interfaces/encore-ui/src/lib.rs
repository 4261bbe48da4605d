mod app;
mod components;
mod screens;
mod theme;
mod utils;

use encore_app_core::EncoreApplication;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("ENCORE // EVENTOS"),
        ..Default::default()
    };

    eframe::run_native(
        "Encore",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);
            // Cover previews in the wizard decode from in-memory bytes.
            egui_extras::install_image_loaders(&cc.egui_ctx);

            Ok(Box::new(app::EncoreUiApp::new(EncoreApplication::new())))
        }),
    )
}
