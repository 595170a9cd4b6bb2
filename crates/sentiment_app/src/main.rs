#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod platform;

use anyhow::anyhow;
use sentiment_engine::{ClassifySettings, EngineHandle};

use crate::platform::logging::{self, LogDestination};
use crate::platform::{ui, SentimentApp};

fn main() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let mut settings = ClassifySettings::default();
    if let Ok(base_url) = std::env::var("SENTIMENT_BASE_URL") {
        settings.base_url = base_url;
    }
    let (engine, engine_events) = EngineHandle::new(&settings)
        .map_err(|err| anyhow!("cannot start classifier: {} ({})", err.kind, err.message))?;

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([540.0, 640.0])
        .with_min_inner_size([420.0, 480.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        ui::WINDOW_TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(SentimentApp::new(cc, engine, engine_events)))),
    )
    .map_err(|err| anyhow!("ui failed: {err}"))?;
    Ok(())
}
