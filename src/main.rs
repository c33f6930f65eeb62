use color_eyre::{eyre::eyre, Result};
use padcontrol::config::DemoConfig;
use padcontrol::ui::PadDemoUI;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    setup()?;

    let config_path = DemoConfig::default_path();
    DemoConfig::ensure_default_config(&config_path)?;
    let config = DemoConfig::load(&config_path)?;

    info!("Starting pad demo with {} pads", config.pads.len());
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = egui::ViewportBuilder::default()
        .with_title("PadControl")
        .with_inner_size([720.0, 900.0]);

    eframe::run_native(
        "PadControl",
        native_options,
        Box::new(move |cc| Ok(Box::new(PadDemoUI::new(cc, &config)?))),
    )
    .map_err(|e| eyre!("Pad demo exited with error: {}", e))?;

    Ok(())
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}
