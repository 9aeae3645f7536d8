mod app;
mod config;
mod input;
mod ui;

use clap::Parser;
use eframe::egui;
use snake_common::{log, logger, warn, GameRng};

use app::SnakeApp;
use config::{get_config_manager, ClientConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// YAML file holding the game settings and window size
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Fixed seed for food placement
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    let config = config_manager.get_config().unwrap_or_else(|e| {
        warn!("{}; falling back to default settings", e);
        ClientConfig::default()
    });

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };
    log!("Starting Snake with seed {}", rng.seed());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(config, config_manager, rng)))),
    )?;

    Ok(())
}
