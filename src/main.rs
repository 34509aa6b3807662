//! Gobang
//!
//! Play five-in-a-row against the machine, in a window or in the terminal.

use anyhow::{anyhow, Result};
use clap::Parser;
use gobang::game::GameConfig;
use gobang::ui::GobangApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Five-in-a-row on a 15x15 board against a heuristic opponent
#[derive(Parser, Debug)]
#[command(name = "gobang")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Let the machine place the first stone (at the centre)
    #[arg(long)]
    machine_first: bool,

    /// Play in the terminal instead of opening a window
    #[arg(long)]
    text: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = if cli.machine_first {
        GameConfig::machine_first()
    } else {
        GameConfig::human_first()
    };
    info!(opener = ?config.opener, text = cli.text, "starting gobang");

    if cli.text {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        gobang::cli::run(config, stdin.lock(), stdout.lock())?;
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(move |cc| Ok(Box::new(GobangApp::new(cc, config)))),
    )
    .map_err(|err| anyhow!("GUI failed: {err}"))
}
