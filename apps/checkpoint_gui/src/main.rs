//! Site Checkpoint desktop GUI: an attendance dashboard with a numeric-ID
//! check-in/check-out dialog. Runs either against a seeded in-memory roster
//! or against a remote attendance endpoint with background polling.

use std::time::Duration;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use shared::domain::CheckpointId;

use crate::backend_bridge::{runtime, BackendCommand};
use crate::controller::events::UiEvent;
use crate::ui::{CheckpointApp, StartupConfig};

#[derive(Debug, Parser)]
#[command(name = "checkpoint_gui", about = "Site checkpoint attendance dashboard")]
struct Args {
    /// Attendance endpoint URL.
    #[arg(long)]
    endpoint: Option<String>,

    /// Identifier of the checkpoint this terminal sits at.
    #[arg(long)]
    checkpoint_id: Option<i64>,

    /// Roster poll period in seconds.
    #[arg(long)]
    poll_seconds: Option<u64>,

    /// Use the seeded in-memory roster instead of a backend.
    #[arg(long)]
    mock: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let mut settings = config::load_settings();
    if let Some(endpoint) = args.endpoint {
        settings.endpoint_url = endpoint;
    }
    if let Some(checkpoint_id) = args.checkpoint_id {
        settings.checkpoint_id = checkpoint_id;
    }
    if let Some(poll_seconds) = args.poll_seconds {
        settings.poll_seconds = poll_seconds;
    }
    if args.mock {
        settings.mock = true;
    }
    tracing::info!(
        endpoint = %settings.endpoint_url,
        checkpoint_id = settings.checkpoint_id,
        poll_seconds = settings.poll_seconds,
        mock = settings.mock,
        "starting checkpoint dashboard"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    if !settings.mock {
        runtime::launch(
            cmd_rx,
            ui_tx,
            runtime::WorkerConfig {
                checkpoint_id: CheckpointId(settings.checkpoint_id),
                poll_period: Duration::from_secs(settings.poll_seconds.max(1)),
            },
        );
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Site Checkpoint")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    let startup = StartupConfig {
        endpoint_url: settings.endpoint_url,
        mock: settings.mock,
    };
    eframe::run_native(
        "Site Checkpoint",
        options,
        Box::new(move |_cc| Ok(Box::new(CheckpointApp::new(cmd_tx, ui_rx, startup)))),
    )
}
