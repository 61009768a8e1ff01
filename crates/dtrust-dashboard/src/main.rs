//! Entry point for the D-TRUST dashboard.
//!
//! Loads the dataset (built-in or a JSON file), validates it, then opens
//! the Dioxus desktop window.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use dtrust_dashboard::animation;
use dtrust_dashboard::components::Dashboard;
use dtrust_dashboard::data::{DataSource, Dataset};
use dtrust_dashboard::metrics;
use dtrust_dashboard::theme::{self, Theme};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Dataset loaded before launch.
static DATASET: OnceLock<Dataset> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "dtrust-dashboard")]
#[command(about = "D-TRUST disaster truth and relief triggering dashboard")]
struct Args {
    /// JSON dataset to display (uses the built-in dataset if not provided)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Colour theme
    #[arg(short, long, value_enum, default_value_t = Theme::Operations)]
    theme: Theme,

    /// Render rows in their final state without entrance motion
    #[arg(long)]
    no_animations: bool,

    /// Load and validate the dataset, then exit without opening a window
    #[arg(long)]
    check: bool,

    /// Initial window width
    #[arg(long, default_value = "1400")]
    width: u32,

    /// Initial window height
    #[arg(long, default_value = "900")]
    height: u32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let source = DataSource::from_path(args.data);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start dataset loader runtime")?;
    let dataset = runtime
        .block_on(source.load())
        .with_context(|| format!("could not load dataset from {:?}", source))?;
    drop(runtime);

    log_summary(&dataset);

    if args.check {
        tracing::info!("Dataset is valid");
        return Ok(());
    }

    animation::set_animations_enabled(!args.no_animations);
    theme::set_initial_theme(args.theme);
    DATASET.set(dataset).ok();

    tracing::info!("Starting D-TRUST dashboard");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("D-TRUST - Decentralized Disaster Truth System")
                        .with_inner_size(LogicalSize::new(args.width, args.height)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=JetBrains+Mono:wght@400;500;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);

    Ok(())
}

fn log_summary(dataset: &Dataset) {
    tracing::info!(
        disasters = dataset.disasters.len(),
        oracles = dataset.oracles.len(),
        consensus = dataset.consensus.len(),
        triggers = dataset.triggers.len(),
        ledger = dataset.accountability.len(),
        "Dataset loaded"
    );
    tracing::debug!(
        active_oracles = metrics::active_count(&dataset.oracles),
        avg_reputation = ?metrics::avg_reputation(&dataset.oracles),
        executed_triggers = metrics::executed_count(&dataset.triggers),
        "Dataset aggregates"
    );
}

/// Root application component holding the loaded dataset.
#[component]
fn RootApp() -> Element {
    use_drop(|| {
        tracing::info!("Shutting down D-TRUST dashboard");
    });

    let dataset = DATASET.get().cloned().unwrap_or_else(Dataset::builtin);

    rsx! {
        Dashboard { dataset }
    }
}
