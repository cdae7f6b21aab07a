use anyhow::{Context, Result};
use clap::Parser;
use stack_split::app::App;
use stack_split::config::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

/// Demo host for the split-stack overlay
#[derive(Parser, Debug)]
#[command(name = "stack-split", version, about)]
struct Args {
    /// Configuration profile (overrides STACK_SPLIT_PROFILE)
    #[arg(short, long)]
    profile: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.profile.as_deref() {
        Some(profile) => AppConfig::load(profile),
        None => AppConfig::load_from_env(),
    }
    .context("Failed to load configuration")?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.overlay.log_filter))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(profile = %config.profile, "Configuration loaded");

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .context("Failed to run event loop")?;

    info!(
        handlers = app.coordinator().registry().len(),
        "Event loop finished"
    );
    Ok(())
}
