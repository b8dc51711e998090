use clap::Parser;
use greenroom_core::config::Config;
use std::path::PathBuf;

mod headless;
mod ui;

pub use ui::StaffContext;

/// Staff console for the greenroom catalog
#[derive(Parser, Debug)]
#[command(name = "greenroom")]
struct Args {
    /// Serve the artist directory without opening a window
    #[arg(long, env = "GREENROOM_HEADLESS")]
    headless: bool,

    /// Artist directory fixture file; defaults to the built-in demo set
    #[arg(long, env = "GREENROOM_FIXTURES")]
    fixtures: Option<PathBuf>,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    let args = Args::parse();
    let config = Config::load();
    configure_logging();

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    if args.headless {
        headless::run(runtime, &config, args.fixtures.as_deref());
        return;
    }

    #[cfg(feature = "desktop")]
    {
        run_windowed(runtime, config, args.fixtures);
        return;
    }

    #[cfg(not(feature = "desktop"))]
    headless::run(runtime, &config, args.fixtures.as_deref());
}

/// Start the embedded directory server (unless config points at an external
/// one), then hand the main thread to the webview.
#[cfg(feature = "desktop")]
fn run_windowed(runtime: tokio::runtime::Runtime, config: Config, fixtures: Option<PathBuf>) {
    use tracing::info;

    let search_url = match config.search_url.clone() {
        Some(url) => url,
        None => {
            let host = config.bind_host.clone();
            runtime.block_on(async move {
                let directory = headless::load_directory(fixtures.as_deref());
                let handle =
                    greenroom_core::directory_server::start_directory_server(directory, &host)
                        .await;
                handle.search_url()
            })
        }
    };

    // The runtime must outlive the webview so the directory server stays up
    let _runtime = runtime;

    let context = StaffContext { config, search_url };
    info!("Starting UI");
    ui::launch_app(context);
    info!("UI quit");
}
