use greenroom_core::config::Config;
use greenroom_core::demo::demo_directory;
use greenroom_core::directory::ArtistDirectory;
use greenroom_core::directory_server::start_directory_server;
use std::path::Path;
use tracing::{error, info};

/// Run the staff console in headless mode (no GUI).
///
/// Starts the artist directory server and waits for SIGTERM / Ctrl-C.
pub fn run(runtime: tokio::runtime::Runtime, config: &Config, fixtures: Option<&Path>) {
    runtime.block_on(async {
        let directory = load_directory(fixtures);
        let handle = start_directory_server(directory, &config.bind_host).await;

        info!("greenroom headless server running");
        info!("  Artist search: {}", handle.search_url());

        wait_for_shutdown_signal().await;

        info!("Shutting down");
    });
}

/// Load the artist directory from a fixture file, falling back to the
/// built-in demo set.
pub fn load_directory(fixtures: Option<&Path>) -> ArtistDirectory {
    match fixtures {
        Some(path) => match ArtistDirectory::from_file(path) {
            Ok(directory) => {
                info!("Loaded {} artists from {}", directory.len(), path.display());
                directory
            }
            Err(e) => {
                error!("Failed to load artist fixtures from {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => demo_directory().clone(),
    }
}

async fn wait_for_shutdown_signal() {
    use tokio::signal;

    let ctrl_c = signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to register SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => {}
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
    }
}
