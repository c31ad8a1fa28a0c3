use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::{signal, sync::watch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use promoshelf::cache::MemoryCache;
use promoshelf::config::parse_distance;
use promoshelf::output::{format_output, OutputFormat};
use promoshelf::storage::cached::CachedBrochureRepository;
use promoshelf::{Config, GetBrochures, ListStateController, ShelfState};
use promoshelf_client::ShelfClient;
use promoshelf_core::shelf::Brochure;

/// promoshelf - Browse brochures from nearby stores
#[derive(Parser, Debug)]
#[command(name = "promoshelf")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the shelf host (overrides SHELF_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Shelf document path (overrides SHELF_PATH)
    #[arg(long)]
    path: Option<String>,

    /// Only show brochures within this many kilometers, 0 shows everything
    #[arg(long, short, allow_negative_numbers = true, value_parser = parse_distance)]
    distance: Option<f64>,

    /// Reload from the remote source once the first load finished
    #[arg(long)]
    refresh: bool,

    /// Output format
    #[arg(long, default_value = "pretty")]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber, stdout is reserved for the listing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promoshelf=info,promoshelf_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env();
    if let Some(base_url) = cli.base_url {
        config.shelf_base_url = base_url;
    }
    if let Some(path) = cli.path {
        config.shelf_path = path;
    }
    if cli.distance.is_some() {
        config.distance_km = cli.distance;
    }

    let controller = build_controller(&config);
    let mut states = controller.subscribe();

    tracing::info!(
        base_url = %config.shelf_base_url,
        distance_km = controller.state().filter.distance_km,
        "Loading brochures"
    );
    let mut state = wait_settled(&mut states).await?;

    if cli.refresh {
        controller.on_refresh_requested();
        state = wait_settled(&mut states).await?;
    }

    println!("{}", format_output(&state, cli.format));

    if state.error {
        anyhow::bail!("no brochures could be loaded from {}", config.shelf_base_url);
    }
    Ok(())
}

/// Wire the HTTP source, cache and repository into a list controller.
fn build_controller(config: &Config) -> ListStateController {
    let source = Arc::new(
        ShelfClient::new(&config.shelf_base_url).with_shelf_path(&config.shelf_path),
    );
    let cache = Arc::new(MemoryCache::<Vec<Brochure>>::new());
    let repository = Arc::new(CachedBrochureRepository::new(source, cache));

    ListStateController::with_filter(GetBrochures::new(repository), config.initial_filter())
}

/// Wait until the list is no longer loading, or for Ctrl+C.
async fn wait_settled(states: &mut watch::Receiver<ShelfState>) -> Result<ShelfState> {
    tokio::select! {
        settled = states.wait_for(|state| !state.loading) => Ok(settled?.clone()),
        _ = signal::ctrl_c() => {
            tracing::info!("Received Ctrl+C, shutting down...");
            anyhow::bail!("interrupted before brochures finished loading")
        }
    }
}
