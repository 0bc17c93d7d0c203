/// Podcastr Server - episode catalog service
use clap::{Parser, Subcommand};
use podcastr_catalog::HomeListing;
use podcastr_server::{config::ServerConfig, create_router, state::AppState};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podcastr-server")]
#[command(about = "Podcastr episode catalog service", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "PODCASTR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print the homepage listing
    Episodes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "podcastr_server=info,podcastr_catalog=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Episodes => print_episodes(config).await?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Podcastr Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let app_state = AppState::from_config(config).await?;
    let app = create_router(app_state);

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn print_episodes(config: ServerConfig) -> anyhow::Result<()> {
    let limit = config.catalog.limit;
    let latest_count = config.catalog.latest_count;
    let app_state = AppState::from_config(config).await?;

    let listing = HomeListing::fetch(app_state.catalog.as_ref(), limit, latest_count).await?;

    println!("Latest:");
    for episode in &listing.latest {
        print_episode(episode);
    }
    println!("All episodes:");
    for episode in &listing.all {
        print_episode(episode);
    }

    Ok(())
}

fn print_episode(episode: &podcastr_catalog::CatalogEpisode) {
    println!(
        "  {:<10} {}  {}  ({})",
        episode.published_at,
        episode.episode.file.duration_display,
        episode.episode.title,
        episode.episode.id
    );
}
