/// Linkshelf Server - personal bookmark API
use clap::{Parser, Subcommand};
use linkshelf_core::UserId;
use linkshelf_server::{config::ServerConfig, create_router, services::AuthService, AppState};
use linkshelf_storage::SqliteBookmarkStore;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "linkshelf-server")]
#[command(about = "Linkshelf personal bookmark server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml)
    #[arg(short, long, global = true, env = "LINKSHELF_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Mint an access token for local development
    IssueToken {
        /// User id to put in the token's subject
        #[arg(short, long)]
        user_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkshelf_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load_from(cli.config)?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::IssueToken { user_id } => issue_token(&config, &user_id)?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Linkshelf Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let pool = linkshelf_storage::create_pool(&config.storage.database_url).await?;
    linkshelf_storage::run_migrations(&pool).await?;
    let store = Arc::new(SqliteBookmarkStore::new(pool));
    tracing::info!("Database connected");

    let auth_service = Arc::new(AuthService::new(
        &config.auth.jwt_secret,
        config.auth.token_expiration_hours,
    )?);

    let app = create_router(AppState::new(store, auth_service));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

fn issue_token(config: &ServerConfig, user_id: &str) -> anyhow::Result<()> {
    if user_id.trim().is_empty() {
        anyhow::bail!("user id cannot be empty");
    }

    let auth_service = AuthService::new(&config.auth.jwt_secret, config.auth.token_expiration_hours)?;
    let token = auth_service.create_access_token(&UserId::new(user_id))?;

    println!("{}", token);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
