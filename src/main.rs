mod model;
mod server;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[derive(Parser)]
#[command(name = "studyboard")]
#[command(about = "HTTP JSON API for managing study records.")]
struct CommandLine {
    /// Port to serve on
    #[arg(long, default_value_t = 9000)]
    port: u16,

    /// Directory of web files served under /static/
    #[arg(long, default_value = "web/")]
    directory: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = CommandLine::parse();

    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let app = router::router(&args.directory).with_state(AppState::new(db));

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Running on port {}", args.port);

    // this call blocks -- the program runs here until killed
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
