use api_starter::{serve, BIND_HOST, PORT};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(err) = serve(BIND_HOST, PORT).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}
