use clap::Parser;
use tracing::error;

mod args;
use args::Cli;

#[tokio::main]
async fn main() {
    todoz::logging::init();
    let config = Cli::parse().into_config();

    if let Err(e) = todoz::http::serve(config).await {
        error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
