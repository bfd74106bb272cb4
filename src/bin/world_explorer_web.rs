use anyhow::Result;
use clap::Parser;
use world_explorer::{Client, web};

#[derive(Parser, Debug)]
#[command(
    name = "world-explorer-web",
    version,
    about = "Web UI for browsing REST Countries data"
)]
struct Cli {
    /// Port to listen on.
    #[arg(short, long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    web::serve(Client::default(), cli.port).await
}
