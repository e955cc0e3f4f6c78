use anyhow::Result;
use learnpath::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
