use anyhow::Result;
use museum::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
