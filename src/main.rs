use anyhow::Result;
use clap::Parser;
use content_ideas::{cli, logging, workflow::launch};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.to_config()?;
    logging::init_tracing(&config)?;

    launch(&args, &config).await
}
