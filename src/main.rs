use clap::Parser;

use linkform::config::Args;
use linkform::runtime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    runtime::run(args).await
}
