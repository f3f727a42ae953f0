use clap::Parser;

use kube_insight_logtools::cli::GenerateArgs;
use kube_insight_logtools::{generate, utils};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = GenerateArgs::parse();
    utils::init_logging(args.verbose);
    generate::run(args).await
}
