use clap::Parser;

use kube_insight_logtools::cli::QueryArgs;
use kube_insight_logtools::{query, utils};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = QueryArgs::parse();
    utils::init_logging(args.verbose);
    query::run(args).await
}
