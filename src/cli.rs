use chrono::NaiveDateTime;
use clap::Parser;

use crate::utils::parse_cli_timestamp;

#[derive(Parser, Debug)]
#[command(name = "insight-loggen")]
#[command(about = "Generate synthetic Kubernetes log records and POST them in timed batches")]
pub struct GenerateArgs {
    /// Start time: YYYY-MM-ddTHH:MM:SS
    #[arg(value_name = "starttime", value_parser = parse_cli_timestamp)]
    pub starttime: NaiveDateTime,

    /// End time: YYYY-MM-ddTHH:MM:SS
    #[arg(value_name = "endtime", value_parser = parse_cli_timestamp)]
    pub endtime: NaiveDateTime,

    /// Batch log submit interval (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 10)]
    pub interval: i64,

    /// Number of log rows to submit with every post
    #[arg(long, value_name = "ROWS", default_value_t = 100,
          value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub batch_size: usize,

    /// Log server host
    #[arg(long, value_name = "HOST", default_value = "localhost")]
    pub host: String,

    /// Log server port
    #[arg(long, value_name = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(name = "insight-logquery")]
#[command(about = "Query stored log records by pod/container/namespace and time range")]
pub struct QueryArgs {
    /// Start time: YYYY-MM-ddTHH:MM:SS
    #[arg(value_name = "starttime", value_parser = parse_cli_timestamp)]
    pub starttime: NaiveDateTime,

    /// End time: YYYY-MM-ddTHH:MM:SS
    #[arg(value_name = "endtime", value_parser = parse_cli_timestamp)]
    pub endtime: NaiveDateTime,

    /// Pod namespace
    #[arg(long, value_name = "NAME", default_value = "default")]
    pub namespace: String,

    /// Pod name
    #[arg(long, value_name = "NAME", default_value = "nginx-deployment-abcde")]
    pub pod_name: String,

    /// Container name
    #[arg(long, value_name = "NAME", default_value = "nginx")]
    pub container_name: String,

    /// Log server host
    #[arg(long, value_name = "HOST", default_value = "localhost")]
    pub host: String,

    /// Log server port
    #[arg(long, value_name = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
