use chrono::NaiveDateTime;

/// Parse a CLI timestamp argument (`YYYY-MM-ddTHH:MM:SS`, whole seconds).
pub fn parse_cli_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
}

/// Render a timestamp as ISO-8601 with exactly six fractional digits and a
/// literal `Z` suffix. The log server expects this format on the wire.
pub fn iso_micros(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Initialize the tracing subscriber: stderr, no targets, `RUST_LOG` override.
pub fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
