use chrono::{Duration, NaiveDateTime};
use reqwest::StatusCode;
use tracing::{debug, error, info};

use crate::cli::GenerateArgs;
use crate::client::LogServer;
use crate::types::LogRow;

/// Start timestamps of every batch covering `[start, end)`.
///
/// Always advances by a full `interval`: when the range is not an exact
/// multiple, the final batch straddles `end` and is still sent in full. An
/// empty or inverted range yields no batches.
pub fn batch_starts(start: NaiveDateTime, end: NaiveDateTime, interval: i64) -> Vec<NaiveDateTime> {
    let mut starts = Vec::new();
    let mut t = start;
    while t < end {
        starts.push(t);
        t += Duration::seconds(interval);
    }
    starts
}

/// Build one batch of rows with timestamps evenly spaced over the interval
/// beginning at `t`.
pub fn build_batch(t: NaiveDateTime, interval: i64, batch_size: usize) -> Vec<LogRow> {
    let spacing_secs = interval as f64 / batch_size as f64;
    (0..batch_size)
        .map(|i| {
            let offset_micros = (i as f64 * spacing_secs * 1_000_000.0).round() as i64;
            LogRow::at(t + Duration::microseconds(offset_micros))
        })
        .collect()
}

/// Interpret the liveness probe response. A non-200 is logged but does not
/// abort the run. Returns whether the server reported itself up.
pub fn handle_liveness_response(status: StatusCode, body: &str) -> bool {
    if status == StatusCode::OK {
        info!("server is up");
        true
    } else {
        error!("server is down: {}", body);
        false
    }
}

/// Log a `/write` response. Non-200 statuses are not fatal; the run moves on
/// to the next batch.
pub fn log_write_response(status: StatusCode, body: &str) {
    info!("response: {}: {}", status.as_u16(), body);
}

pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    debug!("{:?}", args);
    info!("start time: {}", args.starttime.format("%Y-%m-%dT%H:%M:%S"));
    info!("end time: {}", args.endtime.format("%Y-%m-%dT%H:%M:%S"));

    let server = LogServer::new(&args.host, args.port);

    info!("checking if server is up ...");
    let (status, body) = server.liveness().await?;
    handle_liveness_response(status, &body);

    for t in batch_starts(args.starttime, args.endtime, args.interval) {
        let batch = build_batch(t, args.interval, args.batch_size);
        let next = t + Duration::seconds(args.interval);
        info!(
            "sending batch of size {} at time {}",
            batch.len(),
            next.format("%H:%M:%S")
        );
        let (status, body) = server.write_batch(&batch).await?;
        log_write_response(status, &body);
    }

    Ok(())
}
