use anyhow::Context;
use reqwest::StatusCode;
use tracing::{debug, error, info};

use crate::cli::QueryArgs;
use crate::client::LogServer;
use crate::types::{QueryFilter, QueryResponse};

/// Interpret a `/query` response. Non-200 bodies are parsed as error JSON and
/// logged pretty-printed; 200 bodies yield the matched rows, logged with
/// their count. Returns `None` when the server reported an error.
pub fn handle_query_response(
    status: StatusCode,
    body: &str,
) -> anyhow::Result<Option<Vec<serde_json::Value>>> {
    if status != StatusCode::OK {
        let err: serde_json::Value =
            serde_json::from_str(body).context("query error body is not valid JSON")?;
        error!("query failed: {}", serde_json::to_string_pretty(&err)?);
        return Ok(None);
    }

    let result: QueryResponse =
        serde_json::from_str(body).context("query response body is not valid JSON")?;
    info!(
        "query returned {} rows: {}",
        result.log_rows.len(),
        serde_json::to_string_pretty(&result.log_rows)?
    );
    Ok(Some(result.log_rows))
}

pub async fn run(args: QueryArgs) -> anyhow::Result<()> {
    debug!("{:?}", args);
    info!("start time: {}", args.starttime.format("%Y-%m-%dT%H:%M:%S"));
    info!("end time: {}", args.endtime.format("%Y-%m-%dT%H:%M:%S"));

    let server = LogServer::new(&args.host, args.port);
    let filter = QueryFilter {
        namespace: args.namespace,
        pod_name: args.pod_name,
        container_name: args.container_name,
        start_time: args.starttime,
        end_time: args.endtime,
    };

    info!("executing query ...");
    let (status, body) = server.query(&filter).await?;
    handle_query_response(status, &body)?;

    Ok(())
}
