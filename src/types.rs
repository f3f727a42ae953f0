use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::iso_micros;

/// One synthetic log record in the kube-insight ingestion schema.
///
/// Every field except `date`, `time`, and the timestamp embedded in `log` is
/// constant across a run: the generator simulates a single nginx pod.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRow {
    pub date: f64,
    pub kubernetes: KubernetesMeta,
    pub log: String,
    pub stream: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KubernetesMeta {
    pub docker_id: String,
    pub labels: PodLabels,
    pub pod_id: String,
    pub host: String,
    pub pod_name: String,
    pub container_name: String,
    pub namespace_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodLabels {
    pub app: String,
    #[serde(rename = "pod-template-generation")]
    pub pod_template_generation: String,
}

impl LogRow {
    /// Build a record for the fixed pod identity at the given timestamp.
    pub fn at(timestamp: NaiveDateTime) -> Self {
        let t_iso = iso_micros(timestamp);
        LogRow {
            date: timestamp.and_utc().timestamp_micros() as f64 / 1_000_000.0,
            kubernetes: KubernetesMeta {
                docker_id: "e4b0b3eb8c25a73351c5cfeb37a9d64736584c640f21010443fe2e7e5b9c085b"
                    .to_string(),
                labels: PodLabels {
                    app: "nginx".to_string(),
                    pod_template_generation: "1".to_string(),
                },
                pod_id: "1021f36b-4e9e-11e8-8b6b-02425d6e035a".to_string(),
                host: "worker0".to_string(),
                pod_name: "nginx-deployment-abcde".to_string(),
                container_name: "nginx".to_string(),
                namespace_name: "default".to_string(),
            },
            log: format!(
                "10.46.0.0 - - [{}] \"GET /index.html HTTP/1.1\" 200 647 \"-\" \"kube-probe/1.10\" \"-\"",
                t_iso
            ),
            stream: "stdout".to_string(),
            time: t_iso,
        }
    }
}

/// Filter fields for a `/query` request.
#[derive(Debug, Clone)]
pub struct QueryFilter {
    pub namespace: String,
    pub pod_name: String,
    pub container_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl QueryFilter {
    /// Query-string pairs in the order the server documents them.
    pub fn as_params(&self) -> [(&'static str, String); 5] {
        [
            ("namespace", self.namespace.clone()),
            ("pod_name", self.pod_name.clone()),
            ("container_name", self.container_name.clone()),
            ("start_time", iso_micros(self.start_time)),
            ("end_time", iso_micros(self.end_time)),
        ]
    }
}

/// Successful `/query` response body.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub log_rows: Vec<serde_json::Value>,
}
