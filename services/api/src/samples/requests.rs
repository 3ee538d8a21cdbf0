use chrono::{DateTime, Utc};
use herbauth_store::samples::models::SensorReading;
use serde::Deserialize;

/// One row of a bulk upload. `sampleID` and `sensors` are soft: their
/// absence rejects the row, not the request. `timestamp` stays required,
/// so a structurally broken body still fails the whole request.
#[derive(Debug, Deserialize)]
pub struct UploadRow {
    #[serde(rename = "sampleID", default)]
    pub sample_id: String,
    pub timestamp: DateTime<Utc>,
    pub sensors: Option<SensorReading>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(rename = "sampleID")]
    pub sample_id: Option<String>,
}
