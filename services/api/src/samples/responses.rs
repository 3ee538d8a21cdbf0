use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub status: String,
    pub uploaded_samples: usize,
    pub invalid_rows: usize,
}

/// History row shown in the dashboard. Purity, flag, and confidence are
/// fixed demo values: classification results are not persisted alongside
/// samples, so this projection cannot report real ones.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(rename = "sampleID")]
    pub sample_id: String,
    pub herb_name: String,
    pub tested_on: DateTime<Utc>,
    pub purity_percent: f64,
    pub adulteration_flag: bool,
    pub confidence_score: f64,
}
