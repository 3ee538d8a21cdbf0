use async_trait::async_trait;

use crate::samples::models::Sample;
use herbauth_common::error::HerbauthResult;

/// Append-and-read seam over the sample store.
///
/// The demo backing is an in-process list; a durable datastore can
/// implement the same trait without touching the handlers.
#[async_trait]
pub trait SampleRepository: Send + Sync {
    async fn append(&self, sample: Sample) -> HerbauthResult<()>;

    /// Append a batch, returning how many were stored.
    async fn append_many(&self, samples: Vec<Sample>) -> HerbauthResult<usize>;

    /// List stored samples in insertion order, optionally filtered by
    /// exact `sampleID` match.
    async fn list(&self, sample_id: Option<&str>) -> HerbauthResult<Vec<Sample>>;

    async fn count(&self) -> HerbauthResult<usize>;
}
