use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::samples::models::Sample;
use crate::samples::repositories::SampleRepository;
use herbauth_common::error::HerbauthResult;

/// In-process sample store: append-only, insertion-ordered, reset on
/// restart. The lock serializes concurrent appends and reads.
#[derive(Debug, Clone, Default)]
pub struct MemorySampleRepository {
    samples: Arc<RwLock<Vec<Sample>>>,
}

impl MemorySampleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SampleRepository for MemorySampleRepository {
    async fn append(&self, sample: Sample) -> HerbauthResult<()> {
        self.samples.write().await.push(sample);
        Ok(())
    }

    async fn append_many(&self, samples: Vec<Sample>) -> HerbauthResult<usize> {
        let stored = samples.len();
        self.samples.write().await.extend(samples);
        Ok(stored)
    }

    async fn list(&self, sample_id: Option<&str>) -> HerbauthResult<Vec<Sample>> {
        let store = self.samples.read().await;
        let rows = match sample_id {
            Some(id) => store
                .iter()
                .filter(|s| s.sample_id == id)
                .cloned()
                .collect(),
            None => store.clone(),
        };
        Ok(rows)
    }

    async fn count(&self) -> HerbauthResult<usize> {
        Ok(self.samples.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::models::{IonSelective, SensorReading};
    use chrono::Utc;

    fn make_sample(id: &str) -> Sample {
        Sample {
            sample_id: id.to_string(),
            timestamp: Utc::now(),
            sensors: SensorReading {
                voltammetry: vec![0.1, 0.2, 0.3],
                ph: 7.0,
                tds_ec: 100.0,
                orp: 150.0,
                turbidity: 2.0,
                temperature: 23.0,
                moisture: 10.0,
                ion_selective: IonSelective {
                    na: 15.0,
                    k: 7.0,
                    ca: 10.0,
                },
                rf_resonator: 1.2,
            },
        }
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let repo = MemorySampleRepository::new();
        repo.append(make_sample("A")).await.unwrap();
        repo.append(make_sample("B")).await.unwrap();
        repo.append(make_sample("A")).await.unwrap();

        let all = repo.list(None).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|s| s.sample_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "A"]);
    }

    #[tokio::test]
    async fn list_filters_by_exact_id() {
        let repo = MemorySampleRepository::new();
        repo.append(make_sample("A")).await.unwrap();
        repo.append(make_sample("AB")).await.unwrap();
        repo.append(make_sample("A")).await.unwrap();

        let matched = repo.list(Some("A")).await.unwrap();
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|s| s.sample_id == "A"));
    }

    #[tokio::test]
    async fn list_unknown_id_returns_empty() {
        let repo = MemorySampleRepository::new();
        repo.append(make_sample("A")).await.unwrap();

        let matched = repo.list(Some("missing")).await.unwrap();
        assert!(matched.is_empty());
    }

    #[tokio::test]
    async fn append_many_counts_stored_rows() {
        let repo = MemorySampleRepository::new();
        let stored = repo
            .append_many(vec![make_sample("A"), make_sample("B")])
            .await
            .unwrap();
        assert_eq!(stored, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn concurrent_appends_are_not_lost() {
        let repo = MemorySampleRepository::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.append(make_sample(&format!("S-{i}"))).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(repo.count().await.unwrap(), 32);
    }
}
