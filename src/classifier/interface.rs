use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::error::ClassifyError;
use crate::state::data::{ClassificationResult, SelectedImage, Submission};

/// Anything that can turn an image into a product identifier
#[async_trait]
pub trait ClassificationService: Send + Sync {
    async fn classify(&self, image: &SelectedImage) -> Result<ClassificationResult, ClassifyError>;
}

/// Run one submission against `service`, bounded by `timeout`
///
/// Returns the submission id with the outcome so the widget can drop
/// completions that belong to a superseded submission.
pub async fn run_submission(
    service: Arc<dyn ClassificationService>,
    submission: Submission,
    timeout: Duration,
) -> (u64, Result<ClassificationResult, ClassifyError>) {
    let Submission { id, image } = submission;
    log::info!("📤 Submission #{}: classifying {}", id, image.file_name);

    let outcome = match tokio::time::timeout(timeout, service.classify(&image)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(ClassifyError::Timeout(timeout)),
    };

    match &outcome {
        Ok(result) => log::info!("✅ Submission #{}: identifier {}", id, result.identifier()),
        Err(err) => log::warn!("⚠️  Submission #{} failed: {}", id, err),
    }

    (id, outcome)
}
