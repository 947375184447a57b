/// Classification service client
///
/// - `interface.rs` - the `ClassificationService` seam and submission runner
/// - `impl_http.rs` - multipart upload to the remote `/classify` endpoint
/// - `impl_fake.rs` - in-memory service for tests

pub mod impl_http;
pub mod interface;

#[cfg(test)]
pub mod impl_fake;
#[cfg(test)]
pub mod test_server;

pub use impl_http::HttpClassificationService;
pub use interface::{run_submission, ClassificationService};

#[cfg(test)]
mod tests {
    use super::impl_fake::{FakeClassificationService, FakeReply};
    use super::*;
    use crate::error::ClassifyError;
    use crate::photo::fixture::sample_image;
    use crate::state::data::Submission;
    use std::sync::Arc;
    use std::time::Duration;

    fn submission(id: u64) -> Submission {
        Submission {
            id,
            image: sample_image("a.png"),
        }
    }

    #[tokio::test]
    async fn test_run_submission_passes_outcome_through() {
        let service = Arc::new(FakeClassificationService::answering("abc123"));

        let (id, outcome) = run_submission(service.clone(), submission(7), Duration::from_secs(5)).await;

        assert_eq!(id, 7);
        assert_eq!(outcome.unwrap().identifier(), "abc123");
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_submission_times_out() {
        let service = Arc::new(FakeClassificationService::new(FakeReply::Stall));
        let timeout = Duration::from_secs(30);

        let (id, outcome) = run_submission(service, submission(3), timeout).await;

        assert_eq!(id, 3);
        assert_eq!(outcome, Err(ClassifyError::Timeout(timeout)));
    }
}
