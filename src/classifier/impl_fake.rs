use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::classifier::interface::ClassificationService;
use crate::error::ClassifyError;
use crate::state::data::{ClassificationResult, SelectedImage};

/// How the fake answers
pub enum FakeReply {
    Answer(Result<ClassificationResult, ClassifyError>),
    /// Never completes
    Stall,
}

/// In-memory service that counts the requests it sees
pub struct FakeClassificationService {
    reply: FakeReply,
    calls: AtomicUsize,
}

impl FakeClassificationService {
    pub fn new(reply: FakeReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn answering(identifier: &str) -> Self {
        Self::new(FakeReply::Answer(Ok(ClassificationResult::new(identifier))))
    }

    pub fn failing(err: ClassifyError) -> Self {
        Self::new(FakeReply::Answer(Err(err)))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClassificationService for FakeClassificationService {
    async fn classify(&self, _image: &SelectedImage) -> Result<ClassificationResult, ClassifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            FakeReply::Answer(outcome) => outcome.clone(),
            FakeReply::Stall => std::future::pending().await,
        }
    }
}
