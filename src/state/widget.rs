use crate::error::ClassifyError;
use crate::photo::{PreviewHandle, PreviewRegistry};

use super::data::{ClassificationResult, SelectedImage, Submission, SubmissionState};

/// The pick → submit → result/error workflow
///
/// Owns the selected image and its preview. Each selection or accepted
/// submit starts a new generation; completions from older generations are
/// ignored.
#[derive(Debug)]
pub struct UploadClassifyWidget {
    registry: PreviewRegistry,
    selected: Option<SelectedImage>,
    preview: Option<PreviewHandle>,
    state: SubmissionState,
    generation: u64,
}

impl UploadClassifyWidget {
    pub fn new(registry: PreviewRegistry) -> Self {
        Self {
            registry,
            selected: None,
            preview: None,
            state: SubmissionState::Idle,
            generation: 0,
        }
    }

    /// Replace the selection; `None` clears it
    pub fn select_file(&mut self, file: Option<SelectedImage>) {
        // Release the old preview before acquiring the new one
        self.preview = None;
        self.generation += 1;

        match file {
            Some(image) => {
                let preview = self.registry.acquire(&image);
                log::info!(
                    "🖼️  Selected {} ({}x{}) as preview #{}",
                    image.file_name,
                    image.width,
                    image.height,
                    preview.id()
                );
                self.preview = Some(preview);
                self.selected = Some(image);
            }
            None => {
                log::info!("Selection cleared");
                self.selected = None;
            }
        }

        self.state = SubmissionState::Idle;
    }

    /// A picked file could not be turned into a selection
    pub fn reject_file(&mut self, err: ClassifyError) {
        log::warn!("⚠️  Rejected file: {}", err);
        self.preview = None;
        self.selected = None;
        self.generation += 1;
        self.state = SubmissionState::Failed(err.user_message().to_string());
    }

    /// Start a submission
    ///
    /// Returns `None` without side effects while one is already loading.
    /// Without a selection the widget fails with the no-file message and
    /// nothing is sent.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.is_loading() {
            log::debug!("Submit ignored: request already in flight");
            return None;
        }

        let Some(image) = &self.selected else {
            self.state = SubmissionState::Failed(ClassifyError::NoFileSelected.user_message().to_string());
            return None;
        };

        self.generation += 1;
        self.state = SubmissionState::Loading;

        Some(Submission {
            id: self.generation,
            image: image.clone(),
        })
    }

    /// Apply the outcome of submission `id`; returns whether it was applied
    pub fn complete(&mut self, id: u64, outcome: Result<ClassificationResult, ClassifyError>) -> bool {
        if id != self.generation || !self.is_loading() {
            log::debug!("Dropping stale completion #{} (current #{})", id, self.generation);
            return false;
        }

        self.state = match outcome {
            Ok(result) => SubmissionState::Succeeded(result),
            Err(err) => SubmissionState::Failed(err.user_message().to_string()),
        };
        true
    }

    #[cfg(test)]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state == SubmissionState::Loading
    }

    /// Submit is offered only with a selection and nothing in flight
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_loading()
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        match &self.state {
            SubmissionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
