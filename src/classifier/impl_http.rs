/// HTTP client for the classification service
///
/// `POST <base>/classify` with a multipart body holding the picked file under
/// the `image` field. A 2xx answer must carry `{ "response": "<id>" }`; the
/// older `{ "classification": "<id>" }` shape is still accepted.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::classifier::interface::ClassificationService;
use crate::config::Config;
use crate::error::ClassifyError;
use crate::state::data::{ClassificationResult, SelectedImage};

/// Multipart field name the service reads the upload from
pub const IMAGE_FIELD: &str = "image";

pub struct HttpClassificationService {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpClassificationService {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.classify_endpoint(),
            timeout: config.request_timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_error(&self, err: reqwest::Error) -> ClassifyError {
        if err.is_timeout() {
            ClassifyError::Timeout(self.timeout)
        } else {
            ClassifyError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl ClassificationService for HttpClassificationService {
    async fn classify(&self, image: &SelectedImage) -> Result<ClassificationResult, ClassifyError> {
        let part = Part::bytes(image.bytes.to_vec())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| self.request_error(e))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        log::debug!("POST {} ({} bytes)", self.endpoint, image.bytes.len());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Http(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;
        parse_response(&body)
    }
}

#[derive(Deserialize)]
struct ClassifyResponse {
    response: Option<String>,
    classification: Option<String>,
}

/// Extract the identifier from a 2xx body
pub fn parse_response(body: &[u8]) -> Result<ClassificationResult, ClassifyError> {
    let parsed: ClassifyResponse = serde_json::from_slice(body)
        .map_err(|e| ClassifyError::InvalidResponse(e.to_string()))?;

    parsed
        .response
        .filter(|id| !id.is_empty())
        .or_else(|| parsed.classification.filter(|id| !id.is_empty()))
        .map(ClassificationResult::new)
        .ok_or_else(|| ClassifyError::InvalidResponse("no `response` field in body".to_string()))
}
