/// Local classify stub for exercising the real HTTP client in tests
///
/// Serves `POST /classify` with axum on an ephemeral port, records the
/// multipart parts of every request and answers with a canned reply.

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::routing::post;
use axum::{serve, Router};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// What the stub does with every request
#[derive(Clone)]
pub enum Reply {
    Json(u16, &'static str),
    /// Record the request, never answer
    Stall,
}

/// One multipart part as the stub received it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub len: usize,
}

#[derive(Clone)]
struct StubState {
    reply: Reply,
    requests: Arc<Mutex<Vec<Vec<RecordedPart>>>>,
}

pub struct CannedServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Vec<RecordedPart>>>>,
}

impl CannedServer {
    pub async fn start(reply: Reply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/classify", post(classify))
            .with_state(StubState {
                reply,
                requests: Arc::clone(&requests),
            });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Multipart parts of each request received so far
    pub fn requests(&self) -> Vec<Vec<RecordedPart>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn classify(
    State(state): State<StubState>,
    mut multipart: Multipart,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let len = field.bytes().await.map(|data| data.len()).unwrap_or(0);

        parts.push(RecordedPart {
            name,
            file_name,
            content_type,
            len,
        });
    }
    state.requests.lock().unwrap().push(parts);

    match state.reply {
        Reply::Json(status, body) => (
            StatusCode::from_u16(status).unwrap(),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        ),
        Reply::Stall => std::future::pending().await,
    }
}
