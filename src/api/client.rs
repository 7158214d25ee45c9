//! HTTP client for the documentation-generation service
//!
//! Every failure mode (transport, non-2xx status, body parsing) is
//! normalized into [`ApiError`] before it reaches the UI layer.

use std::sync::mpsc::{self, Receiver, TryRecvError};

use serde::Deserialize;
use tokio::runtime::Runtime;

use crate::core::types::{ApiError, DocumentationRequest, DocumentationResponse};

/// Error payload the service may attach to a non-success response
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the documentation service
pub struct DocsClient {
    http: reqwest::Client,
    base_url: String,
    runtime: Runtime,
}

impl DocsClient {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let runtime = Runtime::new()?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            runtime,
        })
    }

    /// Point the client at a different service instance
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Submit a generation request and return a handle the UI can poll.
    ///
    /// The call runs on the client's runtime; the settled result is sent
    /// over a channel exactly once. Dropping the handle abandons the
    /// result without aborting the request.
    pub fn spawn_generate(&self, payload: DocumentationRequest) -> PendingRequest {
        let (tx, rx) = mpsc::channel();
        let http = self.http.clone();
        let url = endpoint_url(&self.base_url);
        self.runtime.spawn(async move {
            let result = generate_docs(&http, &url, &payload).await;
            if let Err(ref err) = result {
                tracing::warn!("Documentation request failed: {}", err);
            }
            // Receiver dropped means nobody is waiting anymore
            let _ = tx.send(result);
        });
        PendingRequest { rx }
    }
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}/generate-docs", base_url.trim_end_matches('/'))
}

/// One best-effort POST to the generation endpoint. No retries, no timeout.
async fn generate_docs(
    http: &reqwest::Client,
    url: &str,
    payload: &DocumentationRequest,
) -> Result<DocumentationResponse, ApiError> {
    let response = http
        .post(url)
        .json(payload)
        .send()
        .await
        .map_err(|e| ApiError::new(e.to_string(), None))?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| ApiError::GENERIC_MESSAGE.to_string());
        return Err(ApiError::new(message, Some(status.as_u16())));
    }

    response
        .json::<DocumentationResponse>()
        .await
        .map_err(|_| ApiError::generic(None))
}

/// Handle for one in-flight generation request
pub struct PendingRequest {
    rx: Receiver<Result<DocumentationResponse, ApiError>>,
}

impl PendingRequest {
    /// Take the settled result if one has arrived (non-blocking)
    pub fn try_take(&self) -> Option<Result<DocumentationResponse, ApiError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            // Sender dropped without settling; surface it as a failure
            Err(TryRecvError::Disconnected) => Some(Err(ApiError::generic(None))),
        }
    }

    #[cfg(test)]
    pub(crate) fn settled(result: Result<DocumentationResponse, ApiError>) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self { rx }
    }
}
