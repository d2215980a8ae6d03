//! HTTP client for the generation service.
//!
//! The client posts one multipart request per generation and parses the JSON
//! answer. Deliberately minimal by design of the workflow it serves: no
//! retries, no client-side timeout, no request cancellation. The calling
//! flow suspends until the transport settles.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};

use super::config::CloneApiConfig;
use super::messages::CloneVoiceResponse;
use crate::core::media::AudioFile;

/// User-Agent header value for API requests.
const USER_AGENT: &str = concat!("VoxClone-Client/", env!("CARGO_PKG_VERSION"));

/// Multipart field carrying the reference clip.
const AUDIO_FIELD: &str = "audio";

/// Multipart field carrying the target text.
const TEXT_FIELD: &str = "text";

// =============================================================================
// Errors
// =============================================================================

/// Failures raised by the generation client.
#[derive(Debug, thiserror::Error)]
pub enum CloneError {
    /// Client construction or request assembly failed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The transport failed before a response arrived.
    #[error("Request failed: {0}")]
    Network(String),

    /// The service answered with a non-success status. The body is not
    /// inspected.
    #[error("Service returned HTTP {0}")]
    Http(reqwest::StatusCode),

    /// A 2xx response body could not be parsed as a generation result.
    #[error("Invalid response payload: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Generation API
// =============================================================================

/// The generation operation the workflow depends on.
///
/// The controller talks to this trait so tests can script outcomes without a
/// network; [`HttpCloneClient`] is the production implementation.
#[async_trait]
pub trait VoiceCloneApi: Send + Sync {
    /// Submit a reference clip and target text; resolves when the service
    /// settles the request.
    async fn clone_voice(
        &self,
        audio: &AudioFile,
        text: &str,
    ) -> Result<CloneVoiceResponse, CloneError>;
}

/// Production client for the generation service.
pub struct HttpCloneClient {
    http: Client,
    config: CloneApiConfig,
}

impl HttpCloneClient {
    /// Create a client for the configured service.
    ///
    /// No request timeout is set: a generation request stays pending until
    /// the underlying transport resolves or rejects it.
    pub fn new(config: CloneApiConfig) -> Result<Self, CloneError> {
        config.validate().map_err(CloneError::Configuration)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CloneError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl VoiceCloneApi for HttpCloneClient {
    async fn clone_voice(
        &self,
        audio: &AudioFile,
        text: &str,
    ) -> Result<CloneVoiceResponse, CloneError> {
        let endpoint = self.config.endpoint_url();

        debug!(
            "Submitting {} bytes of reference audio ({}) to {}",
            audio.size_bytes(),
            audio.name(),
            endpoint
        );

        let file_part = Part::bytes(audio.data().to_vec())
            .file_name(audio.name().to_owned())
            .mime_str(audio.mime_type())
            .map_err(|e| CloneError::Configuration(format!("Invalid MIME type: {e}")))?;

        let form = Form::new()
            .part(AUDIO_FIELD, file_part)
            .text(TEXT_FIELD, text.to_owned());

        let response = self
            .http
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| CloneError::Network(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Generation request to {} returned {}", endpoint, status);
            return Err(CloneError::Http(status));
        }

        let body: CloneVoiceResponse = response
            .json()
            .await
            .map_err(|e| CloneError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        info!(
            "Generation request settled: success={} audio_url={:?}",
            body.success, body.audio_url
        );

        Ok(body)
    }
}
