//! Message types for generation service responses.

use serde::{Deserialize, Serialize};

/// JSON body of a 2xx generation response.
///
/// A successful generation carries `success: true` plus the playback location
/// of the artifact. The location may be origin-relative (the reference server
/// answers with `/api/audio/<name>`); resolution against the service base URL
/// is the presentation adapter's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloneVoiceResponse {
    /// Whether generation succeeded.
    pub success: bool,

    /// Playback location of the generated audio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl CloneVoiceResponse {
    /// The playback location, present only when the response actually signals
    /// success. A 2xx body with `success: false` or no location yields `None`.
    pub fn result_url(&self) -> Option<&str> {
        if self.success {
            self.audio_url.as_deref().filter(|url| !url.is_empty())
        } else {
            None
        }
    }
}
