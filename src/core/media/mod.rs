//! Local media types for the upload workflow.
//!
//! An [`AudioFile`] is the client-side view of a reference clip: display name,
//! declared MIME type and raw bytes. Files picked from disk get their MIME
//! type from the extension table in [`AudioFormat`]; files delivered by a host
//! platform (drag-and-drop) arrive with a declared type already attached.

mod preview;

pub use preview::PreviewUrl;

use std::fmt;
use std::io;
use std::path::Path;

use bytes::Bytes;

/// Fallback MIME type for files whose extension is not a known audio format.
/// Such files fail the `audio/*` check downstream.
const UNKNOWN_MIME: &str = "application/octet-stream";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

// =============================================================================
// Audio Formats
// =============================================================================

/// Audio container formats the client recognizes when inferring a MIME type
/// from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// WAV format (PCM audio)
    Wav,
    /// MP3 format
    Mp3,
    /// M4A format (Apple audio)
    M4a,
    /// FLAC format (lossless compression)
    Flac,
    /// OGG format
    Ogg,
    /// WebM format
    Webm,
}

impl AudioFormat {
    /// Get the MIME type for this format.
    #[inline]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::M4a => "audio/m4a",
            Self::Flac => "audio/flac",
            Self::Ogg => "audio/ogg",
            Self::Webm => "audio/webm",
        }
    }

    /// Get the file extension for this format.
    #[inline]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Flac => "flac",
            Self::Ogg => "ogg",
            Self::Webm => "webm",
        }
    }

    /// Look up a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "m4a" => Some(Self::M4a),
            "flac" => Some(Self::Flac),
            "ogg" => Some(Self::Ogg),
            "webm" => Some(Self::Webm),
            _ => None,
        }
    }
}

// =============================================================================
// Audio File
// =============================================================================

/// A candidate reference clip: file-like object with a display name, a
/// declared MIME type and its payload bytes.
///
/// The payload is reference-counted ([`Bytes`]), so cloning an `AudioFile`
/// does not copy the audio data.
#[derive(Debug, Clone)]
pub struct AudioFile {
    name: String,
    mime_type: String,
    data: Bytes,
}

impl AudioFile {
    /// Create a file from in-memory data with a declared MIME type.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Read a file from disk, inferring the MIME type from its extension.
    ///
    /// Unknown extensions are declared as `application/octet-stream`, which
    /// the workflow rejects at validation time.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mime_type = path
            .extension()
            .and_then(|ext| AudioFormat::from_extension(&ext.to_string_lossy()))
            .map(|format| format.mime_type())
            .unwrap_or(UNKNOWN_MIME);

        let data = std::fs::read(path)?;
        Ok(Self::new(name, mime_type, data))
    }

    /// Display name of the file.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared MIME type.
    #[inline]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Payload size in bytes.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Raw payload bytes.
    #[inline]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Whether the declared MIME type matches `audio/*`.
    pub fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio/")
    }

    /// Summary shown in the drop target once the file is accepted.
    pub fn summary(&self) -> FileSummary {
        FileSummary {
            name: self.name.clone(),
            size_mb: self.data.len() as f64 / BYTES_PER_MB,
        }
    }
}

// =============================================================================
// File Summary
// =============================================================================

/// "Ready" summary for an accepted file: name plus size in megabytes.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    /// Display name of the file.
    pub name: String,
    /// Size in megabytes (unrounded; rendered to one decimal).
    pub size_mb: f64,
}

impl FileSummary {
    /// Size label rounded to one decimal, e.g. `"2.0 MB"`.
    pub fn size_label(&self) -> String {
        format!("{:.1} MB", self.size_mb)
    }
}

impl fmt::Display for FileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.size_label())
    }
}
