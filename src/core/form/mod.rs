//! Form state for the upload-and-generate workflow.
//!
//! Two pieces of mutable state live for the page session: the selected
//! reference clip and the target text. Both are owned here rather than in
//! free-floating globals, so the controller can hand the whole form to a
//! single owner and tear it down deterministically (dropping the form
//! releases the live preview handle).

use crate::core::media::{AudioFile, PreviewUrl};

/// The currently selected reference clip plus its local preview handle.
///
/// At most one selection exists at a time; storing a new one drops the
/// previous, which revokes its preview URL.
#[derive(Debug)]
pub struct SelectedAudio {
    file: AudioFile,
    preview: PreviewUrl,
}

impl SelectedAudio {
    pub fn new(file: AudioFile, preview: PreviewUrl) -> Self {
        Self { file, preview }
    }

    /// The underlying file handle.
    #[inline]
    pub fn file(&self) -> &AudioFile {
        &self.file
    }

    /// Local playback URL for the in-page preview.
    #[inline]
    pub fn preview_url(&self) -> &str {
        self.preview.url()
    }
}

/// The two required generation inputs: selected file and target text.
#[derive(Debug, Default)]
pub struct FormState {
    selected: Option<SelectedAudio>,
    text: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current target text, as typed.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Target text with leading/trailing whitespace removed, as sent to the
    /// generation service.
    #[inline]
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Replace the target text. Called on every edit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The current selection, if any.
    #[inline]
    pub fn selected(&self) -> Option<&SelectedAudio> {
        self.selected.as_ref()
    }

    /// Store a validated selection, replacing (and releasing) any previous
    /// one.
    pub fn select(&mut self, file: AudioFile, preview: PreviewUrl) {
        self.selected = Some(SelectedAudio::new(file, preview));
    }
}
