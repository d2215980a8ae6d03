//! Capability interface between the controller and its host.

use crate::core::media::{AudioFile, FileSummary, PreviewUrl};

/// What a presented result consists of: the playback location and the fixed
/// suggested filename for the download action.
///
/// The location is passed through as the service returned it; it may be
/// origin-relative, and resolving it against the service base URL is the
/// adapter's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPresentation {
    /// Playback location of the generated audio.
    pub audio_url: String,
    /// Suggested filename for the download action.
    pub download_filename: String,
}

/// Minimal capability interface the controller drives.
///
/// Implemented by a thin presentation adapter: a rendered page, a terminal,
/// or an in-memory recorder in tests. The controller never looks up platform
/// elements itself; everything user-visible goes through these hooks. The
/// adapter also hosts the platform primitives the workflow consumes (preview
/// URLs, the system file picker) and is responsible for suppressing default
/// platform drag behavior before forwarding drop events.
pub trait Surface {
    /// Issue a local playback URL for the candidate file. The returned
    /// handle revokes itself when dropped.
    fn create_preview(&mut self, file: &AudioFile) -> PreviewUrl;

    /// Switch the drop target to its "ready" summary (file name + size).
    fn show_ready_summary(&mut self, summary: &FileSummary);

    /// Reveal the text-entry step of the workflow.
    fn reveal_text_step(&mut self);

    /// Toggle the cosmetic highlight while a drag hovers over the drop
    /// target.
    fn set_drag_active(&mut self, active: bool);

    /// Open the system file picker.
    fn open_file_picker(&mut self);

    /// Enter or leave busy state: trigger control disabled, progress
    /// indicator and blocking overlay shown while `true`.
    fn set_busy(&mut self, busy: bool);

    /// Update the cosmetic progress indicator (0–100). Carries no
    /// correctness semantics.
    fn set_progress(&mut self, percent: f32);

    /// Show a blocking, alert-style notification.
    fn show_error(&mut self, message: &str);

    /// Present a generation result: set the playback source (forcing a
    /// reload), reveal the result section, scroll it into view, and wire the
    /// download action, replacing any prior wiring.
    fn present_result(&mut self, result: &ResultPresentation);

    /// Hide the result section without touching the remote artifact.
    fn hide_result(&mut self);
}
