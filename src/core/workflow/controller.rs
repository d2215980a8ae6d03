//! The workflow controller itself.

use tracing::{debug, info, warn};

use super::error::WorkflowError;
use super::progress::{PROGRESS_TICK, ProgressAnimation};
use super::surface::{ResultPresentation, Surface};
use crate::core::clone::VoiceCloneApi;
use crate::core::form::FormState;
use crate::core::media::AudioFile;

/// Coordinates input acquisition, form state, generation and result
/// presentation against a host [`Surface`].
///
/// One controller exists per workflow session; dropping it tears the session
/// down (releasing the live preview handle with it). All methods run on the
/// host's single event task; the only suspension point is the generation
/// request inside [`generate`](Self::generate).
pub struct WorkflowController<S: Surface, A: VoiceCloneApi> {
    surface: S,
    api: A,
    form: FormState,
    download_filename: String,
    summary_shown: bool,
}

impl<S: Surface, A: VoiceCloneApi> WorkflowController<S, A> {
    /// Create a controller with an empty form.
    ///
    /// `download_filename` is the fixed suggested name wired into every
    /// presented result.
    pub fn new(surface: S, api: A, download_filename: impl Into<String>) -> Self {
        Self {
            surface,
            api,
            form: FormState::new(),
            download_filename: download_filename.into(),
            summary_shown: false,
        }
    }

    /// Current form state.
    #[inline]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// The host adapter.
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the host adapter, for hosts that collect outcomes
    /// from it after the workflow ran.
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // =========================================================================
    // Input Acquisition
    // =========================================================================

    /// A file arrived through the system file picker.
    pub fn file_picked(&mut self, file: AudioFile) {
        self.on_file_changed(file);
    }

    /// A file arrived by drag-and-drop. The adapter has already suppressed
    /// the platform's default drop handling.
    pub fn file_dropped(&mut self, file: AudioFile) {
        // Highlight clears on drop regardless of validation outcome.
        self.surface.set_drag_active(false);
        self.on_file_changed(file);
    }

    /// A drag is hovering over the drop target.
    pub fn drag_over(&mut self) {
        self.surface.set_drag_active(true);
    }

    /// The drag left the drop target or ended without a drop.
    pub fn drag_left(&mut self) {
        self.surface.set_drag_active(false);
    }

    /// The drop target was clicked. Opens the file picker unless the target
    /// already shows a ready summary.
    pub fn drop_zone_clicked(&mut self) {
        if !self.summary_shown {
            self.surface.open_file_picker();
        }
    }

    /// Shared validation path for both acquisition routes.
    fn accept_file(&mut self, candidate: AudioFile) {
        if !candidate.is_audio() {
            warn!(
                "Rejected candidate '{}' with declared type '{}'",
                candidate.name(),
                candidate.mime_type()
            );
            self.notify(&WorkflowError::InvalidFileType);
            return;
        }

        let preview = self.surface.create_preview(&candidate);
        debug!("Preview ready at {}", preview.url());

        let summary = candidate.summary();
        self.form.select(candidate, preview);
        self.surface.show_ready_summary(&summary);
        self.summary_shown = true;
        self.surface.reveal_text_step();
    }

    // =========================================================================
    // Form State Hooks
    // =========================================================================

    /// The target text was edited. Any visible result is stale now.
    pub fn on_text_changed(&mut self, text: impl Into<String>) {
        self.surface.hide_result();
        self.form.set_text(text);
    }

    /// A new candidate file was delivered. Any visible result is stale now.
    fn on_file_changed(&mut self, candidate: AudioFile) {
        self.surface.hide_result();
        self.accept_file(candidate);
    }

    // =========================================================================
    // Generation Orchestration
    // =========================================================================

    /// Run one generation against the current form state.
    ///
    /// Preconditions are checked in order (text, then file) and reported
    /// without touching the network. Once both pass, the controller enters
    /// busy state, issues the request and suspends until it settles; there
    /// is no cancellation and no client-side timeout. Busy indicators are
    /// reset on every exit path.
    ///
    /// Re-entry is prevented only by the disabled trigger control while busy;
    /// the controller itself keeps no in-flight flag.
    pub async fn generate(&mut self) {
        let text = self.form.trimmed_text().to_owned();
        if text.is_empty() {
            self.notify(&WorkflowError::EmptyText);
            return;
        }

        let Some(audio) = self.form.selected().map(|s| s.file().clone()) else {
            self.notify(&WorkflowError::MissingAudio);
            return;
        };

        info!(
            "Generating voice clone: {} bytes of reference audio, {} characters of text",
            audio.size_bytes(),
            text.chars().count()
        );

        self.surface.set_busy(true);
        self.surface.set_progress(0.0);

        let outcome = self.await_generation(&audio, &text).await;

        // Guaranteed cleanup: trigger re-enabled, progress and overlay hidden
        // on success and on every failure alike.
        self.surface.set_busy(false);

        match outcome {
            Ok(audio_url) => self.present(&audio_url),
            Err(err) => {
                warn!("Generation failed: {err:?}");
                self.notify(&err);
            }
        }
    }

    /// Drive the request to settlement, animating the cosmetic progress
    /// indicator on the same task while it is in flight.
    async fn await_generation(
        &mut self,
        audio: &AudioFile,
        text: &str,
    ) -> Result<String, WorkflowError> {
        let mut animation = ProgressAnimation::new();
        let mut ticker = tokio::time::interval(PROGRESS_TICK);

        let request = self.api.clone_voice(audio, text);
        tokio::pin!(request);

        let response = loop {
            tokio::select! {
                outcome = &mut request => break outcome?,
                _ = ticker.tick() => {
                    self.surface.set_progress(animation.tick());
                }
            }
        };

        response
            .result_url()
            .map(str::to_owned)
            .ok_or(WorkflowError::EmptyResponse)
    }

    // =========================================================================
    // Result Presentation
    // =========================================================================

    fn present(&mut self, audio_url: &str) {
        info!("Presenting generated audio at {audio_url}");
        let result = ResultPresentation {
            audio_url: audio_url.to_owned(),
            download_filename: self.download_filename.clone(),
        };
        self.surface.present_result(&result);
    }

    fn notify(&mut self, err: &WorkflowError) {
        self.surface.show_error(&err.to_string());
    }
}
