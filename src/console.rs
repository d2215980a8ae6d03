//! Terminal presentation adapter.
//!
//! A minimal [`Surface`] implementation for one-shot CLI runs: workflow
//! signals land on stderr, presented results are collected for the host to
//! download. The terminal has no drag source, file picker or audio element,
//! so the corresponding capabilities degrade to log lines.

use std::io::Write;

use tracing::debug;
use url::Url;

use crate::core::media::{AudioFile, FileSummary, PreviewUrl};
use crate::core::workflow::{ResultPresentation, Surface};

/// Console-backed workflow surface.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    result: Option<ResultPresentation>,
    busy: bool,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The result presented by the last successful generation, if one is
    /// still visible. Taking it clears the surface.
    pub fn take_result(&mut self) -> Option<ResultPresentation> {
        self.result.take()
    }
}

impl Surface for ConsoleSurface {
    fn create_preview(&mut self, file: &AudioFile) -> PreviewUrl {
        // The terminal renders no in-page preview; the handle only labels the
        // selection and needs no release.
        debug!("No preview playback on a terminal host ({})", file.name());
        PreviewUrl::unmanaged(file.name().to_owned())
    }

    fn show_ready_summary(&mut self, summary: &FileSummary) {
        eprintln!("✓ Fichier prêt : {summary}");
    }

    fn reveal_text_step(&mut self) {
        debug!("Text step revealed");
    }

    fn set_drag_active(&mut self, active: bool) {
        debug!("Drag highlight: {active}");
    }

    fn open_file_picker(&mut self) {
        // One-shot runs receive the file as an argument; there is nothing to
        // open here.
        debug!("No file picker on a terminal host");
    }

    fn set_busy(&mut self, busy: bool) {
        if busy {
            eprintln!("Génération de la voix en cours…");
        } else if self.busy {
            // Terminate the in-place progress line.
            eprintln!();
        }
        self.busy = busy;
    }

    fn set_progress(&mut self, percent: f32) {
        eprint!("\r  Progression : {percent:>5.1}%");
        let _ = std::io::stderr().flush();
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn present_result(&mut self, result: &ResultPresentation) {
        eprintln!("Audio généré : {}", result.audio_url);
        self.result = Some(result.clone());
    }

    fn hide_result(&mut self) {
        self.result = None;
    }
}

/// Resolve a presented playback location against the service base URL.
///
/// The service may answer with an origin-relative location
/// (`/api/audio/<name>`); absolute locations pass through unchanged.
pub fn resolve_result_url(base_url: &str, location: &str) -> Result<Url, url::ParseError> {
    Url::parse(base_url)?.join(location)
}
