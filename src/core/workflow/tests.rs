//! Controller tests against an in-memory surface and a scripted generation
//! API. No network, no rendered UI.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::*;
use crate::core::clone::{CloneError, CloneVoiceResponse, VoiceCloneApi};
use crate::core::media::{AudioFile, FileSummary, PreviewUrl};

const DOWNLOAD_NAME: &str = "voix-clonee.mp3";

// =============================================================================
// Test Doubles
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum SurfaceEvent {
    Preview(String),
    ReadySummary(String),
    TextStepRevealed,
    DragActive(bool),
    FilePickerOpened,
    Busy(bool),
    Progress(f32),
    Error(String),
    Presented(ResultPresentation),
    ResultHidden,
}

/// Records every capability call and tracks what a user would currently see.
#[derive(Default)]
struct RecordingSurface {
    events: Vec<SurfaceEvent>,
    visible_result: Option<ResultPresentation>,
    revocations: Arc<AtomicUsize>,
}

impl RecordingSurface {
    fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Error(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    fn busy_transitions(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Busy(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    fn summaries(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::ReadySummary(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    fn drag_states(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::DragActive(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    fn text_step_revealed(&self) -> bool {
        self.events.contains(&SurfaceEvent::TextStepRevealed)
    }

    fn picker_opened(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::FilePickerOpened))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn create_preview(&mut self, file: &AudioFile) -> PreviewUrl {
        self.events.push(SurfaceEvent::Preview(file.name().to_owned()));
        let counter = self.revocations.clone();
        PreviewUrl::new(format!("blob:{}", file.name()), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn show_ready_summary(&mut self, summary: &FileSummary) {
        self.events
            .push(SurfaceEvent::ReadySummary(summary.to_string()));
    }

    fn reveal_text_step(&mut self) {
        self.events.push(SurfaceEvent::TextStepRevealed);
    }

    fn set_drag_active(&mut self, active: bool) {
        self.events.push(SurfaceEvent::DragActive(active));
    }

    fn open_file_picker(&mut self) {
        self.events.push(SurfaceEvent::FilePickerOpened);
    }

    fn set_busy(&mut self, busy: bool) {
        self.events.push(SurfaceEvent::Busy(busy));
    }

    fn set_progress(&mut self, percent: f32) {
        self.events.push(SurfaceEvent::Progress(percent));
    }

    fn show_error(&mut self, message: &str) {
        self.events.push(SurfaceEvent::Error(message.to_owned()));
    }

    fn present_result(&mut self, result: &ResultPresentation) {
        self.events.push(SurfaceEvent::Presented(result.clone()));
        self.visible_result = Some(result.clone());
    }

    fn hide_result(&mut self) {
        self.events.push(SurfaceEvent::ResultHidden);
        self.visible_result = None;
    }
}

/// Replays scripted outcomes; panics on an unscripted request so tests catch
/// network calls that must not happen.
struct ScriptedApi {
    outcomes: Mutex<VecDeque<Result<CloneVoiceResponse, CloneError>>>,
    calls: Arc<AtomicUsize>,
    last_text: Arc<Mutex<Option<String>>>,
}

impl ScriptedApi {
    fn new(outcomes: Vec<Result<CloneVoiceResponse, CloneError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Arc::new(AtomicUsize::new(0)),
            last_text: Arc::new(Mutex::new(None)),
        }
    }

    fn succeeding(url: &str) -> Self {
        Self::new(vec![Ok(CloneVoiceResponse {
            success: true,
            audio_url: Some(url.to_owned()),
        })])
    }

    fn unscripted() -> Self {
        Self::new(Vec::new())
    }

    fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    fn sent_text(&self) -> Arc<Mutex<Option<String>>> {
        self.last_text.clone()
    }
}

#[async_trait]
impl VoiceCloneApi for ScriptedApi {
    async fn clone_voice(
        &self,
        _audio: &AudioFile,
        text: &str,
    ) -> Result<CloneVoiceResponse, CloneError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_owned());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted generation request")
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn wav(name: &str, size: usize) -> AudioFile {
    AudioFile::new(name, "audio/wav", vec![0u8; size])
}

fn controller_with(
    api: ScriptedApi,
) -> WorkflowController<RecordingSurface, ScriptedApi> {
    WorkflowController::new(RecordingSurface::default(), api, DOWNLOAD_NAME)
}

fn ready_controller(
    api: ScriptedApi,
) -> WorkflowController<RecordingSurface, ScriptedApi> {
    let mut controller = controller_with(api);
    controller.file_picked(wav("voice.wav", 2 * 1024 * 1024));
    controller.on_text_changed("Bonjour tout le monde");
    controller
}

// =============================================================================
// Input Acquisition
// =============================================================================

#[test]
fn test_rejects_non_audio_candidate_without_state_mutation() {
    let mut controller = controller_with(ScriptedApi::unscripted());
    controller.file_picked(AudioFile::new("doc.pdf", "application/pdf", vec![0u8; 10]));

    assert_eq!(
        controller.surface().errors(),
        vec!["Veuillez sélectionner un fichier audio valide"]
    );
    assert!(controller.form().selected().is_none());
    assert!(!controller.surface().text_step_revealed());
}

#[test]
fn test_rejection_keeps_prior_selection() {
    let mut controller = controller_with(ScriptedApi::unscripted());
    controller.file_picked(wav("first.wav", 1024));
    controller.file_picked(AudioFile::new("doc.pdf", "application/pdf", vec![0u8; 10]));

    let selected = controller.form().selected().unwrap();
    assert_eq!(selected.file().name(), "first.wav");
}

#[test]
fn test_accepted_file_shows_summary_and_reveals_text_step() {
    let mut controller = controller_with(ScriptedApi::unscripted());
    controller.file_picked(wav("voice.wav", 2 * 1024 * 1024));

    assert_eq!(controller.surface().summaries(), vec!["voice.wav (2.0 MB)"]);
    assert!(controller.surface().text_step_revealed());

    let selected = controller.form().selected().unwrap();
    assert_eq!(selected.file().name(), "voice.wav");
    assert_eq!(selected.preview_url(), "blob:voice.wav");
}

#[test]
fn test_drop_routes_through_the_same_validation_path() {
    let mut controller = controller_with(ScriptedApi::unscripted());
    controller.file_dropped(AudioFile::new("doc.pdf", "application/pdf", vec![0u8; 10]));

    assert_eq!(
        controller.surface().errors(),
        vec!["Veuillez sélectionner un fichier audio valide"]
    );
    // Highlight cleared on drop even though validation failed.
    assert_eq!(controller.surface().drag_states(), vec![false]);
}

#[test]
fn test_drag_highlight_toggles() {
    let mut controller = controller_with(ScriptedApi::unscripted());
    controller.drag_over();
    controller.drag_left();
    controller.drag_over();
    controller.file_dropped(wav("voice.wav", 1024));

    assert_eq!(
        controller.surface().drag_states(),
        vec![true, false, true, false]
    );
}

#[test]
fn test_click_opens_picker_only_while_no_summary_is_shown() {
    let mut controller = controller_with(ScriptedApi::unscripted());
    controller.drop_zone_clicked();
    assert_eq!(controller.surface().picker_opened(), 1);

    controller.file_picked(wav("voice.wav", 1024));
    controller.drop_zone_clicked();
    assert_eq!(controller.surface().picker_opened(), 1);
}

#[test]
fn test_replacing_file_revokes_previous_preview() {
    let mut controller = controller_with(ScriptedApi::unscripted());
    controller.file_picked(wav("first.wav", 1024));
    let revocations = controller.surface().revocations.clone();
    assert_eq!(revocations.load(Ordering::SeqCst), 0);

    controller.file_picked(wav("second.wav", 1024));
    assert_eq!(revocations.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Result Staleness
// =============================================================================

#[tokio::test]
async fn test_text_edit_hides_visible_result() {
    let mut controller = ready_controller(ScriptedApi::succeeding("/api/audio/out.mp3"));
    controller.generate().await;
    assert!(controller.surface().visible_result.is_some());

    controller.on_text_changed("Un autre texte");
    assert!(controller.surface().visible_result.is_none());
}

#[tokio::test]
async fn test_new_file_hides_visible_result() {
    let mut controller = ready_controller(ScriptedApi::succeeding("/api/audio/out.mp3"));
    controller.generate().await;
    assert!(controller.surface().visible_result.is_some());

    controller.file_picked(wav("other.wav", 1024));
    assert!(controller.surface().visible_result.is_none());
}

// =============================================================================
// Generation Preconditions
// =============================================================================

#[tokio::test]
async fn test_empty_text_reports_validation_error_without_request() {
    let api = ScriptedApi::unscripted();
    let calls = api.call_counter();

    let mut controller = controller_with(api);
    controller.file_picked(wav("voice.wav", 1024));
    controller.generate().await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        controller.surface().errors(),
        vec!["Veuillez entrer un texte à prononcer"]
    );
    assert!(controller.surface().busy_transitions().is_empty());
}

#[tokio::test]
async fn test_whitespace_only_text_counts_as_empty() {
    let api = ScriptedApi::unscripted();
    let calls = api.call_counter();

    let mut controller = controller_with(api);
    controller.file_picked(wav("voice.wav", 1024));
    controller.on_text_changed("  ");
    controller.generate().await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        controller.surface().errors(),
        vec!["Veuillez entrer un texte à prononcer"]
    );
}

#[tokio::test]
async fn test_missing_audio_reports_validation_error_without_request() {
    let api = ScriptedApi::unscripted();
    let calls = api.call_counter();

    let mut controller = controller_with(api);
    controller.on_text_changed("Bonjour");
    controller.generate().await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        controller.surface().errors(),
        vec!["Veuillez importer un fichier audio"]
    );
}

#[tokio::test]
async fn test_text_is_checked_before_audio() {
    let mut controller = controller_with(ScriptedApi::unscripted());
    controller.generate().await;

    assert_eq!(
        controller.surface().errors(),
        vec!["Veuillez entrer un texte à prononcer"]
    );
}

// =============================================================================
// Generation Outcomes
// =============================================================================

#[tokio::test]
async fn test_successful_generation_presents_result() {
    let api = ScriptedApi::succeeding("https://voxclone.example.com/api/audio/y.mp3");
    let sent_text = api.sent_text();

    let mut controller = ready_controller(api);
    controller.generate().await;

    let surface = controller.surface();
    assert_eq!(surface.errors(), Vec::<&str>::new());
    assert_eq!(
        surface.visible_result,
        Some(ResultPresentation {
            audio_url: "https://voxclone.example.com/api/audio/y.mp3".to_owned(),
            download_filename: DOWNLOAD_NAME.to_owned(),
        })
    );
    assert_eq!(surface.busy_transitions(), vec![true, false]);
    assert_eq!(
        sent_text.lock().unwrap().as_deref(),
        Some("Bonjour tout le monde")
    );
}

#[tokio::test]
async fn test_text_is_trimmed_before_submission() {
    let api = ScriptedApi::succeeding("/api/audio/out.mp3");
    let sent_text = api.sent_text();

    let mut controller = controller_with(api);
    controller.file_picked(wav("voice.wav", 1024));
    controller.on_text_changed("  Bonjour  ");
    controller.generate().await;

    assert_eq!(sent_text.lock().unwrap().as_deref(), Some("Bonjour"));
}

#[tokio::test]
async fn test_http_failure_shows_generic_message_and_cleans_up() {
    let api = ScriptedApi::new(vec![Err(CloneError::Http(
        reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    ))]);

    let mut controller = ready_controller(api);
    controller.generate().await;

    let surface = controller.surface();
    assert_eq!(surface.errors(), vec!["Erreur lors de la génération"]);
    assert_eq!(surface.busy_transitions(), vec![true, false]);
    assert!(surface.visible_result.is_none());
}

#[tokio::test]
async fn test_network_failure_shows_generic_message_and_cleans_up() {
    let api = ScriptedApi::new(vec![Err(CloneError::Network(
        "connection reset".to_owned(),
    ))]);

    let mut controller = ready_controller(api);
    controller.generate().await;

    let surface = controller.surface();
    assert_eq!(surface.errors(), vec!["Erreur lors de la génération"]);
    assert_eq!(surface.busy_transitions(), vec![true, false]);
}

#[tokio::test]
async fn test_unsuccessful_response_shows_empty_response_message() {
    let api = ScriptedApi::new(vec![Ok(CloneVoiceResponse {
        success: false,
        audio_url: None,
    })]);

    let mut controller = ready_controller(api);
    controller.generate().await;

    let surface = controller.surface();
    assert_eq!(surface.errors(), vec!["Erreur : aucune réponse audio reçue."]);
    assert_eq!(surface.busy_transitions(), vec![true, false]);
    assert!(surface.visible_result.is_none());
}

#[tokio::test]
async fn test_success_without_location_shows_empty_response_message() {
    let api = ScriptedApi::new(vec![Ok(CloneVoiceResponse {
        success: true,
        audio_url: None,
    })]);

    let mut controller = ready_controller(api);
    controller.generate().await;

    assert_eq!(
        controller.surface().errors(),
        vec!["Erreur : aucune réponse audio reçue."]
    );
}

#[tokio::test]
async fn test_parse_failure_surfaces_its_message_and_cleans_up() {
    let api = ScriptedApi::new(vec![Err(CloneError::InvalidResponse(
        "Failed to parse response: expected value at line 1".to_owned(),
    ))]);

    let mut controller = ready_controller(api);
    controller.generate().await;

    let surface = controller.surface();
    assert_eq!(surface.errors().len(), 1);
    assert!(surface.errors()[0].contains("parse"));
    assert_eq!(surface.busy_transitions(), vec![true, false]);
}

#[tokio::test]
async fn test_new_success_replaces_previous_result() {
    let api = ScriptedApi::new(vec![
        Ok(CloneVoiceResponse {
            success: true,
            audio_url: Some("/api/audio/first.mp3".to_owned()),
        }),
        Ok(CloneVoiceResponse {
            success: true,
            audio_url: Some("/api/audio/second.mp3".to_owned()),
        }),
    ]);

    let mut controller = ready_controller(api);
    controller.generate().await;
    controller.on_text_changed("Deuxième texte");
    controller.generate().await;

    let visible = controller.surface().visible_result.as_ref().unwrap();
    assert_eq!(visible.audio_url, "/api/audio/second.mp3");
    assert_eq!(visible.download_filename, DOWNLOAD_NAME);
}

#[tokio::test]
async fn test_progress_resets_to_zero_on_busy_entry() {
    let mut controller = ready_controller(ScriptedApi::succeeding("/api/audio/out.mp3"));
    controller.generate().await;

    let first_progress = controller.surface().events.iter().find_map(|e| match e {
        SurfaceEvent::Progress(p) => Some(*p),
        _ => None,
    });
    assert_eq!(first_progress, Some(0.0));
}
