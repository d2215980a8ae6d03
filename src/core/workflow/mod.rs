//! Upload-and-generate workflow controller.
//!
//! The controller is a small UI state machine coordinating four
//! responsibilities:
//!
//! 1. **Input acquisition**: a reference clip arrives by file picker or
//!    drag-and-drop; both routes share one validation path.
//! 2. **Form state**: the selected clip and the target text; any mutation
//!    hides a previously presented result so stale output is never shown.
//! 3. **Generation orchestration**: readiness checks, one multipart request
//!    to the generation service, busy-state management with guaranteed
//!    cleanup on every exit path.
//! 4. **Result presentation**: playback source plus a one-shot download
//!    action with a fixed suggested filename.
//!
//! The controller is platform-free: everything it needs from the host
//! (preview URLs, step reveals, busy indicators, notifications) goes through
//! the [`Surface`] capability trait, so the whole workflow unit-tests against
//! an in-memory adapter.

mod controller;
mod error;
mod progress;
mod surface;

#[cfg(test)]
mod tests;

pub use controller::WorkflowController;
pub use error::WorkflowError;
pub use progress::ProgressAnimation;
pub use surface::{ResultPresentation, Surface};
