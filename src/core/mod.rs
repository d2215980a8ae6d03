pub mod clone;
pub mod form;
pub mod media;
pub mod workflow;

// Re-export commonly used types for convenience
pub use clone::{
    CloneApiConfig, CloneError, CloneVoiceResponse, HttpCloneClient, VoiceCloneApi,
};

pub use form::{FormState, SelectedAudio};

pub use media::{AudioFile, AudioFormat, FileSummary, PreviewUrl};

pub use workflow::{
    ProgressAnimation, ResultPresentation, Surface, WorkflowController, WorkflowError,
};
