//! Workflow error taxonomy.

use crate::core::clone::CloneError;

/// Everything that can interrupt the workflow, from local validation to the
/// settled generation request.
///
/// `Display` renders the exact notification text shown to the user (the
/// product speaks French); every error path terminates at a single
/// [`Surface::show_error`](super::Surface::show_error) call with that text.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// The candidate file's declared type does not match `audio/*`.
    #[error("Veuillez sélectionner un fichier audio valide")]
    InvalidFileType,

    /// The target text is empty after trimming.
    #[error("Veuillez entrer un texte à prononcer")]
    EmptyText,

    /// No reference clip is selected.
    #[error("Veuillez importer un fichier audio")]
    MissingAudio,

    /// The request failed in transit or the service answered non-2xx. The
    /// user message stays generic; the cause is kept for logs.
    #[error("Erreur lors de la génération")]
    Transport(#[source] CloneError),

    /// A well-formed 2xx response without the expected success payload.
    #[error("Erreur : aucune réponse audio reçue.")]
    EmptyResponse,

    /// Anything unexpected while interpreting the response; surfaces its own
    /// message text through the same top-level handler as transport errors.
    #[error("{0}")]
    Unexpected(String),
}

impl From<CloneError> for WorkflowError {
    fn from(err: CloneError) -> Self {
        match err {
            CloneError::Network(_) | CloneError::Http(_) => WorkflowError::Transport(err),
            other => WorkflowError::Unexpected(other.to_string()),
        }
    }
}
