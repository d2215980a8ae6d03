//! Ephemeral local playback handles.
//!
//! Browser hosts hand out revocable object URLs for previewing a local file
//! without uploading it. [`PreviewUrl`] wraps such a handle and guarantees the
//! revocation runs exactly once, when the handle is dropped. Replacing a
//! selection releases the previous preview instead of leaking it.

use std::fmt;

use tracing::debug;

/// A revocable local playback URL issued by the host platform.
///
/// The handle owns its revocation: dropping it (including by replacement of
/// the selected file) releases the underlying resource. Hosts without a
/// revocable URL service use [`PreviewUrl::unmanaged`].
pub struct PreviewUrl {
    url: String,
    revoke: Option<Box<dyn FnOnce(&str) + Send>>,
}

impl PreviewUrl {
    /// Wrap a platform-issued URL with its revocation action.
    pub fn new(url: impl Into<String>, revoke: impl FnOnce(&str) + Send + 'static) -> Self {
        Self {
            url: url.into(),
            revoke: Some(Box::new(revoke)),
        }
    }

    /// Wrap a URL that needs no release (e.g. a plain local path).
    pub fn unmanaged(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            revoke: None,
        }
    }

    /// The playback URL.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        if let Some(revoke) = self.revoke.take() {
            debug!("Revoking preview URL {}", self.url);
            revoke(&self.url);
        }
    }
}

impl fmt::Debug for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewUrl")
            .field("url", &self.url)
            .field("managed", &self.revoke.is_some())
            .finish()
    }
}

impl fmt::Display for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
