//! Voice cloning generation API client.
//!
//! This module talks to the VoxClone generation service over HTTP REST.
//! One request carries the reference clip and the target text as a multipart
//! form; the service answers with a JSON payload pointing at the generated
//! audio artifact.
//!
//! # Request
//!
//! `POST {base_url}/api/clone-voice`, multipart fields:
//!
//! - `audio`: the reference clip bytes, with original filename and MIME type
//! - `text`: the trimmed target text (UTF-8)
//!
//! # Response
//!
//! ```json
//! { "success": true, "audio_url": "/api/audio/voice_clone_20250101_1200.mp3" }
//! ```
//!
//! Non-2xx statuses are reported without inspecting the body. The request has
//! no client-enforced timeout: generation time depends on the text length and
//! the service resolves the call when the transport does.

mod client;
pub mod config;
pub mod messages;


pub use client::{CloneError, HttpCloneClient, VoiceCloneApi};
pub use config::{CLONE_ENDPOINT_PATH, CloneApiConfig, DEFAULT_BASE_URL};
pub use messages::CloneVoiceResponse;
