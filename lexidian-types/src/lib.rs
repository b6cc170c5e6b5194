#![deny(missing_docs)]
//! Shared types and traits for lexidian.
//!
//! Provides the [`Provider`] trait for streaming completions, the
//! [`TextSink`] that receives generated text, the [`Editor`] host
//! interface, and the persisted [`Settings`] with their [`SettingsStore`].

pub mod error;
pub mod host;
pub mod provider;
pub mod settings;
pub mod stream;
pub mod types;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports
pub use error::{CompletionError, SettingsError};
pub use host::{Editor, EditorSink};
pub use provider::Provider;
pub use settings::{DEFAULT_ENDPOINT, DEFAULT_MODEL, Settings, SettingsStore};
pub use stream::{FrameStream, StreamHandle, TextSink};
pub use types::{CompletionRequest, StreamFrame, StreamSummary};
