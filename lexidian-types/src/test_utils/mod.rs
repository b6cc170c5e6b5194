//! In-memory implementations for testing.
//!
//! Available behind the `test-utils` feature flag.

mod in_memory_settings;
mod recording_editor;
mod scripted_provider;

pub use in_memory_settings::InMemorySettingsStore;
pub use recording_editor::RecordingEditor;
pub use scripted_provider::ScriptedProvider;
