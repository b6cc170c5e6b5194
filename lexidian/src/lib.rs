#![deny(missing_docs)]
//! # lexidian — umbrella crate
//!
//! Stream text completions into an editor at the cursor. Re-exports the
//! component crates behind feature flags, provides the [`Autocomplete`]
//! command, and a `prelude` for the happy path.

pub mod autocomplete;

pub use autocomplete::Autocomplete;

pub use lexidian_types;
#[cfg(feature = "provider-openai")]
pub use lexidian_provider_openai;
#[cfg(feature = "settings-fs")]
pub use lexidian_settings_fs;

/// Happy-path imports for wiring lexidian into a host.
pub mod prelude {
    pub use crate::autocomplete::Autocomplete;

    pub use lexidian_types::{
        CompletionError, CompletionRequest, Editor, EditorSink, Provider, Settings, SettingsError,
        SettingsStore, StreamFrame, StreamSummary, TextSink,
    };

    #[cfg(feature = "provider-openai")]
    pub use lexidian_provider_openai::{OpenAi, StreamDecoder};

    #[cfg(feature = "settings-fs")]
    pub use lexidian_settings_fs::FsSettingsStore;
}
