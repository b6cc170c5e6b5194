//! The autocomplete command: document text in, completion streamed to the cursor.

use lexidian_types::{
    CompletionError, Editor, EditorSink, Provider, Settings, SettingsError, SettingsStore,
    StreamSummary,
};

/// The command a host binds to "autocomplete text".
///
/// Settings are fixed at construction. To pick up edited settings, build a
/// new `Autocomplete` (cheap) or call [`Autocomplete::load`] again.
pub struct Autocomplete<P> {
    provider: P,
    settings: Settings,
}

impl<P: Provider> Autocomplete<P> {
    /// Create the command from explicit settings.
    pub fn new(provider: P, settings: Settings) -> Self {
        Self { provider, settings }
    }

    /// Load settings (merged over the defaults) from `store`, then create the command.
    pub async fn load(provider: P, store: &dyn SettingsStore) -> Result<Self, SettingsError> {
        let settings = store.load().await?;
        if !settings.has_api_key() {
            tracing::warn!("no API key configured; requests will be rejected");
        }
        Ok(Self::new(provider, settings))
    }

    /// The settings every run uses.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Send the editor's document as the prompt and insert the completion at
    /// the cursor as it streams in.
    ///
    /// On failure the editor is shown a notice and the error is returned.
    /// Deltas that arrived before a mid-stream failure stay inserted.
    pub async fn run<E>(&self, editor: &mut E) -> Result<StreamSummary, CompletionError>
    where
        E: Editor + Send + ?Sized,
    {
        let request = self.settings.completion_request(editor.document_text());

        let result = {
            let mut sink = EditorSink(&mut *editor);
            self.provider.complete_into(request, &mut sink).await
        };

        if let Err(err) = &result {
            tracing::error!(error = %err, "autocomplete failed");
            editor.notice(&notice_for(err));
        }
        result
    }
}

/// User-facing text for a failed run.
fn notice_for(err: &CompletionError) -> String {
    match err {
        CompletionError::Status { status: 401, .. } => {
            "Lexidian: the API key was rejected. Check it in the plugin settings.".into()
        }
        CompletionError::Status { status: 429, .. } => {
            "Lexidian: rate limited by the completion API. Try again later.".into()
        }
        CompletionError::Status { status, .. } => {
            format!("Lexidian: the completion API answered HTTP {status}.")
        }
        CompletionError::Transport(_) => {
            "Lexidian: could not reach the completion API.".into()
        }
        CompletionError::InvalidRequest(msg) => format!("Lexidian: invalid request: {msg}"),
    }
}
