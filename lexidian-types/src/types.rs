//! Request, frame and summary types.

use serde::{Deserialize, Serialize};

/// One completion invocation: where to send it, how to authenticate, and what
/// to generate.
///
/// Built fresh per invocation, usually via
/// [`Settings::completion_request`](crate::Settings::completion_request).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Full URL of the completions endpoint.
    pub endpoint: String,
    /// Static credential sent as a bearer token.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Prompt text (the current document).
    pub prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Presence penalty.
    pub presence_penalty: f32,
}

/// A single decoded unit from the streaming response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamFrame {
    /// An incremental fragment of generated text.
    TextDelta(String),
    /// The `[DONE]` sentinel. Nothing follows it.
    End,
    /// A line that is not a `data: `-prefixed, parseable delta. Holds the raw line.
    Unparseable(String),
}

/// What a delivered stream did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Text deltas forwarded to the sink.
    pub deltas: usize,
    /// Unparseable lines that were logged and skipped.
    pub malformed: usize,
    /// Whether the `[DONE]` sentinel was seen before the transport closed.
    pub done: bool,
}
