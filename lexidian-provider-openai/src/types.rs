//! OpenAI `/v1/completions` wire types.
//!
//! Only the fields this provider sends or reads are modelled. Unknown
//! response fields (`id`, `model`, `finish_reason`, ...) are ignored.

use lexidian_types::{CompletionError, CompletionRequest};
use serde::{Deserialize, Serialize};

/// Request body for a streaming completion.
#[derive(Debug, Serialize)]
pub(crate) struct CompletionBody<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub presence_penalty: f32,
    /// Always `true`; this provider only streams.
    pub stream: bool,
}

impl<'a> TryFrom<&'a CompletionRequest> for CompletionBody<'a> {
    type Error = CompletionError;

    fn try_from(request: &'a CompletionRequest) -> Result<Self, Self::Error> {
        // serde_json writes non-finite floats as `null`, which the API rejects
        // with an unhelpful message.
        if !request.temperature.is_finite() {
            return Err(CompletionError::InvalidRequest(format!(
                "temperature must be finite, got {}",
                request.temperature
            )));
        }
        if !request.presence_penalty.is_finite() {
            return Err(CompletionError::InvalidRequest(format!(
                "presence_penalty must be finite, got {}",
                request.presence_penalty
            )));
        }
        Ok(Self {
            model: &request.model,
            prompt: &request.prompt,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            presence_penalty: request.presence_penalty,
            stream: true,
        })
    }
}

/// One `data: {...}` payload of the completion stream.
#[derive(Debug, Deserialize)]
pub(crate) struct CompletionChunk {
    pub choices: Vec<ChunkChoice>,
}

/// A choice within a stream chunk.
#[derive(Debug, Deserialize)]
pub(crate) struct ChunkChoice {
    pub text: String,
}
