//! OpenAI completions client.

use std::future::Future;

use lexidian_types::{CompletionError, CompletionRequest, Provider, StreamHandle};
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::error::{map_http_status, map_reqwest_error};
use crate::streaming::stream_completion;
use crate::types::CompletionBody;

/// Client for the OpenAI `/v1/completions` endpoint.
///
/// The endpoint, credential and generation parameters all travel on the
/// [`CompletionRequest`], so one client serves any number of requests.
///
/// # Example
///
/// ```no_run
/// use lexidian_provider_openai::OpenAi;
/// use lexidian_types::{Provider, Settings};
///
/// # async fn run() -> Result<(), lexidian_types::CompletionError> {
/// let settings = Settings {
///     api_key: "sk-...".into(),
///     ..Default::default()
/// };
/// let mut out = String::new();
/// OpenAi::new()
///     .complete_into(settings.completion_request("Once upon a time"), &mut |t: &str| {
///         out.push_str(t)
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpenAi {
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl OpenAi {
    /// Create a client with a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured HTTP client (proxies, timeouts, custom TLS).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Provider for OpenAi {
    /// POST the request with `stream: true` and wrap the response body in a
    /// fresh decoder.
    ///
    /// Fails before streaming on a send failure or a non-success status.
    fn complete_stream(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<StreamHandle, CompletionError>> + Send {
        let http_client = self.client.clone();

        async move {
            let body = CompletionBody::try_from(&request)?;

            tracing::debug!(
                url = %request.endpoint,
                model = %request.model,
                prompt_len = request.prompt.len(),
                "sending streaming completion request"
            );

            let response = http_client
                .post(&request.endpoint)
                .header(ACCEPT, "application/json")
                .header(CONTENT_TYPE, "application/json")
                .bearer_auth(&request.api_key)
                .json(&body)
                .send()
                .await
                .map_err(map_reqwest_error)?;

            let status = response.status();
            if !status.is_success() {
                let body_text = response.text().await.map_err(map_reqwest_error)?;
                tracing::warn!(status = status.as_u16(), "completion request rejected");
                return Err(map_http_status(status, &body_text));
            }

            Ok(stream_completion(response))
        }
    }
}
