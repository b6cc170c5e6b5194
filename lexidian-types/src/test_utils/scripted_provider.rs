//! ScriptedProvider — replays a fixed frame script for every request.

use std::future::Future;
use std::sync::Mutex;

use crate::error::CompletionError;
use crate::provider::Provider;
use crate::stream::StreamHandle;
use crate::types::{CompletionRequest, StreamFrame};

/// Provider double that records requests and replays scripted frames.
pub struct ScriptedProvider {
    frames: Vec<StreamFrame>,
    fail_with_status: Option<(u16, String)>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    /// Replay `frames` on every call.
    pub fn new(frames: Vec<StreamFrame>) -> Self {
        Self {
            frames,
            fail_with_status: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call with a `Status` error instead of streaming.
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self {
            frames: Vec::new(),
            fail_with_status: Some((status, body.into())),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Provider for ScriptedProvider {
    fn complete_stream(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<StreamHandle, CompletionError>> + Send {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        let result = match &self.fail_with_status {
            Some((status, body)) => Err(CompletionError::Status {
                status: *status,
                body: body.clone(),
            }),
            None => {
                let frames: Vec<Result<StreamFrame, CompletionError>> =
                    self.frames.iter().cloned().map(Ok).collect();
                Ok(StreamHandle::new(futures::stream::iter(frames)))
            }
        };
        async move { result }
    }
}
