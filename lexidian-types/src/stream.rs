//! Streaming handle and the sink that receives text deltas.

use std::pin::Pin;

use futures::{Stream, StreamExt};

use crate::error::CompletionError;
use crate::types::{StreamFrame, StreamSummary};

/// Boxed stream of decoded frames.
pub type FrameStream = Pin<Box<dyn Stream<Item = Result<StreamFrame, CompletionError>> + Send>>;

/// Receives generated text, one delta at a time, in wire order.
///
/// Implemented for every `FnMut(&str)`, so a host can pass a closure.
/// Implementations must insert each delta where the previous one ended.
pub trait TextSink {
    /// Insert one text delta.
    fn insert(&mut self, text: &str);
}

impl<F> TextSink for F
where
    F: FnMut(&str),
{
    fn insert(&mut self, text: &str) {
        self(text);
    }
}

/// Handle to an open streaming completion.
///
/// Dropping the handle closes the underlying transport.
pub struct StreamHandle {
    /// The stream of frames. Consume with `StreamExt::next()` or [`StreamHandle::deliver`].
    pub receiver: FrameStream,
}

impl StreamHandle {
    /// Wrap a frame stream.
    pub fn new(
        stream: impl Stream<Item = Result<StreamFrame, CompletionError>> + Send + 'static,
    ) -> Self {
        Self {
            receiver: Box::pin(stream),
        }
    }

    /// Drive the stream to completion, forwarding every text delta to `sink`.
    ///
    /// Unparseable frames are logged and skipped. Reading stops at the `End`
    /// frame; a transport close without it also returns `Ok` with
    /// [`StreamSummary::done`] unset. A transport error mid-stream is returned
    /// as-is, after whatever deltas preceded it were delivered.
    pub async fn deliver<S>(mut self, sink: &mut S) -> Result<StreamSummary, CompletionError>
    where
        S: TextSink + ?Sized,
    {
        let mut summary = StreamSummary::default();

        while let Some(frame) = self.receiver.next().await {
            match frame? {
                StreamFrame::TextDelta(text) => {
                    sink.insert(&text);
                    summary.deltas += 1;
                }
                StreamFrame::Unparseable(line) => {
                    tracing::warn!(line = %line, "could not parse stream message");
                    summary.malformed += 1;
                }
                StreamFrame::End => {
                    summary.done = true;
                    break;
                }
            }
        }

        tracing::debug!(
            deltas = summary.deltas,
            malformed = summary.malformed,
            done = summary.done,
            "completion stream finished"
        );
        Ok(summary)
    }
}

impl std::fmt::Debug for StreamHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamHandle").finish_non_exhaustive()
    }
}
