//! Adapts a transport byte stream into a stream of decoded frames.

use futures::{Stream, StreamExt};
use lexidian_types::{CompletionError, StreamFrame, StreamHandle};
use reqwest::Response;

use crate::decoder::StreamDecoder;

/// Wrap an HTTP response body into a [`StreamHandle`].
pub(crate) fn stream_completion(response: Response) -> StreamHandle {
    StreamHandle::new(decode_byte_stream(response.bytes_stream()))
}

/// Decode a raw byte stream into [`StreamFrame`]s, lazily and in order.
///
/// Each call owns a fresh [`StreamDecoder`]. The transport is not polled
/// again once `End` has been produced. A read error is yielded as
/// [`CompletionError::Transport`] and ends the stream. When the transport
/// closes without the sentinel, any unterminated final line is flushed.
pub fn decode_byte_stream<S, B, E>(
    byte_stream: S,
) -> impl Stream<Item = Result<StreamFrame, CompletionError>> + Send + 'static
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    async_stream::stream! {
        let mut decoder = StreamDecoder::new();
        let mut bytes_stream = std::pin::pin!(byte_stream);

        while let Some(chunk_result) = bytes_stream.next().await {
            let chunk = match chunk_result {
                Ok(b) => b,
                Err(e) => {
                    tracing::error!(error = %e, "completion stream read failed");
                    yield Err(CompletionError::transport(e));
                    return;
                }
            };

            for frame in decoder.feed(chunk.as_ref()) {
                yield Ok(frame);
            }
            if decoder.is_finished() {
                return;
            }
        }

        tracing::debug!("completion stream closed by transport");
        for frame in decoder.finish() {
            yield Ok(frame);
        }
    }
}
