//! Provider trait for completion backends.
//!
//! [`Provider`] uses RPITIT (return-position `impl Trait` in traits) and is
//! not object-safe. Callers that need one are generic over `P: Provider`.

use std::future::Future;

use crate::error::CompletionError;
use crate::stream::{StreamHandle, TextSink};
use crate::types::{CompletionRequest, StreamSummary};

/// A backend that can stream a text completion.
pub trait Provider: Send + Sync {
    /// Send the request and open the streaming response.
    ///
    /// Fails without streaming anything if the request cannot be sent or the
    /// response has no usable body. Each call decodes with fresh state.
    fn complete_stream(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<StreamHandle, CompletionError>> + Send;

    /// Open the stream and deliver every text delta to `sink`, in order.
    ///
    /// There is no retry: a failure is returned to the caller as-is.
    fn complete_into<S>(
        &self,
        request: CompletionRequest,
        sink: &mut S,
    ) -> impl Future<Output = Result<StreamSummary, CompletionError>> + Send
    where
        S: TextSink + Send + ?Sized,
    {
        async move {
            let handle = self.complete_stream(request).await?;
            handle.deliver(sink).await
        }
    }
}

impl<P> Provider for &P
where
    P: Provider + ?Sized,
{
    fn complete_stream(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<StreamHandle, CompletionError>> + Send {
        (**self).complete_stream(request)
    }
}
