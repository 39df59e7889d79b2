//! Provider abstraction for streamed chat completions

use crate::{Request, StreamChunk};
use anyhow::Result;
use futures_util::stream::BoxStream;

/// Chunks of a streamed completion, in upstream arrival order.
pub type Chunks = BoxStream<'static, Result<StreamChunk>>;

/// A chat completions backend.
///
/// Constructors are inherent methods on each implementation.
pub trait Model: Clone + Send + Sync + 'static {
    /// Start a streamed completion.
    ///
    /// Resolves once the upstream has accepted the request, so a refused
    /// request (bad key, exhausted quota, unreachable host) is reported
    /// before any chunk is produced.
    fn stream(&self, request: Request) -> impl Future<Output = Result<Chunks>> + Send;
}
