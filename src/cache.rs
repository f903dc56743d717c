//! Invalidation seam between the post write path and the external page cache.

use std::sync::Arc;

/// Sink for the "posts changed" signal fired after every successful post
/// create or update. The external whole-page cache subscribes through this
/// trait; the engine owns nothing else of the caching contract.
///
/// Implementations must not block or fail: the signal is fire-and-forget and
/// the write that triggered it has already committed.
pub trait CacheInvalidator: Send + Sync {
    fn posts_changed(&self);
}

/// Default sink used when no external cache is wired in.
pub struct LogOnlyInvalidator;

impl CacheInvalidator for LogOnlyInvalidator {
    fn posts_changed(&self) {
        tracing::debug!("posts changed, no page cache attached");
    }
}

pub fn log_only() -> Arc<dyn CacheInvalidator> {
    Arc::new(LogOnlyInvalidator)
}
