//! Snapshot caching for snippet sources.

use std::sync::Arc;

use async_trait::async_trait;
use slugline_core::Result;
use tokio::sync::RwLock;

use crate::snippet::Snippet;
use crate::source::SnippetSource;

/// Keeps the first successful read of an inner source and serves it
/// until [`invalidate`](CachedSource::invalidate) is called.
///
/// Failed reads are not cached; the next call retries the inner source.
pub struct CachedSource<S> {
    inner: S,
    snapshot: RwLock<Option<Arc<Vec<Snippet>>>>,
}

impl<S: SnippetSource> CachedSource<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            snapshot: RwLock::new(None),
        }
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Drop the cached snapshot so the next read hits the inner source.
    pub async fn invalidate(&self) {
        *self.snapshot.write().await = None;
    }

    /// Whether a snapshot is currently held.
    pub async fn is_warm(&self) -> bool {
        self.snapshot.read().await.is_some()
    }

    /// The shared snapshot, reading through on a cold cache.
    pub async fn snapshot(&self) -> Result<Arc<Vec<Snippet>>> {
        if let Some(cached) = self.snapshot.read().await.as_ref() {
            return Ok(Arc::clone(cached));
        }

        let mut guard = self.snapshot.write().await;
        // Another task may have filled it while we waited for the lock.
        if let Some(cached) = guard.as_ref() {
            return Ok(Arc::clone(cached));
        }

        let fresh = Arc::new(self.inner.read_snippets().await?);
        log::debug!("cached snapshot of {} snippet(s)", fresh.len());
        *guard = Some(Arc::clone(&fresh));
        Ok(fresh)
    }
}

#[async_trait]
impl<S: SnippetSource> SnippetSource for CachedSource<S> {
    async fn read_snippets(&self) -> Result<Vec<Snippet>> {
        Ok(self.snapshot().await?.as_ref().clone())
    }
}
