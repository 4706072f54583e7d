//! Debounced query session over an external search backend.
//!
//! Keystrokes go in, ranked suggestion lists come out. Every keystroke
//! cancels the pending trigger and restarts the debounce; each issued search
//! carries a monotonically increasing sequence number and its response is
//! discarded unless it is the latest issued, so a slow early response can
//! never overwrite a fresher one. State is replaced wholesale, never
//! mutated in place.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::interface::{
    CategoryInfo, SearchPayload, SuggestError, Suggestion, SuggestionLists, SupplierHit,
};
use crate::suggest;

/// Queries shorter than this (in chars, after trimming) never trigger a
/// search; shrinking below it clears all suggestion state synchronously.
pub const MIN_QUERY_LEN: usize = 2;

/// Default pause after the last keystroke before a search is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// The external search service, reached only through this trait. The
/// session performs no network I/O of its own.
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run a product search for `query` and return the raw payload.
    async fn search(&self, query: &str) -> Result<SearchPayload, SuggestError>;

    /// Category key to display-name mapping. Failure here is a recoverable
    /// degradation: the session falls back to raw keys.
    async fn category_names(&self) -> Result<HashMap<String, CategoryInfo>, SuggestError>;
}

#[derive(Default)]
struct SessionState {
    suggestions: SuggestionLists,
    results: Vec<SupplierHit>,
}

/// Debounced suggestion session.
///
/// Concurrency model: all matching work is synchronous and pure; the only
/// async elements are the debounce timer and the backend calls, spawned
/// fire-and-forget on the ambient tokio runtime. The suggestion state lives
/// behind a short-lived lock and is only ever replaced as a whole.
pub struct SuggestSession {
    backend: Arc<dyn SearchBackend>,
    debounce: Duration,
    state: Arc<Mutex<SessionState>>,
    issued: Arc<AtomicU64>,
    pending: Mutex<CancellationToken>,
}

impl SuggestSession {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self::with_debounce(backend, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(backend: Arc<dyn SearchBackend>, debounce: Duration) -> Self {
        Self {
            backend,
            debounce,
            state: Arc::new(Mutex::new(SessionState::default())),
            issued: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(CancellationToken::new()),
        }
    }

    /// Current suggestion lists.
    pub fn suggestions(&self) -> SuggestionLists {
        self.state.lock().suggestions.clone()
    }

    /// Current supplier result set (scoped or unscoped, whichever landed
    /// last).
    pub fn results(&self) -> Vec<SupplierHit> {
        self.state.lock().results.clone()
    }

    /// Feed one keystroke's worth of query.
    ///
    /// Below [`MIN_QUERY_LEN`] the pending trigger is cancelled and all
    /// suggestion state cleared immediately — no debounce, no backend call,
    /// returns `None`. Otherwise restarts the debounce and returns the
    /// spawned trigger task; awaiting it is only needed for quiescence
    /// (tests), production callers may drop the handle.
    ///
    /// Must be called within a tokio runtime when a search will be spawned.
    pub fn set_query(&self, query: &str) -> Option<JoinHandle<()>> {
        let token = self.restart_pending();
        let trimmed = query.trim();

        if trimmed.chars().count() < MIN_QUERY_LEN {
            *self.state.lock() = SessionState::default();
            return None;
        }

        let query = trimmed.to_string();
        let backend = Arc::clone(&self.backend);
        let state = Arc::clone(&self.state);
        let issued = Arc::clone(&self.issued);
        let debounce = self.debounce;

        Some(tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(debounce) => {}
            }

            let seq = issued.fetch_add(1, Ordering::SeqCst) + 1;
            debug!(%query, seq, "debounce elapsed, issuing search");

            let payload = match backend.search(&query).await {
                Ok(payload) => payload,
                Err(err) => {
                    warn!(%query, error = %err, "search failed, keeping previous suggestions");
                    return;
                }
            };
            let category_map = match backend.category_names().await {
                Ok(map) => map,
                Err(err) => {
                    warn!(error = %err, "category lookup failed, falling back to raw keys");
                    HashMap::new()
                }
            };

            let suggestions = suggest::aggregate(&payload, &category_map);
            let mut guard = state.lock();
            // Freshness check under the lock: only the latest issued
            // request may replace the state.
            if issued.load(Ordering::SeqCst) != seq {
                debug!(seq, "discarding stale search response");
                return;
            }
            *guard = SessionState {
                suggestions,
                results: payload.results,
            };
        }))
    }

    /// Select a suggestion: cancel any pending trigger and immediately issue
    /// a search scoped to the suggestion's term (tag name, category name, or
    /// product sku-else-name), replacing the current supplier result set.
    /// Suggestion lists are left untouched — selection does not re-rank.
    pub async fn select(&self, suggestion: &Suggestion) -> Result<(), SuggestError> {
        self.restart_pending();
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let term = suggestion.search_term();
        debug!(%term, seq, "issuing scoped search for selection");
        let payload = self.backend.search(term).await?;

        let mut guard = self.state.lock();
        if self.issued.load(Ordering::SeqCst) != seq {
            debug!(seq, "scoped search superseded by a newer request");
            return Err(SuggestError::Cancelled);
        }
        guard.results = payload.results;
        Ok(())
    }

    /// Cancel the pending trigger (if any) and install a fresh token.
    fn restart_pending(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut pending = self.pending.lock();
        pending.cancel();
        *pending = token.clone();
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::TagCount;
    use std::sync::atomic::AtomicUsize;

    /// Backend double recording every search it is asked to run.
    struct RecordingBackend {
        payload: SearchPayload,
        calls: AtomicUsize,
        queries: Mutex<Vec<String>>,
    }

    impl RecordingBackend {
        fn new(payload: SearchPayload) -> Arc<Self> {
            Arc::new(Self {
                payload,
                calls: AtomicUsize::new(0),
                queries: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl SearchBackend for RecordingBackend {
        async fn search(&self, query: &str) -> Result<SearchPayload, SuggestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.queries.lock().push(query.to_string());
            Ok(self.payload.clone())
        }

        async fn category_names(
            &self,
        ) -> Result<HashMap<String, CategoryInfo>, SuggestError> {
            Ok(HashMap::new())
        }
    }

    fn tagged_payload(tag: &str) -> SearchPayload {
        SearchPayload {
            top_tags: vec![TagCount { tag: tag.into(), count: 1 }],
            ..Default::default()
        }
    }

    #[test]
    fn test_short_query_clears_without_runtime() {
        // The short-circuit path never spawns, so no runtime is needed
        let backend = RecordingBackend::new(tagged_payload("цемент"));
        let session = SuggestSession::new(backend.clone());

        assert!(session.set_query("ц").is_none());
        assert!(session.set_query("").is_none());
        assert_eq!(backend.call_count(), 0);
        assert_eq!(session.suggestions(), SuggestionLists::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_fires_once_after_pause() {
        let backend = RecordingBackend::new(tagged_payload("цемент"));
        let session = SuggestSession::new(backend.clone());

        let handle = session.set_query("цемент").unwrap();
        handle.await.unwrap();

        assert_eq!(backend.call_count(), 1);
        assert_eq!(*backend.queries.lock(), vec!["цемент".to_string()]);
        assert_eq!(session.suggestions().tags.len(), 1);
        assert_eq!(session.suggestions().tags[0].name(), "цемент");
    }

    #[tokio::test(start_paused = true)]
    async fn test_shrinking_query_clears_synchronously() {
        let backend = RecordingBackend::new(tagged_payload("цемент"));
        let session = SuggestSession::new(backend.clone());

        session.set_query("цемент").unwrap().await.unwrap();
        assert_eq!(session.suggestions().total, 1);

        // Backspacing below the minimum clears before any await point
        assert!(session.set_query("ц").is_none());
        assert_eq!(session.suggestions(), SuggestionLists::default());
        assert!(session.results().is_empty());
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_only_query_is_short() {
        let backend = RecordingBackend::new(tagged_payload("цемент"));
        let session = SuggestSession::new(backend.clone());

        assert!(session.set_query("   ц   ").is_none());
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn test_restart_pending_cancels_previous() {
        let backend = RecordingBackend::new(SearchPayload::default());
        let session = SuggestSession::new(backend);

        let first = session.restart_pending();
        assert!(!first.is_cancelled());
        let second = session.restart_pending();
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }
}
