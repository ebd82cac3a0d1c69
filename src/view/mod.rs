/// View state slots with last-writer-wins guarding
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

/// Lifecycle of one fetch as a view sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
    NotFound(String),
}

/// Proof that a fetch was started; needed to publish its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<K> {
    generation: u64,
    key: K,
}

impl<K> FetchTicket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
struct SlotInner<K, T> {
    generation: u64,
    focus: Option<K>,
    state: LoadState<T>,
}

/// Holds the state of the most recently started fetch.
///
/// Every `begin` supersedes earlier tickets. A result settled with a
/// superseded ticket is dropped, so a slow response for an old focus can
/// never overwrite the state of a newer one.
#[derive(Debug)]
pub struct FetchSlot<K, T> {
    inner: RwLock<SlotInner<K, T>>,
}

impl<K, T> Default for FetchSlot<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> FetchSlot<K, T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SlotInner {
                generation: 0,
                focus: None,
                state: LoadState::Idle,
            }),
        }
    }
}

impl<K: Clone + PartialEq + std::fmt::Debug, T: Clone> FetchSlot<K, T> {
    /// Move focus to `key` and mark the slot loading
    pub async fn begin(&self, key: K) -> FetchTicket<K> {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.focus = Some(key.clone());
        inner.state = LoadState::Loading;
        FetchTicket {
            generation: inner.generation,
            key,
        }
    }

    /// Publish a result; returns false when the ticket was superseded
    pub async fn settle(&self, ticket: &FetchTicket<K>, state: LoadState<T>) -> bool {
        let mut inner = self.inner.write().await;
        let current = inner.generation == ticket.generation
            && inner.focus.as_ref() == Some(&ticket.key);
        if !current {
            debug!(
                "Discarding stale result for {:?} (generation {} < {})",
                ticket.key(),
                ticket.generation(),
                inner.generation
            );
            return false;
        }
        inner.state = state;
        true
    }

    /// Like `begin`, but keeps serving ready data for the same key while the
    /// new fetch is in flight
    pub async fn begin_refresh(&self, key: K) -> FetchTicket<K> {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        let keeps_data = inner.focus.as_ref() == Some(&key)
            && matches!(inner.state, LoadState::Ready(_));
        if !keeps_data {
            inner.focus = Some(key.clone());
            inner.state = LoadState::Loading;
        }
        FetchTicket {
            generation: inner.generation,
            key,
        }
    }

    /// Like `settle`, but a failed refresh never replaces ready data
    pub async fn settle_refresh(&self, ticket: &FetchTicket<K>, state: LoadState<T>) -> bool {
        let mut inner = self.inner.write().await;
        if inner.generation != ticket.generation || inner.focus.as_ref() != Some(&ticket.key) {
            debug!(
                "Discarding stale refresh for {:?} (generation {} < {})",
                ticket.key(),
                ticket.generation(),
                inner.generation
            );
            return false;
        }
        if !matches!(state, LoadState::Ready(_)) && matches!(inner.state, LoadState::Ready(_)) {
            debug!(
                "Keeping previous data for {:?} after a failed refresh",
                ticket.key()
            );
            return false;
        }
        inner.state = state;
        true
    }

    pub async fn state(&self) -> LoadState<T> {
        self.inner.read().await.state.clone()
    }

    /// Focus and state read together
    pub async fn snapshot(&self) -> (Option<K>, LoadState<T>) {
        let inner = self.inner.read().await;
        (inner.focus.clone(), inner.state.clone())
    }
}
