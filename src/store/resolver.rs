//! Single-flight memoized resolution.
//!
//! Each distinct [`QueryKey`] resolves at most once: the first caller runs
//! the fetch (the leader), concurrent callers subscribe to the in-flight
//! result, and later callers get a synchronous cache hit. A stored failure
//! is likewise returned to every caller until an explicit refetch.
//!
//! Invalidation bumps a per-key generation counter; a fetch that completes
//! after its key was invalidated is delivered to the callers that awaited
//! it but never written to the cache, so stale data cannot be resurrected.

use std::collections::HashMap;
use std::future::Future;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::query::QueryKey;
use crate::domain::status::ResolutionStatus;
use crate::error::FetchError;

type Outcome<V> = Result<V, FetchError>;

enum SlotState<V> {
    Unresolved,
    Resolving(watch::Receiver<Option<Outcome<V>>>),
    Resolved(V),
    Failed(FetchError),
}

struct Slot<V> {
    /// Bumped on every invalidation; a completion with a stale generation
    /// is discarded instead of written.
    generation: u64,
    state: SlotState<V>,
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Self {
            generation: 0,
            state: SlotState::Unresolved,
        }
    }
}

/// Per-key single-flight cache for one selector's values.
pub struct Resolver<V> {
    slots: Mutex<HashMap<QueryKey, Slot<V>>>,
}

impl<V> Default for Resolver<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Resolver<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// The resolution status of a key.
    #[must_use]
    pub fn status(&self, key: &QueryKey) -> ResolutionStatus {
        match self.slots.lock().get(key).map(|s| &s.state) {
            None | Some(SlotState::Unresolved) => ResolutionStatus::Unresolved,
            Some(SlotState::Resolving(_)) => ResolutionStatus::Resolving,
            Some(SlotState::Resolved(_)) => ResolutionStatus::Resolved,
            Some(SlotState::Failed(_)) => ResolutionStatus::Failed,
        }
    }

    /// The stored error for a key, if its last resolution failed.
    #[must_use]
    pub fn error(&self, key: &QueryKey) -> Option<FetchError> {
        match self.slots.lock().get(key).map(|s| &s.state) {
            Some(SlotState::Failed(err)) => Some(err.clone()),
            _ => None,
        }
    }

    /// Drop a key's cached value so the next resolve refetches.
    ///
    /// An in-flight fetch for the key keeps serving the callers already
    /// awaiting it, but its result is discarded rather than cached.
    pub fn invalidate(&self, key: &QueryKey) {
        let mut slots = self.slots.lock();
        if let Some(slot) = slots.get_mut(key) {
            slot.generation += 1;
            slot.state = SlotState::Unresolved;
            debug!(key = %key, generation = slot.generation, "cache entry invalidated");
        }
    }
}

impl<V: Clone> Resolver<V> {
    /// The cached value for a key, if resolved.
    #[must_use]
    pub fn cached(&self, key: &QueryKey) -> Option<V> {
        match self.slots.lock().get(key).map(|s| &s.state) {
            Some(SlotState::Resolved(value)) => Some(value.clone()),
            _ => None,
        }
    }

    /// Store a server-confirmed value directly, as if it had resolved.
    ///
    /// Used after a successful save so the cache keeps meaning "last state
    /// the server confirmed". Bumps the generation so an in-flight fetch
    /// that lands afterwards cannot clobber the primed value.
    pub fn prime(&self, key: &QueryKey, value: V) {
        let mut slots = self.slots.lock();
        let slot = slots.entry(key.clone()).or_default();
        slot.generation += 1;
        slot.state = SlotState::Resolved(value);
    }

    /// Resolve a key, running `fetch` only if no resolution exists yet.
    ///
    /// Resolved and failed keys return synchronously. A `Resolving` key
    /// shares the in-flight request. Otherwise this caller becomes the
    /// leader, runs the fetch, stores the outcome, and wakes the waiters.
    pub async fn resolve<F>(&self, key: &QueryKey, fetch: F) -> Outcome<V>
    where
        F: Future<Output = Outcome<V>>,
    {
        enum Role<V> {
            Hit(Outcome<V>),
            Follower(watch::Receiver<Option<Outcome<V>>>),
            Leader {
                generation: u64,
                tx: watch::Sender<Option<Outcome<V>>>,
            },
        }

        let role = {
            let mut slots = self.slots.lock();
            let slot = slots.entry(key.clone()).or_default();
            match &slot.state {
                SlotState::Resolved(value) => Role::Hit(Ok(value.clone())),
                SlotState::Failed(err) => Role::Hit(Err(err.clone())),
                SlotState::Resolving(rx) => Role::Follower(rx.clone()),
                SlotState::Unresolved => {
                    let (tx, rx) = watch::channel(None);
                    slot.state = SlotState::Resolving(rx);
                    Role::Leader {
                        generation: slot.generation,
                        tx,
                    }
                }
            }
        };

        match role {
            Role::Hit(outcome) => outcome,
            Role::Follower(mut rx) => match rx.wait_for(|v| v.is_some()).await {
                Ok(outcome) => outcome.clone().unwrap_or(Err(FetchError::Interrupted)),
                Err(_) => Err(FetchError::Interrupted),
            },
            Role::Leader { generation, tx } => {
                debug!(key = %key, "resolving");
                let mut guard = AbandonGuard {
                    resolver: self,
                    key,
                    generation,
                    armed: true,
                };
                let outcome = fetch.await;
                guard.armed = false;

                {
                    let mut slots = self.slots.lock();
                    if let Some(slot) = slots.get_mut(key) {
                        if slot.generation == generation {
                            slot.state = match &outcome {
                                Ok(value) => SlotState::Resolved(value.clone()),
                                Err(err) => SlotState::Failed(err.clone()),
                            };
                        } else {
                            warn!(key = %key, "discarding response for invalidated key");
                        }
                    }
                }

                let _ = tx.send(Some(outcome.clone()));
                outcome
            }
        }
    }
}

/// Resets a slot to `Unresolved` if the leader's future is dropped before
/// the fetch settles, so later callers can retry instead of waiting on a
/// channel that will never fire.
struct AbandonGuard<'a, V> {
    resolver: &'a Resolver<V>,
    key: &'a QueryKey,
    generation: u64,
    armed: bool,
}

impl<V> Drop for AbandonGuard<'_, V> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut slots = self.resolver.slots.lock();
        if let Some(slot) = slots.get_mut(self.key) {
            if slot.generation == self.generation
                && matches!(slot.state, SlotState::Resolving(_))
            {
                slot.state = SlotState::Unresolved;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    fn key() -> QueryKey {
        QueryKey::bare("test_selector")
    }

    #[tokio::test]
    async fn second_resolve_is_a_cache_hit() {
        let resolver = Resolver::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let value = resolver
                .resolve(&key(), async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, FetchError>(42)
                })
                .await
                .unwrap();
            assert_eq!(value, 42);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(resolver.status(&key()), ResolutionStatus::Resolved);
        assert_eq!(resolver.cached(&key()), Some(42));
    }

    #[tokio::test]
    async fn failure_is_stored_until_invalidated() {
        let resolver: Resolver<i32> = Resolver::new();
        let err = FetchError::Status {
            status: 500,
            message: "boom".into(),
        };

        let first = resolver.resolve(&key(), async { Err(err.clone()) }).await;
        assert_eq!(first.unwrap_err(), err);
        assert_eq!(resolver.status(&key()), ResolutionStatus::Failed);
        assert_eq!(resolver.error(&key()), Some(err.clone()));

        // Bare resolve does not retry a failed key.
        let second = resolver.resolve(&key(), async { Ok(7) }).await;
        assert_eq!(second.unwrap_err(), err);

        resolver.invalidate(&key());
        let third = resolver.resolve(&key(), async { Ok(7) }).await;
        assert_eq!(third.unwrap(), 7);
    }

    #[tokio::test]
    async fn concurrent_resolves_share_one_fetch() {
        let resolver = Arc::new(Resolver::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = Arc::new(tokio::sync::Semaphore::new(0));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let resolver = Arc::clone(&resolver);
            let calls = Arc::clone(&calls);
            let gate = Arc::clone(&gate);
            handles.push(tokio::spawn(async move {
                resolver
                    .resolve(&key(), async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        let permit = gate.acquire().await.map_err(|_| FetchError::Interrupted)?;
                        permit.forget();
                        Ok::<_, FetchError>("value".to_string())
                    })
                    .await
            }));
        }

        // Let all tasks reach the resolver before releasing the fetch.
        tokio::task::yield_now().await;
        gate.add_permits(1);

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "value");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn late_response_after_invalidate_is_not_cached() {
        let resolver = Arc::new(Resolver::new());
        let gate = Arc::new(tokio::sync::Semaphore::new(0));

        let task = {
            let resolver = Arc::clone(&resolver);
            let gate = Arc::clone(&gate);
            tokio::spawn(async move {
                resolver
                    .resolve(&key(), async move {
                        let permit = gate.acquire().await.map_err(|_| FetchError::Interrupted)?;
                        permit.forget();
                        Ok::<_, FetchError>(1)
                    })
                    .await
            })
        };

        tokio::task::yield_now().await;
        resolver.invalidate(&key());
        gate.add_permits(1);

        // The awaiting caller still gets the value it asked for.
        assert_eq!(task.await.unwrap().unwrap(), 1);
        // But the cache was not repopulated with the stale response.
        assert_eq!(resolver.cached(&key()), None);
        assert_eq!(resolver.status(&key()), ResolutionStatus::Unresolved);
    }
}
