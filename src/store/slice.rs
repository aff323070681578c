//! Per-selector domain handles.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use serde::Serialize;

use super::resolver::Resolver;
use crate::domain::query::QueryKey;
use crate::domain::status::ResolutionStatus;
use crate::error::FetchError;

type FetchFn<Q, V> = Arc<dyn Fn(Q) -> BoxFuture<'static, Result<V, FetchError>> + Send + Sync>;

/// One selector's cache: a single-flight resolver plus the backend call
/// that populates it.
///
/// Handles are owned by the [`StoreHandle`](super::StoreHandle) and shared
/// by every consumer; all of a selector's callers observe the same cache
/// entries and in-flight requests.
pub struct DomainHandle<Q, V> {
    selector: &'static str,
    resolver: Resolver<V>,
    fetch: FetchFn<Q, V>,
}

impl<Q, V> DomainHandle<Q, V>
where
    Q: Serialize + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    pub(crate) fn new<F>(selector: &'static str, fetch: F) -> Self
    where
        F: Fn(Q) -> BoxFuture<'static, Result<V, FetchError>> + Send + Sync + 'static,
    {
        Self {
            selector,
            resolver: Resolver::new(),
            fetch: Arc::new(fetch),
        }
    }

    /// Resolve the query, fetching at most once per distinct argument set.
    pub async fn resolve(&self, query: &Q) -> Result<V, FetchError> {
        let key = self.key(query);
        self.resolver.resolve(&key, (self.fetch)(query.clone())).await
    }

    /// The cached value, if the query already resolved.
    #[must_use]
    pub fn cached(&self, query: &Q) -> Option<V> {
        self.resolver.cached(&self.key(query))
    }

    /// The query's resolution status.
    #[must_use]
    pub fn status(&self, query: &Q) -> ResolutionStatus {
        self.resolver.status(&self.key(query))
    }

    /// The stored error, if the query's last fetch failed.
    #[must_use]
    pub fn error(&self, query: &Q) -> Option<FetchError> {
        self.resolver.error(&self.key(query))
    }

    /// Drop the cached value so the next resolve refetches.
    pub fn invalidate(&self, query: &Q) {
        self.resolver.invalidate(&self.key(query));
    }

    /// Invalidate and resolve again: the explicit refresh path.
    pub async fn refetch(&self, query: &Q) -> Result<V, FetchError> {
        self.invalidate(query);
        self.resolve(query).await
    }

    fn key(&self, query: &Q) -> QueryKey {
        QueryKey::new(self.selector, query)
    }
}
