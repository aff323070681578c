//! Resolution status of a cached query.

/// Lifecycle of one cache entry.
///
/// A key starts `Unresolved`, moves to `Resolving` when the first caller
/// triggers the fetch, and settles at `Resolved` or `Failed`. Only an
/// explicit invalidation/refetch moves a settled key again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionStatus {
    /// No fetch has been triggered for this key.
    #[default]
    Unresolved,
    /// A fetch is in flight; concurrent callers share it.
    Resolving,
    /// The value is cached; lookups are synchronous hits.
    Resolved,
    /// The fetch failed; the error is stored until a refetch.
    Failed,
}

impl ResolutionStatus {
    /// True while the initial fetch has not settled.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, ResolutionStatus::Unresolved | ResolutionStatus::Resolving)
    }
}
