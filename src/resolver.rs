//! Name resolution with a fetch-on-miss cache.
//!
//! A [`NameCache`] holds the most recent full collection of one record kind.
//! [`resolve`] scans it for an exact name match, and on a miss fetches the whole
//! collection once, replaces the cache with it and scans again.
//!
//! The cache is only ever replaced by a full fetch. Creating, updating or
//! deleting records does not touch it, so it may be stale; callers that need
//! fresh data call [`NameCache::invalidate`] or refresh explicitly.

use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::Mutex;

use crate::error::{Result, TodoistError};
use crate::models::{Label, Project, Resource};

/// Records addressable by a human-readable name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Project {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Label {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Something that can fetch the full collection of `T`.
#[async_trait]
pub trait CollectionSource<T>: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<T>>;
}

/// The last full collection fetched for one record kind.
#[derive(Debug, Clone)]
pub struct NameCache<T> {
    entries: Option<Vec<T>>,
}

impl<T> Default for NameCache<T> {
    fn default() -> Self {
        Self { entries: None }
    }
}

impl<T: Named + Clone> NameCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// First cached record named exactly `name`.
    pub fn lookup(&self, name: &str) -> Option<&T> {
        self.entries
            .as_ref()
            .and_then(|entries| entries.iter().find(|entry| entry.name() == name))
    }

    /// Overwrite the cache with a freshly fetched collection.
    pub fn replace(&mut self, entries: Vec<T>) {
        self.entries = Some(entries);
    }

    pub fn invalidate(&mut self) {
        self.entries = None;
    }

    /// True once a collection has been stored, even an empty one.
    pub fn is_populated(&self) -> bool {
        self.entries.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve `name` against `cache`, fetching from `source` at most once.
///
/// The lock is held from the first scan to the second, so concurrent callers
/// never interleave fetches on the same cache.
///
/// # Errors
/// - The fetch error itself when the refresh fails; the cache is left as it was.
/// - [`TodoistError::NotFound`] when the refreshed collection has no such name.
pub async fn resolve<T, S>(cache: &Mutex<NameCache<T>>, source: &S, name: &str) -> Result<T>
where
    T: Resource + Named + Clone,
    S: CollectionSource<T> + ?Sized,
{
    let mut guard = cache.lock().await;

    if let Some(hit) = guard.lookup(name) {
        debug!("{} '{}' resolved from cache", T::KIND, name);
        return Ok(hit.clone());
    }

    debug!("{} '{}' not cached, fetching collection", T::KIND, name);
    let fetched = source.fetch_all().await?;
    info!("Refreshed {} cache with {} entries", T::KIND, fetched.len());
    guard.replace(fetched);

    guard.lookup(name).cloned().ok_or_else(|| TodoistError::NotFound {
        kind: T::KIND,
        name: name.to_string(),
    })
}
