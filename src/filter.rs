//! Predicate partitioning over task and project collections.

use crate::capability::{Filterable, Scheduled};

/// Split `collection` into `(matching, rest)` in a single pass.
///
/// Both outputs keep the input's relative order and every element lands in
/// exactly one of them. An empty input yields two empty outputs.
pub fn partition<C, T, F>(collection: C, mut predicate: F) -> (C, C)
where
    C: IntoIterator<Item = T> + Default + Extend<T>,
    T: Filterable,
    F: FnMut(&T) -> bool,
{
    collection.into_iter().partition(|item| predicate(item))
}

/// True iff the item has a due descriptor with a non-empty date/time.
///
/// All-day tasks (date only) are not scheduled in this sense.
pub fn is_scheduled<T: Scheduled>(item: &T) -> bool {
    item.due().is_some_and(|due| due.has_time())
}
