//! Comparator-driven ordering of task and project collections.

use chrono::{DateTime, FixedOffset};
use std::cmp::Ordering;

use crate::capability::{Filterable, Ordered, Prioritized, Scheduled};

/// Sort `items` in place with a three-way comparator.
///
/// The sort is stable. The comparator must be a consistent total preorder;
/// nothing checks that.
pub fn sort_by<T, F>(items: &mut [T], compare: F)
where
    T: Filterable,
    F: FnMut(&T, &T) -> Ordering,
{
    items.sort_by(compare);
}

/// The timestamp `by_due_datetime` compares on.
///
/// `None` when the item has no due descriptor, no date/time, or one that is
/// not valid RFC3339.
pub fn due_instant<T: Scheduled>(item: &T) -> Option<DateTime<FixedOffset>> {
    item.due().and_then(|due| due.parsed_datetime())
}

/// Ascending by due date/time.
///
/// Items without a parseable timestamp compare as the earliest possible value,
/// so they come before every item with one and tie among themselves.
pub fn by_due_datetime<T: Scheduled>(a: &T, b: &T) -> Ordering {
    // Option orders None before Some
    due_instant(a).cmp(&due_instant(b))
}

/// Descending by priority: 4 first, 1 last.
pub fn by_priority<T: Prioritized>(a: &T, b: &T) -> Ordering {
    b.priority().cmp(&a.priority())
}

/// Ascending by position index.
pub fn by_order<T: Ordered>(a: &T, b: &T) -> Ordering {
    a.order().cmp(&b.order())
}
