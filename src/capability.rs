//! Accessor traits the filter and sort helpers are generic over.
//!
//! Only [`Task`] and [`Project`] are collection records; the set is closed, so
//! [`Filterable`] is sealed. The finer-grained traits say which fields a helper
//! needs, and the compiler rejects a comparator on a kind that lacks them.

use crate::models::{Due, Project, Task};

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::models::Task {}
    impl Sealed for crate::models::Project {}
}

/// A record kind that filter and sort helpers accept.
pub trait Filterable: sealed::Sealed {}

impl Filterable for Task {}
impl Filterable for Project {}

/// Records that may carry a due descriptor.
pub trait Scheduled: Filterable {
    fn due(&self) -> Option<&Due>;
}

/// Records with a numeric priority (higher is more urgent).
pub trait Prioritized: Filterable {
    fn priority(&self) -> i64;
}

/// Records with a position index among their siblings.
pub trait Ordered: Filterable {
    fn order(&self) -> i64;
}

impl Scheduled for Task {
    fn due(&self) -> Option<&Due> {
        self.due.as_ref()
    }
}

impl Prioritized for Task {
    fn priority(&self) -> i64 {
        self.priority
    }
}

impl Ordered for Task {
    fn order(&self) -> i64 {
        self.order
    }
}

impl Ordered for Project {
    fn order(&self) -> i64 {
        self.order
    }
}
