//! Named sequence types for fetched records.
//!
//! `Projects`, `Tasks` and `Labels` deserialize straight from the API's JSON
//! arrays and add lookup, filter and sort helpers on top of `Vec`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

use crate::filter;
use crate::models::{Label, Project, Resource, Task};
use crate::resolver::Named;
use crate::sort;

macro_rules! record_collection {
    ($(#[$meta:meta])* $name:ident, $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Vec<$item>);

        impl $name {
            pub fn new() -> Self {
                Self(Vec::new())
            }

            /// First record with the given id.
            pub fn find_id(&self, id: &str) -> Option<&$item> {
                self.0.iter().find(|item| item.id() == id)
            }

            pub fn into_vec(self) -> Vec<$item> {
                self.0
            }
        }

        impl Deref for $name {
            type Target = Vec<$item>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl FromIterator<$item> for $name {
            fn from_iter<I: IntoIterator<Item = $item>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl Extend<$item> for $name {
            fn extend<I: IntoIterator<Item = $item>>(&mut self, iter: I) {
                self.0.extend(iter);
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

record_collection!(
    /// All projects in fetch order.
    Projects,
    Project
);
record_collection!(
    /// Active tasks in fetch order.
    Tasks,
    Task
);
record_collection!(
    /// Personal labels in fetch order.
    Labels,
    Label
);

/// First record whose name matches exactly (case-sensitive).
fn first_named<'a, T: Named>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.name() == name)
}

impl Projects {
    /// First project named exactly `name`. Duplicate names resolve to the
    /// earliest one in fetch order.
    pub fn find_name(&self, name: &str) -> Option<&Project> {
        first_named(&self.0, name)
    }

    /// Direct children of the given project.
    pub fn children_of(&self, parent_id: &str) -> Vec<&Project> {
        self.0
            .iter()
            .filter(|p| p.parent_id.as_deref() == Some(parent_id))
            .collect()
    }

    pub fn partition<F>(self, predicate: F) -> (Projects, Projects)
    where
        F: FnMut(&Project) -> bool,
    {
        filter::partition(self, predicate)
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Project, &Project) -> Ordering,
    {
        sort::sort_by(&mut self.0, compare);
    }
}

impl Labels {
    pub fn find_name(&self, name: &str) -> Option<&Label> {
        first_named(&self.0, name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|l| l.name.as_str()).collect()
    }
}

impl Tasks {
    pub fn partition<F>(self, predicate: F) -> (Tasks, Tasks)
    where
        F: FnMut(&Task) -> bool,
    {
        filter::partition(self, predicate)
    }

    /// `(scheduled, unscheduled)` using [`filter::is_scheduled`].
    pub fn scheduled(self) -> (Tasks, Tasks) {
        self.partition(filter::is_scheduled)
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Task, &Task) -> Ordering,
    {
        sort::sort_by(&mut self.0, compare);
    }

    pub fn in_project(&self, project_id: &str) -> Vec<&Task> {
        self.0.iter().filter(|t| t.project_id == project_id).collect()
    }
}
