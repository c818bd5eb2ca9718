//! Todoist Client - an async client for the Todoist REST API
//!
//! This library wraps the projects, tasks and labels endpoints of the Todoist
//! REST API in typed records and adds a few in-memory helpers on top: name
//! lookups backed by a per-client cache, and predicate/comparator utilities
//! for task and project collections.
//!
//! # Modules
//!
//! * [`client`] - Authenticated HTTP client and per-resource operations
//! * [`models`] - Records and request bodies mirroring the API's JSON
//! * [`collections`] - `Projects`, `Tasks` and `Labels` sequence types
//! * [`resolver`] - Name-to-record cache with fetch on miss
//! * [`filter`] / [`sort`] - Partitioning and ordering helpers
//! * [`config`] - Configuration file loading
//! * [`logger`] - Optional `fern` logging setup

/// Capability traits for the filter and sort helpers
pub mod capability;

/// HTTP client for the REST API
pub mod client;

/// Named collection types with lookup helpers
pub mod collections;

/// Configuration module for managing client settings
pub mod config;

/// Endpoint, header and validation constants
pub mod constants;

/// Error taxonomy
pub mod error;

/// Predicate partitioning
pub mod filter;

/// Logging setup
pub mod logger;

/// Typed API records
pub mod models;

/// Name resolution cache
pub mod resolver;

/// Comparator sorting
pub mod sort;

/// Date/time parsing helpers
pub mod utils;

pub use client::Client;
pub use collections::{Labels, Projects, Tasks};
pub use error::{ResourceKind, Result, TodoistError};
pub use models::{Label, Project, Task};
