//! Typed records mirroring the REST API's JSON schema, plus request bodies.
//!
//! Records are snapshots: once fetched they are never synchronized with the
//! remote service again.

use serde::de::DeserializeOwned;

use crate::error::ResourceKind;

pub mod color;
pub mod label;
pub mod project;
pub mod task;

pub use color::{Color, ParseColorError, ViewStyle};
pub use label::{CreateLabelArgs, Label, UpdateLabelArgs};
pub use project::{CreateProjectArgs, Project, UpdateProjectArgs};
pub use task::{
    CreateTaskArgs, Due, Duration, DurationUnit, NewTask, Priority, Task, TaskQuery, UpdateTaskArgs,
};

/// A record type that lives under one REST collection path.
pub trait Resource: DeserializeOwned + Send + 'static {
    const KIND: ResourceKind;

    fn id(&self) -> &str;
}
