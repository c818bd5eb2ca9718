//! Error types returned by the client.

use std::fmt;

/// Remote resource kinds exposed by the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Project,
    Task,
    Label,
}

impl ResourceKind {
    /// Collection path segment under the API base URL (e.g. `/projects`).
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Project => "/projects",
            ResourceKind::Task => "/tasks",
            ResourceKind::Label => "/labels",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Project => "project",
            ResourceKind::Task => "task",
            ResourceKind::Label => "label",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by [`crate::client::Client`] and the name resolver.
///
/// Transport-level failures (`Transport`, `Status`, `Decode`) are kept apart from
/// the domain-level [`TodoistError::NotFound`], which only means a name lookup
/// completed against fresh data and found nothing.
#[derive(Debug, thiserror::Error)]
pub enum TodoistError {
    #[error("api token is required")]
    MissingToken,

    #[error("api token is not a valid header value")]
    InvalidToken,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("todoist: response error: {status}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("cannot {action} a {kind}")]
    UnsupportedAction {
        kind: ResourceKind,
        action: &'static str,
    },

    #[error("{kind} not found: {name}")]
    NotFound { kind: ResourceKind, name: String },
}

impl TodoistError {
    /// True when the remote service answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoistError::Status { status: 404, .. })
    }

    /// HTTP status code, when the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            TodoistError::Status { status, .. } => Some(*status),
            TodoistError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body kept for diagnostics.
    pub fn body(&self) -> Option<&str> {
        match self {
            TodoistError::Status { body, .. } | TodoistError::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoistError>;
