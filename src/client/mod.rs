//! HTTP client for the Todoist REST API.
//!
//! [`Client`] builds authenticated requests against a fixed base URL, encodes
//! JSON bodies, decodes JSON responses into typed records and maps every
//! non-2xx answer to [`TodoistError::Status`]. Nothing is retried.
//!
//! The typed operations live in one file per resource, each adding an
//! `impl Client` block:
//! - [`projects`] - project CRUD and name lookup
//! - [`tasks`] - task CRUD, close/reopen, name-based creation
//! - [`labels`] - label CRUD and name lookup

pub mod labels;
pub mod projects;
pub mod tasks;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::config::{ApiConfig, Config};
use crate::error::{ResourceKind, Result, TodoistError};
use crate::models::{Label, Project, Resource};
use crate::resolver::{CollectionSource, NameCache};

/// State-changing calls that return no body.
///
/// `Close` and `Reopen` exist only for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Close,
    Reopen,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Close => "close",
            Action::Reopen => "reopen",
            Action::Delete => "delete",
        }
    }

    /// Whether the API defines this action for `kind`.
    pub fn applies_to(&self, kind: ResourceKind) -> bool {
        matches!(self, Action::Delete) || kind == ResourceKind::Task
    }
}

/// Client for the Todoist REST API.
///
/// Safe to share between tasks (`Arc<Client>`): the two name caches sit behind
/// async mutexes and each lookup holds its lock for the whole
/// scan-fetch-rescan sequence.
///
/// # Example
/// ```rust,no_run
/// use todoist_client::client::Client;
///
/// # async fn example() -> todoist_client::error::Result<()> {
/// let client = Client::new("your-api-token")?;
///
/// let work = client.find_project("Work").await?;
/// let tasks = client
///     .get_tasks(&todoist_client::models::TaskQuery::new().with_project_id(&work.id))
///     .await?;
/// println!("{} tasks in {}", tasks.len(), work.name);
/// # Ok(())
/// # }
/// ```
pub struct Client {
    http: reqwest::Client,
    auth_header: HeaderValue,
    base_url: String,
    verbose: bool,
    projects: Mutex<NameCache<Project>>,
    labels: Mutex<NameCache<Label>>,
}

impl Client {
    /// Create a client against the public API with default settings.
    ///
    /// # Errors
    /// [`TodoistError::MissingToken`] for an empty token.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_config(api_token, &ApiConfig::default())
    }

    /// Create a client with explicit connection settings.
    pub fn with_config(api_token: impl Into<String>, config: &ApiConfig) -> Result<Self> {
        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(TodoistError::MissingToken);
        }

        let mut auth_header =
            HeaderValue::from_str(&format!("Bearer {api_token}")).map_err(|_| TodoistError::InvalidToken)?;
        auth_header.set_sensitive(true);

        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http,
            auth_header,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            verbose: config.verbose,
            projects: Mutex::new(NameCache::new()),
            labels: Mutex::new(NameCache::new()),
        })
    }

    /// Create a client from a loaded configuration, reading the token from
    /// the configured environment variable.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let token = config.api_token()?;
        Ok(Self::with_config(token, &config.api)?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Drop both name caches; the next lookup fetches again.
    pub async fn invalidate_caches(&self) {
        self.projects.lock().await.invalidate();
        self.labels.lock().await.invalidate();
    }

    /// Start a request with auth and a fresh request id.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4().to_string();
        debug!("{} {} [{}]", method, url, request_id);

        self.http
            .request(method, url)
            .header(AUTHORIZATION, self.auth_header.clone())
            .header(crate::constants::REQUEST_ID_HEADER, request_id)
    }

    /// Send the request and return the body of a 2xx response.
    async fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if self.verbose {
            info!("{} {}", status, body);
        }

        if !status.is_success() {
            debug!("Request failed with status {}", status);
            return Err(TodoistError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = self.send(request).await?;
        decode(body)
    }

    /// `GET /{kind}`
    pub async fn fetch_collection<R: Resource>(&self) -> Result<Vec<R>> {
        self.send_json(self.request(Method::GET, R::KIND.path())).await
    }

    /// `GET /{kind}` with a query string.
    pub async fn fetch_collection_with<R, Q>(&self, query: &Q) -> Result<Vec<R>>
    where
        R: Resource,
        Q: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::GET, R::KIND.path()).query(query))
            .await
    }

    /// `GET /{kind}/{id}`. A missing record is a 404 [`TodoistError::Status`].
    pub async fn fetch_one<R: Resource>(&self, id: &str) -> Result<R> {
        let path = format!("{}/{}", R::KIND.path(), id);
        self.send_json(self.request(Method::GET, &path)).await
    }

    /// `POST /{kind}` with a JSON body.
    pub async fn create_one<R, P>(&self, params: &P) -> Result<R>
    where
        R: Resource,
        P: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::POST, R::KIND.path()).json(params))
            .await
    }

    /// `POST /{kind}/{id}` with a JSON body of the fields to change.
    pub async fn update_one<R, P>(&self, id: &str, params: &P) -> Result<R>
    where
        R: Resource,
        P: Serialize + ?Sized,
    {
        let path = format!("{}/{}", R::KIND.path(), id);
        self.send_json(self.request(Method::POST, &path).json(params))
            .await
    }

    /// Close, reopen or delete a record.
    ///
    /// Closing or reopening anything but a task fails with
    /// [`TodoistError::UnsupportedAction`] before a request is sent.
    pub async fn mutate_one(&self, kind: ResourceKind, id: &str, action: Action) -> Result<()> {
        if !action.applies_to(kind) {
            return Err(TodoistError::UnsupportedAction {
                kind,
                action: action.as_str(),
            });
        }
        let request = match action {
            Action::Close => self.request(Method::POST, &format!("{}/{}/close", kind.path(), id)),
            Action::Reopen => self.request(Method::POST, &format!("{}/{}/reopen", kind.path(), id)),
            Action::Delete => self.request(Method::DELETE, &format!("{}/{}", kind.path(), id)),
        };
        self.send(request).await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(body: String) -> Result<T> {
    serde_json::from_str(&body).map_err(|source| TodoistError::Decode { source, body })
}

#[async_trait]
impl<R: Resource> CollectionSource<R> for Client {
    async fn fetch_all(&self) -> Result<Vec<R>> {
        self.fetch_collection().await
    }
}
