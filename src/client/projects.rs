use log::info;

use super::{Action, Client};
use crate::collections::Projects;
use crate::error::{ResourceKind, Result};
use crate::models::{CreateProjectArgs, Project, UpdateProjectArgs};
use crate::resolver;

impl Client {
    /// Retrieves all projects and replaces the project name cache with them.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be decoded
    pub async fn get_projects(&self) -> Result<Projects> {
        let projects: Vec<Project> = self.fetch_collection().await?;
        info!("Fetched {} projects from API", projects.len());

        self.projects.lock().await.replace(projects.clone());
        Ok(Projects::from(projects))
    }

    /// Retrieves one project by id.
    pub async fn get_project(&self, id: &str) -> Result<Project> {
        self.fetch_one(id).await
    }

    /// Creates a project. The name cache is not updated.
    pub async fn create_project(&self, args: &CreateProjectArgs) -> Result<Project> {
        let project: Project = self.create_one(args).await?;
        info!("Created project '{}' ({})", project.name, project.id);
        Ok(project)
    }

    /// Updates the given fields of a project.
    pub async fn update_project(&self, id: &str, args: &UpdateProjectArgs) -> Result<Project> {
        self.update_one(id, args).await
    }

    /// Deletes a project together with its tasks and sub-projects.
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        self.mutate_one(ResourceKind::Project, id, Action::Delete).await
    }

    /// Resolves a project by exact name, fetching all projects on a cache miss.
    ///
    /// # Errors
    /// - [`crate::error::TodoistError::NotFound`] if no project has that name after a refresh
    /// - The request error if the refresh itself fails
    pub async fn find_project(&self, name: &str) -> Result<Project> {
        resolver::resolve(&self.projects, self, name).await
    }

    /// Forces a fresh fetch of the project name cache.
    pub async fn refresh_projects(&self) -> Result<()> {
        self.get_projects().await.map(|_| ())
    }
}
