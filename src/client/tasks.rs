use log::{debug, info};

use super::{Action, Client};
use crate::collections::Tasks;
use crate::error::{ResourceKind, Result};
use crate::models::{CreateTaskArgs, NewTask, Priority, Task, TaskQuery, UpdateTaskArgs};

impl Client {
    /// Retrieves active tasks matching `query`. An empty query returns all of them.
    pub async fn get_tasks(&self, query: &TaskQuery) -> Result<Tasks> {
        let tasks: Vec<Task> = self.fetch_collection_with(query).await?;
        info!("Fetched {} tasks from API", tasks.len());
        Ok(Tasks::from(tasks))
    }

    pub async fn get_task(&self, id: &str) -> Result<Task> {
        self.fetch_one(id).await
    }

    /// Creates a task from fully resolved arguments.
    pub async fn create_task(&self, args: &CreateTaskArgs) -> Result<Task> {
        let task: Task = self.create_one(args).await?;
        info!("Created task {} in project {}", task.id, task.project_id);
        Ok(task)
    }

    /// Creates a task addressed by project and label names.
    ///
    /// The project name goes through the project cache and every label name
    /// through the label cache, each fetching at most once on a miss. Labels
    /// are sent by name once they are known to exist. Priority is checked with
    /// [`Priority::clamp`].
    ///
    /// # Errors
    /// - [`crate::error::TodoistError::NotFound`] for an unknown project or label
    /// - Any request error from the lookups or the create call
    pub async fn add_task(&self, new_task: NewTask) -> Result<Task> {
        let project_id = match new_task.project.as_deref() {
            Some(name) if !name.is_empty() => Some(self.find_project(name).await?.id),
            _ => None,
        };

        let mut labels = Vec::with_capacity(new_task.labels.len());
        for name in &new_task.labels {
            labels.push(self.find_label(name).await?.name);
        }
        debug!("Resolved project {:?} and {} labels", project_id, labels.len());

        let args = CreateTaskArgs {
            content: new_task.content,
            project_id,
            labels: if labels.is_empty() { None } else { Some(labels) },
            priority: Some(new_task.priority.map(Priority::clamp).unwrap_or_default()),
            due_string: new_task.due_string,
            ..Default::default()
        };

        self.create_task(&args).await
    }

    pub async fn update_task(&self, id: &str, args: &UpdateTaskArgs) -> Result<Task> {
        self.update_one(id, args).await
    }

    /// Completes a task. Recurring tasks move to their next occurrence instead.
    pub async fn close_task(&self, id: &str) -> Result<()> {
        self.mutate_one(ResourceKind::Task, id, Action::Close).await
    }

    pub async fn reopen_task(&self, id: &str) -> Result<()> {
        self.mutate_one(ResourceKind::Task, id, Action::Reopen).await
    }

    pub async fn delete_task(&self, id: &str) -> Result<()> {
        self.mutate_one(ResourceKind::Task, id, Action::Delete).await
    }
}
