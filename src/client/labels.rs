use log::info;

use super::{Action, Client};
use crate::collections::Labels;
use crate::error::{ResourceKind, Result};
use crate::models::{CreateLabelArgs, Label, UpdateLabelArgs};
use crate::resolver;

impl Client {
    /// Retrieves all personal labels and replaces the label name cache with them.
    pub async fn get_labels(&self) -> Result<Labels> {
        let labels: Vec<Label> = self.fetch_collection().await?;
        info!("Fetched {} labels from API", labels.len());

        self.labels.lock().await.replace(labels.clone());
        Ok(Labels::from(labels))
    }

    pub async fn get_label(&self, id: &str) -> Result<Label> {
        self.fetch_one(id).await
    }

    pub async fn create_label(&self, args: &CreateLabelArgs) -> Result<Label> {
        self.create_one(args).await
    }

    pub async fn update_label(&self, id: &str, args: &UpdateLabelArgs) -> Result<Label> {
        self.update_one(id, args).await
    }

    pub async fn delete_label(&self, id: &str) -> Result<()> {
        self.mutate_one(ResourceKind::Label, id, Action::Delete).await
    }

    /// Resolves a label by exact name, fetching all labels on a cache miss.
    pub async fn find_label(&self, name: &str) -> Result<Label> {
        resolver::resolve(&self.labels, self, name).await
    }

    /// Forces a fresh fetch of the label name cache.
    pub async fn refresh_labels(&self) -> Result<()> {
        self.get_labels().await.map(|_| ())
    }
}
