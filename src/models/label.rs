use serde::{Deserialize, Serialize};

use super::color::Color;
use super::Resource;
use crate::error::ResourceKind;

/// A personal label. Labels are flat; there is no hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    pub color: Color,
    pub order: i64,
    pub is_favorite: bool,
}

impl Resource for Label {
    const KIND: ResourceKind = ResourceKind::Label;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /labels`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateLabelArgs {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl CreateLabelArgs {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Body of `POST /labels/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateLabelArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}
