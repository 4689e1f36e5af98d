//! Category model definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::account::require;
use crate::task::Task;
use crate::{Error, Result};

/// Name of the aggregate category that mirrors every task
pub const ALL_CATEGORY: &str = "All";

/// Built-in categories shipped with the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredefinedCategory {
    All,
    Work,
    Travel,
    Study,
    Music,
    Home,
    Hobby,
}

impl PredefinedCategory {
    /// Reference order used by the `standard` and `recent` sort modes
    pub const STANDARD_ORDER: [PredefinedCategory; 6] = [
        Self::Work,
        Self::Travel,
        Self::Study,
        Self::Music,
        Self::Home,
        Self::Hobby,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => ALL_CATEGORY,
            Self::Work => "Work",
            Self::Travel => "Travel",
            Self::Study => "Study",
            Self::Music => "Music",
            Self::Home => "Home",
            Self::Hobby => "Hobby",
        }
    }

    /// Look up a predefined category by its exact display name
    pub fn from_name(name: &str) -> Option<Self> {
        std::iter::once(Self::All)
            .chain(Self::STANDARD_ORDER)
            .find(|p| p.as_str() == name)
    }

    /// Position in [`Self::STANDARD_ORDER`]; `All` has none
    pub fn standard_rank(&self) -> Option<usize> {
        Self::STANDARD_ORDER.iter().position(|p| p == self)
    }

    /// Bundled icon asset
    pub fn icon_asset(&self) -> &'static str {
        match self {
            Self::All => "all.png",
            Self::Work => "work.png",
            Self::Travel => "travel.png",
            Self::Study => "study.png",
            Self::Music => "music.png",
            Self::Home => "home.png",
            Self::Hobby => "hobby.png",
        }
    }
}

impl fmt::Display for PredefinedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredefinedCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::invalid(format!("unknown category: {}", s)))
    }
}

/// Whether a category is built in or user-created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Predefined,
    #[default]
    Custom,
}

/// A task category as displayed on the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned id; absent for predefined categories
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: CategoryKind,
    #[serde(default)]
    pub icon_ref: Option<String>,
    /// Derived from the loaded task list, never stored remotely
    #[serde(default)]
    pub task_count: usize,
}

impl Category {
    /// Build one of the built-in categories
    pub fn predefined(category: PredefinedCategory) -> Self {
        Self {
            id: None,
            name: Some(category.as_str().to_string()),
            kind: CategoryKind::Predefined,
            icon_ref: Some(category.icon_asset().to_string()),
            task_count: 0,
        }
    }

    /// Build a user-created category
    pub fn custom(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            kind: CategoryKind::Custom,
            icon_ref: None,
            task_count: 0,
        }
    }

    /// The aggregate category followed by the six built-in ones
    pub fn defaults() -> Vec<Self> {
        std::iter::once(PredefinedCategory::All)
            .chain(PredefinedCategory::STANDARD_ORDER)
            .map(Self::predefined)
            .collect()
    }

    /// Set the icon reference
    pub fn with_icon(mut self, icon_ref: impl Into<String>) -> Self {
        self.icon_ref = Some(icon_ref.into());
        self
    }

    /// Display name; a missing name compares as the empty string
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn is_all(&self) -> bool {
        self.display_name() == ALL_CATEGORY
    }

    pub fn is_predefined(&self) -> bool {
        self.kind == CategoryKind::Predefined
    }

    /// Rank in the built-in reference order, if the name is listed there
    pub fn standard_rank(&self) -> Option<usize> {
        PredefinedCategory::from_name(self.display_name()).and_then(|p| p.standard_rank())
    }
}

/// Request to create a custom category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub icon_ref: Option<String>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_ref: None,
        }
    }

    pub fn with_icon(mut self, icon_ref: impl Into<String>) -> Self {
        self.icon_ref = Some(icon_ref.into());
        self
    }

    /// Reject blank names and names reserved by built-in categories
    pub fn validate(&self) -> Result<()> {
        require("category name", &self.name)?;
        if PredefinedCategory::from_name(self.name.trim()).is_some() {
            return Err(Error::invalid(format!(
                "{} is a built-in category",
                self.name.trim()
            )));
        }
        Ok(())
    }
}

/// Return `categories` with `task_count` set from the live tasks in `tasks`
pub fn count_tasks(categories: &[Category], tasks: &[Task]) -> Vec<Category> {
    categories
        .iter()
        .map(|category| {
            let mut counted = category.clone();
            counted.task_count = tasks
                .iter()
                .filter(|t| !t.is_deleted() && t.category_name == category.display_name())
                .count();
            counted
        })
        .collect()
}
