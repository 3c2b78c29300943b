//! Data structures exchanged between the portfolio frontend and the backend API.
//!
//! The backend attaches bookkeeping fields (`id`, `created_at`, `updated_at`) to
//! several of these payloads. Fields that the frontend never displays are left
//! out and ignored on deserialization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Owner details shown in the hero, contact and footer sections.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

/// A showcased project.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image: String,
    pub github: String,
}

/// One entry of the work experience timeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub id: u32,
    pub title: String,
    pub company: String,
    /// Free-form display string, e.g. "Jun 2024 - Aug 2024".
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// The aggregate returned by `GET /api/portfolio`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

/// Body of a visitor's contact form submission.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewContactMessage {
    /// Returns true when every field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// A stored contact message, as echoed back by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub read: bool,
}

/// Response of the backend health check. The shape is owned by the backend,
/// so it is kept as raw JSON.
pub type HealthStatus = serde_json::Value;

/// The label meaning "no category filter". It is never sent to the backend.
pub const ALL_CATEGORIES: &str = "All";

/// Project category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Builds a category from a user-facing label. Both `"All"` and the empty
    /// string select every project.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        if label.is_empty() || label == ALL_CATEGORIES {
            Category::All
        } else {
            Category::Named(label)
        }
    }

    /// The value for the `category` query parameter, if any.
    pub fn filter(&self) -> Option<&str> {
        match self {
            Category::All => None,
            Category::Named(name) => Some(name.as_str()),
        }
    }

    pub fn label(&self) -> &str {
        self.filter().unwrap_or(ALL_CATEGORIES)
    }

    /// The filter tabs shown above the project grid.
    pub fn presets() -> Vec<Category> {
        vec![
            Category::All,
            Category::new("Data Analytics"),
            Category::new("Machine Learning"),
        ]
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
