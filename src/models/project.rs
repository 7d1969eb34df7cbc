use serde::{Deserialize, Serialize};

/// A top-level named container owning zero or more palettes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

/// Payload for creating or renaming a project. `name` is optional here so a
/// missing or empty body falls through required-field validation instead of
/// failing JSON extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl ProjectRequest {
    /// The project name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }
}
