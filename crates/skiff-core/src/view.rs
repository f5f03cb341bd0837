//! View types for browsing contexts.

use serde::{Deserialize, Serialize};

/// Identifier of the trash view. Deleting from it is permanent.
pub const TRASHBIN_VIEW_ID: &str = "trashbin";

/// A browsing context in the file manager.
///
/// Actions receive the current view so they can adjust wording or
/// applicability. Views are owned by the host and read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct View {
    /// Stable view identifier, e.g. "files" or "trashbin".
    pub id: String,

    /// Human-readable view name.
    pub name: String,
}

impl View {
    /// Create a new view.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Whether this view shows the trash contents.
    pub fn is_trashbin(&self) -> bool {
        self.id == TRASHBIN_VIEW_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_trashbin() {
        assert!(View::new(TRASHBIN_VIEW_ID, "Deleted files").is_trashbin());
        assert!(!View::new("files", "All files").is_trashbin());
    }
}
