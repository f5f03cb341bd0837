//! Action registry.
//!
//! The host owns a single registry for the process lifetime. Actions are
//! registered once at startup and looked up by id or enumerated per
//! selection thereafter.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use skiff_core::Node;

use crate::action::FileAction;

/// Registry for file actions.
pub struct ActionRegistry {
    /// Registered actions by id.
    actions: RwLock<HashMap<String, Arc<dyn FileAction>>>,
}

impl ActionRegistry {
    /// Create a new empty action registry.
    pub fn new() -> Self {
        Self {
            actions: RwLock::new(HashMap::new()),
        }
    }

    /// Register a file action.
    ///
    /// Returns an error if an action with the same id already exists.
    pub fn register(&self, action: Arc<dyn FileAction>) -> Result<(), ActionRegistryError> {
        let mut actions = self.actions.write();
        let id = action.id().to_string();
        if actions.contains_key(&id) {
            return Err(ActionRegistryError::ActionAlreadyExists(id));
        }
        actions.insert(id.clone(), action);
        tracing::info!("Registered file action: {}", id);
        Ok(())
    }

    /// Get an action by id.
    ///
    /// Returns None if the action is not registered.
    pub fn get(&self, id: &str) -> Option<Arc<dyn FileAction>> {
        self.actions.read().get(id).cloned()
    }

    /// List all registered actions, sorted by order then id.
    pub fn list(&self) -> Vec<Arc<dyn FileAction>> {
        let actions = self.actions.read();
        let mut all: Vec<_> = actions.values().cloned().collect();
        all.sort_by(|a, b| a.order().cmp(&b.order()).then_with(|| a.id().cmp(b.id())));
        all
    }

    /// List the actions enabled for the given selection, in [`list`] order.
    ///
    /// An empty selection yields no actions.
    ///
    /// [`list`]: Self::list
    pub fn enabled_actions(&self, nodes: &[Node]) -> Vec<Arc<dyn FileAction>> {
        if nodes.is_empty() {
            return Vec::new();
        }
        self.list()
            .into_iter()
            .filter(|action| action.enabled(nodes))
            .collect()
    }

    /// List all registered action ids.
    pub fn ids(&self) -> Vec<String> {
        let actions = self.actions.read();
        actions.keys().cloned().collect()
    }

    /// Check if an action with the given id exists.
    pub fn exists(&self, id: &str) -> bool {
        self.actions.read().contains_key(id)
    }

    /// Get the count of registered actions.
    pub fn count(&self) -> usize {
        self.actions.read().len()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during action registry operations.
#[derive(Debug, thiserror::Error)]
pub enum ActionRegistryError {
    #[error("Action '{0}' already exists")]
    ActionAlreadyExists(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use skiff_core::{NodeKind, View};

    struct TestAction {
        id: &'static str,
        order: i32,
    }

    #[async_trait]
    impl FileAction for TestAction {
        fn id(&self) -> &str {
            self.id
        }

        fn display_name(&self, _nodes: &[Node], _view: &View) -> String {
            self.id.to_string()
        }

        fn icon_svg_inline(&self) -> &str {
            "<svg/>"
        }

        fn enabled(&self, nodes: &[Node]) -> bool {
            !nodes.is_empty()
        }

        fn order(&self) -> i32 {
            self.order
        }

        async fn exec(&self, _node: &Node) -> bool {
            true
        }
    }

    fn action(id: &'static str, order: i32) -> Arc<dyn FileAction> {
        Arc::new(TestAction { id, order })
    }

    #[test]
    fn test_register_and_get() {
        let registry = ActionRegistry::new();
        registry.register(action("delete", 100)).unwrap();

        assert!(registry.exists("delete"));
        assert!(!registry.exists("rename"));
        assert_eq!(registry.count(), 1);
        assert_eq!(registry.get("delete").unwrap().id(), "delete");
        assert!(registry.get("rename").is_none());
        assert_eq!(registry.ids(), vec!["delete".to_string()]);
    }

    #[test]
    fn test_register_duplicate_error() {
        let registry = ActionRegistry::new();
        registry.register(action("delete", 100)).unwrap();
        let result = registry.register(action("delete", 0));

        assert!(matches!(
            result,
            Err(ActionRegistryError::ActionAlreadyExists(_))
        ));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_list_sorted_by_order_then_id() {
        let registry = ActionRegistry::new();
        registry.register(action("delete", 100)).unwrap();
        registry.register(action("rename", 10)).unwrap();
        registry.register(action("copy", 10)).unwrap();

        let ids: Vec<_> = registry.list().iter().map(|a| a.id().to_string()).collect();
        assert_eq!(ids, vec!["copy", "rename", "delete"]);
    }

    #[test]
    fn test_enabled_actions_empty_selection() {
        let registry = ActionRegistry::new();
        registry.register(action("delete", 100)).unwrap();

        assert!(registry.enabled_actions(&[]).is_empty());
    }

    #[test]
    fn test_enabled_actions_filters() {
        let registry = ActionRegistry::new();
        registry.register(action("delete", 100)).unwrap();

        let nodes = vec![Node::new("dav://a", "a", NodeKind::File)];
        let enabled = registry.enabled_actions(&nodes);
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].id(), "delete");
    }
}
