//! Registered root commands, selected by the first token of the input.
//!
//! Provides thread-safe registration with support for adding and removing
//! commands at runtime without interrupting dispatches in flight.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::dispatcher::Dispatcher;
use crate::error::{DispatchError, TreeError};
use crate::node::{validate_name, Node};
use crate::sender::{may_use, PermissionHolder};
use crate::text::Component;

/// Root commands keyed by label (name or alias, lowercase).
///
/// Uses a read-write lock pattern: many concurrent dispatches read the
/// label table, while registration is exclusive. A dispatch clones the root
/// `Arc` and releases the lock before walking the tree.
pub struct CommandRegistry {
    dispatcher: Dispatcher,
    roots: RwLock<HashMap<String, Arc<Node>>>,
}

impl CommandRegistry {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            roots: RwLock::new(HashMap::new()),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Register `root` under its name and `aliases`.
    ///
    /// # Errors
    /// Fails without registering anything if any label is blank or taken.
    pub fn register(&self, root: Node, aliases: &[&str]) -> Result<(), TreeError> {
        let mut labels = vec![root.name().to_lowercase()];
        for alias in aliases {
            validate_name(alias)?;
            labels.push(alias.to_lowercase());
        }

        let mut roots = self.roots.write();
        for (i, label) in labels.iter().enumerate() {
            if roots.contains_key(label) || labels[..i].contains(label) {
                return Err(TreeError::DuplicateCommand {
                    label: label.clone(),
                });
            }
        }

        let root = Arc::new(root);
        for label in &labels {
            roots.insert(label.clone(), Arc::clone(&root));
        }
        tracing::info!(command = %root.name(), labels = ?labels, "Registered command");
        Ok(())
    }

    /// Remove the command `label` points at, with all of its labels.
    /// Returns false when nothing was registered under `label`.
    pub fn unregister(&self, label: &str) -> bool {
        let mut roots = self.roots.write();
        let Some(root) = roots.get(&label.to_lowercase()).cloned() else {
            return false;
        };
        roots.retain(|_, r| !Arc::ptr_eq(r, &root));
        tracing::info!(command = %root.name(), "Unregistered command");
        true
    }

    /// The root registered under `label`, ignoring case.
    pub fn get(&self, label: &str) -> Option<Arc<Node>> {
        self.roots.read().get(&label.to_lowercase()).cloned()
    }

    /// Every registered label, sorted.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.roots.read().keys().cloned().collect();
        labels.sort();
        labels
    }

    /// Dispatch a full command line: the first token picks the root.
    pub fn dispatch(
        &self,
        tokens: &[String],
        sender: &dyn PermissionHolder,
    ) -> Result<Option<Component>, DispatchError> {
        let (label, rest) = tokens.split_first().ok_or(DispatchError::EmptyInput)?;
        let root = self.get(label).ok_or_else(|| DispatchError::UnknownCommand {
            label: label.clone(),
        })?;
        self.dispatcher.dispatch(&root, rest, sender)
    }

    /// Completion for a full command line whose last token may be partial.
    ///
    /// A lone token completes command labels the sender may use.
    pub fn complete(&self, tokens: &[String], sender: &dyn PermissionHolder) -> Vec<String> {
        match tokens {
            [] => self.complete_labels("", sender),
            [partial] => self.complete_labels(partial, sender),
            [label, rest @ ..] => match self.get(label) {
                Some(root) => self.dispatcher.complete(&root, rest, sender),
                None => Vec::new(),
            },
        }
    }

    fn complete_labels(&self, partial: &str, sender: &dyn PermissionHolder) -> Vec<String> {
        let mut labels: Vec<String> = self
            .roots
            .read()
            .iter()
            .filter(|(_, root)| may_use(sender, root.permission()))
            .map(|(label, _)| label.clone())
            .collect();
        labels.sort();
        self.dispatcher.filter(labels, partial)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new(Dispatcher::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::node::Leaf;
    use crate::testing::{tokens, Anyone};

    fn ping() -> Node {
        Leaf::builder("ping")
            .executes(|_| Some(Component::text("pong")))
            .unwrap()
    }

    #[test]
    fn test_alias_resolves_same_root() {
        let registry = CommandRegistry::default();
        registry.register(ping(), &["p"]).unwrap();

        let via_name = registry.dispatch(&tokens(&["PING"]), &Anyone).unwrap();
        let via_alias = registry.dispatch(&tokens(&["p"]), &Anyone).unwrap();
        assert_eq!(via_name, via_alias);
        assert_eq!(registry.labels(), vec!["p", "ping"]);
    }

    #[test]
    fn test_duplicate_label_registers_nothing() {
        let registry = CommandRegistry::default();
        registry.register(ping(), &[]).unwrap();

        let other = Leaf::builder("pong").executes(|_| None).unwrap();
        let err = registry.register(other, &["ping"]).unwrap_err();
        assert_eq!(err, TreeError::DuplicateCommand { label: "ping".to_string() });
        assert!(registry.get("pong").is_none());
    }

    #[test]
    fn test_unregister_drops_aliases() {
        let registry = CommandRegistry::default();
        registry.register(ping(), &["p", "pi"]).unwrap();

        assert!(registry.unregister("pi"));
        assert!(registry.labels().is_empty());
        assert!(!registry.unregister("ping"));
    }

    #[test]
    fn test_label_completion_follows_completion_settings() {
        let mut settings = Settings::default();
        settings.completion.case_insensitive = false;
        settings.completion.max_candidates = 1;
        let registry = CommandRegistry::new(Dispatcher::new(settings));
        registry.register(ping(), &["pi", "p"]).unwrap();

        assert!(registry.complete(&tokens(&["PI"]), &Anyone).is_empty());
        assert_eq!(registry.complete(&tokens(&["pi"]), &Anyone), vec!["pi"]);
        assert_eq!(registry.complete(&tokens(&[""]), &Anyone), vec!["p"]);
    }

    #[test]
    fn test_empty_and_unknown_input() {
        let registry = CommandRegistry::default();
        assert_eq!(registry.dispatch(&[], &Anyone), Err(DispatchError::EmptyInput));
        assert_eq!(
            registry.dispatch(&tokens(&["nope"]), &Anyone),
            Err(DispatchError::UnknownCommand { label: "nope".to_string() })
        );
    }
}
