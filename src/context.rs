//! Per-dispatch state.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::argument::{Argument, Arity};
use crate::config::Settings;
use crate::sender::PermissionHolder;

pub(crate) type BoundValue = Box<dyn Any + Send + Sync>;

/// Mutable state for one dispatch or completion pass.
///
/// Tokens are consumed strictly left to right; a consumed token is never
/// handed to another argument. Bindings hold the resolved values of the
/// current node's arguments only and are cleared when the walk moves on.
pub struct Context<'a> {
    tokens: &'a [String],
    cursor: usize,
    bindings: HashMap<String, Option<BoundValue>>,
    sender: &'a dyn PermissionHolder,
    settings: &'a Settings,
    path: Vec<String>,
}

impl<'a> Context<'a> {
    pub fn new(
        tokens: &'a [String],
        sender: &'a dyn PermissionHolder,
        settings: &'a Settings,
    ) -> Self {
        Self {
            tokens,
            cursor: 0,
            bindings: HashMap::new(),
            sender,
            settings,
            path: Vec::new(),
        }
    }

    /// The invoking permission holder.
    pub fn sender(&self) -> &'a dyn PermissionHolder {
        self.sender
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    /// Tokens not yet consumed by any argument.
    pub fn remaining(&self) -> &'a [String] {
        &self.tokens[self.cursor..]
    }

    /// Number of tokens consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Names of the nodes visited so far, root first.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Resolved value of `argument` on the current node.
    ///
    /// `None` when the argument is not declared here or resolved to
    /// "no value" (an optional argument without a token).
    ///
    /// Values are looked up by argument name and then downcast to
    /// `A::Value`, so `argument` is a handle, not an identity: any argument
    /// of the same value type and name reads the same binding. Names are
    /// unique per node, so on the current node that is always the declared
    /// argument. A handle whose value type differs gets `None`.
    pub fn get<A: Argument>(&self, argument: &A) -> Option<&A::Value> {
        self.bindings
            .get(argument.name())
            .and_then(|value| value.as_ref())
            .and_then(|value| value.downcast_ref::<A::Value>())
    }

    /// Whether `name` was bound on the current node, even to "no value".
    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Consume the window of tokens an argument of `arity` reads.
    ///
    /// The window is shorter than the arity when input runs out; an empty
    /// window means the argument is absent.
    pub(crate) fn take(&mut self, arity: Arity) -> &'a [String] {
        let tokens = self.tokens;
        let end = match arity {
            Arity::Exactly(n) => (self.cursor + n).min(tokens.len()),
            Arity::Greedy => tokens.len(),
        };
        let window = &tokens[self.cursor..end];
        self.cursor = end;
        window
    }

    pub(crate) fn bind(&mut self, name: &str, value: Option<BoundValue>) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Start resolving a new node: forget the previous node's bindings.
    pub(crate) fn enter(&mut self, node: &str) {
        self.bindings.clear();
        self.path.push(node.to_string());
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bound: Vec<&String> = self.bindings.keys().collect();
        bound.sort();
        f.debug_struct("Context")
            .field("tokens", &self.tokens)
            .field("cursor", &self.cursor)
            .field("bound", &bound)
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{IntegerArgument, StringArgument};
    use crate::testing::{tokens, Nobody};

    #[test]
    fn test_take_advances_cursor() {
        let raw = tokens(&["a", "b", "c"]);
        let settings = Settings::default();
        let mut ctx = Context::new(&raw, &Nobody, &settings);

        assert_eq!(ctx.take(Arity::Exactly(1)), &raw[..1]);
        assert_eq!(ctx.consumed(), 1);
        assert_eq!(ctx.take(Arity::Exactly(5)), &raw[1..]);
        assert!(ctx.take(Arity::Exactly(1)).is_empty());
        assert!(ctx.remaining().is_empty());
    }

    #[test]
    fn test_greedy_takes_everything() {
        let raw = tokens(&["a", "b", "c"]);
        let settings = Settings::default();
        let mut ctx = Context::new(&raw, &Nobody, &settings);

        ctx.take(Arity::Exactly(1));
        assert_eq!(ctx.take(Arity::Greedy), &raw[1..]);
        assert_eq!(ctx.consumed(), 3);
    }

    #[test]
    fn test_enter_clears_bindings() {
        let raw = tokens(&["value"]);
        let settings = Settings::default();
        let mut ctx = Context::new(&raw, &Nobody, &settings);
        let key = StringArgument::new("key", "A key");

        ctx.enter("root");
        ctx.bind("key", Some(Box::new("value".to_string())));
        assert_eq!(ctx.get(&key).map(String::as_str), Some("value"));

        ctx.enter("child");
        assert!(ctx.get(&key).is_none());
        assert!(!ctx.is_bound("key"));
        assert_eq!(ctx.path(), ["root".to_string(), "child".to_string()]);
    }

    #[test]
    fn test_get_looks_up_by_name_and_type() {
        let raw = tokens(&[]);
        let settings = Settings::default();
        let mut ctx = Context::new(&raw, &Nobody, &settings);
        ctx.bind("key", Some(Box::new("motd".to_string())));

        let declared = StringArgument::new("key", "A key");
        let same_name = StringArgument::new("key", "Another handle").optional();
        let other_type = IntegerArgument::new("key", "Numeric key");
        assert_eq!(ctx.get(&declared).map(String::as_str), Some("motd"));
        assert_eq!(ctx.get(&same_name).map(String::as_str), Some("motd"));
        assert!(ctx.get(&other_type).is_none());
    }

    #[test]
    fn test_no_value_binding_is_bound_but_empty() {
        let raw = tokens(&[]);
        let settings = Settings::default();
        let mut ctx = Context::new(&raw, &Nobody, &settings);
        let key = StringArgument::new("key", "A key").optional();

        ctx.bind("key", None);
        assert!(ctx.is_bound("key"));
        assert!(ctx.get(&key).is_none());
    }
}
