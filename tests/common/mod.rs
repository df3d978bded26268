//! Shared test senders and sample trees.

#![allow(dead_code, unused_imports)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cmdtree::{
    Argument, Component, Context, Leaf, Node, ParseError, PermissionHolder, StringArgument,
    Subcommand,
};

/// Sender holding an explicit set of permissions.
#[derive(Debug, Clone, Default)]
pub struct TestSender {
    grants: HashSet<String>,
}

impl TestSender {
    pub fn with(grants: &[&str]) -> Self {
        Self {
            grants: grants.iter().map(|g| g.to_string()).collect(),
        }
    }

    pub fn nobody() -> Self {
        Self::default()
    }
}

impl PermissionHolder for TestSender {
    fn has_permission(&self, permission: &str) -> bool {
        self.grants.contains(permission)
    }
}

pub fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// `cfg` with `get` (open) and `set` (needs `cfg.set`), plus help.
pub fn cfg_tree() -> Node {
    let get = Leaf::builder("get")
        .description("Read a value")
        .executes(|_| Some(Component::text("got")))
        .unwrap();
    let set = Leaf::builder("set")
        .permission("cfg.set")
        .description("Write a value")
        .executes(|_| Some(Component::text("set")))
        .unwrap();
    Subcommand::builder("cfg")
        .with_help()
        .child(get)
        .child(set)
        .build()
        .unwrap()
}

/// Counts how often it was asked to parse. Accepts any single token.
#[derive(Debug, Clone)]
pub struct CountingArgument {
    name: String,
    parses: Arc<AtomicUsize>,
}

impl CountingArgument {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parses: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn parses(&self) -> usize {
        self.parses.load(Ordering::SeqCst)
    }
}

impl Argument for CountingArgument {
    type Value = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Counts parse calls"
    }

    fn parse(&self, tokens: &[String], _ctx: &Context<'_>) -> Result<Option<String>, ParseError> {
        self.parses.fetch_add(1, Ordering::SeqCst);
        tokens
            .first()
            .cloned()
            .map(Some)
            .ok_or_else(|| ParseError::missing(&self.name))
    }
}

/// Leaf that counts executions.
pub fn counting_leaf(name: &str, runs: &Arc<AtomicUsize>) -> Node {
    let runs = Arc::clone(runs);
    Leaf::builder(name)
        .executes(move |_| {
            runs.fetch_add(1, Ordering::SeqCst);
            None
        })
        .unwrap()
}
