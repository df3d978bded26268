//! The command tree.
//!
//! [`Node`] is a closed set of variants. Leaves execute, subcommands branch,
//! help nodes render a summary of their owner's children. New leaf behaviour
//! plugs in through [`Executor`] rather than new variants.

mod help;
mod subcommand;

use std::collections::HashSet;
use std::fmt;

pub use help::{HelpEntry, HelpNode};
pub use subcommand::{Subcommand, SubcommandBuilder};

use crate::argument::{Argument, ArgumentSlot};
use crate::context::Context;
use crate::error::{DispatchError, TreeError};
use crate::text::Component;

/// One unit of a command tree.
#[derive(Debug)]
pub enum Node {
    Leaf(Leaf),
    Subcommand(Subcommand),
    Help(HelpNode),
}

impl Node {
    /// Unique among the node's siblings.
    pub fn name(&self) -> &str {
        match self {
            Node::Leaf(leaf) => &leaf.name,
            Node::Subcommand(sub) => sub.name(),
            Node::Help(_) => HelpNode::NAME,
        }
    }

    /// Permission required to pass through this node. `None` means unrestricted.
    pub fn permission(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.permission.as_deref(),
            Node::Subcommand(sub) => sub.permission(),
            Node::Help(_) => None,
        }
    }

    /// Summary for help output. `None` when the author gave none.
    pub fn description(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.description.as_deref(),
            Node::Subcommand(sub) => sub.description(),
            Node::Help(_) => Some(HelpNode::DESCRIPTION),
        }
    }

    /// Arguments consumed, in order, before branching or executing.
    pub fn arguments(&self) -> &[ArgumentSlot] {
        match self {
            Node::Leaf(leaf) => &leaf.arguments,
            Node::Subcommand(sub) => sub.arguments(),
            Node::Help(_) => &[],
        }
    }

    /// The node to continue at, or `None` when this node executes.
    pub fn next(&self, ctx: &Context<'_>) -> Result<Option<&Node>, DispatchError> {
        match self {
            Node::Subcommand(sub) => sub.next(ctx),
            Node::Leaf(_) | Node::Help(_) => Ok(None),
        }
    }

    /// Run the node. `None` is silent success.
    pub fn execute(&self, ctx: &Context<'_>) -> Option<Component> {
        match self {
            Node::Leaf(leaf) => leaf.executor.execute(ctx),
            Node::Help(help) => Some(help.render(ctx)),
            Node::Subcommand(_) => None,
        }
    }

    /// `name <arg> [arg]`
    pub fn usage(&self) -> String {
        usage(self.name(), self.arguments())
    }

    pub fn as_subcommand(&self) -> Option<&Subcommand> {
        match self {
            Node::Subcommand(sub) => Some(sub),
            _ => None,
        }
    }
}

/// Leaf behaviour.
pub trait Executor: Send + Sync {
    fn execute(&self, ctx: &Context<'_>) -> Option<Component>;
}

impl<F> Executor for F
where
    F: Fn(&Context<'_>) -> Option<Component> + Send + Sync,
{
    fn execute(&self, ctx: &Context<'_>) -> Option<Component> {
        self(ctx)
    }
}

/// A node that parses its arguments and executes.
pub struct Leaf {
    name: String,
    permission: Option<String>,
    description: Option<String>,
    arguments: Vec<ArgumentSlot>,
    executor: Box<dyn Executor>,
}

impl Leaf {
    pub fn builder(name: impl Into<String>) -> LeafBuilder {
        LeafBuilder {
            name: name.into(),
            permission: None,
            description: None,
            arguments: Vec::new(),
        }
    }
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("name", &self.name)
            .field("permission", &self.permission)
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Leaf`] nodes. Finished by [`executes`](Self::executes) or
/// [`executor`](Self::executor).
pub struct LeafBuilder {
    name: String,
    permission: Option<String>,
    description: Option<String>,
    arguments: Vec<ArgumentSlot>,
}

impl LeafBuilder {
    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare the next argument. Keep a clone to read its value back.
    pub fn argument<A: Argument>(mut self, argument: A) -> Self {
        self.arguments.push(ArgumentSlot::new(argument));
        self
    }

    pub fn executes<F>(self, f: F) -> Result<Node, TreeError>
    where
        F: Fn(&Context<'_>) -> Option<Component> + Send + Sync + 'static,
    {
        self.executor(f)
    }

    pub fn executor<E: Executor + 'static>(self, executor: E) -> Result<Node, TreeError> {
        validate_name(&self.name)?;
        validate_arguments(&self.name, &self.arguments)?;
        Ok(Node::Leaf(Leaf {
            name: self.name,
            permission: self.permission,
            description: self.description,
            arguments: self.arguments,
            executor: Box::new(executor),
        }))
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), TreeError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(TreeError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn validate_arguments(node: &str, arguments: &[ArgumentSlot]) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    for argument in arguments {
        validate_name(argument.name())?;
        if !seen.insert(argument.name()) {
            return Err(TreeError::DuplicateArgumentName {
                node: node.to_string(),
                name: argument.name().to_string(),
            });
        }
    }
    Ok(())
}

fn usage(name: &str, arguments: &[ArgumentSlot]) -> String {
    let mut out = name.to_string();
    for argument in arguments {
        out.push(' ');
        out.push_str(&argument.usage());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{IntegerArgument, StringArgument};

    #[test]
    fn test_leaf_metadata() {
        let node = Leaf::builder("give")
            .permission("admin.give")
            .description("Give items")
            .argument(StringArgument::new("item", "Item id"))
            .argument(IntegerArgument::new("amount", "How many").optional())
            .executes(|_| None)
            .unwrap();

        assert_eq!(node.name(), "give");
        assert_eq!(node.permission(), Some("admin.give"));
        assert_eq!(node.description(), Some("Give items"));
        assert_eq!(node.arguments().len(), 2);
        assert_eq!(node.usage(), "give <item> [amount]");
        assert!(node.as_subcommand().is_none());
    }

    #[test]
    fn test_leaf_without_description() {
        let node = Leaf::builder("ping").executes(|_| None).unwrap();
        assert_eq!(node.description(), None);
        assert_eq!(node.permission(), None);
    }

    #[test]
    fn test_rejects_blank_names() {
        let err = Leaf::builder("").executes(|_| None).unwrap_err();
        assert_eq!(err, TreeError::InvalidName { name: String::new() });

        let err = Leaf::builder("two words").executes(|_| None).unwrap_err();
        assert!(matches!(err, TreeError::InvalidName { .. }));
    }

    #[test]
    fn test_rejects_duplicate_argument_names() {
        let err = Leaf::builder("tp")
            .argument(StringArgument::new("target", "Target"))
            .argument(StringArgument::new("target", "Target again"))
            .executes(|_| None)
            .unwrap_err();
        assert_eq!(
            err,
            TreeError::DuplicateArgumentName {
                node: "tp".to_string(),
                name: "target".to_string(),
            }
        );
    }
}
