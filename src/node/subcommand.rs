use std::collections::HashMap;

use crate::argument::{ArgumentSlot, SelectorArgument, SelectorEntry};
use crate::context::Context;
use crate::error::{DispatchError, TreeError};
use crate::node::help::HelpNode;
use crate::node::{validate_name, Node};

/// A node that branches to one of its named children.
///
/// It declares exactly one argument, the selector, whose legal values are the
/// children's names. With a help child the selector is nullable: an absent
/// subcommand name routes to help, and so does an unrecognized one unless
/// `help.unknown_routes_to_help` is off.
#[derive(Debug)]
pub struct Subcommand {
    name: String,
    permission: Option<String>,
    description: Option<String>,
    children: Vec<Node>,
    index: HashMap<String, usize>,
    help: Option<usize>,
    selector: SelectorArgument,
    arguments: Vec<ArgumentSlot>,
}

impl Subcommand {
    /// Build a subcommand, failing on a blank name or a duplicate child name.
    ///
    /// With `add_help`, a help child named `"help"` is appended, so a user
    /// child with that name collides.
    pub fn new(
        name: impl Into<String>,
        permission: Option<String>,
        add_help: bool,
        children: Vec<Node>,
    ) -> Result<Self, TreeError> {
        let name = name.into();
        validate_name(&name)?;

        let mut children = children;
        let mut index = HashMap::with_capacity(children.len() + 1);
        for (i, child) in children.iter().enumerate() {
            if index.insert(child.name().to_string(), i).is_some() {
                return Err(TreeError::DuplicateChildName {
                    parent: name,
                    name: child.name().to_string(),
                });
            }
        }

        let help = if add_help {
            if index.contains_key(HelpNode::NAME) {
                return Err(TreeError::DuplicateChildName {
                    parent: name,
                    name: HelpNode::NAME.to_string(),
                });
            }
            let node = Node::Help(HelpNode::for_children(&name, &children));
            index.insert(HelpNode::NAME.to_string(), children.len());
            children.push(node);
            Some(children.len() - 1)
        } else {
            None
        };

        let selector = SelectorArgument::new(
            children
                .iter()
                .map(|child| SelectorEntry {
                    name: child.name().to_string(),
                    permission: child.permission().map(str::to_string),
                })
                .collect(),
            add_help,
        );

        Ok(Self {
            name,
            permission,
            description: None,
            children,
            index,
            help,
            arguments: vec![ArgumentSlot::new(selector.clone())],
            selector,
        })
    }

    pub fn builder(name: impl Into<String>) -> SubcommandBuilder {
        SubcommandBuilder {
            name: name.into(),
            permission: None,
            description: None,
            add_help: false,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn arguments(&self) -> &[ArgumentSlot] {
        &self.arguments
    }

    /// Children in declaration order, help last when present.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|&i| &self.children[i])
    }

    pub fn help_node(&self) -> Option<&Node> {
        self.help.map(|i| &self.children[i])
    }

    pub fn selector(&self) -> &SelectorArgument {
        &self.selector
    }

    pub fn child_names(&self) -> Vec<String> {
        self.children.iter().map(|c| c.name().to_string()).collect()
    }

    pub(crate) fn next(&self, ctx: &Context<'_>) -> Result<Option<&Node>, DispatchError> {
        let Some(attempted) = ctx.get(&self.selector) else {
            return Ok(self.help_node());
        };

        if let Some(child) = self.child(attempted) {
            return Ok(Some(child));
        }

        match self.help_node() {
            Some(help) if ctx.settings().help.unknown_routes_to_help => Ok(Some(help)),
            _ => Err(DispatchError::UnknownSubcommand {
                attempted: attempted.clone(),
                available: self.child_names(),
            }),
        }
    }
}

/// Builder for [`Subcommand`] nodes.
pub struct SubcommandBuilder {
    name: String,
    permission: Option<String>,
    description: Option<String>,
    add_help: bool,
    children: Vec<Node>,
}

impl SubcommandBuilder {
    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a `help` child and make the subcommand name optional.
    pub fn with_help(mut self) -> Self {
        self.add_help = true;
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> Result<Node, TreeError> {
        let mut sub = Subcommand::new(self.name, self.permission, self.add_help, self.children)?;
        sub.description = self.description;
        Ok(Node::Subcommand(sub))
    }
}
