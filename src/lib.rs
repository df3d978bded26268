//! Permission-aware command trees for game-server plugins.
//!
//! A command is a tree of [`Node`]s. Each node declares the arguments it
//! consumes; a [`Subcommand`] branches to one of its named children, a leaf
//! executes and returns a [`Component`]. The [`Dispatcher`] walks the tree
//! for one token sequence:
//!
//! ```text
//! tokens → Context → parse arguments → check permission → next node | execute
//! ```
//!
//! The same walk with an incomplete final token produces tab-completion
//! candidates instead of executing anything.

pub mod argument;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod node;
pub mod registry;
pub mod sender;
pub mod text;

#[cfg(test)]
mod testing;

pub use argument::{
    Argument, ArgumentSlot, Arity, BooleanArgument, GreedyStringArgument, IntegerArgument,
    ListArgument, SelectorArgument, StringArgument,
};
pub use config::{CompletionSettings, ConfigError, HelpSettings, Settings, MAX_CANDIDATES_LIMIT};
pub use context::Context;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, ParseError, TreeError};
pub use node::{Executor, HelpNode, Leaf, LeafBuilder, Node, Subcommand, SubcommandBuilder};
pub use registry::CommandRegistry;
pub use sender::PermissionHolder;
pub use text::{AnsiFormat, Component, FormatProvider, Line, PlainFormat, Span, Tone};
