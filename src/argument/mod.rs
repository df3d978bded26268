//! Typed arguments: token parsing, validation and completion candidates.
//!
//! An [`Argument`] declares how many raw tokens it reads ([`Arity`]) and turns
//! that window into a typed value. Nodes store arguments type-erased in an
//! [`ArgumentSlot`]; leaves read values back with the typed handle through
//! [`Context::get`].

mod boolean;
mod list;
mod number;
mod selector;
mod string;

use std::sync::Arc;

pub use boolean::BooleanArgument;
pub use list::ListArgument;
pub use number::IntegerArgument;
pub use selector::{SelectorArgument, SelectorEntry};
pub use string::{GreedyStringArgument, StringArgument};

use crate::context::{BoundValue, Context};
use crate::error::ParseError;

/// How many raw tokens an argument consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Up to `n` tokens (fewer when input runs out).
    Exactly(usize),
    /// Every remaining token. Only meaningful as a node's last argument.
    Greedy,
}

/// A typed parser, validator and completion provider for raw tokens.
pub trait Argument: Send + Sync + 'static {
    type Value: Send + Sync + 'static;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn arity(&self) -> Arity {
        Arity::Exactly(1)
    }

    /// Whether a missing token resolves to "no value" instead of an error.
    fn is_optional(&self) -> bool {
        false
    }

    /// Parse the token window.
    ///
    /// An empty window means the input ran out before this argument.
    /// `Ok(None)` binds "no value".
    fn parse(&self, tokens: &[String], ctx: &Context<'_>) -> Result<Option<Self::Value>, ParseError>;

    /// Candidates for a partially typed token.
    ///
    /// Implementations return every candidate; the dispatcher applies the
    /// prefix filter.
    fn complete(&self, _partial: &str, _ctx: &Context<'_>) -> Vec<String> {
        Vec::new()
    }
}

trait ErasedArgument: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn arity(&self) -> Arity;
    fn is_optional(&self) -> bool;
    fn parse(&self, tokens: &[String], ctx: &Context<'_>) -> Result<Option<BoundValue>, ParseError>;
    fn complete(&self, partial: &str, ctx: &Context<'_>) -> Vec<String>;
}

struct Erased<A>(A);

impl<A: Argument> ErasedArgument for Erased<A> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn description(&self) -> &str {
        self.0.description()
    }

    fn arity(&self) -> Arity {
        self.0.arity()
    }

    fn is_optional(&self) -> bool {
        self.0.is_optional()
    }

    fn parse(&self, tokens: &[String], ctx: &Context<'_>) -> Result<Option<BoundValue>, ParseError> {
        let value = self.0.parse(tokens, ctx)?;
        Ok(value.map(|v| Box::new(v) as BoundValue))
    }

    fn complete(&self, partial: &str, ctx: &Context<'_>) -> Vec<String> {
        self.0.complete(partial, ctx)
    }
}

/// A type-erased argument declared on a node.
#[derive(Clone)]
pub struct ArgumentSlot {
    inner: Arc<dyn ErasedArgument>,
}

impl ArgumentSlot {
    pub fn new<A: Argument>(argument: A) -> Self {
        Self {
            inner: Arc::new(Erased(argument)),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn description(&self) -> &str {
        self.inner.description()
    }

    pub fn arity(&self) -> Arity {
        self.inner.arity()
    }

    pub fn is_optional(&self) -> bool {
        self.inner.is_optional()
    }

    /// Usage fragment: `<name>`, `[name]`, or `<name...>` for greedy arguments.
    pub fn usage(&self) -> String {
        let name = match self.arity() {
            Arity::Greedy => format!("{}...", self.name()),
            Arity::Exactly(_) => self.name().to_string(),
        };
        if self.is_optional() {
            format!("[{}]", name)
        } else {
            format!("<{}>", name)
        }
    }

    pub(crate) fn parse(
        &self,
        tokens: &[String],
        ctx: &Context<'_>,
    ) -> Result<Option<BoundValue>, ParseError> {
        self.inner.parse(tokens, ctx)
    }

    pub fn complete(&self, partial: &str, ctx: &Context<'_>) -> Vec<String> {
        self.inner.complete(partial, ctx)
    }
}

impl std::fmt::Debug for ArgumentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentSlot")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .field("optional", &self.is_optional())
            .finish()
    }
}

/// Resolve an absent window: "no value" for optional arguments, an error otherwise.
pub(crate) fn absent<T>(name: &str, optional: bool) -> Result<Option<T>, ParseError> {
    if optional {
        Ok(None)
    } else {
        Err(ParseError::missing(name))
    }
}
