use crate::argument::Argument;
use crate::context::Context;
use crate::error::ParseError;
use crate::sender::may_use;

/// A child a selector can pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    pub name: String,
    pub permission: Option<String>,
}

/// The child-name argument a [`Subcommand`](crate::node::Subcommand) synthesizes.
///
/// Unlike [`ListArgument`](crate::argument::ListArgument) it binds the raw
/// token even when no child has that name, so the subcommand can report what
/// was attempted. Completion only offers children the sender may use.
#[derive(Debug, Clone)]
pub struct SelectorArgument {
    entries: Vec<SelectorEntry>,
    nullable: bool,
}

impl SelectorArgument {
    pub const NAME: &'static str = "subcommand";

    pub(crate) fn new(entries: Vec<SelectorEntry>, nullable: bool) -> Self {
        Self { entries, nullable }
    }

    pub fn entries(&self) -> &[SelectorEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }
}

impl Argument for SelectorArgument {
    type Value = String;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "The subcommand to execute"
    }

    fn is_optional(&self) -> bool {
        self.nullable
    }

    fn parse(&self, tokens: &[String], _ctx: &Context<'_>) -> Result<Option<String>, ParseError> {
        match tokens.first() {
            Some(token) => Ok(Some(token.clone())),
            None if self.nullable => Ok(None),
            None => Err(ParseError::new(
                Self::NAME,
                format!("expected one of: {}", self.names().join(", ")),
            )),
        }
    }

    fn complete(&self, _partial: &str, ctx: &Context<'_>) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| may_use(ctx.sender(), e.permission.as_deref()))
            .map(|e| e.name.clone())
            .collect()
    }
}
