use crate::argument::{absent, Argument, Arity};
use crate::context::Context;
use crate::error::ParseError;

/// A single token taken verbatim.
#[derive(Debug, Clone)]
pub struct StringArgument {
    name: String,
    description: String,
    optional: bool,
    suggestions: Vec<String>,
}

impl StringArgument {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            optional: false,
            suggestions: Vec::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Completion candidates. Any token is still accepted.
    pub fn suggest<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }
}

impl Argument for StringArgument {
    type Value = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn parse(&self, tokens: &[String], _ctx: &Context<'_>) -> Result<Option<String>, ParseError> {
        match tokens.first() {
            Some(token) => Ok(Some(token.clone())),
            None => absent(&self.name, self.optional),
        }
    }

    fn complete(&self, _partial: &str, _ctx: &Context<'_>) -> Vec<String> {
        self.suggestions.clone()
    }
}

/// Every remaining token, joined with single spaces.
#[derive(Debug, Clone)]
pub struct GreedyStringArgument {
    name: String,
    description: String,
    optional: bool,
}

impl GreedyStringArgument {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl Argument for GreedyStringArgument {
    type Value = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn arity(&self) -> Arity {
        Arity::Greedy
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn parse(&self, tokens: &[String], _ctx: &Context<'_>) -> Result<Option<String>, ParseError> {
        if tokens.is_empty() {
            return absent(&self.name, self.optional);
        }
        Ok(Some(tokens.join(" ")))
    }
}
