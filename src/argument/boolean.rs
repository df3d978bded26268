use crate::argument::{absent, Argument};
use crate::context::Context;
use crate::error::ParseError;

const TRUE_WORDS: [&str; 3] = ["true", "yes", "on"];
const FALSE_WORDS: [&str; 3] = ["false", "no", "off"];

/// `true/yes/on` or `false/no/off`, ignoring case.
#[derive(Debug, Clone)]
pub struct BooleanArgument {
    name: String,
    description: String,
    optional: bool,
}

impl BooleanArgument {
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

impl Argument for BooleanArgument {
    type Value = bool;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn parse(&self, tokens: &[String], _ctx: &Context<'_>) -> Result<Option<bool>, ParseError> {
        let Some(token) = tokens.first() else {
            return absent(&self.name, self.optional);
        };

        if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(token)) {
            Ok(Some(true))
        } else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(token)) {
            Ok(Some(false))
        } else {
            Err(ParseError::new(
                &self.name,
                format!("expected true or false, got '{}'", token),
            ))
        }
    }

    fn complete(&self, _partial: &str, _ctx: &Context<'_>) -> Vec<String> {
        vec!["true".to_string(), "false".to_string()]
    }
}
