use crate::argument::Argument;
use crate::context::Context;
use crate::error::ParseError;

/// One token from a fixed option set, matched ignoring case.
///
/// A nullable list resolves an absent or unrecognized token to "no value";
/// otherwise both are parse errors listing the options.
#[derive(Debug, Clone)]
pub struct ListArgument {
    name: String,
    description: String,
    options: Vec<String>,
    nullable: bool,
}

impl ListArgument {
    pub fn new<I, S>(name: impl Into<String>, description: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            options: options.into_iter().map(Into::into).collect(),
            nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    fn expected(&self) -> String {
        format!("expected one of: {}", self.options.join(", "))
    }
}

impl Argument for ListArgument {
    type Value = String;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_optional(&self) -> bool {
        self.nullable
    }

    fn parse(&self, tokens: &[String], _ctx: &Context<'_>) -> Result<Option<String>, ParseError> {
        let Some(token) = tokens.first() else {
            return if self.nullable {
                Ok(None)
            } else {
                Err(ParseError::new(&self.name, self.expected()))
            };
        };

        let matched = self
            .options
            .iter()
            .find(|option| option.eq_ignore_ascii_case(token));

        match matched {
            Some(option) => Ok(Some(option.clone())),
            None if self.nullable => Ok(None),
            None => Err(ParseError::new(
                &self.name,
                format!("'{}' is not valid, {}", token, self.expected()),
            )),
        }
    }

    fn complete(&self, _partial: &str, _ctx: &Context<'_>) -> Vec<String> {
        self.options.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{tokens, with_ctx};

    fn gamemodes() -> ListArgument {
        ListArgument::new("mode", "Game mode", ["survival", "creative", "adventure"])
    }

    #[test]
    fn test_match_ignores_case_and_returns_canonical() {
        let value = with_ctx(|ctx| gamemodes().parse(&tokens(&["CREATIVE"]), ctx));
        assert_eq!(value, Ok(Some("creative".to_string())));
    }

    #[test]
    fn test_unknown_option_lists_choices() {
        let err = with_ctx(|ctx| gamemodes().parse(&tokens(&["spectator"]), ctx)).unwrap_err();
        assert_eq!(err.argument, "mode");
        assert_eq!(
            err.reason,
            "'spectator' is not valid, expected one of: survival, creative, adventure"
        );
    }

    #[test]
    fn test_nullable_resolves_absent_and_unknown_to_no_value() {
        let arg = gamemodes().nullable();
        assert_eq!(with_ctx(|ctx| arg.parse(&[], ctx)), Ok(None));
        assert_eq!(with_ctx(|ctx| arg.parse(&tokens(&["spectator"]), ctx)), Ok(None));
        assert!(arg.is_optional());
    }

    #[test]
    fn test_required_list_missing() {
        let err = with_ctx(|ctx| gamemodes().parse(&[], ctx)).unwrap_err();
        assert_eq!(err.reason, "expected one of: survival, creative, adventure");
    }

    #[test]
    fn test_completes_all_options() {
        let candidates = with_ctx(|ctx| gamemodes().complete("", ctx));
        assert_eq!(candidates, gamemodes().options());
    }
}
