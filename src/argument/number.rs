use crate::argument::{absent, Argument};
use crate::context::Context;
use crate::error::ParseError;

/// Ranges at most this wide are offered in full as completion candidates.
const ENUMERABLE_RANGE: i64 = 10;

/// A signed integer with optional inclusive bounds.
#[derive(Debug, Clone)]
pub struct IntegerArgument {
    name: String,
    description: String,
    min: Option<i64>,
    max: Option<i64>,
    optional: bool,
}

impl IntegerArgument {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            min: None,
            max: None,
            optional: false,
        }
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl Argument for IntegerArgument {
    type Value = i64;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn parse(&self, tokens: &[String], _ctx: &Context<'_>) -> Result<Option<i64>, ParseError> {
        let Some(token) = tokens.first() else {
            return absent(&self.name, self.optional);
        };

        let value: i64 = token.parse().map_err(|_| {
            ParseError::new(&self.name, format!("expected an integer, got '{}'", token))
        })?;

        if let Some(min) = self.min {
            if value < min {
                return Err(ParseError::new(&self.name, format!("must be at least {}", min)));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(ParseError::new(&self.name, format!("must be at most {}", max)));
            }
        }
        Ok(Some(value))
    }

    fn complete(&self, _partial: &str, _ctx: &Context<'_>) -> Vec<String> {
        match (self.min, self.max) {
            (Some(min), Some(max))
                if max >= min && max.checked_sub(min).is_some_and(|d| d < ENUMERABLE_RANGE) =>
            {
                (min..=max).map(|v| v.to_string()).collect()
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{tokens, with_ctx};

    #[test]
    fn test_parses_negative() {
        let arg = IntegerArgument::new("offset", "Offset");
        assert_eq!(with_ctx(|ctx| arg.parse(&tokens(&["-12"]), ctx)), Ok(Some(-12)));
    }

    #[test]
    fn test_rejects_non_numeric() {
        let arg = IntegerArgument::new("amount", "Amount");
        let err = with_ctx(|ctx| arg.parse(&tokens(&["lots"]), ctx)).unwrap_err();
        assert_eq!(err.reason, "expected an integer, got 'lots'");
    }

    #[test]
    fn test_enforces_bounds() {
        let arg = IntegerArgument::new("radius", "Radius").min(1).max(16);
        let low = with_ctx(|ctx| arg.parse(&tokens(&["0"]), ctx)).unwrap_err();
        let high = with_ctx(|ctx| arg.parse(&tokens(&["17"]), ctx)).unwrap_err();
        assert_eq!(low.reason, "must be at least 1");
        assert_eq!(high.reason, "must be at most 16");
        assert_eq!(with_ctx(|ctx| arg.parse(&tokens(&["16"]), ctx)), Ok(Some(16)));
    }

    #[test]
    fn test_small_range_is_enumerated() {
        let small = IntegerArgument::new("slot", "Slot").min(0).max(3);
        let wide = IntegerArgument::new("radius", "Radius").min(1).max(64);
        assert_eq!(with_ctx(|ctx| small.complete("", ctx)), vec!["0", "1", "2", "3"]);
        assert!(with_ctx(|ctx| wide.complete("", ctx)).is_empty());
    }

    #[test]
    fn test_extreme_bounds_offer_nothing() {
        let full = IntegerArgument::new("v", "Value").min(i64::MIN).max(i64::MAX);
        let skewed = IntegerArgument::new("v", "Value").min(-1).max(i64::MAX);
        assert!(with_ctx(|ctx| full.complete("", ctx)).is_empty());
        assert!(with_ctx(|ctx| skewed.complete("", ctx)).is_empty());

        let top = IntegerArgument::new("v", "Value").min(i64::MAX - 2).max(i64::MAX);
        assert_eq!(with_ctx(|ctx| top.complete("", ctx)).len(), 3);
    }
}
