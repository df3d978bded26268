//! Tree traversal for execution and tab completion.
//!
//! ```text
//! for node on path:
//!     parse node arguments (left to right, first error aborts)
//!     check node permission
//!     next(node) → continue | none → execute
//! ```
//!
//! The walk is sequential and never backtracks: a parse failure is final,
//! no sibling branch is retried.

use crate::argument::Arity;
use crate::config::Settings;
use crate::context::Context;
use crate::error::DispatchError;
use crate::node::Node;
use crate::sender::{may_use, PermissionHolder};
use crate::text::Component;

/// Walks command trees. Holds settings only; trees and senders are passed
/// per call, so one dispatcher serves any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    settings: Settings,
}

impl Dispatcher {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run `tokens` (the input after the command label) against `root`.
    ///
    /// Returns the executed node's output; `Ok(None)` is silent success.
    pub fn dispatch(
        &self,
        root: &Node,
        tokens: &[String],
        sender: &dyn PermissionHolder,
    ) -> Result<Option<Component>, DispatchError> {
        let mut ctx = Context::new(tokens, sender, &self.settings);
        let result = self.walk(root, &mut ctx);
        if let Err(err) = &result {
            tracing::debug!(
                root = %root.name(),
                error_type = err.error_type(),
                error = %err,
                "Dispatch failed"
            );
        }
        result
    }

    fn walk(&self, root: &Node, ctx: &mut Context<'_>) -> Result<Option<Component>, DispatchError> {
        let mut current = root;
        loop {
            ctx.enter(current.name());

            for argument in current.arguments() {
                let window = ctx.take(argument.arity());
                let value = argument.parse(window, ctx)?;
                ctx.bind(argument.name(), value);
            }

            if !may_use(ctx.sender(), current.permission()) {
                return Err(DispatchError::PermissionDenied {
                    node: current.name().to_string(),
                });
            }

            tracing::debug!(
                node = %current.name(),
                consumed = ctx.consumed(),
                remaining = ctx.remaining().len(),
                "Resolved node"
            );

            match current.next(ctx)? {
                Some(next) => current = next,
                None => return Ok(current.execute(ctx)),
            }
        }
    }

    /// Completion candidates for the last token of `tokens`, which may be
    /// partial (an empty last token completes from scratch).
    ///
    /// Every candidate starts with the partial token and names something the
    /// sender may use. Nothing is cached; each call walks the tree again.
    pub fn complete(
        &self,
        root: &Node,
        tokens: &[String],
        sender: &dyn PermissionHolder,
    ) -> Vec<String> {
        let padded;
        let tokens = if tokens.is_empty() {
            padded = [String::new()];
            &padded[..]
        } else {
            tokens
        };
        let last = tokens.len() - 1;
        let partial = tokens[last].as_str();

        let mut ctx = Context::new(tokens, sender, &self.settings);
        let mut current = root;
        loop {
            ctx.enter(current.name());
            if !may_use(sender, current.permission()) {
                return Vec::new();
            }

            for argument in current.arguments() {
                let covers_partial = match argument.arity() {
                    Arity::Greedy => true,
                    Arity::Exactly(n) => ctx.consumed() + n > last,
                };
                if covers_partial {
                    let candidates = self.filter(argument.complete(partial, &ctx), partial);
                    tracing::trace!(
                        node = %current.name(),
                        argument = %argument.name(),
                        partial = %partial,
                        candidates = candidates.len(),
                        "Completed argument"
                    );
                    return candidates;
                }

                let window = ctx.take(argument.arity());
                match argument.parse(window, &ctx) {
                    Ok(value) => ctx.bind(argument.name(), value),
                    Err(_) => return Vec::new(),
                }
            }

            match current.next(&ctx) {
                Ok(Some(next)) => current = next,
                Ok(None) | Err(_) => return Vec::new(),
            }
        }
    }

    /// Keep candidates starting with `partial`, up to the configured cap.
    pub(crate) fn filter(&self, candidates: Vec<String>, partial: &str) -> Vec<String> {
        let settings = &self.settings.completion;
        let limit = match settings.max_candidates {
            0 => usize::MAX,
            n => n,
        };
        candidates
            .into_iter()
            .filter(|c| starts_with(c, partial, settings.case_insensitive))
            .take(limit)
            .collect()
    }
}

fn starts_with(candidate: &str, prefix: &str, case_insensitive: bool) -> bool {
    if !case_insensitive {
        return candidate.starts_with(prefix);
    }
    let mut chars = candidate.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| chars.next() == Some(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match_modes() {
        assert!(starts_with("Survival", "sur", true));
        assert!(!starts_with("Survival", "sur", false));
        assert!(starts_with("anything", "", false));
        assert!(!starts_with("ab", "abc", true));
    }

    #[test]
    fn test_filter_respects_limit() {
        let mut settings = Settings::default();
        settings.completion.max_candidates = 2;
        let dispatcher = Dispatcher::new(settings);
        let candidates = vec!["aa".to_string(), "ab".to_string(), "ac".to_string(), "b".to_string()];
        assert_eq!(dispatcher.filter(candidates, "a"), vec!["aa", "ab"]);
    }
}
