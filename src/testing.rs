//! Shared fixtures for unit tests.

use crate::config::Settings;
use crate::context::Context;
use crate::sender::PermissionHolder;

/// Holds every permission.
pub(crate) struct Anyone;

impl PermissionHolder for Anyone {
    fn has_permission(&self, _permission: &str) -> bool {
        true
    }
}

/// Holds no permission.
pub(crate) struct Nobody;

impl PermissionHolder for Nobody {
    fn has_permission(&self, _permission: &str) -> bool {
        false
    }
}

pub(crate) fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// Run `f` against an empty context whose sender holds every permission.
pub(crate) fn with_ctx<R>(f: impl FnOnce(&Context<'_>) -> R) -> R {
    let settings = Settings::default();
    let ctx = Context::new(&[], &Anyone, &settings);
    f(&ctx)
}
