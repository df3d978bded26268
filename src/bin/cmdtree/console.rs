//! The console as a command sender.

use std::collections::HashSet;

use cmdtree::{Component, FormatProvider, PermissionHolder};

/// Sender backed by an explicit grant set, or by operator mode where every
/// permission is held (a server console treats undefined permissions as
/// granted).
///
/// Grants may end in `.*` to cover a whole permission subtree; `*` alone
/// covers everything.
pub struct ConsoleSender {
    grants: HashSet<String>,
    operator: bool,
    format: Box<dyn FormatProvider>,
}

impl ConsoleSender {
    pub fn new(
        grants: impl IntoIterator<Item = String>,
        operator: bool,
        format: Box<dyn FormatProvider>,
    ) -> Self {
        Self {
            grants: grants.into_iter().collect(),
            operator,
            format,
        }
    }

    pub fn send_message(&self, message: &Component) {
        if message.is_empty() {
            return;
        }
        println!("{}", self.format.format(message));
    }
}

impl PermissionHolder for ConsoleSender {
    fn has_permission(&self, permission: &str) -> bool {
        if self.operator || self.grants.contains(permission) {
            return true;
        }
        self.grants.iter().any(|grant| covers(grant, permission))
    }
}

fn covers(grant: &str, permission: &str) -> bool {
    if grant == "*" {
        return true;
    }
    match grant.strip_suffix(".*") {
        Some(prefix) => permission
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('.')),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdtree::PlainFormat;

    fn sender(grants: &[&str], operator: bool) -> ConsoleSender {
        ConsoleSender::new(
            grants.iter().map(|g| g.to_string()),
            operator,
            Box::new(PlainFormat),
        )
    }

    #[test]
    fn test_operator_holds_everything() {
        assert!(sender(&[], true).has_permission("anything.at.all"));
    }

    #[test]
    fn test_exact_grant() {
        let s = sender(&["cfg.set"], false);
        assert!(s.has_permission("cfg.set"));
        assert!(!s.has_permission("cfg.reset"));
    }

    #[test]
    fn test_wildcard_grant_covers_subtree_only() {
        let s = sender(&["cfg.*"], false);
        assert!(s.has_permission("cfg.set"));
        assert!(s.has_permission("cfg.reset.force"));
        assert!(!s.has_permission("cfg"));
        assert!(!s.has_permission("cfgx.set"));
        assert!(sender(&["*"], false).has_permission("cfg"));
    }
}
