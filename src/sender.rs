//! The permission-holder capability supplied by the host.

/// Anything that can invoke a command: a player, the console, an RCON client.
///
/// Checks must be side-effect free; the dispatcher calls this inline while
/// walking the tree, possibly several times per dispatch.
pub trait PermissionHolder {
    fn has_permission(&self, permission: &str) -> bool;
}

impl<T: PermissionHolder + ?Sized> PermissionHolder for &T {
    fn has_permission(&self, permission: &str) -> bool {
        (**self).has_permission(permission)
    }
}

/// Whether `holder` may use something guarded by `permission`.
/// No permission means no restriction.
pub fn may_use(holder: &dyn PermissionHolder, permission: Option<&str>) -> bool {
    permission.map_or(true, |p| holder.has_permission(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Only(&'static str);

    impl PermissionHolder for Only {
        fn has_permission(&self, permission: &str) -> bool {
            permission == self.0
        }
    }

    #[test]
    fn test_no_permission_is_unrestricted() {
        assert!(may_use(&Only("a"), None));
    }

    #[test]
    fn test_permission_is_checked() {
        let holder = Only("cfg.set");
        assert!(may_use(&holder, Some("cfg.set")));
        assert!(!may_use(&holder, Some("cfg.reset")));
    }
}
