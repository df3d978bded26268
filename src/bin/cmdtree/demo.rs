//! Sample command tree served by the console host.

use std::collections::BTreeMap;
use std::sync::Arc;

use cmdtree::{
    BooleanArgument, CommandRegistry, Component, Dispatcher, GreedyStringArgument, Leaf, Line,
    Node, Settings, StringArgument, Subcommand, TreeError,
};
use parking_lot::Mutex;

type Store = Arc<Mutex<BTreeMap<String, String>>>;

const DEFAULTS: [(&str, &str); 3] = [
    ("motd", "Welcome to the server"),
    ("pvp", "true"),
    ("difficulty", "normal"),
];

fn defaults() -> BTreeMap<String, String> {
    DEFAULTS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// `cfg` (get/set/list/reset, with help) and `echo`.
pub fn build_registry(settings: Settings) -> Result<CommandRegistry, TreeError> {
    let registry = CommandRegistry::new(Dispatcher::new(settings));
    let store: Store = Arc::new(Mutex::new(defaults()));

    registry.register(cfg_command(&store)?, &["config"])?;
    registry.register(echo_command()?, &["say"])?;
    Ok(registry)
}

fn key_argument() -> StringArgument {
    StringArgument::new("key", "Setting name").suggest(DEFAULTS.iter().map(|(k, _)| *k))
}

fn cfg_command(store: &Store) -> Result<Node, TreeError> {
    let get = {
        let store = Arc::clone(store);
        let key = key_argument();
        Leaf::builder("get")
            .description("Show one setting")
            .argument(key.clone())
            .executes(move |ctx| {
                let key = ctx.get(&key)?;
                let line = match store.lock().get(key) {
                    Some(value) => Line::new().accent(key.clone()).main(" = ").main(value.clone()),
                    None => Line::new().error(format!("No setting named '{}'", key)),
                };
                Some(Component::new().line(line))
            })?
    };

    let set = {
        let store = Arc::clone(store);
        let key = key_argument();
        let value = GreedyStringArgument::new("value", "New value");
        Leaf::builder("set")
            .permission("cfg.set")
            .description("Change one setting")
            .argument(key.clone())
            .argument(value.clone())
            .executes(move |ctx| {
                let key = ctx.get(&key)?.clone();
                let value = ctx.get(&value)?.clone();
                tracing::info!(key = %key, value = %value, "Setting changed");
                store.lock().insert(key.clone(), value.clone());
                Some(Component::new().line(Line::new().main("Set ").accent(key).main(" to ").main(value)))
            })?
    };

    let list = {
        let store = Arc::clone(store);
        Leaf::builder("list")
            .description("Show every setting")
            .executes(move |_| {
                let store = store.lock();
                let mut out = Component::new();
                for (key, value) in store.iter() {
                    out.push(Line::new().accent(key.clone()).main(" = ").main(value.clone()));
                }
                Some(out)
            })?
    };

    let reset = {
        let store = Arc::clone(store);
        let confirm = BooleanArgument::new("confirm", "Really reset").optional();
        Leaf::builder("reset")
            .permission("cfg.reset")
            .description("Restore default settings")
            .argument(confirm.clone())
            .executes(move |ctx| {
                if ctx.get(&confirm).copied() != Some(true) {
                    return Some(Component::new().line(
                        Line::new().muted("Run ").accent("cfg reset true").muted(" to confirm"),
                    ));
                }
                *store.lock() = defaults();
                Some(Component::text("Settings reset"))
            })?
    };

    Subcommand::builder("cfg")
        .description("Read and change server settings")
        .with_help()
        .children([get, set, list, reset])
        .build()
}

fn echo_command() -> Result<Node, TreeError> {
    let text = GreedyStringArgument::new("text", "Text to repeat").optional();
    Leaf::builder("echo")
        .description("Repeat the given text")
        .argument(text.clone())
        .executes(move |ctx| ctx.get(&text).map(|t| Component::text(t.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdtree::PermissionHolder;

    struct Grants(&'static [&'static str]);

    impl PermissionHolder for Grants {
        fn has_permission(&self, permission: &str) -> bool {
            self.0.iter().any(|g| *g == permission)
        }
    }

    fn run(registry: &CommandRegistry, sender: &Grants, line: &str) -> String {
        let tokens: Vec<String> = line.split_whitespace().map(String::from).collect();
        match registry.dispatch(&tokens, sender) {
            Ok(Some(out)) => out.to_string(),
            Ok(None) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn test_set_then_get() {
        let registry = build_registry(Settings::default()).unwrap();
        let admin = Grants(&["cfg.set"]);

        assert_eq!(run(&registry, &admin, "cfg set motd Hello there"), "Set motd to Hello there");
        assert_eq!(run(&registry, &admin, "config get motd"), "motd = Hello there");
    }

    #[test]
    fn test_reset_needs_confirmation() {
        let registry = build_registry(Settings::default()).unwrap();
        let admin = Grants(&["cfg.set", "cfg.reset"]);

        run(&registry, &admin, "cfg set pvp false");
        assert_eq!(run(&registry, &admin, "cfg reset"), "Run cfg reset true to confirm");
        assert_eq!(run(&registry, &admin, "cfg get pvp"), "pvp = false");
        assert_eq!(run(&registry, &admin, "cfg reset yes"), "Settings reset");
        assert_eq!(run(&registry, &admin, "cfg get pvp"), "pvp = true");
    }

    #[test]
    fn test_echo_without_text_is_silent() {
        let registry = build_registry(Settings::default()).unwrap();
        assert_eq!(run(&registry, &Grants(&[]), "say"), "");
        assert_eq!(run(&registry, &Grants(&[]), "echo a  b"), "a b");
    }
}
