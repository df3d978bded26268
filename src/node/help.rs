use crate::context::Context;
use crate::node::Node;
use crate::sender::may_use;
use crate::text::{Component, Line};

/// What the help node knows about one sibling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub name: String,
    pub usage: String,
    pub description: Option<String>,
    pub permission: Option<String>,
}

/// Synthetic leaf listing its owning subcommand's children.
///
/// Holds a snapshot of the siblings taken when the owner was built; the tree
/// is immutable afterwards so the snapshot never goes stale.
#[derive(Debug, Clone)]
pub struct HelpNode {
    owner: String,
    entries: Vec<HelpEntry>,
}

impl HelpNode {
    pub const NAME: &'static str = "help";
    pub const DESCRIPTION: &'static str = "Shows this help";

    pub(crate) fn for_children(owner: &str, children: &[Node]) -> Self {
        let entries = children
            .iter()
            .map(|child| HelpEntry {
                name: child.name().to_string(),
                usage: child
                    .arguments()
                    .iter()
                    .map(|a| a.usage())
                    .collect::<Vec<_>>()
                    .join(" "),
                description: child.description().map(str::to_string),
                permission: child.permission().map(str::to_string),
            })
            .collect();
        Self {
            owner: owner.to_string(),
            entries,
        }
    }

    pub fn entries(&self) -> &[HelpEntry] {
        &self.entries
    }

    pub(crate) fn render(&self, ctx: &Context<'_>) -> Component {
        let settings = &ctx.settings().help;
        let path = ctx.path();
        // The last path element is this node.
        let owner_path = match path.len() {
            0 | 1 => self.owner.clone(),
            n => path[..n - 1].join(" "),
        };

        let mut out = Component::new().line(Line::new().accent(owner_path).main(" subcommands"));
        let mut listed = 0;

        for entry in &self.entries {
            let allowed = may_use(ctx.sender(), entry.permission.as_deref());
            if !allowed && !settings.show_inaccessible {
                continue;
            }

            let mut line = Line::new().accent(entry.name.clone());
            if !entry.usage.is_empty() {
                line = line.muted(format!(" {}", entry.usage));
            }
            line = line.main(" - ").main(
                entry
                    .description
                    .clone()
                    .unwrap_or_else(|| "No description".to_string()),
            );
            if !allowed && settings.mark_inaccessible {
                line = line.error(" (no permission)");
            }
            out.push(line);
            listed += 1;
        }

        if listed == 0 {
            out.push(Line::new().muted("No subcommands available"));
        }
        out
    }
}
