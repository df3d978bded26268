use serde::{Deserialize, Serialize};

/// Root settings container.
///
/// Every section is optional in the TOML file; missing keys take their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub completion: CompletionSettings,
    #[serde(default)]
    pub help: HelpSettings,
}

/// Tab-completion behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSettings {
    /// Match the partial token against candidates ignoring case (default: true).
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
    /// Cap on returned candidates; 0 means unlimited (default: 50).
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

/// Output of synthetic help nodes and help routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpSettings {
    /// List children the sender has no permission for (default: true).
    #[serde(default = "default_true")]
    pub show_inaccessible: bool,
    /// Mark listed children the sender cannot use (default: true).
    #[serde(default = "default_true")]
    pub mark_inaccessible: bool,
    /// Send unrecognized subcommand names to the help child instead of
    /// failing, on subcommands that have one (default: true).
    #[serde(default = "default_true")]
    pub unknown_routes_to_help: bool,
}

fn default_true() -> bool {
    true
}

fn default_max_candidates() -> usize {
    50
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            max_candidates: default_max_candidates(),
        }
    }
}

impl Default for HelpSettings {
    fn default() -> Self {
        Self {
            show_inaccessible: true,
            mark_inaccessible: true,
            unknown_routes_to_help: true,
        }
    }
}
