//! Dispatcher settings loaded from TOML.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_CANDIDATES_LIMIT};
pub use types::{CompletionSettings, HelpSettings, Settings};
