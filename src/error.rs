//! Error types for tree construction and dispatch.
//!
//! Construction errors ([`TreeError`]) are fatal to the tree being built.
//! Dispatch errors ([`DispatchError`]) are recoverable: the host renders them
//! with [`DispatchError::to_component`] and carries on.

use thiserror::Error;

use crate::text::{Component, Line};

/// A raw token failed an argument's validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid argument '{argument}': {reason}")]
pub struct ParseError {
    /// Name of the argument that rejected its tokens.
    pub argument: String,
    /// Human-readable reason.
    pub reason: String,
}

impl ParseError {
    pub fn new(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// The reason used by every argument when a required token is absent.
    pub fn missing(argument: impl Into<String>) -> Self {
        Self::new(argument, "a value is required")
    }
}

/// Errors that stop a dispatch before a leaf executes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// An argument on the path rejected its tokens.
    #[error(transparent)]
    InvalidArgument(#[from] ParseError),

    /// The sender lacks the permission of a node on the path.
    #[error("You do not have permission to use '{node}'")]
    PermissionDenied { node: String },

    /// A subcommand selector named a child that does not exist.
    #[error("Unknown subcommand '{attempted}' (available: {list})", list = .available.join(", "))]
    UnknownSubcommand {
        attempted: String,
        available: Vec<String>,
    },

    /// The command label matched no registered root.
    #[error("Unknown command '{label}'")]
    UnknownCommand { label: String },

    /// The registry was handed no tokens at all.
    #[error("No command given")]
    EmptyInput,
}

impl DispatchError {
    /// Stable identifier for each variant, suitable for logs and tests.
    pub fn error_type(&self) -> &'static str {
        match self {
            DispatchError::InvalidArgument(_) => "invalid_argument",
            DispatchError::PermissionDenied { .. } => "permission_denied",
            DispatchError::UnknownSubcommand { .. } => "unknown_subcommand",
            DispatchError::UnknownCommand { .. } => "unknown_command",
            DispatchError::EmptyInput => "empty_input",
        }
    }

    /// Render the error as a message for the sender.
    pub fn to_component(&self) -> Component {
        let line = match self {
            DispatchError::InvalidArgument(err) => Line::new()
                .error("Invalid argument '")
                .accent(err.argument.clone())
                .error(format!("': {}", err.reason)),
            DispatchError::UnknownSubcommand {
                attempted,
                available,
            } => Line::new()
                .error("Unknown subcommand '")
                .accent(attempted.clone())
                .error("'")
                .muted(format!(" (available: {})", available.join(", "))),
            other => Line::new().error(other.to_string()),
        };
        Component::new().line(line)
    }
}

/// Errors raised while building a command tree or registering it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Node and argument names must be non-empty and free of whitespace.
    #[error("Invalid name '{name}': names must be non-empty and contain no whitespace")]
    InvalidName { name: String },

    /// Two children of one subcommand share a name.
    #[error("Subcommand '{parent}' already has a child named '{name}'")]
    DuplicateChildName { parent: String, name: String },

    /// Two arguments of one node share a name.
    #[error("Node '{node}' already declares an argument named '{name}'")]
    DuplicateArgumentName { node: String, name: String },

    /// A registry label (name or alias) is already taken.
    #[error("Command label '{label}' is already registered")]
    DuplicateCommand { label: String },
}
