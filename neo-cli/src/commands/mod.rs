//! CLI command implementations

pub mod transfer;

/// Common result type for CLI commands
pub type CommandResult = anyhow::Result<String>;
