//! Command-line interface for the `gvisit` tool.

pub mod commands;
