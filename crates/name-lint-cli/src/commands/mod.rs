//! CLI subcommand implementations.

pub mod check;
pub mod init;
pub mod install_hook;
pub mod output;
