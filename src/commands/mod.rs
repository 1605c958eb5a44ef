//! CLI commands

pub mod check;
pub mod init;
pub mod list;
