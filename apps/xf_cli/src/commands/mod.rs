// apps/xf_cli/src/commands/mod.rs

//! 子命令

pub mod list;
pub mod query;
pub mod validate;
