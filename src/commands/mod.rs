//! CLI commands for weft

pub mod add;
pub mod dispatch;
pub mod helpers;
pub mod init;
pub mod labels;
pub mod list;
pub mod related;
pub mod show;
