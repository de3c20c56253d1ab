//! Command implementations for the Sheet Runner CLI.
//! Sheet Runner CLI 的命令实现。

pub mod init;
pub mod run;
pub mod serve;
