//! # config 子命令 CLI 定义
//!
//! 查看或重置持久化设置。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/config.rs`

use clap::Args;

/// config 子命令参数
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Reset the settings file to built-in defaults
    #[arg(long, default_value_t = false)]
    pub reset: bool,
}
