//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `fileseq/`, `magick.rs`, `settings.rs`, `utils/`
//! - 子模块: crop, rename, config

pub mod config;
pub mod crop;
pub mod rename;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Crop(args) => crop::execute(args),
        Commands::Rename(args) => rename::execute(args),
        Commands::Config(args) => config::execute(args),
    }
}
