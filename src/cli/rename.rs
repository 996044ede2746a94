//! # rename 子命令 CLI 定义
//!
//! 把目录里的文件按自然序重新编号成零填充序列。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use crate::utils::ack::AckMode;
use clap::Args;
use std::path::PathBuf;

/// rename 子命令参数
///
/// 未指定的选项回落到持久化设置里的值。
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Folder containing the files to renumber
    pub folder: PathBuf,

    /// Copy originals into Backup before renaming (true/false)
    #[arg(short, long)]
    pub backup: Option<bool>,

    /// Glob pattern selecting which files to renumber
    #[arg(short, long, default_value = "*")]
    pub pattern: String,

    /// Success cue: block on Enter or ring the terminal bell
    #[arg(long, value_enum)]
    pub ack: Option<AckMode>,

    /// Print the planned renames without touching any file
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
