//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `crop`: 批量裁切长条图
//! - `rename`: 按自然序重新编号
//! - `config`: 查看或重置持久化设置
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: crop, rename, config

pub mod config;
pub mod crop;
pub mod rename;

use clap::{Parser, Subcommand};

/// imgslice - 批量图片裁切与重新编号工具
#[derive(Parser)]
#[command(name = "imgslice")]
#[command(version)]
#[command(about = "A batch image slicing and renumbering toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Slice every image in a folder into fixed-height strips
    Crop(crop::CropArgs),

    /// Renumber files into a natural-sorted zero-padded sequence
    Rename(rename::RenameArgs),

    /// Show or reset persisted settings
    Config(config::ConfigArgs),
}
