//! # crop 子命令 CLI 定义
//!
//! 把整个目录的图片一次性裁成固定高度的长条序列。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/crop.rs`

use crate::utils::ack::AckMode;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 切片输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputExt {
    /// JPEG, lossy, small files
    Jpg,
    /// PNG, lossless
    Png,
}

impl OutputExt {
    /// 对应的文件扩展名，含点
    pub fn as_extension(&self) -> &'static str {
        match self {
            OutputExt::Jpg => ".jpg",
            OutputExt::Png => ".png",
        }
    }
}

/// crop 子命令参数
///
/// 未指定的选项回落到持久化设置里的值。
#[derive(Args, Debug)]
pub struct CropArgs {
    /// Folder containing the images to slice
    pub folder: PathBuf,

    /// Compression quality passed to ImageMagick (1-100)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub quality: Option<u32>,

    /// Slice height in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Output format for the slices
    #[arg(short, long, value_enum)]
    pub extension: Option<OutputExt>,

    /// Move originals into Backup instead of deleting them (true/false)
    #[arg(short, long)]
    pub backup: Option<bool>,

    /// Success cue: block on Enter or ring the terminal bell
    #[arg(long, value_enum)]
    pub ack: Option<AckMode>,

    /// ImageMagick program to invoke (skips PATH detection)
    #[arg(long)]
    pub magick: Option<PathBuf>,

    /// Print the plan without touching any file
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
