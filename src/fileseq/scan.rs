//! # 目录扫描器
//!
//! 枚举待处理目录的顶层文件，返回目录枚举顺序（不排序，由调用方
//! 决定如何排序）。每次操作都重新扫描，不缓存上一步的结果。
//!
//! ## 功能
//! - 按扩展名白名单列出图片文件
//! - 列出所有常规文件（批量重命名用）
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs`, `commands/rename.rs` 使用
//! - 使用 `walkdir` 遍历目录

use crate::error::{ImgsliceError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 图片扩展名白名单（比较时忽略大小写）
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// 目录中的一个文件
///
/// 只保留叶子文件名和扩展名；完整路径由调用方用 `path_in` 拼出。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// 完整文件名
    name: String,
    /// 扩展名，含点，保留原大小写；没有扩展名时为空串
    extension: String,
}

impl FileEntry {
    /// 从叶子文件名构建
    pub fn new(name: &str) -> Self {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();

        FileEntry {
            name: name.to_string(),
            extension,
        }
    }

    /// 完整文件名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 扩展名（含点；可能为空串）
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// 去掉扩展名后的主干
    pub fn stem(&self) -> &str {
        &self.name[..self.name.len() - self.extension.len()]
    }

    /// 文件在某个目录下的完整路径
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.name)
    }

    /// 是否在图片扩展名白名单内
    pub fn is_image(&self) -> bool {
        let ext = self.extension.trim_start_matches('.').to_ascii_lowercase();
        IMAGE_EXTENSIONS.contains(&ext.as_str())
    }
}

/// 列出目录顶层的所有常规文件
///
/// 子目录（如 `Backup` 和暂存目录）不进入结果；
/// 文件名无法用 UTF-8 表示的条目跳过。
pub fn list_files(dir: &Path) -> Result<Vec<FileEntry>> {
    if !dir.is_dir() {
        return Err(ImgsliceError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            entries.push(FileEntry::new(name));
        }
    }

    Ok(entries)
}

/// 列出目录顶层的图片文件（扩展名白名单过滤）
pub fn list_images(dir: &Path) -> Result<Vec<FileEntry>> {
    Ok(list_files(dir)?
        .into_iter()
        .filter(|e| e.is_image())
        .collect())
}

/// 把 walkdir 错误映射成统一错误类型
fn walk_error(dir: &Path, err: walkdir::Error) -> ImgsliceError {
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "directory walk error"));
    ImgsliceError::FileReadError {
        path: dir.display().to_string(),
        source,
    }
}
