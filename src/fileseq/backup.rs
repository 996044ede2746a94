//! # 备份守卫
//!
//! 在任何不可逆的破坏性步骤之前，把原件复制或移动进 `Backup`
//! 子目录。复制用于重命名管线（原件留在原处继续被改名），
//! 移动用于裁切管线（原件让位给新切片）。
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs`, `commands/rename.rs` 使用
//! - 使用 `fileseq/scan.rs`, `utils/progress.rs`

use crate::error::{ImgsliceError, Result};
use crate::fileseq::scan::FileEntry;
use crate::utils::progress;
use std::fs;
use std::path::{Path, PathBuf};

/// 备份子目录名
pub const BACKUP_DIR: &str = "Backup";

/// 备份方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupMode {
    /// 复制，原件留在父目录
    Copy,
    /// 移动，原件离开父目录
    Move,
}

/// 确保 `Backup` 子目录存在（幂等），返回其路径
pub fn ensure_backup_dir(folder: &Path) -> Result<PathBuf> {
    let dir = folder.join(BACKUP_DIR);
    fs::create_dir_all(&dir).map_err(|e| ImgsliceError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })?;
    Ok(dir)
}

/// 把一组文件备份进 `Backup` 子目录，返回处理的文件数
///
/// Copy 模式允许覆盖上一次运行留下的同名旧备份；Move 模式
/// 遇到已存在的目标直接报错。任何一个文件失败即中止剩余
/// 文件，之前已完成的备份保持原样。
pub fn run(folder: &Path, files: &[FileEntry], mode: BackupMode) -> Result<usize> {
    let backup_dir = ensure_backup_dir(folder)?;
    let pb = progress::create_progress_bar(files.len() as u64, "Backing up");

    for entry in files {
        let src = entry.path_in(folder);
        let dst = backup_dir.join(entry.name());

        match mode {
            BackupMode::Copy => {
                fs::copy(&src, &dst).map_err(|e| ImgsliceError::CopyError {
                    from: src.display().to_string(),
                    to: dst.display().to_string(),
                    source: e,
                })?;
            }
            BackupMode::Move => {
                if dst.exists() {
                    return Err(ImgsliceError::BackupCollision {
                        path: dst.display().to_string(),
                    });
                }
                fs::rename(&src, &dst).map_err(|e| ImgsliceError::MoveError {
                    from: src.display().to_string(),
                    to: dst.display().to_string(),
                    source: e,
                })?;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(files.len())
}
