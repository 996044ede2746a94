//! # 暂存目录
//!
//! 裁切管线把外部工具的输出先落到目标目录下的 `.imgslice-work`
//! 暂存目录，编号完成后才搬回目标目录。切片在暂存区内完成
//! 重排，失败时不会污染目标目录里的原件。
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs` 使用
//! - 无外部模块依赖

use crate::error::{ImgsliceError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 暂存目录名，点前缀使其在多数文件管理器里默认隐藏
pub const STAGING_DIR: &str = ".imgslice-work";

/// 在目标目录下创建暂存目录并返回其路径
///
/// 上一次中断的运行留下的非空暂存目录会让本次运行报错退出，
/// 残留文件留给用户自行检查；空目录则直接复用。
pub fn create(folder: &Path) -> Result<PathBuf> {
    let dir = folder.join(STAGING_DIR);

    if dir.exists() {
        let leftover = fs::read_dir(&dir)
            .map_err(|e| ImgsliceError::FileReadError {
                path: dir.display().to_string(),
                source: e,
            })?
            .next()
            .is_some();
        if leftover {
            return Err(ImgsliceError::StagingConflict {
                path: dir.display().to_string(),
            });
        }
        return Ok(dir);
    }

    fs::create_dir(&dir).map_err(|e| ImgsliceError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })?;
    Ok(dir)
}

/// 删除暂存目录
///
/// 只对空目录生效。仍有残留文件说明搬回步骤没有跑完，此时
/// 报错而不是静默吞掉残留。
pub fn remove(folder: &Path) -> Result<()> {
    let dir = folder.join(STAGING_DIR);
    fs::remove_dir(&dir).map_err(|e| ImgsliceError::StagingNotDrained {
        path: dir.display().to_string(),
        source: e,
    })
}
