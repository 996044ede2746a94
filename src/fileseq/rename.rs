//! # 重命名执行器
//!
//! 照 `SequenceAssignment` 的分配表执行重命名。
//!
//! ## 功能
//! - 两阶段重命名：先把全部文件挪进不相交的暂存命名空间，
//!   再按序提交到最终编号名，保证不会覆盖尚未处理的文件
//! - 开始前校验编号目标名没有被分配表之外的文件占用
//! - 单阶段重命名：目标目录保证没有编号冲突时的快捷路径
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs`, `commands/rename.rs` 使用
//! - 使用 `fileseq/sequence.rs`

use crate::error::{ImgsliceError, Result};
use crate::fileseq::sequence::{SequenceAssignment, Slot};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// 阶段一的暂存文件名
///
/// 主干总是带 `__` 加序号，因此暂存名的主干永远不是纯数字，
/// 不可能和阶段二的编号目标名重合。磁盘上已有同名文件时
/// 追加下划线直到空出为止。
fn staged_name(dir: &Path, slot: &Slot) -> String {
    let mut staged = format!(
        "{}__{:02}{}",
        slot.entry.stem(),
        slot.index,
        slot.entry.extension()
    );
    while dir.join(&staged).exists() {
        staged.push('_');
    }
    staged
}

/// 阶段零：最终编号名不得压到分配表之外的现存文件
///
/// 过滤后的重命名只腾空被选中文件的名字；目录里未被选中的文件
/// 若恰好占着某个编号目标名，阶段二的 `fs::rename` 会把它覆盖掉。
/// 在任何改名之前整体拒绝，已被选中的占位文件无妨，阶段一会把
/// 它挪走。
fn ensure_targets_free(dir: &Path, assignment: &SequenceAssignment) -> Result<()> {
    let selected: HashSet<&str> = assignment.slots().iter().map(|s| s.entry.name()).collect();

    for slot in assignment.slots() {
        if !selected.contains(slot.target.as_str()) && dir.join(&slot.target).exists() {
            return Err(ImgsliceError::TargetOccupied {
                path: dir.join(&slot.target).display().to_string(),
            });
        }
    }
    Ok(())
}

/// 两阶段执行编号分配，返回重命名的文件数
///
/// 中途的文件系统失败会留下部分改名的状态，不做回滚（已知限制）。
pub fn two_phase(dir: &Path, assignment: &SequenceAssignment) -> Result<usize> {
    ensure_targets_free(dir, assignment)?;

    // 阶段一：全部加后缀，腾空最终目标的命名空间
    let mut staged = Vec::with_capacity(assignment.len());
    for slot in assignment.slots() {
        let name = staged_name(dir, slot);
        rename_in(dir, slot.entry.name(), &name)?;
        staged.push(name);
    }

    // 阶段二：按序提交到最终编号名
    for (slot, name) in assignment.slots().iter().zip(&staged) {
        rename_in(dir, name, &slot.target)?;
    }

    Ok(assignment.len())
}

/// 单阶段执行编号分配，返回重命名的文件数
///
/// 只用于刚由外部工具填充的暂存目录：那里只有工具自己的
/// 场景编号输出，不存在和目标名冲突的文件。
pub fn single_phase(dir: &Path, assignment: &SequenceAssignment) -> Result<usize> {
    for slot in assignment.slots() {
        rename_in(dir, slot.entry.name(), &slot.target)?;
    }
    Ok(assignment.len())
}

/// 目录内重命名，统一错误映射
fn rename_in(dir: &Path, from: &str, to: &str) -> Result<()> {
    let from_path = dir.join(from);
    let to_path = dir.join(to);
    fs::rename(&from_path, &to_path).map_err(|e| ImgsliceError::RenameError {
        from: from_path.display().to_string(),
        to: to_path.display().to_string(),
        source: e,
    })
}
