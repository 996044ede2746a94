//! # rename 命令实现
//!
//! 把目录里的文件按自然序重新编号成零填充序列。
//!
//! ## 功能
//! - 列目录顶层文件，glob 过滤
//! - 可选先把原件复制进 Backup
//! - 两阶段改名，避开新旧数字名互撞
//! - dry-run 打印改名计划表
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `fileseq/`
//! - 使用 `utils/output.rs`, `utils/ack.rs`

use crate::cli::rename::RenameArgs;
use crate::error::{ImgsliceError, Result};
use crate::fileseq::rename::two_phase;
use crate::fileseq::{backup, scan, BackupMode, FileEntry, SequenceAssignment};
use crate::settings;
use crate::utils::ack;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 改名计划行
#[derive(Debug, Clone, Tabled)]
struct PlanRow {
    #[tabled(rename = "Original")]
    original: String,
    #[tabled(rename = "Target")]
    target: String,
}

/// 执行 rename 命令
pub fn execute(args: RenameArgs) -> Result<()> {
    output::print_header("Renumbering files");

    let saved = settings::load();
    let do_backup = args.backup.unwrap_or(saved.backup);
    let ack_mode = args
        .ack
        .unwrap_or_else(|| ack::from_flag(saved.show_rename_success_message));

    if args.dry_run {
        return plan(&args.folder, &args.pattern);
    }

    let renamed = run_rename(&args.folder, &args.pattern, do_backup)?;
    if renamed > 0 {
        ack::acknowledge(
            ack_mode,
            &format!(
                "Renumbered {} file(s) in {}",
                renamed,
                args.folder.display()
            ),
        );
    }
    Ok(())
}

/// 列出并过滤待编号的文件
fn select_files(folder: &Path, pattern: &str) -> Result<Vec<FileEntry>> {
    let matcher = glob::Pattern::new(pattern).map_err(|e| {
        ImgsliceError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
    })?;

    let files = scan::list_files(folder)?
        .into_iter()
        .filter(|f| matcher.matches(f.name()))
        .collect();
    Ok(files)
}

/// 重新编号管线，返回改名的文件数
pub fn run_rename(folder: &Path, pattern: &str, do_backup: bool) -> Result<usize> {
    let selected = select_files(folder, pattern)?;

    if selected.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            pattern,
            folder.display()
        ));
        return Ok(0);
    }

    // 改名之前先留住原件，备份失败则整个操作不开始
    if do_backup {
        backup::run(folder, &selected, BackupMode::Copy)?;
        output::print_info(&format!("Backed up {} file(s)", selected.len()));
    }

    let assignment = SequenceAssignment::build(selected);
    let renamed = two_phase(folder, &assignment)?;

    output::print_done(&format!("Renumbered {} file(s)", renamed));
    Ok(renamed)
}

/// dry-run：打印改名计划，不动文件系统
fn plan(folder: &Path, pattern: &str) -> Result<()> {
    let selected = select_files(folder, pattern)?;

    if selected.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            pattern,
            folder.display()
        ));
        return Ok(());
    }

    let assignment = SequenceAssignment::build(selected);
    let rows: Vec<PlanRow> = assignment
        .slots()
        .iter()
        .map(|slot| PlanRow {
            original: slot.entry.name().to_string(),
            target: slot.target.clone(),
        })
        .collect();

    let table = Table::new(&rows);
    println!("{}", table);
    output::print_dry(&format!("{} file(s) would be renumbered", rows.len()));
    Ok(())
}
