//! # crop 命令实现
//!
//! 把整个目录的图片一次性裁成固定高度的长条，再把切片编号
//! 成零填充序列放回原目录。
//!
//! ## 功能
//! - 枚举目录顶层图片，保持目录列表顺序
//! - 单次阻塞调用 ImageMagick 完成全部裁切
//! - 原件移入 Backup 或直接删除
//! - 暂存目录里自然序编号后搬回
//! - 运行结束把有效配置写回设置文件
//!
//! ## 依赖关系
//! - 使用 `cli/crop.rs` 定义的参数
//! - 使用 `fileseq/`, `magick.rs`, `settings.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/ack.rs`

use crate::cli::crop::CropArgs;
use crate::error::{ImgsliceError, Result};
use crate::fileseq::rename::single_phase;
use crate::fileseq::{backup, scan, staging, BackupMode, SequenceAssignment};
use crate::magick::MagickTool;
use crate::settings::{self, Settings};
use crate::utils::ack::{self, AckMode};
use crate::utils::{output, progress};

use std::fs;
use std::path::{Path, PathBuf};

/// 一次裁切运行的完整配置，运行期间不变
#[derive(Debug, Clone)]
pub struct BatchConfiguration {
    pub backup: bool,
    pub extension: String,
    pub quality: u32,
    pub crop_height: u32,
}

impl BatchConfiguration {
    /// CLI 参数逐项覆盖持久化设置，得到本次运行的有效配置
    fn resolve(args: &CropArgs, saved: &Settings) -> BatchConfiguration {
        BatchConfiguration {
            backup: args.backup.unwrap_or(saved.backup),
            extension: args
                .extension
                .map(|e| e.as_extension().to_string())
                .unwrap_or_else(|| saved.extension.clone()),
            quality: args.quality.unwrap_or(saved.quality),
            crop_height: args.height.unwrap_or(saved.crop_height),
        }
    }
}

/// 执行 crop 命令
pub fn execute(args: CropArgs) -> Result<()> {
    output::print_header("Slicing images");

    let saved = settings::load();
    let config = BatchConfiguration::resolve(&args, &saved);
    let ack_mode = args
        .ack
        .unwrap_or_else(|| ack::from_flag(saved.show_crop_success_message));

    let tool = match &args.magick {
        Some(path) => MagickTool::at_path(path.clone()),
        None => MagickTool::detect()?,
    };

    if args.dry_run {
        return plan(&args.folder, &config, &tool);
    }

    let result = run_batch(&args.folder, &config, &tool);

    // 成功失败都写回本次的有效配置
    let mut updated = saved;
    updated.backup = config.backup;
    updated.extension = config.extension.clone();
    updated.quality = config.quality;
    updated.crop_height = config.crop_height;
    updated.show_crop_success_message = ack_mode == AckMode::Prompt;
    if let Err(e) = settings::save(&updated) {
        output::print_warning(&format!("Could not persist settings: {}", e));
    }

    let produced = result?;
    ack::acknowledge(
        ack_mode,
        &format!(
            "Produced {} slice(s) in {}",
            produced,
            args.folder.display()
        ),
    );
    Ok(())
}

/// 裁切管线，每一步都是一个提交点，跨步不回滚
pub fn run_batch(folder: &Path, config: &BatchConfiguration, tool: &MagickTool) -> Result<usize> {
    // 1. 枚举目录顶层图片，保持目录列表顺序喂给外部工具
    let originals = scan::list_images(folder)?;
    if originals.is_empty() {
        return Err(ImgsliceError::NoImagesFound {
            path: folder.display().to_string(),
        });
    }
    output::print_step(1, 7, &format!("Found {} image(s)", originals.len()));

    // 2. 建立暂存目录
    let staging_dir = staging::create(folder)?;
    output::print_step(2, 7, &format!("Staging in {}", staging_dir.display()));

    // 3. 单次阻塞调用外部工具，失败时暂存目录原样留下供排查
    let inputs: Vec<PathBuf> = originals.iter().map(|e| e.path_in(folder)).collect();
    let seeded_output = staging_dir.join(format!("0{}", config.extension));
    let spinner = progress::create_spinner("Slicing with ImageMagick");
    let slice_result = tool.run_slice(config.quality, config.crop_height, &inputs, &seeded_output);
    spinner.finish_and_clear();
    slice_result?;
    output::print_step(3, 7, "External tool finished");

    // 4. 处理原件，以第 1 步的列表为准
    if config.backup {
        backup::run(folder, &originals, BackupMode::Move)?;
        output::print_step(4, 7, "Originals moved into Backup");
    } else {
        for entry in &originals {
            let path = entry.path_in(folder);
            fs::remove_file(&path).map_err(|e| ImgsliceError::DeleteError {
                path: path.display().to_string(),
                source: e,
            })?;
        }
        output::print_step(4, 7, "Originals deleted");
    }

    // 5. 暂存区内自然序编号，这里不存在新旧数字名互撞
    let slices = scan::list_images(&staging_dir)?;
    let assignment = SequenceAssignment::build(slices);
    let produced = single_phase(&staging_dir, &assignment)?;
    output::print_step(5, 7, &format!("Renumbered {} slice(s)", produced));

    // 6. 把编号好的切片搬回目录
    let outputs = scan::list_files(&staging_dir)?;
    let pb = progress::create_progress_bar(outputs.len() as u64, "Relocating");
    for entry in &outputs {
        let from = entry.path_in(&staging_dir);
        let to = entry.path_in(folder);
        fs::rename(&from, &to).map_err(|e| ImgsliceError::MoveError {
            from: from.display().to_string(),
            to: to.display().to_string(),
            source: e,
        })?;
        pb.inc(1);
    }
    pb.finish_and_clear();
    output::print_step(6, 7, "Slices relocated");

    // 7. 撤掉暂存目录，非空即报错
    staging::remove(folder)?;
    output::print_step(7, 7, "Staging removed");

    Ok(produced)
}

/// dry-run：打印将要执行的计划和完整命令行，不动文件系统
fn plan(folder: &Path, config: &BatchConfiguration, tool: &MagickTool) -> Result<()> {
    let originals = scan::list_images(folder)?;
    if originals.is_empty() {
        return Err(ImgsliceError::NoImagesFound {
            path: folder.display().to_string(),
        });
    }

    let inputs: Vec<PathBuf> = originals.iter().map(|e| e.path_in(folder)).collect();
    let seeded_output = folder
        .join(staging::STAGING_DIR)
        .join(format!("0{}", config.extension));

    output::print_dry(&format!(
        "Would slice {} image(s) into {}px strips at quality {}",
        originals.len(),
        config.crop_height,
        config.quality
    ));
    output::print_dry(&format!(
        "Originals would be {}",
        if config.backup {
            "moved into Backup"
        } else {
            "deleted"
        }
    ));
    output::print_dry(&format!(
        "Command: {}",
        tool.command_line(config.quality, config.crop_height, &inputs, &seeded_output)
    ));
    Ok(())
}
