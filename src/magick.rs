//! # ImageMagick 接口
//!
//! 探测可用的 ImageMagick 入口并驱动一次阻塞式裁切调用。
//! 画布宽度固定为 32000 像素，纵向按给定高度切条，多条输出
//! 由 ImageMagick 自动展开成 `0-0`、`0-1`…… 一组带序号的文件。
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs` 使用
//! - 无外部模块依赖

use crate::error::{ImgsliceError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 裁切画布宽度（像素），远超常见图片宽度，使切割只发生在纵向
pub const SLICE_WIDTH: u32 = 32000;

/// 一个可调用的 ImageMagick 入口
pub struct MagickTool {
    program: PathBuf,
    /// IM 7 的 `magick` 入口需要 `convert` 子命令，IM 6 的
    /// `convert` 和用户显式指定的程序直接收参数
    subcommand: Option<&'static str>,
}

impl MagickTool {
    /// 探测系统里的 ImageMagick，先试 IM 7 的 `magick`，再退回
    /// IM 6 的 `convert`
    pub fn detect() -> Result<Self> {
        if probe("magick") {
            return Ok(MagickTool {
                program: PathBuf::from("magick"),
                subcommand: Some("convert"),
            });
        }
        if probe("convert") {
            return Ok(MagickTool {
                program: PathBuf::from("convert"),
                subcommand: None,
            });
        }
        Err(ImgsliceError::CommandNotFound {
            command: "magick".to_string(),
        })
    }

    /// 使用用户显式指定的程序，跳过探测
    pub fn at_path(program: PathBuf) -> Self {
        MagickTool {
            program,
            subcommand: None,
        }
    }

    /// 组装一次裁切调用的参数列表，输入顺序原样保留
    pub fn slice_args(
        &self,
        quality: u32,
        height: u32,
        inputs: &[PathBuf],
        output: &Path,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(inputs.len() + 6);
        if let Some(sub) = self.subcommand {
            args.push(sub.into());
        }
        args.push("-quality".into());
        args.push(quality.to_string().into());
        args.push("-crop".into());
        args.push(format!("{}x{}", SLICE_WIDTH, height).into());
        for input in inputs {
            args.push(input.as_os_str().to_os_string());
        }
        args.push(output.as_os_str().to_os_string());
        args
    }

    /// 以阻塞方式执行一次裁切，外部工具退出非零即报错
    pub fn run_slice(
        &self,
        quality: u32,
        height: u32,
        inputs: &[PathBuf],
        output: &Path,
    ) -> Result<()> {
        let args = self.slice_args(quality, height, inputs, output);
        match Command::new(&self.program).args(&args).output() {
            Ok(out) if out.status.success() => Ok(()),
            Ok(out) => Err(ImgsliceError::CommandFailed {
                command: self.program.display().to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).to_string(),
            }),
            Err(_) => Err(ImgsliceError::CommandNotFound {
                command: self.program.display().to_string(),
            }),
        }
    }

    /// 渲染将要执行的完整命令行，供 dry-run 展示
    pub fn command_line(
        &self,
        quality: u32,
        height: u32,
        inputs: &[PathBuf],
        output: &Path,
    ) -> String {
        let mut parts = vec![self.program.display().to_string()];
        for arg in self.slice_args(quality, height, inputs, output) {
            parts.push(arg.to_string_lossy().into_owned());
        }
        parts.join(" ")
    }
}

/// `-version` 探针，程序缺失或退出非零都算不可用
fn probe(program: &str) -> bool {
    match Command::new(program).arg("-version").output() {
        Ok(out) => out.status.success(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> Vec<PathBuf> {
        vec![PathBuf::from("/scans/b.png"), PathBuf::from("/scans/a.png")]
    }

    #[test]
    fn test_slice_args_with_subcommand() {
        let tool = MagickTool {
            program: PathBuf::from("magick"),
            subcommand: Some("convert"),
        };
        let args = tool.slice_args(80, 1000, &inputs(), Path::new("/scans/.work/0.jpg"));

        let rendered: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            rendered,
            vec![
                "convert",
                "-quality",
                "80",
                "-crop",
                "32000x1000",
                "/scans/b.png",
                "/scans/a.png",
                "/scans/.work/0.jpg",
            ]
        );
    }

    #[test]
    fn test_slice_args_direct_program() {
        let tool = MagickTool::at_path(PathBuf::from("/opt/im/convert"));
        let args = tool.slice_args(95, 800, &inputs(), Path::new("/scans/.work/0.png"));

        assert_eq!(args[0], "-quality");
        assert_eq!(args[1], "95");
        assert_eq!(args[3], "32000x800");
    }

    #[test]
    fn test_command_line_rendering() {
        let tool = MagickTool::at_path(PathBuf::from("convert"));
        let line = tool.command_line(80, 1000, &inputs(), Path::new("out/0.jpg"));

        assert!(line.starts_with("convert -quality 80 -crop 32000x1000"));
        assert!(line.ends_with("out/0.jpg"));
    }

    #[test]
    fn test_run_slice_missing_program() {
        let tool = MagickTool::at_path(PathBuf::from("/nonexistent/imgslice-no-such-tool"));
        let result = tool.run_slice(80, 1000, &inputs(), Path::new("0.jpg"));

        assert!(matches!(
            result,
            Err(ImgsliceError::CommandNotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_slice_surfaces_stderr() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().unwrap();
        let script = tmp.path().join("fake-magick");
        std::fs::write(&script, "#!/bin/sh\necho 'no decode delegate' >&2\nexit 1\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let tool = MagickTool::at_path(script);
        match tool.run_slice(80, 1000, &inputs(), Path::new("0.jpg")) {
            Err(ImgsliceError::CommandFailed { stderr, .. }) => {
                assert!(stderr.contains("no decode delegate"));
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_slice_accepts_zero_exit() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().unwrap();
        let script = tmp.path().join("fake-magick");
        std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let tool = MagickTool::at_path(script);
        assert!(tool.run_slice(80, 1000, &inputs(), Path::new("0.jpg")).is_ok());
    }
}
