//! # imgslice - 批量图片裁切与重新编号工具
//!
//! 把长条漫画/扫描图的裁切、编号、备份流程统一成单一可执行文件，
//! 裁切本身交给系统里的 ImageMagick。
//!
//! ## 子命令
//! - `crop`   - 整目录图片裁成固定高度长条并重新编号
//! - `rename` - 按自然序把文件重新编号成零填充序列
//! - `config` - 查看或重置持久化设置
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── fileseq/   (文件序列原语)
//!   │     ├── magick.rs  (外部工具接口)
//!   │     └── settings.rs(设置持久化)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod fileseq;
mod magick;
mod settings;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
