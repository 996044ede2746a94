//! # 完成确认提示
//!
//! 管线成功后给用户一个明确的收尾信号：要么阻塞等回车，要么
//! 响一声终端铃。无人值守的会话自动跳过阻塞，不卡管道和 CI。
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs`, `commands/rename.rs` 使用
//! - 使用 `utils/output.rs` 打印消息
//! - 使用 `console` 读取终端回车

use crate::utils::output;
use clap::ValueEnum;
use std::io::Write;

/// 成功后的确认方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AckMode {
    /// 打印消息并阻塞等待回车
    Prompt,
    /// 打印消息并响一声终端铃
    Bell,
}

/// 把持久化的布尔开关翻译成确认方式
pub fn from_flag(show_message: bool) -> AckMode {
    if show_message {
        AckMode::Prompt
    } else {
        AckMode::Bell
    }
}

/// 发出成功信号
///
/// Prompt 在无人值守的会话里退化为只打印消息。
pub fn acknowledge(mode: AckMode, message: &str) {
    output::print_success(message);
    match mode {
        AckMode::Prompt => {
            if console::user_attended() {
                let term = console::Term::stdout();
                term.write_str("Press Enter to continue...").ok();
                term.read_line().ok();
            }
        }
        AckMode::Bell => {
            print!("\x07");
            std::io::stdout().flush().ok();
        }
    }
}
