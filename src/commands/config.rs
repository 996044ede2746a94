//! # config 命令实现
//!
//! 查看或重置持久化设置。
//!
//! ## 依赖关系
//! - 使用 `cli/config.rs` 定义的参数
//! - 使用 `settings.rs`
//! - 使用 `utils/output.rs`

use crate::cli::config::ConfigArgs;
use crate::error::Result;
use crate::settings::{self, Settings};
use crate::utils::output;
use tabled::{Table, Tabled};

/// 设置表行
#[derive(Debug, Clone, Tabled)]
struct SettingRow {
    #[tabled(rename = "Setting")]
    key: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 config 命令
pub fn execute(args: ConfigArgs) -> Result<()> {
    if args.reset {
        settings::save(&Settings::default())?;
        output::print_success("Settings reset to built-in defaults");
    }

    let settings = settings::load();
    let table = Table::new(&settings_rows(&settings));
    println!("{}", table);

    output::print_separator();
    output::print_info(&format!(
        "Settings file: {}",
        settings::settings_path().display()
    ));
    Ok(())
}

/// 把设置摊成表行
fn settings_rows(settings: &Settings) -> Vec<SettingRow> {
    vec![
        SettingRow {
            key: "backup",
            value: settings.backup.to_string(),
        },
        SettingRow {
            key: "extension",
            value: settings.extension.clone(),
        },
        SettingRow {
            key: "quality",
            value: settings.quality.to_string(),
        },
        SettingRow {
            key: "crop_height",
            value: settings.crop_height.to_string(),
        },
        SettingRow {
            key: "show_crop_success_message",
            value: settings.show_crop_success_message.to_string(),
        },
        SettingRow {
            key: "show_rename_success_message",
            value: settings.show_rename_success_message.to_string(),
        },
    ]
}
