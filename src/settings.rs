//! # 设置持久化模块
//!
//! 把每次运行的有效配置存成 JSON，下次运行作为默认值读回。
//! 丢失或损坏的设置文件不会让程序失败，一律退回内置默认值。
//!
//! ## 依赖关系
//! - 被 `commands/crop.rs`, `commands/rename.rs`, `commands/config.rs` 使用
//! - 使用 `utils/output.rs` 打印警告
//! - 使用 `serde` / `serde_json` 序列化，`dirs` 定位配置目录

use crate::error::{ImgsliceError, Result};
use crate::utils::output;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 持久化的运行默认值
///
/// 缺失字段读入时取内置默认值，旧版本留下的文件可以直接升级。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 破坏性步骤前是否备份原件
    pub backup: bool,
    /// 切片输出扩展名，含点
    pub extension: String,
    /// 压缩质量，1-100
    pub quality: u32,
    /// 切片高度（像素）
    pub crop_height: u32,
    /// 裁切成功后阻塞等待确认，false 时只响铃
    pub show_crop_success_message: bool,
    /// 重命名成功后阻塞等待确认，false 时只响铃
    pub show_rename_success_message: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            backup: false,
            extension: ".jpg".to_string(),
            quality: 80,
            crop_height: 1000,
            show_crop_success_message: true,
            show_rename_success_message: true,
        }
    }
}

/// 设置文件位置：`{配置目录}/imgslice/settings.json`
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("imgslice")
        .join("settings.json")
}

/// 从默认位置读取设置
pub fn load() -> Settings {
    load_from(&settings_path())
}

/// 从指定路径读取设置
///
/// 文件不存在时静默返回默认值；读不出或解析不动时打印警告后
/// 返回默认值，一次损坏的写入不该挡住后续运行。
pub fn load_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            output::print_warning(&format!(
                "Cannot read settings ({}), using defaults: {}",
                path.display(),
                e
            ));
            return Settings::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(settings) => settings,
        Err(e) => {
            output::print_warning(&format!(
                "Settings file is corrupt ({}), using defaults: {}",
                path.display(),
                e
            ));
            Settings::default()
        }
    }
}

/// 写入默认位置
pub fn save(settings: &Settings) -> Result<()> {
    save_to(&settings_path(), settings)
}

/// 写入指定路径，父目录不存在时一并创建
pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ImgsliceError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| ImgsliceError::SettingsEncode(e.to_string()))?;
    fs::write(path, json).map_err(|e| ImgsliceError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_defaults() {
        let s = Settings::default();
        assert!(!s.backup);
        assert_eq!(s.extension, ".jpg");
        assert_eq!(s.quality, 80);
        assert_eq!(s.crop_height, 1000);
        assert!(s.show_crop_success_message);
        assert!(s.show_rename_success_message);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let loaded = load_from(&tmp.path().join("absent.json"));
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        let settings = Settings {
            backup: true,
            extension: ".png".to_string(),
            quality: 95,
            crop_height: 1440,
            show_crop_success_message: false,
            show_rename_success_message: true,
        };

        save_to(&path, &settings).unwrap();
        assert_eq!(load_from(&path), settings);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, "{ backup: maybe").unwrap();

        assert_eq!(load_from(&path), Settings::default());
    }

    #[test]
    fn test_partial_file_merges_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, r#"{ "quality": 70, "backup": true }"#).unwrap();

        let loaded = load_from(&path);
        assert_eq!(loaded.quality, 70);
        assert!(loaded.backup);
        assert_eq!(loaded.extension, ".jpg");
        assert_eq!(loaded.crop_height, 1000);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("deep").join("nested").join("settings.json");

        save_to(&path, &Settings::default()).unwrap();
        assert!(path.is_file());
    }
}
