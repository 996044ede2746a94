//! # 统一错误处理模块
//!
//! 定义 imgslice 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// imgslice 统一错误类型
#[derive(Error, Debug)]
pub enum ImgsliceError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 文件搬移错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to copy: {from} -> {to}")]
    CopyError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move: {from} -> {to}")]
    MoveError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename: {from} -> {to}")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete: {path}")]
    DeleteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Backup target already exists: {path}")]
    BackupCollision { path: String },

    #[error("Rename target is held by a file outside this run: {path}")]
    TargetOccupied { path: String },

    // ─────────────────────────────────────────────────────────────
    // 暂存目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("Staging directory already contains files: {path}\nA previous run may have failed; inspect and remove it before retrying")]
    StagingConflict { path: String },

    #[error("Staging directory not empty after relocation: {path}")]
    StagingNotDrained {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 设置与参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to encode settings: {0}")]
    SettingsEncode(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No image files found in: {path}")]
    NoImagesFound { path: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ImgsliceError>;
