//! # 文件序列模块
//!
//! 提供统一的文件序列处理能力。
//!
//! ## 功能
//! - 扫描目录顶层文件并识别图片
//! - 按数字感知的自然序排序文件名
//! - 计算零填充的目标编号
//! - 两阶段改名，避开新旧名字的冲突
//! - 备份与暂存目录管理
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `walkdir` 扫描目录
//! - 使用 `regex` 切分文件名里的数字段

pub mod backup;
pub mod natural;
pub mod rename;
pub mod scan;
pub mod sequence;
pub mod staging;

pub use backup::BackupMode;
pub use scan::FileEntry;
pub use sequence::SequenceAssignment;
