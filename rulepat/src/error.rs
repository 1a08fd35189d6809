//! 全局错误类型定义
use rulepat_engine::CoreError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::Error as WalkDirError;

#[derive(Error, Debug)]
pub enum RulePatError {
    // 内核错误（方言名非法等）
    #[error("内核错误：{0}")]
    Core(#[from] CoreError),

    // 规则文件相关错误
    #[error("规则文件读取失败：{path:?}：{source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("规则目录遍历失败：{0}")]
    WalkError(#[from] WalkDirError),

    // 输出相关错误
    #[error("输出目标不可写：{path:?}：{source}")]
    OutputError {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    // 序列化错误
    #[error("JSON序列化失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    #[error("无效输入：{0}")]
    InvalidInput(String),
}

impl RulePatError {
    /// 出错的文件/目录路径（如果错误携带路径）
    pub fn failed_path(&self) -> Option<&Path> {
        match self {
            RulePatError::FileReadError { path, .. } | RulePatError::OutputError { path, .. } => {
                Some(path)
            }
            RulePatError::WalkError(e) => e.path(),
            _ => None,
        }
    }
}

// 全局Result类型
pub type RulePatResult<T> = Result<T, RulePatError>;
