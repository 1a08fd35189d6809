//! rulepat-engine 内核错误定义
//! 规则文本层面的异常一律编码为"无匹配"，不会走到这里；这里只保留调用方输入错误
use thiserror::Error;

/// 内核核心错误枚举
#[derive(Error, Debug)]
pub enum CoreError {
    /// 不支持的规则方言名称
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),
}
