// 核心公共结构体+枚举
pub mod core;
// 错误定义
pub mod error;
// 逐行扫描驱动
pub mod processor;
// 规则方言解析 (Snort content / ClamAV ndb)
pub mod source;
// 日志格式化等工具
pub mod utils;

// 顶层导出常用类型
pub use self::core::{Corpus, Dialect};
pub use error::CoreError;
pub use processor::PatternProcessor;
pub use source::{extract_content_patterns, extract_hex_pattern, LineJoiner};
