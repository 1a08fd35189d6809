//! 规则方言解析模块
//! 每种方言只负责从一条逻辑行中取出零到多个模式字符串

pub mod content_keyword;
pub mod hex_signature;
pub mod line_joiner;

pub use content_keyword::{extract_content_patterns, next_content_match, ContentStep};
pub use hex_signature::{extract_hex_pattern, HEX_CHARSET};
pub use line_joiner::{LineJoiner, PhysicalLines};
