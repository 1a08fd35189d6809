//! 提取配置
pub mod extract;

pub use extract::{ExtractConfig, ExtractConfigBuilder, ExtractOptions};
