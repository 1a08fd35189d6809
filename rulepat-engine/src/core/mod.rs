//! 核心数据结构：方言枚举 + 模式语料
pub mod corpus;
pub mod dialect;

pub use corpus::Corpus;
pub use dialect::Dialect;
