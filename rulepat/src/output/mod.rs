//! 输出模块
pub mod sink;

pub use sink::PatternSink;
