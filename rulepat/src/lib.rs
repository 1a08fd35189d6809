//! rulepat - Snort/Suricata 与 ClamAV 规则特征模式提取库

pub mod collector;
pub mod config;
pub mod error;
pub mod extractor;
pub mod output;
pub mod scanner;

// 导出全局错误类型
pub use self::error::{RulePatError, RulePatResult};

// 导出配置模块核心结构体与构建器
pub use crate::config::{ExtractConfig, ExtractConfigBuilder, ExtractOptions};

// 导出扫描/收集/输出组件
pub use crate::collector::{CollectReport, CorpusCollector, FileFailure, ScanStats};
pub use crate::output::PatternSink;
pub use crate::scanner::{CandidateWalker, FileScanner};

// 导出提取入口
pub use crate::extractor::{ExtractSummary, RulePatternExtractor};

// 导出内核类型
pub use rulepat_engine::{Corpus, Dialect, PatternProcessor};
