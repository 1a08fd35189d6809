//! 语料收集模块
pub mod corpus_collector;
pub mod scan_stats;

pub use corpus_collector::{CollectReport, CorpusCollector};
pub use scan_stats::{FileFailure, ScanStats};
