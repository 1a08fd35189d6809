//! 语料收集：按遍历顺序扫描候选文件并拼接结果
use std::path::{Path, PathBuf};

use log::warn;
use rulepat_engine::{Corpus, Dialect};

use super::scan_stats::ScanStats;
use crate::error::RulePatResult;
use crate::scanner::FileScanner;

/// 一次收集的结果：语料 + 统计
#[derive(Debug, Default)]
pub struct CollectReport {
    pub corpus: Corpus,
    pub stats: ScanStats,
}

/// 语料收集器
#[derive(Debug, Clone, Copy)]
pub struct CorpusCollector {
    scanner: FileScanner,
}

impl CorpusCollector {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            scanner: FileScanner::new(dialect),
        }
    }

    /// 依次扫描候选文件；单个文件失败只记录并跳过，不重试
    /// 遍历阶段的错误项同样计入失败
    pub fn collect<I>(&self, candidates: I) -> CollectReport
    where
        I: IntoIterator<Item = RulePatResult<PathBuf>>,
    {
        let mut report = CollectReport::default();

        for candidate in candidates {
            report.stats.candidate_files += 1;
            let path = match candidate {
                Ok(path) => path,
                Err(e) => {
                    let path = e.failed_path().map(Path::to_path_buf).unwrap_or_default();
                    warn!("Skipping {}: {}", path.display(), e);
                    report.stats.record_failure(path, e.to_string());
                    continue;
                }
            };
            match self.scanner.scan_file(&path) {
                Ok(patterns) => {
                    report.stats.record_scanned(patterns.len());
                    report.corpus.extend_from_file(patterns);
                }
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    report.stats.record_failure(path, e.to_string());
                }
            }
        }

        report
    }
}
