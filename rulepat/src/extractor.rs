//! 提取总入口：配置 → 输出目标 → 遍历 → 收集 → 写出 → 汇总
use std::path::PathBuf;
use std::time::Instant;

use log::info;
use rulepat_engine::{Corpus, Dialect};
use serde::Serialize;

use crate::collector::{CollectReport, CorpusCollector, ScanStats};
use crate::config::ExtractConfig;
use crate::error::RulePatResult;
use crate::output::PatternSink;
use crate::scanner::CandidateWalker;

/// 运行汇总
#[derive(Debug, Clone, Serialize)]
pub struct ExtractSummary {
    pub dialect: Dialect,
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub patterns_written: usize,
    pub stats: ScanStats,
}

/// 规则模式提取器
#[derive(Debug, Clone)]
pub struct RulePatternExtractor {
    config: ExtractConfig,
}

impl RulePatternExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// 只收集语料，不写文件
    pub fn collect(&self) -> RulePatResult<CollectReport> {
        let walker = CandidateWalker::new(self.config.dialect, self.config.options.clone());
        let candidates = walker.candidates(&self.config.input_dir)?;
        Ok(CorpusCollector::new(self.config.dialect).collect(candidates))
    }

    /// 只收集语料
    pub fn extract_corpus(&self) -> RulePatResult<Corpus> {
        self.collect().map(|report| report.corpus)
    }

    /// 完整运行：先打开输出目标（不可写立即失败），再扫描并写出
    pub fn run(&self) -> RulePatResult<ExtractSummary> {
        let start = Instant::now();
        let mut sink = PatternSink::create(&self.config.output)?;

        let CollectReport { corpus, stats } = self.collect()?;
        sink.write_patterns(&corpus)?;
        let patterns_written = sink.finish()?;

        stats.print_stats(start.elapsed());
        info!(
            "done. {} rules were parsed to file {}",
            patterns_written,
            self.config.output.display()
        );

        Ok(ExtractSummary {
            dialect: self.config.dialect,
            input_dir: self.config.input_dir.clone(),
            output: self.config.output.clone(),
            patterns_written,
            stats,
        })
    }
}
