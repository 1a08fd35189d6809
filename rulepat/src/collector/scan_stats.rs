//! 负责统计数据的定义、更新与格式化输出
use std::path::PathBuf;

use serde::Serialize;

/// 单个文件失败记录
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// 提取统计信息
/// 记录：
/// 1. 候选文件数/成功数/失败数
/// 2. 产出模式总数、无模式文件数
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScanStats {
    /// 候选文件总数
    pub candidate_files: u32,
    /// 成功扫描的文件数
    pub scanned_files: u32,
    /// 扫描失败被跳过的文件数
    pub failed_files: u32,
    /// 成功扫描但没有产出模式的文件数
    pub empty_files: u32,
    /// 模式总数
    pub total_patterns: usize,
    /// 失败明细
    pub failures: Vec<FileFailure>,
}

impl ScanStats {
    /// 记录一个成功扫描的文件
    pub fn record_scanned(&mut self, pattern_count: usize) {
        self.scanned_files += 1;
        self.total_patterns += pattern_count;
        if pattern_count == 0 {
            self.empty_files += 1;
        }
    }

    /// 记录一个失败文件
    pub fn record_failure(&mut self, path: PathBuf, reason: String) {
        self.failed_files += 1;
        self.failures.push(FileFailure { path, reason });
    }

    /// 格式化输出统计信息（结构化日志）
    pub fn print_stats(&self, total_time: std::time::Duration) {
        log::debug!(
            "Extraction completed | Time: {:?} | Candidates: {} | Scanned: {} | Failed: {} | Empty: {}",
            total_time,
            self.candidate_files,
            self.scanned_files,
            self.failed_files,
            self.empty_files
        );
        log::debug!("Pattern stats: total {}", self.total_patterns);
    }
}
