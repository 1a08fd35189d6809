//! 单文件扫描：打开规则文件，交给内核处理器逐行提取
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use rulepat_engine::{Dialect, PatternProcessor};

use crate::error::{RulePatError, RulePatResult};

/// 单文件扫描器
#[derive(Debug, Clone, Copy)]
pub struct FileScanner {
    processor: PatternProcessor,
}

impl FileScanner {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            processor: PatternProcessor::new(dialect),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.processor.dialect()
    }

    /// 扫描一个规则文件，返回文件内按行序排列的全部模式
    pub fn scan_file(&self, path: &Path) -> RulePatResult<Vec<Vec<u8>>> {
        info!("parsing file: {}", path.display());

        let read_error = |source| RulePatError::FileReadError {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_error)?;
        let patterns = self
            .processor
            .scan_reader(BufReader::new(file))
            .map_err(read_error)?;

        debug!("{} patterns extracted from {}", patterns.len(), path.display());
        Ok(patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_rules_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("local.rules");
        fs::write(
            &path,
            "alert tcp any any -> any any (content:\"A\\\"B\"; content : \"C\";)\n",
        )
        .unwrap();

        let patterns = FileScanner::new(Dialect::Snort).scan_file(&path).unwrap();
        assert_eq!(patterns, vec![br#"A\"B"#.to_vec(), b"C".to_vec()]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.ndb");

        let err = FileScanner::new(Dialect::Clamav).scan_file(&path).unwrap_err();
        match err {
            RulePatError::FileReadError { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
