//! 候选规则文件遍历：递归枚举目录，按方言扩展名过滤
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rulepat_engine::Dialect;
use walkdir::WalkDir;

use crate::config::ExtractOptions;
use crate::error::{RulePatError, RulePatResult};

/// 候选文件遍历器
#[derive(Debug, Clone)]
pub struct CandidateWalker {
    dialect: Dialect,
    options: ExtractOptions,
}

impl CandidateWalker {
    pub fn new(dialect: Dialect, options: ExtractOptions) -> Self {
        Self { dialect, options }
    }

    /// 列出 root 下所有属于本方言的规则文件，按遍历顺序返回
    /// root 不存在或不是目录属于调用错误，直接返回 Err；
    /// 遍历途中不可读的目录项以 `Err(WalkError)` 留在结果里，交给收集器计入失败
    pub fn candidates(&self, root: &Path) -> RulePatResult<Vec<RulePatResult<PathBuf>>> {
        if !root.is_dir() {
            return Err(RulePatError::InvalidInput(format!(
                "规则目录不存在或不是目录: {}",
                root.display()
            )));
        }

        let mut walker = WalkDir::new(root).follow_links(self.options.follow_links);
        if self.options.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let mut candidates = Vec::new();
        let mut skipped = 0usize;
        let mut walk_errors = 0usize;

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Unreadable entry under {}: {}", root.display(), e);
                    walk_errors += 1;
                    candidates.push(Err(RulePatError::WalkError(e)));
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let matched = entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.dialect.matches_file_name(name));
            if matched {
                candidates.push(Ok(entry.into_path()));
            } else {
                skipped += 1;
            }
        }

        debug!(
            "Found {} .{} candidates under {} ({} other files skipped, {} walk errors)",
            candidates.len() - walk_errors,
            self.dialect.file_suffix(),
            root.display(),
            skipped,
            walk_errors
        );

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_filters_by_extension_recursively_in_name_order() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("b.rules"), "").unwrap();
        fs::write(dir.path().join("a.rules"), "").unwrap();
        fs::write(dir.path().join("main.ndb"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("nested/deeper/c.rules"), "").unwrap();

        let walker = CandidateWalker::new(Dialect::Snort, ExtractOptions::default());
        let found: Vec<PathBuf> = walker
            .candidates(dir.path())
            .unwrap()
            .into_iter()
            .collect::<RulePatResult<_>>()
            .unwrap();

        assert_eq!(
            found,
            vec![
                dir.path().join("a.rules"),
                dir.path().join("b.rules"),
                dir.path().join("nested/deeper/c.rules"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_error_is_returned_in_place() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/a.rules"), "").unwrap();
        // 指回根目录的链接：跟随链接时 walkdir 报告循环
        std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/loop")).unwrap();

        let options = ExtractOptions {
            follow_links: true,
            ..ExtractOptions::default()
        };
        let candidates = CandidateWalker::new(Dialect::Snort, options)
            .candidates(dir.path())
            .unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].as_ref().unwrap(), &dir.path().join("sub/a.rules"));
        let err = candidates[1].as_ref().unwrap_err();
        assert!(matches!(err, RulePatError::WalkError(_)));
        assert_eq!(err.failed_path(), Some(dir.path().join("sub/loop").as_path()));
    }

    #[test]
    fn test_missing_root_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let walker = CandidateWalker::new(Dialect::Clamav, ExtractOptions::default());
        let err = walker.candidates(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, RulePatError::InvalidInput(_)));
    }
}
