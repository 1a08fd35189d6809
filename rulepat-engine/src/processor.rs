//! 逐行扫描驱动：物理行 → (续行拼接) → 逻辑行 → 方言提取 → 规范化模式
use std::io::{self, BufRead};

use crate::core::Dialect;
use crate::source::{extract_content_patterns, extract_hex_pattern, LineJoiner, PhysicalLines};
use crate::utils::log_format::preview_bytes;

/// 模式处理器，启动时按方言选定一次
#[derive(Debug, Clone, Copy)]
pub struct PatternProcessor {
    dialect: Dialect,
}

impl PatternProcessor {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// 从一条逻辑行中提取规范化模式（按行内从左到右的顺序）
    pub fn extract_from_line(&self, line: &[u8]) -> Vec<Vec<u8>> {
        match self.dialect {
            Dialect::Snort => extract_content_patterns(line),
            Dialect::Clamav => extract_hex_pattern(line).into_iter().collect(),
        }
    }

    /// 扫描整个输入源，返回该文件全部模式（文件内行序）
    /// 只有底层读取失败才返回错误，规则文本异常一律按"无匹配"处理
    pub fn scan_reader<R: BufRead>(&self, reader: R) -> io::Result<Vec<Vec<u8>>> {
        let mut patterns = Vec::new();
        let mut line_count = 0usize;

        if self.dialect.joins_continuations() {
            for logical in LineJoiner::from_reader(reader) {
                line_count += 1;
                patterns.extend(self.extract_from_line(&logical?));
            }
        } else {
            for line in PhysicalLines::new(reader) {
                line_count += 1;
                patterns.extend(self.extract_from_line(&line?));
            }
        }

        if let Some(first) = patterns.first() {
            log::trace!(
                "[{}] scanned {} logical lines, {} patterns, first: {}",
                self.dialect,
                line_count,
                patterns.len(),
                preview_bytes(first, 48)
            );
        }

        Ok(patterns)
    }

    /// 直接扫描内存中的规则文本
    pub fn scan_bytes(&self, text: &[u8]) -> Vec<Vec<u8>> {
        // 从切片读取不会产生 IO 错误
        self.scan_reader(text).unwrap_or_default()
    }
}

impl From<Dialect> for PatternProcessor {
    fn from(dialect: Dialect) -> Self {
        Self::new(dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snort_file_with_continuation() {
        let text = concat!(
            "# comment line with content but no literal\n",
            "alert tcp any any -> any 80 (content:\"one\"; content:\"two\";)\n",
            "alert tcp any any -> any any (content:\"AB\\\n",
            "CD\")\n",
        );
        let patterns = PatternProcessor::new(Dialect::Snort).scan_bytes(text.as_bytes());
        assert_eq!(patterns, vec![b"one".to_vec(), b"two".to_vec(), b"ABCD".to_vec()]);
    }

    #[test]
    fn test_clamav_file_mixed_lines() {
        let text = b"Sig.A:0:*:48656C6C6F\nSig.B:1:EP+0:4d5a:73\nSig.C:0:*:4d5a?0\nbroken\n";
        let patterns = PatternProcessor::new(Dialect::Clamav).scan_bytes(text);
        assert_eq!(patterns, vec![b"|48656C6C6F|".to_vec(), b"|4D5A|".to_vec()]);
    }

    #[test]
    fn test_clamav_does_not_join_continuations() {
        let text = b"A:0:*:4142\\\nB:0:*:4344\n";
        let patterns = PatternProcessor::new(Dialect::Clamav).scan_bytes(text);
        assert_eq!(patterns, vec![b"|4344|".to_vec()]);
    }

    #[test]
    fn test_scan_is_repeatable() {
        let text = b"x (content:\"a\"; content:\"a\";)\n";
        let processor = PatternProcessor::from(Dialect::Snort);
        assert_eq!(processor.scan_bytes(text), processor.scan_bytes(text));
        assert_eq!(processor.scan_bytes(text), vec![b"a".to_vec(), b"a".to_vec()]);
    }
}
