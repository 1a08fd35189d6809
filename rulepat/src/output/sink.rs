//! 模式输出：一行一个模式
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{RulePatError, RulePatResult};

/// 输出文件写入器，扫描开始前创建，提前暴露"不可写"错误
pub struct PatternSink {
    path: PathBuf,
    writer: BufWriter<File>,
    written: usize,
}

impl PatternSink {
    /// 创建（截断）输出文件
    pub fn create(path: &Path) -> RulePatResult<Self> {
        let file = File::create(path).map_err(|source| RulePatError::OutputError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    /// 追加一批模式，保持传入顺序；模式字节原样写出
    pub fn write_patterns<'a, I>(&mut self, patterns: I) -> RulePatResult<()>
    where
        I: IntoIterator<Item = &'a Vec<u8>>,
    {
        for pattern in patterns {
            self.writer
                .write_all(pattern)
                .and_then(|()| self.writer.write_all(b"\n"))
                .map_err(|source| self.output_error(source))?;
            self.written += 1;
        }
        Ok(())
    }

    /// 刷盘并关闭
    pub fn finish(mut self) -> RulePatResult<usize> {
        self.writer
            .flush()
            .map_err(|source| self.output_error(source))?;
        Ok(self.written)
    }

    fn output_error(&self, source: std::io::Error) -> RulePatError {
        RulePatError::OutputError {
            path: self.path.clone(),
            source,
        }
    }
}
