//! 提取运行配置：方言 + 输入目录 + 输出目标，无配置文件

use std::path::PathBuf;

use rulepat_engine::Dialect;

use crate::error::RulePatResult;

/// 遍历选项
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// 是否跟随符号链接
    pub follow_links: bool,
    /// 目录项按文件名排序，保证多次运行输出一致
    pub sort_entries: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            follow_links: false,
            sort_entries: true,
        }
    }
}

/// 完整提取配置
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub dialect: Dialect,
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub options: ExtractOptions,
}

impl ExtractConfig {
    pub fn new(dialect: Dialect, input_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            dialect,
            input_dir: input_dir.into(),
            output: output.into(),
            options: ExtractOptions::default(),
        }
    }

    /// 从方言名构建（"snort" / "suricata" / "clamav"），方言非法时立即失败
    pub fn from_dialect_name(
        dialect: &str,
        input_dir: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> RulePatResult<Self> {
        Ok(Self::new(dialect.parse()?, input_dir, output))
    }
}

/// 自定义构建器（链式 API）
#[derive(Debug, Clone)]
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            config: ExtractConfig::new(dialect, ".", "patterns.txt"),
        }
    }

    pub fn input_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_dir = path.into();
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = path.into();
        self
    }

    pub fn follow_links(mut self, follow: bool) -> Self {
        self.config.options.follow_links = follow;
        self
    }

    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.config.options.sort_entries = sort;
        self
    }

    pub fn build(self) -> ExtractConfig {
        self.config
    }
}
