use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::CoreError;

/// 规则方言枚举，每种方言对应一套模式提取语法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Snort/Suricata 规则：`content:"..."` 字段
    Snort,
    /// ClamAV ndb 规则：冒号分隔记录的第4字段为十六进制签名
    Clamav,
}

impl Dialect {
    /// 该方言规则文件的扩展名（不含点）
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Dialect::Snort => "rules",
            Dialect::Clamav => "ndb",
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Dialect::Snort => "snort",
            Dialect::Clamav => "clamav",
        }
    }

    /// 是否需要拼接反斜杠续行（仅 Snort）
    pub fn joins_continuations(&self) -> bool {
        matches!(self, Dialect::Snort)
    }

    /// 按扩展名判断路径是否属于本方言
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        file_name
            .strip_suffix(self.file_suffix())
            .is_some_and(|stem| stem.ends_with('.'))
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Dialect {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // Suricata 与 Snort 共用同一规则格式
            "snort" | "suricata" => Ok(Dialect::Snort),
            "clamav" => Ok(Dialect::Clamav),
            _ => Err(CoreError::UnsupportedDialect(s.to_string())),
        }
    }
}
