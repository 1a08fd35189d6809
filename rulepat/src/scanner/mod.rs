//! 规则文件扫描模块
//! 统一导出候选文件遍历与单文件扫描组件
pub mod file_scanner;
pub mod walker;

pub use file_scanner::FileScanner;
pub use walker::CandidateWalker;
