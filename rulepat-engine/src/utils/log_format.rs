//! 日志中的模式预览
//! 模式是规则里的原始字节（可能含 `\"` 转义标记、`|..|` 十六进制块或非 UTF-8 字节），
//! 预览时按字节转义成单行 ASCII，不改动原始数据
use std::ascii;
use std::fmt;

/// 字节模式预览：逐字节 `escape_default`，超过 max_bytes 时截断并标注剩余字节数
pub fn preview_bytes(bytes: &[u8], max_bytes: usize) -> impl fmt::Display + '_ {
    struct BytesPreview<'a> {
        bytes: &'a [u8],
        max_bytes: usize,
    }

    impl fmt::Display for BytesPreview<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let shown = self.bytes.len().min(self.max_bytes);
            for &b in &self.bytes[..shown] {
                write!(f, "{}", ascii::escape_default(b))?;
            }
            if shown < self.bytes.len() {
                write!(f, "…(+{} bytes)", self.bytes.len() - shown)?;
            }
            Ok(())
        }
    }

    BytesPreview { bytes, max_bytes }
}
