//! ClamAV ndb 十六进制签名提取
//! 记录格式：`SigName:TargetType:Offset:HexSignature[:MinFL[:MaxFL]]`

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

use crate::utils::log_format::preview_bytes;

/// 合法的十六进制字符（仅大写，字段先转大写再校验）
pub static HEX_CHARSET: Lazy<FxHashSet<u8>> =
    Lazy::new(|| b"0123456789ABCDEF".iter().copied().collect());

/// 签名字段位于第3个冒号之后
const SIGNATURE_FIELD_COLONS: usize = 3;

/// 字段分隔符
const FIELD_SEPARATOR: u8 = b':';

/// 找第 n 次（从1计数）出现的位置
fn find_nth(line: &[u8], byte: u8, n: usize) -> Option<usize> {
    line.iter()
        .enumerate()
        .filter(|&(_, &b)| b == byte)
        .nth(n.checked_sub(1)?)
        .map(|(pos, _)| pos)
}

/// 去掉行尾终止符（`\n` 或 `\r\n`）
fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// 非空、偶数长度、全部为十六进制字符
fn is_valid_hex(field: &[u8]) -> bool {
    !field.is_empty() && field.len() % 2 == 0 && field.iter().all(|b| HEX_CHARSET.contains(b))
}

/// 提取一行中的签名，规范化为 `|HEX|`；字段缺失或校验失败返回 None
pub fn extract_hex_pattern(line: &[u8]) -> Option<Vec<u8>> {
    let body = strip_line_terminator(line);
    let start = find_nth(body, FIELD_SEPARATOR, SIGNATURE_FIELD_COLONS)? + 1;
    let end = body[start..]
        .iter()
        .position(|&b| b == FIELD_SEPARATOR)
        .map_or(body.len(), |offset| start + offset);

    let field = body[start..end].to_ascii_uppercase();
    if !is_valid_hex(&field) {
        log::trace!("rejected signature field: {}", preview_bytes(&field, 32));
        return None;
    }

    let mut pattern = Vec::with_capacity(field.len() + 2);
    pattern.push(b'|');
    pattern.extend_from_slice(&field);
    pattern.push(b'|');
    Some(pattern)
}
