//! Snort/Suricata `content:"..."` 字段提取
//! 状态机：定位关键字 → 跳过空白 → 冒号 → 跳过空白 → 开引号 → 未转义的闭引号
//! 全程按字节扫描，字面量原样保留（包括非 UTF-8 字节）

use crate::utils::log_format::preview_bytes;

/// 内容关键字
const CONTENT_KEYWORD: &[u8] = b"content";

/// 单次匹配尝试的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentStep<'a> {
    /// 取到一个字面量，`next` 为闭引号之后的位置
    Matched { pattern: &'a [u8], next: usize },
    /// 关键字后不是 `:"` 结构，放弃本候选，从关键字之后继续扫描
    Skipped { next: usize },
    /// 本行再无可提取内容（无关键字或字面量未闭合）
    Exhausted,
}

/// 与 Python `string.whitespace` 一致的 ASCII 空白集合
#[inline(always)]
fn is_rule_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// 从 pos 开始找关键字
fn find_keyword(line: &[u8], pos: usize) -> Option<usize> {
    line.get(pos..)?
        .windows(CONTENT_KEYWORD.len())
        .position(|window| window == CONTENT_KEYWORD)
        .map(|offset| pos + offset)
}

/// 从 pos 开始找第一个非空白字节
fn next_not_space(line: &[u8], pos: usize) -> Option<usize> {
    line.get(pos..)?
        .iter()
        .position(|&b| !is_rule_whitespace(b))
        .map(|offset| pos + offset)
}

/// 从开引号之后找第一个前一字节不是反斜杠的引号
fn find_closing_quote(line: &[u8], open: usize) -> Option<usize> {
    let mut search_from = open + 1;
    loop {
        let quote = search_from + line.get(search_from..)?.iter().position(|&b| b == b'"')?;
        if line[quote - 1] != b'\\' {
            return Some(quote);
        }
        search_from = quote + 1;
    }
}

/// 从 cursor 开始尝试提取一个 content 字面量
pub fn next_content_match(line: &[u8], cursor: usize) -> ContentStep<'_> {
    let Some(found) = find_keyword(line, cursor) else {
        return ContentStep::Exhausted;
    };
    let token_end = found + CONTENT_KEYWORD.len();

    let colon = next_not_space(line, token_end).filter(|&pos| line[pos] == b':');
    let Some(colon) = colon else {
        return ContentStep::Skipped { next: token_end };
    };

    let open = next_not_space(line, colon + 1).filter(|&pos| line[pos] == b'"');
    let Some(open) = open else {
        return ContentStep::Skipped { next: token_end };
    };

    match find_closing_quote(line, open) {
        Some(close) => ContentStep::Matched {
            pattern: &line[open + 1..close],
            next: close + 1,
        },
        None => ContentStep::Exhausted,
    }
}

/// 提取一条逻辑行中全部 content 字面量（保留转义标记，不做反转义）
pub fn extract_content_patterns(line: &[u8]) -> Vec<Vec<u8>> {
    let mut patterns = Vec::new();
    let mut cursor = 0;

    loop {
        match next_content_match(line, cursor) {
            ContentStep::Matched { pattern, next } => {
                // 空字面量 content:"" 不产出模式
                if !pattern.is_empty() {
                    log::trace!("content literal: {}", preview_bytes(pattern, 64));
                    patterns.push(pattern.to_vec());
                }
                cursor = next;
            }
            ContentStep::Skipped { next } => cursor = next,
            ContentStep::Exhausted => break,
        }
    }

    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(line: &str) -> Vec<Vec<u8>> {
        extract_content_patterns(line.as_bytes())
    }

    #[test]
    fn test_single_content_field() {
        let line = r#"alert tcp any any -> any 80 (msg:"x"; content:"GET /admin"; sid:1;)"#;
        assert_eq!(extract(line), vec![b"GET /admin".to_vec()]);
    }

    #[test]
    fn test_escaped_quote_stays_inside_literal() {
        let line = r#"alert tcp any any -> any any (content:"A\"B"; sid:2;)"#;
        assert_eq!(extract(line), vec![br#"A\"B"#.to_vec()]);
    }

    #[test]
    fn test_two_fields_in_order() {
        let line = r#"alert tcp any any -> any any (content:"first"; nocase; content:"second";)"#;
        assert_eq!(extract(line), vec![b"first".to_vec(), b"second".to_vec()]);
    }

    #[test]
    fn test_whitespace_around_colon() {
        assert_eq!(extract(r#"(content : "X";)"#), vec![b"X".to_vec()]);
        assert_eq!(extract("(content\t:\t\"X\";)"), vec![b"X".to_vec()]);
    }

    #[test]
    fn test_missing_quote_yields_nothing() {
        assert!(extract("(content:X;)").is_empty());
    }

    #[test]
    fn test_missing_quote_does_not_stop_later_fields() {
        assert_eq!(extract(r#"content:X content:"Y""#), vec![b"Y".to_vec()]);
        assert_eq!(extract(r#"content:content:"x""#), vec![b"x".to_vec()]);
    }

    #[test]
    fn test_unterminated_literal_stops_line() {
        let line = r#"(content:"open; content:"never reached"#;
        // 第一个字面量在 `content:"` 的引号处闭合，第二个未闭合
        assert_eq!(extract(line), vec![b"open; content:".to_vec()]);
        assert!(extract(r#"(content:"abc\"#).is_empty());
    }

    #[test]
    fn test_missing_colon_does_not_stop_scan() {
        let line = r#"(msg:"contents and content-type"; content:"hit";)"#;
        assert_eq!(extract(line), vec![b"hit".to_vec()]);
    }

    #[test]
    fn test_step_reports_skip_position() {
        let line = br#"content-x content:"y""#;
        assert_eq!(next_content_match(line, 0), ContentStep::Skipped { next: 7 });
        assert_eq!(
            next_content_match(line, 7),
            ContentStep::Matched { pattern: b"y", next: line.len() }
        );
        assert_eq!(next_content_match(line, line.len()), ContentStep::Exhausted);
    }

    #[test]
    fn test_hex_block_literal_kept_raw() {
        let line = r#"(content:"|00 01|abc|ff|"; content:"";)"#;
        assert_eq!(extract(line), vec![b"|00 01|abc|ff|".to_vec()]);
    }

    #[test]
    fn test_non_utf8_bytes_kept_verbatim() {
        let line = b"(msg:\"\xd0\xbf\"; content:\"\xff\x00A\";)";
        assert_eq!(extract_content_patterns(line), vec![b"\xff\x00A".to_vec()]);
    }
}
