//! 反斜杠续行拼接（仅 Snort 方言）
//! 物理行保留行终止符，行尾 `\` 紧挨终止符即视为续行

use std::io::{self, BufRead};

/// 按物理行读取原始字节，保留 `\n` 终止符
pub struct PhysicalLines<R> {
    reader: R,
}

impl<R: BufRead> PhysicalLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Iterator for PhysicalLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    }
}

/// 返回去掉续行标记（反斜杠 + 终止符）后的长度；非续行返回 None
fn continuation_cut(line: &[u8]) -> Option<usize> {
    // 少于2个字节的行不可能携带续行标记
    if line.len() < 2 {
        return None;
    }
    if line.ends_with(b"\\\n") {
        Some(line.len() - 2)
    } else if line.ends_with(b"\\\r\n") {
        Some(line.len() - 3)
    } else {
        None
    }
}

/// 逻辑行迭代器：把续行拼接为一条完整规则文本
pub struct LineJoiner<I> {
    lines: I,
}

impl<I> LineJoiner<I>
where
    I: Iterator<Item = io::Result<Vec<u8>>>,
{
    pub fn new(lines: I) -> Self {
        Self { lines }
    }
}

impl<R: BufRead> LineJoiner<PhysicalLines<R>> {
    pub fn from_reader(reader: R) -> Self {
        Self::new(PhysicalLines::new(reader))
    }
}

impl<I> Iterator for LineJoiner<I>
where
    I: Iterator<Item = io::Result<Vec<u8>>>,
{
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut logical = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };

        while let Some(cut) = continuation_cut(&logical) {
            logical.truncate(cut);
            match self.lines.next() {
                Some(Ok(next_line)) => logical.extend_from_slice(&next_line),
                Some(Err(e)) => return Some(Err(e)),
                // 文件结束，续行标记已去掉
                None => break,
            }
        }

        Some(Ok(logical))
    }
}
