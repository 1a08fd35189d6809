/// 一次提取运行产出的模式语料（每个模式为规则中的原始字节）
/// 顺序 = 文件遍历顺序 → 文件内行序 → 行内从左到右的匹配顺序；不去重
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    patterns: Vec<Vec<u8>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加单个文件的全部模式（保持原顺序）
    pub fn extend_from_file(&mut self, patterns: Vec<Vec<u8>>) {
        self.patterns.extend(patterns);
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[Vec<u8>] {
        &self.patterns
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Vec<u8>;
    type IntoIter = std::slice::Iter<'a, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_keeps_order_and_duplicates() {
        let mut corpus = Corpus::new();
        corpus.extend_from_file(vec![b"GET".to_vec(), b"|4D5A|".to_vec()]);
        corpus.extend_from_file(vec![]);
        corpus.extend_from_file(vec![b"GET".to_vec()]);

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.patterns(), &[b"GET".to_vec(), b"|4D5A|".to_vec(), b"GET".to_vec()]);
        assert_eq!((&corpus).into_iter().count(), 3);
    }
}
