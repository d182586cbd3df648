//! 트라이그램 빈도 테이블과 프로필 생성

use std::collections::BTreeMap;

use super::tokenizer::{tokenize, word_trigrams};

/// 트라이그램 -> 빈도 테이블
///
/// 키 순서는 의미가 없지만 내부적으로 사전순으로 유지되므로
/// 벡터화와 순회 결과가 항상 결정적입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrigramTable {
    counts: BTreeMap<String, u64>,
}

impl TrigramTable {
    /// 빈 테이블 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 빈도 지정 (기존 값은 덮어씀)
    pub fn insert(&mut self, trigram: impl Into<String>, count: u64) -> Option<u64> {
        self.counts.insert(trigram.into(), count)
    }

    /// 빈도 1 증가
    pub fn increment(&mut self, trigram: impl Into<String>) {
        *self.counts.entry(trigram.into()).or_insert(0) += 1;
    }

    /// 빈도 조회 (없으면 None)
    pub fn get(&self, trigram: &str) -> Option<u64> {
        self.counts.get(trigram).copied()
    }

    /// 빈도 조회 (없으면 0)
    pub fn count(&self, trigram: &str) -> u64 {
        self.get(trigram).unwrap_or(0)
    }

    pub fn contains(&self, trigram: &str) -> bool {
        self.counts.contains_key(trigram)
    }

    /// 서로 다른 트라이그램 수
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 전체 빈도 합
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// 키 사전순 순회
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// 키 사전순 목록
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// 빈도 내림차순 정렬 (동률이면 키 사전순)
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// 빈도 상위 `limit`개만 남긴 새 테이블
    ///
    /// `limit`이 0이면 전체를 복사합니다.
    pub fn truncated(&self, limit: usize) -> Self {
        if limit == 0 || limit >= self.len() {
            return self.clone();
        }

        self.ranked()
            .into_iter()
            .take(limit)
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

impl FromIterator<(String, u64)> for TrigramTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, u64)> for TrigramTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }
}

/// 텍스트의 트라이그램 빈도 테이블 생성
///
/// `limit`이 0이면 모든 트라이그램을, 그 외에는 빈도 상위 `limit`개를 반환합니다.
/// 동률은 트라이그램 사전순으로 결정됩니다.
///
/// # Examples
/// ```
/// use langmatch::ngram::build_profile;
///
/// let table = build_profile("a a", 0);
/// assert_eq!(table.count("<a>"), 2);
/// ```
pub fn build_profile(text: &str, limit: usize) -> TrigramTable {
    let mut table = TrigramTable::new();
    for word in tokenize(text) {
        for trigram in word_trigrams(&word) {
            table.increment(trigram);
        }
    }

    log::debug!("트라이그램 {}종 집계 (상한 {})", table.len(), limit);
    table.truncated(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_profile_words() {
        let table = build_profile("the cat sat.", 0);
        for t in ["<th", "the", "he>", "<ca", "cat", "at>", "<sa", "sat"] {
            assert!(table.contains(t), "{} 누락", t);
        }
        // "at>"는 cat, sat 양쪽에서 등장
        assert_eq!(table.count("at>"), 2);
        assert_eq!(table.count("the"), 1);
        assert_eq!(table.total(), 9);
    }

    #[test]
    fn test_repeated_single_letter() {
        let table = build_profile("a a", 0);
        assert_eq!(table.len(), 1);
        assert_eq!(table.count("<a>"), 2);
    }

    #[test]
    fn test_empty_text() {
        assert!(build_profile("", 0).is_empty());
        assert!(build_profile("?!. ,", 10).is_empty());
    }

    #[test]
    fn test_truncation_keeps_most_frequent() {
        let table = build_profile("aa aa aa bb bb cc", 2);
        assert_eq!(table.len(), 2);
        // <aa, aa> 가 각각 3회로 최상위
        assert_eq!(table.count("<aa"), 3);
        assert_eq!(table.count("aa>"), 3);
        assert!(!table.contains("<bb"));
    }

    #[test]
    fn test_truncation_tie_break_is_lexicographic() {
        let mut table = TrigramTable::new();
        table.insert("zzz", 5);
        table.insert("bbb", 2);
        table.insert("aaa", 2);
        table.insert("ccc", 2);

        let top = table.truncated(2);
        assert_eq!(top.len(), 2);
        assert!(top.contains("zzz"));
        assert!(top.contains("aaa"));
    }

    #[test]
    fn test_truncation_larger_than_table() {
        let table = build_profile("abc", 50);
        assert_eq!(table, build_profile("abc", 0));
    }

    #[test]
    fn test_ranked_order() {
        let table: TrigramTable = vec![("abc", 1), ("xyz", 4), ("mno", 4)].into_iter().collect();
        let ranked = table.ranked();
        assert_eq!(ranked, vec![("mno", 4), ("xyz", 4), ("abc", 1)]);
    }
}
