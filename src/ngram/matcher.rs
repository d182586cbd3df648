//! 언어 매처
//!
//! 디렉토리의 언어 프로필을 한 번에 로드한 뒤,
//! 입력 텍스트의 트라이그램 테이블과 모든 프로필의 코사인 유사도를 계산하여
//! 상위 N개 언어를 반환합니다.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};
use std::fs;
use std::path::Path;

use serde::Serialize;

use super::error::{LangError, Result};
use super::profile::{build_profile, TrigramTable};
use super::similarity::cosine_similarity;
use super::store::load_profile;

/// 질의 텍스트 트라이그램 테이블의 기본 상한
pub const DEFAULT_QUERY_CAP: usize = 200;

/// 언어 하나에 대한 매칭 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageMatch {
    /// 언어 레이블 (프로필 파일 이름의 첫 부분)
    pub language: String,
    /// 코사인 유사도 (0.0 ~ 1.0)
    pub similarity: f64,
}

/// 유사도 내림차순으로 정렬된 매칭 결과
pub type MatchResult = Vec<LanguageMatch>;

/// 상위 N 선택용 후보. 유사도가 높을수록, 동률이면 레이블이 사전순으로 앞설수록 큼
#[derive(Debug)]
struct Candidate<'a> {
    similarity: f64,
    language: &'a str,
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate<'_> {}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.similarity
            .total_cmp(&other.similarity)
            .then_with(|| other.language.cmp(self.language))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 언어별 참조 프로필을 보유한 매처
///
/// 생성 후에는 읽기 전용이므로 여러 스레드에서 `&LanguageMatcher`로
/// 동시에 `score`를 호출해도 안전합니다.
#[derive(Debug, Clone, Default)]
pub struct LanguageMatcher {
    profiles: BTreeMap<String, TrigramTable>,
}

impl LanguageMatcher {
    /// 디렉토리의 모든 프로필 파일을 로드하여 매처 생성
    ///
    /// 파일 이름 `<언어>.<임의>`에서 첫 번째 `.` 앞부분을 언어 레이블로 사용합니다.
    /// 숨김 파일(`.`으로 시작)과 하위 디렉토리는 건너뜁니다.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut profiles = BTreeMap::new();
        for path in paths {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                log::warn!("UTF-8이 아닌 파일 이름 건너뜀: {}", path.display());
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            let language = name.split('.').next().unwrap_or(name).to_string();
            let table = load_profile(&path).map_err(|e| {
                log::error!("프로필 로드 실패 {}: {}", path.display(), e);
                e
            })?;

            log::debug!("프로필 로드: {} ({}개 항목)", language, table.len());
            if profiles.insert(language.clone(), table).is_some() {
                log::warn!("언어 {}의 프로필이 중복되어 {}로 대체됨", language, name);
            }
        }

        log::info!("{}개 언어 프로필 로드: {}", profiles.len(), dir.display());
        Ok(Self { profiles })
    }

    /// 메모리의 테이블로 매처 생성
    pub fn from_profiles<I, S>(profiles: I) -> Self
    where
        I: IntoIterator<Item = (S, TrigramTable)>,
        S: Into<String>,
    {
        Self {
            profiles: profiles.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// 로드된 언어 레이블 (사전순)
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// 언어의 참조 프로필
    pub fn profile(&self, language: &str) -> Option<&TrigramTable> {
        self.profiles.get(language)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// 텍스트와 가장 유사한 언어 상위 `n`개
    ///
    /// `cap`은 질의 텍스트 트라이그램 테이블의 상한입니다 (0이면 무제한).
    ///
    /// # Errors
    /// - 프로필이 없으면 `LangError::EmptyMatcher`
    /// - 텍스트에 트라이그램이 없으면 `LangError::DegenerateInput`
    pub fn score(&self, text: &str, n: usize, cap: usize) -> Result<MatchResult> {
        if self.is_empty() {
            return Err(LangError::EmptyMatcher);
        }
        let query = build_profile(text, cap);
        self.score_table(&query, n)
    }

    /// 이미 만들어진 질의 테이블로 상위 `n`개 선택
    ///
    /// 한 언어라도 유사도 계산에 실패하면 전체가 실패합니다.
    pub fn score_table(&self, query: &TrigramTable, n: usize) -> Result<MatchResult> {
        if self.is_empty() {
            return Err(LangError::EmptyMatcher);
        }

        // 크기 n의 최소 힙: 가장 낮은 후보가 맨 위
        let mut heap: BinaryHeap<Reverse<Candidate>> =
            BinaryHeap::with_capacity(n.min(self.len()) + 1);
        for (language, profile) in &self.profiles {
            let similarity = cosine_similarity(profile, query)?;
            log::trace!("{}: {:.6}", language, similarity);

            heap.push(Reverse(Candidate {
                similarity,
                language: language.as_str(),
            }));
            if heap.len() > n {
                heap.pop();
            }
        }

        Ok(heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(c)| LanguageMatch {
                language: c.language.to_string(),
                similarity: c.similarity,
            })
            .collect())
    }

    /// 가장 유사한 언어 하나
    pub fn recognize(&self, text: &str, cap: usize) -> Result<LanguageMatch> {
        self.score(text, 1, cap)?
            .into_iter()
            .next()
            .ok_or(LangError::EmptyMatcher)
    }
}
