//! 테스트 파일 디렉토리 평가
//!
//! 파일 이름 `<이름>.<언어 약어>[.…]`의 약어로 정답을 정하고,
//! 매처의 추정 결과와 비교해 정확도를 집계합니다.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::corpus::read_text;
use crate::ngram::{LangError, LanguageMatcher, Result};

/// 파일 하나의 평가 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRow {
    /// 파일 이름
    pub file: String,
    /// 정답 언어
    pub expected: String,
    /// 추정 언어
    pub guessed: String,
    /// 추정 언어의 코사인 유사도
    pub similarity: f64,
}

impl EvaluationRow {
    pub fn is_correct(&self) -> bool {
        self.expected == self.guessed
    }
}

/// 디렉토리 평가 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub dir: PathBuf,
    /// 파일 이름순
    pub rows: Vec<EvaluationRow>,
}

impl EvaluationReport {
    pub fn correct(&self) -> usize {
        self.rows.iter().filter(|r| r.is_correct()).count()
    }

    pub fn incorrect(&self) -> usize {
        self.rows.len() - self.correct()
    }

    /// 정답률 (파일이 없으면 0.0)
    pub fn accuracy(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.correct() as f64 / self.rows.len() as f64
    }
}

/// 파일 이름의 두 번째 `.` 구간을 언어 약어로 보고 레이블 조회
///
/// ```
/// use std::collections::BTreeMap;
/// use langmatch::evaluation::label_from_file_name;
///
/// let labels = BTreeMap::from([("en".to_string(), "English".to_string())]);
/// assert_eq!(label_from_file_name("ep-00-01-17.en.txt", &labels).unwrap(), "English");
/// ```
pub fn label_from_file_name<'a>(
    name: &str,
    labels: &'a BTreeMap<String, String>,
) -> Result<&'a str> {
    name.split('.')
        .nth(1)
        .and_then(|abbrev| labels.get(abbrev))
        .map(String::as_str)
        .ok_or_else(|| LangError::UnknownLabel(name.to_string()))
}

/// 디렉토리의 모든 테스트 파일을 판별하고 결과 집계
///
/// 숨김 파일은 건너뜁니다. 판별 실패는 즉시 반환합니다.
pub fn evaluate_dir(
    matcher: &LanguageMatcher,
    dir: impl AsRef<Path>,
    labels: &BTreeMap<String, String>,
    encoding: &str,
    cap: usize,
) -> Result<EvaluationReport> {
    let dir = dir.as_ref();

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if !name.starts_with('.') {
                files.push((name.to_string(), path.clone()));
            }
        }
    }
    files.sort();

    let mut rows = Vec::with_capacity(files.len());
    for (name, path) in files {
        let expected = label_from_file_name(&name, labels)?.to_string();
        let text = read_text(&path, encoding)?;
        let guess = matcher.recognize(&text, cap)?;

        rows.push(EvaluationRow {
            file: name,
            expected,
            guessed: guess.language,
            similarity: guess.similarity,
        });
    }

    let report = EvaluationReport {
        dir: dir.to_path_buf(),
        rows,
    };
    log::info!(
        "{}: 정답 {} / 오답 {}",
        dir.display(),
        report.correct(),
        report.incorrect()
    );
    Ok(report)
}
