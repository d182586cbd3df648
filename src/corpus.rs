//! 학습 말뭉치 읽기 및 언어 프로필 생성
//!
//! 말뭉치 파일마다 언어와 인코딩을 명시적으로 지정할 수 있으며,
//! 지정이 없으면 `<언어>-<인코딩>...` 파일 이름 규칙으로 해석합니다.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::ngram::{build_profile, save_profile, LangError, Result};

/// 말뭉치 하나의 언어/인코딩 정보
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CorpusEntry {
    pub language: String,
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

/// 프로필을 만들 학습 말뭉치 파일
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainingCorpus {
    pub path: PathBuf,
    pub language: String,
    pub encoding: String,
}

/// `<언어>-<인코딩>[.확장자]` 형식의 파일 이름 해석
///
/// ```
/// use langmatch::corpus::entry_from_file_name;
/// let entry = entry_from_file_name("Greek-iso-8859-7.txt").unwrap();
/// assert_eq!(entry.language, "Greek");
/// assert_eq!(entry.encoding, "iso-8859-7");
/// ```
pub fn entry_from_file_name(name: &str) -> Result<CorpusEntry> {
    let Some((language, rest)) = name.split_once('-') else {
        return Err(LangError::UnknownLabel(name.to_string()));
    };
    let encoding = rest.split('.').next().unwrap_or(rest);

    if language.is_empty() || encoding.is_empty() {
        return Err(LangError::UnknownLabel(name.to_string()));
    }

    Ok(CorpusEntry {
        language: language.to_string(),
        encoding: encoding.to_string(),
    })
}

/// 디렉토리의 학습 말뭉치 목록 (경로순)
///
/// `overrides`에 파일 이름이 있으면 그 값을, 없으면 파일 이름 규칙을 사용합니다.
/// 숨김 파일은 건너뜁니다.
pub fn discover_corpora(
    dir: impl AsRef<Path>,
    overrides: &BTreeMap<String, CorpusEntry>,
) -> Result<Vec<TrainingCorpus>> {
    let mut corpora = Vec::new();

    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        let entry = match overrides.get(name) {
            Some(entry) => entry.clone(),
            None => entry_from_file_name(name)?,
        };

        corpora.push(TrainingCorpus {
            path: path.clone(),
            language: entry.language,
            encoding: entry.encoding,
        });
    }

    corpora.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(corpora)
}

/// 인코딩 레이블 해석 (`utf-8`, `latin1`, `iso-8859-7`, `windows-1252` 등)
pub fn lookup_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| LangError::UnknownEncoding(label.to_string()))
}

/// 파일을 지정한 인코딩으로 읽어 문자열로 변환
///
/// 잘못된 바이트 열은 U+FFFD로 대체됩니다.
pub fn read_text(path: impl AsRef<Path>, encoding: &str) -> Result<String> {
    let path = path.as_ref();
    let encoding = lookup_encoding(encoding)?;
    let bytes = fs::read(path)?;

    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        log::warn!(
            "{}: {} 디코딩 중 잘못된 바이트가 대체됨",
            path.display(),
            used.name()
        );
    }
    Ok(text.into_owned())
}

/// 말뭉치마다 프로필을 만들어 `<언어>.<size>` 파일로 저장
///
/// 저장된 파일 경로 목록을 반환합니다.
pub fn make_profiles(
    corpora: &[TrainingCorpus],
    profile_dir: impl AsRef<Path>,
    size: usize,
) -> Result<Vec<PathBuf>> {
    let profile_dir = profile_dir.as_ref();
    fs::create_dir_all(profile_dir)?;

    let mut written = Vec::with_capacity(corpora.len());
    for corpus in corpora {
        let text = read_text(&corpus.path, &corpus.encoding)?;
        let table = build_profile(&text, size);

        let out = profile_dir.join(format!("{}.{}", corpus.language, size));
        save_profile(&table, &out)?;
        log::debug!(
            "{} -> {} ({}개 트라이그램)",
            corpus.path.display(),
            out.display(),
            table.len()
        );
        written.push(out);
    }

    log::info!("{}개 프로필 생성: {}", written.len(), profile_dir.display());
    Ok(written)
}
