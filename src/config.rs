//! 설정 파일 로드/저장 (JSON)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::corpus::CorpusEntry;
use crate::ngram::{Result, DEFAULT_QUERY_CAP};

/// langmatch 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LangConfig {
    /// 언어 프로필 디렉토리
    #[serde(default = "default_profile_dir")]
    pub profile_dir: PathBuf,
    /// 학습 말뭉치 디렉토리
    #[serde(default = "default_training_dir")]
    pub training_dir: PathBuf,
    /// 저장할 프로필의 트라이그램 수 (0이면 무제한)
    #[serde(default = "default_profile_size")]
    pub profile_size: usize,
    /// 질의 텍스트 트라이그램 상한 (0이면 무제한)
    #[serde(default = "default_query_cap")]
    pub query_cap: usize,
    /// 출력할 후보 언어 수
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// 판별 대상 파일의 기본 인코딩
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// 말뭉치 파일 이름 -> 언어/인코딩
    ///
    /// 여기 없는 파일은 `<언어>-<인코딩>...` 이름 규칙으로 해석합니다.
    #[serde(default)]
    pub corpora: BTreeMap<String, CorpusEntry>,
    /// 평가용 파일 이름의 언어 약어 -> 언어 레이블
    #[serde(default = "default_test_labels")]
    pub test_labels: BTreeMap<String, String>,
}

fn default_profile_dir() -> PathBuf {
    PathBuf::from("datafiles/trigram-models")
}

fn default_training_dir() -> PathBuf {
    PathBuf::from("datafiles/training")
}

fn default_profile_size() -> usize {
    200
}

fn default_query_cap() -> usize {
    DEFAULT_QUERY_CAP
}

fn default_top_n() -> usize {
    1
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

fn default_test_labels() -> BTreeMap<String, String> {
    [
        ("da", "Danish"),
        ("de", "German"),
        ("el", "Greek"),
        ("en", "English"),
        ("es", "Spanish"),
        ("fi", "Finnish"),
        ("fr", "French"),
        ("it", "Italian"),
        ("nl", "Dutch"),
        ("pt", "Portuguese"),
        ("sv", "Swedish"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for LangConfig {
    fn default() -> Self {
        Self {
            profile_dir: default_profile_dir(),
            training_dir: default_training_dir(),
            profile_size: default_profile_size(),
            query_cap: default_query_cap(),
            top_n: default_top_n(),
            encoding: default_encoding(),
            corpora: BTreeMap::new(),
            test_labels: default_test_labels(),
        }
    }
}

impl LangConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 프로필 디렉토리 설정
    pub fn with_profile_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.profile_dir = dir.into();
        self
    }

    /// 학습 말뭉치 디렉토리 설정
    pub fn with_training_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.training_dir = dir.into();
        self
    }

    /// 프로필 크기 설정
    pub fn with_profile_size(mut self, size: usize) -> Self {
        self.profile_size = size;
        self
    }

    /// 질의 상한 설정
    pub fn with_query_cap(mut self, cap: usize) -> Self {
        self.query_cap = cap;
        self
    }
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: impl AsRef<Path>) -> LangConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패 {}: {}, 기본값 사용", path.display(), e);
            LangConfig::default()
        }),
        Err(e) => {
            log::debug!("설정 파일 없음 {}: {}", path.display(), e);
            LangConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &LangConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LangConfig::default();
        assert_eq!(config.profile_size, 200);
        assert_eq!(config.query_cap, 200);
        assert_eq!(config.top_n, 1);
        assert_eq!(config.encoding, "utf-8");
        assert_eq!(config.test_labels.len(), 11);
        assert_eq!(config.test_labels["el"], "Greek");
    }

    #[test]
    fn test_builder_pattern() {
        let config = LangConfig::new()
            .with_profile_dir("models")
            .with_training_dir("corpus")
            .with_profile_size(300)
            .with_query_cap(0);

        assert_eq!(config.profile_dir, PathBuf::from("models"));
        assert_eq!(config.training_dir, PathBuf::from("corpus"));
        assert_eq!(config.profile_size, 300);
        assert_eq!(config.query_cap, 0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{
            "profile_size": 500,
            "corpora": { "eng.txt": { "language": "English", "encoding": "latin1" } }
        }"#;
        let config: LangConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.profile_size, 500);
        assert_eq!(config.query_cap, 200);
        assert_eq!(config.corpora["eng.txt"].language, "English");
        assert_eq!(config.test_labels.len(), 11);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("langmatch.json");

        let config = LangConfig::new().with_profile_size(42);
        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path), config);
    }

    #[test]
    fn test_load_fallback() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(dir.path().join("missing.json")), LangConfig::default());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert_eq!(load_config(&broken), LangConfig::default());
    }
}
