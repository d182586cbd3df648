//! 트라이그램 기반 언어 판별 엔진
//!
//! 짧은 텍스트의 문자 트라이그램 빈도를 언어별 참조 프로필과 비교하여
//! 어떤 언어인지 추정합니다.
//!
//! # 개요
//!
//! 1. **토큰화**: 구두점을 공백으로 바꾸고 단어로 분리
//! 2. **트라이그램 추출**: 단어를 `<word>`로 감싸 3글자씩 추출
//! 3. **프로필 생성**: 빈도를 집계하고 상위 K개만 남김
//! 4. **코사인 유사도**: 모든 참조 프로필과 비교하여 상위 N개 언어 반환
//!
//! # 사용 예시
//!
//! ```no_run
//! use langmatch::ngram::{build_profile, save_profile, LanguageMatcher};
//!
//! // 학습: 언어별 프로필 저장
//! let table = build_profile("the quick brown fox jumps over the lazy dog", 200);
//! save_profile(&table, "datafiles/trigram-models/English.200").unwrap();
//!
//! // 판별
//! let matcher = LanguageMatcher::new("datafiles/trigram-models").unwrap();
//! let best = matcher.recognize("where is the dog", 200).unwrap();
//! println!("{} ({:.3})", best.language, best.similarity);
//! ```

mod error;
mod matcher;
mod profile;
mod similarity;
mod store;
mod tokenizer;

// 공개 인터페이스
pub use error::{LangError, Result};
pub use matcher::{LanguageMatch, LanguageMatcher, MatchResult, DEFAULT_QUERY_CAP};
pub use profile::{build_profile, TrigramTable};
pub use similarity::{cosine_similarity, evened, frequency_vector};
pub use store::{load_profile, read_profile, save_profile, write_profile};
pub use tokenizer::{tokenize, trigrams, word_trigrams, wrap_word, PUNCTUATION};
