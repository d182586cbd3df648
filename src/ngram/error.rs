//! 언어 판별 엔진 에러 타입

/// 프로필 로드, 유사도 계산, 매칭 과정에서 발생하는 에러
#[derive(Debug, thiserror::Error)]
pub enum LangError {
    /// 파일 읽기/쓰기 실패
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    /// 프로필 파일 형식 오류
    #[error("프로필 형식 오류 ({line}행): {reason}")]
    Format { line: usize, reason: String },

    /// 두 테이블 중 하나의 벡터 크기가 0 (트라이그램 없음)
    #[error("유사도 계산 불가: 트라이그램이 없는 테이블입니다")]
    DegenerateInput,

    /// 로드된 언어 프로필이 없음
    #[error("로드된 언어 프로필이 없습니다")]
    EmptyMatcher,

    /// 알 수 없는 텍스트 인코딩
    #[error("알 수 없는 인코딩: {0}")]
    UnknownEncoding(String),

    /// 파일 이름에서 언어 레이블을 찾을 수 없음
    #[error("언어 레이블을 확인할 수 없는 파일 이름: {0}")]
    UnknownLabel(String),

    /// 설정 파일 파싱 또는 JSON 출력 직렬화 실패
    #[error("JSON 오류: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LangError>;

impl LangError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        LangError::Format {
            line,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message() {
        let err = LangError::format(3, "필드 수가 잘못됨");
        assert_eq!(err.to_string(), "프로필 형식 오류 (3행): 필드 수가 잘못됨");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LangError = io.into();
        assert!(matches!(err, LangError::Io(_)));
    }
}
