//! 코사인 유사도 계산
//!
//! 두 테이블을 서로의 키로 0 채움(evening)한 뒤,
//! 키 사전순으로 빈도 벡터를 만들어 코사인 유사도를 구합니다.
//!
//! cos(a, b) = (a · b) / (‖a‖ × ‖b‖)

use super::error::{LangError, Result};
use super::profile::TrigramTable;

/// `a`의 복사본에 `b`에만 있는 키를 빈도 0으로 추가
///
/// `a`는 변경하지 않습니다.
pub fn evened(a: &TrigramTable, b: &TrigramTable) -> TrigramTable {
    let mut copy = a.clone();
    for key in b.keys() {
        if !copy.contains(key) {
            copy.insert(key, 0);
        }
    }
    copy
}

/// 키 사전순으로 빈도를 나열한 벡터
pub fn frequency_vector(table: &TrigramTable) -> Vec<f64> {
    table.iter().map(|(_, count)| count as f64).collect()
}

fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn magnitude(v: &[f64]) -> f64 {
    dot_product(v, v).sqrt()
}

/// 두 트라이그램 테이블의 코사인 유사도
///
/// 빈도가 음수가 아니므로 결과는 [0.0, 1.0] 범위입니다.
///
/// # Errors
/// 어느 한쪽의 벡터 크기가 0이면 `LangError::DegenerateInput`
pub fn cosine_similarity(known: &TrigramTable, unknown: &TrigramTable) -> Result<f64> {
    let table1 = evened(known, unknown);
    let table2 = evened(unknown, known);

    let v1 = frequency_vector(&table1);
    let v2 = frequency_vector(&table2);
    debug_assert_eq!(v1.len(), v2.len());

    let norm1 = magnitude(&v1);
    let norm2 = magnitude(&v2);
    if norm1 == 0.0 || norm2 == 0.0 {
        return Err(LangError::DegenerateInput);
    }

    let similarity = dot_product(&v1, &v2) / (norm1 * norm2);
    // 부동소수점 오차로 1.0을 살짝 넘는 경우 보정
    Ok(similarity.clamp(0.0, 1.0))
}
