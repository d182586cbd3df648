//! 단어 분리 및 트라이그램 추출
//!
//! 텍스트에서 구두점을 제거해 단어 목록을 만들고,
//! 각 단어를 `<word>` 형태로 감싼 뒤 3글자 창을 밀어 트라이그램을 만듭니다.

/// 공백으로 치환되는 구두점
pub const PUNCTUATION: [char; 9] = ['!', '?', '"', ',', '.', '(', ')', '<', '>'];

/// 단어 시작 표시
pub const WORD_START: char = '<';
/// 단어 끝 표시
pub const WORD_END: char = '>';

/// 텍스트를 단어 목록으로 분리
///
/// 구두점을 공백으로 바꾼 뒤 연속 공백 기준으로 나눕니다. 빈 토큰은 버립니다.
///
/// # Examples
/// ```
/// use langmatch::ngram::tokenize;
/// assert_eq!(tokenize("the cat (sat)."), vec!["the", "cat", "sat"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// 단어 앞뒤에 경계 표시를 붙임: `cat` -> `<cat>`
pub fn wrap_word(word: &str) -> String {
    let mut wrapped = String::with_capacity(word.len() + 2);
    wrapped.push(WORD_START);
    wrapped.push_str(word);
    wrapped.push(WORD_END);
    wrapped
}

/// 임의의 문자열에서 연속된 3글자 부분 문자열을 왼쪽부터 추출
///
/// 길이 M(글자 수)이 3 이상이면 M-2개, 그보다 짧으면 0개를 반환합니다.
pub fn trigrams(seq: &str) -> Vec<String> {
    let chars: Vec<char> = seq.chars().collect();
    chars.windows(3).map(|w| w.iter().collect()).collect()
}

/// 단어를 감싼 뒤 트라이그램 추출
pub fn word_trigrams(word: &str) -> Vec<String> {
    trigrams(&wrap_word(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("Hello, world! \"Quoted\" (x) <y>?"),
            vec!["Hello", "world", "Quoted", "x", "y"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... !!  \n\t").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_other_symbols() {
        // 하이픈, 아포스트로피 등은 단어의 일부
        assert_eq!(tokenize("l'homme e-mail;"), vec!["l'homme", "e-mail;"]);
    }

    #[test]
    fn test_trigram_count() {
        assert_eq!(trigrams("<the>"), vec!["<th", "the", "he>"]);
        assert_eq!(trigrams("abc"), vec!["abc"]);
        assert!(trigrams("ab").is_empty());
        assert!(trigrams("").is_empty());

        for len in 3..12 {
            let s = "x".repeat(len);
            assert_eq!(trigrams(&s).len(), len - 2);
        }
    }

    #[test]
    fn test_word_trigrams_single_letter() {
        assert_eq!(word_trigrams("a"), vec!["<a>"]);
    }

    #[test]
    fn test_trigrams_are_char_based() {
        // 바이트가 아닌 글자 단위
        assert_eq!(word_trigrams("να"), vec!["<να", "να>"]);
        assert_eq!(word_trigrams("é"), vec!["<é>"]);
    }
}
