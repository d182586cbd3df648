//! 프로필 파일 저장/로드
//!
//! # 파일 형식
//! 한 줄에 하나의 항목, `<빈도> <트라이그램>` (UTF-8).
//! 저장 시 빈도 내림차순으로 기록하며, 읽을 때는 순서를 따지지 않습니다.
//!
//! ```text
//! 412 <de
//! 377 de>
//! 120 en>
//! ```

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::error::{LangError, Result};
use super::profile::TrigramTable;

/// 테이블을 writer에 기록
pub fn write_profile<W: Write>(table: &TrigramTable, mut writer: W) -> Result<()> {
    for (trigram, count) in table.ranked() {
        writeln!(writer, "{} {}", count, trigram)?;
    }
    writer.flush()?;
    Ok(())
}

/// reader에서 테이블 파싱
pub fn read_profile<R: Read>(reader: R) -> Result<TrigramTable> {
    let mut table = TrigramTable::new();

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(LangError::format(
                line_no,
                format!("필드가 2개여야 합니다 ({}개): {:?}", fields.len(), line),
            ));
        }

        let count: u64 = fields[0].parse().map_err(|_| {
            LangError::format(line_no, format!("유효하지 않은 빈도값: {:?}", fields[0]))
        })?;

        let trigram = fields[1];
        if trigram.chars().count() != 3 {
            return Err(LangError::format(
                line_no,
                format!("트라이그램은 3글자여야 합니다: {:?}", trigram),
            ));
        }

        if table.insert(trigram, count).is_some() {
            log::warn!("{}행: 중복 트라이그램 {:?}, 마지막 값 사용", line_no, trigram);
        }
    }

    Ok(table)
}

/// 테이블을 파일로 저장 (상위 디렉토리가 없으면 생성)
pub fn save_profile(table: &TrigramTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    write_profile(table, BufWriter::new(file))?;
    log::debug!("프로필 저장: {} ({}개 항목)", path.display(), table.len());
    Ok(())
}

/// 파일에서 테이블 로드
pub fn load_profile(path: impl AsRef<Path>) -> Result<TrigramTable> {
    let file = File::open(path.as_ref())?;
    read_profile(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TrigramTable {
        vec![("<de", 412), ("de>", 377), ("en>", 120), ("<a>", 120)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_write_sorted_by_frequency() {
        let mut buf = Vec::new();
        write_profile(&sample_table(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "412 <de\n377 de>\n120 <a>\n120 en>\n");
    }

    #[test]
    fn test_read_written_profile() {
        let table = sample_table();
        let mut buf = Vec::new();
        write_profile(&table, &mut buf).unwrap();
        assert_eq!(read_profile(buf.as_slice()).unwrap(), table);
    }

    #[test]
    fn test_read_ignores_order_and_blank_lines() {
        let table = read_profile("1 abc\n\n9 xyz\n".as_bytes()).unwrap();
        assert_eq!(table.count("abc"), 1);
        assert_eq!(table.count("xyz"), 9);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_wrong_field_count() {
        let result = read_profile("12 abc extra\n".as_bytes());
        assert!(matches!(result, Err(LangError::Format { line: 1, .. })));

        let result = read_profile("5 abc\n12\n".as_bytes());
        assert!(matches!(result, Err(LangError::Format { line: 2, .. })));
    }

    #[test]
    fn test_invalid_frequency() {
        for bad in ["abc 12\n", "-3 abc\n", "1.5 abc\n"] {
            let result = read_profile(bad.as_bytes());
            assert!(matches!(result, Err(LangError::Format { .. })), "{:?}", bad);
        }
    }

    #[test]
    fn test_invalid_trigram_length() {
        let result = read_profile("3 abcd\n".as_bytes());
        assert!(matches!(result, Err(LangError::Format { .. })));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("English.200");

        let table = sample_table();
        save_profile(&table, &path).unwrap();
        assert_eq!(load_profile(&path).unwrap(), table);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_profile(dir.path().join("nope.200"));
        assert!(matches!(result, Err(LangError::Io(_))));
    }
}
