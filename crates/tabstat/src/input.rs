//! Loading integer datasets from text.
//!
//! Values are signed integers separated by whitespace or commas, across any
//! number of lines. Blank lines are skipped. The first token that does not
//! parse stops loading with a [`LoadError::Parse`] naming the source and the
//! 1-based line.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;

/// Name used for standard input in errors and logs.
pub const STDIN_NAME: &str = "<stdin>";

/// Parse every integer in `text`.
///
/// ```rust
/// use tabstat::input::parse_numbers;
///
/// assert_eq!(parse_numbers("1, 2\n-3 4", "inline").unwrap(), vec![1, 2, -3, 4]);
/// assert!(parse_numbers("1 two", "inline").is_err());
/// ```
pub fn parse_numbers(text: &str, source_name: &str) -> Result<Vec<i64>, LoadError> {
    let mut values = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let tokens = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty());
        for token in tokens {
            let value = token
                .parse::<i64>()
                .map_err(|_| LoadError::parse(source_name, index + 1, token))?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Read and parse a file.
pub fn load_file(path: &Path) -> Result<Vec<i64>, LoadError> {
    let name = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|err| LoadError::read(name.as_str(), err))?;
    let values = parse_numbers(&text, &name)?;
    debug!(path = %name, count = values.len(), "loaded numbers");
    Ok(values)
}

/// Read `reader` to the end and parse it.
pub fn load_reader<R: Read>(mut reader: R, source_name: &str) -> Result<Vec<i64>, LoadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|err| LoadError::read(source_name, err))?;
    let values = parse_numbers(&text, source_name)?;
    debug!(source = source_name, count = values.len(), "loaded numbers");
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn mixed_separators() {
        let values = parse_numbers(" 5,6 ,, 7\t8\n\n-9,\n", "t").unwrap();
        assert_eq!(values, vec![5, 6, 7, 8, -9]);
    }

    #[test]
    fn empty_text_is_empty_dataset() {
        assert!(parse_numbers("", "t").unwrap().is_empty());
        assert!(parse_numbers(" \n , \n", "t").unwrap().is_empty());
    }

    #[test]
    fn parse_error_reports_line() {
        let err = parse_numbers("1 2\n3\n4 5.5", "nums.txt").unwrap_err();
        match err {
            LoadError::Parse {
                source_name,
                line,
                token,
            } => {
                assert_eq!(source_name, "nums.txt");
                assert_eq!(line, 3);
                assert_eq!(token, "5.5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn overflowing_integer_is_rejected() {
        assert!(parse_numbers("99999999999999999999", "t").is_err());
        assert_eq!(
            parse_numbers("-9223372036854775808", "t").unwrap(),
            vec![i64::MIN]
        );
    }

    #[test]
    fn load_file_reads_numbers() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "10 20").unwrap();
        writeln!(file, "30").unwrap();
        assert_eq!(load_file(file.path()).unwrap(), vec![10, 20, 30]);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn load_reader_uses_source_name() {
        let err = load_reader("1\nx".as_bytes(), STDIN_NAME).unwrap_err();
        assert_eq!(err.to_string(), "<stdin>:2: 'x' is not an integer");
    }
}
