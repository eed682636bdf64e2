use crate::error::{Result, XcorError};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Largest value accepted by [`parse_canonical`].
pub const MAX_VALUE: u64 = i32::MAX as u64;

/// Parse a non-negative integer and verify that it round-trips.
///
/// The text must be exactly the canonical decimal representation of a
/// value no larger than [`MAX_VALUE`]: no sign, no leading zeros and no
/// surrounding whitespace.
pub fn parse_canonical(text: &str) -> Result<u64> {
    let invalid = || XcorError::Parse {
        text: text.to_owned(),
    };
    let value: u64 = text.parse().map_err(|_| invalid())?;
    if value > MAX_VALUE || value.to_string() != text {
        return Err(invalid());
    }
    Ok(value)
}

/// Read a sequence of integers, one per line.
///
/// Reading stops at the end of the stream or at the first empty line,
/// whichever comes first. Only the `\n` terminator is stripped, so any
/// other trailing character is part of the token. The first malformed line
/// aborts the read.
pub fn read_sequence<R: BufRead>(mut reader: R) -> Result<Vec<u64>> {
    let mut seq = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let token = line.strip_suffix('\n').unwrap_or(&line);
        if token.is_empty() {
            break;
        }
        seq.push(parse_canonical(token)?);
    }
    Ok(seq)
}

/// Open a trace file and read its timestamps.
///
/// The file handle is released as soon as this function returns.
pub fn read_trace_file<P: AsRef<Path>>(file: P) -> Result<Vec<u64>> {
    let path = file.as_ref();
    let file = File::open(path).map_err(|source| XcorError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let seq = read_sequence(BufReader::new(file))?;
    log::debug!("read {} timestamps from {path:?}", seq.len());
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_canonical_integers() {
        assert_eq!(parse_canonical("0").unwrap(), 0);
        assert_eq!(parse_canonical("100").unwrap(), 100);
        assert_eq!(parse_canonical("2147483647").unwrap(), MAX_VALUE);
    }

    #[test]
    fn rejects_values_past_the_int_range() {
        for text in ["2147483648", "100000000000000", "18446744073709551615"] {
            assert!(
                matches!(parse_canonical(text), Err(XcorError::Parse { .. })),
                "{text:?}"
            );
        }
    }

    #[test]
    fn rejects_non_canonical_integers() {
        for text in ["007", "-5", "12a", "+5", " 5", "5 ", "", "1.0", "18446744073709551616"] {
            match parse_canonical(text) {
                Err(XcorError::Parse { text: bad }) => assert_eq!(bad, text),
                other => panic!("expected parse error for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn reads_until_end_of_stream() {
        let seq = read_sequence(Cursor::new("0\n0\n100\n100\n200\n")).unwrap();
        assert_eq!(seq, vec![0, 0, 100, 100, 200]);
    }

    #[test]
    fn accepts_last_line_without_newline() {
        let seq = read_sequence(Cursor::new("1\n2\n3")).unwrap();
        assert_eq!(seq, vec![1, 2, 3]);
    }

    #[test]
    fn carriage_returns_are_part_of_the_token() {
        let err = read_sequence(Cursor::new("1\r\n2\r\n")).unwrap_err();
        assert!(matches!(err, XcorError::Parse { text } if text == "1\r"));
    }

    #[test]
    fn lone_carriage_return_is_not_a_blank_line() {
        let err = read_sequence(Cursor::new("1\n\r\n2\n")).unwrap_err();
        assert!(matches!(err, XcorError::Parse { text } if text == "\r"));
    }

    #[test]
    fn stops_at_first_blank_line() {
        let seq = read_sequence(Cursor::new("1\n2\n\n3\njunk\n")).unwrap();
        assert_eq!(seq, vec![1, 2]);
    }

    #[test]
    fn empty_stream_gives_empty_sequence() {
        assert!(read_sequence(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn malformed_line_aborts_read() {
        let err = read_sequence(Cursor::new("1\n007\n3\n")).unwrap_err();
        assert!(matches!(err, XcorError::Parse { text } if text == "007"));
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let err = read_sequence(Cursor::new(vec![b'1', b'\n', 0xff, b'\n'])).unwrap_err();
        assert!(matches!(err, XcorError::Io(_)));
    }

    #[test]
    fn missing_file_cannot_be_opened() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_trace_file(&path).unwrap_err();
        assert!(matches!(err, XcorError::Open { path: p, .. } if p == path));
    }

    #[test]
    fn reads_trace_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.txt");
        std::fs::write(&path, "5\n10\n15\n").unwrap();
        assert_eq!(read_trace_file(&path).unwrap(), vec![5, 10, 15]);
    }
}
