//! Input file reading and hex payload decoding.
//!
//! The two genesis inputs are single-line text files: `statefile` holds the
//! genesis head (an opaque state-root string, passed through unmodified) and
//! `wasmfile` holds the validation code as a `0x`-prefixed hex string. Both
//! are read whole and stripped of surrounding whitespace before use.

use std::path::Path;

use crate::error::{InjectError, Result};

/// Read a one-line input file, stripping surrounding whitespace.
pub fn read_line_trimmed(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path).map_err(|e| InjectError::InputNotFound {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(contents.trim().to_string())
}

/// Decode a prefixed hex string into its raw bytes.
///
/// The first two characters are discarded without validation (the `0x`
/// prefix), matching the input format written by the chain export step.
/// Fails on odd length or non-hex characters in the remainder. `path` is
/// only used to attribute the error to its source file.
pub fn decode_prefixed_hex(s: &str, path: &Path) -> Result<Vec<u8>> {
    // Drop the first two characters, not bytes, so stray non-ASCII input
    // reaches the hex decoder as a decode error instead of a panic.
    let stripped = match s.char_indices().nth(2) {
        Some((i, _)) => &s[i..],
        None => "",
    };
    hex::decode(stripped).map_err(|e| InjectError::HexDecode {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn src() -> PathBuf {
        PathBuf::from("wasmfile")
    }

    #[test]
    fn test_decode_valid_payload() {
        let bytes = decode_prefixed_hex("0x1234", &src()).unwrap();
        assert_eq!(bytes, vec![0x12, 0x34]);
    }

    #[test]
    fn test_decode_uppercase_hex() {
        let bytes = decode_prefixed_hex("0xABCD", &src()).unwrap();
        assert_eq!(bytes, vec![0xab, 0xcd]);
    }

    #[test]
    fn test_decode_roundtrip_lowercase() {
        let input = "0xdeadbeef00ff";
        let bytes = decode_prefixed_hex(input, &src()).unwrap();
        assert_eq!(hex::encode(&bytes), &input[2..]);
    }

    #[test]
    fn test_decode_odd_length_fails() {
        let err = decode_prefixed_hex("0x123", &src()).unwrap_err();
        assert!(matches!(err, InjectError::HexDecode { .. }));
    }

    #[test]
    fn test_decode_non_hex_fails() {
        let err = decode_prefixed_hex("0x12zz", &src()).unwrap_err();
        assert!(matches!(err, InjectError::HexDecode { .. }));
    }

    #[test]
    fn test_decode_prefix_only_is_empty() {
        assert!(decode_prefixed_hex("0x", &src()).unwrap().is_empty());
        assert!(decode_prefixed_hex("", &src()).unwrap().is_empty());
    }

    #[test]
    fn test_read_line_trimmed_strips_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statefile");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "0xABC123").unwrap();
        assert_eq!(read_line_trimmed(&path).unwrap(), "0xABC123");
    }

    #[test]
    fn test_read_line_trimmed_strips_surrounding_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statefile");
        std::fs::write(&path, "  0xABC123 \n").unwrap();
        assert_eq!(read_line_trimmed(&path).unwrap(), "0xABC123");
    }

    #[test]
    fn test_read_line_trimmed_missing_file() {
        let err = read_line_trimmed(Path::new("/tmp/nonexistent_chainspec_statefile")).unwrap_err();
        assert!(matches!(err, InjectError::InputNotFound { .. }));
    }
}
