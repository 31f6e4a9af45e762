// In: src/kernels/urldecode.rs

//! This module contains the pure, stateless kernel for query-string
//! unescaping: `%XX` hex escapes become the corresponding byte and `+`
//! becomes a space.
//!
//! The decode is strict. Crates like `percent-encoding` pass malformed
//! escapes through verbatim, but the host contract requires a hard error
//! when a `%` is not followed by two hex digits, so the pass is written out
//! by hand here.

use crate::error::UtilfnsError;

//==================================================================================
// 1. Core Logic
//==================================================================================

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Decodes a URL-query-encoded string into UTF-8 text.
///
/// Unescaped bytes (including multi-byte UTF-8 sequences) pass through
/// unchanged; empty input is empty output, not an error.
pub fn decode(input: &str) -> Result<String, UtilfnsError> {
    let bytes = input.as_bytes();
    let mut decoded: Vec<u8> = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).copied().and_then(hex_value);
                let lo = bytes.get(i + 2).copied().and_then(hex_value);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        decoded.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        // Echo the offending escape (truncated at end of
                        // input) so the host can show it verbatim.
                        let end = (i + 3).min(bytes.len());
                        let escape = String::from_utf8_lossy(&bytes[i..end]);
                        return Err(UtilfnsError::UrlDecode(format!(
                            "invalid URL escape \"{}\"",
                            escape
                        )));
                    }
                }
            }
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            other => {
                decoded.push(other);
                i += 1;
            }
        }
    }

    String::from_utf8(decoded)
        .map_err(|_| UtilfnsError::UrlDecode("decoded bytes are not valid UTF-8".to_string()))
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal query-escaping counterpart, used only to drive the
    /// round-trip property below.
    fn query_escape(input: &str) -> String {
        let mut escaped = String::new();
        for byte in input.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    escaped.push(byte as char)
                }
                b' ' => escaped.push('+'),
                _ => escaped.push_str(&format!("%{:02X}", byte)),
            }
        }
        escaped
    }

    #[test]
    fn test_decode_basic_escapes() {
        assert_eq!(decode("hello%20world").unwrap(), "hello world");
        assert_eq!(decode("hello+world").unwrap(), "hello world");
        assert_eq!(
            decode("a%2Fb%3Fc%3Dd%26e").unwrap(),
            "a/b?c=d&e"
        );
    }

    #[test]
    fn test_decode_empty_input() {
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(decode("abc-DEF_123.~").unwrap(), "abc-DEF_123.~");
        // Raw multi-byte UTF-8 also survives untouched.
        assert_eq!(decode("héllo").unwrap(), "héllo");
    }

    #[test]
    fn test_decode_multibyte_escapes() {
        // "café" with the é percent-encoded as UTF-8.
        assert_eq!(decode("caf%C3%A9").unwrap(), "café");
    }

    #[test]
    fn test_roundtrip_through_query_escape() {
        let samples = [
            "plain",
            "with spaces and more spaces",
            "reserved: /?#[]@!$&'()*+,;=",
            "unicode: caffè ☕",
        ];
        for s in samples {
            assert_eq!(decode(&query_escape(s)).unwrap(), s);
        }
    }

    #[test]
    fn test_lowercase_and_uppercase_hex_are_equivalent() {
        assert_eq!(decode("%2f").unwrap(), decode("%2F").unwrap());
    }

    #[test]
    fn test_malformed_escape_is_rejected() {
        for bad in ["%", "%2", "a%zzb", "100%"] {
            let err = decode(bad).unwrap_err();
            assert!(matches!(err, UtilfnsError::UrlDecode(_)), "input: {bad}");
            assert!(err.to_string().contains("invalid URL escape"));
        }
    }

    #[test]
    fn test_escape_error_echoes_the_offending_sequence() {
        let err = decode("a%zzb").unwrap_err();
        assert!(err.to_string().contains("\"%zz\""));

        // Truncated at end of input.
        let err = decode("100%2").unwrap_err();
        assert!(err.to_string().contains("\"%2\""));
    }

    #[test]
    fn test_decoded_bytes_must_be_utf8() {
        let err = decode("%FF%FE").unwrap_err();
        assert!(matches!(err, UtilfnsError::UrlDecode(_)));
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
