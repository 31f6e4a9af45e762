// In: src/kernels/gunzip.rs

//! This module contains the pure, stateless kernel for decoding a
//! base64-encoded gzip payload into UTF-8 text.
//!
//! The two framing layers fail independently: malformed base64 is a decode
//! error attributable to the textual input, while a bad gzip header, corrupt
//! deflate data, or non-UTF-8 plaintext is a format error in the decoded
//! byte stream. This module is a safe, panic-free wrapper around the
//! `base64` and `flate2` crates.

use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::GzDecoder;

use crate::config::UtilfnsConfig;
use crate::error::UtilfnsError;

//==================================================================================
// 1. Public API
//==================================================================================

/// Decodes a standard-alphabet base64 string, inflates the result as a gzip
/// stream, and returns the plaintext. Unbounded output (historical behavior).
pub fn decode(input: &str) -> Result<String, UtilfnsError> {
    decode_with_config(input, &UtilfnsConfig::default())
}

/// Same as [`decode`], but honors `config.max_decompressed_bytes`.
pub fn decode_with_config(input: &str, config: &UtilfnsConfig) -> Result<String, UtilfnsError> {
    // The URL-safe alphabet is deliberately rejected here: the host contract
    // is standard base64, padding included.
    let decoded = STANDARD
        .decode(input)
        .map_err(|e| UtilfnsError::Base64(e.to_string()))?;

    let mut decoder = GzDecoder::new(decoded.as_slice());
    let mut inflated = Vec::new();

    match config.max_decompressed_bytes {
        Some(limit) => {
            // Read one byte past the cap so an over-limit stream is
            // distinguishable from one that is exactly at it.
            let mut bounded = (&mut decoder).take((limit as u64).saturating_add(1));
            bounded
                .read_to_end(&mut inflated)
                .map_err(|e| UtilfnsError::Gzip(e.to_string()))?;
            if inflated.len() > limit {
                return Err(UtilfnsError::Gzip(format!(
                    "decompressed data exceeds the configured limit of {} bytes",
                    limit
                )));
            }
        }
        None => {
            decoder
                .read_to_end(&mut inflated)
                .map_err(|e| UtilfnsError::Gzip(e.to_string()))?;
        }
    }

    String::from_utf8(inflated)
        .map_err(|_| UtilfnsError::Gzip("decompressed data is not valid UTF-8".to_string()))
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    /// Builds a base64(gzip(text)) fixture without relying on canned vectors.
    fn gzip_base64(text: &[u8]) -> String {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text).unwrap();
        STANDARD.encode(encoder.finish().unwrap())
    }

    #[test]
    fn test_decode_known_vector() {
        // Payload produced by an independent gzip implementation.
        let input = "H4sIANL/6WUA/wWAQQkAAAjEqhjHBhbQ3+DA/o/RB6nJswJWsRdKCwAAAA==";
        assert_eq!(decode(input).unwrap(), "Hello World");
    }

    #[test]
    fn test_decode_known_empty_vector() {
        let input = "H4sIAOQA6mUA/wXAgQgAAAAAIH/rAwAAAAAAAAAA";
        assert_eq!(decode(input).unwrap(), "");
    }

    #[test]
    fn test_decode_roundtrip() {
        let input = gzip_base64("compression is framing all the way down".as_bytes());
        assert_eq!(
            decode(&input).unwrap(),
            "compression is framing all the way down"
        );
    }

    #[test]
    fn test_truncated_padding_is_a_base64_error() {
        let valid = "H4sIANL/6WUA/wWAQQkAAAjEqhjHBhbQ3+DA/o/RB6nJswJWsRdKCwAAAA==";
        let truncated = &valid[..valid.len() - 2];

        let err = decode(truncated).unwrap_err();
        assert!(matches!(err, UtilfnsError::Base64(_)));
        assert!(err.to_string().contains("illegal base64"));
        // Framing errors carry no argument attribution.
        assert_eq!(err.function_argument(), None);
    }

    #[test]
    fn test_valid_base64_but_not_gzip_is_a_format_error() {
        let input = STANDARD.encode(b"this was never gzipped");
        let err = decode(&input).unwrap_err();
        assert!(matches!(err, UtilfnsError::Gzip(_)));
    }

    #[test]
    fn test_truncated_gzip_stream_is_a_format_error() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"some text long enough to truncate").unwrap();
        let mut compressed = encoder.finish().unwrap();
        compressed.truncate(compressed.len() / 2);

        let err = decode(&STANDARD.encode(compressed)).unwrap_err();
        assert!(matches!(err, UtilfnsError::Gzip(_)));
    }

    #[test]
    fn test_non_utf8_plaintext_is_a_format_error() {
        let input = gzip_base64(&[0xff, 0xfe, 0x00, 0x80]);
        let err = decode(&input).unwrap_err();
        assert!(matches!(err, UtilfnsError::Gzip(_)));
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_decompression_limit_enforced() {
        let input = gzip_base64(&vec![b'a'; 4096]);

        let capped = UtilfnsConfig {
            max_decompressed_bytes: Some(1024),
        };
        let err = decode_with_config(&input, &capped).unwrap_err();
        assert!(err.to_string().contains("configured limit"));

        let exact = UtilfnsConfig {
            max_decompressed_bytes: Some(4096),
        };
        assert_eq!(decode_with_config(&input, &exact).unwrap().len(), 4096);
    }
}
