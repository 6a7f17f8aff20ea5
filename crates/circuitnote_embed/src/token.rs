//! URL-safe compression of circuit descriptions.
//!
//! The simulator reconstructs circuit state from the `ctz` query parameter,
//! so encoding must round-trip bit-for-bit and produce only characters that
//! can sit in a query string unescaped.

/// Compresses `text` into a token safe for direct use as a query value.
///
/// Deterministic: the same text always yields the same token.
pub fn encode(text: &str) -> String {
    lz_str::compress_to_encoded_uri_component(text)
}

/// Inverse of [`encode`]. Returns `None` for tokens that are not valid
/// output of it.
pub fn decode(token: &str) -> Option<String> {
    let wide = lz_str::decompress_from_encoded_uri_component(token)?;
    String::from_utf16(&wide).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_simple() {
        let text = "R 1 2 1000";
        assert_eq!(decode(&encode(text)).as_deref(), Some(text));
    }

    #[test]
    fn test_roundtrip_multiline_circuit() {
        let text = "$ 1 0.000005 10.20027730826997 50 5 50\n\
                    r 176 80 384 80 0 1000\n\
                    v 176 352 176 80 0 0 40 5 0 0 0.5\n\
                    w 384 80 384 352 0\n\
                    w 176 352 384 352 0";
        assert_eq!(decode(&encode(text)).as_deref(), Some(text));
    }

    #[test]
    fn test_roundtrip_unicode() {
        let text = "comment: 100µF Ω ← 電解コンデンサ";
        assert_eq!(decode(&encode(text)).as_deref(), Some(text));
    }

    #[test]
    fn test_roundtrip_empty() {
        assert_eq!(decode(&encode("")).as_deref(), Some(""));
    }

    #[test]
    fn test_token_is_query_safe() {
        let token = encode("$ 1 0.000005 10 50 5 50\nr 176 80 384 80 0 1000");
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '$'),
            "unexpected character in token {token}"
        );
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let text = "c 100 200 100 300 0 0.000001 5";
        assert_eq!(encode(text), encode(text));
    }
}
