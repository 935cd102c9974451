// ── Text encoding ─────────────────────────────────────────────────────────────
//
// The engine speaks UTF-8 everywhere; Win32 wants UTF-16 ("wide") strings.
// Pure value conversions, no `unsafe`.

/// A wide string that is not valid UTF-16 (an unpaired surrogate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unpaired surrogate at wide index {position}")]
pub struct EncodingError {
    /// Index (in `u16` units) of the first offending code unit.
    pub position: usize,
}

/// Convert UTF-8 text to UTF-16 code units (no terminator).
pub fn utf8_to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Convert UTF-8 text to a null-terminated UTF-16 buffer for FFI calls.
pub fn utf8_to_wide_nul(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Convert UTF-16 code units to UTF-8.
///
/// Fails on the first unpaired surrogate instead of silently yielding an
/// empty or mangled string.
pub fn wide_to_utf8(wide: &[u16]) -> Result<String, EncodingError> {
    let mut out = String::with_capacity(wide.len());
    let mut position = 0;
    for unit in char::decode_utf16(wide.iter().copied()) {
        match unit {
            Ok(c) => {
                position += c.len_utf16();
                out.push(c);
            }
            Err(_) => return Err(EncodingError { position }),
        }
    }
    Ok(out)
}

/// Convert UTF-16 code units to UTF-8, replacing unpaired surrogates with
/// U+FFFD.
pub fn wide_to_utf8_lossy(wide: &[u16]) -> String {
    String::from_utf16_lossy(wide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_preserves_text() {
        for s in ["", "plain ascii", "Żółć gęślą jaźń", "日本語のテキスト", "emoji 🚀🛰️ mix", "tab\tnew\nline"] {
            let wide = utf8_to_wide(s);
            assert_eq!(wide_to_utf8(&wide).as_deref(), Ok(s));
        }
    }

    #[test]
    fn nul_terminated_buffer_has_single_trailing_zero() {
        let wide = utf8_to_wide_nul("abc");
        assert_eq!(wide, vec![b'a' as u16, b'b' as u16, b'c' as u16, 0]);
    }

    #[test]
    fn astral_characters_use_surrogate_pairs() {
        assert_eq!(utf8_to_wide("🚀").len(), 2);
    }

    #[test]
    fn unpaired_surrogate_is_reported_with_position() {
        let wide = [b'o' as u16, b'k' as u16, 0xD800, b'x' as u16];
        assert_eq!(wide_to_utf8(&wide), Err(EncodingError { position: 2 }));
        assert_eq!(wide_to_utf8_lossy(&wide), "ok\u{FFFD}x");
    }

    #[test]
    fn encoding_error_message_names_position() {
        let err = wide_to_utf8(&[0xDFFF]).unwrap_err();
        assert_eq!(err.to_string(), "unpaired surrogate at wide index 0");
    }
}
