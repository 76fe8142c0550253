//! Upload byte decoding.

/// Decodes raw upload bytes to text, best effort.
///
/// BOM sniffing recognizes UTF-8 and UTF-16 byte-order marks (the BOM itself
/// is stripped); anything else is read as UTF-8 with invalid sequences
/// replaced by U+FFFD. Never fails, so the CSV parser's total contract
/// extends to the byte boundary.
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, _encoding, _had_errors) = encoding_rs::UTF_8.decode(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8_passes_through() {
        assert_eq!(decode_text(b"Name,Amount"), "Name,Amount");
    }

    #[test]
    fn utf8_bom_is_stripped() {
        assert_eq!(decode_text(b"\xef\xbb\xbfName"), "Name");
    }

    #[test]
    fn utf16_le_bom_switches_decoder() {
        let bytes = b"\xff\xfeN\x00a\x00m\x00e\x00";
        assert_eq!(decode_text(bytes), "Name");
    }

    #[test]
    fn invalid_sequences_are_replaced_not_fatal() {
        let text = decode_text(b"Na\xffme");
        assert!(text.contains("Na"));
        assert!(text.contains("me"));
    }
}
