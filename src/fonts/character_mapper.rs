//! Decodes a PDF show-text string into Unicode text for a given font.
//!
//! Generalizes §4.8's two decoding paths into one entry point: simple fonts
//! decode one byte per character code; Type0/CID fonts consume the
//! variable-length code dictated by the font's `/Encoding` CMap codespace
//! ranges (falling back to the fixed 2-byte width of `Identity-H`/`-V` and
//! the predefined CJK CMaps when no embedded codespace table exists), per
//! [`FontInfo::next_type0_code`]. Either way the resulting code is resolved
//! through [`FontInfo::char_to_unicode`], which already layers ToUnicode,
//! CMap, and Adobe Glyph List lookups; this type adds only the byte-width
//! split and a direct-codepoint fallback for codes no layer resolves.

use crate::fonts::font_dict::FontInfo;

/// Stateless decoder; constructed once per font and reused across show-text
/// operators so callers don't re-derive the byte width on every call.
pub struct CharacterMapper<'a> {
    font: &'a FontInfo,
}

impl<'a> CharacterMapper<'a> {
    pub fn new(font: &'a FontInfo) -> Self {
        Self { font }
    }

    /// True if character codes in this font are two bytes wide (Type0/CID),
    /// false for one-byte simple-font codes.
    pub fn is_multi_byte(&self) -> bool {
        self.font.subtype == "Type0"
    }

    /// Decode a full show-text string (the operand of `Tj`/`'`/`"`, or one
    /// element of a `TJ` array) into Unicode text.
    pub fn decode_string(&self, bytes: &[u8]) -> String {
        if self.is_multi_byte() {
            self.decode_multi_byte(bytes)
        } else {
            self.decode_single_byte(bytes)
        }
    }

    fn decode_multi_byte(&self, bytes: &[u8]) -> String {
        let mut result = String::new();
        let mut i = 0;
        while i < bytes.len() {
            let (code, len) = self.font.next_type0_code(&bytes[i..]);
            if len == 0 {
                break;
            }
            i += len;
            result.push_str(&self.resolve(code));
        }
        result
    }

    fn decode_single_byte(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| self.resolve(b as u32)).collect()
    }

    fn resolve(&self, code: u32) -> String {
        self.font
            .char_to_unicode(code)
            .unwrap_or_else(|| direct_codepoint_fallback(code))
    }
}

/// Last-resort fallback when no font layer maps a code: treat the code as
/// its own Unicode code point, replacing values with no valid `char`
/// mapping (lone surrogates) with `U+FFFD`.
fn direct_codepoint_fallback(code: u32) -> String {
    char::from_u32(code)
        .map(|c| c.to_string())
        .unwrap_or_else(|| "\u{FFFD}".to_string())
}
