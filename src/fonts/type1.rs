//! Type 1 font program parser, for embedded `/FontFile` streams.
//!
//! A Type 1 font program is a cleartext ASCII header, an eexec-encrypted
//! binary (or hex) body holding the Private dictionary plus CharStrings and
//! Subrs, and a run of trailing zero bytes. This module splits the three
//! sections, decrypts the eexec body with the fixed PostScript cipher the
//! Type 1 format mandates, and extracts per-glyph charstrings, subroutines,
//! and the font's matrix/bounding box. Parsed results are cached globally by
//! a hash of the source bytes, since the same embedded font program is often
//! referenced by several font dictionaries in one document.

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};

const EEXEC_R: u16 = 55665;
const CHARSTRING_R: u16 = 4330;
const C1: u16 = 52845;
const C2: u16 = 22719;
const DEFAULT_LEN_IV: usize = 4;

/// Parsed Type 1 font program: metrics, built-in encoding, and decrypted
/// charstring/subroutine programs (left in their native Type 1 charstring
/// encoding, not converted to outlines — this crate stops at text
/// extraction, not rendering).
#[derive(Debug, Clone, Default)]
pub struct Type1FontInfo {
    /// `/FontMatrix`, row-major 2x3 affine transform, PostScript default
    /// `[0.001 0 0 0.001 0 0]` if absent.
    pub font_matrix: [f64; 6],
    /// `/FontBBox [llx lly urx ury]`.
    pub font_bbox: [f64; 4],
    /// Built-in `/Encoding` from the cleartext header: code -> glyph name,
    /// for codes the font actually assigns (array entries left at
    /// `.notdef` are omitted).
    pub encoding: HashMap<u8, String>,
    /// Decrypted charstring program per glyph name, lenIV junk bytes
    /// already stripped.
    pub char_strings: HashMap<String, Vec<u8>>,
    /// Decrypted local subroutine programs, indexed by Subr number.
    pub subrs: Vec<Vec<u8>>,
}

/// Stateless entry point for parsing a Type 1 font program.
pub struct Type1Parser;

impl Type1Parser {
    /// Parse a complete Type 1 font program (the raw bytes of a `/FontFile`
    /// stream after PDF-level filter decoding).
    pub fn parse(data: &[u8]) -> Result<Type1FontInfo> {
        let (header, eexec_body) = split_header_and_eexec(data)?;
        let decrypted = decrypt_eexec(&eexec_body);
        // First DEFAULT_LEN_IV bytes of the eexec-decrypted region are
        // always discarded, independent of the /lenIV the Private dict
        // declares for individual charstrings.
        let private = if decrypted.len() > DEFAULT_LEN_IV {
            &decrypted[DEFAULT_LEN_IV..]
        } else {
            &decrypted[..]
        };

        let len_iv = parse_len_iv(private).unwrap_or(DEFAULT_LEN_IV);
        let font_matrix = parse_font_matrix(header).unwrap_or([0.001, 0.0, 0.0, 0.001, 0.0, 0.0]);
        let font_bbox = parse_font_bbox(header).unwrap_or([0.0, 0.0, 0.0, 0.0]);
        let encoding = parse_encoding(header);
        let subrs = parse_subrs(private, len_iv);
        let char_strings = parse_char_strings(private, len_iv);

        Ok(Type1FontInfo {
            font_matrix,
            font_bbox,
            encoding,
            char_strings,
            subrs,
        })
    }

    /// Parse with a process-wide cache keyed by a hash of `data`, so a font
    /// program shared by several `/FontDescriptor`s is decrypted once.
    pub fn parse_cached(data: &[u8]) -> Result<Arc<Type1FontInfo>> {
        let key = fingerprint(data);
        if let Some(cached) = TYPE1_CACHE.lock().unwrap().get(&key) {
            return Ok(Arc::clone(cached));
        }
        let parsed = Arc::new(Self::parse(data)?);
        TYPE1_CACHE.lock().unwrap().insert(key, Arc::clone(&parsed));
        Ok(parsed)
    }
}

lazy_static! {
    static ref TYPE1_CACHE: Mutex<HashMap<u64, Arc<Type1FontInfo>>> = Mutex::new(HashMap::new());
}

fn fingerprint(data: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    data.hash(&mut hasher);
    hasher.finish()
}

/// Splits the ASCII cleartext header from the eexec-encrypted body,
/// dropping the trailing run of `0` bytes/lines some writers append.
fn split_header_and_eexec(data: &[u8]) -> Result<(&[u8], Vec<u8>)> {
    const MARKER: &[u8] = b"eexec";
    let marker_pos = data
        .windows(MARKER.len())
        .position(|w| w == MARKER)
        .ok_or_else(|| Error::InvalidFont {
            operation: "parsing Type1 font program".to_string(),
            reason: "no eexec marker found".to_string(),
        })?;

    let header = &data[..marker_pos];
    let mut body = &data[marker_pos + MARKER.len()..];
    // Skip the single whitespace/newline run separating `eexec` from its body.
    while let Some(&b) = body.first() {
        if b == b'\r' || b == b'\n' || b == b' ' || b == b'\t' {
            body = &body[1..];
        } else {
            break;
        }
    }

    // Strip the trailing zero run (512 `0` chars per line, classically), if present.
    let trimmed = trim_trailing_zeros(body);

    let eexec_body = if looks_like_hex(trimmed) {
        decode_hex_eexec(trimmed)
    } else {
        trimmed.to_vec()
    };

    Ok((header, eexec_body))
}

fn trim_trailing_zeros(body: &[u8]) -> &[u8] {
    let mut end = body.len();
    while end > 0 {
        let b = body[end - 1];
        if b == b'0' || b == b'\r' || b == b'\n' || b == b' ' || b == b'\t' {
            end -= 1;
        } else {
            break;
        }
    }
    if end == 0 { body } else { &body[..end] }
}

fn looks_like_hex(body: &[u8]) -> bool {
    let sample = &body[..body.len().min(64)];
    !sample.is_empty()
        && sample
            .iter()
            .all(|&b| b.is_ascii_hexdigit() || b == b'\r' || b == b'\n' || b == b' ' || b == b'\t')
}

fn decode_hex_eexec(body: &[u8]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(body.len() / 2);
    let mut hi: Option<u8> = None;
    for &b in body {
        let Some(d) = (b as char).to_digit(16) else { continue };
        let d = d as u8;
        match hi.take() {
            Some(h) => digits.push((h << 4) | d),
            None => hi = Some(d),
        }
    }
    digits
}

/// The standard Type 1 eexec/charstring decryption cipher: a 16-bit LCG
/// keystream XORed with ciphertext, reseeded per-charstring.
fn decrypt_with_seed(data: &[u8], seed: u16) -> Vec<u8> {
    let mut r = seed;
    let mut out = Vec::with_capacity(data.len());
    for &c in data {
        let plain = c ^ (r >> 8) as u8;
        r = (c as u16).wrapping_add(r).wrapping_mul(C1).wrapping_add(C2);
        out.push(plain);
    }
    out
}

fn decrypt_eexec(body: &[u8]) -> Vec<u8> {
    decrypt_with_seed(body, EEXEC_R)
}

fn decrypt_charstring(data: &[u8], len_iv: usize) -> Vec<u8> {
    let decrypted = decrypt_with_seed(data, CHARSTRING_R);
    if decrypted.len() > len_iv {
        decrypted[len_iv..].to_vec()
    } else {
        Vec::new()
    }
}

lazy_static! {
    static ref FONT_MATRIX_RE: Regex =
        Regex::new(r"/FontMatrix\s*\[\s*([-0-9.eE]+)\s+([-0-9.eE]+)\s+([-0-9.eE]+)\s+([-0-9.eE]+)\s+([-0-9.eE]+)\s+([-0-9.eE]+)\s*\]").unwrap();
    static ref FONT_BBOX_RE: Regex =
        Regex::new(r"/FontBBox\s*\{?\s*\[?\s*([-0-9.eE]+)\s+([-0-9.eE]+)\s+([-0-9.eE]+)\s+([-0-9.eE]+)\s*\]?\s*\}?").unwrap();
    static ref LEN_IV_RE: Regex = Regex::new(r"/lenIV\s+(\d+)").unwrap();
    static ref ENCODING_ENTRY_RE: Regex = Regex::new(r"dup\s+(\d+)\s*/(\S+)\s+put").unwrap();
    static ref CHARSTRING_ENTRY_RE: Regex =
        Regex::new(r"/(\S+)\s+(\d+)\s+(?:RD|-\|)[ ]").unwrap();
    static ref SUBR_ENTRY_RE: Regex = Regex::new(r"dup\s+(\d+)\s+(\d+)\s+(?:RD|-\|)[ ]").unwrap();
}

fn parse_f64_slice(caps: &regex::Captures, n: usize) -> Option<Vec<f64>> {
    (1..=n).map(|i| caps.get(i)?.as_str().parse::<f64>().ok()).collect()
}

fn parse_font_matrix(header: &[u8]) -> Option<[f64; 6]> {
    let text = String::from_utf8_lossy(header);
    let caps = FONT_MATRIX_RE.captures(&text)?;
    let v = parse_f64_slice(&caps, 6)?;
    Some([v[0], v[1], v[2], v[3], v[4], v[5]])
}

fn parse_font_bbox(header: &[u8]) -> Option<[f64; 4]> {
    let text = String::from_utf8_lossy(header);
    let caps = FONT_BBOX_RE.captures(&text)?;
    let v = parse_f64_slice(&caps, 4)?;
    Some([v[0], v[1], v[2], v[3]])
}

fn parse_encoding(header: &[u8]) -> HashMap<u8, String> {
    let text = String::from_utf8_lossy(header);
    let mut encoding = HashMap::new();
    for caps in ENCODING_ENTRY_RE.captures_iter(&text) {
        if let Ok(code) = caps[1].parse::<u32>() {
            if code <= 255 {
                encoding.insert(code as u8, caps[2].to_string());
            }
        }
    }
    encoding
}

fn parse_len_iv(private: &[u8]) -> Option<usize> {
    let text = String::from_utf8_lossy(private);
    LEN_IV_RE.captures(&text)?.get(1)?.as_str().parse().ok()
}

/// Scans the Private dict's `/CharStrings N dict dup begin ... end` block.
/// Each entry is `/name length RD <length raw bytes> ND`; bytes are read
/// directly from the underlying slice since the charstring payload may
/// contain anything, including bytes matching later ASCII syntax.
fn parse_char_strings(private: &[u8], len_iv: usize) -> HashMap<String, Vec<u8>> {
    let mut result = HashMap::new();
    for caps in CHARSTRING_ENTRY_RE.captures_iter(&String::from_utf8_lossy(private)) {
        let name = caps[1].to_string();
        let Ok(len) = caps[2].parse::<usize>() else { continue };
        let Some(whole) = caps.get(0) else { continue };
        let start = whole.end();
        if start + len > private.len() {
            continue;
        }
        let raw = &private[start..start + len];
        result.insert(name, decrypt_charstring(raw, len_iv));
    }
    result
}

/// Scans the Private dict's `/Subrs N array dup i len RD <bytes> NP` block.
fn parse_subrs(private: &[u8], len_iv: usize) -> Vec<Vec<u8>> {
    let mut by_index: HashMap<usize, Vec<u8>> = HashMap::new();
    let mut max_index = 0usize;
    for caps in SUBR_ENTRY_RE.captures_iter(&String::from_utf8_lossy(private)) {
        let Ok(index) = caps[1].parse::<usize>() else { continue };
        let Ok(len) = caps[2].parse::<usize>() else { continue };
        let Some(whole) = caps.get(0) else { continue };
        let start = whole.end();
        if start + len > private.len() {
            continue;
        }
        let raw = &private[start..start + len];
        max_index = max_index.max(index);
        by_index.insert(index, decrypt_charstring(raw, len_iv));
    }
    let mut subrs = vec![Vec::new(); if by_index.is_empty() { 0 } else { max_index + 1 }];
    for (idx, program) in by_index {
        subrs[idx] = program;
    }
    subrs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encrypt_with_seed(data: &[u8], seed: u16) -> Vec<u8> {
        let mut r = seed;
        let mut out = Vec::with_capacity(data.len());
        for &plain in data {
            let cipher = plain ^ (r >> 8) as u8;
            r = (cipher as u16).wrapping_add(r).wrapping_mul(C1).wrapping_add(C2);
            out.push(cipher);
        }
        out
    }

    fn build_font_program() -> Vec<u8> {
        let mut private = String::new();
        private.push_str("dup /Private 10 dict dup begin\n");
        private.push_str("/lenIV 4 def\n");
        private.push_str("/Subrs 1 array\n");

        let subr_payload = [0xAAu8, 0xBB, 0xCC, 0xDD, 1, 2, 3];
        let enc_subr = encrypt_with_seed(&subr_payload, CHARSTRING_R);
        private.push_str(&format!("dup 0 {} RD ", enc_subr.len()));
        let mut private_bytes = private.into_bytes();
        private_bytes.extend_from_slice(&enc_subr);
        private_bytes.extend_from_slice(b" NP\n");

        let mut tail = String::new();
        tail.push_str("2 dict dup begin\n/CharStrings 1 dict dup begin\n");
        let glyph_payload = [0x11u8, 0x22, 0x33, 0x44, 9, 8, 7];
        let enc_glyph = encrypt_with_seed(&glyph_payload, CHARSTRING_R);
        tail.push_str(&format!("/A {} RD ", enc_glyph.len()));
        let mut tail_bytes = tail.into_bytes();
        tail_bytes.extend_from_slice(&enc_glyph);
        tail_bytes.extend_from_slice(b" ND\nend end\n");

        private_bytes.extend_from_slice(&tail_bytes);

        // Four junk bytes discarded unconditionally after eexec decryption.
        let mut plaintext = vec![0u8, 0, 0, 0];
        plaintext.extend_from_slice(&private_bytes);

        let encrypted = encrypt_with_seed(&plaintext, EEXEC_R);

        let mut program = Vec::new();
        program.extend_from_slice(b"%!PS-AdobeFont-1.0\n");
        program.extend_from_slice(b"/FontMatrix [0.001 0 0 0.001 0 0] readonly def\n");
        program.extend_from_slice(b"/FontBBox [-10 -20 1000 900] readonly def\n");
        program.extend_from_slice(b"/Encoding 256 array\n0 1 255 {1 index exch /.notdef put} for\n");
        program.extend_from_slice(b"dup 65 /A put\n");
        program.extend_from_slice(b"readonly def\n");
        program.extend_from_slice(b"currentfile eexec\n");
        program.extend_from_slice(&encrypted);
        program.extend_from_slice(b"\n");
        for _ in 0..8 {
            program.extend_from_slice(&[b'0'; 64]);
            program.push(b'\n');
        }
        program
    }

    #[test]
    fn parses_font_matrix_and_bbox_from_cleartext_header() {
        let program = build_font_program();
        let info = Type1Parser::parse(&program).unwrap();
        assert_eq!(info.font_matrix, [0.001, 0.0, 0.0, 0.001, 0.0, 0.0]);
        assert_eq!(info.font_bbox, [-10.0, -20.0, 1000.0, 900.0]);
    }

    #[test]
    fn parses_builtin_encoding_entry() {
        let program = build_font_program();
        let info = Type1Parser::parse(&program).unwrap();
        assert_eq!(info.encoding.get(&65), Some(&"A".to_string()));
    }

    #[test]
    fn decrypts_charstring_and_subr_payloads() {
        let program = build_font_program();
        let info = Type1Parser::parse(&program).unwrap();
        assert_eq!(info.char_strings.get("A"), Some(&vec![0x11, 0x22, 0x33, 0x44, 9, 8, 7]));
        assert_eq!(info.subrs.len(), 1);
        assert_eq!(info.subrs[0], vec![0xAA, 0xBB, 0xCC, 0xDD, 1, 2, 3]);
    }

    #[test]
    fn parse_cached_returns_shared_instance_for_same_bytes() {
        let program = build_font_program();
        let first = Type1Parser::parse_cached(&program).unwrap();
        let second = Type1Parser::parse_cached(&program).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn missing_eexec_marker_is_an_error() {
        let result = Type1Parser::parse(b"%!PS-AdobeFont-1.0\nno eexec here\n");
        assert!(result.is_err());
    }
}
