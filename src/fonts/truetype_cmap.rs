//! Extracts a reverse (GID -> Unicode) map from an embedded TrueType font's
//! `cmap` table.
//!
//! PDF's `/CIDToGIDMap` gives CID -> GID; when a Type0 font has no
//! `/ToUnicode` CMap, the PDF spec's fallback is to consult the embedded
//! TrueType font's own `cmap` table. That table is naturally Unicode -> GID
//! (how a shaper would use it), so this module parses it and inverts the
//! mapping to answer the question text extraction actually needs: given a
//! GID, what Unicode character drew it?
//!
//! Only cmap subtable formats 4 (BMP, segment-delta) and 12 (full Unicode,
//! groups) are parsed; these cover the overwhelming majority of embedded
//! fonts PDF producers emit.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug)]
pub struct TrueTypeCMapError(String);

impl fmt::Display for TrueTypeCMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrueType cmap error: {}", self.0)
    }
}

impl std::error::Error for TrueTypeCMapError {}

fn err(msg: impl Into<String>) -> TrueTypeCMapError {
    TrueTypeCMapError(msg.into())
}

/// GID -> Unicode map, built by inverting an embedded TrueType font's own
/// `cmap` table.
#[derive(Debug, Clone, Default)]
pub struct TrueTypeCMap {
    gid_to_unicode: HashMap<u16, char>,
}

impl TrueTypeCMap {
    /// Parse the `cmap` table out of a complete sfnt-wrapped TrueType/OpenType
    /// font binary (the raw bytes of a PDF `/FontFile2` stream).
    pub fn from_font_data(data: &[u8]) -> Result<Self, TrueTypeCMapError> {
        let cmap_table = locate_table(data, b"cmap").ok_or_else(|| err("no cmap table in font data"))?;
        let forward = parse_cmap_table(cmap_table)?;

        let mut gid_to_unicode = HashMap::with_capacity(forward.len());
        for (codepoint, gid) in forward {
            if let Some(c) = char::from_u32(codepoint) {
                // Prefer the first Unicode value seen for a given GID: cmap
                // subtables are walked in a stable, most-specific-first order.
                gid_to_unicode.entry(gid).or_insert(c);
            }
        }

        Ok(Self { gid_to_unicode })
    }

    pub fn get_unicode(&self, gid: u16) -> Option<char> {
        self.gid_to_unicode.get(&gid).copied()
    }

    pub fn len(&self) -> usize {
        self.gid_to_unicode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gid_to_unicode.is_empty()
    }
}

fn read_u16(data: &[u8], offset: usize) -> Option<u16> {
    data.get(offset..offset + 2).map(|b| u16::from_be_bytes([b[0], b[1]]))
}

fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
    data.get(offset..offset + 4).map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

fn read_i16(data: &[u8], offset: usize) -> Option<i16> {
    read_u16(data, offset).map(|v| v as i16)
}

/// Walks the sfnt table directory (handling both plain TrueType/OpenType
/// `sfnt` headers and TrueType collection `ttcf` headers, using the first
/// font in a collection) and returns the byte range of a named table.
fn locate_table<'a>(data: &'a [u8], tag: &[u8; 4]) -> Option<&'a [u8]> {
    let is_ttc = data.get(0..4) == Some(b"ttcf");
    let directory_offset = if is_ttc {
        read_u32(data, 12)? as usize
    } else {
        0
    };

    let num_tables = read_u16(data, directory_offset + 4)? as usize;
    let record_base = directory_offset + 12;
    for i in 0..num_tables {
        let record_offset = record_base + i * 16;
        let record_tag = data.get(record_offset..record_offset + 4)?;
        if record_tag == tag {
            let table_offset = read_u32(data, record_offset + 8)? as usize;
            let table_len = read_u32(data, record_offset + 12)? as usize;
            return data.get(table_offset..table_offset.checked_add(table_len)?);
        }
    }
    None
}

/// Parses every subtable in a `cmap` table into `(unicode, gid)` pairs.
fn parse_cmap_table(table: &[u8]) -> Result<Vec<(u32, u16)>, TrueTypeCMapError> {
    let num_subtables = read_u16(table, 2).ok_or_else(|| err("truncated cmap header"))? as usize;
    let mut pairs = Vec::new();

    for i in 0..num_subtables {
        let record_offset = 4 + i * 8;
        let platform_id = read_u16(table, record_offset).ok_or_else(|| err("truncated cmap record"))?;
        let encoding_id = read_u16(table, record_offset + 2).ok_or_else(|| err("truncated cmap record"))?;
        let subtable_offset = read_u32(table, record_offset + 4).ok_or_else(|| err("truncated cmap record"))? as usize;

        // Only Unicode-mapping subtables are useful here: Windows Unicode
        // BMP (3,1), Windows Unicode full (3,10), and the platform-neutral
        // Unicode platform (0, any).
        let is_unicode = platform_id == 0 || (platform_id == 3 && (encoding_id == 1 || encoding_id == 10));
        if !is_unicode {
            continue;
        }

        let Some(subtable) = table.get(subtable_offset..) else { continue };
        let Some(format) = read_u16(subtable, 0) else { continue };

        match format {
            4 => pairs.extend(parse_format4(subtable).unwrap_or_default()),
            12 => pairs.extend(parse_format12(subtable).unwrap_or_default()),
            _ => {}
        }
    }

    Ok(pairs)
}

/// Format 4: segment mapping to delta values, BMP only.
fn parse_format4(data: &[u8]) -> Option<Vec<(u32, u16)>> {
    let seg_count_x2 = read_u16(data, 6)? as usize;
    let seg_count = seg_count_x2 / 2;

    let end_codes_off = 14;
    let start_codes_off = end_codes_off + seg_count_x2 + 2; // +2 for reservedPad
    let id_deltas_off = start_codes_off + seg_count_x2;
    let id_range_offsets_off = id_deltas_off + seg_count_x2;

    let mut pairs = Vec::new();
    for seg in 0..seg_count {
        let end_code = read_u16(data, end_codes_off + seg * 2)?;
        let start_code = read_u16(data, start_codes_off + seg * 2)?;
        let id_delta = read_i16(data, id_deltas_off + seg * 2)?;
        let id_range_offset = read_u16(data, id_range_offsets_off + seg * 2)?;

        if start_code == 0xFFFF && end_code == 0xFFFF {
            continue;
        }

        for code in start_code..=end_code {
            let gid = if id_range_offset == 0 {
                (code as i32 + id_delta as i32) as u16
            } else {
                let glyph_index_addr = id_range_offsets_off
                    + seg * 2
                    + id_range_offset as usize
                    + (code - start_code) as usize * 2;
                let raw_gid = read_u16(data, glyph_index_addr)?;
                if raw_gid == 0 {
                    0
                } else {
                    (raw_gid as i32 + id_delta as i32) as u16
                }
            };
            if gid != 0 {
                pairs.push((code as u32, gid));
            }
        }
    }
    Some(pairs)
}

/// Format 12: segmented coverage, full Unicode range.
fn parse_format12(data: &[u8]) -> Option<Vec<(u32, u16)>> {
    let num_groups = read_u32(data, 12)? as usize;
    let mut pairs = Vec::new();
    for i in 0..num_groups {
        let group_offset = 16 + i * 12;
        let start_char = read_u32(data, group_offset)?;
        let end_char = read_u32(data, group_offset + 4)?;
        let start_gid = read_u32(data, group_offset + 8)?;

        // Guard against pathological ranges in malformed fonts.
        if end_char < start_char || end_char - start_char > 0x10_FFFF {
            continue;
        }
        for (offset, code) in (start_char..=end_char).enumerate() {
            let gid = start_gid.wrapping_add(offset as u32);
            if gid <= u16::MAX as u32 {
                pairs.push((code, gid as u16));
            }
        }
    }
    Some(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a minimal sfnt wrapper containing only a `cmap` table with one
    /// format-4 subtable mapping a handful of BMP codepoints to GIDs.
    fn build_font_with_format4_cmap() -> Vec<u8> {
        // Two segments: [0x0041..=0x0042] -> gid 3,4 via delta; terminator segment 0xFFFF.
        let seg_count = 2usize;
        let seg_count_x2 = (seg_count * 2) as u16;

        let mut subtable = Vec::new();
        subtable.extend_from_slice(&4u16.to_be_bytes()); // format
        subtable.extend_from_slice(&0u16.to_be_bytes()); // length (filled below)
        subtable.extend_from_slice(&0u16.to_be_bytes()); // language
        subtable.extend_from_slice(&seg_count_x2.to_be_bytes());
        subtable.extend_from_slice(&0u16.to_be_bytes()); // searchRange
        subtable.extend_from_slice(&0u16.to_be_bytes()); // entrySelector
        subtable.extend_from_slice(&0u16.to_be_bytes()); // rangeShift

        // endCode[]
        subtable.extend_from_slice(&0x0042u16.to_be_bytes());
        subtable.extend_from_slice(&0xFFFFu16.to_be_bytes());
        // reservedPad
        subtable.extend_from_slice(&0u16.to_be_bytes());
        // startCode[]
        subtable.extend_from_slice(&0x0041u16.to_be_bytes());
        subtable.extend_from_slice(&0xFFFFu16.to_be_bytes());
        // idDelta[]: gid = code + delta -> delta = 3 - 0x41
        let delta: i16 = (3i32 - 0x41) as i16;
        subtable.extend_from_slice(&delta.to_be_bytes());
        subtable.extend_from_slice(&1i16.to_be_bytes());
        // idRangeOffset[]
        subtable.extend_from_slice(&0u16.to_be_bytes());
        subtable.extend_from_slice(&0u16.to_be_bytes());

        let mut cmap = Vec::new();
        cmap.extend_from_slice(&0u16.to_be_bytes()); // version
        cmap.extend_from_slice(&1u16.to_be_bytes()); // numTables
        cmap.extend_from_slice(&3u16.to_be_bytes()); // platformID (Windows)
        cmap.extend_from_slice(&1u16.to_be_bytes()); // encodingID (Unicode BMP)
        cmap.extend_from_slice(&12u32.to_be_bytes()); // subtable offset
        cmap.extend_from_slice(&subtable);

        wrap_sfnt(&[(*b"cmap", cmap)])
    }

    /// Minimal sfnt wrapper: header + table directory + table data, single table.
    fn wrap_sfnt(tables: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&0x00010000u32.to_be_bytes()); // sfnt version
        out.extend_from_slice(&(tables.len() as u16).to_be_bytes());
        out.extend_from_slice(&0u16.to_be_bytes()); // searchRange
        out.extend_from_slice(&0u16.to_be_bytes()); // entrySelector
        out.extend_from_slice(&0u16.to_be_bytes()); // rangeShift

        let header_len = 12 + tables.len() * 16;
        let mut data_offset = header_len;
        let mut directory = Vec::new();
        let mut body = Vec::new();
        for (tag, data) in tables {
            directory.extend_from_slice(tag);
            directory.extend_from_slice(&0u32.to_be_bytes()); // checksum (unused by parser)
            directory.extend_from_slice(&(data_offset as u32).to_be_bytes());
            directory.extend_from_slice(&(data.len() as u32).to_be_bytes());
            body.extend_from_slice(data);
            data_offset += data.len();
        }
        out.extend_from_slice(&directory);
        out.extend_from_slice(&body);
        out
    }

    #[test]
    fn parses_format4_cmap_and_inverts_to_gid_unicode() {
        let font = build_font_with_format4_cmap();
        let cmap = TrueTypeCMap::from_font_data(&font).unwrap();
        assert_eq!(cmap.get_unicode(3), Some('A'));
        assert_eq!(cmap.get_unicode(4), Some('B'));
        assert_eq!(cmap.get_unicode(999), None);
    }

    #[test]
    fn missing_cmap_table_is_an_error() {
        let font = wrap_sfnt(&[(*b"head", vec![0u8; 4])]);
        assert!(TrueTypeCMap::from_font_data(&font).is_err());
    }

    #[test]
    fn empty_cmap_reports_zero_len() {
        let cmap = TrueTypeCMap::default();
        assert_eq!(cmap.len(), 0);
        assert!(cmap.is_empty());
    }
}
