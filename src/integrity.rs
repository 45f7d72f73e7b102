//! File-structure diagnostics: a cheap, read-only health check over a PDF
//! byte source, independent of whether the file would actually open.
//!
//! This is the status record described by §4.4/§6: it answers "what shape is
//! this file in" without attempting the recovery strategies in
//! [`crate::xref_reconstruction`] — those kick in only once a full open is
//! attempted and fails.

use crate::error::Result;
use lazy_static::lazy_static;
use std::io::{Read, Seek, SeekFrom};

lazy_static! {
    static ref RE_OBJ: regex::bytes::Regex = regex::bytes::Regex::new(r"(?:^|[^0-9])(\d+)\s+(\d+)\s+obj\b").unwrap();
}

/// Result of scanning a PDF for structural health, without fully parsing it.
///
/// Every field is best-effort: a `false` or `None` means the marker wasn't
/// found in the scanned window, not that the file is necessarily unreadable.
#[derive(Debug, Clone, Default)]
pub struct IntegrityStatus {
    /// `%PDF-x.y` found within the first 1024 bytes.
    pub has_valid_header: bool,
    /// File ends with `%%EOF` (allowing trailing whitespace).
    pub has_valid_eof: bool,
    /// `startxref` keyword found near the end of the file.
    pub has_startxref: bool,
    /// Either a classical `xref` table or a `/Type /XRef` stream was located.
    pub has_xref: bool,
    /// A `trailer` keyword, or an xref-stream dictionary carrying `/Root`, was found.
    pub has_trailer: bool,
    /// The file appears to end mid-object: no `%%EOF` and no trailing `endobj`/`endstream`.
    pub is_truncated: bool,
    /// Count of `N G obj` markers found by scanning the whole file, used as a
    /// cheap proxy for object count without resolving the xref.
    pub estimated_objects: usize,
    /// Human-readable problems found during the scan, most severe first.
    pub issues: Vec<String>,
}

impl IntegrityStatus {
    /// Whether the file looks well-formed enough that a normal open is
    /// likely to succeed without falling back to reconstruction.
    pub fn looks_healthy(&self) -> bool {
        self.has_valid_header
            && self.has_valid_eof
            && self.has_startxref
            && self.has_xref
            && self.has_trailer
            && !self.is_truncated
    }
}

/// Scan a PDF byte source for structural health without parsing further.
///
/// This never fails on a malformed file: a corrupt or truncated PDF simply
/// yields a status with the relevant flags unset and the issue recorded.
/// Only I/O errors on the underlying source propagate.
pub fn check_integrity<R: Read + Seek>(reader: &mut R) -> Result<IntegrityStatus> {
    let file_size = reader.seek(SeekFrom::End(0))?;
    let mut status = IntegrityStatus::default();

    // Header: tolerate up to 1024 bytes of preamble per §6.
    reader.seek(SeekFrom::Start(0))?;
    let preamble_len = file_size.min(1024) as usize;
    let mut preamble = vec![0u8; preamble_len];
    reader.read_exact(&mut preamble)?;
    status.has_valid_header = find_header(&preamble);
    if !status.has_valid_header {
        status.issues.push("no '%PDF-x.y' header found in first 1024 bytes".to_string());
    }

    // Tail: startxref / %%EOF, read in a bounded window from the end.
    let tail_len = file_size.min(4096);
    reader.seek(SeekFrom::End(-(tail_len as i64)))?;
    let mut tail = Vec::new();
    reader.take(tail_len).read_to_end(&mut tail)?;
    let tail_str = String::from_utf8_lossy(&tail);

    status.has_startxref = tail_str.contains("startxref");
    if !status.has_startxref {
        status.issues.push("no 'startxref' keyword found near end of file".to_string());
    }

    status.has_valid_eof = tail_str.trim_end().ends_with("%%EOF");
    if !status.has_valid_eof {
        status.issues.push("file does not end with '%%EOF'".to_string());
    }

    status.is_truncated = !status.has_valid_eof
        && !tail_str.trim_end().ends_with("endobj")
        && !tail_str.trim_end().ends_with("endstream");
    if status.is_truncated {
        status.issues.push("file appears to end mid-object (truncated)".to_string());
    }

    // Whole-file scan for xref / trailer / object markers. Bounded by the
    // same "read the whole small-to-medium file" tradeoff as
    // xref_reconstruction::reconstruct_xref.
    reader.seek(SeekFrom::Start(0))?;
    let mut whole = Vec::with_capacity(file_size as usize);
    reader.read_to_end(&mut whole)?;

    status.has_xref = contains_eol_anchored(&whole, b"xref") || contains_whitespace_tolerant_xref_stream(&whole);
    if !status.has_xref {
        status.issues.push("no classical 'xref' table or '/Type /XRef' stream found".to_string());
    }

    status.has_trailer = find_last(&whole, b"trailer").is_some() || contains_whitespace_tolerant_xref_stream(&whole);
    if !status.has_trailer {
        status.issues.push("no 'trailer' keyword or xref-stream dictionary found".to_string());
    }

    status.estimated_objects = RE_OBJ.find_iter(&whole).count();
    if status.estimated_objects == 0 {
        status.issues.push("no 'N G obj' markers found anywhere in the file".to_string());
    }

    Ok(status)
}

fn find_header(preamble: &[u8]) -> bool {
    let re = regex::bytes::Regex::new(r"%PDF-\d\.\d").unwrap();
    re.is_match(preamble)
}

/// Matches `xref` only when it starts a line, the way §6's "end-of-line-anchored"
/// recovery strategy does, so we don't false-positive on the word inside a
/// stream's compressed payload.
fn contains_eol_anchored(haystack: &[u8], needle: &[u8]) -> bool {
    let mut start = 0usize;
    while let Some(pos) = find_from(haystack, needle, start) {
        let at_line_start = pos == 0 || matches!(haystack[pos - 1], b'\n' | b'\r');
        if at_line_start {
            return true;
        }
        start = pos + 1;
    }
    false
}

fn contains_whitespace_tolerant_xref_stream(haystack: &[u8]) -> bool {
    let re = regex::bytes::Regex::new(r"/Type\s*/XRef\b").unwrap();
    re.is_match(haystack)
}

fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len().max(1))
        .position(|w| w == needle)
        .map(|p| p + from)
}

fn find_last(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let mut last = None;
    let mut start = 0usize;
    while let Some(pos) = find_from(haystack, needle, start) {
        last = Some(pos);
        start = pos + 1;
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn minimal_pdf() -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.7\n");
        buf.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");
        buf.extend_from_slice(b"2 0 obj\n<< /Type /Pages /Kids [] /Count 0 >>\nendobj\n");
        let xref_offset = buf.len();
        buf.extend_from_slice(b"xref\n0 3\n");
        buf.extend_from_slice(b"0000000000 65535 f \n");
        buf.extend_from_slice(b"0000000009 00000 n \n");
        buf.extend_from_slice(b"0000000059 00000 n \n");
        buf.extend_from_slice(b"trailer\n<< /Size 3 /Root 1 0 R >>\n");
        buf.extend_from_slice(format!("startxref\n{}\n%%EOF", xref_offset).as_bytes());
        buf
    }

    #[test]
    fn well_formed_file_reports_healthy() {
        let data = minimal_pdf();
        let mut cursor = Cursor::new(data);
        let status = check_integrity(&mut cursor).unwrap();
        assert!(status.looks_healthy(), "{:?}", status);
        assert!(status.issues.is_empty());
        assert_eq!(status.estimated_objects, 2);
    }

    #[test]
    fn missing_header_is_flagged() {
        let mut data = minimal_pdf();
        data.drain(0..9); // drop "%PDF-1.7\n"
        let mut cursor = Cursor::new(data);
        let status = check_integrity(&mut cursor).unwrap();
        assert!(!status.has_valid_header);
        assert!(!status.looks_healthy());
    }

    #[test]
    fn truncated_file_has_no_eof_and_is_flagged_truncated() {
        let mut data = minimal_pdf();
        let cut = data.len() - 20;
        data.truncate(cut);
        let mut cursor = Cursor::new(data);
        let status = check_integrity(&mut cursor).unwrap();
        assert!(!status.has_valid_eof);
        assert!(status.is_truncated);
    }

    #[test]
    fn xref_stream_pdf_reports_has_xref_and_trailer() {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-2.0\n");
        buf.extend_from_slice(b"1 0 obj\n<< /Type /Catalog >>\nendobj\n");
        buf.extend_from_slice(b"2 0 obj\n<< /Type /XRef /W [1 2 1] /Size 2 /Root 1 0 R >> stream\n");
        buf.extend_from_slice(&[0u8, 0, 0, 0]);
        buf.extend_from_slice(b"\nendstream\nendobj\n");
        buf.extend_from_slice(b"startxref\n38\n%%EOF");
        let mut cursor = Cursor::new(buf);
        let status = check_integrity(&mut cursor).unwrap();
        assert!(status.has_xref);
        assert!(status.has_trailer);
    }

    #[test]
    fn empty_file_reports_no_markers_without_erroring() {
        let mut cursor = Cursor::new(Vec::<u8>::new());
        let status = check_integrity(&mut cursor).unwrap();
        assert!(!status.has_valid_header);
        assert!(!status.has_xref);
        assert_eq!(status.estimated_objects, 0);
    }
}
