//! CCITTFaxDecode implementation.
//!
//! CCITT (Comité Consultatif International Téléphonique et Télégraphique)
//! Group 3 and Group 4 fax compression for monochrome images.
//!
//! Implements Modified Huffman (Group 3, 1D, `K` = 0), Modified READ
//! (Group 3 mixed 1D/2D, `K` > 0) and Modified Modified READ (Group 4,
//! `K` < 0), per ITU-T Recommendation T.4 and T.6. Output is packed
//! 1-bit-per-pixel scanlines, MSB first, matching the uncompressed image
//! data a PDF image XObject expects after filtering.
//!
//! PDF Spec: ISO 32000-1:2008, Section 7.4.6 - CCITTFaxDecode Filter

use crate::decoders::{DecodeParams, StreamDecoder};
use crate::error::Result;

/// CCITTFaxDecode filter implementation.
///
/// Parameters come from the stream's `/DecodeParms` dictionary (Section
/// 7.4.6, Table 11); any entry absent there falls back to the PDF-spec
/// default.
pub struct CcittFaxDecoder {
    /// `/K`: <0 Group 4 (MMR), 0 Group 3 1D (MH), >0 Group 3 mixed 1D/2D (MR).
    k: i64,
    /// `/Columns`, default 1728.
    columns: usize,
    /// `/Rows`; 0 means decode until the input is exhausted.
    rows: usize,
    /// `/BlackIs1`, default false (0 bits are black).
    black_is_1: bool,
    /// `/EncodedByteAlign`, default false.
    encoded_byte_align: bool,
}

impl Default for CcittFaxDecoder {
    fn default() -> Self {
        Self {
            k: 0,
            columns: 1728,
            rows: 0,
            black_is_1: false,
            encoded_byte_align: false,
        }
    }
}

impl CcittFaxDecoder {
    /// Decoder with the PDF-spec CCITTFaxDecode defaults (no `/DecodeParms`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a decoder from the stream's decode parameters, if any.
    pub fn from_params(params: Option<&DecodeParams>) -> Self {
        match params {
            Some(p) => Self {
                k: p.ccitt_k,
                columns: p.ccitt_columns.map(|c| c.max(1) as usize).unwrap_or(1728),
                rows: p.ccitt_rows,
                black_is_1: p.ccitt_black_is_1,
                encoded_byte_align: p.ccitt_encoded_byte_align,
            },
            None => Self::default(),
        }
    }
}

impl StreamDecoder for CcittFaxDecoder {
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let columns = self.columns.max(1);
        let mut reader = BitReader::new(input);
        let mut output = Vec::new();
        // Imaginary all-white reference line above the first row: no
        // changing elements before the end of the row.
        let mut ref_line: Vec<usize> = vec![columns, columns];
        let max_rows = if self.rows > 0 { self.rows } else { usize::MAX };
        let mut row_count = 0usize;

        while row_count < max_rows && !reader.is_exhausted() {
            if self.encoded_byte_align {
                reader.align_byte();
                if reader.is_exhausted() {
                    break;
                }
            }

            skip_eol(&mut reader);
            if reader.is_exhausted() {
                break;
            }

            let is_2d = if self.k < 0 {
                true
            } else if self.k == 0 {
                false
            } else {
                let tag = reader.peek(1);
                reader.consume(1);
                tag == 0
            };

            let line = if is_2d {
                decode_2d_line(&mut reader, &ref_line, columns)
            } else {
                decode_1d_line(&mut reader, columns)
            };

            let transitions = match line {
                Ok(t) => t,
                Err(_) => {
                    log::debug!(
                        "CCITTFaxDecode: stopping after {} row(s), decode error near bit {}",
                        row_count,
                        reader.pos
                    );
                    break;
                },
            };

            output.extend(line_to_bits(&transitions, columns, self.black_is_1));
            ref_line = transitions;
            row_count += 1;
        }

        log::debug!(
            "CCITTFaxDecode: decoded {} row(s) ({} bytes) from {} input bytes",
            row_count,
            output.len(),
            input.len()
        );

        Ok(output)
    }

    fn name(&self) -> &str {
        "CCITTFaxDecode"
    }
}

/// MSB-first bit reader over a byte slice. Reads past the end return 0 bits
/// so callers can peek without bounds-checking every call; `is_exhausted`
/// reports when the real data has run out.
struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn total_bits(&self) -> usize {
        self.data.len() * 8
    }

    fn is_exhausted(&self) -> bool {
        self.pos >= self.total_bits()
    }

    fn peek(&self, n: usize) -> u32 {
        let mut v: u32 = 0;
        for i in 0..n {
            let bit_index = self.pos + i;
            let bit = if bit_index < self.total_bits() {
                let byte = self.data[bit_index / 8];
                (byte >> (7 - (bit_index % 8))) & 1
            } else {
                0
            };
            v = (v << 1) | bit as u32;
        }
        v
    }

    fn consume(&mut self, n: usize) {
        self.pos += n;
    }

    fn align_byte(&mut self) {
        let rem = self.pos % 8;
        if rem != 0 {
            self.pos += 8 - rem;
        }
    }
}

/// Skip a run-in End-Of-Line code (`000000000001`), and any fill bits
/// preceding it, if present. EOL is optional; absence is not an error.
fn skip_eol(reader: &mut BitReader) {
    loop {
        if reader.peek(12) == 1 {
            reader.consume(12);
            continue;
        }
        break;
    }
}

enum Mode {
    Pass,
    Horizontal,
    Vertical(i8),
}

fn decode_mode(reader: &mut BitReader) -> Result<Mode> {
    if reader.peek(1) == 0b1 {
        reader.consume(1);
        return Ok(Mode::Vertical(0));
    }
    if reader.peek(3) == 0b011 {
        reader.consume(3);
        return Ok(Mode::Vertical(1));
    }
    if reader.peek(3) == 0b010 {
        reader.consume(3);
        return Ok(Mode::Vertical(-1));
    }
    if reader.peek(3) == 0b001 {
        reader.consume(3);
        return Ok(Mode::Horizontal);
    }
    if reader.peek(4) == 0b0001 {
        reader.consume(4);
        return Ok(Mode::Pass);
    }
    if reader.peek(6) == 0b000011 {
        reader.consume(6);
        return Ok(Mode::Vertical(2));
    }
    if reader.peek(6) == 0b000010 {
        reader.consume(6);
        return Ok(Mode::Vertical(-2));
    }
    if reader.peek(7) == 0b0000011 {
        reader.consume(7);
        return Ok(Mode::Vertical(3));
    }
    if reader.peek(7) == 0b0000010 {
        reader.consume(7);
        return Ok(Mode::Vertical(-3));
    }
    Err(crate::error::Error::Decode(
        "CCITTFaxDecode: unrecognized 2D mode code".to_string(),
    ))
}

/// Find (b1, b2): the first changing element on the reference line to the
/// right of `a0` whose colour is opposite `a0`'s colour, and the element
/// after it. ITU-T T.6, Section 2.2.1.
fn find_b1_b2(ref_line: &[usize], a0: i64, color_white: bool, columns: usize) -> (usize, usize) {
    let mut i = 0;
    while i < ref_line.len() && (ref_line[i] as i64) <= a0 {
        i += 1;
    }
    // Changing elements alternate colour starting from white; an
    // even index is a transition into black, odd into white.
    if i < ref_line.len() {
        let transitions_to_black = i % 2 == 0;
        if transitions_to_black != color_white {
            i += 1;
        }
    }
    let b1 = ref_line.get(i).copied().unwrap_or(columns);
    let b2 = ref_line.get(i + 1).copied().unwrap_or(columns);
    (b1, b2)
}

fn decode_2d_line(reader: &mut BitReader, ref_line: &[usize], columns: usize) -> Result<Vec<usize>> {
    let mut cur_line: Vec<usize> = Vec::new();
    let mut a0: i64 = -1;
    let mut color_white = true;

    while a0 < columns as i64 {
        let (b1, b2) = find_b1_b2(ref_line, a0, color_white, columns);
        match decode_mode(reader)? {
            Mode::Pass => {
                a0 = b2 as i64;
            },
            Mode::Horizontal => {
                let run1 = decode_run(reader, color_white)? as usize;
                let run2 = decode_run(reader, !color_white)? as usize;
                let start = a0.max(0) as usize;
                let a1 = (start + run1).min(columns);
                let a2 = (a1 + run2).min(columns);
                cur_line.push(a1);
                cur_line.push(a2);
                a0 = a2 as i64;
            },
            Mode::Vertical(offset) => {
                let a1 = (b1 as i64 + offset as i64).clamp(0, columns as i64) as usize;
                cur_line.push(a1);
                a0 = a1 as i64;
                color_white = !color_white;
            },
        }
    }

    Ok(cur_line)
}

fn decode_1d_line(reader: &mut BitReader, columns: usize) -> Result<Vec<usize>> {
    let mut cur_line = Vec::new();
    let mut pos = 0usize;
    let mut white = true;

    while pos < columns {
        let run = decode_run(reader, white)? as usize;
        pos = (pos + run).min(columns);
        cur_line.push(pos);
        white = !white;
    }

    Ok(cur_line)
}

/// Decode one run length, following makeup codes (>= 64) with a terminating
/// code (< 64) as needed, per ITU-T T.4 Tables 2-3.
fn decode_run(reader: &mut BitReader, white: bool) -> Result<u32> {
    let mut total = 0u32;
    loop {
        let run = lookup_run_code(reader, white)?;
        total += run;
        if run < 64 {
            return Ok(total);
        }
    }
}

fn lookup_run_code(reader: &mut BitReader, white: bool) -> Result<u32> {
    let table: &[(u8, u16, u32)] = if white { WHITE_CODES } else { BLACK_CODES };
    for &(bits, code, run) in table {
        if reader.peek(bits as usize) == code as u32 {
            reader.consume(bits as usize);
            return Ok(run);
        }
    }
    for &(bits, code, run) in EXT_MAKEUP_CODES {
        if reader.peek(bits as usize) == code as u32 {
            reader.consume(bits as usize);
            return Ok(run);
        }
    }
    Err(crate::error::Error::Decode(format!(
        "CCITTFaxDecode: invalid {} run-length code",
        if white { "white" } else { "black" }
    )))
}

/// Render a line's changing-element list (alternating white/black runs,
/// starting white) into packed 1-bit-per-pixel bytes honouring `/BlackIs1`.
fn line_to_bits(transitions: &[usize], columns: usize, black_is_1: bool) -> Vec<u8> {
    let mut packed = vec![0u8; columns.div_ceil(8)];
    let mut pos = 0usize;
    let mut white = true;

    let paint = |from: usize, to: usize, white: bool, packed: &mut Vec<u8>| {
        let set_bit = if black_is_1 { !white } else { white };
        if !set_bit {
            return;
        }
        for x in from..to {
            packed[x / 8] |= 0x80 >> (x % 8);
        }
    };

    for &t in transitions {
        let t = t.min(columns);
        paint(pos, t, white, &mut packed);
        pos = t;
        white = !white;
    }
    paint(pos, columns, white, &mut packed);

    packed
}

// ITU-T T.4 Tables 2-3: terminating (run 0-63) and makeup (multiples of 64
// up to 1728) codes for white runs.
#[rustfmt::skip]
const WHITE_CODES: &[(u8, u16, u32)] = &[
    (8, 0x35, 0), (6, 0x07, 1), (4, 0x07, 2), (4, 0x08, 3),
    (4, 0x0B, 4), (4, 0x0C, 5), (4, 0x0E, 6), (4, 0x0F, 7),
    (5, 0x13, 8), (5, 0x14, 9), (5, 0x07, 10), (5, 0x08, 11),
    (6, 0x08, 12), (6, 0x03, 13), (6, 0x34, 14), (6, 0x35, 15),
    (6, 0x2A, 16), (6, 0x2B, 17), (7, 0x27, 18), (7, 0x0C, 19),
    (7, 0x08, 20), (7, 0x17, 21), (7, 0x03, 22), (7, 0x04, 23),
    (7, 0x28, 24), (7, 0x2B, 25), (7, 0x13, 26), (7, 0x24, 27),
    (7, 0x18, 28), (8, 0x02, 29), (8, 0x03, 30), (8, 0x1A, 31),
    (8, 0x1B, 32), (8, 0x12, 33), (8, 0x13, 34), (8, 0x14, 35),
    (8, 0x15, 36), (8, 0x16, 37), (8, 0x17, 38), (8, 0x28, 39),
    (8, 0x29, 40), (8, 0x2A, 41), (8, 0x2B, 42), (8, 0x2C, 43),
    (8, 0x2D, 44), (8, 0x04, 45), (8, 0x05, 46), (8, 0x0A, 47),
    (8, 0x0B, 48), (8, 0x52, 49), (8, 0x53, 50), (8, 0x54, 51),
    (8, 0x55, 52), (8, 0x24, 53), (8, 0x25, 54), (8, 0x58, 55),
    (8, 0x59, 56), (8, 0x5A, 57), (8, 0x5B, 58), (8, 0x4A, 59),
    (8, 0x4B, 60), (8, 0x32, 61), (8, 0x33, 62), (8, 0x34, 63),
    (5, 0x1B, 64), (5, 0x12, 128), (6, 0x17, 192), (7, 0x37, 256),
    (8, 0x36, 320), (8, 0x37, 384), (8, 0x64, 448), (8, 0x65, 512),
    (8, 0x68, 576), (8, 0x67, 640), (9, 0xCC, 704), (9, 0xCD, 768),
    (9, 0xD2, 832), (9, 0xD3, 896), (9, 0xD4, 960), (9, 0xD5, 1024),
    (9, 0xD6, 1088), (9, 0xD7, 1152), (9, 0xD8, 1216), (9, 0xD9, 1280),
    (9, 0xDA, 1344), (9, 0xDB, 1408), (9, 0x98, 1472), (9, 0x99, 1536),
    (9, 0x9A, 1600), (6, 0x18, 1664), (9, 0x9B, 1728),
];

// ITU-T T.4 Tables 2-3: terminating (run 0-63) and makeup (multiples of 64
// up to 1728) codes for black runs.
#[rustfmt::skip]
const BLACK_CODES: &[(u8, u16, u32)] = &[
    (10, 0x37, 0), (3, 0x02, 1), (2, 0x03, 2), (2, 0x02, 3),
    (3, 0x03, 4), (4, 0x03, 5), (4, 0x02, 6), (5, 0x03, 7),
    (6, 0x05, 8), (6, 0x04, 9), (7, 0x04, 10), (7, 0x05, 11),
    (7, 0x07, 12), (8, 0x04, 13), (8, 0x07, 14), (9, 0x18, 15),
    (10, 0x17, 16), (10, 0x18, 17), (10, 0x08, 18), (11, 0x67, 19),
    (11, 0x68, 20), (11, 0x6C, 21), (11, 0x37, 22), (11, 0x28, 23),
    (11, 0x17, 24), (11, 0x18, 25), (12, 0xCA, 26), (12, 0xCB, 27),
    (12, 0xCC, 28), (12, 0xCD, 29), (12, 0x68, 30), (12, 0x69, 31),
    (12, 0x6A, 32), (12, 0x6B, 33), (12, 0xD2, 34), (12, 0xD3, 35),
    (12, 0xD4, 36), (12, 0xD5, 37), (12, 0xD6, 38), (12, 0xD7, 39),
    (12, 0x6C, 40), (12, 0x6D, 41), (12, 0xDA, 42), (12, 0xDB, 43),
    (12, 0x54, 44), (12, 0x55, 45), (12, 0x56, 46), (12, 0x57, 47),
    (12, 0x64, 48), (12, 0x65, 49), (12, 0x52, 50), (12, 0x53, 51),
    (12, 0x24, 52), (12, 0x37, 53), (12, 0x38, 54), (12, 0x27, 55),
    (12, 0x28, 56), (12, 0x58, 57), (12, 0x59, 58), (12, 0x2B, 59),
    (12, 0x2C, 60), (12, 0x5A, 61), (12, 0x66, 62), (12, 0x67, 63),
    (10, 0x0F, 64), (12, 0xC8, 128), (12, 0xC9, 192), (12, 0x5B, 256),
    (12, 0x33, 320), (12, 0x34, 384), (12, 0x35, 448), (13, 0x6C, 512),
    (13, 0x6D, 576), (13, 0x4A, 640), (13, 0x4B, 704), (13, 0x4C, 768),
    (13, 0x4D, 832), (13, 0x72, 896), (13, 0x73, 960), (13, 0x74, 1024),
    (13, 0x75, 1088), (13, 0x76, 1152), (13, 0x77, 1216), (13, 0x52, 1280),
    (13, 0x53, 1344), (13, 0x54, 1408), (13, 0x55, 1472), (13, 0x5A, 1536),
    (13, 0x5B, 1600), (13, 0x64, 1664), (13, 0x65, 1728),
];

// ITU-T T.4 Table 3: extended makeup codes (1792-2560), shared by both colours.
#[rustfmt::skip]
const EXT_MAKEUP_CODES: &[(u8, u16, u32)] = &[
    (11, 0x08, 1792), (11, 0x0C, 1856), (11, 0x0D, 1920),
    (12, 0x12, 1984), (12, 0x13, 2048), (12, 0x14, 2112),
    (12, 0x15, 2176), (12, 0x16, 2240), (12, 0x17, 2304),
    (12, 0x1C, 2368), (12, 0x1D, 2432), (12, 0x1E, 2496),
    (12, 0x1F, 2560),
];
