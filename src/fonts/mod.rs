//! Font handling and encoding.
//!
//! This module provides font dictionary parsing, encoding handling,
//! and ToUnicode CMap parsing for accurate text extraction.
//!
//! Simple fonts (Type1/TrueType/Type3) and Type0 (CID) fonts are both
//! represented here, along with the predefined CJK CMap registry, the
//! Type1 `/FontFile` eexec parser, and the sharded caches/prefetcher that
//! sit in front of font resolution.

mod adobe_glyph_list;
pub mod character_mapper;
/// CID to Unicode mappings for predefined Adobe CJK character collections.
pub mod cid_mappings;
pub mod cmap;
pub mod encoding;
pub mod encoding_normalizer;
pub mod font_dict; // Private module - only used internally by font_dict
pub mod non_text_detection;
pub mod predefined_cmaps;
pub mod prefetcher;
pub mod type1;
/// TrueType font CMap parsing for glyph-to-character mapping.
pub mod truetype_cmap;

pub use character_mapper::CharacterMapper;
pub use cmap::{parse_tounicode_cmap, CMap, LazyCMap};
pub use encoding::UnicodeEncoder;
pub use encoding_normalizer::EncodingNormalizer;
pub use font_dict::{CIDSystemInfo, CIDToGIDMap, Encoding, FontInfo};
pub use non_text_detection::{
    CharacterConfidence, ConfidenceReason, NonTextDetector, NonTextStats,
};
pub use predefined_cmaps::predefined_cmap;
pub use prefetcher::FontPrefetcher;
pub use truetype_cmap::TrueTypeCMap;
pub use type1::{Type1FontInfo, Type1Parser};
