//! Registry of predefined CJK CMaps.
//!
//! Per PDF spec ISO 32000-1:2008 Section 9.7.5.2, a Type0 font's `/Encoding`
//! entry may name one of a fixed set of predefined CMaps instead of carrying
//! an embedded CMap stream. Each predefined CMap identifies a character
//! collection (via `CIDSystemInfo`), a writing mode, and a byte-to-CID
//! decoding scheme.
//!
//! `Identity-H`/`Identity-V` are exact: every two bytes of a show-text string
//! is the CID itself, big-endian, no table lookup involved. The other
//! entries in this registry carry accurate `CIDSystemInfo`/`WMode` metadata
//! (sufficient to route CID-to-Unicode lookups through
//! [`crate::fonts::cid_mappings`]) and decode codes at their nominal
//! codespace width; encoding-specific lead-byte detection (e.g. Shift-JIS's
//! variable-width rules for 90ms-RKSJ-H) is not reproduced here, since no
//! vendor CMap program data is available in this crate to drive it exactly.

use crate::fonts::font_dict::CIDSystemInfo;
use phf::phf_map;

/// Vertical vs. horizontal writing mode, carried by every predefined CMap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WMode {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    registry: &'static str,
    ordering: &'static str,
    supplement: i32,
    wmode: WMode,
    byte_len: u8,
}

/// A resolved predefined CMap: its identity, character collection, writing
/// mode, and fixed-width codespace decoding.
#[derive(Debug, Clone)]
pub struct PredefinedCMap {
    pub name: &'static str,
    pub cid_system_info: CIDSystemInfo,
    pub wmode: WMode,
    byte_len: u8,
}

impl PredefinedCMap {
    /// The fixed codespace width (in bytes) this predefined CMap decodes at.
    pub fn byte_len(&self) -> u8 {
        self.byte_len
    }

    /// Decode the CID at the start of `bytes`, returning the CID and the
    /// number of bytes consumed. `Identity-H/V` reads a raw big-endian
    /// 16-bit CID; all other entries decode at their registered codespace
    /// width.
    pub fn decode(&self, bytes: &[u8]) -> Option<(u32, usize)> {
        let len = self.byte_len as usize;
        if bytes.len() < len {
            return None;
        }
        let mut cid: u32 = 0;
        for &b in &bytes[..len] {
            cid = (cid << 8) | b as u32;
        }
        Some((cid, len))
    }
}

static REGISTRY: phf::Map<&'static str, Entry> = phf_map! {
    "Identity-H" => Entry { registry: "Adobe", ordering: "Identity", supplement: 0, wmode: WMode::Horizontal, byte_len: 2 },
    "Identity-V" => Entry { registry: "Adobe", ordering: "Identity", supplement: 0, wmode: WMode::Vertical, byte_len: 2 },

    "GBK-EUC-H" => Entry { registry: "Adobe", ordering: "GB1", supplement: 2, wmode: WMode::Horizontal, byte_len: 2 },
    "GBK-EUC-V" => Entry { registry: "Adobe", ordering: "GB1", supplement: 2, wmode: WMode::Vertical, byte_len: 2 },
    "UniGB-UCS2-H" => Entry { registry: "Adobe", ordering: "GB1", supplement: 4, wmode: WMode::Horizontal, byte_len: 2 },
    "UniGB-UCS2-V" => Entry { registry: "Adobe", ordering: "GB1", supplement: 4, wmode: WMode::Vertical, byte_len: 2 },
    "UniGB-UTF16-H" => Entry { registry: "Adobe", ordering: "GB1", supplement: 4, wmode: WMode::Horizontal, byte_len: 2 },
    "UniGB-UTF16-V" => Entry { registry: "Adobe", ordering: "GB1", supplement: 4, wmode: WMode::Vertical, byte_len: 2 },

    "B5-H" => Entry { registry: "Adobe", ordering: "CNS1", supplement: 0, wmode: WMode::Horizontal, byte_len: 2 },
    "B5-V" => Entry { registry: "Adobe", ordering: "CNS1", supplement: 0, wmode: WMode::Vertical, byte_len: 2 },
    "UniCNS-UCS2-H" => Entry { registry: "Adobe", ordering: "CNS1", supplement: 3, wmode: WMode::Horizontal, byte_len: 2 },
    "UniCNS-UCS2-V" => Entry { registry: "Adobe", ordering: "CNS1", supplement: 3, wmode: WMode::Vertical, byte_len: 2 },
    "UniCNS-UTF16-H" => Entry { registry: "Adobe", ordering: "CNS1", supplement: 3, wmode: WMode::Horizontal, byte_len: 2 },
    "UniCNS-UTF16-V" => Entry { registry: "Adobe", ordering: "CNS1", supplement: 3, wmode: WMode::Vertical, byte_len: 2 },

    "90ms-RKSJ-H" => Entry { registry: "Adobe", ordering: "Japan1", supplement: 2, wmode: WMode::Horizontal, byte_len: 2 },
    "90ms-RKSJ-V" => Entry { registry: "Adobe", ordering: "Japan1", supplement: 2, wmode: WMode::Vertical, byte_len: 2 },
    "UniJIS-UCS2-H" => Entry { registry: "Adobe", ordering: "Japan1", supplement: 4, wmode: WMode::Horizontal, byte_len: 2 },
    "UniJIS-UCS2-V" => Entry { registry: "Adobe", ordering: "Japan1", supplement: 4, wmode: WMode::Vertical, byte_len: 2 },

    "KSC-EUC-H" => Entry { registry: "Adobe", ordering: "Korea1", supplement: 0, wmode: WMode::Horizontal, byte_len: 2 },
    "KSC-EUC-V" => Entry { registry: "Adobe", ordering: "Korea1", supplement: 0, wmode: WMode::Vertical, byte_len: 2 },
    "UniKS-UCS2-H" => Entry { registry: "Adobe", ordering: "Korea1", supplement: 1, wmode: WMode::Horizontal, byte_len: 2 },
    "UniKS-UCS2-V" => Entry { registry: "Adobe", ordering: "Korea1", supplement: 1, wmode: WMode::Vertical, byte_len: 2 },
    "UniKS-UTF16-H" => Entry { registry: "Adobe", ordering: "Korea1", supplement: 1, wmode: WMode::Horizontal, byte_len: 2 },
    "UniKS-UTF16-V" => Entry { registry: "Adobe", ordering: "Korea1", supplement: 1, wmode: WMode::Vertical, byte_len: 2 },
};

/// Look up a predefined CMap by name, e.g. from a Type0 font's `/Encoding`.
pub fn predefined_cmap(name: &str) -> Option<PredefinedCMap> {
    let entry = REGISTRY.get(name)?;
    Some(PredefinedCMap {
        name: resolve_static_name(name)?,
        cid_system_info: CIDSystemInfo {
            registry: entry.registry.to_string(),
            ordering: entry.ordering.to_string(),
            supplement: entry.supplement,
        },
        wmode: entry.wmode,
        byte_len: entry.byte_len,
    })
}

/// `phf::Map::get` hands back a reference keyed by the caller's string; to
/// keep `PredefinedCMap::name` as `&'static str` we re-resolve it against the
/// map's own key set rather than leaking the caller's lifetime.
fn resolve_static_name(name: &str) -> Option<&'static str> {
    REGISTRY.keys().find(|k| **k == name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_h_decodes_two_byte_big_endian_cid() {
        let cmap = predefined_cmap("Identity-H").unwrap();
        assert_eq!(cmap.decode(&[0x12, 0x34]), Some((0x1234, 2)));
        assert_eq!(cmap.wmode, WMode::Horizontal);
    }

    #[test]
    fn identity_v_has_vertical_wmode() {
        let cmap = predefined_cmap("Identity-V").unwrap();
        assert_eq!(cmap.wmode, WMode::Vertical);
    }

    #[test]
    fn unigb_ucs2_h_carries_gb1_system_info() {
        let cmap = predefined_cmap("UniGB-UCS2-H").unwrap();
        assert_eq!(cmap.cid_system_info.registry, "Adobe");
        assert_eq!(cmap.cid_system_info.ordering, "GB1");
        assert_eq!(cmap.decode(&[0x00, 0x22]), Some((0x22, 2)));
    }

    #[test]
    fn unknown_name_returns_none() {
        assert!(predefined_cmap("Bogus-Encoding-H").is_none());
    }

    #[test]
    fn decode_rejects_truncated_input() {
        let cmap = predefined_cmap("Identity-H").unwrap();
        assert_eq!(cmap.decode(&[0x12]), None);
    }
}
