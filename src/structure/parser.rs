//! Parser for PDF structure trees.
//!
//! Parses StructTreeRoot and StructElem dictionaries according to PDF spec Section 14.7.

use super::types::{ParentTree, StructChild, StructElem, StructTreeRoot, StructType};
use crate::document::PdfDocument;
use crate::error::Error;
use crate::object::Object;
use std::collections::HashMap;

/// Helper function to resolve an object (handles both direct objects and references).
fn resolve_object(document: &mut PdfDocument, obj: &Object) -> Result<Object, Error> {
    match obj {
        Object::Reference(obj_ref) => document.load_object(*obj_ref),
        _ => Ok(obj.clone()),
    }
}

/// Parse the structure tree from a PDF document.
///
/// Reads the StructTreeRoot from the document catalog and recursively parses
/// all structure elements.
///
/// # Arguments
/// * `document` - The PDF document
///
/// # Returns
/// * `Ok(Some(StructTreeRoot))` - If the document has a structure tree
/// * `Ok(None)` - If the document is not tagged (no StructTreeRoot)
/// * `Err(Error)` - If parsing fails
pub fn parse_structure_tree(document: &mut PdfDocument) -> Result<Option<StructTreeRoot>, Error> {
    // Get catalog
    let catalog = document.catalog()?;

    // Check for StructTreeRoot in catalog dictionary
    let catalog_dict = catalog
        .as_dict()
        .ok_or_else(|| Error::InvalidPdf("Catalog is not a dictionary".into()))?;

    let struct_tree_root_ref = match catalog_dict.get("StructTreeRoot") {
        Some(obj) => obj,
        None => return Ok(None), // Not a tagged PDF
    };

    // Resolve the StructTreeRoot object
    let struct_tree_root_obj = resolve_object(document, struct_tree_root_ref)?;

    // Parse StructTreeRoot dictionary
    let struct_tree_dict = struct_tree_root_obj
        .as_dict()
        .ok_or_else(|| Error::InvalidPdf("StructTreeRoot is not a dictionary".into()))?;

    let mut struct_tree = StructTreeRoot::new();

    // Parse RoleMap (optional)
    if let Some(role_map_obj) = struct_tree_dict.get("RoleMap") {
        let role_map_obj = resolve_object(document, role_map_obj)?;
        if let Some(role_map_dict) = role_map_obj.as_dict() {
            for (key, value) in role_map_dict.iter() {
                if let Some(name) = value.as_name() {
                    struct_tree.role_map.insert(key.clone(), name.to_string());
                }
            }
        }
    }

    // Parse ParentTree (optional)
    if let Some(parent_tree_obj) = struct_tree_dict.get("ParentTree") {
        let parent_tree = parse_parent_tree(document, parent_tree_obj, &struct_tree.role_map)?;
        struct_tree.parent_tree = Some(parent_tree);
    }

    // Parse K (children) - can be a single element or array of elements
    if let Some(k_obj) = struct_tree_dict.get("K") {
        let k_obj = resolve_object(document, k_obj)?;

        match k_obj {
            Object::Array(arr) => {
                // Multiple root elements
                for elem_obj in arr {
                    if let Some(elem) =
                        parse_struct_elem(document, &elem_obj, &struct_tree.role_map)?
                    {
                        struct_tree.add_root_element(elem);
                    }
                }
            },
            _ => {
                // Single root element
                if let Some(elem) = parse_struct_elem(document, &k_obj, &struct_tree.role_map)? {
                    struct_tree.add_root_element(elem);
                }
            },
        }
    }

    Ok(Some(struct_tree))
}

/// Parse a structure element (StructElem) from a PDF object.
///
/// # Arguments
/// * `document` - The PDF document
/// * `obj` - The object to parse (should be a dictionary)
/// * `role_map` - RoleMap for custom structure types
///
/// # Returns
/// * `Ok(Some(StructElem))` - Successfully parsed structure element
/// * `Ok(None)` - Not a valid structure element
/// * `Err(Error)` - Parsing error
fn parse_struct_elem(
    document: &mut PdfDocument,
    obj: &Object,
    role_map: &HashMap<String, String>,
) -> Result<Option<StructElem>, Error> {
    let obj = resolve_object(document, obj)?;

    let dict = match obj.as_dict() {
        Some(d) => d,
        None => return Ok(None), // Not a dictionary, skip
    };

    // Check /Type (should be /StructElem, but optional)
    if let Some(type_obj) = dict.get("Type") {
        if let Some(type_name) = type_obj.as_name() {
            if type_name != "StructElem" {
                return Ok(None); // Not a StructElem
            }
        }
    }

    // Get /S (structure type) - REQUIRED
    let s_obj = dict
        .get("S")
        .ok_or_else(|| Error::InvalidPdf("StructElem missing /S".into()))?;
    let s_name = s_obj
        .as_name()
        .ok_or_else(|| Error::InvalidPdf("StructElem /S is not a name".into()))?;

    // Map custom types to standard types using RoleMap
    let struct_type_str = role_map.get(s_name).map(|s| s.as_str()).unwrap_or(s_name);
    let struct_type = StructType::from_str(struct_type_str);

    let mut struct_elem = StructElem::new(struct_type);

    // Get /Pg (page) - optional
    if let Some(_pg_obj) = dict.get("Pg") {
        // Page reference - we'd need to resolve this to a page number
        // For now, skip (requires page tree traversal)
    }

    // Get /A (attributes) - optional
    if let Some(attr_obj) = dict.get("A") {
        let attr_obj = resolve_object(document, attr_obj)?;
        if let Some(attr_dict) = attr_obj.as_dict() {
            for (key, value) in attr_dict.iter() {
                struct_elem.attributes.insert(key.clone(), value.clone());
            }
        }
    }

    // Parse /K (children) - can be:
    // 1. A single integer (MCID)
    // 2. A dictionary (marked content reference with MCID and Pg)
    // 3. An array of any of the above or StructElems
    // 4. Another StructElem (dictionary with /Type /StructElem)
    if let Some(k_obj) = dict.get("K") {
        let k_obj = resolve_object(document, k_obj)?;
        parse_k_children(document, &k_obj, &mut struct_elem, role_map)?;
    }

    Ok(Some(struct_elem))
}

/// Parse the /K entry (children) of a structure element.
fn parse_k_children(
    document: &mut PdfDocument,
    k_obj: &Object,
    parent: &mut StructElem,
    role_map: &HashMap<String, String>,
) -> Result<(), Error> {
    match k_obj {
        Object::Integer(mcid) => {
            // Single MCID
            parent.add_child(StructChild::MarkedContentRef {
                mcid: *mcid as u32,
                page: parent.page.unwrap_or(0), // Use parent's page if available
            });
        },

        Object::Array(arr) => {
            // Array of children
            for child_obj in arr {
                let child_obj = resolve_object(document, child_obj)?;

                match &child_obj {
                    Object::Integer(mcid) => {
                        // MCID
                        parent.add_child(StructChild::MarkedContentRef {
                            mcid: *mcid as u32,
                            page: parent.page.unwrap_or(0),
                        });
                    },

                    Object::Dictionary(_) => {
                        // Could be a StructElem or marked content reference
                        if let Some(child_elem) = parse_struct_elem(document, &child_obj, role_map)?
                        {
                            parent.add_child(StructChild::StructElem(Box::new(child_elem)));
                        } else {
                            // Try parsing as marked content reference
                            if let Some(mcr) = parse_marked_content_ref(document, &child_obj)? {
                                parent.add_child(mcr);
                            }
                        }
                    },

                    Object::Reference(obj_ref) => {
                        // Object reference to another StructElem
                        parent.add_child(StructChild::ObjectRef(obj_ref.id, obj_ref.gen));
                    },

                    _ => {
                        // Unknown child type, skip
                    },
                }
            }
        },

        Object::Dictionary(_) => {
            // Single dictionary child
            if let Some(child_elem) = parse_struct_elem(document, k_obj, role_map)? {
                parent.add_child(StructChild::StructElem(Box::new(child_elem)));
            } else {
                // Try parsing as marked content reference
                if let Some(mcr) = parse_marked_content_ref(document, k_obj)? {
                    parent.add_child(mcr);
                }
            }
        },

        Object::Reference(obj_ref) => {
            // Object reference to another StructElem
            parent.add_child(StructChild::ObjectRef(obj_ref.id, obj_ref.gen));
        },

        _ => {
            // Unknown K type
        },
    }

    Ok(())
}

/// Parse a marked content reference dictionary.
///
/// According to PDF spec, a marked content reference has:
/// - /Type /MCR
/// - /Pg - Page containing the marked content
/// - /MCID - Marked content ID
fn parse_marked_content_ref(
    document: &mut PdfDocument,
    obj: &Object,
) -> Result<Option<StructChild>, Error> {
    let dict = match obj.as_dict() {
        Some(d) => d,
        None => return Ok(None),
    };

    // Check for /Type /MCR
    if let Some(type_obj) = dict.get("Type") {
        if let Some(type_name) = type_obj.as_name() {
            if type_name != "MCR" {
                return Ok(None);
            }
        }
    }

    // Get /MCID
    let mcid = dict
        .get("MCID")
        .and_then(|obj| obj.as_integer())
        .ok_or_else(|| Error::InvalidPdf("MCR missing /MCID".into()))?;

    // Get /Pg (page reference), resolved to a 0-based page index; fall back
    // to 0 when /Pg is absent or doesn't resolve to a page in the tree.
    let page = match dict.get("Pg") {
        Some(Object::Reference(page_ref)) => document.find_page_index(*page_ref).unwrap_or(0),
        _ => 0,
    };

    Ok(Some(StructChild::MarkedContentRef {
        mcid: mcid as u32,
        page,
    }))
}

/// Parse the ParentTree from a PDF object.
///
/// The ParentTree is a number tree (PDF spec Section 7.9.7) keyed by each
/// page's /StructParents integer. Its value is either a single indirect
/// reference to a structure element (whole-page marked content) or an array
/// of references indexed by MCID (per-content-stream marked content).
fn parse_parent_tree(
    document: &mut PdfDocument,
    obj: &Object,
    role_map: &HashMap<String, String>,
) -> Result<ParentTree, Error> {
    let nums = parse_number_tree(document, obj, 0)?;

    let mut parent_tree = ParentTree::new();

    let page_count = document.page_count().unwrap_or(0);
    for page_index in 0..page_count {
        let page_ref = match document.get_page_ref(page_index) {
            Ok(r) => r,
            Err(_) => continue,
        };
        let page_obj = match document.load_object(page_ref) {
            Ok(o) => o,
            Err(_) => continue,
        };
        let page_dict = match page_obj.as_dict() {
            Some(d) => d,
            None => continue,
        };
        let struct_parents = match page_dict.get("StructParents").and_then(|o| o.as_integer()) {
            Some(n) if n >= 0 => n as u32,
            _ => continue,
        };
        let entry = match nums.get(&struct_parents) {
            Some(e) => e.clone(),
            None => continue,
        };

        let page_map = build_parent_tree_page_map(document, &entry, role_map)?;
        if !page_map.is_empty() {
            parent_tree.page_mappings.insert(page_index as u32, page_map);
        }
    }

    Ok(parent_tree)
}

/// Resolve one number-tree leaf value into its per-MCID entries.
///
/// A leaf is either a single reference/dict (whole-page marked content,
/// recorded under MCID 0) or an array indexed by MCID (per-content-stream
/// marked content). References are only resolved as far as needed to tell
/// the two shapes apart, then preserved by identity rather than eagerly
/// parsed into a full [`StructElem`].
fn build_parent_tree_page_map(
    document: &mut PdfDocument,
    entry: &Object,
    role_map: &HashMap<String, String>,
) -> Result<HashMap<u32, super::types::ParentTreeEntry>, Error> {
    let mut page_map = HashMap::new();

    let array_items = match entry {
        Object::Array(items) => Some(items.clone()),
        Object::Reference(obj_ref) => match document.load_object(*obj_ref) {
            Ok(Object::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    };

    if let Some(items) = array_items {
        for (mcid, item) in items.iter().enumerate() {
            if let Some(parent_entry) = parent_tree_entry_from_object(document, item, role_map)? {
                page_map.insert(mcid as u32, parent_entry);
            }
        }
    } else if let Some(parent_entry) = parent_tree_entry_from_object(document, entry, role_map)? {
        page_map.insert(0, parent_entry);
    }

    Ok(page_map)
}

/// Build a [`ParentTreeEntry`] from a number-tree leaf value.
///
/// Indirect references are recorded by identity (no recursive struct-elem
/// parse, avoiding re-walking the tree we already parsed via /K) while
/// inline dictionaries are parsed into a full [`StructElem`].
fn parent_tree_entry_from_object(
    document: &mut PdfDocument,
    obj: &Object,
    role_map: &HashMap<String, String>,
) -> Result<Option<super::types::ParentTreeEntry>, Error> {
    use super::types::ParentTreeEntry;

    match obj {
        Object::Reference(obj_ref) => {
            Ok(Some(ParentTreeEntry::ObjectRef(obj_ref.id, obj_ref.gen)))
        },
        Object::Dictionary(_) => {
            if let Some(elem) = parse_struct_elem(document, obj, role_map)? {
                Ok(Some(ParentTreeEntry::StructElem(Box::new(elem))))
            } else {
                Ok(None)
            }
        },
        _ => Ok(None),
    }
}

/// Recursively walk a number tree, flattening /Nums (and /Kids, bounded by
/// depth) into a single key -> value map. Values are kept unresolved
/// (references preserved by identity) so [`build_parent_tree_page_map`] can
/// decide, case by case, whether to preserve identity or parse inline.
/// Keys outside a node's /Limits are tolerated rather than rejected,
/// matching the lexer/recovery layer's general stance on structural drift.
fn parse_number_tree(
    document: &mut PdfDocument,
    obj: &Object,
    depth: u32,
) -> Result<HashMap<u32, Object>, Error> {
    const MAX_DEPTH: u32 = 32;
    let mut out = HashMap::new();
    if depth > MAX_DEPTH {
        return Ok(out);
    }

    let node = resolve_object(document, obj)?;
    let dict = match node.as_dict() {
        Some(d) => d,
        None => return Ok(out),
    };

    if let Some(nums_obj) = dict.get("Nums").cloned() {
        let nums_obj = resolve_object(document, &nums_obj)?;
        if let Some(arr) = nums_obj.as_array() {
            let mut iter = arr.iter();
            while let (Some(key_obj), Some(val_obj)) = (iter.next(), iter.next()) {
                if let Some(key) = key_obj.as_integer() {
                    out.insert(key as u32, val_obj.clone());
                }
            }
        }
    }

    if let Some(kids_obj) = dict.get("Kids").cloned() {
        let kids_obj = resolve_object(document, &kids_obj)?;
        if let Some(kids) = kids_obj.as_array() {
            for kid in kids {
                let child_map = parse_number_tree(document, kid, depth + 1)?;
                out.extend(child_map);
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_type_mapping() {
        let role_map = {
            let mut map = HashMap::new();
            map.insert("Heading1".to_string(), "H1".to_string());
            map
        };

        let mapped = role_map
            .get("Heading1")
            .map(|s| s.as_str())
            .unwrap_or("Heading1");
        assert_eq!(mapped, "H1");
    }
}
