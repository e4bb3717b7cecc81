//! Microdata vocabulary and tag hashing.
//!
//! A field's tag is derived from its microdata pair only, so it survives id
//! rewrites such as list wrapping and can be used to find "the same" field
//! across connectors.

use syncfield_ids::ID_SPLIT;

/// Platform specific schemas url.
pub const META_URL: &str = "https://syncfield.dev/schemas";
/// Object identifier.
pub const META_OBJECTID: &str = "ObjectId";
/// Object creation date.
pub const META_DATECREATED: &str = "DateCreated";
/// Identifier of the server the object comes from.
pub const META_ORIGIN_NODE_ID: &str = "SourceNodeId";
/// Name of the server the object comes from.
pub const META_ORIGIN_NODE_NAME: &str = "SourceNodeName";

/// Tag for a microdata pair: md5 hex digest of `item_prop::item_type`.
pub fn tag(item_type: &str, item_prop: &str) -> String {
    let key = format!("{item_prop}{ID_SPLIT}{item_type}");
    format!("{:x}", md5::compute(key.as_bytes()))
}
