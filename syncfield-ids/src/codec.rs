//! Split and join functions for composite identifiers.
//!
//! Callers holding an optional key use `Option::and_then` (or `map` for
//! [`base_type`]), so an absent key stays absent:
//!
//! ```
//! use syncfield_ids::{base_type, field_name};
//!
//! let missing: Option<&str> = None;
//! assert_eq!(missing.and_then(field_name), None);
//! assert_eq!(missing.map(base_type), None);
//! assert_eq!(Some("").map(base_type), Some(""));
//! ```

use crate::identifier::{ListMember, ObjectRef};

/// Delimiter between a field and the list that contains it.
pub const LIST_SPLIT: &str = "@";

/// Delimiter between an object identifier and the object type.
pub const ID_SPLIT: &str = "::";

/// Split a key at its first `@` into field and list parts.
///
/// Returns `None` for an empty key or a key without `@`.
pub fn is_list_field(id: &str) -> Option<ListMember<'_>> {
    let (field, list) = id.split_once(LIST_SPLIT)?;
    Some(ListMember { field, list })
}

/// The part of a list member key before the first `@`.
pub fn field_name(id: &str) -> Option<&str> {
    is_list_field(id).map(|member| member.field)
}

/// The part of a list member key after the first `@`.
pub fn list_name(id: &str) -> Option<&str> {
    is_list_field(id).map(|member| member.list)
}

/// Split a key at its first `::` into object id and object type.
///
/// Returns `None` for an empty key or a key without `::`.
pub fn is_id_field(id: &str) -> Option<ObjectRef<'_>> {
    let (object_id, object_type) = id.split_once(ID_SPLIT)?;
    Some(ObjectRef {
        object_id,
        object_type,
    })
}

/// The part of an object reference before the first `::`.
pub fn object_id(id: &str) -> Option<&str> {
    is_id_field(id).map(|reference| reference.object_id)
}

/// The part of an object reference after the first `::`.
pub fn object_type(id: &str) -> Option<&str> {
    is_id_field(id).map(|reference| reference.object_type)
}

/// Resolve the innermost scalar name of a composite key.
///
/// List wrapping is peeled first (keeping the field part), then reference
/// wrapping (keeping the object type). An empty key resolves to itself.
///
/// The field part before the first `@` holds no further `@`, so one list
/// split is enough; reference layers are then peeled in a loop.
pub fn base_type(id: &str) -> &str {
    let mut base = field_name(id).unwrap_or(id);
    while let Some(inner) = object_type(base) {
        base = inner;
    }
    base
}

/// Build `field@list`.
pub fn encode_list_member(field: &str, list: &str) -> String {
    format!("{field}{LIST_SPLIT}{list}")
}

/// Build `objectId::objectType`.
pub fn encode_object_ref(object_id: &str, object_type: &str) -> String {
    format!("{object_id}{ID_SPLIT}{object_type}")
}
