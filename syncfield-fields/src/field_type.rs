//! Well-known field type tags.
//!
//! Types are opaque strings to the builder. These constants name the tags the
//! platform understands out of the box. Composite types reuse the identifier
//! codec: `varchar@list` is a varchar inside a list, `objectid::Product` is a
//! reference to a Product.

use syncfield_ids::{is_id_field, LIST_SPLIT};

pub const BOOL: &str = "bool";
pub const INT: &str = "int";
pub const DOUBLE: &str = "double";
pub const VARCHAR: &str = "varchar";
pub const TEXT: &str = "text";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const DATE: &str = "date";
pub const DATETIME: &str = "datetime";
pub const LANG: &str = "lang";
pub const COUNTRY: &str = "country";
pub const STATE: &str = "state";
pub const URL: &str = "url";
pub const MULTI_VARCHAR: &str = "mvarchar";
pub const INLINE: &str = "inline";
pub const LIST: &str = "list";
pub const ID: &str = "objectid";
pub const CURRENCY: &str = "currency";
pub const PRICE: &str = "price";
pub const IMAGE: &str = "image";
pub const FILE: &str = "file";
pub const STREAM: &str = "stream";

/// Types accepting `multilang` unless configured otherwise.
pub const MULTILANG: [&str; 3] = [VARCHAR, TEXT, INLINE];

/// True for a type rewritten by `in_list`, e.g. `varchar@list`.
///
/// Only the outermost wrapping counts, so a type listed twice
/// (`varchar@list@list`) is still a list type.
pub fn is_list(field_type: &str) -> bool {
    field_type
        .strip_suffix(LIST)
        .and_then(|rest| rest.strip_suffix(LIST_SPLIT))
        .is_some()
}

/// The referenced object type of an `objectid::<Type>` tag.
pub fn is_id(field_type: &str) -> Option<&str> {
    is_id_field(field_type)
        .filter(|reference| reference.object_id == ID)
        .map(|reference| reference.object_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syncfield_ids::{encode_list_member, encode_object_ref};

    #[test]
    fn list_types() {
        assert!(is_list(&encode_list_member(VARCHAR, LIST)));
        assert!(!is_list(VARCHAR));
        assert!(!is_list("varchar@lines"));
        assert!(!is_list("varchar@xlist"));
    }

    #[test]
    fn nested_list_types() {
        let twice = encode_list_member(&encode_list_member(VARCHAR, LIST), LIST);
        assert_eq!(twice, "varchar@list@list");
        assert!(is_list(&twice));
        assert!(is_list(&encode_list_member(&encode_object_ref(ID, "Product"), LIST)));
    }

    #[test]
    fn id_types() {
        assert_eq!(is_id(&encode_object_ref(ID, "Product")), Some("Product"));
        assert_eq!(is_id("42::Product"), None);
        assert_eq!(is_id(VARCHAR), None);
    }
}
