//! Composite field identifiers
//!
//! `syncfield-ids` splits and joins the flat string keys used to address
//! fields inside nested object graphs. A key is one of:
//!
//! - **scalar**: a bare token such as `price`
//! - **list member**: `field@list`, a field repeated once per list entry
//! - **object reference**: `objectId::objectType`, a pointer to another object
//!
//! The forms compose by concatenation, so `objectid::Product@items` is a list
//! member whose field part is itself an object reference. Every split happens
//! at the *first* delimiter, and list wrapping is peeled before reference
//! wrapping, which makes decomposition deterministic.
//!
//! All functions are pure. A key without the expected delimiter is not an
//! error: it yields `None`, which callers must keep distinct from an empty
//! string result.
//!
//! ```
//! use syncfield_ids::{base_type, encode_list_member, encode_object_ref, field_name};
//!
//! let product = encode_object_ref("objectid", "Product");
//! let key = encode_list_member(&product, "items");
//!
//! assert_eq!(key, "objectid::Product@items");
//! assert_eq!(field_name(&key), Some("objectid::Product"));
//! assert_eq!(base_type(&key), "Product");
//! ```

pub mod codec;
pub mod identifier;

pub use codec::{
    base_type, encode_list_member, encode_object_ref, field_name, is_id_field, is_list_field,
    list_name, object_id, object_type, ID_SPLIT, LIST_SPLIT,
};
pub use identifier::{Identifier, ListMember, ObjectRef};
