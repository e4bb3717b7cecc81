//! Borrowed views over composite identifiers.

use std::fmt;

use serde::Serialize;

use crate::codec::{self, ID_SPLIT, LIST_SPLIT};

/// A field declared inside a named list: `field@list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ListMember<'a> {
    pub field: &'a str,
    pub list: &'a str,
}

impl ListMember<'_> {
    /// Re-encode as `field@list`.
    pub fn encode(&self) -> String {
        codec::encode_list_member(self.field, self.list)
    }
}

impl fmt::Display for ListMember<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{LIST_SPLIT}{}", self.field, self.list)
    }
}

/// A pointer to another object: `objectId::objectType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectRef<'a> {
    pub object_id: &'a str,
    pub object_type: &'a str,
}

impl ObjectRef<'_> {
    /// Re-encode as `objectId::objectType`.
    pub fn encode(&self) -> String {
        codec::encode_object_ref(self.object_id, self.object_type)
    }
}

impl fmt::Display for ObjectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{ID_SPLIT}{}", self.object_id, self.object_type)
    }
}

/// The outermost structure of a key.
///
/// Only one layer is classified: a list member whose field part is an object
/// reference is still a [`Identifier::ListMember`]. Parse the parts again to
/// descend, or use [`Identifier::base_type`] to go straight to the leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Identifier<'a> {
    Scalar { name: &'a str },
    ListMember(ListMember<'a>),
    ObjectRef(ObjectRef<'a>),
}

impl<'a> Identifier<'a> {
    /// Classify a key. List wrapping takes precedence over reference wrapping.
    pub fn parse(id: &'a str) -> Self {
        if let Some(member) = codec::is_list_field(id) {
            return Identifier::ListMember(member);
        }
        if let Some(reference) = codec::is_id_field(id) {
            return Identifier::ObjectRef(reference);
        }
        Identifier::Scalar { name: id }
    }

    /// The innermost scalar name.
    pub fn base_type(&self) -> &'a str {
        match self {
            Identifier::Scalar { name } => *name,
            Identifier::ListMember(member) => codec::base_type(member.field),
            Identifier::ObjectRef(reference) => codec::base_type(reference.object_type),
        }
    }

    pub fn as_list_member(&self) -> Option<&ListMember<'a>> {
        match self {
            Identifier::ListMember(member) => Some(member),
            _ => None,
        }
    }

    pub fn as_object_ref(&self) -> Option<&ObjectRef<'a>> {
        match self {
            Identifier::ObjectRef(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Identifier::Scalar { .. })
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Scalar { name } => f.write_str(name),
            Identifier::ListMember(member) => fmt::Display::fmt(member, f),
            Identifier::ObjectRef(reference) => fmt::Display::fmt(reference, f),
        }
    }
}
