//! Field descriptor types.
//!
//! A [`FieldDef`] describes one field an object exposes to the sync platform:
//! its opaque type tag, its identifier, display metadata, access flags and
//! linking hints. Descriptors are produced by
//! [`FieldsBuilder`](crate::builder::FieldsBuilder) and are plain values once
//! published. All types serialize via serde so a transport layer can ship them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use syncfield_ids::Identifier;

use crate::field_type;

/// Which direction the platform should prefer when syncing a field.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SyncMode {
    #[default]
    #[serde(rename = "both")]
    Both,
    #[serde(rename = "export")]
    ReadOnly,
    #[serde(rename = "import")]
    WriteOnly,
    #[serde(rename = "none")]
    None,
}

/// A possible value offered to editors, with its translated label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

/// Value of a field option. Options without an explicit value are flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Text(text) => Some(text),
            OptionValue::Flag(_) => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// A field descriptor.
///
/// While held by the builder as a draft, string attributes may be empty.
/// Every published descriptor has passed [`validate`](crate::validation::validate).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    #[serde(rename = "type")]
    pub type_: String,
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "enabled")]
    pub readable: bool,
    #[serde(default = "enabled")]
    pub writable: bool,
    #[serde(default)]
    pub listed: bool,
    #[serde(default)]
    pub logged: bool,
    #[serde(default)]
    pub not_tested: bool,
    #[serde(default)]
    pub sync_mode: SyncMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_prop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub options: IndexMap<String, OptionValue>,
    #[serde(default)]
    pub associations: Vec<String>,
}

fn enabled() -> bool {
    true
}

impl FieldDef {
    /// Structural view of the field id.
    pub fn identifier(&self) -> Identifier<'_> {
        Identifier::parse(&self.id)
    }

    /// Innermost type tag, with list and reference wrapping removed.
    pub fn base_type(&self) -> &str {
        syncfield_ids::base_type(&self.type_)
    }

    /// Name of the list this field is declared in, if any.
    pub fn list_name(&self) -> Option<&str> {
        syncfield_ids::list_name(&self.id)
    }

    /// True when the field was declared inside a list.
    pub fn is_list_member(&self) -> bool {
        field_type::is_list(&self.type_)
    }

    /// The object type this field points to, for `objectid::<Type>` fields.
    pub fn referenced_type(&self) -> Option<&str> {
        let inner = syncfield_ids::field_name(&self.type_).unwrap_or(&self.type_);
        field_type::is_id(inner)
    }

    /// The `language` option set by `multilang`.
    pub fn language(&self) -> Option<&str> {
        self.options.get("language").and_then(OptionValue::as_str)
    }
}
