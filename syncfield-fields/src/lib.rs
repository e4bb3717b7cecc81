//! Field descriptors for synchronized objects
//!
//! `syncfield-fields` declares the fields an object exposes to a sync
//! platform. A connector describes each field through [`FieldsBuilder`]'s
//! chained API and publishes the validated list; consumers then search that
//! list by id, microdata tag or list membership.
//!
//! # Architecture
//!
//! - **Single draft**: the builder owns at most one in-progress field; starting
//!   a new one commits the previous draft
//! - **Validate on commit**: an invalid draft is reported and dropped, never
//!   published
//! - **Composite ids**: list members and object references are encoded with
//!   `syncfield-ids`, re-exported here as [`ids`]
//! - **No fatal errors**: failures are tracing events plus a recorded
//!   [`FieldsError`]; the builder keeps going

pub mod builder;
pub mod config;
pub mod error;
pub mod field_type;
pub mod lookup;
pub mod microdata;
pub mod translate;
pub mod types;
pub mod validation;

pub use syncfield_ids as ids;

pub use builder::{FieldDefaults, FieldsBuilder, LANGUAGE_OPTION};
pub use config::FieldsConfig;
pub use error::{ErrorSeverity, FieldsError, Result, ValidationError};
pub use lookup::{find_by_id, find_by_microdata, find_by_tag, list_fields, reduce, FieldFilter};
pub use translate::{NoTranslation, Translate};
pub use types::{Choice, FieldDef, OptionValue, SyncMode};
pub use validation::{is_valid_id, validate};
