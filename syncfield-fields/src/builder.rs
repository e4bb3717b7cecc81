//! Declares an object's field list one field at a time.
//!
//! The builder holds at most one draft. [`FieldsBuilder::create`] starts a
//! draft (committing the previous one), chained mutators shape it, and
//! [`FieldsBuilder::publish`] commits the last draft and hands the whole list
//! to the caller.
//!
//! ```
//! use syncfield_fields::{field_type, FieldsBuilder};
//!
//! let mut builder = FieldsBuilder::new();
//! builder
//!     .create(field_type::VARCHAR)
//!     .identifier("ref")
//!     .name("Reference")
//!     .required(true)
//!     .microdata("http://schema.org/Product", "model");
//! builder
//!     .create(field_type::DOUBLE)
//!     .identifier("price")
//!     .name("Unit price")
//!     .in_list("lines");
//!
//! let fields = builder.publish()?;
//! assert_eq!(fields.len(), 2);
//! assert_eq!(fields[1].id, "price@lines");
//! assert_eq!(fields[1].type_, "double@list");
//! # Ok::<(), syncfield_fields::FieldsError>(())
//! ```
//!
//! Mutators return the builder so they can be chained. A mutator that cannot
//! apply (no draft, bad language code, empty option name) leaves the draft
//! untouched, emits a tracing event and records the error; collect recorded
//! errors with [`FieldsBuilder::take_errors`]. Errors are kept for one publish
//! cycle: those still held when a publish returns are dropped at the start of
//! the next one.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use syncfield_ids::encode_list_member;
use tracing::{debug, error, warn};

use crate::config::FieldsConfig;
use crate::error::{ErrorSeverity, FieldsError, Result};
use crate::field_type;
use crate::microdata;
use crate::translate::{NoTranslation, Translate};
use crate::types::{Choice, FieldDef, OptionValue, SyncMode};
use crate::validation::validate;

/// Option key written by [`FieldsBuilder::multilang`].
pub const LANGUAGE_OPTION: &str = "language";

/// Attribute values every new draft starts from.
///
/// Consumers build this to pass to [`FieldsBuilder::with_defaults`], or load
/// it from the `defaults` section of [`FieldsConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefaults {
    pub required: bool,
    pub readable: bool,
    pub writable: bool,
    pub listed: bool,
    pub logged: bool,
    pub not_tested: bool,
    pub sync_mode: SyncMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl FieldDefaults {
    pub fn new() -> Self {
        Self {
            required: false,
            readable: true,
            writable: true,
            listed: false,
            logged: false,
            not_tested: false,
            sync_mode: SyncMode::Both,
            group: None,
        }
    }

    /// Make new fields required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Make new fields appear in object lists.
    pub fn listed(mut self, listed: bool) -> Self {
        self.listed = listed;
        self
    }

    /// Make new fields recommended for logging.
    pub fn logged(mut self, logged: bool) -> Self {
        self.logged = logged;
        self
    }

    /// Preferred sync direction for new fields.
    pub fn sync_mode(mut self, sync_mode: SyncMode) -> Self {
        self.sync_mode = sync_mode;
        self
    }

    /// Section label for new fields. Stored as given, not translated.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// A fresh draft of the given type.
    pub fn draft(&self, field_type: impl Into<String>) -> FieldDef {
        FieldDef {
            type_: field_type.into(),
            id: String::new(),
            name: String::new(),
            description: String::new(),
            group: self.group.clone(),
            required: self.required,
            readable: self.readable,
            writable: self.writable,
            listed: self.listed,
            logged: self.logged,
            not_tested: self.not_tested,
            sync_mode: self.sync_mode,
            item_type: None,
            item_prop: None,
            tag: None,
            choices: Vec::new(),
            options: IndexMap::new(),
            associations: Vec::new(),
        }
    }
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-draft field list builder.
///
/// Not meant to be shared: pass it by `&mut` to whatever declares fields.
pub struct FieldsBuilder {
    defaults: FieldDefaults,
    multilang_types: Vec<String>,
    default_language: Option<String>,
    translator: Box<dyn Translate>,
    draft: Option<FieldDef>,
    fields: Vec<FieldDef>,
    errors: Vec<FieldsError>,
    /// Errors held when the last publish returned.
    stale_errors: usize,
}

impl FieldsBuilder {
    pub fn new() -> Self {
        Self {
            defaults: FieldDefaults::new(),
            multilang_types: field_type::MULTILANG.iter().map(|t| t.to_string()).collect(),
            default_language: None,
            translator: Box::new(NoTranslation),
            draft: None,
            fields: Vec::new(),
            errors: Vec::new(),
            stale_errors: 0,
        }
    }

    /// A builder using the configured defaults, default language and
    /// multilingual types. An invalid default language is reported and ignored.
    pub fn from_config(config: &FieldsConfig) -> Self {
        let mut builder = Self::new().with_defaults(config.defaults.clone());
        builder.multilang_types = config.multilang_types.clone();
        if let Some(code) = &config.default_language {
            builder.default_language(code);
        }
        builder
    }

    /// Replace the attribute values new drafts start from.
    pub fn with_defaults(mut self, defaults: FieldDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Route names, descriptions, groups and choice labels through `translator`.
    pub fn with_translator(mut self, translator: impl Translate + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    /// Select the language whose fields keep their plain id in `multilang`.
    pub fn default_language(&mut self, iso_code: &str) -> &mut Self {
        if iso_code.chars().count() < 2 {
            self.report(FieldsError::InvalidDefaultLanguage {
                code: iso_code.to_string(),
            });
            return self;
        }
        self.default_language = Some(iso_code.to_string());
        self
    }

    // --- Draft lifecycle ---

    /// Start a new draft, committing the current one first.
    pub fn create(&mut self, field_type: impl Into<String>) -> &mut Self {
        // A failed commit is already reported and recorded.
        let _ = self.commit();
        self.draft = Some(self.defaults.draft(field_type));
        self
    }

    /// Start a new draft with its identifier and name.
    pub fn create_named(
        &mut self,
        field_type: impl Into<String>,
        id: impl Into<String>,
        name: &str,
    ) -> &mut Self {
        self.create(field_type).identifier(id).name(name)
    }

    /// Commit the last draft and drain the field list.
    ///
    /// Fails with [`FieldsError::NoFields`] when nothing was committed since
    /// the previous publish. Errors left over from the previous publish cycle
    /// are discarded first.
    pub fn publish(&mut self) -> Result<Vec<FieldDef>> {
        self.errors.drain(..self.stale_errors);
        let result = self.publish_fields();
        self.stale_errors = self.errors.len();
        result
    }

    fn publish_fields(&mut self) -> Result<Vec<FieldDef>> {
        let _ = self.commit();
        if self.fields.is_empty() {
            self.report(FieldsError::NoFields);
            return Err(FieldsError::NoFields);
        }
        let fields = std::mem::take(&mut self.fields);
        debug!(count = fields.len(), "field list published");
        Ok(fields)
    }

    /// Validate the draft and append it to the list.
    ///
    /// Without a draft this is a no-op. An invalid draft is discarded.
    fn commit(&mut self) -> Result<()> {
        let Some(draft) = self.draft.take() else {
            return Ok(());
        };
        if let Err(invalid) = validate(&draft) {
            let err = FieldsError::from(invalid);
            self.report(err.clone());
            return Err(err);
        }
        debug!(id = %draft.id, field_type = %draft.type_, "field committed");
        self.fields.push(draft);
        Ok(())
    }

    // --- Draft mutators ---

    /// Set the field identifier.
    pub fn identifier(&mut self, id: impl Into<String>) -> &mut Self {
        if let Some(draft) = self.draft_mut("identifier") {
            draft.id = id.into();
        }
        self
    }

    /// Declare the field inside a list: `id@list`, `type@list`.
    pub fn in_list(&mut self, list: &str) -> &mut Self {
        if list.is_empty() {
            return self;
        }
        if let Some(draft) = self.draft_mut("in_list") {
            draft.id = encode_list_member(&draft.id, list);
            draft.type_ = encode_list_member(&draft.type_, field_type::LIST);
        }
        self
    }

    /// Set the translated name. Also fills the description if still empty.
    pub fn name(&mut self, name: &str) -> &mut Self {
        let name = self.translate(name);
        if let Some(draft) = self.draft_mut("name") {
            if draft.description.is_empty() {
                draft.description = name.clone();
            }
            draft.name = name;
        }
        self
    }

    /// Set the translated description.
    pub fn description(&mut self, description: &str) -> &mut Self {
        let description = self.translate(description);
        if let Some(draft) = self.draft_mut("description") {
            draft.description = description;
        }
        self
    }

    /// Set the translated section label.
    pub fn group(&mut self, group: &str) -> &mut Self {
        let group = self.translate(group);
        if let Some(draft) = self.draft_mut("group") {
            draft.group = Some(group);
        }
        self
    }

    /// Mark the field read-only. `false` does nothing.
    pub fn read_only(&mut self, read_only: bool) -> &mut Self {
        if let Some(draft) = self.draft_mut("read_only") {
            if read_only {
                draft.readable = true;
                draft.writable = false;
            }
        }
        self
    }

    /// Mark the field write-only. `false` does nothing.
    pub fn write_only(&mut self, write_only: bool) -> &mut Self {
        if let Some(draft) = self.draft_mut("write_only") {
            if write_only {
                draft.readable = false;
                draft.writable = true;
            }
        }
        self
    }

    /// Set whether the field is needed to create an object.
    pub fn required(&mut self, required: bool) -> &mut Self {
        if let Some(draft) = self.draft_mut("required") {
            draft.required = required;
        }
        self
    }

    pub fn prefer_read(&mut self) -> &mut Self {
        self.sync_mode("prefer_read", SyncMode::ReadOnly)
    }

    pub fn prefer_write(&mut self) -> &mut Self {
        self.sync_mode("prefer_write", SyncMode::WriteOnly)
    }

    pub fn prefer_none(&mut self) -> &mut Self {
        self.sync_mode("prefer_none", SyncMode::None)
    }

    /// Replace the associated field ids.
    pub fn association<I, S>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(draft) = self.draft_mut("association") {
            draft.associations = ids.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Set whether the field appears in object lists.
    pub fn listed(&mut self, listed: bool) -> &mut Self {
        if let Some(draft) = self.draft_mut("listed") {
            draft.listed = listed;
        }
        self
    }

    /// Set whether the field is recommended for logging.
    pub fn logged(&mut self, logged: bool) -> &mut Self {
        if let Some(draft) = self.draft_mut("logged") {
            draft.logged = logged;
        }
        self
    }

    /// Set the microdata pair and recompute the tag.
    pub fn microdata(&mut self, item_type: &str, item_prop: &str) -> &mut Self {
        if let Some(draft) = self.draft_mut("microdata") {
            set_microdata(draft, item_type, item_prop);
        }
        self
    }

    /// Exclude the field from automated tests.
    pub fn not_tested(&mut self) -> &mut Self {
        if let Some(draft) = self.draft_mut("not_tested") {
            draft.not_tested = true;
        }
        self
    }

    /// Offer a value to editors with a translated label.
    pub fn add_choice(&mut self, value: impl Into<String>, label: &str) -> &mut Self {
        let label = self.translate(label);
        if let Some(draft) = self.draft_mut("add_choice") {
            draft.choices.push(Choice {
                value: value.into(),
                label,
            });
        }
        self
    }

    /// Offer several values, in iteration order.
    pub fn add_choices<I, V, L>(&mut self, choices: I) -> &mut Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: AsRef<str>,
    {
        for (value, label) in choices {
            self.add_choice(value, label.as_ref());
        }
        self
    }

    /// Set an option. An empty option name is reported and ignored.
    pub fn add_option(&mut self, name: &str, value: impl Into<OptionValue>) -> &mut Self {
        if self.draft_mut("add_option").is_none() {
            return self;
        }
        if name.is_empty() {
            self.report(FieldsError::EmptyOptionType);
            return self;
        }
        if let Some(draft) = self.draft.as_mut() {
            draft.options.insert(name.to_string(), value.into());
        }
        self
    }

    /// Set several options, in iteration order.
    pub fn add_options<I, K, V>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        for (name, value) in options {
            self.add_option(name.as_ref(), value);
        }
        self
    }

    /// Declare the field as one language variant of a text field.
    ///
    /// Always sets the `language` option. For any language other than the
    /// default one, the id gets a `_<iso_code>` suffix and the microdata type
    /// (when set) a `/<iso_code>` suffix, so each variant has its own tag.
    pub fn multilang(&mut self, iso_code: &str) -> &mut Self {
        let Some(current_type) = self.draft_mut("multilang").map(|d| d.type_.clone()) else {
            return self;
        };
        if iso_code.chars().count() < 2 {
            self.report(FieldsError::InvalidLanguage {
                code: iso_code.to_string(),
            });
            return self;
        }
        if !self.multilang_types.contains(&current_type) {
            self.report(FieldsError::LanguageNotSupported {
                field_type: current_type,
            });
            return self;
        }

        let is_default = self.default_language.as_deref() == Some(iso_code);
        if let Some(draft) = self.draft.as_mut() {
            draft
                .options
                .insert(LANGUAGE_OPTION.to_string(), iso_code.into());
            if !is_default {
                draft.id = format!("{}_{iso_code}", draft.id);
                if let Some(item_type) = draft.item_type.clone() {
                    let item_prop = draft.item_prop.clone().unwrap_or_default();
                    set_microdata(draft, &format!("{item_type}/{iso_code}"), &item_prop);
                }
            }
        }
        self
    }

    // --- Inspection ---

    /// The draft being defined, if any.
    pub fn draft(&self) -> Option<&FieldDef> {
        self.draft.as_ref()
    }

    /// Fields committed since the last publish.
    pub fn committed(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Errors recorded since the last call, at most one publish cycle back.
    pub fn take_errors(&mut self) -> Vec<FieldsError> {
        self.stale_errors = 0;
        std::mem::take(&mut self.errors)
    }

    // --- Internal ---

    fn draft_mut(&mut self, operation: &'static str) -> Option<&mut FieldDef> {
        if self.draft.is_none() {
            self.report(FieldsError::NoDraft { operation });
            return None;
        }
        self.draft.as_mut()
    }

    fn sync_mode(&mut self, operation: &'static str, mode: SyncMode) -> &mut Self {
        if let Some(draft) = self.draft_mut(operation) {
            draft.sync_mode = mode;
        }
        self
    }

    fn translate(&self, text: &str) -> String {
        self.translator.trans(text.trim())
    }

    fn report(&mut self, err: FieldsError) {
        match err.severity() {
            ErrorSeverity::Warning => warn!(%err, "field definition rejected"),
            ErrorSeverity::Error => error!(%err, "field definition failed"),
        }
        self.errors.push(err);
    }
}

impl Default for FieldsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn set_microdata(draft: &mut FieldDef, item_type: &str, item_prop: &str) {
    draft.item_type = Some(item_type.to_string());
    draft.item_prop = Some(item_prop.to_string());
    draft.tag = Some(microdata::tag(item_type, item_prop));
}
