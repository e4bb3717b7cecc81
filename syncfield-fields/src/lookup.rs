//! Linear lookups over a published field list.
//!
//! Lists are small and kept in commit order, so every search is a scan and
//! the first match wins. Ids and tags are not required to be unique.

use syncfield_ids::list_name;

use crate::microdata;
use crate::types::FieldDef;

/// Which fields [`reduce`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFilter {
    All,
    Readable,
    Writable,
    Required,
    Listed,
}

impl FieldFilter {
    pub fn accepts(self, field: &FieldDef) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Readable => field.readable,
            FieldFilter::Writable => field.writable,
            FieldFilter::Required => field.required,
            FieldFilter::Listed => field.listed,
        }
    }
}

/// First field carrying `tag`.
pub fn find_by_tag<'a>(fields: &'a [FieldDef], tag: &str) -> Option<&'a FieldDef> {
    if tag.is_empty() {
        return None;
    }
    fields.iter().find(|field| field.tag.as_deref() == Some(tag))
}

/// First field with identifier `id`.
pub fn find_by_id<'a>(fields: &'a [FieldDef], id: &str) -> Option<&'a FieldDef> {
    if id.is_empty() {
        return None;
    }
    fields.iter().find(|field| field.id == id)
}

/// First field declared with this microdata pair.
pub fn find_by_microdata<'a>(
    fields: &'a [FieldDef],
    item_type: &str,
    item_prop: &str,
) -> Option<&'a FieldDef> {
    find_by_tag(fields, &microdata::tag(item_type, item_prop))
}

/// Fields declared inside `list`, in commit order.
pub fn list_fields<'a>(fields: &'a [FieldDef], list: &str) -> Vec<&'a FieldDef> {
    fields
        .iter()
        .filter(|field| list_name(&field.id) == Some(list))
        .collect()
}

/// Ids of the fields accepted by `filter`, in commit order.
pub fn reduce(fields: &[FieldDef], filter: FieldFilter) -> Vec<&str> {
    fields
        .iter()
        .filter(|field| filter.accepts(field))
        .map(|field| field.id.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FieldsBuilder;
    use crate::field_type;

    const PRODUCT: &str = "http://schema.org/Product";

    fn sample_fields() -> Vec<FieldDef> {
        let mut b = FieldsBuilder::new();
        b.create_named(field_type::VARCHAR, "ref", "Reference")
            .required(true)
            .listed(true)
            .microdata(PRODUCT, "model");
        b.create_named(field_type::VARCHAR, "name", "Name")
            .microdata(PRODUCT, "name");
        b.create_named(field_type::VARCHAR, "sku", "SKU")
            .in_list("lines")
            .microdata(PRODUCT, "model")
            .read_only(true);
        b.create_named(field_type::DOUBLE, "qty", "Quantity")
            .in_list("lines")
            .write_only(true);
        b.publish().unwrap()
    }

    #[test]
    fn by_tag_returns_first_match() {
        let fields = sample_fields();
        let tag = microdata::tag(PRODUCT, "model");
        assert_eq!(find_by_tag(&fields, &tag).unwrap().id, "ref");
    }

    #[test]
    fn by_tag_misses() {
        let fields = sample_fields();
        assert!(find_by_tag(&fields, "").is_none());
        assert!(find_by_tag(&fields, "0123").is_none());
        assert!(find_by_tag(&[], &microdata::tag(PRODUCT, "model")).is_none());
    }

    #[test]
    fn by_id() {
        let fields = sample_fields();
        assert_eq!(find_by_id(&fields, "sku@lines").unwrap().name, "SKU");
        assert!(find_by_id(&fields, "sku").is_none());
        assert!(find_by_id(&fields, "").is_none());
        assert!(find_by_id(&[], "ref").is_none());
    }

    #[test]
    fn by_microdata() {
        let fields = sample_fields();
        assert_eq!(
            find_by_microdata(&fields, PRODUCT, "name").unwrap().id,
            "name"
        );
        assert!(find_by_microdata(&fields, PRODUCT, "color").is_none());
    }

    #[test]
    fn members_of_list() {
        let fields = sample_fields();
        let ids: Vec<_> = list_fields(&fields, "lines")
            .into_iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(ids, ["sku@lines", "qty@lines"]);
        assert!(list_fields(&fields, "images").is_empty());
    }

    #[test]
    fn reduce_by_filter() {
        let fields = sample_fields();
        assert_eq!(reduce(&fields, FieldFilter::All).len(), 4);
        assert_eq!(reduce(&fields, FieldFilter::Required), ["ref"]);
        assert_eq!(reduce(&fields, FieldFilter::Listed), ["ref"]);
        assert_eq!(
            reduce(&fields, FieldFilter::Readable),
            ["ref", "name", "sku@lines"]
        );
        assert_eq!(
            reduce(&fields, FieldFilter::Writable),
            ["ref", "name", "qty@lines"]
        );
    }
}
