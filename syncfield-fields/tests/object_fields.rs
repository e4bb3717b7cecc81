//! Integration tests: declare a product's fields, publish them, and resolve
//! incoming composite keys against the published list.

use syncfield_fields::ids::{self, encode_object_ref, Identifier};
use syncfield_fields::{
    field_type, find_by_id, find_by_microdata, list_fields, microdata, reduce, FieldDef,
    FieldFilter, FieldsBuilder, FieldsError, SyncMode,
};

const PRODUCT: &str = "http://schema.org/Product";
const OFFER: &str = "http://schema.org/Offer";

fn product_fields() -> Vec<FieldDef> {
    let mut builder = FieldsBuilder::new();
    builder.default_language("en_US");

    builder
        .create_named(field_type::VARCHAR, "ref", "Reference")
        .required(true)
        .listed(true)
        .microdata(PRODUCT, "model");

    for code in ["en_US", "fr_FR"] {
        builder
            .create_named(field_type::VARCHAR, "name", "Name")
            .group("Description")
            .microdata(PRODUCT, "name")
            .multilang(code);
    }

    builder
        .create_named(field_type::DATETIME, "created", "Created")
        .read_only(true)
        .prefer_read()
        .microdata(microdata::META_URL, microdata::META_DATECREATED);

    // Lines: one entry per ordered item, each pointing at another product.
    builder
        .create_named(encode_object_ref(field_type::ID, "Product"), "product", "Product")
        .in_list("lines")
        .microdata(OFFER, "itemOffered");
    builder
        .create_named(field_type::DOUBLE, "qty", "Quantity")
        .in_list("lines")
        .association(["product@lines"]);
    builder
        .create_named(field_type::VARCHAR, "status", "Status")
        .add_choices([("draft", "Draft"), ("done", "Done")])
        .not_tested();

    builder.publish().expect("product fields")
}

#[test]
fn publishes_every_valid_field_in_order() {
    let ids: Vec<_> = product_fields().into_iter().map(|f| f.id).collect();
    assert_eq!(
        ids,
        [
            "ref",
            "name",
            "name_fr_FR",
            "created",
            "product@lines",
            "qty@lines",
            "status"
        ]
    );
}

#[test]
fn resolves_list_member_keys() {
    let fields = product_fields();

    let key = "product@lines";
    let member = Identifier::parse(key);
    let member = member.as_list_member().expect("list member");
    assert_eq!(member.list, "lines");

    let field = find_by_id(&fields, key).expect("declared");
    assert_eq!(field.type_, "objectid::Product@list");
    assert_eq!(field.base_type(), "Product");
    assert_eq!(field.referenced_type(), Some("Product"));
    assert!(field.is_list_member());

    let lines: Vec<_> = list_fields(&fields, "lines")
        .into_iter()
        .map(|f| ids::field_name(&f.id).unwrap_or_default())
        .collect();
    assert_eq!(lines, ["product", "qty"]);
}

#[test]
fn resolves_object_reference_values() {
    // Values of an objectid field are references to another object.
    let value = encode_object_ref("1234", "Product");
    assert_eq!(ids::object_id(&value), Some("1234"));
    assert_eq!(ids::object_type(&value), Some("Product"));
    assert_eq!(ids::base_type(&value), "Product");
}

#[test]
fn finds_fields_by_microdata() {
    let fields = product_fields();

    let reference = find_by_microdata(&fields, PRODUCT, "model").unwrap();
    assert_eq!(reference.id, "ref");

    let english = find_by_microdata(&fields, PRODUCT, "name").unwrap();
    assert_eq!(english.id, "name");

    let french = find_by_microdata(&fields, &format!("{PRODUCT}/fr_FR"), "name").unwrap();
    assert_eq!(french.id, "name_fr_FR");
    assert_eq!(french.language(), Some("fr_FR"));

    let created =
        find_by_microdata(&fields, microdata::META_URL, microdata::META_DATECREATED).unwrap();
    assert_eq!(created.sync_mode, SyncMode::ReadOnly);
    assert!(!created.writable);
}

#[test]
fn reduces_to_writable_ids() {
    let fields = product_fields();
    let writable = reduce(&fields, FieldFilter::Writable);
    assert!(!writable.contains(&"created"));
    assert!(writable.contains(&"qty@lines"));
    assert_eq!(reduce(&fields, FieldFilter::Required), ["ref"]);
}

#[test]
fn published_fields_serialize_for_transport() {
    let fields = product_fields();
    let json = serde_json::to_value(&fields).unwrap();

    assert_eq!(json[0]["type"], "varchar");
    assert_eq!(json[0]["required"], true);
    assert_eq!(json[2]["options"]["language"], "fr_FR");
    assert_eq!(json[5]["associations"][0], "product@lines");
    assert_eq!(json[6]["choices"][1]["value"], "done");
    assert_eq!(json[6]["not_tested"], true);

    let back: Vec<FieldDef> = serde_json::from_value(json).unwrap();
    assert_eq!(back, fields);
}

#[test]
fn invalid_fields_do_not_stop_the_list() {
    let mut builder = FieldsBuilder::new();
    builder.create_named(field_type::VARCHAR, "bad id!", "Bad");
    builder.create_named(field_type::VARCHAR, "objectid::Product", "Reference");
    builder.create_named(field_type::VARCHAR, "ok", "Ok");
    builder.create(field_type::VARCHAR).identifier("nameless");

    let fields = builder.publish().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].id, "ok");

    let errors = builder.take_errors();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| matches!(e, FieldsError::Invalid(_))));

    assert!(matches!(builder.publish(), Err(FieldsError::NoFields)));
}
