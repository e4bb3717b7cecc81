//! Draft validation.

use crate::error::ValidationError;
use crate::types::FieldDef;

/// True when `id` only contains `[A-Za-z0-9-_@]`.
///
/// Object references (`::`) are not valid field ids; only list wrapping may
/// appear in an id.
pub fn is_valid_id(id: &str) -> bool {
    id.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '@'))
}

/// Check a draft. The first failing rule wins.
pub fn validate(field: &FieldDef) -> Result<(), ValidationError> {
    if field.type_.is_empty() {
        return Err(ValidationError::MissingType);
    }
    if field.id.is_empty() {
        return Err(ValidationError::MissingId {
            field_type: field.type_.clone(),
        });
    }
    if !is_valid_id(&field.id) {
        return Err(ValidationError::InvalidId {
            id: field.id.clone(),
        });
    }
    if field.name.is_empty() {
        return Err(ValidationError::MissingName {
            id: field.id.clone(),
        });
    }
    if field.description.is_empty() {
        return Err(ValidationError::MissingDescription {
            id: field.id.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FieldDefaults;
    use rstest::rstest;

    fn draft(field_type: &str, id: &str, name: &str, description: &str) -> FieldDef {
        let mut field = FieldDefaults::new().draft(field_type);
        field.id = id.into();
        field.name = name.into();
        field.description = description.into();
        field
    }

    #[test]
    fn complete_draft_passes() {
        assert_eq!(validate(&draft("varchar", "ref", "Ref", "Ref")), Ok(()));
    }

    #[rstest]
    #[case("ref")]
    #[case("price@lines")]
    #[case("name_fr_FR")]
    #[case("object-id")]
    fn valid_ids(#[case] id: &str) {
        assert!(is_valid_id(id));
    }

    #[rstest]
    #[case("bad id!")]
    #[case("objectid::Product")]
    #[case("prix_é")]
    #[case("a.b")]
    fn invalid_ids(#[case] id: &str) {
        assert!(!is_valid_id(id));
    }

    #[test]
    fn rules_apply_in_order() {
        assert_eq!(
            validate(&draft("", "bad id!", "", "")),
            Err(ValidationError::MissingType)
        );
        assert_eq!(
            validate(&draft("varchar", "", "", "")),
            Err(ValidationError::MissingId {
                field_type: "varchar".into()
            })
        );
        assert_eq!(
            validate(&draft("varchar", "bad id!", "", "")),
            Err(ValidationError::InvalidId {
                id: "bad id!".into()
            })
        );
        assert_eq!(
            validate(&draft("varchar", "ref", "", "")),
            Err(ValidationError::MissingName { id: "ref".into() })
        );
        assert_eq!(
            validate(&draft("varchar", "ref", "Ref", "")),
            Err(ValidationError::MissingDescription { id: "ref".into() })
        );
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn allowed_alphabet_is_valid(id in "[A-Za-z0-9_@-]{1,32}") {
                prop_assert!(is_valid_id(&id));
            }

            #[test]
            fn any_other_char_is_invalid(
                head in "[a-z]{0,8}",
                bad in "[^A-Za-z0-9_@-]",
                tail in "[a-z]{0,8}",
            ) {
                let id = format!("{head}{bad}{tail}");
                prop_assert!(!is_valid_id(&id));
            }

            #[test]
            fn list_members_of_valid_ids_stay_valid(
                field in "[a-z_]{1,12}",
                list in "[a-z_]{1,12}",
            ) {
                let id = syncfield_ids::encode_list_member(&field, &list);
                prop_assert_eq!(validate(&draft("varchar", &id, "N", "N")), Ok(()));
            }
        }
    }
}
