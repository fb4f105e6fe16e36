use super::*;
use crate::state::test_helpers;

#[test]
fn valid_values_pass() {
    assert_eq!(validate(&test_helpers::valid_values()), Ok(()));
}

#[test]
fn instructions_of_exactly_200_chars_pass() {
    let mut values = test_helpers::valid_values();
    values.instructions = "x".repeat(INSTRUCTIONS_MIN_CHARS);
    assert!(validate(&values).is_ok());
}

#[test]
fn instructions_of_199_chars_fail_with_message() {
    let mut values = test_helpers::valid_values();
    values.instructions = "x".repeat(INSTRUCTIONS_MIN_CHARS - 1);

    let errors = validate(&values).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Instructions), Some("Instructions require at least 200 characters"));
}

#[test]
fn instructions_length_counts_chars_not_bytes() {
    let mut values = test_helpers::valid_values();
    // 199 two-byte chars: 398 bytes, still too short.
    values.instructions = "é".repeat(199);
    assert!(validate(&values).is_err());

    values.instructions = "é".repeat(200);
    assert!(validate(&values).is_ok());
}

#[test]
fn each_empty_required_field_reports_its_own_message() {
    let cases = [
        (Field::Name, "Name is required"),
        (Field::Description, "Description is required"),
        (Field::Seed, "Seed is required"),
        (Field::Src, "Image is required"),
        (Field::CategoryId, "Category is required"),
    ];

    for (field, message) in cases {
        let mut values = test_helpers::valid_values();
        field.set(&mut values, String::new());

        let errors = validate(&values).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field], "field {field:?}");
        assert_eq!(errors.get(field), Some(message));
    }
}

#[test]
fn missing_category_is_required() {
    let mut values = test_helpers::valid_values();
    values.category_id = None;

    let errors = validate(&values).unwrap_err();
    assert_eq!(errors.get(Field::CategoryId), Some("Category is required"));
}

#[test]
fn empty_draft_fails_every_field_in_order() {
    let errors = validate(&CompanionValues::empty()).unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), Field::ALL.to_vec());
}

#[test]
fn whitespace_is_not_trimmed() {
    let mut values = test_helpers::valid_values();
    values.name = " ".into();
    assert!(validate(&values).is_ok());
}

#[test]
fn errors_serialize_with_wire_names() {
    let errors = validate(&CompanionValues::empty()).unwrap_err();
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json["categoryId"], "Category is required");
    assert_eq!(json["src"], "Image is required");
    assert_eq!(json.as_object().map(serde_json::Map::len), Some(6));
}
