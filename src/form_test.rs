use super::*;

use serde_json::json;

fn field(key: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        key,
        placeholder: key,
        kind,
    }
}

// =============================================================
// Blank values
// =============================================================

#[test]
fn text_like_fields_start_empty() {
    assert_eq!(FieldKind::Text.blank(), "");
    assert_eq!(FieldKind::Integer.blank(), "");
    assert_eq!(FieldKind::OptionalRef.blank(), "");
}

#[test]
fn flag_fields_start_unchecked() {
    assert_eq!(FieldKind::Flag.blank(), "false");
}

// =============================================================
// Text fields
// =============================================================

#[test]
fn text_values_are_sent_verbatim() {
    let fields = [field("name", FieldKind::Text), field("description", FieldKind::Text)];
    let drafts = ["Yard A".to_owned(), "North yard".to_owned()];
    assert_eq!(
        build_payload(&fields, &drafts),
        json!({"name": "Yard A", "description": "North yard"})
    );
}

#[test]
fn blank_text_stays_an_empty_string() {
    let fields = [field("email", FieldKind::Text)];
    assert_eq!(build_payload(&fields, &[String::new()]), json!({"email": ""}));
}

// =============================================================
// Optional references
// =============================================================

#[test]
fn blank_optional_ref_becomes_null() {
    let fields = [field("dispatcher_id", FieldKind::OptionalRef)];
    assert_eq!(
        build_payload(&fields, &[String::new()]),
        json!({"dispatcher_id": null})
    );
}

#[test]
fn filled_optional_ref_is_sent_as_a_string() {
    let fields = [field("block_id", FieldKind::OptionalRef)];
    assert_eq!(
        build_payload(&fields, &["b-17".to_owned()]),
        json!({"block_id": "b-17"})
    );
}

// =============================================================
// Integer fields
// =============================================================

#[test]
fn integer_drafts_parse_to_numbers() {
    let fields = [field("position", FieldKind::Integer)];
    assert_eq!(build_payload(&fields, &["42".to_owned()]), json!({"position": 42}));
    assert_eq!(build_payload(&fields, &[" 7 ".to_owned()]), json!({"position": 7}));
}

#[test]
fn blank_integer_coerces_to_zero() {
    let fields = [field("position", FieldKind::Integer)];
    assert_eq!(build_payload(&fields, &[String::new()]), json!({"position": 0}));
}

#[test]
fn unparsable_integer_becomes_null() {
    let fields = [field("position", FieldKind::Integer)];
    assert_eq!(
        build_payload(&fields, &["twelve".to_owned()]),
        json!({"position": null})
    );
}

// =============================================================
// Flags
// =============================================================

#[test]
fn flag_encodes_checkbox_state() {
    let fields = [field("is_block_end", FieldKind::Flag)];
    assert_eq!(
        build_payload(&fields, &["true".to_owned()]),
        json!({"is_block_end": true})
    );
    assert_eq!(
        build_payload(&fields, &["false".to_owned()]),
        json!({"is_block_end": false})
    );
}

// =============================================================
// Payload shape
// =============================================================

#[test]
fn payload_never_carries_an_id() {
    let fields = [field("name", FieldKind::Text)];
    let payload = build_payload(&fields, &["Yard A".to_owned()]);
    assert!(payload.as_object().is_some_and(|map| !map.contains_key("id")));
}
