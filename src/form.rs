//! Descriptor-driven create forms.
//!
//! Every entity panel renders its form from a static list of [`FieldSpec`]s
//! and keeps one string draft per field. Payload assembly happens here so
//! the wire rules (verbatim text, absence markers, number coercion) live in
//! one place.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde_json::{Map, Value};

/// How a field's string draft maps onto the create payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Sent verbatim, including the empty string.
    Text,
    /// Number input: blank submits as `0`, unparsable input as `null`.
    Integer,
    /// Checkbox, sent as a real boolean.
    Flag,
    /// Optional foreign key: blank is sent as `null`, never `""`.
    OptionalRef,
}

/// One create-form field, in render order.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Payload attribute name.
    pub key: &'static str,
    /// Input placeholder, or the checkbox label for [`FieldKind::Flag`].
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

impl FieldKind {
    /// Draft value a field starts with and resets to after a create.
    pub fn blank(self) -> &'static str {
        match self {
            FieldKind::Flag => "false",
            _ => "",
        }
    }

    fn encode(self, draft: &str) -> Value {
        match self {
            FieldKind::Text => Value::String(draft.to_owned()),
            FieldKind::Integer => encode_number(draft),
            FieldKind::Flag => Value::Bool(draft == "true"),
            FieldKind::OptionalRef => {
                if draft.is_empty() {
                    Value::Null
                } else {
                    Value::String(draft.to_owned())
                }
            }
        }
    }
}

fn encode_number(draft: &str) -> Value {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        return Value::from(0);
    }
    trimmed.parse::<i64>().map_or(Value::Null, Value::from)
}

/// Assemble a create payload from per-field draft strings.
///
/// `drafts` is parallel to `fields`. The payload carries every editable
/// attribute and never an `id` — identifiers are server-assigned.
pub fn build_payload(fields: &[FieldSpec], drafts: &[String]) -> Value {
    let mut payload = Map::with_capacity(fields.len());
    for (field, draft) in fields.iter().zip(drafts) {
        payload.insert(field.key.to_owned(), field.kind.encode(draft));
    }
    Value::Object(payload)
}
