//! Read models and panel descriptors for the backend collections.
//!
//! Each entity implements [`Entity`], which is everything the generic panel
//! needs: the collection endpoint, the create-form fields, and how a fetched
//! record renders as a list row. Foreign keys are plain identifier strings;
//! the client never resolves them.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::de::DeserializeOwned;

use crate::form::{FieldKind, FieldSpec};

/// One backend collection wired into a generic entity panel.
///
/// Records are read-only on the client; `id` is always server-assigned and
/// never appears in a create payload.
pub trait Entity: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {
    /// Panel heading.
    const TITLE: &'static str;
    /// Path segment of the collection endpoint under the base URL.
    const SEGMENT: &'static str;
    /// Create-form fields, in render order.
    const FIELDS: &'static [FieldSpec];
    /// Submit-button label.
    const SUBMIT: &'static str;

    fn id(&self) -> &str;

    /// One-line list row for this record.
    fn row(&self) -> String;
}

/// `Some` only when a nullable field is present and non-empty, so rows omit
/// their trailing decorations for both `null` and `""`.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A physical layout module.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Module {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for Module {
    const TITLE: &'static str = "Modules";
    const SEGMENT: &'static str = "modules";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "name", placeholder: "Module name", kind: FieldKind::Text },
        FieldSpec { key: "description", placeholder: "Description", kind: FieldKind::Text },
    ];
    const SUBMIT: &'static str = "Add Module";

    fn id(&self) -> &str {
        &self.id
    }

    fn row(&self) -> String {
        format!("{} - {}", self.name, self.description.as_deref().unwrap_or_default())
    }
}

/// A module endplate where track crosses the module boundary.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Endplate {
    pub id: String,
    pub module_id: String,
    pub position: i64,
    #[serde(default)]
    pub is_block_end: bool,
}

impl Entity for Endplate {
    const TITLE: &'static str = "Endplates";
    const SEGMENT: &'static str = "endplates";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "module_id", placeholder: "Module ID", kind: FieldKind::Text },
        FieldSpec { key: "position", placeholder: "Position", kind: FieldKind::Integer },
        FieldSpec { key: "is_block_end", placeholder: "Block End", kind: FieldKind::Flag },
    ];
    const SUBMIT: &'static str = "Add Endplate";

    fn id(&self) -> &str {
        &self.id
    }

    fn row(&self) -> String {
        format!(
            "Module: {}, Position: {}, Block End: {}",
            self.module_id,
            self.position,
            if self.is_block_end { "Yes" } else { "No" }
        )
    }
}

/// A trackside signal on a module.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Signal {
    pub id: String,
    pub module_id: String,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
}

impl Entity for Signal {
    const TITLE: &'static str = "Signals";
    const SEGMENT: &'static str = "signals";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "module_id", placeholder: "Module ID", kind: FieldKind::Text },
        FieldSpec { key: "name", placeholder: "Name", kind: FieldKind::Text },
        FieldSpec { key: "position", placeholder: "Position", kind: FieldKind::Text },
    ];
    const SUBMIT: &'static str = "Add Signal";

    fn id(&self) -> &str {
        &self.id
    }

    fn row(&self) -> String {
        format!(
            "Module: {}, Name: {}, Position: {}",
            self.module_id,
            self.name,
            self.position.as_deref().unwrap_or_default()
        )
    }
}

/// A turnout on a module.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Switch {
    pub id: String,
    pub module_id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub switch_type: Option<String>,
}

impl Entity for Switch {
    const TITLE: &'static str = "Switches";
    const SEGMENT: &'static str = "switches";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "module_id", placeholder: "Module ID", kind: FieldKind::Text },
        FieldSpec { key: "name", placeholder: "Name", kind: FieldKind::Text },
        FieldSpec { key: "type", placeholder: "Type", kind: FieldKind::Text },
    ];
    const SUBMIT: &'static str = "Add Switch";

    fn id(&self) -> &str {
        &self.id
    }

    fn row(&self) -> String {
        format!(
            "Module: {}, Name: {}, Type: {}",
            self.module_id,
            self.name,
            self.switch_type.as_deref().unwrap_or_default()
        )
    }
}

/// A dispatch block spanning from one module to another.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Block {
    pub id: String,
    pub name: String,
    pub start_module_id: String,
    pub end_module_id: String,
}

impl Entity for Block {
    const TITLE: &'static str = "Blocks";
    const SEGMENT: &'static str = "blocks";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "name", placeholder: "Name", kind: FieldKind::Text },
        FieldSpec { key: "start_module_id", placeholder: "Start Module ID", kind: FieldKind::Text },
        FieldSpec { key: "end_module_id", placeholder: "End Module ID", kind: FieldKind::Text },
    ];
    const SUBMIT: &'static str = "Add Block";

    fn id(&self) -> &str {
        &self.id
    }

    fn row(&self) -> String {
        format!(
            "Name: {}, Start Module: {}, End Module: {}",
            self.name, self.start_module_id, self.end_module_id
        )
    }
}

/// A dispatcher on duty.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Dispatcher {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Entity for Dispatcher {
    const TITLE: &'static str = "Dispatchers";
    const SEGMENT: &'static str = "dispatchers";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "name", placeholder: "Name", kind: FieldKind::Text },
        FieldSpec { key: "email", placeholder: "Email", kind: FieldKind::Text },
    ];
    const SUBMIT: &'static str = "Add Dispatcher";

    fn id(&self) -> &str {
        &self.id
    }

    fn row(&self) -> String {
        match present(self.email.as_deref()) {
            Some(email) => format!("{} ({email})", self.name),
            None => self.name.clone(),
        }
    }
}

/// A scheduled train, optionally assigned to a dispatcher and a block.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Train {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dispatcher_id: Option<String>,
    #[serde(default)]
    pub block_id: Option<String>,
}

impl Entity for Train {
    const TITLE: &'static str = "Trains";
    const SEGMENT: &'static str = "trains";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "name", placeholder: "Name", kind: FieldKind::Text },
        FieldSpec { key: "description", placeholder: "Description", kind: FieldKind::Text },
        FieldSpec {
            key: "dispatcher_id",
            placeholder: "Dispatcher ID (optional)",
            kind: FieldKind::OptionalRef,
        },
        FieldSpec {
            key: "block_id",
            placeholder: "Block ID (optional)",
            kind: FieldKind::OptionalRef,
        },
    ];
    const SUBMIT: &'static str = "Add Train";

    fn id(&self) -> &str {
        &self.id
    }

    fn row(&self) -> String {
        let mut row = self.name.clone();
        if let Some(description) = present(self.description.as_deref()) {
            row.push_str(&format!(" - {description}"));
        }
        if let Some(dispatcher) = present(self.dispatcher_id.as_deref()) {
            row.push_str(&format!(" (Dispatcher: {dispatcher})"));
        }
        if let Some(block) = present(self.block_id.as_deref()) {
            row.push_str(&format!(" (Block: {block})"));
        }
        row
    }
}

/// A yardmaster on duty.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct YardMaster {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Entity for YardMaster {
    const TITLE: &'static str = "YardMasters";
    const SEGMENT: &'static str = "yardmasters";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "name", placeholder: "Name", kind: FieldKind::Text },
        FieldSpec { key: "email", placeholder: "Email", kind: FieldKind::Text },
    ];
    const SUBMIT: &'static str = "Add YardMaster";

    fn id(&self) -> &str {
        &self.id
    }

    fn row(&self) -> String {
        match present(self.email.as_deref()) {
            Some(email) => format!("{} ({email})", self.name),
            None => self.name.clone(),
        }
    }
}
