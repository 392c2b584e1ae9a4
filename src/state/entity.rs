//! Entity kinds managed by the admin dashboard.
//!
//! DESIGN
//! ======
//! Records stay opaque JSON. Each kind only describes which fields are shown
//! as columns, which are editable, and how form text is turned back into a
//! JSON payload.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::net::types::RecordId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntityKind {
    #[default]
    Subjects,
    Classes,
    Users,
}

impl EntityKind {
    pub const ALL: [Self; 3] = [Self::Subjects, Self::Classes, Self::Users];

    /// API collection segment.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Subjects => "subjects",
            Self::Classes => "classes",
            Self::Users => "users",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Subjects => "Subjects",
            Self::Classes => "Classes",
            Self::Users => "Users",
        }
    }

    /// Singular noun for dialog titles.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Subjects => "Subject",
            Self::Classes => "Class",
            Self::Users => "User",
        }
    }

    #[must_use]
    pub fn id_field(self) -> &'static str {
        match self {
            Self::Subjects => "subject_id",
            Self::Classes => "class_id",
            Self::Users => "user_id",
        }
    }

    #[must_use]
    pub fn columns(self) -> &'static [Column] {
        match self {
            Self::Subjects => SUBJECT_COLUMNS,
            Self::Classes => CLASS_COLUMNS,
            Self::Users => USER_COLUMNS,
        }
    }

    #[must_use]
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Subjects => SUBJECT_FIELDS,
            Self::Classes => CLASS_FIELDS,
            Self::Users => USER_FIELDS,
        }
    }

    /// Record id, falling back to a generic `id` key.
    #[must_use]
    pub fn record_id(self, record: &Value) -> Option<RecordId> {
        record
            .get(self.id_field())
            .or_else(|| record.get("id"))
            .and_then(RecordId::from_value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Checkbox,
}

impl FieldKind {
    /// HTML `<input type>` value.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Only sent when creating (e.g. initial password).
    pub create_only: bool,
}

const fn field(key: &'static str, label: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec { key, label, kind, required, create_only: false }
}

const SUBJECT_COLUMNS: &[Column] = &[
    Column { key: "subject_id", header: "ID" },
    Column { key: "subject_code", header: "Code" },
    Column { key: "subject_name", header: "Name" },
    Column { key: "dept_id", header: "Department" },
];

const CLASS_COLUMNS: &[Column] = &[
    Column { key: "class_id", header: "ID" },
    Column { key: "class_code", header: "Code" },
    Column { key: "subject_id", header: "Subject" },
    Column { key: "semester_id", header: "Semester" },
    Column { key: "lecturer_id", header: "Lecturer" },
];

const USER_COLUMNS: &[Column] = &[
    Column { key: "email", header: "Email" },
    Column { key: "full_name", header: "Full name" },
    Column { key: "role_id", header: "Role" },
    Column { key: "is_active", header: "Active" },
];

const SUBJECT_FIELDS: &[FieldSpec] = &[
    field("subject_code", "Subject code", FieldKind::Text, true),
    field("subject_name", "Subject name", FieldKind::Text, true),
    field("dept_id", "Department ID", FieldKind::Number, false),
];

const CLASS_FIELDS: &[FieldSpec] = &[
    field("class_code", "Class code", FieldKind::Text, true),
    field("subject_id", "Subject ID", FieldKind::Number, true),
    field("semester_id", "Semester ID", FieldKind::Number, true),
    field("lecturer_id", "Lecturer ID", FieldKind::Text, false),
];

const USER_FIELDS: &[FieldSpec] = &[
    field("email", "Email", FieldKind::Email, true),
    field("full_name", "Full name", FieldKind::Text, false),
    field("role_id", "Role ID", FieldKind::Number, true),
    field("is_active", "Active", FieldKind::Checkbox, false),
    FieldSpec { key: "password", label: "Password", kind: FieldKind::Password, required: true, create_only: true },
];

/// Render a record cell as display text.
#[must_use]
pub fn cell_text(record: &Value, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => (if *b { "Yes" } else { "No" }).to_owned(),
        Some(other) => other.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// Modal form contents: raw input text keyed by field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub kind: EntityKind,
    pub mode: FormMode,
    pub values: BTreeMap<String, String>,
    pub error: Option<String>,
}

impl FormState {
    #[must_use]
    pub fn for_create(kind: EntityKind) -> Self {
        let values = kind
            .fields()
            .iter()
            .map(|f| {
                let initial = if f.kind == FieldKind::Checkbox { "true" } else { "" };
                (f.key.to_owned(), initial.to_owned())
            })
            .collect();
        Self { kind, mode: FormMode::Create, values, error: None }
    }

    /// Prefill from an existing record. Returns `None` when the record has
    /// no usable id.
    #[must_use]
    pub fn for_edit(kind: EntityKind, record: &Value) -> Option<Self> {
        let id = kind.record_id(record)?;
        let values = kind
            .fields()
            .iter()
            .filter(|f| !f.create_only)
            .map(|f| {
                let text = match (f.kind, record.get(f.key)) {
                    (_, Some(Value::Bool(b))) => b.to_string(),
                    // Unknown flag: keep the create default rather than flip it off.
                    (FieldKind::Checkbox, _) => "true".to_owned(),
                    _ => cell_text(record, f.key),
                };
                (f.key.to_owned(), text)
            })
            .collect();
        Some(Self { kind, mode: FormMode::Edit(id), values, error: None })
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Fields shown for the current mode.
    pub fn visible_fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.kind.fields().iter().filter(move |f| !(f.create_only && self.is_edit()))
    }

    #[must_use]
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    pub fn set_value(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
        self.error = None;
    }

    /// Validate and convert the form into a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first invalid field.
    pub fn to_payload(&self) -> Result<Value, String> {
        let mut payload = Map::new();
        for spec in self.visible_fields() {
            let raw = self.value(spec.key).trim();
            if raw.is_empty() && spec.kind != FieldKind::Checkbox {
                if spec.required {
                    return Err(format!("{} is required", spec.label));
                }
                // An update must be able to clear an optional field.
                if self.is_edit() {
                    payload.insert(spec.key.to_owned(), Value::Null);
                }
                continue;
            }
            let value = match spec.kind {
                FieldKind::Number => raw
                    .parse::<i64>()
                    .map(Value::from)
                    .map_err(|_| format!("{} must be a whole number", spec.label))?,
                FieldKind::Checkbox => Value::Bool(raw == "true"),
                FieldKind::Text | FieldKind::Email | FieldKind::Password => Value::String(raw.to_owned()),
            };
            payload.insert(spec.key.to_owned(), value);
        }
        Ok(Value::Object(payload))
    }
}
