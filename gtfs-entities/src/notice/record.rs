//! The notice record itself.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::{NoticeKind, Severity};

/// Entity id recorded on a notice when the record has no usable identifier.
pub const NO_ID: &str = "no id";

/// Context key naming the offending field.
pub const KEY_FIELD_NAME: &str = "fieldName";

/// Context key holding the raw, unrecognized enumeration code.
pub const KEY_ENUM_VALUE: &str = "enumValue";

/// A single validation diagnostic.
///
/// Notices can only be created through the kind-specific constructors, so
/// each one carries exactly the context keys its kind defines.
///
/// # Examples
///
/// ```
/// use gtfs_entities::notice::{KEY_FIELD_NAME, Notice, NoticeKind};
///
/// let notice = Notice::missing_required_value("stops.txt", "S1", "stop_name");
/// assert_eq!(notice.kind(), NoticeKind::MissingRequiredValue);
/// assert_eq!(notice.entity_id(), "S1");
/// assert_eq!(notice.context_str(KEY_FIELD_NAME), Some("stop_name"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    kind: NoticeKind,
    severity: Severity,
    filename: String,
    entity_id: String,
    context: BTreeMap<&'static str, Value>,
}

impl Notice {
    fn new(kind: NoticeKind, filename: &str, entity_id: &str) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            filename: filename.to_owned(),
            entity_id: entity_id.to_owned(),
            context: BTreeMap::new(),
        }
    }

    /// A mandatory field was absent from the record.
    pub fn missing_required_value(filename: &str, entity_id: &str, field_name: &str) -> Self {
        let mut notice = Self::new(NoticeKind::MissingRequiredValue, filename, entity_id);
        notice.context.insert(KEY_FIELD_NAME, Value::from(field_name));
        notice
    }

    /// An enumerated field held a code outside its recognized set.
    pub fn unexpected_enum_value(
        filename: &str,
        entity_id: &str,
        field_name: &str,
        value: i32,
    ) -> Self {
        let mut notice = Self::new(NoticeKind::UnexpectedEnumValue, filename, entity_id);
        notice.context.insert(KEY_FIELD_NAME, Value::from(field_name));
        notice.context.insert(KEY_ENUM_VALUE, Value::from(value));
        notice
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Name of the feed file the offending record came from.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Identifier of the offending entity, or [`NO_ID`].
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn context(&self) -> &BTreeMap<&'static str, Value> {
        &self.context
    }

    pub fn context_value(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    /// Context value as a string, if present and a string.
    pub fn context_str(&self, key: &str) -> Option<&str> {
        self.context_value(key).and_then(Value::as_str)
    }

    /// Context value as an integer, if present and an integer.
    pub fn context_i64(&self, key: &str) -> Option<i64> {
        self.context_value(key).and_then(Value::as_i64)
    }

    /// Name of the field this notice is about.
    pub fn field_name(&self) -> Option<&str> {
        self.context_str(KEY_FIELD_NAME)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, entity {})",
            self.severity,
            self.kind.title(),
            self.filename,
            self.entity_id
        )?;
        for (key, value) in &self.context {
            write!(f, " {key}={value}")?;
        }
        Ok(())
    }
}
