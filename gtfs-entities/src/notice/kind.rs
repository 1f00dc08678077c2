//! Notice kinds and severities.

use std::fmt;

use serde::Serialize;

/// How serious a notice is for the feed as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// The feed is usable but something should be fixed.
    Warning,
    /// The record could not be turned into an entity.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// The closed set of diagnostics an entity builder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// A mandatory attribute was absent or empty.
    MissingRequiredValue,
    /// An enumerated attribute held a code outside its recognized set.
    UnexpectedEnumValue,
}

impl NoticeKind {
    /// Stable machine-readable code, suitable for grouping in a report.
    pub fn code(&self) -> &'static str {
        match self {
            NoticeKind::MissingRequiredValue => "missing_required_value",
            NoticeKind::UnexpectedEnumValue => "unexpected_enum_value",
        }
    }

    /// Short human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            NoticeKind::MissingRequiredValue => "Missing required value",
            NoticeKind::UnexpectedEnumValue => "Unexpected enum value",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            NoticeKind::MissingRequiredValue | NoticeKind::UnexpectedEnumValue => Severity::Error,
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            NoticeKind::MissingRequiredValue.code(),
            "missing_required_value"
        );
        assert_eq!(
            NoticeKind::UnexpectedEnumValue.code(),
            "unexpected_enum_value"
        );
    }

    #[test]
    fn both_kinds_are_errors() {
        assert_eq!(NoticeKind::MissingRequiredValue.severity(), Severity::Error);
        assert_eq!(NoticeKind::UnexpectedEnumValue.severity(), Severity::Error);
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn serializes_as_codes() {
        assert_eq!(
            serde_json::to_string(&NoticeKind::UnexpectedEnumValue).unwrap(),
            "\"unexpected_enum_value\""
        );
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"ERROR\"");
    }

    #[test]
    fn display() {
        assert_eq!(
            NoticeKind::MissingRequiredValue.to_string(),
            "missing_required_value"
        );
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
