//! Required-value and enumeration rules, and the accumulator that applies them.

use crate::notice::{NO_ID, Notice};
use crate::result::{BuildResult, NoticeList};

use super::CodeTable;

/// Required-value rule.
///
/// Returns the value when present, otherwise a `MissingRequiredValue`
/// notice naming `field_name`.
pub fn require_value<T>(
    value: Option<T>,
    field_name: &str,
    filename: &str,
    entity_id: &str,
) -> Result<T, Notice> {
    value.ok_or_else(|| Notice::missing_required_value(filename, entity_id, field_name))
}

/// Bounded-enumeration rule.
///
/// An absent code silently yields the table default. A present but
/// unrecognized code yields an `UnexpectedEnumValue` notice carrying the raw
/// code.
pub fn resolve_enum<T: Copy + PartialEq>(
    code: Option<i32>,
    table: &CodeTable<T>,
    filename: &str,
    entity_id: &str,
) -> Result<T, Notice> {
    table
        .resolve(code)
        .map_err(|err| Notice::unexpected_enum_value(filename, entity_id, err.field, err.code))
}

/// Treat an empty string the same as a missing one.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Collects notices for one record instead of stopping at the first failure.
///
/// Every check returns `None` exactly when it recorded a notice.
#[derive(Debug)]
pub struct Validation<'a> {
    filename: &'a str,
    entity_id: &'a str,
    notices: Vec<Notice>,
}

impl<'a> Validation<'a> {
    /// Start validating a record of `filename`.
    ///
    /// A missing or empty identifier is recorded on notices as [`NO_ID`].
    pub fn new(filename: &'a str, entity_id: Option<&'a str>) -> Self {
        Self {
            filename,
            entity_id: non_empty(entity_id).unwrap_or(NO_ID),
            notices: Vec::new(),
        }
    }

    /// The identifier notices are attributed to.
    pub fn entity_id(&self) -> &'a str {
        self.entity_id
    }

    pub fn require<T>(&mut self, value: Option<T>, field_name: &str) -> Option<T> {
        self.record(require_value(value, field_name, self.filename, self.entity_id))
    }

    /// Like [`Validation::require`], with empty text counted as missing.
    pub fn require_text(&mut self, value: Option<&str>, field_name: &str) -> Option<String> {
        self.require(non_empty(value), field_name).map(str::to_owned)
    }

    pub fn enumeration<T: Copy + PartialEq>(
        &mut self,
        code: Option<i32>,
        table: &CodeTable<T>,
    ) -> Option<T> {
        self.record(resolve_enum(code, table, self.filename, self.entity_id))
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_clean(&self) -> bool {
        self.notices.is_empty()
    }

    /// Produce the build result.
    ///
    /// `entity` is `None` only when some check failed, in which case the
    /// recorded notices are returned instead.
    pub fn finish<E>(self, entity: Option<E>) -> BuildResult<E> {
        match (NoticeList::try_from(self.notices), entity) {
            (Ok(notices), _) => BuildResult::Notices(notices),
            (Err(_), Some(entity)) => BuildResult::Entity(entity),
            (Err(_), None) => unreachable!("a check failed without recording a notice"),
        }
    }

    fn record<T>(&mut self, outcome: Result<T, Notice>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(notice) => {
                self.notices.push(notice);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::{KEY_ENUM_VALUE, NoticeKind};

    static FLAGS: CodeTable<bool> = CodeTable::new("flag", &[(0, false), (1, true)], false);

    #[test]
    fn require_value_present() {
        assert_eq!(require_value(Some(1.5), "stop_lat", "stops.txt", "S1"), Ok(1.5));
    }

    #[test]
    fn require_value_missing() {
        let notice = require_value::<f64>(None, "stop_lat", "stops.txt", "S1").unwrap_err();
        assert_eq!(notice.kind(), NoticeKind::MissingRequiredValue);
        assert_eq!(notice.field_name(), Some("stop_lat"));
        assert_eq!(notice.entity_id(), "S1");
    }

    #[test]
    fn resolve_enum_absent_is_default() {
        assert_eq!(resolve_enum(None, &FLAGS, "stops.txt", "S1"), Ok(false));
    }

    #[test]
    fn resolve_enum_recognized() {
        assert_eq!(resolve_enum(Some(1), &FLAGS, "stops.txt", "S1"), Ok(true));
    }

    #[test]
    fn resolve_enum_unrecognized() {
        let notice = resolve_enum(Some(9), &FLAGS, "stops.txt", "S1").unwrap_err();
        assert_eq!(notice.kind(), NoticeKind::UnexpectedEnumValue);
        assert_eq!(notice.field_name(), Some("flag"));
        assert_eq!(notice.context_i64(KEY_ENUM_VALUE), Some(9));
    }

    #[test]
    fn missing_or_empty_id_uses_sentinel() {
        assert_eq!(Validation::new("stops.txt", None).entity_id(), NO_ID);
        assert_eq!(Validation::new("stops.txt", Some("")).entity_id(), NO_ID);
        assert_eq!(Validation::new("stops.txt", Some("S1")).entity_id(), "S1");
    }

    #[test]
    fn accumulates_in_check_order() {
        let mut v = Validation::new("stops.txt", Some("S1"));
        assert_eq!(v.require_text(None, "stop_name"), None);
        assert_eq!(v.require::<f64>(None, "stop_lat"), None);
        assert_eq!(v.enumeration(Some(4), &FLAGS), None);
        assert_eq!(v.require(Some(2.0), "stop_lon"), Some(2.0));

        let fields: Vec<_> = v.notices().iter().filter_map(Notice::field_name).collect();
        assert_eq!(fields, ["stop_name", "stop_lat", "flag"]);
        assert!(!v.is_clean());

        let result = v.finish(None::<()>);
        assert_eq!(result.notices().map(NoticeList::len), Some(3));
    }

    #[test]
    fn empty_text_is_missing() {
        let mut v = Validation::new("stops.txt", Some("S1"));
        assert_eq!(v.require_text(Some(""), "stop_name"), None);
        assert_eq!(v.notices().len(), 1);
    }

    #[test]
    fn clean_validation_yields_entity() {
        let mut v = Validation::new("stops.txt", Some("S1"));
        let name = v.require_text(Some("Central"), "stop_name");
        assert!(v.is_clean());
        assert_eq!(v.finish(name), BuildResult::Entity("Central".to_string()));
    }

    #[test]
    fn notices_win_over_entity() {
        let mut v = Validation::new("stops.txt", Some("S1"));
        v.require::<u8>(None, "stop_code");
        let result = v.finish(Some("ignored"));
        assert!(!result.is_entity());
    }
}
