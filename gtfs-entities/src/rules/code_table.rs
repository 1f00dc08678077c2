//! Bounded enumerations expressed as data.

/// Error returned when a raw code is not part of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized code {code} for field {field}")]
pub struct UnrecognizedCode {
    pub field: &'static str,
    pub code: i32,
}

/// An explicit mapping from raw integer codes to semantic values.
///
/// The mapping is a plain table rather than an ordinal conversion, so adding
/// or removing a code never shifts the meaning of the others. A designated
/// default is used when the field is absent from the record.
///
/// # Examples
///
/// ```
/// use gtfs_entities::rules::CodeTable;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Bikes {
///     Unknown,
///     Allowed,
///     NotAllowed,
/// }
///
/// static BIKES: CodeTable<Bikes> = CodeTable::new(
///     "bikes_allowed",
///     &[(0, Bikes::Unknown), (1, Bikes::Allowed), (2, Bikes::NotAllowed)],
///     Bikes::Unknown,
/// );
///
/// assert_eq!(BIKES.resolve(None), Ok(Bikes::Unknown));
/// assert_eq!(BIKES.resolve(Some(2)), Ok(Bikes::NotAllowed));
/// assert!(BIKES.resolve(Some(3)).is_err());
/// ```
#[derive(Debug)]
pub struct CodeTable<T: 'static> {
    field: &'static str,
    entries: &'static [(i32, T)],
    default: T,
}

impl<T: 'static> CodeTable<T> {
    pub const fn new(field: &'static str, entries: &'static [(i32, T)], default: T) -> Self {
        Self {
            field,
            entries,
            default,
        }
    }

    /// Name of the feed field this table decodes.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Every recognized code, in table order.
    pub fn codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }
}

impl<T: Copy + PartialEq + 'static> CodeTable<T> {
    /// Value used when the field is absent.
    pub fn default_value(&self) -> T {
        self.default
    }

    /// Map a present code to its value.
    pub fn lookup(&self, code: i32) -> Result<T, UnrecognizedCode> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, value)| *value)
            .ok_or(UnrecognizedCode {
                field: self.field,
                code,
            })
    }

    /// Map a possibly absent code: absent yields the default, present codes
    /// must be recognized.
    pub fn resolve(&self, code: Option<i32>) -> Result<T, UnrecognizedCode> {
        match code {
            None => Ok(self.default),
            Some(code) => self.lookup(code),
        }
    }

    /// The code a value is written as, if the table knows it.
    pub fn code_of(&self, value: T) -> Option<i32> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == value)
            .map(|(code, _)| *code)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    static DIGITS: CodeTable<u8> = CodeTable::new(
        "digit",
        &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)],
        0,
    );

    proptest! {
        /// Codes outside the table are always rejected with the code intact
        #[test]
        fn outside_codes_rejected(code in any::<i32>().prop_filter("outside table", |c| !(0..=4).contains(c))) {
            let err = DIGITS.resolve(Some(code)).unwrap_err();
            prop_assert_eq!(err.code, code);
            prop_assert_eq!(err.field, "digit");
        }

        /// Every code in the table resolves and maps back to itself
        #[test]
        fn inside_codes_roundtrip(code in 0i32..=4) {
            let value = DIGITS.resolve(Some(code)).unwrap();
            prop_assert_eq!(DIGITS.code_of(value), Some(code));
        }
    }
}
