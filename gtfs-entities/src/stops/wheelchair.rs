//! Wheelchair boarding classification.

use serde::Serialize;

use crate::rules::{CodeTable, UnrecognizedCode};

/// Whether a wheelchair user can board at a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelchairBoarding {
    /// No accessibility information for the stop.
    #[default]
    UnknownWheelchairBoarding,
    /// At least some vehicles at this stop can be boarded by a rider in a
    /// wheelchair.
    WheelchairAccessible,
    /// Wheelchair boarding is not possible at this stop.
    NotWheelchairAccessible,
}

/// Feed codes for `wheelchair_boarding`.
pub static WHEELCHAIR_BOARDING: CodeTable<WheelchairBoarding> = CodeTable::new(
    "wheelchair_boarding",
    &[
        (0, WheelchairBoarding::UnknownWheelchairBoarding),
        (1, WheelchairBoarding::WheelchairAccessible),
        (2, WheelchairBoarding::NotWheelchairAccessible),
    ],
    WheelchairBoarding::UnknownWheelchairBoarding,
);

impl WheelchairBoarding {
    /// Decode a raw feed value; absent means unknown.
    pub fn from_code(code: Option<i32>) -> Result<Self, UnrecognizedCode> {
        WHEELCHAIR_BOARDING.resolve(code)
    }

    /// The feed code for this value.
    pub fn code(&self) -> i32 {
        match self {
            WheelchairBoarding::UnknownWheelchairBoarding => 0,
            WheelchairBoarding::WheelchairAccessible => 1,
            WheelchairBoarding::NotWheelchairAccessible => 2,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Only 0, 1 and 2 are valid wheelchair boarding codes
        #[test]
        fn outside_range_rejected(code in any::<i32>().prop_filter("not a known code", |c| !(0..=2).contains(c))) {
            let err = WheelchairBoarding::from_code(Some(code)).unwrap_err();
            prop_assert_eq!(err.code, code);
            prop_assert_eq!(err.field, "wheelchair_boarding");
        }

        /// Valid codes survive a decode/encode roundtrip
        #[test]
        fn roundtrip(code in 0i32..=2) {
            let value = WheelchairBoarding::from_code(Some(code)).unwrap();
            prop_assert_eq!(value.code(), code);
        }
    }
}
