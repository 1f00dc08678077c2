//! Stop location types.

use serde::Serialize;

use crate::rules::{CodeTable, UnrecognizedCode};

/// What kind of location a `stops.txt` row describes.
///
/// Orchestrators decode this first to pick the builder for a row; a station
/// is `location_type = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// A stop or platform where riders board (the default when absent).
    #[default]
    StopOrPlatform,
    /// A physical structure containing one or more platforms.
    Station,
    /// A way into or out of a station.
    Entrance,
    /// A location inside a station used to link pathways.
    GenericNode,
    /// A specific boarding location on a platform.
    BoardingArea,
}

/// Feed codes for `location_type`.
pub static LOCATION_TYPE: CodeTable<LocationType> = CodeTable::new(
    "location_type",
    &[
        (0, LocationType::StopOrPlatform),
        (1, LocationType::Station),
        (2, LocationType::Entrance),
        (3, LocationType::GenericNode),
        (4, LocationType::BoardingArea),
    ],
    LocationType::StopOrPlatform,
);

impl LocationType {
    /// Decode a raw feed value; absent means stop or platform.
    pub fn from_code(code: Option<i32>) -> Result<Self, UnrecognizedCode> {
        LOCATION_TYPE.resolve(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_stop_or_platform() {
        assert_eq!(LocationType::from_code(None), Ok(LocationType::StopOrPlatform));
    }

    #[test]
    fn station_is_one() {
        assert_eq!(LocationType::from_code(Some(1)), Ok(LocationType::Station));
        assert_eq!(LOCATION_TYPE.code_of(LocationType::Station), Some(1));
    }

    #[test]
    fn all_codes() {
        assert_eq!(LOCATION_TYPE.codes().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
        assert_eq!(LocationType::from_code(Some(4)), Ok(LocationType::BoardingArea));
    }

    #[test]
    fn reject_unknown() {
        let err = LocationType::from_code(Some(5)).unwrap_err();
        assert_eq!(err.field, "location_type");
        assert_eq!(err.code, 5);
    }
}
