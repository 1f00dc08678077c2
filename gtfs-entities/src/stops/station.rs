//! The validated station entity.

use serde::Serialize;

use super::{LocationType, WheelchairBoarding};

/// A station: a physical structure or area containing one or more stops.
///
/// Stations are only created by [`StationBuilder::build`](super::StationBuilder::build)
/// and never change afterwards. Every required attribute is present and every
/// enumerated attribute holds a recognized value.
///
/// Child stops are held by identifier. Resolving them to other entities is
/// the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub(super) stop_id: String,
    pub(super) stop_name: String,
    pub(super) stop_lat: f64,
    pub(super) stop_lon: f64,
    pub(super) stop_code: Option<String>,
    pub(super) stop_desc: Option<String>,
    pub(super) zone_id: Option<String>,
    pub(super) stop_url: Option<String>,
    pub(super) stop_timezone: Option<String>,
    pub(super) level_id: Option<String>,
    pub(super) wheelchair_boarding: WheelchairBoarding,
    pub(super) children: Option<Vec<String>>,
}

impl Station {
    pub fn stop_id(&self) -> &str {
        &self.stop_id
    }

    pub fn stop_name(&self) -> &str {
        &self.stop_name
    }

    pub fn stop_lat(&self) -> f64 {
        self.stop_lat
    }

    pub fn stop_lon(&self) -> f64 {
        self.stop_lon
    }

    pub fn stop_code(&self) -> Option<&str> {
        self.stop_code.as_deref()
    }

    pub fn stop_desc(&self) -> Option<&str> {
        self.stop_desc.as_deref()
    }

    /// Fare zone of the station.
    pub fn zone_id(&self) -> Option<&str> {
        self.zone_id.as_deref()
    }

    pub fn stop_url(&self) -> Option<&str> {
        self.stop_url.as_deref()
    }

    pub fn stop_timezone(&self) -> Option<&str> {
        self.stop_timezone.as_deref()
    }

    /// Level the station sits on; not checked against `levels.txt` here.
    pub fn level_id(&self) -> Option<&str> {
        self.level_id.as_deref()
    }

    pub fn wheelchair_boarding(&self) -> WheelchairBoarding {
        self.wheelchair_boarding
    }

    /// Identifiers of the stops belonging to this station.
    ///
    /// `None` means no list was supplied, which is different from an empty
    /// list.
    pub fn children(&self) -> Option<&[String]> {
        self.children.as_deref()
    }

    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    pub fn location_type(&self) -> LocationType {
        LocationType::Station
    }
}
