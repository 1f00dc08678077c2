//! Reusable builder for station records.

use tracing::{debug, trace};

use crate::entity::EntityBuilder;
use crate::result::BuildResult;
use crate::rules::Validation;

use super::{STOPS_FILENAME, Station, WHEELCHAIR_BOARDING};

const STOP_ID: &str = "stop_id";
const STOP_NAME: &str = "stop_name";
const STOP_LAT: &str = "stop_lat";
const STOP_LON: &str = "stop_lon";

/// Collects the raw fields of one `stops.txt` station row.
///
/// Setters store values as given and never fail. [`build`](Self::build)
/// checks the required fields and the wheelchair boarding code in a fixed
/// order and reports every violation it finds.
///
/// # Examples
///
/// ```
/// use gtfs_entities::stops::{StationBuilder, WheelchairBoarding};
///
/// let mut builder = StationBuilder::new();
/// let station = builder
///     .stop_id(Some("central".into()))
///     .stop_name(Some("Central Station".into()))
///     .stop_lat(Some(45.5017))
///     .stop_lon(Some(-73.5673))
///     .build()
///     .into_result()
///     .unwrap();
/// assert_eq!(station.stop_name(), "Central Station");
/// assert_eq!(
///     station.wheelchair_boarding(),
///     WheelchairBoarding::UnknownWheelchairBoarding
/// );
///
/// builder.clear().stop_name(Some("Nameless".into()));
/// let notices = builder.build().into_result().unwrap_err();
/// assert_eq!(notices.len(), 3);
/// assert_eq!(notices.first().entity_id(), "no id");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StationBuilder {
    stop_id: Option<String>,
    stop_name: Option<String>,
    stop_lat: Option<f64>,
    stop_lon: Option<f64>,
    stop_code: Option<String>,
    stop_desc: Option<String>,
    zone_id: Option<String>,
    stop_url: Option<String>,
    stop_timezone: Option<String>,
    level_id: Option<String>,
    wheelchair_boarding: Option<i32>,
    children: Option<Vec<String>>,
}

impl StationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_id(&mut self, stop_id: Option<String>) -> &mut Self {
        self.stop_id = stop_id;
        self
    }

    pub fn stop_name(&mut self, stop_name: Option<String>) -> &mut Self {
        self.stop_name = stop_name;
        self
    }

    pub fn stop_lat(&mut self, stop_lat: Option<f64>) -> &mut Self {
        self.stop_lat = stop_lat;
        self
    }

    pub fn stop_lon(&mut self, stop_lon: Option<f64>) -> &mut Self {
        self.stop_lon = stop_lon;
        self
    }

    pub fn stop_code(&mut self, stop_code: Option<String>) -> &mut Self {
        self.stop_code = stop_code;
        self
    }

    pub fn stop_desc(&mut self, stop_desc: Option<String>) -> &mut Self {
        self.stop_desc = stop_desc;
        self
    }

    pub fn zone_id(&mut self, zone_id: Option<String>) -> &mut Self {
        self.zone_id = zone_id;
        self
    }

    pub fn stop_url(&mut self, stop_url: Option<String>) -> &mut Self {
        self.stop_url = stop_url;
        self
    }

    pub fn stop_timezone(&mut self, stop_timezone: Option<String>) -> &mut Self {
        self.stop_timezone = stop_timezone;
        self
    }

    pub fn level_id(&mut self, level_id: Option<String>) -> &mut Self {
        self.level_id = level_id;
        self
    }

    /// Raw `wheelchair_boarding` code; decoded in `build`.
    pub fn wheelchair_boarding(&mut self, code: Option<i32>) -> &mut Self {
        self.wheelchair_boarding = code;
        self
    }

    /// Identifiers of the child stops. `Some(vec![])` is kept as an empty
    /// list, distinct from `None`.
    pub fn children(&mut self, children: Option<Vec<String>>) -> &mut Self {
        self.children = children;
        self
    }

    /// Reset every field to unset. Safe to call at any time, any number of
    /// times.
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::default();
        trace!("station builder cleared");
        self
    }

    /// Validate the current fields.
    ///
    /// Checks run in declaration order: `stop_id`, `stop_name`, `stop_lat`,
    /// `stop_lon`, then `wheelchair_boarding`. Notices are attributed to the
    /// current `stop_id`, or to "no id" when it is missing.
    pub fn build(&self) -> BuildResult<Station> {
        let mut validation = Validation::new(STOPS_FILENAME, self.stop_id.as_deref());
        let entity_id = validation.entity_id();

        let stop_id = validation.require_text(self.stop_id.as_deref(), STOP_ID);
        let stop_name = validation.require_text(self.stop_name.as_deref(), STOP_NAME);
        let stop_lat = validation.require(self.stop_lat, STOP_LAT);
        let stop_lon = validation.require(self.stop_lon, STOP_LON);
        let wheelchair_boarding =
            validation.enumeration(self.wheelchair_boarding, &WHEELCHAIR_BOARDING);

        let station = match (stop_id, stop_name, stop_lat, stop_lon, wheelchair_boarding) {
            (
                Some(stop_id),
                Some(stop_name),
                Some(stop_lat),
                Some(stop_lon),
                Some(wheelchair_boarding),
            ) => Some(Station {
                stop_id,
                stop_name,
                stop_lat,
                stop_lon,
                stop_code: self.stop_code.clone(),
                stop_desc: self.stop_desc.clone(),
                zone_id: self.zone_id.clone(),
                stop_url: self.stop_url.clone(),
                stop_timezone: self.stop_timezone.clone(),
                level_id: self.level_id.clone(),
                wheelchair_boarding,
                children: self.children.clone(),
            }),
            _ => None,
        };

        let result = validation.finish(station);
        match &result {
            BuildResult::Entity(_) => trace!(entity_id, "station built"),
            BuildResult::Notices(notices) => debug!(
                filename = STOPS_FILENAME,
                entity_id,
                notices = notices.len(),
                "station rejected"
            ),
        }
        result
    }
}

impl EntityBuilder for StationBuilder {
    type Entity = Station;

    const FILENAME: &'static str = STOPS_FILENAME;

    fn build(&self) -> BuildResult<Station> {
        StationBuilder::build(self)
    }

    fn clear(&mut self) -> &mut Self {
        StationBuilder::clear(self)
    }
}
