//! Entity construction for GTFS feeds.
//!
//! Turns the raw field values of one feed record into either a validated,
//! immutable entity or the complete list of notices explaining why the
//! record was rejected.

pub mod entity;
pub mod notice;
pub mod result;
pub mod rules;
pub mod stops;

pub use entity::EntityBuilder;
pub use notice::{Notice, NoticeKind, Severity};
pub use result::{BuildResult, EmptyNoticeList, NoticeList};
