//! Validation notices.
//!
//! A notice is a structured diagnostic describing one violation found while
//! building an entity. Notices are plain data: every notice carries the file
//! and entity it refers to, plus a small context map whose keys depend on the
//! notice kind.

mod kind;
mod record;

pub use kind::{NoticeKind, Severity};
pub use record::{KEY_ENUM_VALUE, KEY_FIELD_NAME, NO_ID, Notice};
