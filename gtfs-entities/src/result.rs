//! The outcome of building one entity.

use serde::Serialize;

use crate::notice::Notice;

/// Error returned when trying to make a [`NoticeList`] out of nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("notice list must contain at least one notice")]
pub struct EmptyNoticeList;

/// A non-empty, ordered list of notices.
///
/// The order is the order in which the builder checked its fields, so the
/// list is deterministic for a given record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NoticeList(Vec<Notice>);

impl NoticeList {
    /// A list holding a single notice.
    pub fn new(first: Notice) -> Self {
        NoticeList(vec![first])
    }

    pub fn push(&mut self, notice: Notice) {
        self.0.push(notice);
    }

    /// The first notice in check order.
    pub fn first(&self) -> &Notice {
        // Non-empty by construction
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[Notice] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notice> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Notice> {
        self.0
    }
}

impl TryFrom<Vec<Notice>> for NoticeList {
    type Error = EmptyNoticeList;

    fn try_from(notices: Vec<Notice>) -> Result<Self, Self::Error> {
        if notices.is_empty() {
            return Err(EmptyNoticeList);
        }
        Ok(NoticeList(notices))
    }
}

impl IntoIterator for NoticeList {
    type Item = Notice;
    type IntoIter = std::vec::IntoIter<Notice>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NoticeList {
    type Item = &'a Notice;
    type IntoIter = std::slice::Iter<'a, Notice>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Either a validated entity or the notices explaining why there is none.
///
/// # Examples
///
/// ```
/// use gtfs_entities::{BuildResult, Notice, NoticeList};
///
/// let ok: BuildResult<u32> = BuildResult::Entity(7);
/// assert!(ok.is_entity());
/// assert_eq!(ok.into_result().ok(), Some(7));
///
/// let failed: BuildResult<u32> = BuildResult::Notices(NoticeList::new(
///     Notice::missing_required_value("stops.txt", "S1", "stop_name"),
/// ));
/// assert!(!failed.is_entity());
/// assert_eq!(failed.notices().map(|n| n.len()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum BuildResult<E> {
    /// The record passed every rule.
    Entity(E),
    /// The record failed at least one rule.
    Notices(NoticeList),
}

impl<E> BuildResult<E> {
    pub fn is_entity(&self) -> bool {
        matches!(self, BuildResult::Entity(_))
    }

    pub fn entity(&self) -> Option<&E> {
        match self {
            BuildResult::Entity(entity) => Some(entity),
            BuildResult::Notices(_) => None,
        }
    }

    pub fn notices(&self) -> Option<&NoticeList> {
        match self {
            BuildResult::Entity(_) => None,
            BuildResult::Notices(notices) => Some(notices),
        }
    }

    pub fn into_result(self) -> Result<E, NoticeList> {
        match self {
            BuildResult::Entity(entity) => Ok(entity),
            BuildResult::Notices(notices) => Err(notices),
        }
    }

    /// Transform the entity, leaving notices untouched.
    pub fn map<U, F>(self, f: F) -> BuildResult<U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            BuildResult::Entity(entity) => BuildResult::Entity(f(entity)),
            BuildResult::Notices(notices) => BuildResult::Notices(notices),
        }
    }
}

impl<E> From<BuildResult<E>> for Result<E, NoticeList> {
    fn from(result: BuildResult<E>) -> Self {
        result.into_result()
    }
}
