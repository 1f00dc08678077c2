//! The contract shared by every entity builder.

use crate::result::BuildResult;

/// A reusable accumulator for one entity kind.
///
/// Callers set the raw fields of a record, call [`build`](Self::build), then
/// [`clear`](Self::clear) before the next record. Setters never validate;
/// all checks happen in `build`, which reports every violation at once.
///
/// A builder is scratch state for one thread. Parallel callers give each
/// worker its own builder.
pub trait EntityBuilder: Default {
    /// The validated entity this builder produces.
    type Entity;

    /// Feed file this entity kind is read from, recorded on every notice.
    const FILENAME: &'static str;

    /// Validate the current fields.
    fn build(&self) -> BuildResult<Self::Entity>;

    /// Return every field to its unset state.
    fn clear(&mut self) -> &mut Self;

    /// Build from the current fields, then clear them.
    fn build_and_clear(&mut self) -> BuildResult<Self::Entity> {
        let result = self.build();
        self.clear();
        result
    }
}
