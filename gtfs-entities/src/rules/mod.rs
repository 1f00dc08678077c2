//! Field validation rules shared by every entity kind.

mod code_table;
mod validation;

pub use code_table::{CodeTable, UnrecognizedCode};
pub use validation::{Validation, non_empty, require_value, resolve_enum};
