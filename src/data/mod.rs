//! Bundled constellation source tables
//!
//! The constellation properties and line figures ship with the crate, the
//! same way the upstream catalogs distribute them. Only the boundary
//! vertices come from external border files.

mod lines;
mod properties;

pub use lines::{line_figure, LINE_FIGURES};
pub use properties::{properties_for, ConstellationProperties, PROPERTIES};
