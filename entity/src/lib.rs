//! SeaORM entity definitions for the studyboard database schema.
//!
//! Each module maps one table. The `prelude` re-exports the entity types
//! under their table names for use in repositories and test tooling.

pub mod prelude;

pub mod study;
pub mod study_level;
pub mod study_level_value;
