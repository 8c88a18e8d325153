//! Business logic layer between controllers and repositories.

pub mod study;
