//! Aggregates - entities with identity and a lifecycle

pub mod course;

pub use course::{Course, NewCourseInput};
