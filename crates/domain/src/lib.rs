//! CourseKit domain: always-valid value objects, audit tracking and the
//! `Course` entity.
//!
//! Raw input is refined into value objects at the edges; once a `Course`
//! exists, none of its operations can fail.

pub mod aggregates;
pub mod audit;
pub mod clock;
pub mod error;
pub mod ids;
pub mod roles;
pub mod value_objects;

pub use aggregates::{Course, NewCourseInput};
pub use audit::Audit;
pub use clock::{ClockPort, FixedClock, SteppedClock, SystemClock};
pub use error::{DomainError, ErrorCode};
pub use ids::CourseId;

// Re-export value objects
pub use value_objects::{
    AuditUser, Date, DateRange, NonEmptyString, PositiveInt, Timestamp, Version,
};
