//! Value objects - Immutable objects defined by their attributes
//!
//! Each type has a single validating constructor; an instance that exists is
//! valid.

mod audit_user;
mod dates;
mod names;
mod numbers;
mod timestamp;
mod version;

pub use audit_user::AuditUser;
pub use dates::{Date, DateRange};
pub use names::NonEmptyString;
pub use numbers::PositiveInt;
pub use timestamp::Timestamp;
pub use version::Version;
