//! Course aggregate - an offering with an enrollment limit and window
//!
//! # Always-valid design
//!
//! - **Private fields**: state is only reachable through accessors
//! - **Newtypes**: every attribute is a validated value object
//! - **Validating constructor**: `new()` refines plain input field by field
//! - **Total mutators**: behavior methods take pre-validated values and
//!   cannot fail; each one touches the audit block

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::audit::Audit;
use crate::clock::{ClockPort, SystemClock};
use crate::error::DomainError;
use crate::ids::CourseId;
use crate::value_objects::{AuditUser, Date, DateRange, NonEmptyString, PositiveInt};

/// Error prefix for an invalid course name.
pub const INVALID_NAME: &str = "invalid course name";
/// Error prefix for an invalid course description.
pub const INVALID_DESCRIPTION: &str = "invalid course description";
/// Error prefix for an invalid enrollment limit.
pub const INVALID_ENROLLMENT_LIMIT: &str = "invalid enrollment limit";
/// Error prefix for an unparsable enrollment start date.
pub const INVALID_START_DATE: &str = "invalid enrollment start date";
/// Error prefix for an unparsable enrollment end date.
pub const INVALID_END_DATE: &str = "invalid enrollment end date";
/// Error prefix for a start date after the end date.
pub const INVALID_ENROLLMENT_PERIOD: &str = "invalid enrollment period";

/// Raw input accepted by [`Course::new`].
#[derive(Debug, Clone)]
pub struct NewCourseInput {
    pub name: String,
    pub description: String,
    pub enrollment_limit: i64,
    pub enrollment_start_date: String,
    pub enrollment_end_date: String,
    pub created_by: AuditUser,
}

/// A course offering.
///
/// # Invariants
///
/// - `name` and `description` contain visible text (enforced by `NonEmptyString`)
/// - `enrollment_limit > 0` (enforced by `PositiveInt`)
/// - `enrollment_period.start <= enrollment_period.end` (enforced by `DateRange`)
/// - `id` is never nil
/// - every mutator advances `audit.version` by exactly one
///
/// # Example
///
/// ```
/// use coursekit_domain::aggregates::course::{Course, NewCourseInput};
/// use coursekit_domain::value_objects::{AuditUser, NonEmptyString};
///
/// let creator = AuditUser::new("creator@example.com").unwrap();
/// let mut course = Course::new(NewCourseInput {
///     name: "Go for Production".into(),
///     description: "Shipping Go services".into(),
///     enrollment_limit: 100,
///     enrollment_start_date: "2025-10-01".into(),
///     enrollment_end_date: "2025-10-31".into(),
///     created_by: creator,
/// })
/// .unwrap();
///
/// let editor = AuditUser::new("editor@example.com").unwrap();
/// course.change_name(NonEmptyString::new("Rust for Production").unwrap(), editor);
///
/// assert_eq!(course.name().as_str(), "Rust for Production");
/// assert_eq!(course.audit().version().get(), 2);
/// ```
#[derive(Clone, Serialize)]
pub struct Course {
    // Identity
    id: CourseId,

    // Core attributes (newtypes)
    name: NonEmptyString,
    description: NonEmptyString,

    // Enrollment
    enrollment_limit: PositiveInt,
    enrollment_period: DateRange,

    audit: Audit,

    #[serde(skip)]
    clock: Arc<dyn ClockPort>,
}

impl Course {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Validate `input` and build a course stamped by the system clock.
    ///
    /// # Errors
    ///
    /// Fields are checked in order (name, description, limit, start date, end
    /// date, period) and the first failure is returned as
    /// `DomainError::Invalid` whose message starts with the matching
    /// `INVALID_*` prefix. `DomainError::Internal` is returned if no id could
    /// be generated.
    pub fn new(input: NewCourseInput) -> Result<Self, DomainError> {
        Self::new_with_clock(input, Arc::new(SystemClock))
    }

    /// Same as [`Course::new`], reading time from `clock` for creation and
    /// every later mutation.
    pub fn new_with_clock(
        input: NewCourseInput,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, DomainError> {
        let NewCourseInput {
            name,
            description,
            enrollment_limit,
            enrollment_start_date,
            enrollment_end_date,
            created_by,
        } = input;

        let name = NonEmptyString::new(name).map_err(|e| e.with_context(INVALID_NAME))?;
        let description =
            NonEmptyString::new(description).map_err(|e| e.with_context(INVALID_DESCRIPTION))?;
        let enrollment_limit = PositiveInt::new(enrollment_limit)
            .map_err(|e| e.with_context(INVALID_ENROLLMENT_LIMIT))?;
        let start =
            Date::parse(&enrollment_start_date).map_err(|e| e.with_context(INVALID_START_DATE))?;
        let end = Date::parse(&enrollment_end_date).map_err(|e| e.with_context(INVALID_END_DATE))?;
        let enrollment_period =
            DateRange::new(start, end).map_err(|e| e.with_context(INVALID_ENROLLMENT_PERIOD))?;
        let id = CourseId::generate()?;

        let audit = Audit::new(created_by, clock.now());
        tracing::debug!(course_id = %id, created_by = %audit.created_by(), "course created");

        Ok(Self {
            id,
            name,
            description,
            enrollment_limit,
            enrollment_period,
            audit,
            clock,
        })
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &NonEmptyString {
        &self.description
    }

    #[inline]
    pub fn enrollment_limit(&self) -> PositiveInt {
        self.enrollment_limit
    }

    #[inline]
    pub fn enrollment_period(&self) -> DateRange {
        self.enrollment_period
    }

    #[inline]
    pub fn audit(&self) -> &Audit {
        &self.audit
    }

    /// Whether enrollment is open on `date` (period bounds inclusive).
    pub fn is_enrollment_open(&self, date: Date) -> bool {
        self.enrollment_period.contains(date)
    }

    // =========================================================================
    // Behavior Methods
    // =========================================================================

    pub fn change_name(&mut self, name: NonEmptyString, updated_by: AuditUser) {
        self.name = name;
        self.touch(updated_by);
    }

    pub fn change_description(&mut self, description: NonEmptyString, updated_by: AuditUser) {
        self.description = description;
        self.touch(updated_by);
    }

    pub fn update_enrollment_limit(&mut self, limit: PositiveInt, updated_by: AuditUser) {
        self.enrollment_limit = limit;
        self.touch(updated_by);
    }

    pub fn update_enrollment_period(&mut self, period: DateRange, updated_by: AuditUser) {
        self.enrollment_period = period;
        self.touch(updated_by);
    }

    fn touch(&mut self, updated_by: AuditUser) {
        self.audit.touch(updated_by, self.clock.now());
        tracing::debug!(
            course_id = %self.id,
            version = self.audit.version().get(),
            updated_by = %self.audit.updated_by(),
            "course updated"
        );
    }
}

impl fmt::Debug for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Course")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("enrollment_limit", &self.enrollment_limit)
            .field("enrollment_period", &self.enrollment_period)
            .field("audit", &self.audit)
            .finish_non_exhaustive()
    }
}
