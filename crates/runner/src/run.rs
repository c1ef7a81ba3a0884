//! Bootstrap sequence: seed roles, build a course, exercise its behavior.

use anyhow::Context;
use coursekit_domain::roles::{register_roles, registered_roles};
use coursekit_domain::{
    AuditUser, Course, Date, DateRange, NewCourseInput, NonEmptyString, PositiveInt,
};

use crate::config::AppConfig;

pub fn run(config: &AppConfig) -> anyhow::Result<Course> {
    let added = register_roles(&config.roles);
    tracing::info!(added, roles = ?registered_roles(), "Role registry seeded");

    let creator = AuditUser::new(config.actor.as_str())
        .with_context(|| format!("COURSEKIT_ACTOR '{}' is not a usable principal", config.actor))?;

    let mut course = Course::new(NewCourseInput {
        name: "Go for Production".into(),
        description: "Designing, shipping and operating services in production".into(),
        enrollment_limit: 100,
        enrollment_start_date: "2025-10-01".into(),
        enrollment_end_date: "2025-10-31".into(),
        created_by: creator,
    })
    .context("failed to create sample course")?;
    tracing::info!(course_id = %course.id(), "Sample course created");

    let instructor = AuditUser::new("instructor@example.com")?;
    course.change_name(NonEmptyString::new("Rust for Production")?, instructor.clone());
    course.update_enrollment_limit(PositiveInt::new(150)?, instructor.clone());
    course.update_enrollment_period(
        DateRange::new(Date::from_ymd(2025, 11, 1)?, Date::from_ymd(2025, 11, 30)?)?,
        instructor,
    );
    tracing::info!(
        course_id = %course.id(),
        version = %course.audit().version(),
        "Sample course updated"
    );

    Ok(course)
}
