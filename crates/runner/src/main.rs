//! CourseKit runner - composition root.
//!
//! Loads configuration, installs logging, seeds the role registry and prints
//! a sample course as JSON.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod run;

use config::{load_dotenv_from_repo_root, AppConfig};

fn main() -> anyhow::Result<()> {
    let env_file_errors = load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coursekit_runner=info,coursekit_domain=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    for failed in &env_file_errors {
        tracing::warn!(path = %failed.path.display(), error = %failed.error, "Failed to load env file");
    }

    tracing::info!("Starting CourseKit runner");

    let config = AppConfig::from_env();
    let course = run::run(&config)?;

    println!("{}", serde_json::to_string_pretty(&course)?);
    Ok(())
}
