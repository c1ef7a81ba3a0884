//! Runner configuration read from the environment.

use std::path::{Path, PathBuf};

/// Roles seeded when `COURSEKIT_ROLES` is unset.
const DEFAULT_ROLES: &str = "admin,system";
/// Principal used when `COURSEKIT_ACTOR` is unset.
const DEFAULT_ACTOR: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Role names to register before any domain object is built.
    pub roles: Vec<String>,
    /// Principal credited with creating the sample course.
    pub actor: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let roles = lookup("COURSEKIT_ROLES").unwrap_or_else(|| DEFAULT_ROLES.into());
        let actor = lookup("COURSEKIT_ACTOR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ACTOR.into());

        Self {
            roles: parse_roles(&roles),
            actor,
        }
    }
}

fn parse_roles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Env files read at startup, highest precedence first.
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// An env file that exists but could not be loaded.
#[derive(Debug)]
pub struct EnvFileError {
    pub path: PathBuf,
    pub error: dotenvy::Error,
}

/// Loads `.env.local` then `.env` from the repository root, if present.
///
/// Runs before logging is installed (the filter itself may come from these
/// files), so failures are returned for the caller to report.
pub fn load_dotenv_from_repo_root() -> Vec<EnvFileError> {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    load_env_files(&repo_root)
}

/// Variables already in the environment are never overridden, so earlier
/// files in [`ENV_FILES`] win over later ones.
fn load_env_files(dir: &Path) -> Vec<EnvFileError> {
    ENV_FILES
        .iter()
        .map(|filename| dir.join(filename))
        .filter(|path| path.exists())
        .filter_map(|path| match dotenvy::from_path(&path) {
            Ok(()) => None,
            Err(error) => Some(EnvFileError { path, error }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.roles, vec!["admin", "system"]);
        assert_eq!(config.actor, "admin");
    }

    #[test]
    fn roles_are_split_and_trimmed() {
        let config = config_from(&[("COURSEKIT_ROLES", " registrar , ,auditor,")]);
        assert_eq!(config.roles, vec!["registrar", "auditor"]);
    }

    #[test]
    fn empty_roles_variable_registers_nothing() {
        let config = config_from(&[("COURSEKIT_ROLES", "")]);
        assert!(config.roles.is_empty());
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("coursekit-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_env_files_are_skipped() {
        let dir = scratch_dir("no-env-files");
        assert!(load_env_files(&dir).is_empty());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn malformed_env_file_is_reported_and_others_still_load() {
        let dir = scratch_dir("malformed-env");
        std::fs::write(
            dir.join(".env.local"),
            "COURSEKIT_TEST_LOCAL_ONLY=from-local\n",
        )
        .unwrap();
        std::fs::write(dir.join(".env"), "this line has no equals sign\n").unwrap();

        let errors = load_env_files(&dir);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, dir.join(".env"));
        assert_eq!(
            std::env::var("COURSEKIT_TEST_LOCAL_ONLY").as_deref(),
            Ok("from-local")
        );
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn blank_actor_falls_back_to_default() {
        let config = config_from(&[("COURSEKIT_ACTOR", "   ")]);
        assert_eq!(config.actor, "admin");

        let config = config_from(&[("COURSEKIT_ACTOR", "ops@example.com")]);
        assert_eq!(config.actor, "ops@example.com");
    }
}
