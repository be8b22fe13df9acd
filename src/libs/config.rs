//! Configuration management for glspent.
//!
//! Settings come from process environment variables, optionally seeded by a
//! `.env` file in the working directory (loaded by `main` through `dotenv`).
//! Everything is read and validated once at startup, before the first
//! request, and stays immutable for the run.
//!
//! ## Variables
//!
//! | Name | Required | Meaning |
//! |---|---|---|
//! | `GITLAB_URL` | yes | Base URL of the GitLab instance |
//! | `PERSONAL_ACCESS_TOKEN` | yes | Token sent as `PRIVATE-TOKEN` |
//! | `PROJECT_ID` | yes | Comma separated project ids |
//! | `WORKER_USERNAME` | yes | Comma separated usernames, the first is the report subject |
//! | `GLSPENT_NOTES_LOG` | no | Path of the raw notes log, unset disables it |
//! | `GLSPENT_NOTES_LOG_MAX_BYTES` | no | Rotation threshold of the notes log |
//! | `GLSPENT_TIMEOUT_SECS` | no | Per-request timeout |
//! | `GLSPENT_PER_PAGE` | no | Page size for paginated endpoints |
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use glspent::libs::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Reporting on {:?}", config.project_ids);
//! # Ok::<(), glspent::libs::config::ConfigError>(())
//! ```

use crate::api::gitlab::GitLabConfig;
use crate::libs::notes_log::{NotesLogConfig, DEFAULT_MAX_BYTES};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const GITLAB_URL: &str = "GITLAB_URL";
pub const PERSONAL_ACCESS_TOKEN: &str = "PERSONAL_ACCESS_TOKEN";
pub const PROJECT_ID: &str = "PROJECT_ID";
pub const WORKER_USERNAME: &str = "WORKER_USERNAME";
pub const NOTES_LOG: &str = "GLSPENT_NOTES_LOG";
pub const NOTES_LOG_MAX_BYTES: &str = "GLSPENT_NOTES_LOG_MAX_BYTES";
pub const TIMEOUT_SECS: &str = "GLSPENT_TIMEOUT_SECS";
pub const PER_PAGE: &str = "GLSPENT_PER_PAGE";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PER_PAGE: u32 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
    #[error("environment variable {0} is empty")]
    Empty(&'static str),
    #[error("environment variable {name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Main configuration container for a report run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// GitLab endpoint, token and transport settings.
    pub gitlab: GitLabConfig,

    /// Projects to report on, in report order.
    pub project_ids: Vec<u64>,

    /// Tracked usernames. Issues assigned to any of them are scanned; only
    /// the first one's notes are counted.
    pub worker_usernames: Vec<String>,

    /// Optional raw notes log.
    pub notes_log: Option<NotesLogConfig>,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = required(&lookup, GITLAB_URL)?.trim_end_matches('/').to_string();
        let access_token = required(&lookup, PERSONAL_ACCESS_TOKEN)?;

        let project_ids = split_list(&required(&lookup, PROJECT_ID)?)
            .map(|id| parse_value(PROJECT_ID, id))
            .collect::<Result<Vec<u64>, _>>()?;
        if project_ids.is_empty() {
            return Err(ConfigError::Empty(PROJECT_ID));
        }

        let worker_usernames: Vec<String> = split_list(&required(&lookup, WORKER_USERNAME)?).map(str::to_string).collect();
        if worker_usernames.is_empty() {
            return Err(ConfigError::Empty(WORKER_USERNAME));
        }

        let notes_log = match optional(&lookup, NOTES_LOG) {
            Some(path) => Some(NotesLogConfig {
                path: PathBuf::from(path),
                max_bytes: optional_value(&lookup, NOTES_LOG_MAX_BYTES)?.unwrap_or(DEFAULT_MAX_BYTES),
            }),
            None => None,
        };

        let per_page = optional_value(&lookup, PER_PAGE)?.unwrap_or(DEFAULT_PER_PAGE);
        if per_page == 0 {
            return Err(ConfigError::Invalid {
                name: PER_PAGE,
                value: per_page.to_string(),
            });
        }

        Ok(Self {
            gitlab: GitLabConfig {
                access_token,
                api_url,
                per_page,
                timeout_secs: optional_value(&lookup, TIMEOUT_SECS)?.unwrap_or(DEFAULT_TIMEOUT_SECS),
            },
            project_ids,
            worker_usernames,
            notes_log,
        })
    }

    /// The worker the report is about.
    pub fn primary_worker(&self) -> Option<&str> {
        self.worker_usernames.first().map(String::as_str)
    }
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Err(ConfigError::Missing(name)),
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
        Some(value) => Ok(value.trim().to_string()),
    }
}

fn optional_value<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    optional(lookup, name).map(|value| parse_value(name, &value)).transpose()
}

fn parse_value<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| vars.get(name).cloned()
    }

    fn base() -> Vec<(&'static str, &'static str)> {
        vec![
            (GITLAB_URL, "https://gitlab.example.com/"),
            (PERSONAL_ACCESS_TOKEN, "glpat-token"),
            (PROJECT_ID, "12, 34"),
            (WORKER_USERNAME, "jdoe,asmith"),
        ]
    }

    #[test]
    fn test_required_variables() {
        let config = Config::from_lookup(lookup(&base())).unwrap();
        assert_eq!(config.gitlab.api_url, "https://gitlab.example.com");
        assert_eq!(config.gitlab.access_token, "glpat-token");
        assert_eq!(config.project_ids, vec![12, 34]);
        assert_eq!(config.worker_usernames, vec!["jdoe", "asmith"]);
        assert_eq!(config.primary_worker(), Some("jdoe"));
        assert_eq!(config.gitlab.per_page, DEFAULT_PER_PAGE);
        assert_eq!(config.gitlab.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.notes_log.is_none());
    }

    #[test]
    fn test_missing_variable() {
        let vars: Vec<_> = base().into_iter().filter(|(k, _)| *k != GITLAB_URL).collect();
        assert_eq!(Config::from_lookup(lookup(&vars)), Err(ConfigError::Missing(GITLAB_URL)));
    }

    #[test]
    fn test_invalid_project_id() {
        let mut vars = base();
        vars[2] = (PROJECT_ID, "12,abc");
        assert_eq!(
            Config::from_lookup(lookup(&vars)),
            Err(ConfigError::Invalid {
                name: PROJECT_ID,
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_empty_worker_list() {
        let mut vars = base();
        vars[3] = (WORKER_USERNAME, " , ");
        assert_eq!(Config::from_lookup(lookup(&vars)), Err(ConfigError::Empty(WORKER_USERNAME)));
    }

    #[test]
    fn test_primary_worker_of_hand_built_config() {
        let mut config = Config::from_lookup(lookup(&base())).unwrap();
        config.worker_usernames.clear();
        assert_eq!(config.primary_worker(), None);
    }

    #[test]
    fn test_optional_settings() {
        let mut vars = base();
        vars.push((NOTES_LOG, "notes.json"));
        vars.push((NOTES_LOG_MAX_BYTES, "2048"));
        vars.push((TIMEOUT_SECS, "5"));
        vars.push((PER_PAGE, "20"));

        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(
            config.notes_log,
            Some(NotesLogConfig {
                path: PathBuf::from("notes.json"),
                max_bytes: 2048
            })
        );
        assert_eq!(config.gitlab.timeout_secs, 5);
        assert_eq!(config.gitlab.per_page, 20);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let mut vars = base();
        vars.push((PER_PAGE, "0"));
        assert!(matches!(
            Config::from_lookup(lookup(&vars)),
            Err(ConfigError::Invalid { name: PER_PAGE, .. })
        ));
    }
}
