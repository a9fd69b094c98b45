use std::env;
use std::path::Path;

use chrono_tz::Tz;

use crate::error::AppError;
use crate::timezone;

/// Settings for one run, read from the environment once at startup and
/// passed by reference everywhere else.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) timezone: Tz,
    pub(crate) permalink_prefix: String,
    pub(crate) default_project: String,
    pub(crate) account_id: String,
    pub(crate) token: String,
    pub(crate) project_id: String,
    pub(crate) task_id: String,
    pub(crate) user_id: String,
}

/// Load the env file before the first environment read. The file is this
/// tool's configuration source, so failing to load it is fatal.
pub(crate) fn load_env_file(path: Option<&Path>) -> Result<(), AppError> {
    match path {
        Some(p) => dotenvy::from_path(p)?,
        None => {
            dotenvy::dotenv()?;
        }
    }
    Ok(())
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Missing variables become empty strings; only the timezone must
    /// resolve.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| get(key).unwrap_or_default();
        Ok(Config {
            timezone: timezone::resolve(&var("TIMEZONE"))?,
            permalink_prefix: var("PERMALINK_PREFIX"),
            default_project: var("DEFAULT_PROJECT"),
            account_id: var("HARVEST_ACCOUNT_ID"),
            token: var("TOKEN"),
            project_id: var("PROJECT_ID"),
            task_id: var("TASK_ID"),
            user_id: var("USER_ID"),
        })
    }
}
