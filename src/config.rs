//! Run configuration
//!
//! Settings come from built-in defaults, optionally overridden by a TOML file
//! (`--config <PATH>` or `backfill.toml` at the repository root), and finally
//! by command-line flags.

use crate::areas::provider::{
    DEFAULT_CONTENT_URL, DEFAULT_TIMEOUT, HttpContentProvider, LoremContentProvider, Provider,
};
use crate::areas::repository::{DEFAULT_OUTPUT_DIR, PushTarget};
use crate::artifacts::schedule::date_range::{DateRange, parse_date};
use crate::errors::HistoryError;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the configuration file looked up at the repository root
pub const CONFIG_FILE_NAME: &str = "backfill.toml";

pub const DEFAULT_START: &str = "2020-10-27";
pub const DEFAULT_END: &str = "2024-07-04";
pub const DEFAULT_INITIAL_MESSAGE: &str = "feat: initialize project";
pub const DEFAULT_INITIAL_DATE: &str = "2020-10-26";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub start: String,
    pub end: String,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
    pub content: ContentSettings,
    pub push: PushSettings,
    pub initial: Option<InitialCommitSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentSettings {
    pub url: String,
    pub offline: bool,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PushSettings {
    pub enabled: bool,
    pub remote: String,
    pub branch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitialCommitSettings {
    pub message: String,
    pub date: String,
}

/// Validated initial commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialCommit {
    pub message: String,
    pub date: NaiveDate,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            content: ContentSettings::default(),
            push: PushSettings::default(),
            initial: None,
        }
    }
}

impl Default for ContentSettings {
    fn default() -> Self {
        ContentSettings {
            url: DEFAULT_CONTENT_URL.to_string(),
            offline: false,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Default for PushSettings {
    fn default() -> Self {
        PushSettings {
            enabled: true,
            remote: "origin".to_string(),
            branch: "master".to_string(),
        }
    }
}

impl Default for InitialCommitSettings {
    fn default() -> Self {
        InitialCommitSettings {
            message: DEFAULT_INITIAL_MESSAGE.to_string(),
            date: DEFAULT_INITIAL_DATE.to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let raw = std::fs::read_to_string(path).map_err(|e| HistoryError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&raw).map_err(|e| HistoryError::Config {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })
    }

    /// Load `explicit` if given, else `<repo>/backfill.toml` if present, else defaults
    pub fn discover(repo: &Path, explicit: Option<&Path>) -> Result<Self, HistoryError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = repo.join(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::load(&path)
                } else {
                    Ok(Settings::default())
                }
            }
        }
    }

    pub fn date_range(&self) -> Result<DateRange, HistoryError> {
        DateRange::parse(&self.start, &self.end)
    }

    pub fn initial_commit(&self) -> Result<Option<InitialCommit>, HistoryError> {
        self.initial
            .as_ref()
            .map(|initial| {
                Ok(InitialCommit {
                    message: initial.message.clone(),
                    date: parse_date(&initial.date)?,
                })
            })
            .transpose()
    }

    pub fn push_target(&self) -> Option<PushTarget> {
        self.push
            .enabled
            .then(|| PushTarget::new(self.push.remote.clone(), self.push.branch.clone()))
    }

    /// Seeded generator when a seed is configured, OS entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    pub fn provider(&self) -> anyhow::Result<Provider> {
        if self.content.offline {
            return Ok(Provider::Lorem(LoremContentProvider));
        }

        let timeout = Duration::from_secs(self.content.timeout_secs);
        Ok(Provider::Http(HttpContentProvider::new(
            self.content.url.clone(),
            timeout,
        )?))
    }
}
