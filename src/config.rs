//! Launch configuration.
//!
//! Everything is read from environment variables with defaults; a single
//! positional argument overrides the equation set path.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `EQUATIO_SET_PATH` | `data/standard_set.json` |
//! | `EQUATIO_SEED` | derived from the clock |
//! | `EQUATIO_LOG_PATH` | unset (logging off) |
//! | `EQUATIO_LOG` | `info` (`RUST_LOG` wins when set) |

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

pub const DEFAULT_SET_PATH: &str = "data/standard_set.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub set_path: PathBuf,
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            set_path: PathBuf::from(DEFAULT_SET_PATH),
            seed: clock_seed(),
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl LaunchConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let set_path = non_empty("EQUATIO_SET_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SET_PATH));

        let seed = non_empty("EQUATIO_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = non_empty("EQUATIO_LOG_PATH").map(PathBuf::from);

        let log_level = non_empty("EQUATIO_LOG")
            .and_then(|s| s.parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            set_path,
            seed,
            log_path,
            log_level,
        }
    }

    /// Apply command-line arguments (program name already skipped).
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path = args
            .into_iter()
            .map(Into::into)
            .find(|a: &String| !a.trim().is_empty());
        if let Some(path) = path {
            self.set_path = PathBuf::from(path);
        }
        self
    }
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}
