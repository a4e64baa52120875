use std::{fs, io, path::Path};

use chrono_tz::Tz;
use serde::Deserialize;
use tracing::debug;

use crate::error::{HoursError, Result};

pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl Config {
    pub fn from_config(config: String) -> Result<Self> {
        let config: Config = serde_json::from_str(&config)
            .map_err(|err| HoursError::Config(format!("Could not deserialize.\n{}", err)))?;
        config.tz()?;
        Ok(config)
    }

    /// A missing file means defaults. Any other read failure is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(raw) => Self::from_config(raw),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no {} found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(HoursError::Config(format!("{}: {}", path.display(), err))),
        }
    }

    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|_| HoursError::Config(format!("unknown time zone {}", self.timezone)))
    }
}
