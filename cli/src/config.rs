// SPDX-FileCopyrightText: 2026 staycal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use staycal_api::{ApiConfig, AuthMethod, Session};
use tokio::fs;

const APP_NAME: &str = "staycal";
const STAYCAL_CONFIG_ENV: &str = "STAYCAL_CONFIG";

/// Locates and parses the configuration file.
///
/// Resolution order: the `--config` flag, then the `STAYCAL_CONFIG`
/// environment variable, then `<config dir>/staycal/config.toml`.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(ApiConfig, Session), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(STAYCAL_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?;

    Ok((raw.api, Session::from_auth(raw.auth)))
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    api: ApiConfig,
    #[serde(default)]
    auth: AuthMethod,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::config_dir().ok_or_else(|| "User-specific config directory not found".into())
}
