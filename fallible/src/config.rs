/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Process-level defaults for validation behavior.
//!
//! - [`Config::from_env`] reads [`STRATEGY_ENV`]
//! - [`Config::from_yaml`] and [`Config::to_yaml`] load and save a
//!   YAML document

use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::strategy::Strategy;

/// Environment variable consulted by [`Config::from_env`].
pub const STRATEGY_ENV: &str = "FALLIBLE_STRATEGY";

/// Errors from reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Not one of `fail_fast` or `error_accumulation`.
    #[error("unknown strategy `{0}`")]
    UnknownStrategy(String),

    /// An environment variable was set to something other than UTF-8.
    #[error("${0} is not valid unicode")]
    NotUnicode(String),
}

/// Validation defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Strategy used when a caller does not pick one.
    pub strategy: Strategy,
}

impl Config {
    /// Load configuration from the environment. Unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        match env::var(STRATEGY_ENV) {
            Ok(value) => {
                config.strategy = value.parse()?;
                tracing::info!(
                    strategy = %config.strategy,
                    "strategy overridden from ${}",
                    STRATEGY_ENV
                );
            }
            Err(env::VarError::NotPresent) => {}
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NotUnicode(STRATEGY_ENV.to_string()));
            }
        }
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), anyhow::Error> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_round_trip() -> Result<(), anyhow::Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("fallible.yaml");

        let config = Config {
            strategy: Strategy::FailFast,
        };
        config.to_yaml(&path)?;
        assert_eq!(std::fs::read_to_string(&path)?, "strategy: fail_fast\n");
        assert_eq!(Config::from_yaml(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_yaml_defaults_and_errors() -> Result<(), anyhow::Error> {
        let dir = tempfile::tempdir()?;

        let empty = dir.path().join("empty.yaml");
        std::fs::write(&empty, "{}\n")?;
        assert_eq!(Config::from_yaml(&empty)?, Config::default());

        let bad = dir.path().join("bad.yaml");
        std::fs::write(&bad, "strategy: sometimes\n")?;
        assert!(Config::from_yaml(&bad).is_err());

        assert!(Config::from_yaml(dir.path().join("missing.yaml")).is_err());
        Ok(())
    }

    // The only test in this crate that touches the process environment.
    #[tracing_test::traced_test]
    #[test]
    fn test_from_env() {
        env::remove_var(STRATEGY_ENV);
        assert_eq!(Config::from_env(), Ok(Config::default()));

        env::set_var(STRATEGY_ENV, "fail_fast");
        assert_eq!(
            Config::from_env().map(|c| c.strategy),
            Ok(Strategy::FailFast)
        );
        assert!(logs_contain("strategy overridden"));

        env::set_var(STRATEGY_ENV, "whenever");
        assert_eq!(
            Config::from_env(),
            Err(ConfigError::UnknownStrategy("whenever".to_string()))
        );

        #[cfg(unix)]
        {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;

            env::set_var(STRATEGY_ENV, OsStr::from_bytes(&[0x66, 0x6f, 0x80]));
            let error = Config::from_env().unwrap_err();
            assert_eq!(error, ConfigError::NotUnicode(STRATEGY_ENV.to_string()));
            assert_eq!(error.to_string(), "$FALLIBLE_STRATEGY is not valid unicode");
        }

        env::remove_var(STRATEGY_ENV);
    }
}
