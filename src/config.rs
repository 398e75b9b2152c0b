//! Environment-driven configuration.
//!
//! The tool has no flags; everything that differs between boards is read from
//! `CAMCAPS_*` variables. Unset and empty values both mean "use the default".

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_PROGRAM: &str = "v4l2-ctl";
pub const DEFAULT_DEVICE: &str = "/dev/v4l-subdev0";
pub const DEFAULT_PAD: u32 = 0;

pub const PROGRAM_ENV: &str = "CAMCAPS_V4L2_CTL";
pub const DEVICE_ENV: &str = "CAMCAPS_DEVICE";
pub const PAD_ENV: &str = "CAMCAPS_PAD";
pub const LOG_ENV: &str = "CAMCAPS_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub program: String,
    pub device: String,
    pub pad: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            device: DEFAULT_DEVICE.to_string(),
            pad: DEFAULT_PAD,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_non_empty)
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let pad = match lookup(PAD_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("{PAD_ENV} must be a pad number, got {raw:?}"))?,
            None => defaults.pad,
        };
        Ok(Self {
            program: lookup(PROGRAM_ENV).unwrap_or(defaults.program),
            device: lookup(DEVICE_ENV).unwrap_or(defaults.device),
            pad,
        })
    }
}

pub fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
