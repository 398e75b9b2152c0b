//! `v4l2-ctl` backed capability source.
//!
//! Argument vectors mirror what `v4l2-ctl` expects for subdevice queries:
//!
//! ```text
//! v4l2-ctl -d <device> --list-subdev-mbus-codes <pad>
//! v4l2-ctl -d <device> --list-subdev-framesizes pad=<pad>,code=0x<code>
//! ```

use anyhow::{Result, bail};
use tracing::{debug, error};

use crate::config::Config;
use crate::invoke::{InvocationError, run_captured};
use crate::parse::{FrameSize, MbusFormat, parse_frame_sizes, parse_mbus_codes};
use crate::source::CapabilitySource;

/// Fatal message when the tool is missing or broken.
pub const UNAVAILABLE_MESSAGE: &str = "v4l2-ctl is not installed. Exiting.";

#[derive(Debug, Clone)]
pub struct V4l2Ctl {
    program: String,
    device: String,
    pad: u32,
}

impl V4l2Ctl {
    pub fn new(program: impl Into<String>, device: impl Into<String>, pad: u32) -> Self {
        Self {
            program: program.into(),
            device: device.into(),
            pad,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.program.clone(), config.device.clone(), config.pad)
    }

    /// Make sure the tool exists and answers `--help`.
    ///
    /// Bare names are resolved by the spawn itself, so an unset `PATH` falls
    /// back to the platform's default search path.
    pub fn check_available(&self) -> Result<()> {
        if let Err(err) = run_captured(&self.program, &help_args()) {
            debug!(error = %err, "v4l2-ctl --help failed");
            bail!(UNAVAILABLE_MESSAGE);
        }
        Ok(())
    }

    pub fn mbus_code_args(&self) -> Vec<String> {
        vec![
            "-d".to_string(),
            self.device.clone(),
            "--list-subdev-mbus-codes".to_string(),
            self.pad.to_string(),
        ]
    }

    pub fn framesize_args(&self, code: &str) -> Vec<String> {
        vec![
            "-d".to_string(),
            self.device.clone(),
            "--list-subdev-framesizes".to_string(),
            format!("pad={},code=0x{code}", self.pad),
        ]
    }

    fn query(&self, args: &[String]) -> Result<String, InvocationError> {
        run_captured(&self.program, args).map(|output| output.stdout)
    }
}

fn help_args() -> Vec<String> {
    vec!["--help".to_string()]
}

impl CapabilitySource for V4l2Ctl {
    fn list_formats(&self) -> Vec<MbusFormat> {
        match self.query(&self.mbus_code_args()) {
            Ok(stdout) => parse_mbus_codes(&stdout),
            Err(err) => {
                error!("Error running command for MBUS codes: {}", err.detail());
                Vec::new()
            }
        }
    }

    fn list_resolutions(&self, code: &str) -> Vec<FrameSize> {
        match self.query(&self.framesize_args(code)) {
            Ok(stdout) => parse_frame_sizes(&stdout),
            Err(err) => {
                error!(
                    "Error running command for resolutions with MBUS code 0x{code}: {}",
                    err.detail()
                );
                Vec::new()
            }
        }
    }
}
