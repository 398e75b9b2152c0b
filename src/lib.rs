//! Camera sensor capability enumeration.
//!
//! The crate asks `v4l2-ctl` which media-bus formats a sensor subdevice
//! supports and which frame sizes each format offers, then flattens the answer
//! into [`CapabilityRecord`]s. The `getcamcaps` binary prints those records as
//! JSON for the companion server that offers still-capture modes.
//!
//! Process invocation sits behind [`CapabilitySource`] so the assembly pass can
//! run against [`MockSource`] in tests.

use anyhow::Result;

pub mod config;
pub mod invoke;
pub mod logging;
pub mod mock;
pub mod parse;
pub mod record;
pub mod source;
pub mod v4l2;

pub use config::Config;
pub use invoke::{InvocationError, InvocationOutput, run_captured};
pub use mock::MockSource;
pub use parse::{FrameSize, MbusFormat, parse_frame_sizes, parse_mbus_codes};
pub use record::{CapabilityRecord, MEDIA_BUS_FMT_PREFIX, render_records, short_format_name};
pub use source::{CapabilitySource, collect_records};
pub use v4l2::{UNAVAILABLE_MESSAGE, V4l2Ctl};

/// Full pass against the real tool: availability check, queries, assembly.
///
/// Only a missing or broken tool is an error. Individual query failures are
/// logged and leave their records out.
pub fn enumerate(config: &Config) -> Result<Vec<CapabilityRecord>> {
    let ctl = V4l2Ctl::from_config(config);
    ctl.check_available()?;
    Ok(collect_records(&ctl))
}
