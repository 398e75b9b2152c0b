//! Text extraction over `v4l2-ctl` output.
//!
//! The two patterns below are the whole contract with the tool's
//! human-readable output. They are matched anywhere in the text, so headers,
//! indentation and trailing range information are ignored.

use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

const MBUS_CODE_PATTERN: &str = r"0x([0-9a-fA-F]+):\s+([A-Za-z0-9_]+)";
const FRAME_SIZE_PATTERN: &str = r"Size Range: (\d+)x(\d+)";

/// One entry of `--list-subdev-mbus-codes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MbusFormat {
    /// Hex digits as printed, without `0x`.
    pub code: String,
    pub name: String,
}

impl MbusFormat {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

fn mbus_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MBUS_CODE_PATTERN).expect("mbus code pattern compiles"))
}

fn frame_size_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FRAME_SIZE_PATTERN).expect("frame size pattern compiles"))
}

/// Extract every `(code, name)` pair, in output order.
pub fn parse_mbus_codes(text: &str) -> Vec<MbusFormat> {
    mbus_code_regex()
        .captures_iter(text)
        .map(|caps| MbusFormat::new(&caps[1], &caps[2]))
        .collect()
}

/// Extract every `Size Range: WxH` pair, in output order.
///
/// Only the first size of a range is taken. Values that overflow `u32` are
/// dropped with a warning.
pub fn parse_frame_sizes(text: &str) -> Vec<FrameSize> {
    frame_size_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            match (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
                (Ok(width), Ok(height)) => Some(FrameSize::new(width, height)),
                _ => {
                    warn!(size = %&caps[0], "skipping frame size that does not fit in u32");
                    None
                }
            }
        })
        .collect()
}
