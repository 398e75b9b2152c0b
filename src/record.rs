//! Capability records: the flat `(format, resolution)` rows that get printed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::parse::{FrameSize, MbusFormat};

/// Prefix carried by every kernel media-bus format name.
pub const MEDIA_BUS_FMT_PREFIX: &str = "MEDIA_BUS_FMT_";

/// One selectable sensor mode.
///
/// Field order is part of the output contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRecord {
    /// `{code}_{short}_{width}x{height}`
    pub value: String,
    /// `{width}x{height}_{short}`
    pub label: String,
    pub width: u32,
    pub height: u32,
}

impl CapabilityRecord {
    pub fn new(format: &MbusFormat, size: FrameSize) -> Self {
        let short = short_format_name(&format.name);
        let FrameSize { width, height } = size;
        Self {
            value: format!("{}_{short}_{width}x{height}", format.code),
            label: format!("{width}x{height}_{short}"),
            width,
            height,
        }
    }
}

/// Drop the `MEDIA_BUS_FMT_` prefix.
///
/// Returns the text between the first occurrence of the prefix and the next
/// one (or the end). Names without the prefix come back unchanged.
pub fn short_format_name(name: &str) -> &str {
    name.split(MEDIA_BUS_FMT_PREFIX).nth(1).unwrap_or(name)
}

/// Cross one format with all of its frame sizes.
pub fn records_for_format(format: &MbusFormat, sizes: &[FrameSize]) -> Vec<CapabilityRecord> {
    sizes
        .iter()
        .map(|size| CapabilityRecord::new(format, *size))
        .collect()
}

/// Pretty-print records as a JSON array with four-space indentation.
pub fn render_records(records: &[CapabilityRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .context("serializing capability records")?;
    String::from_utf8(buf).context("capability records produced invalid UTF-8")
}
