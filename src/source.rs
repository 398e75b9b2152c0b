//! The capability source seam and the assembly pass built on top of it.

use tracing::{info, warn};

use crate::parse::{FrameSize, MbusFormat};
use crate::record::{CapabilityRecord, records_for_format};

/// Something that can list a subdevice's formats and per-format frame sizes.
///
/// Failures are absorbed by implementations: a listing that cannot be
/// produced is reported through logging and comes back empty.
pub trait CapabilitySource {
    fn list_formats(&self) -> Vec<MbusFormat>;
    fn list_resolutions(&self, code: &str) -> Vec<FrameSize>;
}

/// Query every format and flatten the results into records.
///
/// Formats are visited one at a time, in listing order. A format whose size
/// listing is empty contributes nothing and does not stop the pass.
pub fn collect_records<S: CapabilitySource + ?Sized>(source: &S) -> Vec<CapabilityRecord> {
    let formats = source.list_formats();
    if formats.is_empty() {
        warn!("No MBUS codes found.");
        return Vec::new();
    }

    let mut records = Vec::new();
    for format in &formats {
        let sizes = source.list_resolutions(&format.code);
        records.extend(records_for_format(format, &sizes));
    }

    info!(
        formats = formats.len(),
        records = records.len(),
        "collected capability records"
    );
    records
}
