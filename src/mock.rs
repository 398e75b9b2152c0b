//! In-memory `CapabilitySource` used by the assembly tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::parse::{FrameSize, MbusFormat};
use crate::source::CapabilitySource;

/// Canned formats and frame sizes.
///
/// Codes registered with [`MockSource::with_failing_format`] behave like a
/// framesize call that exited non-zero: they are listed but return no sizes.
/// Every `list_resolutions` call is recorded so tests can check query order.
#[derive(Debug, Default)]
pub struct MockSource {
    formats: Vec<MbusFormat>,
    sizes: BTreeMap<String, Vec<FrameSize>>,
    queries: RefCell<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, code: &str, name: &str, sizes: &[(u32, u32)]) -> Self {
        self.formats.push(MbusFormat::new(code, name));
        self.sizes.insert(
            code.to_string(),
            sizes
                .iter()
                .map(|&(width, height)| FrameSize::new(width, height))
                .collect(),
        );
        self
    }

    pub fn with_failing_format(mut self, code: &str, name: &str) -> Self {
        self.formats.push(MbusFormat::new(code, name));
        self.sizes.remove(code);
        self
    }

    pub fn resolution_queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl CapabilitySource for MockSource {
    fn list_formats(&self) -> Vec<MbusFormat> {
        self.formats.clone()
    }

    fn list_resolutions(&self, code: &str) -> Vec<FrameSize> {
        self.queries.borrow_mut().push(code.to_string());
        self.sizes.get(code).cloned().unwrap_or_default()
    }
}
