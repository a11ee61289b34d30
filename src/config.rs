//! Fixed lookup targets for the two programs
//!
//! Neither program reads configuration from files or the environment. The
//! values live here so the binaries and the tests agree on them.

use std::path::{Path, PathBuf};

/// Path probed by `file-probe`, relative to the working directory
pub const DEFAULT_PROBE_PATH: &str = "files/new.csv";

/// Resource read by `resource-reader`; the leading `/` is the bundle root
pub const DEFAULT_RESOURCE_NAME: &str = "/new.csv";

/// Line printed by `resource-reader` when the resource is not bundled
pub const NOT_AVAILABLE: &str = "Not available";

/// Lookup targets for a probe run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Filesystem path checked by the file probe
    pub probe_path: PathBuf,

    /// Bundle resource name opened by the resource reader
    pub resource_name: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            probe_path: PathBuf::from(DEFAULT_PROBE_PATH),
            resource_name: DEFAULT_RESOURCE_NAME.to_string(),
        }
    }
}

impl ProbeConfig {
    pub fn with_probe_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.probe_path = path.into();
        self
    }

    pub fn with_resource_name(mut self, name: impl Into<String>) -> Self {
        self.resource_name = name.into();
        self
    }

    pub fn probe_path(&self) -> &Path {
        &self.probe_path
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }
}
