//! resource-probe - working-directory files versus bundled resources
//!
//! Two lookups that look alike and behave very differently:
//!
//! - **File probe**: a relative path such as `files/new.csv` is resolved
//!   against the process working directory, so the answer depends on where
//!   the program is launched from.
//! - **Bundled resource**: a name such as `/new.csv` is looked up in a table
//!   compiled into the executable. The working directory plays no part.
//!
//! The `file-probe` and `resource-reader` binaries are thin wrappers around
//! [`probe::run_file_probe`] and [`reader::read_resource`].
//!
//! # Example
//!
//! ```
//! use resource_probe::resources::MemoryBundle;
//! use resource_probe::reader::{read_resource, ReadOutcome};
//!
//! let bundle = MemoryBundle::new().with_resource("new.csv", "hello\n");
//! let mut out = Vec::new();
//!
//! let outcome = read_resource(&bundle, "/new.csv", &mut out).unwrap();
//! assert!(matches!(outcome, ReadOutcome::Read(_)));
//! assert_eq!(out, b"6\nhello\n");
//! ```

pub mod cli;
pub mod config;
pub mod decode;
pub mod fs;
pub mod probe;
pub mod reader;
pub mod resources;
pub mod util;

pub use config::ProbeConfig;
pub use decode::{DecodeError, Utf8Decoder};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use probe::{probe_file, run_file_probe};
pub use reader::{read_resource, ReadOutcome, ReadSummary, ReaderError};
pub use resources::{EmbeddedBundle, MemoryBundle, ResourceBundle, ResourceStream};
pub use util::{init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_resource_probe() {
        assert_eq!(NAME, "resource-probe");
    }
}
