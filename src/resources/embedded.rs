use super::{resolve_name, ResourceBundle, ResourceStream};
use tracing::debug;

// Generated by build.rs from the files under resources/
include!(concat!(env!("OUT_DIR"), "/bundled_resources.rs"));

/// Resources compiled into this executable.
///
/// Lookups only consult the compiled table; the filesystem and the working
/// directory are never touched.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedBundle {
    base: String,
}

impl EmbeddedBundle {
    /// Bundle rooted at the top of the namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle resolving relative names under `base`
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn lookup(key: &str) -> Option<&'static [u8]> {
        BUNDLED
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, bytes)| *bytes)
    }
}

impl ResourceBundle for EmbeddedBundle {
    fn open(&self, name: &str) -> Option<ResourceStream> {
        let key = resolve_name(&self.base, name);
        match Self::lookup(&key) {
            Some(bytes) => {
                debug!(name, key = %key, len = bytes.len(), "Opened bundled resource");
                Some(ResourceStream::from_static(key, bytes))
            }
            None => {
                debug!(name, key = %key, "Resource not bundled");
                None
            }
        }
    }

    fn names(&self) -> Vec<String> {
        BUNDLED.iter().map(|(name, _)| name.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use std::path::Path;

    fn bundled_source() -> Vec<u8> {
        fs::read(Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/new.csv")).unwrap()
    }

    #[test]
    fn test_new_csv_is_bundled_at_root() {
        let bundle = EmbeddedBundle::new();
        assert!(bundle.contains("/new.csv"));
        assert!(bundle.contains("new.csv"));
        assert!(bundle.names().contains(&"new.csv".to_string()));
    }

    #[test]
    fn test_bundled_bytes_match_source_file() {
        let mut stream = EmbeddedBundle::new().open("/new.csv").unwrap();
        assert_eq!(stream.available(), bundled_source().len() as u64);

        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes).unwrap();
        assert_eq!(bytes, bundled_source());
    }

    #[test]
    fn test_missing_resource() {
        let bundle = EmbeddedBundle::new();
        assert!(bundle.open("/missing.csv").is_none());
        assert!(!bundle.contains("files/new.csv"));
    }

    #[test]
    fn test_relative_name_uses_base() {
        let bundle = EmbeddedBundle::with_base("io/westerngun");
        assert!(bundle.contains("/new.csv"));
        assert!(!bundle.contains("new.csv"));
    }
}
