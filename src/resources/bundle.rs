use super::ResourceStream;

/// A namespace of named byte resources
pub trait ResourceBundle {
    /// Opens the resource called `name`, or `None` if it is not bundled.
    ///
    /// `name` follows [`resolve_name`] rules for this bundle's base.
    fn open(&self, name: &str) -> Option<ResourceStream>;

    /// Names of every bundled resource, relative to the namespace root
    fn names(&self) -> Vec<String>;

    fn contains(&self, name: &str) -> bool {
        self.open(name).is_some()
    }
}

/// Maps a lookup name to its key in the bundle namespace.
///
/// `/a/b.csv` is absolute and maps to `a/b.csv`. `b.csv` is relative and maps
/// to `{base}/b.csv`, or just `b.csv` when `base` is empty.
pub fn resolve_name(base: &str, name: &str) -> String {
    if let Some(absolute) = name.strip_prefix('/') {
        return absolute.trim_start_matches('/').to_string();
    }

    let base = base.trim_matches('/');
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base, name)
    }
}
