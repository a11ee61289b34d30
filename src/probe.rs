//! Working-directory file probe
//!
//! A relative path is resolved against the working directory of the running
//! process, not against the location of the executable. The same binary
//! therefore answers differently depending on where it is launched.

use crate::fs::FileSystem;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Returns whether a regular file exists at `path`.
///
/// Anything that prevents the check (missing parents, permission denied,
/// dangling links) counts as absent.
pub fn probe_file<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> bool {
    let present = fs.is_file(path);
    debug!(path = %path.display(), present, "Probed file");
    present
}

/// Probes `path` and writes `true` or `false` on its own line to `out`
pub fn run_file_probe<F, W>(fs: &F, path: &Path, out: &mut W) -> io::Result<bool>
where
    F: FileSystem + ?Sized,
    W: Write,
{
    let present = probe_file(fs, path);
    writeln!(out, "{}", present)?;
    out.flush()?;
    Ok(present)
}
