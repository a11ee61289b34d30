//! Bundled resource reader
//!
//! Opens a resource from a [`ResourceBundle`], prints the stream's estimate of
//! available bytes, then echoes the content character by character.
//!
//! ```text
//! START ── absent ──▶ "Not available"
//!   │
//!   └── present ──▶ estimate line ──▶ READING ──▶ DONE | FAULT
//! ```
//!
//! The stream is owned by the decoder for the whole read, so it is released
//! exactly once on every path out of [`read_resource`].

use crate::config::NOT_AVAILABLE;
use crate::decode::{DecodeError, Utf8Decoder};
use crate::resources::ResourceBundle;
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

/// Faults while echoing a present resource
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Reading or decoding the resource failed
    #[error("failed to read resource '{name}'")]
    Decode {
        name: String,
        #[source]
        source: DecodeError,
    },

    /// Writing to the output failed
    #[error("failed to write output")]
    Output(#[from] io::Error),
}

/// What a successful [`read_resource`] call saw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The bundle has no resource by that name
    Absent,

    /// The resource was read to end of stream
    Read(ReadSummary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadSummary {
    /// Estimate reported right after opening
    pub available: u64,

    /// Bytes pulled from the stream
    pub bytes_read: u64,

    /// Characters written to the output
    pub chars: u64,
}

/// Looks up `name` in `bundle` and writes it to `out`.
///
/// Absent resources produce the line `Not available`. Present ones produce
/// the available-byte estimate on its own line followed by the decoded text,
/// with nothing appended. On a fault, whatever was decoded before it has
/// already been written and flushed.
pub fn read_resource<B, W>(
    bundle: &B,
    name: &str,
    out: &mut W,
) -> Result<ReadOutcome, ReaderError>
where
    B: ResourceBundle + ?Sized,
    W: Write,
{
    let stream = match bundle.open(name) {
        Some(stream) => stream,
        None => {
            debug!(name, "Resource not available");
            writeln!(out, "{}", NOT_AVAILABLE)?;
            out.flush()?;
            return Ok(ReadOutcome::Absent);
        }
    };

    let available = stream.available();
    writeln!(out, "{}", available)?;

    let mut decoder = Utf8Decoder::new(stream);
    let mut chars = 0u64;
    loop {
        match decoder.read_char() {
            Ok(Some(c)) => {
                write!(out, "{}", c)?;
                chars += 1;
            }
            Ok(None) => break,
            Err(source) => {
                out.flush()?;
                debug!(name, chars, error = %source, "Resource read failed");
                return Err(ReaderError::Decode {
                    name: decoder.get_ref().name().to_string(),
                    source,
                });
            }
        }
    }
    out.flush()?;

    let summary = ReadSummary {
        available,
        bytes_read: decoder.get_ref().bytes_read(),
        chars,
    };
    debug!(name, ?summary, "Resource read complete");
    Ok(ReadOutcome::Read(summary))
}
