use std::fmt;
use std::io::{self, Cursor, Read};
use tracing::trace;

/// An open byte stream for one bundled resource.
///
/// Tracks how many bytes have been read so that [`available`](Self::available)
/// can report an estimate at any point. The stream is released when dropped.
pub struct ResourceStream {
    name: String,
    inner: Box<dyn Read + Send>,
    estimate: u64,
    bytes_read: u64,
}

impl ResourceStream {
    /// Stream over a byte slice compiled into the binary
    pub fn from_static(name: impl Into<String>, bytes: &'static [u8]) -> Self {
        let estimate = bytes.len() as u64;
        Self::from_reader(name, Cursor::new(bytes), estimate)
    }

    /// Stream over owned bytes
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let estimate = bytes.len() as u64;
        Self::from_reader(name, Cursor::new(bytes), estimate)
    }

    /// Stream over any reader, with the caller's estimate of its readable length
    pub fn from_reader(
        name: impl Into<String>,
        reader: impl Read + Send + 'static,
        estimate: u64,
    ) -> Self {
        Self {
            name: name.into(),
            inner: Box::new(reader),
            estimate,
            bytes_read: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Estimated bytes readable without blocking, as of now.
    ///
    /// Advisory only; it is not guaranteed to equal the remaining length.
    pub fn available(&self) -> u64 {
        self.estimate.saturating_sub(self.bytes_read)
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl Read for ResourceStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.bytes_read += n as u64;
        Ok(n)
    }
}

impl Drop for ResourceStream {
    fn drop(&mut self) {
        trace!(name = %self.name, bytes_read = self.bytes_read, "Released resource stream");
    }
}

impl fmt::Debug for ResourceStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceStream")
            .field("name", &self.name)
            .field("estimate", &self.estimate)
            .field("bytes_read", &self.bytes_read)
            .finish_non_exhaustive()
    }
}
