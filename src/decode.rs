//! Character-at-a-time UTF-8 decoding
//!
//! [`Utf8Decoder`] owns the byte source it wraps, so dropping the decoder
//! releases the source as well. Decoding is strict: malformed input is an
//! error, never replaced.

use std::io::{self, BufReader, Read};
use thiserror::Error;

/// Errors raised while pulling characters out of a byte stream
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The underlying stream failed
    #[error("I/O error while reading at byte offset {offset}")]
    Io {
        offset: u64,
        #[source]
        source: io::Error,
    },

    /// End of stream reached inside a multi-byte sequence
    #[error("truncated UTF-8 sequence at byte offset {offset}: expected {expected} bytes, found {found}")]
    Truncated {
        offset: u64,
        expected: usize,
        found: usize,
    },

    /// Bytes that do not form a valid UTF-8 scalar value
    #[error("invalid UTF-8 sequence at byte offset {offset}: {bytes:02X?}")]
    Invalid { offset: u64, bytes: Vec<u8> },
}

/// Decodes a byte stream into `char`s one at a time
pub struct Utf8Decoder<R> {
    inner: BufReader<R>,
    position: u64,
}

impl<R: Read> Utf8Decoder<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
            position: 0,
        }
    }

    /// Reads the next character.
    ///
    /// Returns `Ok(None)` at end of stream; further calls keep returning
    /// `Ok(None)`.
    pub fn read_char(&mut self) -> Result<Option<char>, DecodeError> {
        let offset = self.position;
        let lead = match self.next_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };

        let width = match sequence_width(lead) {
            Some(width) => width,
            None => {
                return Err(DecodeError::Invalid {
                    offset,
                    bytes: vec![lead],
                })
            }
        };

        let mut buf = [lead, 0, 0, 0];
        for found in 1..width {
            match self.next_byte()? {
                Some(byte) if byte & 0xC0 == 0x80 => buf[found] = byte,
                Some(byte) => {
                    let mut bytes = buf[..found].to_vec();
                    bytes.push(byte);
                    return Err(DecodeError::Invalid { offset, bytes });
                }
                None => {
                    return Err(DecodeError::Truncated {
                        offset,
                        expected: width,
                        found,
                    })
                }
            }
        }

        // Lead and continuation shapes are fine here; from_utf8 still rejects
        // overlong forms, surrogates and values above U+10FFFF.
        match std::str::from_utf8(&buf[..width]) {
            Ok(s) => Ok(s.chars().next()),
            Err(_) => Err(DecodeError::Invalid {
                offset,
                bytes: buf[..width].to_vec(),
            }),
        }
    }

    /// Number of bytes taken from the source so far
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn get_ref(&self) -> &R {
        self.inner.get_ref()
    }

    fn next_byte(&mut self) -> Result<Option<u8>, DecodeError> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.position += 1;
                    return Ok(Some(byte[0]));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(DecodeError::Io {
                        offset: self.position,
                        source,
                    })
                }
            }
        }
    }
}

fn sequence_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
