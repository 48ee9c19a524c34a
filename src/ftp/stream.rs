//! Read-completeness guard for transport response streams.
//!
//! Some transports signal end-of-stream early: a read may come back
//! short or empty while more data is still in flight, which breaks
//! line-oriented and fixed-length consumers. [`StreamReadGuard`] keeps
//! pulling until the requested count is filled or the source reports a
//! zero-length read — true exhaustion.
//!
//! After the first zero-length read the source must not be touched
//! again (the transport disposes it, and further reads can fail on the
//! dead handle), so the guard latches an `exhausted` state and answers
//! every later read with 0 on its own.

use std::io::{self, Read};

/// Wrapper enforcing "short read only at genuine end-of-stream".
#[derive(Debug)]
pub struct StreamReadGuard<R> {
    inner: R,
    exhausted: bool,
}

impl<R> StreamReadGuard<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            exhausted: false,
        }
    }

    /// Whether the underlying source has reported end-of-stream.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<R: Read> Read for StreamReadGuard<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while !self.exhausted && filled < buf.len() {
            let n = self.inner.read(&mut buf[filled..])?;
            self.exhausted = n == 0;
            filled += n;
        }
        Ok(filled)
    }
}
