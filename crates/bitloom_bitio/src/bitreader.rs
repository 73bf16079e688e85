use std::io::{self, Read};

use crate::cursor::BitCursor;
use crate::error::{BitError, Result, check_bits};

/// reads msb-first bit fields of 0..=64 bits from a byte stream.
///
/// the stream is pulled one byte at a time, only when the current byte is exhausted, so the
/// reader never consumes more of the stream than the bits it has handed out (rounded up to a
/// byte). wrap slow sources in a [`std::io::BufReader`].
pub struct BitReader<R: Read> {
    reader: Option<R>,
    cursor: BitCursor,
}

impl<R: Read> BitReader<R> {
    pub fn new(reader: R) -> Self {
        log::trace!("bit reader opened");
        Self {
            reader: Some(reader),
            cursor: BitCursor::drained(),
        }
    }

    /// reads `count` bits into the low end of a `u64`.
    ///
    /// returns [`BitError::EndOfStream`] if the stream runs out part way through; the bits consumed
    /// up to that point are lost.
    pub fn read(&mut self, count: usize) -> Result<u64> {
        self.try_read(count)?.ok_or(BitError::EndOfStream)
    }

    /// same as [`BitReader::read`], but reports exhaustion as `Ok(None)` instead of an error.
    pub fn try_read(&mut self, count: usize) -> Result<Option<u64>> {
        check_bits("bit count", count, 0)?;
        if self.reader.is_none() {
            return Err(BitError::Closed);
        }

        let mut remaining = count;
        let mut ret = 0u64;

        while remaining > 0 {
            if !self.refill()? {
                log::trace!("stream ended with {remaining} of {count} bits outstanding");
                return Ok(None);
            }

            let chunk = remaining.min(self.cursor.remaining());

            // chunk is at most 8 so the shift never drops live bits while count <= 64
            ret = (ret << chunk) | u64::from(self.cursor.take(chunk));
            remaining -= chunk;
        }

        Ok(Some(ret))
    }

    pub fn read_bit(&mut self) -> Result<bool> {
        self.read(1).map(|bit| bit == 1)
    }

    /// returns the next bit without consuming it.
    pub fn peek_bit(&mut self) -> Result<bool> {
        self.try_peek_bit()?.ok_or(BitError::EndOfStream)
    }

    pub fn try_peek_bit(&mut self) -> Result<Option<bool>> {
        if self.reader.is_none() {
            return Err(BitError::Closed);
        }
        if !self.refill()? {
            return Ok(None);
        }
        Ok(Some(self.cursor.peek()))
    }

    /// true when no bits of a partially read byte are pending.
    #[must_use]
    pub fn byte_aligned(&self) -> bool {
        self.cursor.is_full()
    }

    /// discards the unread bits of the current byte.
    pub fn byte_align(&mut self) -> Result<()> {
        if self.reader.is_none() {
            return Err(BitError::Closed);
        }
        self.cursor.drain();
        Ok(())
    }

    /// releases the stream. every later read fails with [`BitError::Closed`].
    pub fn close(&mut self) {
        if self.reader.take().is_some() {
            log::trace!("bit reader closed");
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// gives the stream back. unread bits of the current byte are lost.
    pub fn into_inner(mut self) -> Result<R> {
        self.reader.take().ok_or(BitError::Closed)
    }

    /// makes sure the cursor holds at least one unread bit. returns false once the stream is
    /// exhausted.
    fn refill(&mut self) -> Result<bool> {
        if !self.cursor.is_full() {
            return Ok(true);
        }

        let reader = self.reader.as_mut().ok_or(BitError::Closed)?;

        let mut buf = [0u8; 1];
        match reader.read_exact(&mut buf) {
            Ok(()) => {
                self.cursor.load(buf[0]);
                Ok(true)
            }
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
