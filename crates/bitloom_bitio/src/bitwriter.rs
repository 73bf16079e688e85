use std::io::Write;

use bitloom_bits::low_mask;

use crate::cursor::BitCursor;
use crate::error::{BitError, Result, check_bits};

/// writes msb-first bit fields of 0..=64 bits to a byte sink.
///
/// whole bytes are written to the sink as soon as they fill up. a trailing partial byte is padded
/// with zero bits and written exactly once, by whichever comes first of [`BitWriter::close`],
/// [`BitWriter::into_inner`] or drop.
pub struct BitWriter<W: Write> {
    writer: Option<W>,
    cursor: BitCursor,
}

impl<W: Write> BitWriter<W> {
    pub fn new(writer: W) -> Self {
        log::trace!("bit writer opened");
        Self {
            writer: Some(writer),
            cursor: BitCursor::empty(),
        }
    }

    /// writes the low `count` bits of `data`; higher bits are ignored.
    pub fn write(&mut self, data: u64, count: usize) -> Result<()> {
        check_bits("bit count", count, 0)?;
        let writer = self.writer.as_mut().ok_or(BitError::Closed)?;

        // erase bits at count and higher positions
        let data = data & low_mask(count);
        let mut remaining = count;

        while remaining > 0 {
            let chunk = remaining.min(self.cursor.remaining());

            // next `chunk` high-order bits of what is left
            let bits = (data >> (remaining - chunk)) & low_mask(chunk);
            self.cursor.put(bits as u8, chunk);
            remaining -= chunk;

            if self.cursor.is_full() {
                let byte = self.cursor.byte();
                self.cursor.reset();
                writer.write_all(&[byte])?;
            }
        }

        Ok(())
    }

    /// writes `count` bits of `data` starting `offset` bits above its lsb.
    pub fn write_offset(&mut self, data: u64, count: usize, offset: usize) -> Result<()> {
        check_bits("bit count", count, 0)?;
        if offset >= bitloom_bits::MAX_BITS {
            return Err(BitError::OutOfRange {
                what: "offset",
                value: offset,
            });
        }
        self.write(data >> offset, count)
    }

    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write(u64::from(bit), 1)
    }

    #[must_use]
    pub fn byte_aligned(&self) -> bool {
        self.cursor.is_empty()
    }

    /// number of bits sitting in the partial byte, not yet written to the sink.
    #[must_use]
    pub fn pending_bits(&self) -> usize {
        self.cursor.pos()
    }

    /// pads with zero bits up to the next byte boundary. does nothing when already aligned.
    pub fn byte_align(&mut self) -> Result<()> {
        if self.writer.is_none() {
            return Err(BitError::Closed);
        }
        if self.byte_aligned() {
            return Ok(());
        }
        self.write(0, self.cursor.remaining())
    }

    /// flushes the partial byte and releases the sink. calling it again is a no-op; any write after
    /// it fails with [`BitError::Closed`].
    pub fn close(&mut self) -> Result<()> {
        match self.writer.take() {
            Some(mut writer) => self.finish(&mut writer),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    /// flushes the partial byte and gives the sink back.
    pub fn into_inner(mut self) -> Result<W> {
        let mut writer = self.writer.take().ok_or(BitError::Closed)?;
        self.finish(&mut writer)?;
        Ok(writer)
    }

    // the sink has already been taken out of `self.writer`, which is what keeps this one-shot.
    fn finish(&mut self, writer: &mut W) -> Result<()> {
        if !self.cursor.is_empty() {
            log::trace!("flushing {} trailing bits", self.cursor.pos());
            let byte = self.cursor.byte();
            self.cursor.reset();
            writer.write_all(&[byte])?;
        }
        writer.flush()?;
        log::trace!("bit writer closed");
        Ok(())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            log::warn!("failed to flush bit writer on drop: {err}");
        }
    }
}
