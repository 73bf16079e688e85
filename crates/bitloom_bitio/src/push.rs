use bitloom_bits::{MAX_BITS, low_mask};

use crate::error::{BitError, Result, check_bits};

/// the bits a [`PushBitReader`] has been fed but not yet delivered.
///
/// the low `level` bits of `accumulator` are live, oldest bit highest. `width` is the size of the
/// field the consumer asked for next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PushState {
    accumulator: u64,
    level: usize,
    width: usize,
}

impl PushState {
    fn feed(&mut self, byte: u8) -> Result<()> {
        if self.level + 8 > MAX_BITS {
            return Err(BitError::Overflow);
        }
        self.accumulator = (self.accumulator << 8) | u64::from(byte);
        self.level += 8;
        Ok(())
    }

    /// pops the oldest `width` bits if that many are buffered.
    fn next_field(&mut self) -> Option<u64> {
        if self.level < self.width {
            return None;
        }
        let value = (self.accumulator >> (self.level - self.width)) & low_mask(self.width);
        self.level -= self.width;
        Some(value)
    }

    fn flush_byte(&mut self) {
        self.level -= self.level % 8;
    }
}

fn check_width(width: usize) -> Result<usize> {
    check_bits("requested width", width, 1)
}

/// receives the fields decoded by a [`PushBitReader`] and picks the width of the next one.
///
/// implemented for every `FnMut(u64) -> usize`, so a closure is usually all that is needed. a named
/// type is handy when the decoding state has to outlive the reader or be inspected between
/// inserts.
pub trait FieldSink {
    /// called with each decoded field; returns the width (1..=64) of the field wanted next.
    fn on_field(&mut self, value: u64) -> usize;
}

impl<F> FieldSink for F
where
    F: FnMut(u64) -> usize,
{
    #[inline]
    fn on_field(&mut self, value: u64) -> usize {
        self(value)
    }
}

/// decodes msb-first bit fields from bytes as they arrive, without owning a stream.
///
/// every decoded field is handed to the sink, which answers with the width (1..=64) of the field
/// it wants next. this lets a consumer walk self-delimiting codes where the width of a field
/// depends on what came before it.
///
/// the sink runs synchronously inside [`PushBitReader::insert`]. the sequence of sink invocations
/// depends only on the bytes fed in and their order, not on how they were split across `insert`
/// calls.
///
/// ```
/// use bitloom_bitio::PushBitReader;
///
/// let mut fields = Vec::new();
/// let mut reader = PushBitReader::new(|value: u64| {
///     fields.push(value);
///     4
/// })
/// .unwrap();
///
/// reader.insert(&[0xa5]).unwrap();
/// drop(reader);
///
/// // the first value comes from the seeding call made by `new`
/// assert_eq!(fields, [0, 0xa, 0x5]);
/// ```
pub struct PushBitReader<F>
where
    F: FieldSink,
{
    sink: F,
    state: PushState,
}

impl<F> PushBitReader<F>
where
    F: FieldSink,
{
    /// seeds the reader by passing `0` to the sink to learn the width of the first field.
    pub fn new(mut sink: F) -> Result<Self> {
        let width = check_width(sink.on_field(0))?;
        Ok(Self {
            sink,
            state: PushState {
                accumulator: 0,
                level: 0,
                width,
            },
        })
    }

    /// feeds bytes in, invoking the sink for every field that completes.
    ///
    /// fails with [`BitError::Overflow`] when a byte arrives while more than 56 bits are still
    /// buffered, i.e. fields are being requested slower than bytes arrive. bytes before the
    /// failing one stay applied.
    pub fn insert(&mut self, bytes: &[u8]) -> Result<()> {
        for &byte in bytes {
            if let Err(err) = self.state.feed(byte) {
                log::debug!(
                    "push reader overflow: {} bits buffered, {} wanted",
                    self.state.level,
                    self.state.width
                );
                return Err(err);
            }

            self.deliver()?;
        }
        Ok(())
    }

    /// replaces the width of the pending field as if the sink had returned `width`. fields that
    /// are already fully buffered are delivered before this returns.
    pub fn set_width(&mut self, width: usize) -> Result<()> {
        self.state.width = check_width(width)?;
        self.deliver()
    }

    fn deliver(&mut self) -> Result<()> {
        while let Some(value) = self.state.next_field() {
            let width = self.sink.on_field(value);
            self.state.width = check_width(width).inspect_err(|_| {
                log::debug!("push reader sink asked for {width} bits");
            })?;
        }
        Ok(())
    }

    /// drops the buffered bits that belong to a partially consumed byte, realigning the next field
    /// to a byte boundary. the sink is not called for them.
    pub fn flush_byte(&mut self) {
        self.state.flush_byte();
    }

    /// number of bits buffered but not yet delivered.
    #[must_use]
    pub fn level(&self) -> usize {
        self.state.level
    }

    /// width of the next field the sink asked for.
    #[must_use]
    pub fn width(&self) -> usize {
        self.state.width
    }

    pub fn sink(&self) -> &F {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut F {
        &mut self.sink
    }

    pub fn into_sink(self) -> F {
        self.sink
    }
}
