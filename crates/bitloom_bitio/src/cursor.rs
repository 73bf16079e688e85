/// position inside the byte a reader is draining or a writer is filling.
///
/// `pos` counts bits already consumed (reader) or already placed (writer), msb first. it never
/// leaves `0..=8`, and `8` is a transition point: the owner must refill or flush before touching
/// another bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BitCursor {
    byte: u8,
    pos: u8,
}

impl BitCursor {
    /// a cursor with nothing loaded. the first access triggers a refill.
    pub(crate) const fn drained() -> Self {
        Self { byte: 0, pos: 8 }
    }

    /// a cursor with an empty byte ready to be filled.
    pub(crate) const fn empty() -> Self {
        Self { byte: 0, pos: 0 }
    }

    #[inline(always)]
    pub(crate) fn byte(&self) -> u8 {
        self.byte
    }

    #[inline(always)]
    pub(crate) fn pos(&self) -> usize {
        self.pos as usize
    }

    #[inline(always)]
    pub(crate) fn remaining(&self) -> usize {
        8 - self.pos as usize
    }

    #[inline(always)]
    pub(crate) fn is_full(&self) -> bool {
        self.pos == 8
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.pos == 0
    }

    pub(crate) fn load(&mut self, byte: u8) {
        self.byte = byte;
        self.pos = 0;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::empty();
    }

    pub(crate) fn drain(&mut self) {
        self.pos = 8;
    }

    /// takes `chunk` bits starting at `pos`, right-aligned.
    #[inline]
    pub(crate) fn take(&mut self, chunk: usize) -> u8 {
        debug_assert!(chunk >= 1 && chunk <= self.remaining());

        let mask = (u8::MAX << (8 - chunk)) >> self.pos;
        let bits = (self.byte & mask) >> (8 - chunk - self.pos as usize);
        self.advance(chunk);
        bits
    }

    /// the bit at `pos`, without advancing.
    #[inline]
    pub(crate) fn peek(&self) -> bool {
        debug_assert!(self.pos < 8);
        self.byte & (0x80 >> self.pos) != 0
    }

    /// places the low `chunk` bits of `bits` at `pos`.
    #[inline]
    pub(crate) fn put(&mut self, bits: u8, chunk: usize) {
        debug_assert!(chunk >= 1 && chunk <= self.remaining());
        debug_assert!(chunk == 8 || bits >> chunk == 0);

        self.byte |= bits << (8 - chunk - self.pos as usize);
        self.advance(chunk);
    }

    #[inline(always)]
    fn advance(&mut self, chunk: usize) {
        self.pos += chunk as u8;
        debug_assert!(self.pos <= 8, "bit position {} escaped its byte", self.pos);
    }
}
