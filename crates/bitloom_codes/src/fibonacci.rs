use std::io::{Read, Write};

use bitloom_bitio::{BitError, BitReader, BitWriter, Result};

// Fibonacci coding: every positive integer has a unique representation as a sum of non-adjacent
// Fibonacci numbers (Zeckendorf). the codeword lists which terms are used, smallest term first,
// and appends an extra 1 bit. since the representation never uses two adjacent terms, the pair
// `11` can only appear at the very end, which makes the code self-delimiting.
//
//   1 -> 11
//   2 -> 011
//   3 -> 0011
//   4 -> 1011
//   11 -> 001011
//
// the largest codeword, for values at or above F(93), is 93 bits long.

/// F(2) ..= F(93); the last entry is the largest Fibonacci number that fits in a `u64`.
pub const FIBONACCI: [u64; 92] = {
    let mut fib = [0u64; 92];
    fib[0] = 1;
    fib[1] = 2;
    let mut i = 2;
    while i < 92 {
        fib[i] = fib[i - 1] + fib[i - 2];
        i += 1;
    }
    fib
};

/// longest possible codeword, terminator included.
pub const MAX_FIBONACCI_BITS: usize = FIBONACCI.len() + 1;

/// writes `value` (which must be non-zero) as a Fibonacci codeword.
pub fn write_fibonacci<W: Write>(w: &mut BitWriter<W>, value: u64) -> Result<()> {
    if value == 0 {
        return Err(BitError::OutOfRange {
            what: "fibonacci value",
            value: 0,
        });
    }

    // index of the largest term not above value
    let top = FIBONACCI.partition_point(|&f| f <= value) - 1;

    let mut terms = 0u128;
    let mut rest = value;
    for i in (0..=top).rev() {
        if FIBONACCI[i] <= rest {
            rest -= FIBONACCI[i];
            terms |= 1 << i;
        }
    }
    debug_assert_eq!(rest, 0);

    // lay the terms out smallest first, msb first in `code`, then the terminator
    let mut code = 0u128;
    for i in 0..=top {
        code = (code << 1) | ((terms >> i) & 1);
    }
    code = (code << 1) | 1;

    let len = top + 2;
    if len > 64 {
        w.write((code >> 64) as u64, len - 64)?;
    }
    w.write(code as u64, len.min(64))
}

/// reads one Fibonacci codeword.
///
/// returns [`BitError::Overflow`] if no terminator shows up within [`MAX_FIBONACCI_BITS`] bits
/// or the decoded value does not fit in a `u64`.
pub fn read_fibonacci<R: Read>(r: &mut BitReader<R>) -> Result<u64> {
    let mut decoder = FibonacciDecoder::default();
    loop {
        if let Some(value) = decoder.push_bit(r.read_bit()?)? {
            return Ok(value);
        }
    }
}

/// bit-at-a-time Fibonacci decoding state, shared by the pull and push decoders.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FibonacciDecoder {
    value: u64,
    pos: usize,
    last: bool,
}

impl FibonacciDecoder {
    /// feeds the next bit of the codeword. returns the value once the terminator is seen.
    pub(crate) fn push_bit(&mut self, bit: bool) -> Result<Option<u64>> {
        if bit && self.last {
            let value = self.value;
            *self = Self::default();
            return Ok(Some(value));
        }

        if bit {
            let term = FIBONACCI.get(self.pos).copied();
            let sum = term.and_then(|term| self.value.checked_add(term));
            match sum {
                Some(sum) => self.value = sum,
                None => {
                    *self = Self::default();
                    return Err(BitError::Overflow);
                }
            }
        } else if self.pos >= FIBONACCI.len() {
            *self = Self::default();
            return Err(BitError::Overflow);
        }

        self.last = bit;
        self.pos += 1;
        Ok(None)
    }
}
