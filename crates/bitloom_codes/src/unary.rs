use std::io::{Read, Write};

use bitloom_bitio::{BitReader, BitWriter, Result};
use bitloom_bits::{MAX_BITS, low_mask};

// unary: `n` one bits followed by a zero stop bit.
//
//   0 -> 0
//   1 -> 10
//   4 -> 11110

/// writes `value` as a run of ones terminated by a zero.
pub fn write_unary<W: Write>(w: &mut BitWriter<W>, mut value: u64) -> Result<()> {
    while value >= MAX_BITS as u64 {
        w.write(u64::MAX, MAX_BITS)?;
        value -= MAX_BITS as u64;
    }
    w.write(low_mask(value as usize), value as usize)?;
    w.write_bit(false)
}

/// counts ones up to the next zero.
pub fn read_unary<R: Read>(r: &mut BitReader<R>) -> Result<u64> {
    let mut value = 0u64;
    while r.read_bit()? {
        value += 1;
    }
    Ok(value)
}
