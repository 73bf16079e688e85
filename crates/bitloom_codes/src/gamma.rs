use std::io::{Read, Write};

use bitloom_bitio::{BitError, BitReader, BitWriter, Result};
use bitloom_bits::count_used;

// Elias gamma: a positive integer of n significant bits is written as n - 1 zero bits followed by
// the n bits of the value itself. the leading 1 of the value doubles as the end of the prefix.
//
//   1 -> 1
//   2 -> 010
//   5 -> 00101
//
// u64::MAX takes 127 bits.

/// largest prefix a valid codeword can have.
pub const MAX_GAMMA_PREFIX: usize = 63;

pub fn write_gamma<W: Write>(w: &mut BitWriter<W>, value: u64) -> Result<()> {
    if value == 0 {
        return Err(BitError::OutOfRange {
            what: "gamma value",
            value: 0,
        });
    }
    let n = count_used(value);
    w.write(0, n - 1)?;
    w.write(value, n)
}

pub fn read_gamma<R: Read>(r: &mut BitReader<R>) -> Result<u64> {
    let mut zeros = 0;
    while !r.read_bit()? {
        zeros += 1;
        if zeros > MAX_GAMMA_PREFIX {
            return Err(BitError::Overflow);
        }
    }
    Ok((1 << zeros) | r.read(zeros)?)
}
