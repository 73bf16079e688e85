// text form used for diagnostics and test fixtures: 8-character groups of `0`/`1`, msb first,
// separated by a single space. `_` is accepted on input as a placeholder for `0`.

use crate::{BitsError, count_used};

const GROUP: usize = 8;
const VALUE_GROUPS: usize = u64::BITS as usize / GROUP;

/// renders `value` msb first in groups of 8.
///
/// the rendered width is the larger of `count_used(value)` and `min_bits`, rounded up to a whole
/// number of bytes.
///
/// ```
/// use bitloom_bits::to_binary_string;
///
/// assert_eq!(to_binary_string(1, 1), "00000001");
/// assert_eq!(to_binary_string(256, 1), "00000001 00000000");
/// assert_eq!(to_binary_string(1, 9), "00000000 00000001");
/// ```
pub fn to_binary_string(value: u64, min_bits: usize) -> String {
    let groups = count_used(value).max(min_bits).div_ceil(GROUP);

    let mut out = String::with_capacity(groups.saturating_mul(GROUP + 1));
    for group in (0..groups).rev() {
        if !out.is_empty() {
            out.push(' ');
        }
        // groups beyond the 8 bytes of a u64 are always zero padding
        let byte = if group < VALUE_GROUPS {
            (value >> (group * GROUP)) as u8
        } else {
            0
        };
        push_byte(&mut out, byte);
    }
    out
}

/// renders each byte as 8 characters, joined by a single space.
pub fn bytes_to_binary_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * (GROUP + 1));
    for (i, &byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        push_byte(&mut out, byte);
    }
    out
}

/// parses the text form back into bytes.
///
/// all whitespace is ignored, so grouping is not enforced; what remains must be a whole number of
/// 8-character groups drawn from `0`, `1` and `_`.
pub fn parse_binary_string(text: &str) -> Result<Vec<u8>, BitsError> {
    let mut out = Vec::with_capacity(text.len() / GROUP);
    let mut byte = 0u8;
    let mut n = 0;

    for ch in text.chars().filter(|ch| !ch.is_whitespace()) {
        let bit = match ch {
            '0' | '_' => 0,
            '1' => 1,
            _ => return Err(BitsError::MalformedBinary),
        };
        byte = (byte << 1) | bit;
        n += 1;
        if n == GROUP {
            out.push(byte);
            byte = 0;
            n = 0;
        }
    }

    if n != 0 {
        return Err(BitsError::MalformedBinary);
    }

    Ok(out)
}

#[inline]
fn push_byte(out: &mut String, byte: u8) {
    for shift in (0..GROUP).rev() {
        out.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
    }
}
