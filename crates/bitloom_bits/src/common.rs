use crate::BitsError;

pub const MAX_BITS: usize = u64::BITS as usize;

// LOW_MASKS[n] has the low n bits set. the extra slot at 64 exists so that a full-width mask can be
// looked up without special-casing the shift.
pub(crate) const LOW_MASKS: [u64; 65] = {
    let mut low_masks = [0; 65];
    let mut mask_bit = 0;
    while mask_bit < 65 {
        low_masks[mask_bit] = if mask_bit == 64 {
            u64::MAX
        } else {
            (1 << mask_bit) - 1
        };
        mask_bit += 1;
    }
    low_masks
};

/// returns a mask with the low `count` bits set.
///
/// panics if `count` is greater than 64; callers are expected to validate widths with
/// [`check_width`] first.
#[inline(always)]
pub const fn low_mask(count: usize) -> u64 {
    LOW_MASKS[count]
}

/// validates that `count` fits in a `u64` field.
#[inline]
pub fn check_width(count: usize) -> Result<(), BitsError> {
    if count > MAX_BITS {
        return Err(BitsError::OutOfRange {
            count,
            max: MAX_BITS,
        });
    }
    Ok(())
}

/// minimum number of bits needed to represent `value`. zero still occupies one bit.
#[inline]
pub const fn count_used(value: u64) -> usize {
    let used = (u64::BITS - value.leading_zeros()) as usize;
    if used == 0 { 1 } else { used }
}

/// shifts `host` left by `count` and appends the low `count` bits of `bits` at the bottom.
///
/// bits of `bits` above `count` are discarded.
pub fn push(host: u64, bits: u64, count: usize) -> Result<u64, BitsError> {
    check_width(count)?;
    let shifted = host.checked_shl(count as u32).unwrap_or(0);
    Ok(shifted | (bits & low_mask(count)))
}

/// splits the low `count` bits off `host`. returns `(popped, remaining)`.
pub fn pop(host: u64, count: usize) -> Result<(u64, u64), BitsError> {
    check_width(count)?;
    let remaining = host.checked_shr(count as u32).unwrap_or(0);
    Ok((host & low_mask(count), remaining))
}
