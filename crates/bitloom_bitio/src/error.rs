use std::io;

#[derive(thiserror::Error, Debug)]
pub enum BitError {
    #[error("{what} {value} is out of range")]
    OutOfRange { what: &'static str, value: usize },
    #[error("stream ended before the requested bits were available")]
    EndOfStream,
    #[error("accumulator would exceed 64 bits")]
    Overflow,
    #[error("stream is closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = BitError> = std::result::Result<T, E>;

/// checks that `value` lies in `min..=64`, naming it `what` in the error. the upper bound is the
/// one `bitloom_bits` enforces on field widths.
#[inline]
pub(crate) fn check_bits(what: &'static str, value: usize, min: usize) -> Result<usize> {
    if value < min || bitloom_bits::check_width(value).is_err() {
        return Err(BitError::OutOfRange { what, value });
    }
    Ok(value)
}
