#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BitsError {
    #[error("bit count {count} is out of range (max {max})")]
    OutOfRange { count: usize, max: usize },
    #[error("malformed binary string")]
    MalformedBinary,
}
