mod binary;
mod common;
mod error;

pub use binary::{bytes_to_binary_string, parse_binary_string, to_binary_string};
pub use common::{MAX_BITS, check_width, count_used, low_mask, pop, push};
pub use error::BitsError;
