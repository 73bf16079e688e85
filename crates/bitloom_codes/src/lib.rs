//! self-delimiting integer codes built on top of `bitloom_bitio`.

mod fibonacci;
mod gamma;
mod push;
mod unary;

pub use fibonacci::{FIBONACCI, MAX_FIBONACCI_BITS, read_fibonacci, write_fibonacci};
pub use gamma::{MAX_GAMMA_PREFIX, read_gamma, write_gamma};
pub use push::{FibonacciPushDecoder, GammaPushDecoder};
pub use unary::{read_unary, write_unary};
