#[cfg(feature = "bits")]
pub use bitloom_bits as bits;

#[cfg(feature = "bitio")]
pub use bitloom_bitio as bitio;

#[cfg(feature = "codes")]
pub use bitloom_codes as codes;
