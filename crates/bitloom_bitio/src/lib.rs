mod bitreader;
mod bitwriter;
mod cursor;
mod error;
mod push;

pub use bitreader::BitReader;
pub use bitwriter::BitWriter;
pub use error::{BitError, Result};
pub use push::{FieldSink, PushBitReader};
