// push-mode decoders: bytes go in as they arrive, decoded values come out through `output`.
//
// both decoders drive a `PushBitReader` with a named `FieldSink` that carries the codeword state.
// errors found while decoding can't travel back through the sink, so they are parked on it and
// reported once the `insert` call that hit them returns. the offending codeword is dropped and
// decoding picks up at the next bit.

use bitloom_bitio::{BitError, FieldSink, PushBitReader, Result};

use crate::fibonacci::FibonacciDecoder;
use crate::gamma::MAX_GAMMA_PREFIX;

// widest payload chunk a gamma decoder asks for. anything up to 56 bits can never overflow the
// push reader's accumulator; 32 keeps well clear of that.
const GAMMA_CHUNK: usize = 32;

struct FibonacciSink<S> {
    output: S,
    decoder: FibonacciDecoder,
    seeded: bool,
    error: Option<BitError>,
}

impl<S> FieldSink for FibonacciSink<S>
where
    S: FnMut(u64),
{
    fn on_field(&mut self, bit: u64) -> usize {
        if !self.seeded {
            self.seeded = true;
            return 1;
        }

        match self.decoder.push_bit(bit == 1) {
            Ok(Some(value)) => (self.output)(value),
            Ok(None) => {}
            Err(err) => {
                log::debug!("dropping fibonacci codeword: {err}");
                self.error.get_or_insert(err);
            }
        }
        1
    }
}

/// decodes a stream of Fibonacci codewords pushed in byte by byte.
///
/// ```
/// use bitloom_codes::FibonacciPushDecoder;
///
/// let mut values = Vec::new();
/// let mut decoder = FibonacciPushDecoder::new(|value| values.push(value)).unwrap();
/// // 1 -> 11, 4 -> 1011, 2 -> 011
/// decoder.insert(&[0b1110_1101, 0b1000_0000]).unwrap();
/// drop(decoder);
/// assert_eq!(values, [1, 4, 2]);
/// ```
pub struct FibonacciPushDecoder<S>
where
    S: FnMut(u64),
{
    reader: PushBitReader<FibonacciSink<S>>,
}

impl<S> FibonacciPushDecoder<S>
where
    S: FnMut(u64),
{
    pub fn new(output: S) -> Result<Self> {
        let sink = FibonacciSink {
            output,
            decoder: FibonacciDecoder::default(),
            seeded: false,
            error: None,
        };
        Ok(Self {
            reader: PushBitReader::new(sink)?,
        })
    }

    /// returns the first malformed codeword error hit while decoding `bytes`.
    pub fn insert(&mut self, bytes: &[u8]) -> Result<()> {
        self.reader.insert(bytes)?;
        match self.reader.sink_mut().error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// skips to the next byte boundary, abandoning any codeword in progress.
    pub fn flush_byte(&mut self) {
        self.reader.flush_byte();
        self.reader.sink_mut().decoder = FibonacciDecoder::default();
    }

    pub fn into_output(self) -> S {
        self.reader.into_sink().output
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GammaState {
    Seed,
    Prefix { zeros: usize },
    Payload { value: u64, remaining: usize },
}

struct GammaSink<S> {
    output: S,
    state: GammaState,
    error: Option<BitError>,
}

impl<S> GammaSink<S>
where
    S: FnMut(u64),
{
    fn payload(&mut self, value: u64, remaining: usize) -> usize {
        if remaining == 0 {
            (self.output)(value);
            self.state = GammaState::Prefix { zeros: 0 };
            return 1;
        }
        let chunk = remaining.min(GAMMA_CHUNK);
        self.state = GammaState::Payload { value, remaining };
        chunk
    }
}

impl<S> FieldSink for GammaSink<S>
where
    S: FnMut(u64),
{
    fn on_field(&mut self, field: u64) -> usize {
        match self.state {
            GammaState::Seed => {
                self.state = GammaState::Prefix { zeros: 0 };
                1
            }
            GammaState::Prefix { zeros } if field == 1 => self.payload(1, zeros),
            GammaState::Prefix { zeros } if zeros >= MAX_GAMMA_PREFIX => {
                log::debug!("dropping gamma codeword with a {} bit prefix", zeros + 1);
                self.error.get_or_insert(BitError::Overflow);
                self.state = GammaState::Prefix { zeros: 0 };
                1
            }
            GammaState::Prefix { zeros } => {
                self.state = GammaState::Prefix { zeros: zeros + 1 };
                1
            }
            GammaState::Payload { value, remaining } => {
                let chunk = remaining.min(GAMMA_CHUNK);
                self.payload((value << chunk) | field, remaining - chunk)
            }
        }
    }
}

/// decodes a stream of Elias gamma codewords pushed in byte by byte.
///
/// the zero prefix is read one bit at a time; once its length is known the payload is requested
/// as a single field (split in two when it is wider than 32 bits).
///
/// ```
/// use bitloom_codes::GammaPushDecoder;
///
/// let mut values = Vec::new();
/// let mut decoder = GammaPushDecoder::new(|value| values.push(value)).unwrap();
/// // 1 -> 1, 5 -> 00101, 2 -> 010
/// decoder.insert(&[0b1001_0101, 0b0000_0000]).unwrap();
/// drop(decoder);
/// assert_eq!(values, [1, 5, 2]);
/// ```
pub struct GammaPushDecoder<S>
where
    S: FnMut(u64),
{
    reader: PushBitReader<GammaSink<S>>,
}

impl<S> GammaPushDecoder<S>
where
    S: FnMut(u64),
{
    pub fn new(output: S) -> Result<Self> {
        let sink = GammaSink {
            output,
            state: GammaState::Seed,
            error: None,
        };
        Ok(Self {
            reader: PushBitReader::new(sink)?,
        })
    }

    pub fn insert(&mut self, bytes: &[u8]) -> Result<()> {
        self.reader.insert(bytes)?;
        self.take_error()
    }

    /// skips to the next byte boundary, abandoning any codeword in progress.
    pub fn flush_byte(&mut self) -> Result<()> {
        self.reader.flush_byte();
        self.reader.sink_mut().state = GammaState::Prefix { zeros: 0 };
        // the reader may still be waiting on a payload field
        self.reader.set_width(1)?;
        self.take_error()
    }

    pub fn into_output(self) -> S {
        self.reader.into_sink().output
    }

    fn take_error(&mut self) -> Result<()> {
        match self.reader.sink_mut().error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
