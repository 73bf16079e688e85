use std::io::{self, Cursor, Read};

use bitloom_bitio::{BitError, BitReader};
use bitloom_bits::parse_binary_string;

fn reader(text: &str) -> BitReader<Cursor<Vec<u8>>> {
    BitReader::new(Cursor::new(parse_binary_string(text).unwrap()))
}

#[test]
fn test_read_single_bits() {
    let mut r = reader("01000000 10000000");
    let bits: Vec<u64> = (0..9).map(|_| r.read(1).unwrap()).collect();
    assert_eq!(bits, [0, 1, 0, 0, 0, 0, 0, 0, 1]);
}

#[test]
fn test_read_spanning_bytes() {
    let mut r = reader("01000000 10000000 00000000");
    assert_eq!(r.read(5).unwrap(), 0b01000);
    assert_eq!(r.read(5).unwrap(), 0b00010);
    assert_eq!(r.read(5).unwrap(), 0b00000);

    let mut r = reader("01000000 10000000 00000000");
    assert_eq!(r.read(12).unwrap(), 0b0100_0000_1000);
    assert_eq!(r.read(12).unwrap(), 0);
}

#[test]
fn test_read_full_width() {
    let mut r = BitReader::new(Cursor::new(vec![0xffu8; 9]));
    assert_eq!(r.read(4).unwrap(), 0xf);
    assert_eq!(r.read(64).unwrap(), u64::MAX);
    assert_eq!(r.read(4).unwrap(), 0xf);
}

#[test]
fn test_read_zero_bits_touches_nothing() {
    let mut r = BitReader::new(Cursor::new(Vec::new()));
    assert_eq!(r.read(0).unwrap(), 0);
    assert_eq!(r.try_read(0).unwrap(), Some(0));
}

#[test]
fn test_read_out_of_range() {
    let mut r = reader("11111111");
    assert!(matches!(
        r.read(65),
        Err(BitError::OutOfRange { value: 65, .. })
    ));
    // the stream must not have been touched
    assert_eq!(r.read(8).unwrap(), 0xff);
}

#[test]
fn test_read_end_of_stream() {
    let mut r = reader("10101010");
    assert_eq!(r.read(6).unwrap(), 0b101010);
    assert!(matches!(r.read(3), Err(BitError::EndOfStream)));
}

#[test]
fn test_try_read_end_of_stream() {
    let mut r = reader("10101010");
    assert_eq!(r.try_read(8).unwrap(), Some(0b10101010));
    assert_eq!(r.try_read(1).unwrap(), None);
    assert_eq!(r.try_peek_bit().unwrap(), None);
}

#[test]
fn test_peek_bit() {
    let mut r = reader("00000000");
    assert!(!r.peek_bit().unwrap());

    let mut r = reader("10000000 01000000");
    assert!(r.peek_bit().unwrap());
    assert!(r.peek_bit().unwrap());
    assert!(r.read_bit().unwrap());
    assert!(!r.peek_bit().unwrap());
    assert_eq!(r.read(7).unwrap(), 0);
    // crosses into the second byte
    assert!(!r.peek_bit().unwrap());
    assert_eq!(r.read(2).unwrap(), 0b01);
}

#[test]
fn test_peek_bit_end_of_stream() {
    let mut r = BitReader::new(Cursor::new(Vec::new()));
    assert!(matches!(r.peek_bit(), Err(BitError::EndOfStream)));
}

#[test]
fn test_byte_align() {
    let mut r = reader("11100000 10000001");
    assert!(r.byte_aligned());
    assert_eq!(r.read(3).unwrap(), 0b111);
    assert!(!r.byte_aligned());
    r.byte_align().unwrap();
    assert!(r.byte_aligned());
    assert_eq!(r.read(8).unwrap(), 0b10000001);
}

#[test]
fn test_reads_lazily() {
    let mut data = Cursor::new(vec![0xf0, 0x0f, 0xaa]);
    {
        let mut r = BitReader::new(&mut data);
        assert_eq!(r.read(12).unwrap(), 0xf00);
    }
    // only the two bytes holding the 12 bits were pulled from the stream
    let mut rest = Vec::new();
    data.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, [0xaa]);
}

#[test]
fn test_use_after_close() {
    let mut r = reader("11111111");
    assert!(!r.is_closed());
    assert_eq!(r.read(3).unwrap(), 0b111);
    r.close();
    r.close();
    assert!(r.is_closed());
    assert!(matches!(r.read(1), Err(BitError::Closed)));
    assert!(matches!(r.try_read(1), Err(BitError::Closed)));
    assert!(matches!(r.peek_bit(), Err(BitError::Closed)));
    // aligning a closed reader must not touch the cursor either
    assert!(matches!(r.byte_align(), Err(BitError::Closed)));
    assert!(!r.byte_aligned());
    assert!(matches!(r.into_inner(), Err(BitError::Closed)));
}

#[test]
fn test_into_inner() {
    let r = reader("11111111 00000000");
    let cursor = r.into_inner().unwrap();
    assert_eq!(cursor.position(), 0);
}

struct BrokenPipe;

impl Read for BrokenPipe {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
    }
}

#[test]
fn test_io_error() {
    let mut r = BitReader::new(BrokenPipe);
    assert!(matches!(r.read(1), Err(BitError::Io(err)) if err.kind() == io::ErrorKind::BrokenPipe));
    assert!(matches!(r.try_read(1), Err(BitError::Io(_))));
}
