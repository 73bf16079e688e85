use std::hint::black_box;
use std::io::Cursor;

use bitloom_bitio::{BitReader, BitWriter, PushBitReader};
use criterion::{Criterion, criterion_group, criterion_main};
use criterion_cycles_per_byte::CyclesPerByte;

fn bench_write(c: &mut Criterion<CyclesPerByte>) {
    let mut group = c.benchmark_group("write");
    let mut buf = Vec::with_capacity(1024);

    group.bench_function("write 64 bits", |b| {
        b.iter(|| {
            buf.clear();
            let mut w = BitWriter::new(&mut buf);
            w.write(black_box(0xdeadbeefcafebabe), 64).unwrap();
        })
    });

    group.bench_function("write 8 bits", |b| {
        b.iter(|| {
            buf.clear();
            let mut w = BitWriter::new(&mut buf);
            w.write(black_box(0xaa), 8).unwrap();
        })
    });

    group.bench_function("spanning bytes", |b| {
        b.iter(|| {
            buf.clear();
            let mut w = BitWriter::new(&mut buf);
            w.write(black_box(0b101), 3).unwrap();
            w.write(black_box(0x3ff), 10).unwrap();
        })
    });

    group.finish();
}

fn bench_read(c: &mut Criterion<CyclesPerByte>) {
    let mut group = c.benchmark_group("read");
    let buf = [0xffu8; 1024];

    group.bench_function("read 64 bits", |b| {
        b.iter(|| {
            let mut r = BitReader::new(Cursor::new(&buf));
            black_box(r.read(64).unwrap());
        })
    });

    group.bench_function("read 8 bits", |b| {
        b.iter(|| {
            let mut r = BitReader::new(Cursor::new(&buf));
            black_box(r.read(8).unwrap());
        })
    });

    group.bench_function("spanning bytes", |b| {
        b.iter(|| {
            let mut r = BitReader::new(Cursor::new(&buf));
            black_box(r.read(3).unwrap());
            black_box(r.read(10).unwrap());
        })
    });

    group.finish();
}

fn bench_push(c: &mut Criterion<CyclesPerByte>) {
    let mut group = c.benchmark_group("push");
    let buf = [0xa5u8; 1024];

    for width in [1usize, 7, 32] {
        group.bench_function(format!("insert 1k, {width} bit fields"), |b| {
            b.iter(|| {
                let mut sum = 0u64;
                let mut r = PushBitReader::new(|value: u64| {
                    sum = sum.wrapping_add(value);
                    width
                })
                .unwrap();
                r.insert(black_box(&buf)).unwrap();
                drop(r);
                black_box(sum);
            })
        });
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().with_measurement(CyclesPerByte);
    targets = bench_write, bench_read, bench_push
);
criterion_main!(benches);
