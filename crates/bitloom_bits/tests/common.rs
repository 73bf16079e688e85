use bitloom_bits::{BitsError, count_used, low_mask, pop, push};

#[test]
fn test_count_used() {
    assert_eq!(count_used(0), 1);
    assert_eq!(count_used(1), 1);
    assert_eq!(count_used(3), 2);
    assert_eq!(count_used(4), 3);
    assert_eq!(count_used(u64::MAX), 64);
}

#[test]
fn test_count_used_all_ones() {
    for n in 1..=64usize {
        let value = low_mask(n);
        assert_eq!(count_used(value), n, "2^{n} - 1");
    }
}

#[test]
fn test_push() {
    assert_eq!(push(0b1, 0b01, 2).unwrap(), 0b101);
    // bits above count are masked, not rejected
    assert_eq!(push(0, 0b1111, 2).unwrap(), 0b11);
    assert_eq!(push(0xdead, 0xbeef, 0).unwrap(), 0xdead);
    assert_eq!(push(0xdead, 0xbeef, 64).unwrap(), 0xbeef);
}

#[test]
fn test_push_out_of_range() {
    assert_eq!(
        push(0, 0, 65),
        Err(BitsError::OutOfRange { count: 65, max: 64 })
    );
}

#[test]
fn test_pop() {
    assert_eq!(pop(0b1101, 2).unwrap(), (0b01, 0b11));
    assert_eq!(pop(u64::MAX, 64).unwrap(), (u64::MAX, 0));
    assert_eq!(pop(42, 0).unwrap(), (0, 42));
    assert!(pop(0, 65).is_err());
}

#[test]
fn test_pop_inverts_push() {
    let hosts = [0, 1, 0xdeadbeef, u64::MAX];
    let bits = [0, 0b1010, 0xcafebabe_12345678, u64::MAX];

    for &host in &hosts {
        for &b in &bits {
            for n in 0..=64 {
                let pushed = push(host, b, n).unwrap();
                let (popped, _) = pop(pushed, n).unwrap();
                assert_eq!(popped, b & low_mask(n), "host={host:#x} bits={b:#x} n={n}");
            }
        }
    }
}
