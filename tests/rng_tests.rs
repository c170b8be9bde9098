use armada::rng::{Lfsr16, DEFAULT_SEED};
use rand::{Rng, RngCore, SeedableRng};

#[test]
fn test_zero_seed_substituted() {
    assert_eq!(Lfsr16::new(0), Lfsr16::new(DEFAULT_SEED));
    assert_eq!(Lfsr16::from_seed([0, 0]), Lfsr16::default());
    assert_eq!(Lfsr16::from_noise(core::iter::empty()), Lfsr16::default());
}

#[test]
fn test_maximal_period() {
    let mut rng = Lfsr16::new(DEFAULT_SEED);
    let mut steps = 0u32;
    loop {
        let v = rng.next_u16();
        assert_ne!(v, 0);
        steps += 1;
        if v == DEFAULT_SEED {
            break;
        }
        assert!(steps < 70_000);
    }
    assert_eq!(steps, 65_535);
}

#[test]
fn test_deterministic_for_seed() {
    let mut a = Lfsr16::new(1234);
    let mut b = Lfsr16::new(1234);
    for _ in 0..100 {
        assert_eq!(a.next_u32(), b.next_u32());
    }
    a.reseed(99);
    b.reseed(99);
    assert_eq!(a.random_range(0..100u32), b.random_range(0..100u32));
}

#[test]
fn test_noise_folding_depends_on_samples() {
    let a = Lfsr16::from_noise([512, 511, 513, 509]);
    let b = Lfsr16::from_noise([512, 511, 513, 510]);
    assert_ne!(a, b);
}

#[test]
fn test_fill_bytes_odd_length() {
    let mut rng = Lfsr16::new(7);
    let mut buf = [0u8; 5];
    rng.fill_bytes(&mut buf);
    assert!(buf.iter().any(|&b| b != 0));
}
