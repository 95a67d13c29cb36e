//! MT19937-64 seeding modes and batch regeneration

use prng_core_rs::rng::{BOOTSTRAP_SEED, NN};
use prng_core_rs::{float64, Generator, Mt64, SeedError};

#[test]
fn test_batch_boundary_draws() {
    let mut rng = Mt64::new(BOOTSTRAP_SEED);
    let draws: Vec<u64> = (0..NN + 2).map(|_| rng.next_u64()).collect();

    // Last word of the first batch, then the first two of the second
    assert_eq!(draws[NN - 1], 885_676_544_443_828_534);
    assert_eq!(draws[NN], 3_084_267_648_584_019_405);
    assert_eq!(draws[NN + 1], 14_450_587_210_444_010_180);
}

#[test]
fn test_exactly_one_twist_per_batch() {
    let mut rng = Mt64::new(2024);

    for _ in 0..NN {
        rng.next_u64();
    }
    assert_eq!(rng.state().1, NN, "batch should be exhausted, not yet twisted");

    rng.next_u64();
    assert_eq!(rng.state().1, 1, "313th draw should twist once and consume one word");
}

#[test]
fn test_empty_key_array_rejected() {
    let result = Mt64::from_keys(&[]);
    assert_eq!(result.unwrap_err(), SeedError::EmptyKey);
}

#[test]
fn test_empty_key_error_message() {
    assert_eq!(
        SeedError::EmptyKey.to_string(),
        "Seed key array must contain at least one word"
    );
}

#[test]
fn test_key_array_order_matters() {
    let mut forward = Mt64::from_keys(&[1, 2, 3]).unwrap();
    let mut reversed = Mt64::from_keys(&[3, 2, 1]).unwrap();
    assert_ne!(forward.next_u64(), reversed.next_u64());
}

#[test]
fn test_key_array_length_matters() {
    // A trailing zero key still changes the mixing
    let mut short = Mt64::from_keys(&[7]).unwrap();
    let mut padded = Mt64::from_keys(&[7, 0]).unwrap();
    assert_ne!(short.next_u64(), padded.next_u64());
}

#[test]
fn test_zero_scalar_seed_is_usable() {
    let mut rng = Mt64::new(0);
    let first = rng.next_u64();
    let second = rng.next_u64();
    assert_ne!(first, second);
}

#[test]
fn test_direct_and_dynamic_paths_agree() {
    let mut direct = Mt64::new(99);
    let mut boxed: Box<dyn Generator> = Box::new(Mt64::new(99));

    for _ in 0..1000 {
        assert_eq!(direct.next_f64(), float64(&mut *boxed));
    }
}
