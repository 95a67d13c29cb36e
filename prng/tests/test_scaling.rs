//! Range laws of the scaling functions

use prng_core_rs::{
    float64, float64_closed, float64_closed_from, float64_from, int63, int63_from, Generator,
    Mt64, Xorshift1024Star, Xorshift64Star,
};
use proptest::prelude::*;

#[test]
fn test_pinned_conversions() {
    let raw = 13_571_057_368_034_195_726;
    assert_eq!(int63_from(raw), 6_785_528_684_017_097_863);
    assert_eq!(float64_from(raw), 0.7356884940674043);
    assert_eq!(float64_closed_from(raw), 0.7356884940674044);

    // Free functions on a generator agree with the pure mappings
    assert_eq!(int63(&mut Xorshift64Star::new(1234)), 6_785_528_684_017_097_863);
    assert_eq!(float64(&mut Xorshift64Star::new(1234)), 0.7356884940674043);
}

#[test]
fn test_inherent_methods_match_free_functions() {
    let mut direct = Xorshift1024Star::new(31337);
    let mut generic = Xorshift1024Star::new(31337);

    for _ in 0..100 {
        assert_eq!(direct.next_i63(), int63(&mut generic));
        assert_eq!(direct.next_f64(), float64(&mut generic));
        assert_eq!(direct.next_f64_closed(), float64_closed(&mut generic));
    }
}

#[test]
fn test_half_open_never_reaches_one() {
    let mut rng = Mt64::new(8);
    for _ in 0..100_000 {
        let val = rng.next_f64();
        assert!(
            (0.0..1.0).contains(&val),
            "next_f64() produced value {} outside [0.0, 1.0)",
            val
        );
    }
}

/// Sample mean of `draws` half-open doubles
///
/// Folds into a local accumulator so the draws cannot be optimized away.
fn sample_mean(rng: &mut dyn Generator, draws: usize) -> f64 {
    let mut sum = 0.0;
    for _ in 0..draws {
        sum += float64(rng);
    }
    sum / draws as f64
}

#[test]
fn test_mean_converges_to_one_half() {
    const DRAWS: usize = 10_000_000;
    let mut generators: Vec<(&str, Box<dyn Generator>)> = vec![
        ("xorshift64*", Box::new(Xorshift64Star::new(1234))),
        ("xorshift1024*", Box::new(Xorshift1024Star::new(1234))),
        ("mt64", Box::new(Mt64::new(1234))),
    ];

    for (name, rng) in generators.iter_mut() {
        let mean = sample_mean(&mut **rng, DRAWS);
        assert!(
            (mean - 0.5).abs() < 1e-3,
            "{} sample mean {} too far from 0.5",
            name,
            mean
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_int63_in_range(raw in any::<u64>()) {
        let val = int63_from(raw);
        prop_assert!(val >= 0);
        prop_assert_eq!(val as u64, raw >> 1);
    }

    #[test]
    fn prop_closed_in_unit_interval(raw in any::<u64>()) {
        let val = float64_closed_from(raw);
        prop_assert!((0.0..=1.0).contains(&val));
    }

    #[test]
    fn prop_half_open_below_one(raw in any::<u64>()) {
        let val = float64_from(raw);
        prop_assert!((0.0..1.0).contains(&val));
    }

    #[test]
    fn prop_closed_never_below_half_open(raw in any::<u64>()) {
        prop_assert!(float64_closed_from(raw) >= float64_from(raw));
    }
}
