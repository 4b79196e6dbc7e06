use std::collections::HashSet;

use broadside::{Column, Position, TargetError, TargetSelector};
use proptest::prelude::*;
use rand::{rngs::SmallRng, RngCore, SeedableRng};

/// Always yields zero, so every random draw lands on A1.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

#[test]
fn test_selector_covers_board_then_fails() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut selector = TargetSelector::new();
    let mut seen = HashSet::new();
    for i in 0..64 {
        assert_eq!(selector.remaining(), 64 - i);
        let pos = selector.next(&mut rng).unwrap();
        assert!(selector.has_fired(&pos));
        assert!(seen.insert(pos), "duplicate target {}", pos);
    }
    assert_eq!(seen.len(), 64);
    for column in Column::ALL {
        for row in 1..=8 {
            assert!(seen.contains(&Position::new(column, row).unwrap()));
        }
    }
    assert_eq!(selector.remaining(), 0);
    assert_eq!(
        selector.next(&mut rng),
        Err(TargetError::NoPositionsRemaining)
    );
    // still exhausted on further calls
    assert_eq!(
        selector.next(&mut rng),
        Err(TargetError::NoPositionsRemaining)
    );
}

#[test]
fn test_selectors_are_independent() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut first = TargetSelector::new();
    let mut second = TargetSelector::new();
    for _ in 0..64 {
        first.next(&mut rng).unwrap();
    }
    assert!(first.next(&mut rng).is_err());
    assert!(second.next(&mut rng).is_ok());
    assert_eq!(second.remaining(), 63);
}

#[test]
fn test_targets_are_in_bounds() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut selector = TargetSelector::new();
    for _ in 0..64 {
        let pos = selector.next(&mut rng).unwrap();
        assert!((1..=8).contains(&pos.row()));
        assert!((1..=8).contains(&pos.column().ordinal()));
        assert!(!pos.is_hit());
    }
}

#[test]
fn test_fallback_scan_is_column_major() {
    let mut rng = ZeroRng;
    let mut selector = TargetSelector::new();
    let expected: Vec<Position> = Column::ALL
        .iter()
        .flat_map(|&column| (1..=8).map(move |row| Position::new(column, row).unwrap()))
        .collect();
    let picked: Vec<Position> = (0..64).map(|_| selector.next(&mut rng).unwrap()).collect();
    assert_eq!(picked[..3], expected[..3]);
    assert_eq!(picked[8].to_string(), "B1");
    assert_eq!(picked, expected);
    assert_eq!(
        selector.next(&mut rng),
        Err(TargetError::NoPositionsRemaining)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn selector_exhausts_after_64_unique(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut selector = TargetSelector::new();
        let mut seen = HashSet::new();
        for _ in 0..64 {
            let pos = selector.next(&mut rng).unwrap();
            prop_assert!(seen.insert(pos));
        }
        prop_assert!(selector.fired().is_full());
        prop_assert_eq!(selector.next(&mut rng), Err(TargetError::NoPositionsRemaining));
    }
}
