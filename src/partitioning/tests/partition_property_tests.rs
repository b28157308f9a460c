use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::partitioning::HypergraphPartition;

/// Every vertex with a non-negative block id appears in exactly that block,
/// and every block lists its members in ascending order.
fn assert_blocks_cover(p: &HypergraphPartition) {
    let mut seen = vec![false; p.vertex_count()];
    for (b, members) in p.blocks().iter().enumerate() {
        assert!(members.windows(2).all(|w| w[0] < w[1]));
        for &v in members {
            assert_eq!(p.block_of(v).unwrap(), b as i32);
            assert!(!seen[v as usize - 1], "vertex {v} listed twice");
            seen[v as usize - 1] = true;
        }
    }
    for (i, &covered) in seen.iter().enumerate() {
        assert_eq!(covered, p.assignment()[i] >= 0);
    }
}

#[test]
fn seeded_random_assignment_is_covered() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..16 {
        let n = rng.gen_range(0..64);
        let k = rng.gen_range(1..8usize).min(n);
        let assignment = (0..n).map(|_| rng.gen_range(0..k) as i32).collect();
        assert_blocks_cover(&HypergraphPartition::new(assignment, 0).unwrap());
    }
}

proptest! {
    #[test]
    fn blocks_cover_assignment(assignment in prop::collection::vec(-1i32..6, 0..80)) {
        let in_range = assignment.iter().all(|&b| (b as i64) < assignment.len() as i64);
        match HypergraphPartition::new(assignment.clone(), 7) {
            Ok(p) => {
                prop_assert!(in_range);
                assert_blocks_cover(&p);
                let expected =
                    assignment.iter().copied().max().map_or(0, |m| (m + 1).max(0) as usize);
                prop_assert_eq!(p.block_count(), expected);
                prop_assert_eq!(p.assignment(), &assignment[..]);
            }
            Err(_) => prop_assert!(!in_range),
        }
    }

    #[test]
    fn serde_keeps_assignment_and_objective(
        assignment in prop::collection::vec(0i32..4, 4..40),
        objective in any::<i32>(),
    ) {
        let p = HypergraphPartition::new(assignment, objective).unwrap();
        let _ = p.blocks();
        let json = serde_json::to_string(&p).unwrap();
        let back: HypergraphPartition = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&back, &p);
        prop_assert_eq!(back.blocks(), p.blocks());
    }
}
