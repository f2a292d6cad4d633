use passgen_password::UniformSource;
use passgen_test_utils::mock::{self, ScriptedRng};

#[test]
fn uniform_index_in_range() {
    let mut source = mock::source(7);
    for n in [1usize, 2, 3, 10, 200, 7776] {
        for _ in 0..1_000 {
            assert!(source.index(n) < n);
        }
    }
    assert_eq!(0, source.index(0));
}

#[test]
fn uniform_index_rejects_biased_draws() {
    // 2^32 / 3 leaves a remainder of one value at the top
    // of the range which must be redrawn.
    let mut source = UniformSource::new(ScriptedRng::new(vec![u32::MAX, 5]));
    assert_eq!(2, source.index(3));
}

#[test]
fn uniform_index_distribution() {
    const BUCKETS: usize = 10;
    #[cfg(NOT_CI)]
    const DRAWS: usize = 200_000;
    #[cfg(not(NOT_CI))]
    const DRAWS: usize = 50_000;

    let mut source = mock::source(42);
    let mut counts = [0usize; BUCKETS];
    for _ in 0..DRAWS {
        counts[source.index(BUCKETS)] += 1;
    }

    let expected = (DRAWS / BUCKETS) as f64;
    let chi_square: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // Nine degrees of freedom, critical value at p = 0.0001 is 33.7.
    assert!(chi_square < 40.0, "chi-square {} for {:?}", chi_square, counts);
}

#[test]
fn distinct_positions_are_unique() {
    let mut source = mock::source(3);
    for _ in 0..100 {
        let positions = source.distinct_positions(4, 2);
        assert_eq!(2, positions.len());
        assert_ne!(positions[0], positions[1]);
        assert!(positions.iter().all(|p| *p < 4));
    }
    assert_eq!(vec![0], source.distinct_positions(1, 2));
}
