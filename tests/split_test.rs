//! Split Integration Tests
//!
//! Partition-level guarantees over the public split API.

use std::collections::BTreeMap;

use polytext_prep::{label_distribution, shuffle_samples, train_val_test, Sample, SplitRatios};

fn corpus(counts: &[(i64, usize)]) -> Vec<Sample> {
    let mut samples = Vec::new();
    for &(label, n) in counts {
        for i in 0..n {
            samples.push(Sample {
                text: format!("label {} sample {}", label, i),
                label,
            });
        }
    }
    samples
}

#[test]
fn test_partition_is_disjoint_and_complete() {
    let mut samples = corpus(&[(0, 37), (1, 53), (2, 10)]);
    shuffle_samples(&mut samples, 42);

    let mut expected: BTreeMap<String, usize> = BTreeMap::new();
    for s in &samples {
        *expected.entry(s.text.clone()).or_insert(0) += 1;
    }

    let sets = train_val_test(samples, SplitRatios::default(), 42).expect("split should succeed");

    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    for split in [&sets.train, &sets.val, &sets.test] {
        for s in split {
            *seen.entry(s.text.clone()).or_insert(0) += 1;
        }
    }

    assert_eq!(seen, expected, "every row must land in exactly one split");
}

#[test]
fn test_multiclass_stratification_roughly_holds() {
    let samples = corpus(&[(0, 100), (1, 200), (2, 300)]);
    let sets = train_val_test(samples, SplitRatios::default(), 42).expect("split should succeed");

    let train_dist = label_distribution(&sets.train);
    assert_eq!(train_dist[&0], 80);
    assert_eq!(train_dist[&1], 160);
    assert_eq!(train_dist[&2], 240);

    for split in [&sets.val, &sets.test] {
        let dist = label_distribution(split);
        assert_eq!(dist[&0], 10);
        assert_eq!(dist[&1], 20);
        assert_eq!(dist[&2], 30);
    }
}

#[test]
fn test_rare_label_survives_in_training_set() {
    // One label with only 3 rows among two big ones
    let samples = corpus(&[(0, 100), (1, 100), (9, 3)]);
    let sets = train_val_test(samples, SplitRatios::default(), 42).expect("split should succeed");

    let train_dist = label_distribution(&sets.train);
    assert!(
        train_dist.get(&9).copied().unwrap_or(0) >= 1,
        "rare label must keep at least one training row"
    );
}

#[test]
fn test_different_seeds_differ() {
    let a = train_val_test(corpus(&[(0, 50), (1, 50)]), SplitRatios::default(), 42).unwrap();
    let b = train_val_test(corpus(&[(0, 50), (1, 50)]), SplitRatios::default(), 7).unwrap();

    // Sizes match, membership should not (100 rows, odds of identity are nil)
    assert_eq!(a.test.len(), b.test.len());
    assert_ne!(a.test, b.test);
}
