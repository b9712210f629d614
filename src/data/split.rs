//! Seeded shuffling and stratified train/validation/test partitioning.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::data::Sample;
use crate::error::{PrepError, Result};

/// Target partition fractions. Must sum to 1.
#[derive(Debug, Clone, Copy)]
pub struct SplitRatios {
    pub train: f64,
    pub val: f64,
    pub test: f64,
}

impl SplitRatios {
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("train", self.train), ("val", self.val), ("test", self.test)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(PrepError::InvalidRatios(format!(
                    "{} ratio {} outside [0, 1]",
                    name, v
                )));
            }
        }
        let sum = self.train + self.val + self.test;
        if (sum - 1.0).abs() > 0.001 {
            return Err(PrepError::InvalidRatios(format!(
                "{} + {} + {} = {}, expected 1",
                self.train, self.val, self.test, sum
            )));
        }
        Ok(())
    }
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train: 0.8,
            val: 0.1,
            test: 0.1,
        }
    }
}

/// The three output partitions.
#[derive(Debug)]
pub struct SplitSets {
    pub train: Vec<Sample>,
    pub val: Vec<Sample>,
    pub test: Vec<Sample>,
}

/// Seeded in-place shuffle. Same seed, same order.
pub fn shuffle_samples(samples: &mut [Sample], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    samples.shuffle(&mut rng);
}

/// Splits off `holdout_frac` of the samples, stratified on label.
///
/// Per label group the holdout gets `round(n * holdout_frac)` rows,
/// chosen by a seeded shuffle of the group. A group with more than one
/// row always keeps at least one row on the kept side. Relative input
/// order is preserved inside both outputs.
pub fn stratified_holdout(
    samples: Vec<Sample>,
    holdout_frac: f64,
    seed: u64,
) -> (Vec<Sample>, Vec<Sample>) {
    if holdout_frac <= 0.0 {
        return (samples, Vec::new());
    }
    if holdout_frac >= 1.0 {
        return (Vec::new(), samples);
    }

    let mut groups: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (idx, sample) in samples.iter().enumerate() {
        groups.entry(sample.label).or_default().push(idx);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut held = vec![false; samples.len()];

    for indices in groups.values() {
        let mut indices = indices.clone();
        indices.shuffle(&mut rng);

        let n = indices.len();
        let mut take = (n as f64 * holdout_frac).round() as usize;
        if take >= n && n > 1 {
            take = n - 1;
        }

        for &idx in indices.iter().take(take) {
            held[idx] = true;
        }
    }

    let mut kept_set = Vec::new();
    let mut held_set = Vec::new();
    for (idx, sample) in samples.into_iter().enumerate() {
        if held[idx] {
            held_set.push(sample);
        } else {
            kept_set.push(sample);
        }
    }
    (kept_set, held_set)
}

/// Two-stage stratified partition: first the validation+test block is
/// held out of the full corpus, then that block is cut into validation
/// and test. Both stages stratify on label and reuse the same seed.
pub fn train_val_test(samples: Vec<Sample>, ratios: SplitRatios, seed: u64) -> Result<SplitSets> {
    ratios.validate()?;
    if samples.is_empty() {
        return Err(PrepError::EmptyCorpus);
    }

    let holdout_frac = ratios.val + ratios.test;
    let (train, rest) = stratified_holdout(samples, holdout_frac, seed);

    let (val, test) = if holdout_frac > 0.0 {
        stratified_holdout(rest, ratios.test / holdout_frac, seed)
    } else {
        (Vec::new(), Vec::new())
    };

    Ok(SplitSets { train, val, test })
}

/// Rows per label, ordered by label value.
pub fn label_distribution(samples: &[Sample]) -> BTreeMap<i64, usize> {
    let mut dist = BTreeMap::new();
    for sample in samples {
        *dist.entry(sample.label).or_insert(0) += 1;
    }
    dist
}
