//! Seeded generation of sets of strictly increasing size.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::HarnessConfig;
use crate::persistent::EqSet;

/// How many times the element source may repeat an existing value before the
/// generator gives up on finding a fresh one.
const MAX_DRAWS_PER_ELEMENT: usize = 256;

/// One input produced by a [`SetGenerator`].
#[derive(Debug, Clone)]
pub struct GeneratedCase<T> {
    /// Position of this case in the generated sequence, starting at zero.
    pub index: usize,
    /// The distinct elements of the case, as a plain sequence.
    pub distinct: Vec<T>,
    /// `distinct` with some elements repeated, shuffled. This is what `set`
    /// was collected from.
    pub sequence: Vec<T>,
    /// The set collected from `sequence`.
    pub set: EqSet<T>,
}

/// A seeded generator of sets of strictly increasing size.
///
/// The first three cases are the empty set, a singleton and a two-element
/// set. Every later case adds between one and
/// [`max_growth`](HarnessConfig::max_growth) fresh elements to the previous
/// one. Elements come from a caller-supplied source drawing on the
/// generator's random number generator.
///
/// The iterator ends early if the source keeps producing values that are
/// already present, which happens once a small element domain is exhausted.
///
/// # Examples
///
/// ```rust
/// use eqset::harness::{HarnessConfig, SetGenerator};
///
/// let config = HarnessConfig::default();
/// let sizes: Vec<usize> = SetGenerator::integers(&config)
///     .take(4)
///     .map(|case| case.set.len())
///     .collect();
///
/// assert_eq!(&sizes[..3], &[0, 1, 2]);
/// assert!(sizes[3] > 2);
/// ```
pub struct SetGenerator<T, F> {
    rng: SmallRng,
    source: F,
    distinct: Vec<T>,
    index: usize,
    max_growth: usize,
    exhausted: bool,
}

impl<T, F> SetGenerator<T, F>
where
    T: Clone + PartialEq,
    F: FnMut(&mut SmallRng) -> T,
{
    /// Creates a generator seeded from `config`, drawing elements from
    /// `source`.
    pub fn new(config: &HarnessConfig, source: F) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(config.seed),
            source,
            distinct: Vec::new(),
            index: 0,
            max_growth: config.max_growth.max(1),
            exhausted: false,
        }
    }

    fn fresh_element(&mut self) -> Option<T> {
        for _ in 0..MAX_DRAWS_PER_ELEMENT {
            let candidate = (self.source)(&mut self.rng);
            if !self.distinct.contains(&candidate) {
                return Some(candidate);
            }
        }
        None
    }

    fn growth(&mut self) -> usize {
        match self.index {
            0 => 0,
            1 | 2 => 1,
            _ => self.rng.gen_range(1..=self.max_growth),
        }
    }

    /// Repeats a random selection of the distinct elements and shuffles the
    /// result, so collecting it exercises duplicate collapsing and arbitrary
    /// input order.
    fn noisy_sequence(&mut self) -> Vec<T> {
        let mut sequence = self.distinct.clone();
        for element in &self.distinct {
            if self.rng.gen_bool(0.3) {
                sequence.push(element.clone());
            }
        }
        sequence.shuffle(&mut self.rng);
        sequence
    }
}

impl SetGenerator<i32, fn(&mut SmallRng) -> i32> {
    /// A generator of `i32` sets drawing elements from `-1000..1000`.
    pub fn integers(config: &HarnessConfig) -> Self {
        Self::new(config, random_integer)
    }
}

fn random_integer(rng: &mut SmallRng) -> i32 {
    rng.gen_range(-1000..1000)
}

impl<T, F> Iterator for SetGenerator<T, F>
where
    T: Clone + PartialEq,
    F: FnMut(&mut SmallRng) -> T,
{
    type Item = GeneratedCase<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        for _ in 0..self.growth() {
            if let Some(element) = self.fresh_element() {
                self.distinct.push(element);
            } else {
                self.exhausted = true;
                return None;
            }
        }

        let sequence = self.noisy_sequence();
        let set = sequence.iter().cloned().collect();
        let case = GeneratedCase {
            index: self.index,
            distinct: self.distinct.clone(),
            sequence,
            set,
        };
        self.index += 1;
        Some(case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_sizes_strictly_increase() {
        let config = HarnessConfig::default().with_seed(3);
        let sizes: Vec<usize> = SetGenerator::integers(&config)
            .take(20)
            .map(|case| case.set.len())
            .collect();

        assert_eq!(sizes.len(), 20);
        assert_eq!(&sizes[..3], &[0, 1, 2]);
        assert!(sizes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[rstest]
    fn test_growth_respects_bound() {
        let config = HarnessConfig::default().with_max_growth(2);
        let sizes: Vec<usize> = SetGenerator::integers(&config)
            .take(30)
            .map(|case| case.distinct.len())
            .collect();

        assert!(sizes.windows(2).all(|pair| pair[1] - pair[0] <= 2));
    }

    #[rstest]
    fn test_same_seed_same_cases() {
        let config = HarnessConfig::default().with_seed(42);
        let first: Vec<Vec<i32>> = SetGenerator::integers(&config)
            .take(10)
            .map(|case| case.sequence)
            .collect();
        let second: Vec<Vec<i32>> = SetGenerator::integers(&config)
            .take(10)
            .map(|case| case.sequence)
            .collect();

        assert_eq!(first, second);
    }

    #[rstest]
    fn test_sequence_only_repeats_distinct_elements() {
        let config = HarnessConfig::default();
        for case in SetGenerator::integers(&config).take(15) {
            assert!(case.sequence.len() >= case.distinct.len());
            assert!(case.sequence.iter().all(|element| case.distinct.contains(element)));
            assert_eq!(case.set.len(), case.distinct.len());
        }
    }

    #[rstest]
    fn test_small_domain_exhausts() {
        let config = HarnessConfig::default().with_max_growth(1);
        let cases: Vec<GeneratedCase<bool>> =
            SetGenerator::new(&config, |rng: &mut SmallRng| rng.gen_bool(0.5))
                .take(10)
                .collect();

        assert_eq!(cases.len(), 3);
        assert_eq!(cases[2].set.len(), 2);
    }
}
