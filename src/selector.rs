use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Index of the next image to show.
    Next(usize),
    /// Every image was shown and looping is off, or there is nothing to show.
    Exhausted,
}

/// Picks indices in `0..len` at random without repetition.
///
/// The pool holds the indices not yet shown in the current pass, so the
/// shown-set is its complement. A pick removes one index from the pool; once
/// the pool is empty the pass is over and it is either refilled (looping) or
/// the selector stays exhausted.
pub struct Selector<R: Rng = StdRng> {
    len: usize,
    pool: Vec<usize>,
    loop_forever: bool,
    passes: usize,
    rng: R,
}

impl Selector<StdRng> {
    pub fn new(len: usize, loop_forever: bool, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(len, loop_forever, rng)
    }
}

impl<R: Rng> Selector<R> {
    pub fn with_rng(len: usize, loop_forever: bool, rng: R) -> Self {
        Self {
            len,
            pool: (0..len).collect(),
            loop_forever,
            passes: 0,
            rng,
        }
    }

    pub fn next(&mut self) -> Selection {
        if self.pool.is_empty() {
            if !self.loop_forever || self.len == 0 {
                return Selection::Exhausted;
            }
            self.pool.extend(0..self.len);
            self.passes += 1;
        }
        let slot = self.rng.random_range(0..self.pool.len());
        Selection::Next(self.pool.swap_remove(slot))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn shown_count(&self) -> usize {
        self.len - self.pool.len()
    }

    pub fn is_shown(&self, index: usize) -> bool {
        index < self.len && !self.pool.contains(&index)
    }

    /// Number of times the shown-set was cleared to start over.
    pub fn passes_completed(&self) -> usize {
        self.passes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn drain(selector: &mut Selector) -> Vec<usize> {
        let mut order = Vec::new();
        while let Selection::Next(i) = selector.next() {
            order.push(i);
        }
        order
    }

    #[test]
    fn visits_every_index_once_then_stops() {
        let mut selector = Selector::new(10, false, Some(1));
        let order = drain(&mut selector);

        assert_eq!(order.len(), 10);
        let unique: HashSet<_> = order.iter().copied().collect();
        assert_eq!(unique, (0..10).collect::<HashSet<_>>());
        assert_eq!(selector.shown_count(), 10);
        assert_eq!(selector.next(), Selection::Exhausted);
        assert_eq!(selector.next(), Selection::Exhausted);
    }

    #[test]
    fn shown_set_stays_in_bounds() {
        let mut selector = Selector::new(5, false, Some(3));
        for step in 1..=5 {
            let Selection::Next(i) = selector.next() else {
                panic!("exhausted early at step {step}");
            };
            assert!(i < 5);
            assert!(selector.is_shown(i));
            assert_eq!(selector.shown_count(), step);
        }
        assert!(!selector.is_shown(5));
    }

    #[test]
    fn same_seed_same_order() {
        let a = drain(&mut Selector::new(20, false, Some(42)));
        let b = drain(&mut Selector::new(20, false, Some(42)));
        assert_eq!(a, b);
    }

    #[test]
    fn loop_resets_shown_set() {
        let mut selector = Selector::new(3, true, Some(9));
        for _ in 0..3 {
            assert!(matches!(selector.next(), Selection::Next(_)));
        }
        assert_eq!(selector.shown_count(), 3);
        assert_eq!(selector.passes_completed(), 0);

        assert!(matches!(selector.next(), Selection::Next(i) if i < 3));
        assert_eq!(selector.shown_count(), 1);
        assert_eq!(selector.passes_completed(), 1);
    }

    #[test]
    fn each_looped_pass_is_a_permutation() {
        let mut selector = Selector::new(4, true, Some(5));
        for _ in 0..3 {
            let pass: HashSet<_> = (0..4)
                .map(|_| match selector.next() {
                    Selection::Next(i) => i,
                    Selection::Exhausted => panic!("looping selector ran dry"),
                })
                .collect();
            assert_eq!(pass, (0..4).collect::<HashSet<_>>());
        }
    }

    #[test]
    fn empty_set_is_exhausted_immediately() {
        let mut selector = Selector::new(0, false, None);
        assert_eq!(selector.next(), Selection::Exhausted);

        let mut looping = Selector::new(0, true, None);
        assert_eq!(looping.next(), Selection::Exhausted);
        assert_eq!(looping.shown_count(), 0);
    }
}
