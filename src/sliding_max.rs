use crate::max_queue::MaxQueue;
use std::cmp::Ordering;

/// A value at an absolute position.
/// When comparing, ties between values are broken in favour of small position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Elem<V> {
    pub val: V,
    pub pos: usize,
}

impl<V: Ord> Ord for Elem<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.val.cmp(&other.val).then(other.pos.cmp(&self.pos))
    }
}

impl<V: Ord> PartialOrd for Elem<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub trait SlidingMax<V> {
    /// Take an iterator over values of type V.
    /// Return an iterator over the maxima of windows of size w, and their positions.
    /// The first maximum is yielded once w values have been seen.
    fn sliding_max(&self, w: usize, it: impl Iterator<Item = V>) -> impl Iterator<Item = Elem<V>>;
}

/// A iterator extension trait so we can conveniently call .sliding_max on any iterator.
pub trait SlidingMaxExtension<V> {
    fn sliding_max<'a>(
        self,
        w: usize,
        alg: &'a impl SlidingMax<V>,
    ) -> impl Iterator<Item = Elem<V>> + 'a
    where
        V: 'a,
        Self: 'a;
}

impl<V, I> SlidingMaxExtension<V> for I
where
    I: Iterator<Item = V>,
{
    fn sliding_max<'a>(
        self,
        w: usize,
        alg: &'a impl SlidingMax<V>,
    ) -> impl Iterator<Item = Elem<V>> + 'a
    where
        I: 'a,
        V: 'a,
    {
        alg.sliding_max(w, self)
    }
}

/// Sliding maxima via a `MaxQueue` holding exactly the current window.
pub struct Queue;

impl<V: Ord + Copy> SlidingMax<V> for Queue {
    fn sliding_max(&self, w: usize, it: impl Iterator<Item = V>) -> impl Iterator<Item = Elem<V>> {
        assert!(w > 0);
        let mut q = MaxQueue::new();
        it.enumerate().filter_map(move |(pos, val)| {
            q.push_back(Elem { val, pos });
            if q.len() > w {
                q.pop_front().expect("We just pushed");
            }
            (pos + 1 >= w).then(|| q.max_value().expect("w > 0"))
        })
    }
}

/// Naive baseline that rescans each window.
pub struct Rescan;

impl<V: Ord + Copy> SlidingMax<V> for Rescan {
    fn sliding_max(&self, w: usize, it: impl Iterator<Item = V>) -> impl Iterator<Item = Elem<V>> {
        assert!(w > 0);
        let vals: Vec<V> = it.collect();
        let maxima: Vec<_> = vals
            .windows(w)
            .enumerate()
            .map(|(i, window)| {
                window
                    .iter()
                    .enumerate()
                    .map(|(j, &val)| Elem { val, pos: i + j })
                    .max()
                    .expect("w > 0")
            })
            .collect();
        maxima.into_iter()
    }
}

/// The maximum of each window of size `w`, with its position.
pub fn sliding_max<V: Ord + Copy>(w: usize, values: impl Iterator<Item = V>) -> Vec<Elem<V>> {
    Queue.sliding_max(w, values).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generate_random_values;
    use itertools::Itertools;

    #[test]
    fn queue_matches_rescan() {
        let values = generate_random_values(1024, 213456);
        for w in [1, 2, 3, 4, 5, 31, 32, 33, 63, 64, 65] {
            for len in 0..100 {
                let vals = &values[..len];
                let queue = vals.iter().copied().sliding_max(w, &Queue).collect_vec();
                let rescan = Rescan.sliding_max(w, vals.iter().copied()).collect_vec();
                assert_eq!(queue, rescan, "w={w}, len={len}");
            }
        }
        for w in [1, 11, 512, 1024] {
            let queue = Queue.sliding_max(w, values.iter().copied()).collect_vec();
            let rescan = Rescan.sliding_max(w, values.iter().copied()).collect_vec();
            assert_eq!(queue, rescan, "w={w}");
        }
    }

    #[test]
    fn window_count() {
        let values = generate_random_values(100, 1);
        for w in [1, 2, 50, 99, 100, 101] {
            let n = sliding_max(w, values.iter().copied()).len();
            assert_eq!(n, values.len().saturating_sub(w - 1), "w={w}");
        }
    }

    #[test]
    fn ties_prefer_small_position() {
        let vals = [2u64, 7, 7, 1];
        let maxima = sliding_max(3, vals.iter().copied());
        assert_eq!(maxima[0], Elem { val: 7, pos: 1 });
        assert_eq!(maxima[1], Elem { val: 7, pos: 1 });
    }
}
