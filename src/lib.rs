pub mod max_queue;
pub mod sliding_max;

pub use max_queue::{EmptyQueueError, MaxQueue};
pub use sliding_max::{sliding_max, Elem, Queue, Rescan, SlidingMax, SlidingMaxExtension};

use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaChaRng,
};

/// Generate random values from a fixed seed.
pub fn generate_random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u64()).collect()
}
