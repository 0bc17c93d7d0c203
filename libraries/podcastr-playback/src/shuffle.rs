//! Shuffled "next" selection
//!
//! Shuffle never reorders the queue. It only changes which index an
//! advance lands on: a uniform pick over the whole queue, current index
//! included.

use rand::Rng;

/// Pick a uniformly random queue index
///
/// Returns `None` for an empty queue. Repeating the current index is
/// allowed.
pub fn pick_random_index<R: Rng>(rng: &mut R, queue_len: usize) -> Option<usize> {
    if queue_len == 0 {
        return None;
    }
    Some(rng.gen_range(0..queue_len))
}
