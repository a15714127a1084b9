use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

/// Returned by `max_value` and `pop_front` when the queue holds no elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "empty queue")
    }
}

impl Error for EmptyQueueError {}

/// A FIFO queue that also reports its current maximum in O(1) amortized time.
/// Next to the queue of record it keeps a deque of max candidates that is
/// non-increasing from front to back, so the front is always the maximum.
/// When a value is pushed, strictly smaller preceding candidates are removed.
pub struct MaxQueue<T: Ord> {
    q: VecDeque<T>,
    max: VecDeque<T>,
}

impl<T: Ord> MaxQueue<T>
where
    T: Copy,
{
    /// Initialize a new empty queue.
    pub fn new() -> Self {
        Self {
            q: VecDeque::new(),
            max: VecDeque::new(),
        }
    }

    /// Push `value` at the back.
    /// Strictly smaller preceding candidates are removed, so that the
    /// candidate deque stays non-increasing. Equal values are kept: each
    /// duplicate of the maximum gets its own turn to be retired.
    pub fn push_back(&mut self, value: T) {
        while let Some(&back) = self.max.back() {
            if back < value {
                self.max.pop_back();
            } else {
                break;
            }
        }
        self.q.push_back(value);
        self.max.push_back(value);
    }

    /// Remove and return the front element.
    /// If it was the current maximum candidate, retire it as well.
    pub fn pop_front(&mut self) -> Result<T, EmptyQueueError> {
        let front = self.q.pop_front().ok_or(EmptyQueueError)?;
        if self.max.front() == Some(&front) {
            self.max.pop_front();
        }
        Ok(front)
    }

    /// The maximum element currently in the queue, without removing it.
    /// No scan: this is the front of the candidate deque.
    pub fn max_value(&self) -> Result<T, EmptyQueueError> {
        self.max.front().copied().ok_or(EmptyQueueError)
    }

    /// The front element, without removing it.
    pub fn front(&self) -> Option<T> {
        self.q.front().copied()
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    /// Iterate over the elements in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.q.iter()
    }

    pub fn clear(&mut self) {
        self.q.clear();
        self.max.clear();
    }
}

impl<T: Ord + Copy> Default for MaxQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
