// SPDX-License-Identifier: MPL-2.0
//! Circular buffer implementation for diagnostic event storage.
//!
//! This module provides a memory-bounded ring buffer that automatically
//! evicts the oldest entries when capacity is reached.

use std::collections::VecDeque;

/// Validated capacity for the diagnostics buffer.
///
/// Out-of-range values are clamped rather than rejected: a misconfigured
/// capacity must not disable diagnostics collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    pub const MIN: usize = 16;
    pub const MAX: usize = 4096;
    pub const DEFAULT: usize = 256;

    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let capacity = capacity.value();
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clears all elements from the buffer.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> Default for CircularBuffer<T> {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_capacity_clamps_to_valid_range() {
        assert_eq!(BufferCapacity::new(0).value(), BufferCapacity::MIN);
        assert_eq!(BufferCapacity::new(100_000).value(), BufferCapacity::MAX);
    }

    #[test]
    fn buffer_capacity_accepts_valid_values() {
        assert_eq!(BufferCapacity::new(100).value(), 100);
        assert_eq!(BufferCapacity::new(1000).value(), 1000);
    }

    #[test]
    fn buffer_capacity_default_returns_expected_value() {
        assert_eq!(BufferCapacity::default().value(), BufferCapacity::DEFAULT);
    }

    #[test]
    fn circular_buffer_push_and_retrieve() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::new(16));

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn circular_buffer_overflow_evicts_oldest() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::new(16));

        for n in 0..20 {
            buffer.push(n);
        }

        assert_eq!(buffer.len(), 16);
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items[0], 4); // 0..=3 evicted
        assert_eq!(*items.last().unwrap(), 19);
    }

    #[test]
    fn circular_buffer_len_and_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::new(16));

        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 16);
        assert!(buffer.is_empty());

        buffer.push(1);
        buffer.push(2);

        assert_eq!(buffer.len(), 2);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn circular_buffer_clear() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(BufferCapacity::new(16));

        buffer.push(1);
        buffer.push(2);
        buffer.clear();

        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 16); // Capacity unchanged
    }
}
