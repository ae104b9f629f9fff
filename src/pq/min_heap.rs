// src/pq/min_heap.rs

//! Array-backed binary min-heap.
//!
//! Slots are 1-indexed: the children of slot `k` live at `2k` and `2k + 1`
//! and its parent at `k / 2`. Slot 0 is never used. The backing array doubles
//! when it runs out of room and halves once the live count drops to a quarter
//! of its length.

use crate::utils::error::{HuffmanError, Result};

const INITIAL_CAPACITY: usize = 2;

/// A minimum priority queue over any `Ord` key.
///
/// Items that compare equal come out in no particular order.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T: Ord> MinPriorityQueue<T> {
    /// Creates an empty queue with room for one item.
    pub fn new() -> Self {
        Self::with_slots(INITIAL_CAPACITY)
    }

    /// Creates an empty queue that can hold `capacity` items before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_slots((capacity + 1).max(INITIAL_CAPACITY))
    }

    fn with_slots(slots: usize) -> Self {
        let mut storage = Vec::with_capacity(slots);
        storage.resize_with(slots, || None);
        Self {
            slots: storage,
            len: 0,
        }
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the backing array, slot 0 included.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Adds an item, growing the backing array if it is full.
    pub fn insert(&mut self, item: T) {
        if self.len == self.slots.len() - 1 {
            self.resize(2 * self.slots.len());
        }
        self.len += 1;
        self.slots[self.len] = Some(item);
        self.swim(self.len);
    }

    /// Returns the smallest item without removing it.
    pub fn peek_min(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(HuffmanError::EmptyQueue);
        }
        self.slots[1].as_ref().ok_or(HuffmanError::EmptyQueue)
    }

    /// Removes and returns the smallest item.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(HuffmanError::EmptyQueue);
        }

        self.slots.swap(1, self.len);
        let min = self.slots[self.len].take().ok_or(HuffmanError::EmptyQueue)?;
        self.len -= 1;
        self.sink(1);

        if self.len > 0 && self.len == self.slots.len() / 4 {
            self.resize(self.slots.len() / 2);
        }
        Ok(min)
    }

    /// Builds an independent queue holding the same items.
    ///
    /// Items are re-inserted in array order, so the copy's layout may differ
    /// from this queue's. Fails with [`HuffmanError::EmptyQueue`] when there is
    /// nothing to copy.
    pub fn duplicate(&self) -> Result<Self>
    where
        T: Clone,
    {
        if self.is_empty() {
            return Err(HuffmanError::EmptyQueue);
        }
        Ok(self.iter().cloned().collect())
    }

    /// Iterates over the live items in heap order, not sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots[1..=self.len],
        }
    }

    /// Checks slot occupancy and the heap property for every parent.
    pub fn is_min_heap(&self) -> bool {
        if self.slots[0].is_some() {
            return false;
        }
        if self.slots[1..=self.len].iter().any(Option::is_none) {
            return false;
        }
        if self.slots[self.len + 1..].iter().any(Option::is_some) {
            return false;
        }
        (2..=self.len).all(|k| !self.greater(k / 2, k))
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.greater(k / 2, k) {
            self.slots.swap(k / 2, k);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        while 2 * k <= self.len {
            let mut j = 2 * k;
            if j < self.len && self.greater(j, j + 1) {
                j += 1;
            }
            if !self.greater(k, j) {
                break;
            }
            self.slots.swap(k, j);
            k = j;
        }
    }

    fn greater(&self, i: usize, j: usize) -> bool {
        match (&self.slots[i], &self.slots[j]) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    }

    fn resize(&mut self, new_len: usize) {
        debug_assert!(new_len > self.len);
        self.slots.truncate(self.len + 1);
        self.slots.resize_with(new_len, || None);
        self.slots.shrink_to(new_len);
    }
}

impl<T: Ord> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for MinPriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinPriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T: Ord> IntoIterator for &'a MinPriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`MinPriorityQueue`] in array order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
}

impl<T> Iter<'_, T> {
    /// Removal through the iterator is not supported.
    pub fn remove(&mut self) -> Result<()> {
        Err(HuffmanError::UnsupportedOperation(
            "removal through a priority queue iterator".to_string(),
        ))
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, rest) = self.slots.split_first()?;
        self.slots = rest;
        first.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.slots.len(), Some(self.slots.len()))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
