use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-priority queue: `pop` yields the smallest element under `Ord`.
#[derive(Debug)]
pub struct Frontier<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> Frontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Ord> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
