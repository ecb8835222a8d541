use std::{cmp::Ordering, collections::BinaryHeap};

#[derive(Clone)]
struct FrontierEntry {
    value: f64,
    sequence: u64,
    node_index: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.sequence == other.sequence
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-pop (BinaryHeap is max-heap by default).
        // Equal values fall back to insertion order so pop order stays
        // deterministic across runs. NaN is treated as Equal.
        other
            .value
            .partial_cmp(&self.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Pending pages awaiting expansion. Always yields the entry with the
/// lowest combined value; ties go to the earliest-inserted entry.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node_index: usize, value: f64) {
        self.heap.push(FrontierEntry {
            value,
            sequence: self.next_sequence,
            node_index,
        });
        self.next_sequence += 1;
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.node_index)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
