//! OffsetIndex - sorted offset-to-payload mapping with O(log n) lookup.
//!
//! Entries are kept sorted ascending by offset in a `Vec`, so position
//! search is `partition_point` binary search. Insertion pays the O(n)
//! shift; the contract only requires logarithmic lookup.
//!
//! Duplicate offsets are allowed. Insertions at an existing offset land
//! *after* the existing equal entries, so insertion order is stable and
//! observable: exact-match lookup returns the first-inserted entry.
//!
//! # Complexity
//!
//! - `insert`: O(log n) search + O(n) shift
//! - `first_offset_from`: O(log n)
//! - `get` / `remove`: O(log n) (+ O(n) shift for remove)
//! - `len`: O(1)

/// One (offset, payload) entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    /// Zero-based character position in the buffer.
    pub offset: usize,
    /// The payload anchored at that offset.
    pub payload: T,
}

/// Sorted mapping from buffer offset to payload.
#[derive(Debug, Clone)]
pub struct OffsetIndex<T> {
    entries: Vec<Entry<T>>,
}

// Manual impl: the derive would bound `T: Default`, which payloads do
// not need for an empty index.
impl<T> Default for OffsetIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OffsetIndex<T> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a payload at `offset`, preserving the sort invariant.
    ///
    /// Equal offsets insert after existing equals, keeping insertion order
    /// stable.
    pub fn insert(&mut self, offset: usize, payload: T) {
        let at = self.entries.partition_point(|e| e.offset <= offset);
        self.entries.insert(at, Entry { offset, payload });
    }

    /// Smallest stored offset ≥ `start`, or `None` if nothing lies at or
    /// beyond it.
    pub fn first_offset_from(&self, start: usize) -> Option<usize> {
        let at = self.entries.partition_point(|e| e.offset < start);
        self.entries.get(at).map(|e| e.offset)
    }

    /// The payload stored exactly at `offset`.
    ///
    /// With duplicate offsets this resolves to the lowest-indexed match,
    /// which by the insert rule is the first-inserted entry.
    pub fn get(&self, offset: usize) -> Option<&T> {
        let at = self.entries.partition_point(|e| e.offset < offset);
        match self.entries.get(at) {
            Some(e) if e.offset == offset => Some(&e.payload),
            _ => None,
        }
    }

    /// Remove and return the first-inserted payload at exactly `offset`.
    pub fn remove(&mut self, offset: usize) -> Option<T> {
        let at = self.entries.partition_point(|e| e.offset < offset);
        match self.entries.get(at) {
            Some(e) if e.offset == offset => Some(self.entries.remove(at).payload),
            _ => None,
        }
    }

    /// Entries whose offsets fall in `[start, end)`, in offset order.
    pub fn range(&self, start: usize, end: usize) -> &[Entry<T>] {
        let lo = self.entries.partition_point(|e| e.offset < start);
        let hi = self.entries.partition_point(|e| e.offset < end);
        &self.entries[lo..hi]
    }

    /// All entries in offset order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "offset_index_tests.rs"]
mod tests;
