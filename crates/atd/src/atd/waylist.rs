//! Per-set way ordering.
//!
//! Each tracked set threads its ways through a doubly linked list stored as
//! indices. The head is the most recently touched (or most recently inserted)
//! way, the tail is the next victim under LRU and FIFO.
//!
//! # Performance
//!
//! - `move_to_head()` / `move_to_tail()`: O(1), a fixed number of index updates
//! - `position()`: O(W) where W is the associativity
//! - **Space Complexity:** O(W) per set

/// Where to place a way in its set's list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListEnd {
    /// Most recently touched end.
    Head,
    /// Next-victim end.
    Tail,
}

/// Doubly linked ordering of the ways of one set.
///
/// Invariant: every way in `0..ways` appears exactly once; `prev[head]` and
/// `next[tail]` are `None`; `head == tail` only when there is a single way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WayList {
    head: usize,
    tail: usize,
    prev: Vec<Option<usize>>,
    next: Vec<Option<usize>>,
}

impl WayList {
    /// Builds the initial ordering: way 0 at the head, way `ways - 1` at the tail.
    ///
    /// `ways` must be non-zero; the directory validates this before building sets.
    pub fn new(ways: usize) -> Self {
        let prev = (0..ways).map(|w| w.checked_sub(1)).collect();
        let next = (0..ways)
            .map(|w| if w + 1 < ways { Some(w + 1) } else { None })
            .collect();
        Self {
            head: 0,
            tail: ways.saturating_sub(1),
            prev,
            next,
        }
    }

    /// Number of ways threaded through the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.prev.len()
    }

    /// Returns `true` if the list threads no ways.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prev.is_empty()
    }

    /// Way at the head of the list.
    #[inline]
    pub const fn head(&self) -> usize {
        self.head
    }

    /// Way at the tail of the list.
    #[inline]
    pub const fn tail(&self) -> usize {
        self.tail
    }

    /// Moves `way` to the head of the list.
    ///
    /// # Panics
    ///
    /// Panics if `way` is not below [`WayList::len`].
    #[inline]
    pub fn move_to_head(&mut self, way: usize) {
        self.relink(way, ListEnd::Head);
    }

    /// Moves `way` to the tail of the list.
    ///
    /// # Panics
    ///
    /// Panics if `way` is not below [`WayList::len`].
    #[inline]
    pub fn move_to_tail(&mut self, way: usize) {
        self.relink(way, ListEnd::Tail);
    }

    /// Unlinks `way` and reinserts it at `end`. No-op if it is already there.
    ///
    /// # Panics
    ///
    /// Panics if `way` is not below [`WayList::len`].
    pub fn relink(&mut self, way: usize, end: ListEnd) {
        match (self.prev[way], self.next[way]) {
            // Sole member: already both head and tail.
            (None, None) => return,
            (None, Some(next)) => {
                if end == ListEnd::Head {
                    return;
                }
                self.head = next;
                self.prev[next] = None;
            }
            (Some(prev), None) => {
                if end == ListEnd::Tail {
                    return;
                }
                self.tail = prev;
                self.next[prev] = None;
            }
            (Some(prev), Some(next)) => {
                self.next[prev] = Some(next);
                self.prev[next] = Some(prev);
            }
        }

        match end {
            ListEnd::Head => {
                let old_head = self.head;
                self.next[way] = Some(old_head);
                self.prev[way] = None;
                self.prev[old_head] = Some(way);
                self.head = way;
            }
            ListEnd::Tail => {
                let old_tail = self.tail;
                self.prev[way] = Some(old_tail);
                self.next[way] = None;
                self.next[old_tail] = Some(way);
                self.tail = way;
            }
        }
    }

    /// Distance of `way` from the head (0 for the head itself).
    pub fn position(&self, way: usize) -> Option<usize> {
        self.iter().position(|w| w == way)
    }

    /// Iterates the ways from head to tail.
    pub fn iter(&self) -> WayIter<'_> {
        WayIter {
            list: self,
            cursor: if self.is_empty() { None } else { Some(self.head) },
            remaining: self.len(),
        }
    }
}

/// Head-to-tail iterator over a [`WayList`].
#[derive(Debug)]
pub struct WayIter<'a> {
    list: &'a WayList,
    cursor: Option<usize>,
    remaining: usize,
}

impl Iterator for WayIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // The bound keeps a corrupted list from looping forever.
        if self.remaining == 0 {
            return None;
        }
        let way = self.cursor?;
        self.remaining -= 1;
        self.cursor = self.list.next[way];
        Some(way)
    }
}
