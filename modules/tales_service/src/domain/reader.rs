//! Full-screen reader navigation over a loaded page

use crate::contract::ReaderPosition;

impl ReaderPosition {
    /// Open the reader at `index`; out of range yields `None`
    pub fn open(index: usize, len: usize) -> Option<Self> {
        (index < len).then_some(Self { index, len })
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn prev(&self) -> Option<Self> {
        self.has_prev().then(|| Self {
            index: self.index - 1,
            len: self.len,
        })
    }

    pub fn next(&self) -> Option<Self> {
        self.has_next().then(|| Self {
            index: self.index + 1,
            len: self.len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rejects_out_of_range() {
        assert!(ReaderPosition::open(0, 0).is_none());
        assert!(ReaderPosition::open(3, 3).is_none());
        assert_eq!(
            ReaderPosition::open(2, 3),
            Some(ReaderPosition { index: 2, len: 3 })
        );
    }

    #[test]
    fn test_first_tale_has_no_previous() {
        let pos = ReaderPosition::open(0, 3).unwrap();
        assert!(!pos.has_prev());
        assert!(pos.prev().is_none());
        assert_eq!(pos.next().map(|p| p.index), Some(1));
    }

    #[test]
    fn test_last_tale_has_no_next() {
        let pos = ReaderPosition::open(2, 3).unwrap();
        assert!(!pos.has_next());
        assert!(pos.next().is_none());
        assert_eq!(pos.prev().map(|p| p.index), Some(1));
    }

    #[test]
    fn test_single_tale_has_no_neighbours() {
        let pos = ReaderPosition::open(0, 1).unwrap();
        assert!(pos.prev().is_none());
        assert!(pos.next().is_none());
    }
}
