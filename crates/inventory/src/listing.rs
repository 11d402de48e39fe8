/// Lazy, read-only view over one of the store's sequences.
///
/// Knows up front whether it is empty, so a caller can render a tailored
/// message before iterating. Clone it (or ask the store again) to restart.
#[derive(Debug, Clone)]
pub struct Listing<I> {
    entries: I,
    total: usize,
}

impl<I> Listing<I> {
    pub(crate) fn new(entries: I, total: usize) -> Self {
        Self { entries, total }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of entries in the listing as produced, regardless of how far
    /// it has been iterated.
    pub fn total(&self) -> usize {
        self.total
    }
}

impl<I: Iterator> Iterator for Listing<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}
