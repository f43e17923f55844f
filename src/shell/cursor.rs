//! Pagination state for the location area directory.

/// Tracks which page `map` and `mapb` show next.
///
/// `next_offset` is the offset of the page the next `map` will fetch, so the
/// page currently on screen starts one page earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationCursor {
    page_size: u32,
    next_offset: u32,
}

impl LocationCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            next_offset: 0,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn next_offset(&self) -> u32 {
        self.next_offset
    }

    /// Offset of the page before the one on screen, None while on the first
    /// page or before any page has been shown.
    pub fn previous_offset(&self) -> Option<u32> {
        self.next_offset.checked_sub(2 * self.page_size)
    }

    /// Records that the page at `next_offset` was shown.
    pub fn advance(&mut self) {
        self.next_offset += self.page_size;
    }

    /// Records that the page at `previous_offset` was shown.
    pub fn retreat(&mut self) {
        self.next_offset = self.next_offset.saturating_sub(self.page_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_page() {
        let cursor = LocationCursor::new(20);
        assert_eq!(cursor.next_offset(), 0);
        assert_eq!(cursor.previous_offset(), None);
    }

    #[test]
    fn test_forward_and_back() {
        let mut cursor = LocationCursor::new(20);

        cursor.advance(); // showing 0..20
        assert_eq!(cursor.next_offset(), 20);
        assert_eq!(cursor.previous_offset(), None);

        cursor.advance(); // showing 20..40
        assert_eq!(cursor.previous_offset(), Some(0));

        cursor.retreat(); // showing 0..20
        assert_eq!(cursor.next_offset(), 20);
        assert_eq!(cursor.previous_offset(), None);
    }

    #[test]
    fn test_zero_page_size_clamped() {
        let cursor = LocationCursor::new(0);
        assert_eq!(cursor.page_size(), 1);
    }
}
