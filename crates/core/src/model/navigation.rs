/// Position within the fixed page sequence.
///
/// The index is clamped to `0..len` on every transition; moves past either
/// edge are safe no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// A cursor over `len` pages, starting at the first.
    #[must_use]
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "cursor over an empty page list");
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Advance one page; returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Step back one page; returns whether the cursor moved.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Completed fraction in `0.0..=1.0`, counting the shown page.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_forward_to_the_last_page_then_stops() {
        let mut cursor = Cursor::new(12);
        for _ in 0..11 {
            assert!(cursor.next());
        }
        assert_eq!(cursor.index(), 11);
        assert!(cursor.is_last());
        assert!(!cursor.next());
        assert_eq!(cursor.index(), 11);
    }

    #[test]
    fn prev_at_the_first_page_is_a_no_op() {
        let mut cursor = Cursor::new(12);
        assert!(!cursor.prev());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn progress_counts_the_shown_page() {
        let mut cursor = Cursor::new(4);
        assert!((cursor.progress() - 0.25).abs() < f64::EPSILON);
        cursor.next();
        assert!((cursor.progress() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn single_page_cursor_is_both_edges() {
        let mut cursor = Cursor::new(1);
        assert!(cursor.is_first());
        assert!(cursor.is_last());
        assert!(!cursor.next());
        assert!(!cursor.prev());
    }
}
