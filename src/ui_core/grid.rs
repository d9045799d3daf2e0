//! Grid layout for the character list.
//!
//! Renderer-agnostic: the TUI turns each row into a horizontal strip of cards.

/// Split `items` into consecutive rows of `width`, preserving order.
///
/// Empty input yields no rows; only the last row may be shorter than `width`.
/// A `width` of 0 is treated as 1.
pub fn chunk_rows<T>(items: &[T], width: usize) -> Vec<&[T]> {
    items.chunks(width.max(1)).collect()
}

/// Selected cell in the grid, stored as a flat index into the character list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridCursor {
    index: usize,
}

impl GridCursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self, width: usize) -> usize {
        self.index / width.max(1)
    }

    pub fn col(&self, width: usize) -> usize {
        self.index % width.max(1)
    }

    pub fn left(&mut self, width: usize) {
        if self.col(width) > 0 {
            self.index -= 1;
        }
    }

    pub fn right(&mut self, len: usize, width: usize) {
        if self.col(width) + 1 < width.max(1) && self.index + 1 < len {
            self.index += 1;
        }
    }

    pub fn up(&mut self, width: usize) {
        let width = width.max(1);
        if self.index >= width {
            self.index -= width;
        }
    }

    /// Move one row down; lands on the last item when the next row is short.
    pub fn down(&mut self, len: usize, width: usize) {
        let width = width.max(1);
        if len == 0 {
            return;
        }
        let rows = len.div_ceil(width);
        if self.row(width) + 1 < rows {
            self.index = (self.index + width).min(len - 1);
        }
    }

    /// Keep the cursor inside a list of `len` items.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::grid::ROW_WIDTH;
    use crate::types::CharacterRecord;
    use proptest::prelude::*;

    fn records(n: u64) -> Vec<CharacterRecord> {
        (1..=n)
            .map(|id| CharacterRecord::new(id, format!("Character {id}"), None))
            .collect()
    }

    #[test]
    fn twelve_records_make_rows_of_5_5_2() {
        let chars = records(12);
        let rows = chunk_rows(&chars, ROW_WIDTH);
        let sizes: Vec<usize> = rows.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![5, 5, 2]);
    }

    #[test]
    fn empty_input_has_no_rows() {
        let chars: Vec<CharacterRecord> = Vec::new();
        assert!(chunk_rows(&chars, ROW_WIDTH).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_short_row() {
        let chars = records(10);
        let rows = chunk_rows(&chars, ROW_WIDTH);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == ROW_WIDTH));
    }

    #[test]
    fn zero_width_behaves_like_one() {
        let chars = records(3);
        assert_eq!(chunk_rows(&chars, 0).len(), 3);
    }

    #[test]
    fn rows_are_stable_for_unchanged_input() {
        let chars = records(7);
        let ids = |rows: Vec<&[CharacterRecord]>| -> Vec<Vec<u64>> {
            rows.iter().map(|r| r.iter().map(|c| c.id).collect()).collect()
        };
        let first = ids(chunk_rows(&chars, ROW_WIDTH));
        let second = ids(chunk_rows(&chars, ROW_WIDTH));
        assert_eq!(first, vec![vec![1, 2, 3, 4, 5], vec![6, 7]]);
        assert_eq!(first, second);
    }

    #[test]
    fn cursor_moves_within_grid_shape() {
        // 12 items: rows [0..5), [5..10), [10..12)
        let mut cur = GridCursor::default();
        cur.left(ROW_WIDTH);
        assert_eq!(cur.index(), 0);

        for _ in 0..10 {
            cur.right(12, ROW_WIDTH);
        }
        assert_eq!(cur.index(), 4, "right stops at end of row");

        cur.down(12, ROW_WIDTH);
        assert_eq!(cur.index(), 9);
        cur.down(12, ROW_WIDTH);
        assert_eq!(cur.index(), 11, "short last row clamps to last item");
        cur.down(12, ROW_WIDTH);
        assert_eq!(cur.index(), 11);

        cur.up(ROW_WIDTH);
        assert_eq!((cur.row(ROW_WIDTH), cur.col(ROW_WIDTH)), (1, 1));
    }

    #[test]
    fn cursor_clamps_after_list_shrinks() {
        let mut cur = GridCursor::default();
        for _ in 0..3 {
            cur.right(12, ROW_WIDTH);
        }
        cur.down(12, ROW_WIDTH);
        assert_eq!(cur.index(), 8);

        cur.clamp(4);
        assert_eq!(cur.index(), 3);
        cur.clamp(0);
        assert_eq!(cur.index(), 0);
    }

    proptest! {
        #[test]
        fn prop_chunking_shape_and_order(len in 0usize..200) {
            let items: Vec<usize> = (0..len).collect();
            let rows = chunk_rows(&items, ROW_WIDTH);

            prop_assert_eq!(rows.len(), len.div_ceil(ROW_WIDTH));
            if let Some((last, full)) = rows.split_last() {
                prop_assert!(full.iter().all(|r| r.len() == ROW_WIDTH));
                let expected_last = if len % ROW_WIDTH == 0 { ROW_WIDTH } else { len % ROW_WIDTH };
                prop_assert_eq!(last.len(), expected_last);
            }
            let flat: Vec<usize> = rows.concat();
            prop_assert_eq!(flat, items);
        }

        #[test]
        fn prop_cursor_stays_in_bounds(len in 1usize..60, moves in proptest::collection::vec(0u8..4, 0..40)) {
            let mut cur = GridCursor::default();
            for m in moves {
                match m {
                    0 => cur.left(ROW_WIDTH),
                    1 => cur.right(len, ROW_WIDTH),
                    2 => cur.up(ROW_WIDTH),
                    _ => cur.down(len, ROW_WIDTH),
                }
                prop_assert!(cur.index() < len);
            }
        }
    }
}
