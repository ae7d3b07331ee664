/// An item in the carousel's visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleItem<'a, T> {
    pub index: usize,
    pub offset: i64,
    pub item: &'a T,
}

/// Signed shortest-path distance from `current` to `index` on a ring of
/// `len` positions.
///
/// The wrap only applies when the raw distance is strictly more than half
/// the ring, so on an even ring the item exactly opposite stays positive.
pub fn normalize_offset(index: usize, current: usize, len: usize) -> i64 {
    let len = len as i64;
    let offset = index as i64 - current as i64;
    if 2 * offset > len {
        offset - len
    } else if 2 * offset < -len {
        offset + len
    } else {
        offset
    }
}

/// `(index, offset)` pairs for the previous, current and next positions
/// around `current`, ordered by offset. Shorter sequences yield fewer pairs.
pub fn window_offsets(len: usize, current: usize) -> Vec<(usize, i64)> {
    let mut window: Vec<_> = (0..len)
        .map(|index| (index, normalize_offset(index, current, len)))
        .filter(|(_, offset)| offset.abs() <= 1)
        .collect();
    window.sort_by_key(|(_, offset)| *offset);
    window
}

/// Previous, current and next items around `current`, ordered by offset.
pub fn visible_window<T>(items: &[T], current: usize) -> Vec<VisibleItem<'_, T>> {
    window_offsets(items.len(), current)
        .into_iter()
        .map(|(index, offset)| VisibleItem {
            index,
            offset,
            item: &items[index],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets<T>(window: &[VisibleItem<'_, T>]) -> Vec<(usize, i64)> {
        window.iter().map(|v| (v.index, v.offset)).collect()
    }

    #[test]
    fn wraps_to_previous_from_start() {
        let items = [0, 1, 2, 3, 4];
        let window = visible_window(&items, 0);
        assert_eq!(offsets(&window), vec![(4, -1), (0, 0), (1, 1)]);
        assert_eq!(normalize_offset(4, 0, 5), -1);
    }

    #[test]
    fn wraps_to_next_from_end() {
        let items = [0, 1, 2, 3, 4];
        let window = visible_window(&items, 4);
        assert_eq!(offsets(&window), vec![(3, -1), (4, 0), (0, 1)]);
    }

    #[test]
    fn three_or_more_items_always_show_three() {
        for len in 3..9 {
            let items: Vec<usize> = (0..len).collect();
            for current in 0..len {
                let window = visible_window(&items, current);
                let got: Vec<i64> = window.iter().map(|v| v.offset).collect();
                assert_eq!(got, vec![-1, 0, 1], "len {len} current {current}");
                assert_eq!(window[1].index, current);
            }
        }
    }

    #[test]
    fn short_sequences_show_fewer() {
        assert_eq!(offsets(&visible_window(&["only"], 0)), vec![(0, 0)]);
        assert_eq!(offsets(&visible_window(&["a", "b"], 0)), vec![(0, 0), (1, 1)]);
        assert_eq!(offsets(&visible_window(&["a", "b"], 1)), vec![(0, -1), (1, 0)]);
        assert!(visible_window::<u8>(&[], 0).is_empty());
    }

    #[test]
    fn opposite_item_on_even_ring_stays_positive() {
        assert_eq!(normalize_offset(2, 0, 4), 2);
        assert_eq!(normalize_offset(0, 2, 4), -2);
    }
}
