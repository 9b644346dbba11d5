/// Rows-per-page choices offered by paged tables.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 20];

/// Zero-based page window `[page * size, page * size + size)`. A page past
/// the end, or a zero page size, yields an empty slice.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page.checked_mul(page_size) else {
        return &[];
    };
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows() {
        let rows: Vec<u32> = (0..12).collect();
        assert_eq!(paginate(&rows, 0, 5), &[0, 1, 2, 3, 4]);
        assert_eq!(paginate(&rows, 2, 5), &[10, 11]);
        assert!(paginate(&rows, 3, 5).is_empty());
        assert!(paginate(&rows, 1, 0).is_empty());
        assert!(paginate(&rows, usize::MAX, 5).is_empty());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(12, 5), 3);
        assert_eq!(page_count(10, 5), 2);
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(3, 0), 0);
    }
}
