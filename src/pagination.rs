use serde::Serialize;

/// One bounded slice of an ordered sequence plus enough metadata for page
/// navigation. A request past the last page yields an empty slice with
/// `has_next = false` rather than an error, matching conventional paginator
/// behavior.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Slices `items` into the 1-based page `page_index` of `page_size` entries.
/// Indices below 1 clamp to 1. `total_pages` is at least 1 even for an empty
/// sequence.
pub fn paginate<T>(items: Vec<T>, page_size: usize, page_index: usize) -> Page<T> {
    assert!(page_size > 0, "page size must be positive");
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page_index = page_index.max(1);
    let start = (page_index - 1).saturating_mul(page_size);
    let page_items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();
    Page {
        has_next: page_index < total_pages,
        has_prev: page_index > 1,
        items: page_items,
        page_index,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_partition_the_sequence() {
        let items: Vec<i32> = (0..25).collect();
        let mut seen = Vec::new();
        for index in 1..=3 {
            let page = paginate(items.clone(), 10, index);
            assert_eq!(page.page_index, index);
            assert_eq!(page.total_pages, 3);
            seen.extend(page.items);
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn past_the_end_is_an_empty_page() {
        let items: Vec<i32> = (0..25).collect();
        let page = paginate(items, 10, 4);
        assert!(page.items.is_empty());
        assert!(!page.has_next);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn index_below_one_clamps_to_first_page() {
        let items: Vec<i32> = (0..5).collect();
        let page = paginate(items, 10, 0);
        assert_eq!(page.page_index, 1);
        assert_eq!(page.items.len(), 5);
        assert!(!page.has_prev);
    }

    #[test]
    fn empty_sequence_still_has_one_page() {
        let page = paginate(Vec::<i32>::new(), 10, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn middle_page_links_both_ways() {
        let items: Vec<i32> = (0..25).collect();
        let page = paginate(items, 10, 2);
        assert_eq!(page.items.len(), 10);
        assert!(page.has_next);
        assert!(page.has_prev);
    }
}
