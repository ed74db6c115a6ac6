//! Page arithmetic over the enabled-section list.
//!
//! The session stores a 1-based `page_number`; these functions clamp it
//! into the current enabled-section range and step it by one page at a
//! time. The navigation deliberately moves by exactly one page in each
//! direction and re-clamps the result.

/// Clamp a 1-based page number into `[0, total - 1]` as a 0-based
/// index. With no pages there is nothing to address.
pub fn effective_index(page_number: u32, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    let zero_based = page_number.saturating_sub(1) as usize;
    Some(zero_based.min(total - 1))
}

/// 1-based page number one page back from the current position.
pub fn previous_page(page_number: u32, total: usize) -> u32 {
    match effective_index(page_number, total) {
        Some(index) => index.saturating_sub(1) as u32 + 1,
        None => 1,
    }
}

/// 1-based page number one page forward from the current position.
pub fn next_page(page_number: u32, total: usize) -> u32 {
    match effective_index(page_number, total) {
        Some(index) => ((index + 1).min(total - 1)) as u32 + 1,
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_into_range() {
        assert_eq!(effective_index(1, 4), Some(0));
        assert_eq!(effective_index(4, 4), Some(3));
        assert_eq!(effective_index(9, 4), Some(3));
        assert_eq!(effective_index(0, 4), Some(0));
    }

    #[test]
    fn test_no_page_addressable_when_empty() {
        assert_eq!(effective_index(1, 0), None);
        assert_eq!(effective_index(7, 0), None);
    }

    // Pins the corrected one-page-at-a-time navigation: next from page
    // k lands on k + 1 (not k + 2) and previous from page k lands on
    // k - 1 (not k), both clamped at the ends.
    #[test]
    fn test_navigation_moves_exactly_one_page() {
        assert_eq!(next_page(1, 4), 2);
        assert_eq!(next_page(2, 4), 3);
        assert_eq!(previous_page(3, 4), 2);
        assert_eq!(previous_page(2, 4), 1);
    }

    #[test]
    fn test_navigation_saturates_at_the_ends() {
        assert_eq!(previous_page(1, 4), 1);
        assert_eq!(next_page(4, 4), 4);
        assert_eq!(next_page(1, 1), 1);
        assert_eq!(previous_page(1, 1), 1);
    }

    #[test]
    fn test_navigation_on_empty_list_stays_home() {
        assert_eq!(previous_page(5, 0), 1);
        assert_eq!(next_page(5, 0), 1);
    }

    proptest! {
        #[test]
        fn prop_effective_index_is_in_range(page in 0u32..1000, total in 1usize..16) {
            let index = effective_index(page, total).unwrap();
            prop_assert!(index < total);
        }

        #[test]
        fn prop_navigation_results_stay_in_range(page in 0u32..1000, total in 1usize..16) {
            let prev = previous_page(page, total);
            let next = next_page(page, total);
            prop_assert!(effective_index(prev, total).unwrap() < total);
            prop_assert!(effective_index(next, total).unwrap() < total);
            prop_assert!(prev >= 1 && prev as usize <= total);
            prop_assert!(next >= 1 && next as usize <= total);
        }

        #[test]
        fn prop_prev_then_next_returns_to_interior_pages(total in 3usize..16, offset in 0usize..12) {
            // Start on an interior page so neither step saturates.
            let page = (2 + offset.min(total - 3)) as u32;
            let stepped = next_page(previous_page(page, total), total);
            prop_assert_eq!(stepped, page);
        }
    }
}
