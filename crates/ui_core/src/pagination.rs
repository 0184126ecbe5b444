//! Windowed page-number sequences for pagination controls.

/// One rendered slot in a pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A concrete page number.
    Page(u32),
    /// A gap between page-number runs.
    Ellipsis,
}

/// Maximum page count rendered without ellipsis gaps.
const FULL_RUN_LIMIT: u32 = 7;

/// Computes the page-item sequence for `current` of `total` pages.
///
/// Up to seven pages render as a full run. Beyond that the strip keeps
/// the first and last page visible and windows around the current page:
/// the first five pages near the left edge, the last five near the right
/// edge, and `current - 1 ..= current + 1` between two gaps otherwise.
/// Out-of-range input is clamped into `1..=total` before windowing.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    if total <= FULL_RUN_LIMIT {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = Vec::new();
    if current <= 3 {
        items.extend((1..=5).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    } else if current >= total - 2 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((total - 4..=total).map(PageItem::Page));
    } else {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((current - 1..=current + 1).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    }
    items
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn middle_page_windows_around_current() {
        assert_eq!(
            page_items(50, 100),
            vec![
                Page(1),
                Ellipsis,
                Page(49),
                Page(50),
                Page(51),
                Ellipsis,
                Page(100),
            ]
        );
    }

    #[test]
    fn seven_or_fewer_pages_render_in_full() {
        assert_eq!(
            page_items(4, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn left_edge_shows_the_first_five_pages() {
        assert_eq!(
            page_items(2, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn right_edge_shows_the_last_five_pages() {
        assert_eq!(
            page_items(19, 20),
            vec![
                Page(1),
                Ellipsis,
                Page(16),
                Page(17),
                Page(18),
                Page(19),
                Page(20),
            ]
        );
    }

    #[test]
    fn boundary_between_edge_and_window_is_exclusive() {
        assert_eq!(
            page_items(4, 20),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(20),
            ]
        );
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(page_items(0, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_items(99, 9),
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Page(8), Page(9)]
        );
    }
}
