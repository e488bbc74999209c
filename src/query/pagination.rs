//! Page window arithmetic and page-number navigation.

/// Invoices shown per page.
pub const PAGE_SIZE: u64 = 6;

/// Skip/limit window for a 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

impl PageWindow {
    /// Window for `page`. Page `0` is treated as the first page.
    pub fn for_page(page: u32) -> Self {
        let page = u64::from(page.max(1));

        Self {
            offset: (page - 1) * PAGE_SIZE,
            limit: PAGE_SIZE,
        }
    }
}

/// Number of pages needed for `total` matches. Never less than 1.
pub fn total_pages(total: u64) -> u32 {
    if total == 0 {
        return 1;
    }

    u32::try_from(total.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
}

/// Entry in a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page numbers to display for `current` out of `total` pages.
pub fn generate_pagination(current: u32, total: u32) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total <= 7 {
        return (1..=total).map(Page).collect();
    }

    if current <= 3 {
        return vec![Page(1), Page(2), Page(3), Ellipsis, Page(total - 1), Page(total)];
    }

    if current >= total - 2 {
        return vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ];
    }

    vec![
        Page(1),
        Ellipsis,
        Page(current - 1),
        Page(current),
        Page(current + 1),
        Ellipsis,
        Page(total),
    ]
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn window_offsets() {
        assert_eq!(PageWindow::for_page(1), PageWindow { offset: 0, limit: 6 });
        assert_eq!(PageWindow::for_page(3).offset, 12);
        assert_eq!(PageWindow::for_page(0), PageWindow::for_page(1));
    }

    #[test]
    fn total_pages_rounds_up_and_floors_at_one() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn short_ranges_list_every_page() {
        assert_eq!(generate_pagination(1, 0), vec![]);
        assert_eq!(generate_pagination(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(generate_pagination(1, 7).len(), 7);
    }

    #[test]
    fn near_the_start() {
        assert_eq!(
            generate_pagination(2, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn near_the_end() {
        assert_eq!(
            generate_pagination(9, 10),
            vec![Page(1), Page(2), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn in_the_middle() {
        assert_eq!(
            generate_pagination(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }
}
