//! Pagination window calculator.
//!
//! Maps a result-set size, a page size and the current page to the ordered set
//! of buttons the pagination bar shows: a sliding window of at most
//! [`MAX_PAGINATION_BUTTONS`] page numbers around the current page, plus
//! first/previous/next/last jumps once the window no longer covers every page.

use serde::Serialize;

use crate::constants::MAX_PAGINATION_BUTTONS;

/// Half the window width, rounded down.
const HALF_WINDOW: u32 = MAX_PAGINATION_BUTTONS / 2;

/// Jump buttons placed around the numbered window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavAction {
    First,
    Prev,
    Next,
    Last,
}

impl NavAction {
    /// Label shown on the button.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::First => "<<",
            Self::Prev => "<",
            Self::Next => ">",
            Self::Last => ">>",
        }
    }
}

/// One button of a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageButton {
    /// A numbered page, flagged when it is the page being shown.
    Page { number: u32, current: bool },
    /// A jump, carrying the page it leads to.
    Nav { action: NavAction, target: u32 },
}

impl PageButton {
    /// The page this button navigates to.
    #[must_use]
    pub const fn target(&self) -> u32 {
        match *self {
            Self::Page { number, .. } => number,
            Self::Nav { target, .. } => target,
        }
    }
}

/// Buttons to render for one listing, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaginationPlan {
    pub total_pages: u32,
    /// Current page after clamping into `1..=total_pages`.
    pub current_page: u32,
    pub buttons: Vec<PageButton>,
}

impl PaginationPlan {
    /// True when no pagination controls should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// True when the result set is empty and an empty-state message belongs
    /// where the pagination bar would be.
    #[must_use]
    pub fn is_no_results(&self) -> bool {
        self.total_pages == 0
    }

    /// Numbered pages in the window, in order.
    pub fn page_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.buttons.iter().filter_map(|b| match *b {
            PageButton::Page { number, .. } => Some(number),
            PageButton::Nav { .. } => None,
        })
    }

    /// First and last page of the numbered window, if any.
    #[must_use]
    pub fn window(&self) -> Option<(u32, u32)> {
        let mut pages = self.page_numbers();
        let start = pages.next()?;
        let end = pages.last().unwrap_or(start);
        Some((start, end))
    }

    /// Whether the plan contains the given jump.
    #[must_use]
    pub fn has(&self, action: NavAction) -> bool {
        self.buttons
            .iter()
            .any(|b| matches!(b, PageButton::Nav { action: a, .. } if *a == action))
    }
}

/// Number of pages needed for `total_items` at `page_size` items per page.
///
/// A page size of zero is treated as one. Counts past `u32::MAX` saturate.
#[must_use]
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let pages = total_items.div_ceil(u64::from(page_size.max(1)));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Compute the pagination bar for a listing.
///
/// `current_page` outside `1..=total_pages` is clamped into range.
#[must_use]
pub fn plan(total_items: u64, page_size: u32, current_page: u32) -> PaginationPlan {
    let total = total_pages(total_items, page_size);
    let current = current_page.clamp(1, total.max(1));

    let mut plan = PaginationPlan {
        total_pages: total,
        current_page: current,
        buttons: Vec::new(),
    };

    if total <= 1 {
        return plan;
    }

    if total <= MAX_PAGINATION_BUTTONS {
        plan.buttons = (1..=total)
            .map(|number| PageButton::Page {
                number,
                current: number == current,
            })
            .collect();
        return plan;
    }

    let (start, end) = window_bounds(total, current);

    if current.saturating_sub(HALF_WINDOW) > 1 {
        plan.buttons.push(PageButton::Nav {
            action: NavAction::First,
            target: 1,
        });
    }
    if current > 1 {
        plan.buttons.push(PageButton::Nav {
            action: NavAction::Prev,
            target: current - 1,
        });
    }

    plan.buttons.extend((start..=end).map(|number| PageButton::Page {
        number,
        current: number == current,
    }));

    if current < total {
        plan.buttons.push(PageButton::Nav {
            action: NavAction::Next,
            target: current + 1,
        });
    }
    if total - current > HALF_WINDOW {
        plan.buttons.push(PageButton::Nav {
            action: NavAction::Last,
            target: total,
        });
    }

    plan
}

/// Inclusive window of page numbers around `current`, pinned at both ends.
fn window_bounds(total: u32, current: u32) -> (u32, u32) {
    let span = 2 * HALF_WINDOW;
    let (start, end) = if current <= MAX_PAGINATION_BUTTONS - HALF_WINDOW {
        (1, 1 + span)
    } else if current >= total.saturating_sub(HALF_WINDOW) {
        (total.saturating_sub(span), total)
    } else {
        (current - HALF_WINDOW, current + HALF_WINDOW)
    };
    (start.max(1), end.min(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(plan: &PaginationPlan) -> Vec<String> {
        plan.buttons
            .iter()
            .map(|b| match b {
                PageButton::Page { number, current } => {
                    if *current {
                        format!("{number}*")
                    } else {
                        number.to_string()
                    }
                }
                PageButton::Nav { action, .. } => action.label().to_string(),
            })
            .collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(47, 10), 5);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_no_results_is_empty() {
        let plan = plan(0, 10, 1);
        assert!(plan.is_empty());
        assert!(plan.is_no_results());
        assert_eq!(plan.current_page, 1);
    }

    #[test]
    fn test_single_page_is_empty() {
        let plan = plan(7, 10, 1);
        assert!(plan.is_empty());
        assert!(!plan.is_no_results());
    }

    #[test]
    fn test_small_result_set_has_no_jumps() {
        let plan = plan(47, 10, 1);
        assert_eq!(plan.total_pages, 5);
        assert_eq!(labels(&plan), ["1*", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_every_small_total_lists_all_pages() {
        for total in 2..=MAX_PAGINATION_BUTTONS {
            for current in 1..=total {
                let plan = plan(u64::from(total) * 10, 10, current);
                assert_eq!(plan.page_numbers().count(), total as usize);
                assert_eq!(plan.buttons.len(), total as usize);
            }
        }
    }

    #[test]
    fn test_interior_page() {
        let plan = plan(120, 10, 7);
        assert_eq!(plan.total_pages, 12);
        assert_eq!(plan.window(), Some((5, 9)));
        assert_eq!(
            labels(&plan),
            ["<<", "<", "5", "6", "7*", "8", "9", ">", ">>"]
        );
    }

    #[test]
    fn test_first_page_of_many() {
        let plan = plan(120, 10, 1);
        assert_eq!(labels(&plan), ["1*", "2", "3", "4", "5", ">", ">>"]);
    }

    #[test]
    fn test_third_page_has_prev_but_not_first() {
        let plan = plan(120, 10, 3);
        assert_eq!(labels(&plan), ["<", "1", "2", "3*", "4", "5", ">", ">>"]);
    }

    #[test]
    fn test_last_page_of_many() {
        let plan = plan(120, 10, 12);
        assert_eq!(labels(&plan), ["<<", "<", "8", "9", "10", "11", "12*"]);
    }

    #[test]
    fn test_near_end_has_next_but_not_last() {
        let plan = plan(120, 10, 10);
        assert_eq!(
            labels(&plan),
            ["<<", "<", "8", "9", "10*", "11", "12", ">"]
        );
    }

    #[test]
    fn test_nav_targets() {
        let plan = plan(120, 10, 7);
        let targets: Vec<u32> = plan.buttons.iter().map(PageButton::target).collect();
        assert_eq!(targets, [1, 6, 5, 6, 7, 8, 9, 8, 12]);
    }

    #[test]
    fn test_current_page_beyond_total_is_clamped() {
        let plan = plan(120, 10, 40);
        assert_eq!(plan.current_page, 12);
        assert_eq!(plan.window(), Some((8, 12)));
        assert!(!plan.has(NavAction::Next));
    }

    #[test]
    fn test_zero_current_page_is_clamped() {
        let plan = plan(120, 10, 0);
        assert_eq!(plan.current_page, 1);
        assert!(!plan.has(NavAction::Prev));
    }

    #[test]
    fn test_large_window_properties() {
        for total in (MAX_PAGINATION_BUTTONS + 1)..=30 {
            for current in 1..=total {
                let plan = plan(u64::from(total) * 20, 20, current);
                let (start, end) = plan.window().expect("window");

                assert_eq!(plan.page_numbers().count(), MAX_PAGINATION_BUTTONS as usize);
                assert!(plan.buttons.contains(&PageButton::Page {
                    number: current,
                    current: true
                }));
                assert_eq!(
                    plan.buttons
                        .iter()
                        .filter(|b| matches!(b, PageButton::Page { current: true, .. }))
                        .count(),
                    1
                );
                assert_eq!(plan.has(NavAction::First), start > 1, "total={total} current={current}");
                assert_eq!(plan.has(NavAction::Last), end < total, "total={total} current={current}");
                assert_eq!(plan.has(NavAction::Prev), current > 1);
                assert_eq!(plan.has(NavAction::Next), current < total);
            }
        }
    }

    #[test]
    fn test_window_slides_by_at_most_one() {
        let total = 20;
        let mut previous = plan(400, 20, 1).window().expect("window");
        assert_eq!(previous, (1, 5));
        for current in 2..=total {
            let window = plan(400, 20, current).window().expect("window");
            assert!(window.0 - previous.0 <= 1);
            assert!(window.1 - previous.1 <= 1);
            previous = window;
        }
        assert_eq!(previous, (16, 20));
    }

    #[test]
    fn test_page_count_limit() {
        assert_eq!(total_pages(u64::MAX, 1), u32::MAX);

        let near_end = plan(u64::MAX, 1, u32::MAX - 1);
        assert_eq!(near_end.total_pages, u32::MAX);
        assert!(near_end.has(NavAction::Next));
        assert!(!near_end.has(NavAction::Last));
        assert_eq!(near_end.window(), Some((u32::MAX - 4, u32::MAX)));

        let last = plan(u64::MAX, 1, u32::MAX);
        assert!(!last.has(NavAction::Next));
        assert!(!last.has(NavAction::Last));

        let before_window = plan(u64::MAX, 1, u32::MAX - 3);
        assert!(before_window.has(NavAction::Last));
        assert_eq!(before_window.window(), Some((u32::MAX - 5, u32::MAX - 1)));
    }

    #[test]
    fn test_jump_order() {
        let plan = plan(1000, 10, 50);
        assert!(matches!(
            plan.buttons[0],
            PageButton::Nav { action: NavAction::First, .. }
        ));
        assert!(matches!(
            plan.buttons[1],
            PageButton::Nav { action: NavAction::Prev, .. }
        ));
        let n = plan.buttons.len();
        assert!(matches!(
            plan.buttons[n - 2],
            PageButton::Nav { action: NavAction::Next, .. }
        ));
        assert!(matches!(
            plan.buttons[n - 1],
            PageButton::Nav { action: NavAction::Last, .. }
        ));
    }
}
