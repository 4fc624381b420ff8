use gloo_console::log;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

pub const HEADER_SELECTOR: &str = ".site-header";

/// Whether the header should switch to its compact "scrolled" look.
pub fn is_past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Document-relative y that puts an element just below the fixed header.
/// `element_top` is the viewport-relative top from `getBoundingClientRect`.
pub fn offset_target(element_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    (element_top + scroll_y - header_height).max(0.0)
}

/// `#contact` -> `contact`. Bare `#` and non-fragment hrefs are not anchors.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn header_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(HEADER_SELECTOR).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Smooth-scrolls to the element with `id`, compensating for the header.
/// Returns false when there's nothing to scroll to.
pub fn scroll_to_id(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log!("scroll target missing:", id);
        return false;
    };

    let top = target.get_bounding_client_rect().top();
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    let mut options = ScrollToOptions::new();
    options.top(offset_target(top, scroll_y, header_height()));
    options.behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Locks page scrolling behind the mobile menu.
pub fn set_scroll_lock(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_past_threshold(0.0, 50.0));
        assert!(!is_past_threshold(50.0, 50.0));
        assert!(is_past_threshold(50.5, 50.0));
    }

    #[test]
    fn offset_accounts_for_header_and_current_scroll() {
        assert_eq!(offset_target(400.0, 1_000.0, 80.0), 1_320.0);
        assert_eq!(offset_target(-200.0, 1_000.0, 80.0), 720.0);
        // Never scroll above the top of the page.
        assert_eq!(offset_target(20.0, 0.0, 80.0), 0.0);
    }

    #[test]
    fn only_fragment_hrefs_are_anchors() {
        assert_eq!(anchor_id("#programs"), Some("programs"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/pricing"), None);
    }

    #[test]
    fn restored_mid_page_position_counts_as_scrolled() {
        assert!(is_past_threshold(1_200.0, crate::config::STICKY_HEADER_THRESHOLD));
        assert!(!is_past_threshold(0.0, crate::config::STICKY_HEADER_THRESHOLD));
    }
}
