// Scroll-driven page effects: progress bar, parallax and anchor jumps.

use super::constants::{HEADER_OFFSET_PX, PARALLAX_DEFAULT_SPEED};

/// Page scroll progress in percent, `0` when the page does not scroll.
pub fn scroll_progress_percent(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// `data-speed` of a parallax element; missing, empty or unparsable values
/// fall back to the default. An explicit `0` pins the element.
pub fn parallax_speed(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(PARALLAX_DEFAULT_SPEED)
}

/// Vertical translation in pixels; elements drift up as the page scrolls.
#[inline]
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed)
}

/// CSS transform for a parallax element.
pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, speed))
}

/// Selector for an in-page anchor's target; `None` for a bare `#` or a
/// link that leaves the page.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Document scroll position that puts a target's top edge just below the
/// fixed header. `element_top` is viewport-relative.
#[inline]
pub fn anchor_scroll_top(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - HEADER_OFFSET_PX
}
