// Host-side tests for the colour theme and scroll-driven effects.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod theme {
    include!("../src/core/theme.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::*;
use theme::*;

#[test]
fn stored_theme_defaults_to_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn toggling_round_trips_through_storage_value() {
    let t = Theme::Dark.toggled();
    assert_eq!(t, Theme::Light);
    assert_eq!(Theme::from_stored(Some(t.as_str())), Theme::Light);
    assert_eq!(t.toggled(), Theme::Dark);
    assert_eq!(THEME_STORAGE_KEY, "theme");
}

#[test]
fn icon_matches_theme() {
    assert!(Theme::Dark.shows_sun_icon());
    assert!(!Theme::Light.shows_sun_icon());
}

#[test]
fn scroll_progress_spans_scrollable_range() {
    assert_eq!(scroll_progress_percent(0.0, 2000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(500.0, 2000.0, 1000.0), 50.0);
    assert_eq!(scroll_progress_percent(1000.0, 2000.0, 1000.0), 100.0);
    // overscroll on touch devices
    assert_eq!(scroll_progress_percent(1200.0, 2000.0, 1000.0), 100.0);
    assert_eq!(scroll_progress_percent(-30.0, 2000.0, 1000.0), 0.0);
}

#[test]
fn short_pages_report_zero() {
    assert_eq!(scroll_progress_percent(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress_percent(10.0, 600.0, 800.0), 0.0);
    assert_eq!(scroll_progress_percent(f64::NAN, 2000.0, 1000.0), 0.0);
}

#[test]
fn parallax_moves_against_scroll() {
    assert_eq!(parallax_offset(0.0, 0.5), 0.0);
    assert_eq!(parallax_offset(200.0, 0.5), -100.0);
    assert_eq!(parallax_offset(200.0, 1.5), -300.0);
    assert_eq!(parallax_transform(200.0, 0.25), "translateY(-50px)");
}

#[test]
fn parallax_speed_defaults_to_half() {
    assert_eq!(parallax_speed(None), 0.5);
    assert_eq!(parallax_speed(Some("")), 0.5);
    assert_eq!(parallax_speed(Some("fast")), 0.5);
    assert_eq!(parallax_speed(Some(" 0.8 ")), 0.8);
    assert_eq!(parallax_speed(Some("0")), 0.0);
    assert_eq!(parallax_offset(100.0, parallax_speed(None)), -50.0);
}

#[test]
fn anchor_jump_clears_the_header() {
    // target 500 px below the viewport top, page already scrolled 300 px
    assert_eq!(anchor_scroll_top(500.0, 300.0), 720.0);
    // target above the viewport
    assert_eq!(anchor_scroll_top(-200.0, 1000.0), 720.0);
}

#[test]
fn only_in_page_anchors_scroll() {
    assert_eq!(anchor_selector("#releases"), Some("#releases"));
    assert_eq!(anchor_selector("#"), None);
    assert_eq!(anchor_selector("blog.html#post"), None);
    assert_eq!(anchor_selector(""), None);
}
