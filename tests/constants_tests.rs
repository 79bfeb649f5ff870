// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_MAX_SPEED > 0.0);

    // Radius range is half-open and non-empty
    assert!(PARTICLE_RADIUS_MIN > 0.0);
    assert!(PARTICLE_RADIUS_MAX > PARTICLE_RADIUS_MIN);

    assert!(LINK_DISTANCE > 0.0);
    assert!(POINTER_INFLUENCE_RADIUS > 0.0);
    assert!(POINTER_MAX_PUSH > 0.0);
    assert!(LINK_LINE_WIDTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visualizer_constants_have_logical_relationships() {
    // Analyser transform size must be a power of two in the Web Audio range
    assert!(FFT_SIZE.is_power_of_two());
    assert!((32..=32768).contains(&FFT_SIZE));

    // Waveform midpoint is the centre of the byte range
    assert_eq!(WAVE_MIDPOINT, (BYTE_MAX + 1.0) / 2.0);

    // Bars never exceed the surface height
    assert!(BAR_HEIGHT_SCALE > 0.0 && BAR_HEIGHT_SCALE <= 1.0);
    assert!(BAR_HUE_START + BAR_HUE_SPAN <= 360.0);

    // Trails are translucent, the waveform fades slower than the bars
    assert!(BAR_TRAIL_ALPHA > 0.0 && BAR_TRAIL_ALPHA < 1.0);
    assert!(WAVE_TRAIL_ALPHA > 0.0 && WAVE_TRAIL_ALPHA < BAR_TRAIL_ALPHA);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn player_and_search_defaults() {
    assert!(DEFAULT_VOLUME_PERCENT <= 100);
    assert!(SEARCH_MIN_QUERY_CHARS >= 1);
}

#[test]
fn dom_ids_are_unique() {
    let ids = [
        PARTICLE_CANVAS_ID,
        VISUALIZER_CANVAS_ID,
        VISUALIZER_TOGGLE_ID,
        PLAYER_ID,
        PLAYER_TITLE_ID,
        PLAYER_ARTIST_ID,
        PLAYER_ART_ID,
        PLAYER_PLAY_ID,
        PLAYER_PREV_ID,
        PLAYER_NEXT_ID,
        PLAY_ICON_ID,
        PAUSE_ICON_ID,
        PROGRESS_BAR_ID,
        PROGRESS_FILL_ID,
        CURRENT_TIME_ID,
        DURATION_ID,
        VOLUME_SLIDER_ID,
        PLAYLIST_BUTTON_ID,
        PLAYLIST_MODAL_ID,
        PLAYLIST_CLOSE_ID,
        PLAYLIST_ITEMS_ID,
        SEARCH_TRIGGER_ID,
        SEARCH_MODAL_ID,
        SEARCH_CLOSE_ID,
        SEARCH_INPUT_ID,
        SEARCH_RESULTS_ID,
        THEME_TOGGLE_ID,
        NAV_TOGGLE_ID,
        NAV_LINKS_ID,
        SCROLL_PROGRESS_ID,
    ];
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
    assert!(PARTICLE_CANVAS_STYLE.contains("pointer-events:none"));
}
