// Host-side tests for the injected markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod markup {
    include!("../src/markup.rs");
}

use constants::*;

fn has_id(html: &str, id: &str) -> bool {
    html.contains(&format!("id=\"{}\"", id))
}

#[test]
fn player_markup_carries_every_wired_id() {
    for id in [
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
    ] {
        assert!(has_id(markup::PLAYER, id), "missing #{}", id);
    }
}

#[test]
fn player_markup_has_volume_button_and_list_icon() {
    assert!(has_id(markup::PLAYER, "player-volume-btn"));
    assert!(markup::PLAYER.contains("points=\"11 5 6 9 2 9 2 15 6 15 11 19 11 5\""));

    // playlist icon: three rows plus three bullets
    let icon_start = markup::PLAYER
        .find("id=\"player-playlist-btn\"")
        .expect("playlist button");
    let icon = &markup::PLAYER[icon_start..];
    let icon = &icon[..icon.find("</svg>").expect("icon closes")];
    assert_eq!(icon.matches("<line ").count(), 6);
    assert_eq!(icon.matches("x2=\"3.01\"").count(), 3);
}

#[test]
fn pause_icon_starts_hidden() {
    let pause = markup::PLAYER
        .find("id=\"pause-icon\"")
        .expect("pause icon");
    assert!(markup::PLAYER[pause..].starts_with("id=\"pause-icon\" style=\"display: none;\""));
    assert!(markup::PLAYER.contains("value=\"70\""));
}

#[test]
fn overlay_and_toggles_carry_wired_ids() {
    for id in [
        SEARCH_TRIGGER_ID,
        SEARCH_MODAL_ID,
        SEARCH_CLOSE_ID,
        SEARCH_INPUT_ID,
        SEARCH_RESULTS_ID,
    ] {
        assert!(has_id(markup::SEARCH, id), "missing #{}", id);
    }
    assert!(has_id(markup::THEME_TOGGLE, THEME_TOGGLE_ID));
    assert!(markup::THEME_TOGGLE.contains("sun-icon"));
    assert!(markup::THEME_TOGGLE.contains("moon-icon"));
    assert!(has_id(markup::VISUALIZER_CANVAS, VISUALIZER_CANVAS_ID));
    assert!(has_id(markup::VISUALIZER_TOGGLE, VISUALIZER_TOGGLE_ID));
}
