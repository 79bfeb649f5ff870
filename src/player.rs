//! Mock music player: transport controls, progress, volume and the
//! playlist modal. Track audio is never actually loaded.

use crate::constants::*;
use crate::core::playlist::{format_time, progress_percent, seek_target, Track};
use crate::core::search::escape_html;
use crate::core::Playlist;
use crate::dom;
use crate::markup;
use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn playlist_markup(playlist: &Playlist) -> String {
    let mut html = String::new();
    for (i, t) in playlist.tracks().iter().enumerate() {
        let active = if i == playlist.current_index() { " active" } else { "" };
        _ = write!(
            html,
            "<div class=\"playlist-item{active}\" data-index=\"{i}\">\
             <img src=\"{cover}\" alt=\"{album}\">\
             <div class=\"playlist-item-info\">\
             <div class=\"playlist-item-title\">{title}</div>\
             <div class=\"playlist-item-artist\">{artist}</div></div>\
             <div class=\"playlist-item-duration\">{duration}</div></div>",
            cover = escape_html(&t.cover),
            album = escape_html(&t.album),
            title = escape_html(&t.title),
            artist = escape_html(&t.artist),
            duration = escape_html(&t.duration),
        );
    }
    html
}

fn render_playlist(document: &web::Document, playlist: &Playlist) {
    if let Some(el) = document.get_element_by_id(PLAYLIST_ITEMS_ID) {
        el.set_inner_html(&playlist_markup(playlist));
    }
}

fn show_track(document: &web::Document, track: &Track) {
    dom::set_text(document, PLAYER_TITLE_ID, &track.title);
    dom::set_text(document, PLAYER_ARTIST_ID, &track.artist);
    if let Some(art) = document.get_element_by_id(PLAYER_ART_ID) {
        let src = if track.cover.is_empty() {
            DEFAULT_COVER
        } else {
            track.cover.as_str()
        };
        _ = art.set_attribute("src", src);
    }
}

fn show_playing(document: &web::Document, playing: bool) {
    dom::set_visible(document, PLAY_ICON_ID, !playing);
    dom::set_visible(document, PAUSE_ICON_ID, playing);
}

fn refresh(document: &web::Document, playlist: &Playlist) {
    if let Some(track) = playlist.current() {
        show_track(document, track);
    }
    render_playlist(document, playlist);
    show_playing(document, playlist.is_playing());
}

/// Mount the player at the end of `<body>` and wire its controls.
///
/// Returns the player's media element, the visualizer's signal source.
pub fn init(document: &web::Document, playlist: Playlist) -> Option<web::HtmlAudioElement> {
    let body = document.body()?;
    if body.insert_adjacent_html("beforeend", markup::PLAYER).is_err() {
        log::error!("[player] could not mount markup");
        return None;
    }
    let audio = match web::HtmlAudioElement::new() {
        Ok(a) => a,
        Err(e) => {
            log::error!("[player] no audio element: {:?}", e);
            return None;
        }
    };
    log::info!("[player] {} tracks", playlist.tracks().len());
    let playlist = Rc::new(RefCell::new(playlist));
    render_playlist(document, &playlist.borrow());

    wire_transport(document, &playlist);
    wire_progress(document, &audio);
    wire_volume(document, &playlist, &audio);
    wire_playlist_modal(document, &playlist);
    wire_media_events(document, &playlist, &audio);

    Some(audio)
}

fn wire_transport(document: &web::Document, playlist: &Rc<RefCell<Playlist>>) {
    let (doc, pl) = (document.clone(), playlist.clone());
    dom::add_click_listener(document, PLAYER_PLAY_ID, move || {
        let playing = pl.borrow_mut().toggle_play();
        show_playing(&doc, playing);
    });

    let (doc, pl) = (document.clone(), playlist.clone());
    dom::add_click_listener(document, PLAYER_PREV_ID, move || {
        let mut p = pl.borrow_mut();
        if p.previous().is_some() {
            refresh(&doc, &p);
        }
    });

    let (doc, pl) = (document.clone(), playlist.clone());
    dom::add_click_listener(document, PLAYER_NEXT_ID, move || {
        let mut p = pl.borrow_mut();
        if p.next().is_some() {
            refresh(&doc, &p);
        }
    });
}

fn wire_progress(document: &web::Document, audio: &web::HtmlAudioElement) {
    let Some(bar) = dom::element_as::<web::HtmlElement>(document, PROGRESS_BAR_ID) else {
        return;
    };
    let (audio, target) = (audio.clone(), bar.clone());
    dom::add_listener(&bar, "click", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if let Some(t) = seek_target(
            ev.offset_x() as f64,
            target.offset_width() as f64,
            audio.duration(),
        ) {
            audio.set_current_time(t);
        }
    });
}

fn wire_volume(
    document: &web::Document,
    playlist: &Rc<RefCell<Playlist>>,
    audio: &web::HtmlAudioElement,
) {
    let initial = playlist.borrow().volume_percent() as f64;
    audio.set_volume(playlist.borrow_mut().set_volume_percent(initial));

    let Some(slider) = dom::element_as::<web::HtmlInputElement>(document, VOLUME_SLIDER_ID) else {
        return;
    };
    let (pl, audio, input) = (playlist.clone(), audio.clone(), slider.clone());
    dom::add_listener(&slider, "input", move |_| {
        let percent = input.value().parse::<f64>().unwrap_or(f64::NAN);
        audio.set_volume(pl.borrow_mut().set_volume_percent(percent));
    });
}

fn wire_playlist_modal(document: &web::Document, playlist: &Rc<RefCell<Playlist>>) {
    let Some(modal) = document.get_element_by_id(PLAYLIST_MODAL_ID) else {
        return;
    };

    let m = modal.clone();
    dom::add_click_listener(document, PLAYLIST_BUTTON_ID, move || dom::set_active(&m, true));
    let m = modal.clone();
    dom::add_click_listener(document, PLAYLIST_CLOSE_ID, move || dom::set_active(&m, false));
    let m = modal.clone();
    dom::add_listener(&modal, "click", move |ev| {
        if dom::event_targets(&ev, &m) {
            dom::set_active(&m, false);
        }
    });

    // One delegated listener; rows are re-rendered on every track change.
    let Some(items) = document.get_element_by_id(PLAYLIST_ITEMS_ID) else {
        return;
    };
    let (doc, pl) = (document.clone(), playlist.clone());
    dom::add_listener(&items, "click", move |ev| {
        let index = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(".playlist-item").ok().flatten())
            .and_then(|row| row.get_attribute("data-index"))
            .and_then(|i| i.parse::<usize>().ok());
        if let Some(index) = index {
            let mut p = pl.borrow_mut();
            if p.select(index).is_some() {
                p.play();
                refresh(&doc, &p);
            }
        }
    });
}

fn wire_media_events(
    document: &web::Document,
    playlist: &Rc<RefCell<Playlist>>,
    audio: &web::HtmlAudioElement,
) {
    let (doc, a) = (document.clone(), audio.clone());
    dom::add_listener(audio, "timeupdate", move |_| {
        let percent = progress_percent(a.current_time(), a.duration());
        if let Some(fill) = dom::element_as::<web::HtmlElement>(&doc, PROGRESS_FILL_ID) {
            _ = fill.style().set_property("width", &format!("{}%", percent));
        }
        dom::set_text(&doc, CURRENT_TIME_ID, &format_time(a.current_time()));
    });

    let (doc, a) = (document.clone(), audio.clone());
    dom::add_listener(audio, "loadedmetadata", move |_| {
        dom::set_text(&doc, DURATION_ID, &format_time(a.duration()));
    });

    let (doc, pl) = (document.clone(), playlist.clone());
    dom::add_listener(audio, "ended", move |_| {
        let mut p = pl.borrow_mut();
        if p.next().is_some() {
            refresh(&doc, &p);
        }
    });
}
