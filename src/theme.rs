use crate::constants::THEME_TOGGLE_ID;
use crate::core::theme::THEME_STORAGE_KEY;
use crate::core::Theme;
use crate::dom;
use crate::markup;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load() -> Theme {
    let stored = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

fn persist(theme: Theme) {
    if let Some(s) = storage() {
        if s.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
            log::warn!("[theme] could not persist preference");
        }
    }
}

fn set_icon_display(document: &web::Document, selector: &str, visible: bool) {
    if let Some(el) = document.query_selector(selector).ok().flatten() {
        let display = if visible { "display:block" } else { "display:none" };
        _ = el.set_attribute("style", display);
    }
}

pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("data-theme", theme.as_str());
    }
    set_icon_display(document, ".sun-icon", theme.shows_sun_icon());
    set_icon_display(document, ".moon-icon", !theme.shows_sun_icon());
}

/// Apply the stored theme, mount the toggle into the header and wire it.
pub fn init(document: &web::Document) {
    let theme = load();
    if let Some(header) = document.query_selector("header").ok().flatten() {
        _ = header.insert_adjacent_html("beforeend", markup::THEME_TOGGLE);
    }
    apply(document, theme);
    log::info!("[theme] {}", theme.as_str());

    let current = Rc::new(Cell::new(theme));
    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let next = current.get().toggled();
        current.set(next);
        apply(&doc, next);
        persist(next);
    });
}
