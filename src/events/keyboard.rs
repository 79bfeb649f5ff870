use crate::core::search::{shortcut_for_key, SearchShortcut};
use crate::dom;
use crate::overlay;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, document: &web::Document) {
    match shortcut_for_key(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
        Some(SearchShortcut::Open) => {
            ev.prevent_default();
            overlay::open(document);
        }
        Some(SearchShortcut::Close) => overlay::close(document),
        None => {}
    }
}

pub fn wire_global_keydown(document: web::Document) {
    let target = document.clone();
    dom::add_listener(&target, "keydown", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_global_keydown(ev, &document);
        }
    });
}
