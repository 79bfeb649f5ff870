//! Scroll-triggered reveals, parallax, smooth anchor jumps and the
//! `loaded` body class.

use crate::constants::*;
use crate::core::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::core::scroll::{anchor_scroll_top, anchor_selector, parallax_speed, parallax_transform};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn select_all<T: JsCast>(document: &web::Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Mark sections and cards for the reveal transition and flip them to
/// `animate-in` the first time they enter the viewport.
pub fn wire_reveal(document: &web::Document) {
    let targets = select_all::<web::Element>(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }

    let on_entries = Closure::wrap(Box::new(|entries: js_sys::Array, _: web::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                _ = entry.target().class_list().add_1(REVEAL_DONE_CLASS);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = match web::IntersectionObserver::new_with_options(
        on_entries.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[animations] no IntersectionObserver: {:?}", e);
            return;
        }
    };
    on_entries.forget();

    for el in &targets {
        _ = el.class_list().add_1(REVEAL_PENDING_CLASS);
        observer.observe(el);
    }
    log::info!("[animations] observing {} elements", targets.len());
}

/// Translate every `.parallax` element against the scroll position.
pub fn wire_parallax(document: &web::Document) {
    let elements = select_all::<web::HtmlElement>(document, PARALLAX_SELECTOR);
    if elements.is_empty() {
        return;
    }
    dom::add_window_listener("scroll", move |_| {
        let scroll_y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        for el in &elements {
            let speed = parallax_speed(el.get_attribute(PARALLAX_SPEED_ATTR).as_deref());
            _ = el
                .style()
                .set_property("transform", &parallax_transform(scroll_y, speed));
        }
    });
}

/// Smooth-scroll in-page links so the target clears the fixed header.
pub fn wire_anchor_links(document: &web::Document) {
    for anchor in select_all::<web::Element>(document, ANCHOR_SELECTOR) {
        let (doc, link) = (document.clone(), anchor.clone());
        dom::add_listener(&anchor, "click", move |ev| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            ev.prevent_default();
            let (Some(window), Some(target)) =
                (web::window(), doc.query_selector(selector).ok().flatten())
            else {
                return;
            };
            let top = anchor_scroll_top(
                target.get_bounding_client_rect().top(),
                window.scroll_y().unwrap_or(0.0),
            );
            let options = web::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
}

/// Add `loaded` to `<body>` once the window has finished loading.
pub fn wire_loaded(document: &web::Document) {
    let mark = {
        let doc = document.clone();
        move || {
            if let Some(body) = doc.body() {
                _ = body.class_list().add_1(LOADED_CLASS);
            }
        }
    };
    // Startup is async, so `load` may already have fired.
    if document.ready_state() == "complete" {
        mark();
    } else {
        dom::add_window_listener("load", move |_| mark());
    }
}
