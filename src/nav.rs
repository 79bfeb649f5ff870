use crate::constants::{NAV_LINKS_ID, NAV_TOGGLE_ID, SCROLL_PROGRESS_ID};
use crate::core::scroll::scroll_progress_percent;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_menu_open(toggle: &web::Element, links: &web::Element, open: bool) {
    dom::set_active(links, open);
    dom::set_active(toggle, open);
    _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
}

/// Hamburger menu: the toggle flips it, following any link closes it.
pub fn wire_menu(document: &web::Document) {
    let (Some(toggle), Some(links)) = (
        document.get_element_by_id(NAV_TOGGLE_ID),
        document.get_element_by_id(NAV_LINKS_ID),
    ) else {
        return;
    };

    let (t, l) = (toggle.clone(), links.clone());
    dom::add_listener(&toggle, "click", move |_| {
        let open = !l.class_list().contains(crate::constants::ACTIVE_CLASS);
        set_menu_open(&t, &l, open);
    });

    let (t, l) = (toggle.clone(), links.clone());
    dom::add_listener(&links, "click", move |ev| {
        let is_link = ev
            .target()
            .and_then(|target| target.dyn_into::<web::Element>().ok())
            .map(|el| el.tag_name().eq_ignore_ascii_case("a"))
            .unwrap_or(false);
        if is_link {
            set_menu_open(&t, &l, false);
        }
    });
}

/// Thin bar across the top whose width tracks how far the page is scrolled.
pub fn wire_scroll_progress(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    let markup = format!(r#"<div class="scroll-progress" id="{}"></div>"#, SCROLL_PROGRESS_ID);
    _ = body.insert_adjacent_html("afterbegin", &markup);

    let doc = document.clone();
    dom::add_window_listener("scroll", move |_| {
        let (Some(window), Some(root)) = (web::window(), doc.document_element()) else {
            return;
        };
        let scrolled = scroll_progress_percent(
            window.scroll_y().unwrap_or(0.0),
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        if let Some(bar) = dom::element_as::<web::HtmlElement>(&doc, SCROLL_PROGRESS_ID) {
            _ = bar.style().set_property("width", &format!("{}%", scrolled));
        }
    });
}
