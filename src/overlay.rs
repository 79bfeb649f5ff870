//! Search overlay: trigger button, modal, and the results panel.

use crate::constants::*;
use crate::core::search::render_results;
use crate::core::SearchIndex;
use crate::dom;
use crate::markup;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Insert the overlay into the page header; `false` when there is none.
pub fn mount(document: &web::Document) -> bool {
    match document.query_selector("header").ok().flatten() {
        Some(header) => header
            .insert_adjacent_html("beforeend", markup::SEARCH)
            .is_ok(),
        None => false,
    }
}

#[inline]
pub fn open(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SEARCH_MODAL_ID) {
        dom::set_active(&el, true);
    }
    if let Some(input) = dom::element_as::<web::HtmlElement>(document, SEARCH_INPUT_ID) {
        _ = input.focus();
    }
}

#[inline]
pub fn close(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SEARCH_MODAL_ID) {
        dom::set_active(&el, false);
    }
    if let Some(input) = dom::element_as::<web::HtmlInputElement>(document, SEARCH_INPUT_ID) {
        input.set_value("");
    }
    clear_results(document);
}

pub fn clear_results(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SEARCH_RESULTS_ID) {
        el.set_inner_html("");
    }
}

/// Run `query` against the index and refresh the results panel.
pub fn update_results(document: &web::Document, index: &SearchIndex, query: &str) {
    let Some(el) = document.get_element_by_id(SEARCH_RESULTS_ID) else {
        return;
    };
    match index.search(query) {
        Some(results) => el.set_inner_html(&render_results(&results)),
        None => el.set_inner_html(""),
    }
}

pub fn wire(document: &web::Document, index: Rc<RefCell<SearchIndex>>) {
    let doc = document.clone();
    dom::add_click_listener(document, SEARCH_TRIGGER_ID, move || open(&doc));

    let doc = document.clone();
    dom::add_click_listener(document, SEARCH_CLOSE_ID, move || close(&doc));

    if let Some(modal) = document.get_element_by_id(SEARCH_MODAL_ID) {
        let doc = document.clone();
        let backdrop = modal.clone();
        dom::add_listener(&modal, "click", move |ev| {
            if dom::event_targets(&ev, &backdrop) {
                close(&doc);
            }
        });
    }

    if let Some(input) = dom::element_as::<web::HtmlInputElement>(document, SEARCH_INPUT_ID) {
        let doc = document.clone();
        let field = input.clone();
        dom::add_listener(&input, "input", move |_| {
            update_results(&doc, &index.borrow(), &field.value());
        });
    }
}
