use anyhow::anyhow;
use serde::de::DeserializeOwned;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn element_as<T: JsCast>(document: &web::Document, element_id: &str) -> Option<T> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Attach a listener that lives for the rest of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", move |_| handler());
    }
}

#[inline]
pub fn add_window_listener(event: &str, handler: impl FnMut(web::Event) + 'static) {
    if let Some(window) = web::window() {
        add_listener(&window, event, handler);
    }
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if let Some(el) = element_as::<web::HtmlElement>(document, element_id) {
        let display = if visible { "block" } else { "none" };
        _ = el.style().set_property("display", display);
    }
}

pub fn set_active(el: &web::Element, active: bool) {
    let cl = el.class_list();
    if active {
        _ = cl.add_1(crate::constants::ACTIVE_CLASS);
    } else {
        _ = cl.remove_1(crate::constants::ACTIVE_CLASS);
    }
}

/// Whether the event was dispatched on `el` itself rather than a child.
pub fn event_targets(ev: &web::Event, el: &web::Element) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|t| &t == el)
        .unwrap_or(false)
}

/// Full-window canvas: backing box equals the window's inner size.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let w_px = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h_px = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width((w_px as u32).max(1));
        canvas.set_height((h_px as u32).max(1));
    }
}

/// Embedded canvas: backing box equals its laid-out size.
pub fn sync_canvas_to_box(canvas: &web::HtmlCanvasElement) {
    canvas.set_width(canvas.offset_width().max(1) as u32);
    canvas.set_height(canvas.offset_height().max(1) as u32);
}

pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", path, e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow!("fetch {}: {:?}", path, e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", path, resp.status());
    }
    let body = resp.text().map_err(|e| anyhow!("{:?}", e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| anyhow!("read {}: {:?}", path, e))?
        .as_string()
        .ok_or_else(|| anyhow!("{}: body is not text", path))?;
    Ok(serde_json::from_str(&text)?)
}
