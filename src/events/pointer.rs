use crate::core::SharedPointer;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mirror every window mouse move into the shared pointer record.
///
/// The particle canvas covers the window at 1:1, so client coordinates are
/// already surface pixels.
pub fn wire_pointermove(pointer: SharedPointer) {
    dom::add_window_listener("mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            pointer
                .borrow_mut()
                .move_to(ev.client_x() as f32, ev.client_y() as f32);
        }
    });
}

/// Run `on_resize` whenever the viewport changes size.
pub fn wire_resize(mut on_resize: impl FnMut() + 'static) {
    dom::add_window_listener("resize", move |_| on_resize());
}
