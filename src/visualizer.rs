use crate::audio::{self, WebAnalyser};
use crate::constants::{PLAYER_ID, VISUALIZER_CANVAS_ID, VISUALIZER_TOGGLE_ID};
use crate::core::{AudioVisualizer, DrawMode, VisualizerParams};
use crate::dom;
use crate::events;
use crate::frame::FrameLoop;
use crate::markup;
use crate::render::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebVisualizer = AudioVisualizer<WebAnalyser, CanvasSurface>;

fn mount_canvas(player: &web::Element, document: &web::Document) -> Option<CanvasSurface> {
    player.insert_adjacent_html("afterbegin", markup::VISUALIZER_CANVAS).ok()?;
    let canvas = dom::element_as::<web::HtmlCanvasElement>(document, VISUALIZER_CANVAS_ID)?;
    dom::sync_canvas_to_box(&canvas);
    match CanvasSurface::new(canvas) {
        Ok(surface) => Some(surface),
        Err(e) => {
            log::warn!("[visualizer] no canvas surface: {}", e);
            None
        }
    }
}

fn toggle(vis: &Rc<RefCell<WebVisualizer>>, frame_loop: &FrameLoop, source: &web::HtmlMediaElement) {
    let mut v = vis.borrow_mut();
    if !v.is_active() && !v.setup_analysis(|params| audio::create_analyser(source, params)) {
        return;
    }
    let active = v.toggle();
    if let Some(surface) = v.surface_mut() {
        dom::set_active(surface.canvas(), active);
    }
    drop(v);

    if active {
        frame_loop.schedule();
    } else {
        frame_loop.cancel();
    }
    log::info!("[visualizer] active={}", active);
}

fn switch_mode(vis: &Rc<RefCell<WebVisualizer>>) {
    let mut v = vis.borrow_mut();
    let mode = match v.mode() {
        DrawMode::Bars => DrawMode::Waveform,
        DrawMode::Waveform => DrawMode::Bars,
    };
    v.set_mode(mode);
    log::info!("[visualizer] mode={:?}", mode);
}

/// Mount the visualizer canvas and toggle into the player.
///
/// Without a player container nothing is mounted and the feature stays off.
pub fn init(document: &web::Document, source: web::HtmlAudioElement) {
    let Some(player) = document.get_element_by_id(PLAYER_ID) else {
        return;
    };
    let surface = mount_canvas(&player, document);
    let has_surface = surface.is_some();
    let vis = Rc::new(RefCell::new(WebVisualizer::new(
        surface,
        VisualizerParams::default(),
    )));
    let frame_loop = FrameLoop::new(vis.clone());

    if has_surface {
        let vis_resize = vis.clone();
        events::wire_resize(move || {
            if let Some(surface) = vis_resize.borrow_mut().surface_mut() {
                dom::sync_canvas_to_box(surface.canvas());
            }
        });
    }

    if player.insert_adjacent_html("beforeend", markup::VISUALIZER_TOGGLE).is_err() {
        return;
    }
    let Some(button) = document.get_element_by_id(VISUALIZER_TOGGLE_ID) else {
        return;
    };
    dom::add_listener(&button, "click", move |ev| {
        let shift = ev
            .dyn_ref::<web::MouseEvent>()
            .map(|m| m.shift_key())
            .unwrap_or(false);
        if shift {
            switch_mode(&vis);
        } else {
            toggle(&vis, &frame_loop, &source);
        }
    });
}
