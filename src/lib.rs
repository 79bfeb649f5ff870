#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{
    ArtistCatalog, FieldParams, ParticleField, Playlist, PointerState, PostCatalog,
    ReleaseCatalog, SearchIndex, SharedPointer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animations;
mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod markup;
mod nav;
mod overlay;
mod player;
mod render;
mod theme;
mod visualizer;

fn particle_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(canvas) = dom::element_as::<web::HtmlCanvasElement>(document, PARTICLE_CANVAS_ID) {
        return Ok(canvas);
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let el = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_id(PARTICLE_CANVAS_ID);
    _ = el.set_attribute("style", PARTICLE_CANVAS_STYLE);
    body.insert_before(&el, body.first_child().as_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn init_particles(document: &web::Document) -> anyhow::Result<()> {
    let canvas = particle_canvas(document)?;
    dom::sync_canvas_to_window(&canvas);
    let surface = render::CanvasSurface::new(canvas.clone())?;

    let pointer: SharedPointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointermove(pointer.clone());
    events::wire_resize(move || dom::sync_canvas_to_window(&canvas));

    let mut rng = StdRng::from_entropy();
    let field = ParticleField::new(surface, pointer, FieldParams::default(), &mut rng);
    // Runs for the page's lifetime; the queued continuation keeps it alive.
    frame::start_loop(Rc::new(RefCell::new(field)));
    Ok(())
}

async fn load_search_index(releases: ReleaseCatalog) -> anyhow::Result<SearchIndex> {
    let artists: ArtistCatalog = dom::fetch_json(ARTISTS_JSON).await?;
    let posts: PostCatalog = dom::fetch_json(POSTS_JSON).await?;
    Ok(SearchIndex::new(artists, releases, posts))
}

async fn init_content(document: web::Document) {
    let index = Rc::new(RefCell::new(SearchIndex::default()));
    if overlay::mount(&document) {
        overlay::wire(&document, index.clone());
    }
    events::wire_global_keydown(document.clone());

    let releases: ReleaseCatalog = match dom::fetch_json(RELEASES_JSON).await {
        Ok(r) => r,
        Err(e) => {
            log::error!("[player] loading releases: {:#}", e);
            ReleaseCatalog::default()
        }
    };

    if let Some(audio) = player::init(&document, Playlist::from_catalog(&releases)) {
        visualizer::init(&document, audio);
    }

    match load_search_index(releases).await {
        Ok(loaded) => {
            log::info!("[search] indexed {} entries", loaded.len());
            *index.borrow_mut() = loaded;
        }
        Err(e) => log::error!("[search] loading index: {:#}", e),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("octan-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    nav::wire_menu(&document);
    nav::wire_scroll_progress(&document);
    animations::wire_reveal(&document);
    animations::wire_parallax(&document);
    animations::wire_anchor_links(&document);
    animations::wire_loaded(&document);
    theme::init(&document);

    if let Err(e) = init_particles(&document) {
        log::warn!("[particles] disabled: {:#}", e);
    }

    init_content(document).await;
    Ok(())
}
