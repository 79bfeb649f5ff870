use crate::core::FrameTask;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame driver for a [`FrameTask`].
///
/// The task decides each frame whether to continue. `cancel` revokes the
/// frame that is already queued; `schedule` never queues a second one.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new<T: FrameTask + 'static>(task: Rc<RefCell<T>>) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_clone.set(None);
            if task.borrow_mut().frame().is_continue() {
                pending_clone.set(request_frame(&tick_clone));
            }
        }) as Box<dyn FnMut()>));
        Self { tick, pending }
    }

    pub fn schedule(&self) {
        if self.pending.get().is_none() {
            self.pending.set(request_frame(&self.tick));
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// Build a loop and queue its first frame.
pub fn start_loop<T: FrameTask + 'static>(task: Rc<RefCell<T>>) -> FrameLoop {
    let frame_loop = FrameLoop::new(task);
    frame_loop.schedule();
    frame_loop
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
