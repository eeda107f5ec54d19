use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = RefCell<Option<Closure<dyn FnMut(f64)>>>;

/// A `requestAnimationFrame` loop owned by this handle.
///
/// The frame callback returns `true` to ask for another frame. Dropping the
/// handle cancels any pending frame and frees the callback.
pub struct AnimationLoop {
    tick: Rc<TickSlot>,
    pending: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let tick: Rc<TickSlot> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None::<i32>));

        // the closure only holds a weak ref to its own slot, so dropping the
        // handle is enough to free it
        let tick_weak: Weak<TickSlot> = Rc::downgrade(&tick);
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            pending_tick.set(None);
            if !on_frame(timestamp) {
                return;
            }
            let Some(slot) = tick_weak.upgrade() else {
                return;
            };
            let Some(w) = web::window() else {
                return;
            };
            if let Some(cb) = slot.borrow().as_ref() {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    pending_tick.set(Some(id));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = match tick.borrow().as_ref() {
            Some(cb) => window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?,
            None => anyhow::bail!("frame callback missing"),
        };
        pending.set(Some(first));
        Ok(Self { tick, pending })
    }

    /// Cancel the pending frame, if any. Safe to call repeatedly.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
        self.tick.borrow_mut().take();
    }
}
