use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A requestAnimationFrame loop owned by one engine instance.
///
/// Every scheduled callback checks the shared `alive` flag before running,
/// so a frame that was already queued when the engine unmounted does
/// nothing.
pub struct AnimationLoop {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

pub fn start_loop(alive: Rc<Cell<bool>>, mut on_frame: impl FnMut() + 'static) -> AnimationLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let alive_tick = alive.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_tick.set(None);
        if !alive_tick.get() {
            return;
        }
        on_frame();
        if alive_tick.get() {
            raf_tick.set(request_frame(&tick_clone));
        }
    }) as Box<dyn FnMut()>));
    raf_id.set(request_frame(&tick));

    AnimationLoop {
        alive,
        raf_id,
        tick,
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let t = tick.borrow();
    let cb = t.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

impl AnimationLoop {
    /// Cancel the pending frame and free the callback.
    ///
    /// Must not be called from inside the loop's own frame callback.
    pub fn stop(&self) {
        self.alive.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure -> tick -> closure cycle
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
