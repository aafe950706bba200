use crate::core::pointer::InputSourceKind;
use crate::core::tilt::{TiltPolicy, TiltState, TiltTransform, Transition};
use crate::dom::{self, EventListener};
use crate::frame::{self, AnimationLoop};
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The three card layers the engine writes to. Write-only: styles are never
/// read back.
struct CardLayers {
    card: web::HtmlElement,
    image: web::HtmlElement,
    shine: web::HtmlElement,
}

impl CardLayers {
    fn apply(&self, t: &TiltTransform) {
        dom::set_style(&self.card, "transform", &t.card_css());
        dom::set_style(&self.image, "transform", &t.image_css());
        dom::set_style(&self.shine, "background", &t.shine_css());
    }

    fn set_transition(&self, transition: Transition) {
        let css = transition.css();
        dom::set_style(&self.card, "transition", &css);
        dom::set_style(&self.image, "transition", &css);
    }

    fn size(&self) -> Vec2 {
        let rect = self.card.get_bounding_client_rect();
        Vec2::new(rect.width() as f32, rect.height() as f32)
    }
}

struct TiltRuntime {
    state: TiltState,
    layers: CardLayers,
    started: Instant,
}

impl TiltRuntime {
    fn frame(&mut self) {
        let t = self.state.frame(self.started.elapsed().as_secs_f32());
        // Hovered cards are written from the pointer handler
        if self.state.policy() != TiltPolicy::Hover {
            self.layers.apply(&t);
        }
    }
}

/// Handle to one mounted tilt card. Dropping it unmounts the card.
#[wasm_bindgen]
pub struct TiltCardHandle {
    runtime: Rc<RefCell<TiltRuntime>>,
    alive: Rc<Cell<bool>>,
    frame_loop: Option<AnimationLoop>,
    orientation: Option<EventListener>,
}

#[wasm_bindgen]
impl TiltCardHandle {
    pub fn on_pointer_enter(&self) {
        if !self.alive.get() {
            return;
        }
        let mut rt = self.runtime.borrow_mut();
        let transition = rt.state.pointer_enter();
        rt.layers.set_transition(transition);
    }

    /// Pointer position relative to the card's top-left corner, in CSS px.
    pub fn on_pointer_move(&self, local_x: f32, local_y: f32) {
        if !self.alive.get() {
            return;
        }
        let mut rt = self.runtime.borrow_mut();
        let size = rt.layers.size();
        if let Some(t) = rt.state.pointer_move(Vec2::new(local_x, local_y), size) {
            rt.layers.apply(&t);
        }
    }

    pub fn on_pointer_leave(&self) {
        if !self.alive.get() {
            return;
        }
        let mut rt = self.runtime.borrow_mut();
        let transition = rt.state.pointer_leave();
        rt.layers.set_transition(transition);
    }

    /// Stop the frame loop and the orientation listener of this card.
    pub fn unmount(&mut self) {
        if self.frame_loop.is_none() {
            return;
        }
        self.alive.set(false);
        if let Some(l) = self.frame_loop.take() {
            l.stop();
        }
        self.orientation = None;
        log::debug!("[tilt] unmounted");
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for TiltCardHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount a tilt engine on a card. `phase_offset` (seconds) desynchronizes the
/// idle motion of sibling cards; see `phase_offset_for_index`.
#[wasm_bindgen]
pub fn mount_tilt_card(
    card: web::HtmlElement,
    image: web::HtmlElement,
    shine: web::HtmlElement,
    phase_offset: f32,
) -> TiltCardHandle {
    let window = web::window();
    let touch = window.as_ref().map(dom::is_touch_capable).unwrap_or(false);
    let input = InputSourceKind::resolve(touch);

    let layers = CardLayers { card, image, shine };
    layers.set_transition(Transition::Settle);
    let runtime = Rc::new(RefCell::new(TiltRuntime {
        state: TiltState::new(input, phase_offset),
        layers,
        started: Instant::now(),
    }));
    let alive = Rc::new(Cell::new(true));

    let orientation = match (&window, input) {
        (Some(w), InputSourceKind::Orientation) => {
            let rt = runtime.clone();
            EventListener::new(w, "deviceorientation", move |ev| {
                let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
                    return;
                };
                rt.borrow_mut()
                    .state
                    .set_orientation(ev.beta().map(|b| b as f32), ev.gamma().map(|g| g as f32));
            })
        }
        _ => None,
    };

    let rt = runtime.clone();
    let frame_loop = frame::start_loop(alive.clone(), move || rt.borrow_mut().frame());
    log::debug!("[tilt] mounted input={:?} phase={:.2}", input, phase_offset);

    TiltCardHandle {
        runtime,
        alive,
        frame_loop: Some(frame_loop),
        orientation,
    }
}
