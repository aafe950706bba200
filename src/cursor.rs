use crate::core::constants::{
    CURSOR_INTERACTIVE_SELECTOR, CURSOR_LABEL_TRANSITION, CURSOR_TEXT_ATTR, CURSOR_TRANSITION,
};
use crate::core::cursor::CursorState;
use crate::dom::{self, EventListener};
use crate::frame::{self, AnimationLoop};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
const HIDE_NATIVE_CURSOR_CSS: &str = "body, a, button, input, textarea { cursor: none; }";

struct CursorRuntime {
    state: CursorState,
    element: web::HtmlElement,
    label: Option<web::HtmlElement>,
}

impl CursorRuntime {
    fn frame(&mut self) {
        self.state.step();
        dom::set_style(&self.element, "transform", &self.state.transform_css());
    }

    // Hover changes are written once, not per frame
    fn apply_look(&self) {
        let look = self.state.look();
        let size = format!("{}px", look.size_px);
        dom::set_style(&self.element, "width", &size);
        dom::set_style(&self.element, "height", &size);
        dom::set_style(&self.element, "opacity", &look.opacity.to_string());
        if let Some(label) = &self.label {
            if label.text_content().as_deref() != Some(self.state.label()) {
                label.set_text_content(Some(self.state.label()));
            }
            dom::set_style(label, "opacity", &look.label_opacity.to_string());
        }
    }
}

type Interactive = Rc<RefCell<Vec<EventListener>>>;

/// Handle to the mounted custom cursor. Dropping it unmounts the cursor.
#[wasm_bindgen]
pub struct CursorHandle {
    alive: Rc<Cell<bool>>,
    frame_loop: Option<AnimationLoop>,
    listeners: Vec<EventListener>,
    interactive: Interactive,
    observer: Option<web::MutationObserver>,
    _on_mutation: Option<Closure<dyn FnMut()>>,
    hide_native: Option<web::Element>,
}

#[wasm_bindgen]
impl CursorHandle {
    /// Stop the frame loop, disconnect the observer and remove every listener
    /// and the injected style.
    pub fn unmount(&mut self) {
        if self.frame_loop.is_none() {
            return;
        }
        self.alive.set(false);
        if let Some(l) = self.frame_loop.take() {
            l.stop();
        }
        if let Some(o) = self.observer.take() {
            o.disconnect();
        }
        self._on_mutation = None;
        self.listeners.clear();
        self.interactive.borrow_mut().clear();
        if let Some(style) = self.hide_native.take() {
            style.remove();
        }
        log::debug!("[cursor] unmounted");
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for CursorHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn is_coarse_pointer(window: &web::Window) -> bool {
    window
        .match_media(COARSE_POINTER_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Mount the custom cursor on `element`, with an optional `label` child for
/// the hover text. On coarse-pointer devices the element is hidden and the
/// returned handle is already unmounted.
#[wasm_bindgen]
pub fn mount_cursor(element: web::HtmlElement, label: Option<web::HtmlElement>) -> CursorHandle {
    let alive = Rc::new(Cell::new(false));
    let interactive: Interactive = Rc::new(RefCell::new(Vec::new()));
    let mut handle = CursorHandle {
        alive: alive.clone(),
        frame_loop: None,
        listeners: Vec::new(),
        interactive: interactive.clone(),
        observer: None,
        _on_mutation: None,
        hide_native: None,
    };

    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return handle;
    };
    if is_coarse_pointer(&window) {
        dom::set_style(&element, "display", "none");
        log::info!("[cursor] coarse pointer, native cursor kept");
        return handle;
    }

    dom::set_style(&element, "transition", CURSOR_TRANSITION);
    if let Some(label) = &label {
        dom::set_style(label, "transition", CURSOR_LABEL_TRANSITION);
    }
    let runtime = Rc::new(RefCell::new(CursorRuntime {
        state: CursorState::default(),
        element,
        label,
    }));
    runtime.borrow().apply_look();
    alive.set(true);

    let rt = runtime.clone();
    handle
        .listeners
        .extend(EventListener::new(&window, "mousemove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            rt.borrow_mut()
                .state
                .mouse_moved(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        }));

    *interactive.borrow_mut() = wire_interactive(&document, &runtime);
    if let Some(body) = document.body() {
        if let Ok(style) = document.create_element("style") {
            style.set_text_content(Some(HIDE_NATIVE_CURSOR_CSS));
            if body.append_child(&style).is_ok() {
                handle.hide_native = Some(style);
            }
        }
        // Elements added later (route changes) get listeners too
        let doc = document.clone();
        let rt = runtime.clone();
        let targets = interactive.clone();
        let on_mutation = Closure::wrap(Box::new(move || {
            let fresh = wire_interactive(&doc, &rt);
            *targets.borrow_mut() = fresh;
        }) as Box<dyn FnMut()>);
        match web::MutationObserver::new(on_mutation.as_ref().unchecked_ref()) {
            Ok(observer) => {
                let init = web::MutationObserverInit::new();
                init.set_child_list(true);
                init.set_subtree(true);
                if observer.observe_with_options(&body, &init).is_ok() {
                    handle.observer = Some(observer);
                    handle._on_mutation = Some(on_mutation);
                }
            }
            Err(e) => log::warn!("[cursor] no mutation observer: {:?}", e),
        }
    }

    let rt = runtime.clone();
    handle.frame_loop = Some(frame::start_loop(alive, move || rt.borrow_mut().frame()));
    log::debug!(
        "[cursor] mounted, {} interactive elements",
        interactive.borrow().len() / 2
    );
    handle
}

fn wire_interactive(
    document: &web::Document,
    runtime: &Rc<RefCell<CursorRuntime>>,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    let Ok(nodes) = document.query_selector_all(CURSOR_INTERACTIVE_SELECTOR) else {
        return listeners;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let rt = runtime.clone();
        let target = el.clone();
        listeners.extend(EventListener::new(&el, "mouseenter", move |_| {
            let text = target.get_attribute(CURSOR_TEXT_ATTR);
            let mut r = rt.borrow_mut();
            r.state.enter_interactive(text.as_deref());
            r.apply_look();
        }));
        let rt = runtime.clone();
        listeners.extend(EventListener::new(&el, "mouseleave", move |_| {
            let mut r = rt.borrow_mut();
            r.state.leave_interactive();
            r.apply_look();
        }));
    }
    listeners
}
