use crate::core::tilt::phase_offset_for_index;
use crate::cursor::{mount_cursor, CursorHandle};
use crate::dom::{self, EventListener};
use crate::scene::{mount_scene, SceneHandle};
use crate::tilt::{mount_tilt_card, TiltCardHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Default page markup picked up at start
const SCENE_CANVAS_ID: &str = "scene-canvas";
const CURSOR_ID: &str = "custom-cursor";
const CURSOR_LABEL_SELECTOR: &str = "[data-cursor-label]";
const TILT_CARD_SELECTOR: &str = "[data-tilt-card]";
const TILT_IMAGE_SELECTOR: &str = "[data-tilt-image]";
const TILT_SHINE_SELECTOR: &str = "[data-tilt-shine]";

struct MountedCard {
    // Listeners go first so no event reaches an unmounted handle
    _listeners: Vec<EventListener>,
    _handle: Rc<RefCell<TiltCardHandle>>,
}

#[derive(Default)]
struct Mounted {
    scene: Option<SceneHandle>,
    cursor: Option<CursorHandle>,
    cards: Vec<MountedCard>,
}

thread_local! {
    static MOUNTED: RefCell<Mounted> = RefCell::new(Mounted::default());
}

/// Mount the engines declared in the page markup. They live for the page's
/// lifetime.
pub fn wire_default_page() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mut mounted = Mounted::default();

    if let Some(el) = document.get_element_by_id(SCENE_CANVAS_ID) {
        let canvas: web::HtmlCanvasElement = el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", SCENE_CANVAS_ID, e)))?;
        mounted.scene = Some(mount_scene(canvas, rand::random::<u32>()));
    }

    if let Some(el) = document.get_element_by_id(CURSOR_ID) {
        let cursor: web::HtmlElement = el
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!(format!("#{} is not an element: {:?}", CURSOR_ID, e)))?;
        let label = child(&cursor, CURSOR_LABEL_SELECTOR).ok();
        mounted.cursor = Some(mount_cursor(cursor, label));
    }

    let cards = document
        .query_selector_all(TILT_CARD_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    for i in 0..cards.length() {
        let Some(card) = cards
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        match wire_card(&card, i as usize) {
            Ok(c) => mounted.cards.push(c),
            Err(e) => log::warn!("[host] tilt card {} skipped: {:?}", i, e),
        }
    }

    log::info!(
        "[host] scene={} cursor={} tilt cards={}",
        mounted.scene.is_some(),
        mounted.cursor.as_ref().map(|c| c.mounted()).unwrap_or(false),
        mounted.cards.len()
    );
    MOUNTED.with(|m| *m.borrow_mut() = mounted);
    Ok(())
}

fn child(card: &web::HtmlElement, selector: &str) -> anyhow::Result<web::HtmlElement> {
    card.query_selector(selector)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))
}

fn wire_card(card: &web::HtmlElement, index: usize) -> anyhow::Result<MountedCard> {
    let image = child(card, TILT_IMAGE_SELECTOR)?;
    let shine = child(card, TILT_SHINE_SELECTOR)?;
    let handle = Rc::new(RefCell::new(mount_tilt_card(
        card.clone(),
        image,
        shine,
        phase_offset_for_index(index),
    )));

    let mut listeners = Vec::new();
    let h = handle.clone();
    listeners.extend(EventListener::new(card, "pointerenter", move |_| {
        h.borrow().on_pointer_enter();
    }));
    let h = handle.clone();
    let card_rect = card.clone();
    listeners.extend(EventListener::new(card, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = card_rect.get_bounding_client_rect();
        h.borrow().on_pointer_move(
            (ev.client_x() as f64 - rect.left()) as f32,
            (ev.client_y() as f64 - rect.top()) as f32,
        );
    }));
    let h = handle.clone();
    listeners.extend(EventListener::new(card, "pointerleave", move |_| {
        h.borrow().on_pointer_leave();
    }));

    Ok(MountedCard {
        _listeners: listeners,
        _handle: handle,
    })
}
