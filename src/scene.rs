use crate::core::pointer::{normalize_client, InputSourceKind};
use crate::core::resources::live_gpu_resources;
use crate::core::scene::{SceneConfig, SceneState};
use crate::core::viewport::Viewport;
use crate::dom::{self, EventListener};
use crate::frame::{self, AnimationLoop};
use crate::render::SceneRenderer;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct SceneRuntime {
    state: SceneState,
    gpu: Option<SceneRenderer>,
    // Latest resize wins; applied at the start of the next frame
    pending_resize: Option<Viewport>,
    started: Instant,
    canvas: web::HtmlCanvasElement,
}

impl SceneRuntime {
    fn frame(&mut self) {
        if let Some(vp) = self.pending_resize.take() {
            self.state.resize(vp);
            dom::sync_canvas_backing_size(&self.canvas, &vp);
        }
        let frame = self.state.advance(self.started.elapsed().as_secs_f32());

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let count = self.state.particles().len() as u32;
        match gpu.render(&frame, self.state.particle_bytes(), count) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(wgpu::SurfaceError::Timeout) => log::warn!("[scene] surface timeout, frame skipped"),
            Err(e) => {
                log::error!("[scene] render error: {:?}; rendering disabled", e);
                self.gpu = None;
            }
        }
    }
}

/// Handle to a mounted scene engine. Dropping it unmounts the engine.
#[wasm_bindgen]
pub struct SceneHandle {
    runtime: Rc<RefCell<SceneRuntime>>,
    alive: Rc<Cell<bool>>,
    frame_loop: Option<AnimationLoop>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl SceneHandle {
    /// Stop the frame loop, remove every listener and release all GPU
    /// resources. No frame runs after this returns.
    pub fn unmount(&mut self) {
        if self.frame_loop.is_none() {
            return;
        }
        self.alive.set(false);
        if let Some(l) = self.frame_loop.take() {
            l.stop();
        }
        self.listeners.clear();
        let gpu = self.runtime.borrow_mut().gpu.take();
        drop(gpu);
        log::info!(
            "[scene] unmounted; live gpu resources: {}",
            live_gpu_resources()
        );
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for SceneHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount the animated background on `canvas`. `seed` fixes the particle
/// layout. Never fails: without a GPU the engine keeps running and draws
/// nothing.
#[wasm_bindgen]
pub fn mount_scene(canvas: web::HtmlCanvasElement, seed: u32) -> SceneHandle {
    let window = web::window();
    let viewport = window
        .as_ref()
        .map(dom::window_viewport)
        .unwrap_or_default();
    let touch = window.as_ref().map(dom::is_touch_capable).unwrap_or(false);
    let config = SceneConfig::for_viewport(&viewport, seed as u64, InputSourceKind::resolve(touch));
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let runtime = Rc::new(RefCell::new(SceneRuntime {
        state: SceneState::new(config, viewport),
        gpu: None,
        pending_resize: None,
        started: Instant::now(),
        canvas: canvas.clone(),
    }));
    let alive = Rc::new(Cell::new(true));

    let listeners = window
        .as_ref()
        .map(|w| wire_scene_listeners(w, &runtime, config.input))
        .unwrap_or_default();
    spawn_gpu_init(
        canvas,
        &runtime,
        &alive,
        viewport.surface_size(),
        config.particle_count as u32,
    );

    let rt = runtime.clone();
    let frame_loop = frame::start_loop(alive.clone(), move || rt.borrow_mut().frame());
    log::info!(
        "[scene] mounted particles={} input={:?} seed={}",
        config.particle_count,
        config.input,
        seed
    );

    SceneHandle {
        runtime,
        alive,
        frame_loop: Some(frame_loop),
        listeners,
    }
}

fn spawn_gpu_init(
    canvas: web::HtmlCanvasElement,
    runtime: &Rc<RefCell<SceneRuntime>>,
    alive: &Rc<Cell<bool>>,
    size: (u32, u32),
    particle_capacity: u32,
) {
    let runtime = runtime.clone();
    let alive = alive.clone();
    spawn_local(async move {
        match SceneRenderer::new(canvas, size, particle_capacity).await {
            Ok(gpu) if alive.get() => runtime.borrow_mut().gpu = Some(gpu),
            Ok(gpu) => {
                drop(gpu);
                log::info!("[scene] unmounted before the gpu was ready; released");
            }
            Err(e) => log::error!("[scene] gpu init failed, rendering disabled: {:?}", e),
        }
    });
}

fn wire_scene_listeners(
    window: &web::Window,
    runtime: &Rc<RefCell<SceneRuntime>>,
    input: InputSourceKind,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    let rt = runtime.clone();
    listeners.extend(EventListener::new(window, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let mut r = rt.borrow_mut();
        let vp = *r.state.viewport();
        let uv = normalize_client(ev.client_x() as f32, ev.client_y() as f32, vp.width, vp.height);
        r.state.pointer_moved(uv);
    }));

    let rt = runtime.clone();
    let win = window.clone();
    listeners.extend(EventListener::new(window, "resize", move |_| {
        rt.borrow_mut().pending_resize = Some(dom::window_viewport(&win));
    }));

    if input == InputSourceKind::Orientation {
        let rt = runtime.clone();
        listeners.extend(EventListener::new(window, "deviceorientation", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
                return;
            };
            rt.borrow_mut().state.orientation_changed(
                ev.beta().map(|b| b as f32),
                ev.gamma().map(|g| g as f32),
            );
        }));
    }

    listeners
}
