#![cfg(target_arch = "wasm32")]
use crate::core::catalog::SAMPLE_ART;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod camera;
mod constants;
mod core;
mod cursor;
mod dom;
mod frame;
mod host;
mod render;
mod scene;
mod tilt;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nuit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    host::wire_default_page()
}

/// The gallery fixture as plain JS objects
/// `{ id, title, description, category, imageUrl, year }`.
#[wasm_bindgen]
pub fn gallery_catalog() -> js_sys::Array {
    let out = js_sys::Array::new();
    for art in SAMPLE_ART.iter() {
        let obj = js_sys::Object::new();
        let fields: [(&str, JsValue); 6] = [
            ("id", art.id.into()),
            ("title", art.title.into()),
            ("description", art.description.into()),
            ("category", art.category.into()),
            ("imageUrl", art.image_url.into()),
            ("year", JsValue::from_f64(art.year as f64)),
        ];
        for (key, value) in fields.iter() {
            _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), value);
        }
        out.push(&obj);
    }
    out
}

#[wasm_bindgen]
pub fn phase_offset_for_index(index: u32) -> f32 {
    crate::core::tilt::phase_offset_for_index(index as usize)
}

/// Phase offset for the catalog entry `id`; unknown ids get no offset.
#[wasm_bindgen]
pub fn phase_offset_for_id(id: &str) -> f32 {
    crate::core::catalog::find(id)
        .map(|(index, _)| crate::core::tilt::phase_offset_for_index(index))
        .unwrap_or(0.0)
}

/// GPU objects currently alive; 0 whenever no scene is mounted.
#[wasm_bindgen]
pub fn live_gpu_resource_count() -> u32 {
    crate::core::resources::live_gpu_resources() as u32
}
