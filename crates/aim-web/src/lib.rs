//! WASM exports for the aim trainer.
//!
//! JS forwards raw pointer events in client (CSS pixel) coordinates; they
//! are mapped into table space against the element's live layout, applied
//! to the session, and the render frame is rebuilt before the call returns.

pub mod runner;
pub mod view;

pub use runner::AimRunner;

use std::cell::RefCell;

use aim_engine::{
    AimMode, CoordinateMapper, InputEvent, InteractionConfig, PocketId, PointerKind, TableConfig,
    TransformSource, ViewTransform,
};
use glam::DVec2;
use wasm_bindgen::prelude::*;

use crate::view::CanvasView;

struct App {
    runner: AimRunner,
    view: Option<CanvasView>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(app) => Some(f(app)),
            None => {
                log::warn!("aim-web: called before aim_init()");
                None
            }
        }
    })
}

fn parse_or_default<T: Default>(
    what: &str,
    json: &str,
    parse: fn(&str) -> Result<T, serde_json::Error>,
) -> T {
    if json.trim().is_empty() {
        return T::default();
    }
    parse(json).unwrap_or_else(|err| {
        log::warn!("aim-web: bad {} config, using defaults: {}", what, err);
        T::default()
    })
}

/// Map client coordinates into table space using the element's current layout.
/// Without an element, client coordinates are treated as unscaled outer-frame pixels.
fn to_local(app: &App, client_x: f64, client_y: f64) -> DVec2 {
    let device = DVec2::new(client_x, client_y);
    match &app.view {
        Some(view) => CoordinateMapper::map(view, device),
        None => {
            let margin = app.runner.table_config().margin;
            CoordinateMapper::map(&ViewTransform::identity(margin), device)
        }
    }
}

/// Inverse of [`to_local`], for overlays the host positions in client coordinates.
fn to_client(app: &App, local: DVec2) -> DVec2 {
    let transform = match &app.view {
        Some(view) => view.current_transform(),
        None => ViewTransform::identity(app.runner.table_config().margin),
    };
    transform.to_device(local)
}

fn pocket_label(index: u32) -> Option<&'static str> {
    PocketId::from_index(index as usize).map(PocketId::label)
}

/// Create the session. `element_id` names the element the table is drawn into;
/// the JSON arguments may be empty to use the built-in table and hit sizes.
#[wasm_bindgen]
pub fn aim_init(element_id: &str, table_json: &str, interaction_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let table = parse_or_default("table", table_json, TableConfig::from_json);
    let interaction = parse_or_default("interaction", interaction_json, InteractionConfig::from_json);

    let view = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| CanvasView::find(&d, element_id, table));
    if view.is_none() {
        log::warn!("aim-web: element #{} not found, pointer mapping is unscaled", element_id);
    }

    let runner = AimRunner::new(table, interaction);
    APP.with(|cell| {
        *cell.borrow_mut() = Some(App { runner, view });
    });
    log::info!("aim-web: initialized ({}x{})", table.width, table.height);
}

#[wasm_bindgen]
pub fn aim_pointer_down(client_x: f64, client_y: f64, pointer_type: &str) {
    let pointer = PointerKind::from_pointer_type(pointer_type);
    with_app(|app| {
        let at = to_local(app, client_x, client_y);
        app.runner.dispatch(InputEvent::PointerDown { at, pointer });
    });
}

#[wasm_bindgen]
pub fn aim_pointer_move(client_x: f64, client_y: f64) {
    with_app(|app| {
        let at = to_local(app, client_x, client_y);
        app.runner.dispatch(InputEvent::PointerMove { at });
    });
}

#[wasm_bindgen]
pub fn aim_pointer_up() {
    with_app(|app| app.runner.dispatch(InputEvent::PointerUp));
}

/// `pointercancel` / `lostpointercapture`.
#[wasm_bindgen]
pub fn aim_pointer_cancel() {
    with_app(|app| app.runner.dispatch(InputEvent::PointerCancel));
}

#[wasm_bindgen]
pub fn aim_reset() {
    with_app(|app| app.runner.dispatch(InputEvent::Reset));
}

/// 0 = aim at pocket, 1 = one cushion. Unknown codes are ignored.
#[wasm_bindgen]
pub fn aim_set_mode(code: u32) {
    let Some(mode) = AimMode::from_code(code) else {
        log::warn!("aim-web: unknown mode {}", code);
        return;
    };
    with_app(|app| app.runner.dispatch(InputEvent::SetMode(mode)));
}

/// Best effort; never touches the session.
#[wasm_bindgen]
pub fn aim_toggle_fullscreen() {
    with_app(|app| {
        if let Some(view) = &app.view {
            view::toggle_fullscreen(view.element());
        }
    });
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f64 {
    with_app(|app| app.runner.frame_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_app(|app| app.runner.frame_len()).unwrap_or(0)
}

/// Copy of the current frame, for hosts that do not read wasm memory directly.
#[wasm_bindgen]
pub fn aim_frame() -> js_sys::Float64Array {
    with_app(|app| js_sys::Float64Array::from(app.runner.frame().as_floats()))
        .unwrap_or_else(|| js_sys::Float64Array::new_with_length(0))
}

/// Client coordinates of a table-space point, as `[x, y]`. Empty before init.
#[wasm_bindgen]
pub fn aim_table_to_client(x: f64, y: f64) -> js_sys::Float64Array {
    with_app(|app| js_sys::Float64Array::from(&to_client(app, DVec2::new(x, y)).to_array()[..]))
        .unwrap_or_else(|| js_sys::Float64Array::new_with_length(0))
}

/// Label for the pocket index written into the frame ("TL" .. "BR").
#[wasm_bindgen]
pub fn aim_pocket_label(index: u32) -> Option<String> {
    pocket_label(index).map(str::to_owned)
}

#[wasm_bindgen]
pub fn get_table_width() -> f64 {
    with_app(|app| app.runner.table_config().width).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_table_height() -> f64 {
    with_app(|app| app.runner.table_config().height).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_ball_radius() -> f64 {
    with_app(|app| app.runner.table_config().ball_radius).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_table_margin() -> f64 {
    with_app(|app| app.runner.table_config().margin).unwrap_or(0.0)
}
