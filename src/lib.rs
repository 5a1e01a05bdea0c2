#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ID;
use crate::frame::FrameContext;
use crate::status::DomStatusSink;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swarm_core::{
    MotionAccess, OrientationTracker, PointerState, SessionClock, StatusBoard, Swarm, SwarmConfig,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod sensor;
mod status;

fn read_config(window: &web::Window) -> SwarmConfig {
    let query = window.location().search().unwrap_or_default();
    match SwarmConfig::from_query(&query) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            SwarmConfig::default()
        }
    }
}

fn canvas_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("swarm-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx2d = canvas_2d(&canvas)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let config = read_config(&window);
    let seed = config.seed.unwrap_or_else(rand::random);
    let access = events::detect_motion_access(&window);
    log::info!("[init] seed={} motion access={:?}", seed, access);

    let mut board = StatusBoard::new(DomStatusSink::from_document(&document));
    board.announce_access(access);

    let clock = SessionClock::start();
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let orientation_inbox = Rc::new(Cell::new(None));
    let permission_inbox = Rc::new(Cell::new(None));

    let swarm = Swarm::new(
        &config,
        input::canvas_viewport(&canvas),
        OrientationTracker::new(access),
        seed,
    );

    events::wire_pointer_handlers(&canvas, pointer.clone());
    if access != MotionAccess::Unavailable {
        events::wire_orientation_listener(orientation_inbox.clone(), clock);
    }

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        swarm,
        clock,
        document: document.clone(),
        canvas,
        ctx2d,
        board,
        pointer,
        orientation_inbox,
        permission_inbox: permission_inbox.clone(),
    }));

    if access == MotionAccess::AwaitingPermission {
        events::wire_permission_button(&document, frame_ctx.clone(), permission_inbox);
    }

    frame::start_loop(frame_ctx);
    Ok(())
}
