use crate::constants::MOTION_BUTTON_ID;
use crate::dom;
use crate::input;
use crate::render;
use crate::sensor::RawOrientation;
use crate::status::DomStatusSink;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swarm_core::{
    MotionAccess, PermissionResponse, PointerState, SessionClock, StatusBoard, Swarm,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub swarm: Swarm,
    pub clock: SessionClock,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub board: StatusBoard<DomStatusSink>,

    // Latest input from event listeners, drained once per tick
    pub pointer: Rc<RefCell<PointerState>>,
    pub orientation_inbox: Rc<Cell<Option<RawOrientation>>>,
    pub permission_inbox: Rc<Cell<Option<PermissionResponse>>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();

        let viewport = input::canvas_viewport(&self.canvas);
        if viewport != self.swarm.viewport() {
            self.swarm.resize(viewport);
        }

        self.drain_permission();
        self.drain_orientation();

        let pointer = *self.pointer.borrow();
        let report = self.swarm.step(&pointer, now);
        self.board.set_indicator(report.indicator);

        render::draw(&self.ctx2d, &self.swarm);
    }

    fn drain_permission(&mut self) {
        let Some(response) = self.permission_inbox.take() else {
            return;
        };
        let tracker = self.swarm.tracker_mut();
        tracker.resolve_request(response);
        let access = tracker.access();
        self.board.announce_access(access);
        if access == MotionAccess::Granted {
            dom::set_hidden(&self.document, MOTION_BUTTON_ID, true);
        }
    }

    fn drain_orientation(&mut self) {
        let Some(raw) = self.orientation_inbox.take() else {
            return;
        };
        let tracker = self.swarm.tracker_mut();
        if !tracker.handle_orientation_event(raw.gamma, raw.beta, raw.at_ms) {
            log::debug!("[motion] orientation event ignored: access not granted");
            return;
        }
        if tracker.take_streaming_notice() {
            self.board.announce_streaming();
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
