use crate::constants::{
    MOTION_BUTTON_ID, ORIENTATION_CTOR, ORIENTATION_EVENT, REQUEST_PERMISSION_FN,
};
use crate::dom;
use crate::frame::FrameContext;
use crate::sensor::{self, RawOrientation};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swarm_core::{MotionAccess, PermissionResponse, SessionClock};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn orientation_ctor(window: &web::Window) -> Option<JsValue> {
    js_sys::Reflect::get(window, &JsValue::from_str(ORIENTATION_CTOR))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Work out whether this browser has orientation events and whether they sit
/// behind a permission prompt (iOS Safari).
pub fn detect_motion_access(window: &web::Window) -> MotionAccess {
    let ctor = orientation_ctor(window);
    let gated = ctor
        .as_ref()
        .and_then(|c| js_sys::Reflect::get(c, &JsValue::from_str(REQUEST_PERMISSION_FN)).ok())
        .map(|f| f.is_function())
        .unwrap_or(false);
    sensor::access_from_capabilities(ctor.is_some(), gated)
}

/// Store every orientation event into `inbox`; the frame loop applies it.
pub fn wire_orientation_listener(inbox: Rc<Cell<Option<RawOrientation>>>, clock: SessionClock) {
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        inbox.set(Some(RawOrientation {
            gamma: ev.gamma(),
            beta: ev.beta(),
            at_ms: clock.now_ms(),
        }));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback_and_bool(
            ORIENTATION_EVENT,
            closure.as_ref().unchecked_ref(),
            true,
        );
    }
    closure.forget();
}

fn request_permission_promise() -> Option<js_sys::Promise> {
    let window = web::window()?;
    let ctor = orientation_ctor(&window)?;
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str(REQUEST_PERMISSION_FN))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    request.call0(&ctor).ok()?.dyn_into::<js_sys::Promise>().ok()
}

/// Show the "enable motion" button and issue the permission prompt on click.
///
/// The prompt must start inside the click handler (user activation). Its
/// outcome lands in `inbox` and is picked up by the next frame.
pub fn wire_permission_button(
    document: &web::Document,
    frame_ctx: Rc<RefCell<FrameContext>>,
    inbox: Rc<Cell<Option<PermissionResponse>>>,
) {
    dom::set_hidden(document, MOTION_BUTTON_ID, false);
    dom::add_click_once_listener(document, MOTION_BUTTON_ID, move || {
        let started = frame_ctx.borrow_mut().swarm.tracker_mut().begin_request();
        if !started {
            return;
        }
        log::info!("[motion] requesting orientation permission");
        let Some(promise) = request_permission_promise() else {
            log::warn!("[motion] requestPermission unavailable");
            inbox.set(Some(PermissionResponse::Failed));
            return;
        };
        spawn_local(async move {
            let settled = JsFuture::from(promise).await;
            let response = match &settled {
                Ok(value) => sensor::classify_permission_answer(Ok(value.as_string().as_deref())),
                Err(e) => {
                    log::warn!("[motion] permission request rejected: {:?}", e);
                    sensor::classify_permission_answer(Err(()))
                }
            };
            inbox.set(Some(response));
        });
    });
}
