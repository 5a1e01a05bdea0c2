use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use swarm_core::PointerState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep `pointer` current from mouse/pen pointer events and touch events.
/// The frame loop reads it once per tick.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
) {
    wire_pointerdown(canvas, pointer.clone());
    wire_pointermove(canvas, pointer.clone());
    wire_pointerup(pointer.clone());
    wire_touches(canvas, pointer);
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let canvas_cb = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if input::is_touch_pointer(&ev.pointer_type()) {
            return;
        }
        {
            let mut p = pointer.borrow_mut();
            p.pressed = true;
            p.position = input::pointer_canvas_px(&ev, &canvas_cb);
        }
        _ = canvas_cb.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let canvas_cb = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if input::is_touch_pointer(&ev.pointer_type()) {
            return;
        }
        pointer.borrow_mut().position = input::pointer_canvas_px(&ev, &canvas_cb);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(pointer: Rc<RefCell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if input::is_touch_pointer(&ev.pointer_type()) {
            return;
        }
        pointer.borrow_mut().pressed = false;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        for kind in ["pointerup", "pointercancel"] {
            _ = wnd.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

fn wire_touches(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let canvas_cb = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        input::apply_touches(&mut pointer.borrow_mut(), &ev, &canvas_cb);
        // Keep drags on the canvas from scrolling or zooming the page.
        if ev.cancelable() {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    for kind in ["touchstart", "touchmove", "touchend", "touchcancel"] {
        _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}
