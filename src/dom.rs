use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a click handler that fires at most once.
pub fn add_click_once_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnOnce() + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[dom] missing #{}", element_id);
        return;
    };
    let closure = Closure::once(handler);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = el.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn set_hidden(document: &web::Document, element_id: &str, hidden: bool) {
    if let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        el.set_hidden(hidden);
    }
}

/// Match the canvas backing store to its CSS box times the device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
