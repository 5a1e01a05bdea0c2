use glam::Vec2;
use swarm_core::{PointerState, Viewport};
use web_sys as web;

/// Map client (CSS) coordinates to canvas backing-store pixels.
///
/// A zero-sized rect yields non-finite output; the steering resolver treats
/// that as a zero force rather than an error.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_px: Vec2,
) -> Vec2 {
    (client - rect_origin) / rect_size * canvas_px
}

#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::new(canvas.width() as f32, canvas.height() as f32)
}

#[inline]
fn canvas_px_from_client(canvas: &web::HtmlCanvasElement, client_x: f32, client_y: f32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        Vec2::new(client_x, client_y),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    canvas_px_from_client(canvas, ev.client_x() as f32, ev.client_y() as f32)
}

/// Update pointer state from a touch event: count the active touches and
/// follow the first one.
pub fn apply_touches(
    state: &mut PointerState,
    ev: &web::TouchEvent,
    canvas: &web::HtmlCanvasElement,
) {
    let touches = ev.touches();
    state.touches = touches.length();
    if let Some(first) = touches.get(0) {
        let (x, y) = (first.client_x() as f32, first.client_y() as f32);
        state.position = canvas_px_from_client(canvas, x, y);
    }
}

/// Mouse and pen are handled through pointer events; touch has its own
/// listeners so multi-touch counts stay accurate.
#[inline]
pub fn is_touch_pointer(pointer_type: &str) -> bool {
    pointer_type == "touch"
}
