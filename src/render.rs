use crate::constants::{RADIUS_PER_SIZE, TRAIL_FILL};
use std::f64::consts::TAU;
use swarm_core::Swarm;
use web_sys as web;

/// Fade the previous frame and draw every particle as a filled disc.
pub fn draw(ctx: &web::CanvasRenderingContext2d, swarm: &Swarm) {
    let vp = swarm.viewport();
    ctx.set_fill_style_str(TRAIL_FILL);
    ctx.fill_rect(0.0, 0.0, vp.width as f64, vp.height as f64);

    let frame = swarm.frame();
    for p in swarm.particles() {
        ctx.set_fill_style_str(&p.appearance(frame).hsla());
        ctx.begin_path();
        let r = p.size as f64 * RADIUS_PER_SIZE;
        if ctx
            .arc(p.position.x as f64, p.position.y as f64, r, 0.0, TAU)
            .is_ok()
        {
            ctx.fill();
        }
    }
}
