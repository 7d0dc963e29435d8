use crate::SharedPage;
use card_core::{Particle, ParticleSurface};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The particle overlay canvas seen as a [`ParticleSurface`].
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    fn paint(&self, p: &Particle) -> Result<(), wasm_bindgen::JsValue> {
        let ctx = &self.ctx;
        ctx.save();
        ctx.translate(p.position.x, p.position.y)?;
        ctx.rotate(p.rotation)?;
        ctx.set_global_alpha(p.opacity);
        let gradient = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, p.size)?;
        gradient.add_color_stop(0.0, &p.color.to_hex())?;
        gradient.add_color_stop(1.0, &p.color.to_hex_transparent())?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        ctx.arc(0.0, 0.0, p.size, 0.0, TAU)?;
        ctx.fill();
        ctx.restore();
        Ok(())
    }
}

impl ParticleSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn draw_particle(&mut self, particle: &Particle) {
        if let Err(e) = self.paint(particle) {
            // leave the context balanced for the next particle
            self.ctx.restore();
            log::error!("[burst] draw failed: {:?}", e);
        }
    }
}

/// Self-rescheduling requestAnimationFrame chain around `Animator::tick`.
/// Only runs while the animator has particles; [`ParticleLoop::start`] restarts it.
#[derive(Clone)]
pub struct ParticleLoop {
    page: SharedPage,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl ParticleLoop {
    pub fn new(page: SharedPage, surface: CanvasSurface) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let page_tick = page.clone();
        let mut surface = surface;
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let more = page_tick.borrow_mut().animator_mut().tick(&mut surface);
            if more {
                request_frame(&page_tick, &tick_clone);
            } else {
                log::debug!("[burst] store empty, loop stopped");
            }
        }) as Box<dyn FnMut()>));
        Self { page, tick }
    }

    pub fn start(&self) {
        request_frame(&self.page, &self.tick);
    }
}

/// Queue the next tick. On failure the animator's frame claim is released so
/// the next burst tries again.
fn request_frame(page: &SharedPage, tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let scheduled = match (web::window(), tick.borrow().as_ref()) {
        (Some(w), Some(cb)) => match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(_) => true,
            Err(e) => {
                log::error!("[burst] requestAnimationFrame failed: {:?}", e);
                false
            }
        },
        _ => false,
    };
    if !scheduled {
        page.borrow_mut().animator_mut().cancel_frame();
    }
}
