use crate::constants::SCENE_CLEAR;
use crate::{dom, render};
use card_core::scene::HeartField;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the hearts layer needs per animation frame.
pub struct SceneContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub hearts: HeartField,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
}

impl<'a> SceneContext<'a> {
    pub fn new(canvas: web::HtmlCanvasElement, gpu: Option<render::GpuState<'a>>) -> Self {
        Self {
            canvas,
            hearts: HeartField::from_entropy(),
            gpu,
            started: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        dom::sync_canvas_backing_size(&self.canvas);
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        let models = self.hearts.models(elapsed);
        match gpu.render(&models) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[scene] surface lost, reconfiguring");
                gpu.reconfigure();
            }
            Err(e) => log::error!("[scene] render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, hearts: usize) -> Option<render::GpuState<'static>> {
    // the surface borrows the canvas for the lifetime of the page
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, hearts).await {
        Ok(mut g) => {
            g.set_clear_color(SCENE_CLEAR);
            Some(g)
        }
        Err(e) => {
            log::error!("[scene] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(scene: Rc<RefCell<SceneContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        scene.borrow_mut().frame();
        request(&tick_clone);
    }) as Box<dyn FnMut()>));
    request(&tick);
}

fn request(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
