#![cfg(target_arch = "wasm32")]
use card_core::scene::HEART_BASE_POSITIONS;
use card_core::{Animator, AudioController, Page};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod burst;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod ui;

pub(crate) type SharedPage = Rc<RefCell<Page<audio::WebMedia>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let particle_canvas = dom::canvas_by_id(&document, constants::PARTICLE_CANVAS_ID)?;
    let ctx = dom::context_2d(&particle_canvas)?;
    // WebGPU acquires this one, so no 2d context here
    let scene_canvas = dom::canvas_by_id(&document, constants::SCENE_CANVAS_ID)?;

    let resize = {
        let particle_canvas = particle_canvas.clone();
        let scene_canvas = scene_canvas.clone();
        dom::ResizeListener::attach(&window, move || {
            dom::sync_canvas_to_window(&particle_canvas);
            dom::sync_canvas_backing_size(&scene_canvas);
        })?
    };
    let resize = Rc::new(RefCell::new(Some(resize)));
    {
        let resize = resize.clone();
        // a page entering the back/forward cache keeps its listener
        let closure = Closure::wrap(Box::new(move |event: web::Event| {
            let persisted = event
                .dyn_ref::<web::PageTransitionEvent>()
                .map(|e| e.persisted())
                .unwrap_or(false);
            if persisted {
                log::info!("[page] hidden into bfcache, keeping resize listener");
            } else {
                resize.borrow_mut().take();
            }
        }) as Box<dyn FnMut(web::Event)>);
        window
            .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    let media = audio::WebMedia::from_document(&document)?;
    let page: SharedPage = Rc::new(RefCell::new(Page::new(
        AudioController::new(media),
        Animator::from_entropy(),
    )));
    audio::wire_media_events(&page);

    let particles = burst::ParticleLoop::new(
        page.clone(),
        burst::CanvasSurface::new(particle_canvas.clone(), ctx),
    );
    events::wire_controls(&document, &page, &particles, &particle_canvas);

    // Browsers usually refuse this without a gesture; the rejection handler
    // flips the button back to "play".
    page.borrow_mut().audio_mut().try_autoplay();
    {
        let p = page.borrow();
        ui::update_player(&document, p.audio().current_track(), p.audio().is_playing());
    }
    overlay::sync_message(&document, None);

    spawn_local(async move {
        let gpu = frame::init_gpu(&scene_canvas, HEART_BASE_POSITIONS.len()).await;
        if gpu.is_none() {
            log::warn!("[scene] hearts disabled");
            return;
        }
        let scene = Rc::new(RefCell::new(frame::SceneContext::new(scene_canvas, gpu)));
        frame::start_loop(scene);
        log::info!("[scene] started");
    });

    log::info!("[page] ready");
    Ok(())
}
