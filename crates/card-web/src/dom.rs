use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{element_id}, click not wired");
    }
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{id} is not a canvas: {:?}", e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext(2d) failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Backing store = CSS size * devicePixelRatio, for the WebGPU layer.
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

/// Backing store = window inner size, for the particle layer (CSS pixels).
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width((width as u32).max(1));
        canvas.set_height((height as u32).max(1));
    }
}

/// A window `resize` listener that unregisters itself when dropped.
pub struct ResizeListener {
    window: web::Window,
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    /// Runs `on_resize` once immediately, then on every resize.
    pub fn attach(window: &web::Window, mut on_resize: impl FnMut() + 'static) -> anyhow::Result<Self> {
        on_resize();
        let closure = Closure::wrap(Box::new(on_resize) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("resize listener: {:?}", e))?;
        Ok(Self {
            window: window.clone(),
            closure,
        })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
        log::info!("[dom] resize listener released");
    }
}

/// One-shot `setTimeout`.
pub fn set_timeout(millis: u128, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    let ms = i32::try_from(millis).unwrap_or(i32::MAX);
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
    {
        log::error!("[dom] setTimeout failed: {:?}", e);
    }
}
