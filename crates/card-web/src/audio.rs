use crate::constants::AUDIO_ID;
use crate::{dom, ui, SharedPage};
use anyhow::anyhow;
use card_core::{MediaElement, PlaybackError, TrackEnd};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

type RejectionHandler = Rc<RefCell<Option<Box<dyn Fn(PlaybackError)>>>>;

/// `<audio>` element adapter. `play()` resolves asynchronously; a rejection is
/// routed to the handler installed with [`WebMedia::on_rejected`].
pub struct WebMedia {
    element: web::HtmlAudioElement,
    rejected: RejectionHandler,
}

impl WebMedia {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let element = document
            .get_element_by_id(AUDIO_ID)
            .ok_or_else(|| anyhow!("missing #{AUDIO_ID}"))?
            .dyn_into::<web::HtmlAudioElement>()
            .map_err(|e| anyhow!("#{AUDIO_ID} is not <audio>: {:?}", e))?;
        element.set_preload("auto");
        Ok(Self {
            element,
            rejected: Rc::new(RefCell::new(None)),
        })
    }

    pub fn element(&self) -> &web::HtmlAudioElement {
        &self.element
    }

    pub fn on_rejected(&self, handler: impl Fn(PlaybackError) + 'static) {
        *self.rejected.borrow_mut() = Some(Box::new(handler));
    }
}

fn classify(e: &JsValue) -> PlaybackError {
    match e.dyn_ref::<web::DomException>() {
        Some(ex) => PlaybackError::from_dom_exception(&ex.name(), &ex.message()),
        None => match e.dyn_ref::<js_sys::Error>() {
            Some(err) => PlaybackError::Rejected(String::from(err.message())),
            None => PlaybackError::Rejected(format!("{:?}", e)),
        },
    }
}

fn report(rejected: &RejectionHandler, err: PlaybackError) {
    match rejected.borrow().as_ref() {
        Some(handler) => handler(err),
        None => log::warn!("[audio] {}", err),
    }
}

impl MediaElement for WebMedia {
    fn set_source(&mut self, url: &str) {
        self.element.set_src(url);
    }

    fn load(&mut self) {
        self.element.load();
    }

    fn play(&mut self) {
        let rejected = self.rejected.clone();
        // Reported from a task of its own: the caller still holds the page borrow.
        match self.element.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    report(&rejected, classify(&e));
                }
            }),
            Err(e) => {
                let err = classify(&e);
                spawn_local(async move { report(&rejected, err) });
            }
        }
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            log::warn!("[audio] pause failed: {:?}", e);
        }
    }

    fn rewind(&mut self) {
        self.element.set_current_time(0.0);
    }
}

fn refresh(page: &SharedPage) {
    if let Some(document) = dom::window_document() {
        let p = page.borrow();
        ui::update_player(&document, p.audio().current_track(), p.audio().is_playing());
    }
}

fn add_media_listener(element: &web::HtmlAudioElement, event: &str, mut f: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
    if let Err(e) = element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("[audio] {event} listener: {:?}", e);
    }
    closure.forget();
}

/// Wire element events (ended/play/pause) and play rejections back into the page.
pub fn wire_media_events(page: &SharedPage) {
    let element = page.borrow().audio().media().element().clone();

    let weak = Rc::downgrade(page);
    page.borrow().audio().media().on_rejected(move |err| {
        if let Some(page) = weak.upgrade() {
            page.borrow_mut().audio_mut().on_play_rejected(err);
            refresh(&page);
        }
    });

    let page_end = page.clone();
    add_media_listener(&element, "ended", move || {
        let outcome = page_end.borrow_mut().audio_mut().on_track_end();
        if let TrackEnd::Advanced { track, settle } = outcome {
            let page_settle = page_end.clone();
            dom::set_timeout(settle.as_millis(), move || {
                page_settle.borrow_mut().audio_mut().resume_after_settle(track);
                refresh(&page_settle);
            });
        }
        refresh(&page_end);
    });

    let page_play = page.clone();
    add_media_listener(&element, "play", move || {
        page_play.borrow_mut().audio_mut().on_media_play();
        refresh(&page_play);
    });

    let page_pause = page.clone();
    add_media_listener(&element, "pause", move || {
        page_pause.borrow_mut().audio_mut().on_media_pause();
        refresh(&page_pause);
    });
}
