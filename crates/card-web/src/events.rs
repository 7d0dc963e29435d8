use crate::burst::ParticleLoop;
use crate::constants::{MESSAGE_CLOSE_ID, PLAY_PAUSE_ID, SHAKE_DURATION_MS, SKIP_ID, TRIGGER_IDS};
use crate::{dom, overlay, ui, SharedPage};
use card_core::Trigger;
use glam::DVec2;
use web_sys as web;

/// Burst origin: centre of the particle canvas.
fn canvas_centre(canvas: &web::HtmlCanvasElement) -> DVec2 {
    DVec2::new(canvas.width() as f64 / 2.0, canvas.height() as f64 / 2.0)
}

fn refresh_player(document: &web::Document, page: &SharedPage) {
    let p = page.borrow();
    ui::update_player(document, p.audio().current_track(), p.audio().is_playing());
}

fn wire_trigger(
    document: &web::Document,
    id: &str,
    trigger: Trigger,
    page: &SharedPage,
    particles: &ParticleLoop,
    canvas: &web::HtmlCanvasElement,
) {
    let page = page.clone();
    let particles = particles.clone();
    let canvas = canvas.clone();
    let doc = document.clone();
    dom::add_click_listener(document, id, move || {
        let outcome = page.borrow_mut().press(trigger, canvas_centre(&canvas));
        if outcome.schedule_frame {
            particles.start();
        }
        overlay::sync_message(&doc, page.borrow().visible_message());
        if let Some(generation) = outcome.shake {
            overlay::set_shake(&doc, true);
            let page_shake = page.clone();
            let doc_shake = doc.clone();
            dom::set_timeout(SHAKE_DURATION_MS, move || {
                if page_shake.borrow_mut().end_shake(generation) {
                    overlay::set_shake(&doc_shake, false);
                }
            });
        }
    });
}

pub fn wire_controls(
    document: &web::Document,
    page: &SharedPage,
    particles: &ParticleLoop,
    canvas: &web::HtmlCanvasElement,
) {
    for (id, trigger) in TRIGGER_IDS.iter().zip(Trigger::ALL) {
        ui::label_trigger(document, id, trigger);
        wire_trigger(document, id, trigger, page, particles, canvas);
    }

    // Play/pause
    {
        let page = page.clone();
        let doc = document.clone();
        dom::add_click_listener(document, PLAY_PAUSE_ID, move || {
            page.borrow_mut().audio_mut().play_pause();
            refresh_player(&doc, &page);
        });
    }

    // Skip
    {
        let page = page.clone();
        let doc = document.clone();
        dom::add_click_listener(document, SKIP_ID, move || {
            page.borrow_mut().audio_mut().skip();
            refresh_player(&doc, &page);
        });
    }

    // Close message
    {
        let page = page.clone();
        let doc = document.clone();
        dom::add_click_listener(document, MESSAGE_CLOSE_ID, move || {
            page.borrow_mut().dismiss_message();
            overlay::sync_message(&doc, page.borrow().visible_message());
        });
    }
}
