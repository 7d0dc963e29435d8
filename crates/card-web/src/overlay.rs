use crate::constants::{
    HIDDEN_CLASS, MESSAGE_OVERLAY_ID, MESSAGE_TEXT_ID, PAGE_ROOT_ID, SHAKE_CLASS,
};
use card_core::MessageKey;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show_message(document: &web::Document, key: MessageKey) {
    if let Some(text) = document.get_element_by_id(MESSAGE_TEXT_ID) {
        // verbatim, never parsed as markup
        text.set_text_content(Some(key.text()));
    }
    if let Some(el) = document.get_element_by_id(MESSAGE_OVERLAY_ID) {
        let _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_message(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MESSAGE_OVERLAY_ID) {
        let _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Mirror the page state onto the overlay.
pub fn sync_message(document: &web::Document, visible: Option<MessageKey>) {
    match visible {
        Some(key) => show_message(document, key),
        None => hide_message(document),
    }
}

/// Starting a shake while one is running replays the animation from the top.
pub fn set_shake(document: &web::Document, shaking: bool) {
    if let Some(el) = document.get_element_by_id(PAGE_ROOT_ID) {
        let cl = el.class_list();
        let _ = cl.remove_1(SHAKE_CLASS);
        if shaking {
            // force a reflow so the re-added class restarts the keyframes
            if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                let _ = html.offset_width();
            }
            let _ = cl.add_1(SHAKE_CLASS);
        }
    }
}
