use crate::constants::{PLAYING_CLASS, PLAY_PAUSE_ID, TRACK_NAME_ID};
use card_core::{Track, Trigger};
use web_sys as web;

/// Refresh the "now playing" card: track title and the play/pause icon state.
pub fn update_player(document: &web::Document, track: Track, playing: bool) {
    if let Some(el) = document.get_element_by_id(TRACK_NAME_ID) {
        el.set_text_content(Some(track.name));
    }
    if let Some(button) = document.get_element_by_id(PLAY_PAUSE_ID) {
        let cl = button.class_list();
        let _ = if playing {
            cl.add_1(PLAYING_CLASS)
        } else {
            cl.remove_1(PLAYING_CLASS)
        };
        let _ = button.set_attribute("aria-label", if playing { "Duraklat" } else { "Oynat" });
    }
}

/// Caption a burst button: text line, then the emoji on a line of its own.
pub fn label_trigger(document: &web::Document, id: &str, trigger: Trigger) {
    let Some(button) = document.get_element_by_id(id) else {
        return;
    };
    let (text, emoji) = trigger.label();
    button.set_text_content(Some(text));
    if let Ok(span) = document.create_element("span") {
        span.set_text_content(Some(emoji));
        let _ = button.append_child(&span);
    }
}
