// Host-side tests for the page controller: button mapping, overlay and shake.

use card_core::*;
use glam::DVec2;

#[derive(Default)]
struct SilentMedia;

impl MediaElement for SilentMedia {
    fn set_source(&mut self, _url: &str) {}
    fn load(&mut self) {}
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn rewind(&mut self) {}
}

fn page() -> Page<SilentMedia> {
    Page::new(AudioController::new(SilentMedia), Animator::new(17))
}

const CENTER: DVec2 = DVec2::new(640.0, 360.0);

#[test]
fn triggers_map_one_to_one() {
    let kinds: Vec<_> = Trigger::ALL.iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, BurstKind::ALL.to_vec());
    let messages: Vec<_> = Trigger::ALL.iter().map(|t| t.message()).collect();
    assert_eq!(messages, MessageKey::ALL.to_vec());
}

#[test]
fn press_spawns_and_shows_message() {
    let mut page = page();
    assert_eq!(page.visible_message(), None);

    let outcome = page.press(Trigger::LoveYou, CENTER);
    assert!(outcome.schedule_frame);
    assert_eq!(outcome.shake, None);
    assert_eq!(page.animator().len(), 60);
    assert_eq!(page.visible_message(), Some(MessageKey::Romantic1));
    assert!(!page.is_shaking());
}

#[test]
fn second_press_reuses_running_loop() {
    let mut page = page();
    assert!(page.press(Trigger::LoveYou, CENTER).schedule_frame);
    let outcome = page.press(Trigger::WantYou, CENTER);
    assert!(!outcome.schedule_frame);
    assert_eq!(page.animator().len(), 120);
    assert_eq!(page.visible_message(), Some(MessageKey::Passion1));
}

#[test]
fn dismiss_hides_message() {
    let mut page = page();
    page.press(Trigger::NothingWithoutYou, CENTER);
    page.dismiss_message();
    assert_eq!(page.visible_message(), None);
    page.press(Trigger::NothingWithoutYou, CENTER);
    assert_eq!(page.visible_message(), Some(MessageKey::Romantic2));
}

#[test]
fn mega_press_shakes_until_its_timer_fires() {
    let mut page = page();
    let outcome = page.press(Trigger::Madly, CENTER);
    assert_eq!(page.animator().len(), 200);
    let generation = outcome.shake.expect("mega burst shakes");
    assert!(page.is_shaking());
    assert!(page.end_shake(generation));
    assert!(!page.is_shaking());
    // a repeated timer is harmless
    assert!(!page.end_shake(generation));
}

#[test]
fn stale_shake_timer_does_not_cut_newer_shake() {
    let mut page = page();
    let first = page.press(Trigger::Madly, CENTER).shake.unwrap();
    let second = page.press(Trigger::Madly, CENTER).shake.unwrap();
    assert_ne!(first, second);
    assert!(!page.end_shake(first));
    assert!(page.is_shaking());
    assert!(page.end_shake(second));
    assert!(!page.is_shaking());
}

#[test]
fn mega_press_while_shaking_starts_a_new_shake() {
    let mut page = page();
    let first = page.press(Trigger::Madly, CENTER).shake.unwrap();
    assert!(page.is_shaking());
    // the host restarts the animation for every generation it is handed
    let second = page.press(Trigger::Madly, CENTER).shake;
    assert_eq!(second, Some(first + 1));
    assert!(page.is_shaking());
    assert_eq!(page.press(Trigger::LoveYou, CENTER).shake, None);
}

#[test]
fn every_message_has_text() {
    for key in MessageKey::ALL {
        assert!(key.text().chars().count() > 100, "{key:?}");
    }
}

#[test]
fn labels_carry_caption_and_emoji() {
    assert_eq!(Trigger::LoveYou.label(), ("Seni Seviyorum", "💕"));
    assert_eq!(Trigger::Madly.label(), ("Delicesine", "💋"));
    for t in Trigger::ALL {
        let (text, emoji) = t.label();
        assert!(!text.is_empty() && !emoji.is_empty());
    }
}

#[test]
fn labels_are_distinct() {
    let mut labels: Vec<_> = Trigger::ALL.iter().map(|t| t.label().0).collect();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), 4);
}
