//! Top-level page state: which message is up, whether the page is shaking, and
//! the audio + particle components the buttons drive.

use crate::messages::MessageKey;
use crate::particles::{Animator, BurstKind};
use crate::player::{AudioController, MediaElement};
use glam::DVec2;

/// The four burst buttons, in on-page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    LoveYou,
    NothingWithoutYou,
    WantYou,
    Madly,
}

impl Trigger {
    pub const ALL: [Trigger; 4] = [
        Trigger::LoveYou,
        Trigger::NothingWithoutYou,
        Trigger::WantYou,
        Trigger::Madly,
    ];

    pub fn kind(self) -> BurstKind {
        match self {
            Trigger::LoveYou => BurstKind::Heart,
            Trigger::NothingWithoutYou => BurstKind::Flower,
            Trigger::WantYou => BurstKind::Star,
            Trigger::Madly => BurstKind::Mega,
        }
    }

    pub fn message(self) -> MessageKey {
        match self {
            Trigger::LoveYou => MessageKey::Romantic1,
            Trigger::NothingWithoutYou => MessageKey::Romantic2,
            Trigger::WantYou => MessageKey::Passion1,
            Trigger::Madly => MessageKey::Passion2,
        }
    }

    /// Button caption (text line, emoji line).
    pub fn label(self) -> (&'static str, &'static str) {
        match self {
            Trigger::LoveYou => ("Seni Seviyorum", "💕"),
            Trigger::NothingWithoutYou => ("Sensiz Hiçim", "🌹"),
            Trigger::WantYou => ("Seni İstiyorum", "🔥"),
            Trigger::Madly => ("Delicesine", "💋"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PressOutcome {
    /// Start the particle loop; it was idle.
    pub schedule_frame: bool,
    /// Generation of a freshly raised shake, to be ended after the shake duration.
    pub shake: Option<u32>,
}

pub struct Page<M: MediaElement> {
    audio: AudioController<M>,
    animator: Animator,
    message: Option<MessageKey>,
    message_visible: bool,
    shaking: bool,
    shake_generation: u32,
}

impl<M: MediaElement> Page<M> {
    pub fn new(audio: AudioController<M>, animator: Animator) -> Self {
        Self {
            audio,
            animator,
            message: None,
            message_visible: false,
            shaking: false,
            shake_generation: 0,
        }
    }

    pub fn audio(&self) -> &AudioController<M> {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioController<M> {
        &mut self.audio
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    /// Message to show, if the overlay is open.
    pub fn visible_message(&self) -> Option<MessageKey> {
        self.message.filter(|_| self.message_visible)
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    pub fn press(&mut self, trigger: Trigger, origin: DVec2) -> PressOutcome {
        let kind = trigger.kind();
        let schedule_frame = self.animator.burst(kind, origin);
        let shake = kind.shakes().then(|| self.begin_shake());
        self.message = Some(trigger.message());
        self.message_visible = true;
        log::info!("[page] {:?} -> {:?} burst", trigger, kind);
        PressOutcome {
            schedule_frame,
            shake,
        }
    }

    pub fn dismiss_message(&mut self) {
        self.message_visible = false;
    }

    pub fn begin_shake(&mut self) -> u32 {
        self.shake_generation = self.shake_generation.wrapping_add(1);
        self.shaking = true;
        self.shake_generation
    }

    /// Returns whether the shake actually stopped; a timer from an older burst
    /// leaves a newer shake running.
    pub fn end_shake(&mut self, generation: u32) -> bool {
        if generation != self.shake_generation || !self.shaking {
            return false;
        }
        self.shaking = false;
        true
    }
}
