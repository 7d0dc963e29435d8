// DOM contract with index.html. Every element the front-end touches is looked
// up by one of these ids.

// Layers
pub const SCENE_CANVAS_ID: &str = "scene-canvas";
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const PAGE_ROOT_ID: &str = "card-root";

// Audio
pub const AUDIO_ID: &str = "card-audio";
pub const PLAY_PAUSE_ID: &str = "play-pause";
pub const SKIP_ID: &str = "skip";
pub const TRACK_NAME_ID: &str = "track-name";

// Burst buttons, in Trigger::ALL order
pub const TRIGGER_IDS: [&str; 4] = ["burst-heart", "burst-flower", "burst-star", "burst-mega"];

// Message modal
pub const MESSAGE_OVERLAY_ID: &str = "message-overlay";
pub const MESSAGE_TEXT_ID: &str = "message-text";
pub const MESSAGE_CLOSE_ID: &str = "message-close";

// CSS hooks
pub const SHAKE_CLASS: &str = "animate-shake";
pub const PLAYING_CLASS: &str = "is-playing";
pub const HIDDEN_CLASS: &str = "hidden";

// Scene clear: transparent so the page gradient shows through the 3D layer
pub const SCENE_CLEAR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

// Timers
pub const SHAKE_DURATION_MS: u128 = card_core::constants::SHAKE_DURATION.as_millis();
