// Host-side sanity checks on tuning constants and colour tokens.

use card_core::constants::*;
use card_core::Rgb;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(SPEED_MIN > 0.0 && SPEED_MAX > SPEED_MIN);
    assert!(SIZE_MIN > 0.0 && SIZE_MAX > SIZE_MIN);
    assert!(ROTATION_SPEED_MAX > 0.0);
    assert!(MEGA_BURST_PARTICLES > BURST_PARTICLES);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_takes_about_two_seconds_at_60hz() {
    let ticks = (1.0 / LIFE_DECAY).ceil() as u32;
    assert_eq!(ticks, 125);
    assert!(HORIZONTAL_DRAG > 0.0 && HORIZONTAL_DRAG < 1.0);
    assert!(GRAVITY > 0.0);
}

#[test]
fn timings() {
    assert_eq!(SHAKE_DURATION.as_millis(), 500);
    assert_eq!(TRACK_SETTLE_DELAY.as_millis(), 100);
}

#[test]
fn hex_tokens_format_as_css() {
    let c = Rgb::from_u32(0xff6b9d);
    assert_eq!((c.r, c.g, c.b), (0xff, 0x6b, 0x9d));
    assert_eq!(c.to_hex(), "#ff6b9d");
    assert_eq!(c.to_hex_transparent(), "#ff6b9d00");
    assert_eq!(c.to_string(), "#ff6b9d");
    // leading zeros are kept
    assert_eq!(Rgb::from_u32(0x00050a).to_hex(), "#00050a");
}
