// Host-side tests for the two-track audio controller.

use card_core::constants::TRACK_SETTLE_DELAY;
use card_core::*;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Source(String),
    Load,
    Play,
    Pause,
    Rewind,
}

#[derive(Default)]
struct FakeMedia {
    calls: Vec<Call>,
}

impl FakeMedia {
    fn last_source(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Source(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl MediaElement for FakeMedia {
    fn set_source(&mut self, url: &str) {
        self.calls.push(Call::Source(url.to_string()));
    }
    fn load(&mut self) {
        self.calls.push(Call::Load);
    }
    fn play(&mut self) {
        self.calls.push(Call::Play);
    }
    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }
    fn rewind(&mut self) {
        self.calls.push(Call::Rewind);
    }
}

fn controller() -> AudioController<FakeMedia> {
    AudioController::new(FakeMedia::default())
}

#[test]
fn starts_on_the_poem_paused() {
    let audio = controller();
    assert_eq!(audio.current_index(), POEM);
    assert_eq!(audio.current_track().name, "Şiir");
    assert!(!audio.is_playing());
    assert_eq!(audio.media().last_source(), Some(TRACKS[POEM].url));
}

#[test]
fn play_pause_toggles() {
    let mut audio = controller();
    audio.play_pause();
    assert!(audio.is_playing());
    assert_eq!(audio.media().calls.last(), Some(&Call::Play));
    audio.play_pause();
    assert!(!audio.is_playing());
    assert_eq!(audio.media().calls.last(), Some(&Call::Pause));
}

#[test]
fn rejected_play_leaves_playback_stopped() {
    let mut audio = controller();
    audio.try_autoplay();
    audio.on_play_rejected(PlaybackError::Blocked);
    assert!(!audio.is_playing());
    // the next press is a fresh play attempt, not a pause
    audio.play_pause();
    assert!(audio.is_playing());
    assert_eq!(audio.media().calls.last(), Some(&Call::Play));
}

#[test]
fn skip_cycles_tracks_and_plays() {
    let mut audio = controller();
    audio.skip();
    assert_eq!(audio.current_index(), SONG);
    assert!(audio.is_playing());
    assert_eq!(audio.media().last_source(), Some(TRACKS[SONG].url));
    assert_eq!(audio.media().calls.last(), Some(&Call::Play));

    audio.skip();
    assert_eq!(audio.current_index(), POEM);
    assert_eq!(audio.media().last_source(), Some(TRACKS[POEM].url));
}

#[test]
fn poem_end_advances_to_song_after_settle() {
    let mut audio = controller();
    audio.try_autoplay();
    let outcome = audio.on_track_end();
    assert_eq!(
        outcome,
        TrackEnd::Advanced {
            track: SONG,
            settle: TRACK_SETTLE_DELAY
        }
    );
    assert_eq!(audio.current_index(), SONG);
    assert_eq!(audio.media().last_source(), Some(TRACKS[SONG].url));

    let calls_before = audio.media().calls.len();
    audio.resume_after_settle(SONG);
    assert!(audio.is_playing());
    assert_eq!(
        &audio.media().calls[calls_before..],
        &[Call::Load, Call::Play]
    );
}

#[test]
fn skip_during_settle_is_not_restarted() {
    let mut audio = controller();
    audio.try_autoplay();
    let TrackEnd::Advanced { track, .. } = audio.on_track_end() else {
        panic!("poem end should advance");
    };
    // user skips back to the poem before the settle timer fires
    audio.skip();
    assert_eq!(audio.current_index(), POEM);
    let calls_before = audio.media().calls.len();

    audio.resume_after_settle(track);
    assert_eq!(audio.current_index(), POEM);
    assert!(audio.is_playing());
    assert!(audio.media().calls[calls_before..].is_empty());
}

#[test]
fn song_end_loops_the_song() {
    let mut audio = controller();
    audio.skip();
    audio.on_media_pause(); // element pauses itself at the end
    let calls_before = audio.media().calls.len();

    assert_eq!(audio.on_track_end(), TrackEnd::Looped);
    assert_eq!(audio.current_index(), SONG);
    assert!(audio.is_playing());
    assert_eq!(
        &audio.media().calls[calls_before..],
        &[Call::Rewind, Call::Play]
    );
}

#[test]
fn song_keeps_looping() {
    let mut audio = controller();
    audio.on_track_end();
    audio.resume_after_settle(SONG);
    for _ in 0..5 {
        assert_eq!(audio.on_track_end(), TrackEnd::Looped);
        assert_eq!(audio.current_index(), SONG);
    }
}

#[test]
fn element_events_sync_playing_flag() {
    let mut audio = controller();
    audio.on_media_play();
    assert!(audio.is_playing());
    audio.on_media_pause();
    assert!(!audio.is_playing());
}

#[test]
fn dom_exceptions_are_classified() {
    assert_eq!(
        PlaybackError::from_dom_exception("NotAllowedError", "play() failed"),
        PlaybackError::Blocked
    );
    assert_eq!(
        PlaybackError::from_dom_exception("NotSupportedError", "no source"),
        PlaybackError::Unsupported("no source".to_string())
    );
    assert_eq!(
        PlaybackError::from_dom_exception("AbortError", "interrupted"),
        PlaybackError::Rejected("AbortError: interrupted".to_string())
    );
    assert_eq!(
        PlaybackError::from_dom_exception("AbortError", ""),
        PlaybackError::Rejected("AbortError".to_string())
    );
}
