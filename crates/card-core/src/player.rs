//! Two-track playlist driving a single media element.
//!
//! The poem plays once, then the song takes over and loops forever. The element
//! itself sits behind [`MediaElement`]; play attempts are fire-and-forget and a
//! refusal comes back later through [`AudioController::on_play_rejected`].

use crate::constants::TRACK_SETTLE_DELAY;
use crate::error::PlaybackError;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub name: &'static str,
    pub url: &'static str,
}

pub const TRACKS: [Track; 2] = [
    Track {
        name: "Şiir",
        url: "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/%C5%9Fiir-IxpYBIUlwIpguB9wsEbGnaXSuk7bPU.mp3",
    },
    Track {
        name: "Sezen Aksu - Şanıma İnanma",
        url: "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/%C5%9Fark%C4%B1-ymYoDVIrhLRkLaltCFCTUsBLRYktDH.mp3",
    },
];

pub const POEM: usize = 0;
pub const SONG: usize = 1;

/// The slice of an audio element the controller needs.
pub trait MediaElement {
    fn set_source(&mut self, url: &str);
    fn load(&mut self);
    /// Start playback. Failure is reported asynchronously, never here.
    fn play(&mut self);
    fn pause(&mut self);
    /// Seek back to the start.
    fn rewind(&mut self);
}

/// What the host has to do after a track finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackEnd {
    /// Source switched to track `track`; call
    /// [`AudioController::resume_after_settle`] with it once `settle` has elapsed.
    Advanced { track: usize, settle: Duration },
    /// Same track restarted from the beginning.
    Looped,
}

pub struct AudioController<M: MediaElement> {
    media: M,
    tracks: &'static [Track],
    current: usize,
    playing: bool,
}

impl<M: MediaElement> AudioController<M> {
    pub fn new(mut media: M) -> Self {
        media.set_source(TRACKS[POEM].url);
        Self {
            media,
            tracks: &TRACKS,
            current: POEM,
            playing: false,
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> Track {
        self.tracks[self.current]
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// First play on page load; usually blocked until the user interacts.
    pub fn try_autoplay(&mut self) {
        self.media.play();
        self.playing = true;
    }

    pub fn play_pause(&mut self) {
        if self.playing {
            self.media.pause();
        } else {
            self.media.play();
        }
        self.playing = !self.playing;
    }

    pub fn skip(&mut self) {
        self.current = (self.current + 1) % self.tracks.len();
        self.media.set_source(self.tracks[self.current].url);
        self.media.play();
        self.playing = true;
        log::info!("[audio] skip -> {}", self.tracks[self.current].name);
    }

    pub fn on_track_end(&mut self) -> TrackEnd {
        if self.current == POEM {
            self.current = SONG;
            self.media.set_source(self.tracks[SONG].url);
            log::info!("[audio] poem finished, queueing {}", self.tracks[SONG].name);
            TrackEnd::Advanced {
                track: SONG,
                settle: TRACK_SETTLE_DELAY,
            }
        } else {
            self.media.rewind();
            self.media.play();
            self.playing = true;
            TrackEnd::Looped
        }
    }

    /// Second half of [`TrackEnd::Advanced`]: the new source has settled.
    /// Ignored when the user moved to another track in the meantime.
    pub fn resume_after_settle(&mut self, track: usize) {
        if track != self.current {
            log::debug!("[audio] settle for track {} dropped, now on {}", track, self.current);
            return;
        }
        self.media.load();
        self.media.play();
        self.playing = true;
    }

    pub fn on_play_rejected(&mut self, err: PlaybackError) {
        log::warn!("[audio] {} ({})", err, self.tracks[self.current].name);
        self.playing = false;
    }

    /// The element started on its own (media keys, resumed after buffering).
    pub fn on_media_play(&mut self) {
        self.playing = true;
    }

    pub fn on_media_pause(&mut self) {
        self.playing = false;
    }
}
