use thiserror::Error;

/// Why a media element refused to start playing.
///
/// These are never surfaced to the user: the controller logs them and leaves
/// playback stopped until the next explicit play.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("autoplay blocked by the browser, user interaction required")]
    Blocked,
    #[error("audio source not supported: {0}")]
    Unsupported(String),
    #[error("playback rejected: {0}")]
    Rejected(String),
}

impl PlaybackError {
    /// Classify a rejected `play()` promise by its DOMException name.
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" => PlaybackError::Blocked,
            "NotSupportedError" => PlaybackError::Unsupported(message.to_string()),
            _ if message.is_empty() => PlaybackError::Rejected(name.to_string()),
            _ => PlaybackError::Rejected(format!("{name}: {message}")),
        }
    }
}
