//! Narration playback modeled as an explicit state machine.
//!
//! The machine is pure: [`AudioSession::request`] returns the directive the
//! host driver must carry out (load, pause, resume), and the driver feeds
//! playback outcomes back through [`AudioSession::handle_event`]. This keeps
//! the toggle/replace semantics deterministic and testable without a real
//! media element.

use std::fmt;

/// File-extension variants probed for each key, in order.
pub const AUDIO_EXTENSIONS: [&str; 2] = ["mp3", "m4a"];

/// Logical identifier for one narration track.
///
/// Keys come from the static page registry, so they are `'static` by
/// construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioKey(&'static str);

impl AudioKey {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }

    /// Candidate asset URLs for this key, tried in order until one plays.
    #[must_use]
    pub fn source_urls(self) -> Vec<String> {
        AUDIO_EXTENSIONS
            .iter()
            .map(|ext| format!("/audio/{}.{ext}", self.0))
            .collect()
    }
}

impl fmt::Debug for AudioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AudioKey({})", self.0)
    }
}

impl fmt::Display for AudioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Playback state. At most one track is active at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioState {
    #[default]
    Idle,
    Loading(AudioKey),
    Playing(AudioKey),
    Paused(AudioKey),
}

/// What the driver must do in response to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioDirective {
    /// Tear down any current handle (pause + rewind + release), then probe
    /// the key's source variants in order.
    Load(AudioKey),
    /// Pause the current handle in place; position is retained.
    Pause,
    /// Resume the current handle from its retained position.
    Resume,
    /// Nothing to do (e.g. a repeat request while a load is in flight).
    None,
}

/// Playback outcomes reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// The named source began playing.
    Started(AudioKey),
    /// Every source variant for the key failed.
    Failed(AudioKey),
    /// The track played to the end.
    Ended(AudioKey),
}

/// The single narration session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioSession {
    state: AudioState,
}

impl AudioSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> AudioState {
        self.state
    }

    /// Key of the current track, if any.
    #[must_use]
    pub fn current_key(&self) -> Option<AudioKey> {
        match self.state {
            AudioState::Idle => None,
            AudioState::Loading(key) | AudioState::Playing(key) | AudioState::Paused(key) => {
                Some(key)
            }
        }
    }

    /// Whether `key` is the audibly-playing track (drives the button glyph).
    #[must_use]
    pub fn is_playing(&self, key: AudioKey) -> bool {
        self.state == AudioState::Playing(key)
    }

    /// User pressed the narration button for `key`.
    ///
    /// Same-key requests toggle play/pause in place. A different key always
    /// tears the current handle down before a fresh load, so two tracks can
    /// never overlap.
    pub fn request(&mut self, key: AudioKey) -> AudioDirective {
        match self.state {
            AudioState::Idle => {
                self.state = AudioState::Loading(key);
                AudioDirective::Load(key)
            }
            AudioState::Loading(current) if current == key => AudioDirective::None,
            AudioState::Playing(current) if current == key => {
                self.state = AudioState::Paused(key);
                AudioDirective::Pause
            }
            AudioState::Paused(current) if current == key => {
                self.state = AudioState::Playing(key);
                AudioDirective::Resume
            }
            // Track switch: the Load directive implies full teardown first.
            AudioState::Loading(_) | AudioState::Playing(_) | AudioState::Paused(_) => {
                self.state = AudioState::Loading(key);
                AudioDirective::Load(key)
            }
        }
    }

    /// Apply a playback outcome. Events for a key that is no longer current
    /// (a stale load attempt) are ignored.
    pub fn handle_event(&mut self, event: AudioEvent) {
        match (self.state, event) {
            (AudioState::Loading(current), AudioEvent::Started(key)) if current == key => {
                self.state = AudioState::Playing(key);
            }
            (AudioState::Loading(current), AudioEvent::Failed(key)) if current == key => {
                self.state = AudioState::Idle;
            }
            // The handle is retained after the track ends; the UI shows it
            // as paused until another request arrives.
            (AudioState::Playing(current), AudioEvent::Ended(key)) if current == key => {
                self.state = AudioState::Paused(key);
            }
            _ => {}
        }
    }

    /// Drop any current track. The driver releases the handle alongside.
    pub fn release(&mut self) {
        self.state = AudioState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELCOME: AudioKey = AudioKey::new("cover-welcome");
    const TRUTH: AudioKey = AudioKey::new("cash-flow-truth");

    fn playing(key: AudioKey) -> AudioSession {
        let mut session = AudioSession::new();
        assert_eq!(session.request(key), AudioDirective::Load(key));
        session.handle_event(AudioEvent::Started(key));
        session
    }

    #[test]
    fn source_urls_probe_mp3_then_m4a() {
        assert_eq!(
            WELCOME.source_urls(),
            vec![
                "/audio/cover-welcome.mp3".to_string(),
                "/audio/cover-welcome.m4a".to_string(),
            ]
        );
    }

    #[test]
    fn request_from_idle_loads_then_plays() {
        let session = playing(WELCOME);
        assert_eq!(session.state(), AudioState::Playing(WELCOME));
        assert!(session.is_playing(WELCOME));
    }

    #[test]
    fn same_key_toggles_pause_and_resume() {
        let mut session = playing(WELCOME);
        assert_eq!(session.request(WELCOME), AudioDirective::Pause);
        assert_eq!(session.state(), AudioState::Paused(WELCOME));
        assert_eq!(session.request(WELCOME), AudioDirective::Resume);
        assert_eq!(session.state(), AudioState::Playing(WELCOME));
    }

    #[test]
    fn switching_keys_always_reloads() {
        let mut session = playing(WELCOME);
        assert_eq!(session.request(TRUTH), AudioDirective::Load(TRUTH));
        assert_eq!(session.state(), AudioState::Loading(TRUTH));
        assert_eq!(session.current_key(), Some(TRUTH));
        assert!(!session.is_playing(WELCOME));
    }

    #[test]
    fn repeat_request_while_loading_is_a_no_op() {
        let mut session = AudioSession::new();
        session.request(WELCOME);
        assert_eq!(session.request(WELCOME), AudioDirective::None);
        assert_eq!(session.state(), AudioState::Loading(WELCOME));
    }

    #[test]
    fn all_sources_failing_returns_to_idle() {
        let mut session = AudioSession::new();
        session.request(WELCOME);
        session.handle_event(AudioEvent::Failed(WELCOME));
        assert_eq!(session.state(), AudioState::Idle);
        assert_eq!(session.current_key(), None);
    }

    #[test]
    fn stale_events_are_ignored() {
        let mut session = playing(WELCOME);
        session.request(TRUTH);
        // Outcome of the torn-down WELCOME attempt arrives late.
        session.handle_event(AudioEvent::Started(WELCOME));
        assert_eq!(session.state(), AudioState::Loading(TRUTH));
        session.handle_event(AudioEvent::Failed(WELCOME));
        assert_eq!(session.state(), AudioState::Loading(TRUTH));
    }

    #[test]
    fn track_end_displays_as_paused_with_handle_retained() {
        let mut session = playing(WELCOME);
        session.handle_event(AudioEvent::Ended(WELCOME));
        assert_eq!(session.state(), AudioState::Paused(WELCOME));
        // Another press resumes the retained handle.
        assert_eq!(session.request(WELCOME), AudioDirective::Resume);
    }

    #[test]
    fn release_drops_the_track() {
        let mut session = playing(WELCOME);
        session.release();
        assert_eq!(session.state(), AudioState::Idle);
    }
}
