use dioxus::document;
use dioxus::prelude::*;

use workbook_core::model::{AudioDirective, AudioEvent, AudioKey, AudioSession};

use super::scripts;

/// Drives the pure [`AudioSession`] state machine against the webview's
/// media element. Directives become eval scripts; the load script reports
/// outcomes back over the eval channel as state-machine events.
#[derive(Clone, Copy, PartialEq)]
pub(super) struct AudioController {
    session: Signal<AudioSession>,
    // Monotonic id of the newest load; outcomes from older loads are stale.
    attempt: Signal<u64>,
}

pub(super) fn use_audio_controller() -> AudioController {
    AudioController {
        session: use_signal(AudioSession::new),
        attempt: use_signal(|| 0),
    }
}

impl AudioController {
    pub fn is_playing(&self, key: AudioKey) -> bool {
        self.session.read().is_playing(key)
    }

    /// Narration button pressed for `key`.
    pub fn request(&mut self, key: AudioKey) {
        let directive = self.session.write().request(key);
        match directive {
            AudioDirective::Load(key) => self.start_load(key),
            AudioDirective::Pause => {
                document::eval(scripts::PAUSE_AUDIO);
            }
            AudioDirective::Resume => {
                document::eval(scripts::RESUME_AUDIO);
            }
            AudioDirective::None => {}
        }
    }

    fn start_load(&mut self, key: AudioKey) {
        let attempt_id = {
            let mut attempt = self.attempt;
            let next = *attempt.peek() + 1;
            attempt.set(next);
            next
        };

        let mut session = self.session;
        let attempt = self.attempt;
        spawn(async move {
            // The script pauses and rewinds any previous element before
            // probing, so at most one handle exists even mid-switch, and it
            // carries the attempt id so a superseded load silences itself.
            let mut channel = document::eval(&scripts::load_audio_script(key, attempt_id));
            loop {
                let message = match channel.recv::<String>().await {
                    Ok(message) => message,
                    // Channel closed: webview gone or component torn down.
                    Err(_) => break,
                };
                if *attempt.peek() != attempt_id {
                    break;
                }
                match message.as_str() {
                    "started" => session.write().handle_event(AudioEvent::Started(key)),
                    "ended" => session.write().handle_event(AudioEvent::Ended(key)),
                    _ => {
                        tracing::warn!(
                            key = %key,
                            "no playable narration source, tried .mp3 and .m4a"
                        );
                        session.write().handle_event(AudioEvent::Failed(key));
                        break;
                    }
                }
            }
        });
    }
}
