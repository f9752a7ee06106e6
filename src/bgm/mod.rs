// SPDX-License-Identifier: MPL-2.0
//! Background music control.
//!
//! [`BgmControl`] tracks whether the music is playing and drives a
//! [`Playback`] backend. Start-up either attempts an unmuted play (when the
//! page was opened with `--play-bgm`) or a muted autoplay. A refused attempt
//! leaves the control paused until the user presses the toggle.
//!
//! The real backend is [`output::DevicePlayback`]; [`open_backend`] falls
//! back to [`SilentPlayback`] when the music file or the audio device is
//! missing.

pub mod decoder;
pub mod output;

use std::fmt;
use std::path::Path;

/// Why a backend refused to start playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRefused(pub String);

impl fmt::Display for PlayRefused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "playback refused: {}", self.0)
    }
}

impl std::error::Error for PlayRefused {}

/// Audio output used by [`BgmControl`].
pub trait Playback {
    /// Attempts to start or resume playback.
    fn play(&mut self, muted: bool) -> Result<(), PlayRefused>;

    fn pause(&mut self);

    /// Next state change the backend made on its own, if any.
    fn poll_event(&mut self) -> Option<PlaybackEvent> {
        None
    }
}

impl<P: Playback + ?Sized> Playback for Box<P> {
    fn play(&mut self, muted: bool) -> Result<(), PlayRefused> {
        (**self).play(muted)
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn poll_event(&mut self) -> Option<PlaybackEvent> {
        (**self).poll_event()
    }
}

/// Fallback when there is nothing to play: every play request is refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayback;

impl Playback for SilentPlayback {
    fn play(&mut self, _muted: bool) -> Result<(), PlayRefused> {
        Err(PlayRefused("no background music available".to_string()))
    }

    fn pause(&mut self) {}
}

/// Opens the device backend for the music file at `path`, or the silent
/// fallback when that fails.
#[must_use]
pub fn open_backend(path: &Path, repeat: bool) -> Box<dyn Playback> {
    match output::DevicePlayback::open(path, repeat) {
        Ok(playback) => Box::new(playback),
        Err(err) => {
            log::warn!("background music disabled: {}", err);
            Box::new(SilentPlayback)
        }
    }
}

/// How playback is attempted at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    /// Play with sound right away.
    Unmuted,
    /// Start muted; the first toggle unmutes.
    MutedAutoplay,
    /// Stay paused until the user presses the toggle.
    Off,
}

impl StartMode {
    /// `--play-bgm` wins; otherwise the `bgm.autoplay` setting decides.
    #[must_use]
    pub fn resolve(play_requested: bool, autoplay: bool) -> Self {
        if play_requested {
            StartMode::Unmuted
        } else if autoplay {
            StartMode::MutedAutoplay
        } else {
            StartMode::Off
        }
    }
}

/// Playback changes reported by the backend itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    Played,
    Paused,
    /// The track finished and repeat is off.
    Ended,
}

/// Icon shown on the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BgmIcon {
    VolumeUp,
    VolumeMute,
}

#[derive(Debug, Clone)]
pub enum Message {
    TogglePressed,
    Playback(PlaybackEvent),
    /// Drain events reported by the backend.
    Poll,
}

pub struct BgmControl<P = Box<dyn Playback>> {
    backend: P,
    playing: bool,
    muted: bool,
}

impl<P: Playback> BgmControl<P> {
    pub fn new(backend: P) -> Self {
        Self {
            backend,
            playing: false,
            muted: true,
        }
    }

    pub fn start(&mut self, mode: StartMode) {
        match mode {
            StartMode::Unmuted => self.attempt(false, "unmuted start"),
            StartMode::MutedAutoplay => self.attempt(true, "muted autoplay"),
            StartMode::Off => {}
        }
    }

    /// Playing pauses; paused unmutes and attempts to play.
    pub fn toggle(&mut self) {
        if self.playing {
            self.backend.pause();
            self.playing = false;
        } else {
            self.attempt(false, "toggle");
        }
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::TogglePressed => self.toggle(),
            Message::Playback(event) => self.on_playback_event(event),
            Message::Poll => {
                while let Some(event) = self.backend.poll_event() {
                    self.on_playback_event(event);
                }
            }
        }
    }

    /// Mirrors state changes that did not come from this control.
    pub fn on_playback_event(&mut self, event: PlaybackEvent) {
        self.playing = matches!(event, PlaybackEvent::Played);
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn icon(&self) -> BgmIcon {
        if self.playing {
            BgmIcon::VolumeUp
        } else {
            BgmIcon::VolumeMute
        }
    }

    fn attempt(&mut self, muted: bool, context: &str) {
        self.muted = muted;
        match self.backend.play(muted) {
            Ok(()) => self.playing = true,
            Err(err) => {
                log::warn!("background music {} failed: {}", context, err);
                self.playing = false;
            }
        }
    }
}

impl<P> fmt::Debug for BgmControl<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BgmControl")
            .field("playing", &self.playing)
            .field("muted", &self.muted)
            .finish_non_exhaustive()
    }
}

impl Default for BgmControl {
    fn default() -> Self {
        Self::new(Box::new(SilentPlayback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Refuses muted or unmuted requests on demand and counts calls.
    #[derive(Debug, Default)]
    struct ScriptedPlayback {
        refuse_muted: bool,
        refuse_unmuted: bool,
        plays: Vec<bool>,
        pauses: usize,
        events: Vec<PlaybackEvent>,
    }

    impl Playback for ScriptedPlayback {
        fn play(&mut self, muted: bool) -> Result<(), PlayRefused> {
            self.plays.push(muted);
            if (muted && self.refuse_muted) || (!muted && self.refuse_unmuted) {
                return Err(PlayRefused("not allowed".into()));
            }
            Ok(())
        }

        fn pause(&mut self) {
            self.pauses += 1;
        }

        fn poll_event(&mut self) -> Option<PlaybackEvent> {
            if self.events.is_empty() {
                None
            } else {
                Some(self.events.remove(0))
            }
        }
    }

    #[test]
    fn start_mode_resolution() {
        assert_eq!(StartMode::resolve(true, false), StartMode::Unmuted);
        assert_eq!(StartMode::resolve(false, true), StartMode::MutedAutoplay);
        assert_eq!(StartMode::resolve(false, false), StartMode::Off);
    }

    #[test]
    fn muted_autoplay_plays_muted() {
        let mut bgm = BgmControl::new(ScriptedPlayback::default());
        bgm.start(StartMode::MutedAutoplay);
        assert!(bgm.is_playing());
        assert!(bgm.is_muted());
        assert_eq!(bgm.backend.plays, vec![true]);
        assert_eq!(bgm.icon(), BgmIcon::VolumeUp);
    }

    #[test]
    fn refused_autoplay_stays_paused() {
        let backend = ScriptedPlayback {
            refuse_muted: true,
            ..ScriptedPlayback::default()
        };
        let mut bgm = BgmControl::new(backend);
        bgm.start(StartMode::MutedAutoplay);
        assert!(!bgm.is_playing());
        assert_eq!(bgm.icon(), BgmIcon::VolumeMute);
    }

    #[test]
    fn unmuted_start_plays_with_sound() {
        let mut bgm = BgmControl::new(ScriptedPlayback::default());
        bgm.start(StartMode::Unmuted);
        assert!(bgm.is_playing());
        assert!(!bgm.is_muted());
    }

    #[test]
    fn off_does_not_touch_backend() {
        let mut bgm = BgmControl::new(ScriptedPlayback::default());
        bgm.start(StartMode::Off);
        assert!(bgm.backend.plays.is_empty());
        assert!(!bgm.is_playing());
    }

    #[test]
    fn toggle_pauses_then_unmutes() {
        let mut bgm = BgmControl::new(ScriptedPlayback::default());
        bgm.start(StartMode::MutedAutoplay);

        bgm.toggle();
        assert!(!bgm.is_playing());
        assert_eq!(bgm.backend.pauses, 1);

        bgm.toggle();
        assert!(bgm.is_playing());
        assert!(!bgm.is_muted());
        assert_eq!(bgm.backend.plays, vec![true, false]);
    }

    #[test]
    fn refused_toggle_stays_paused() {
        let backend = ScriptedPlayback {
            refuse_unmuted: true,
            ..ScriptedPlayback::default()
        };
        let mut bgm = BgmControl::new(backend);
        bgm.handle_message(Message::TogglePressed);
        assert!(!bgm.is_playing());
    }

    #[test]
    fn external_events_update_state() {
        let mut bgm = BgmControl::default();
        bgm.handle_message(Message::Playback(PlaybackEvent::Played));
        assert!(bgm.is_playing());
        bgm.handle_message(Message::Playback(PlaybackEvent::Paused));
        assert!(!bgm.is_playing());
    }

    #[test]
    fn poll_applies_backend_events_in_order() {
        let mut bgm = BgmControl::new(ScriptedPlayback::default());
        bgm.start(StartMode::Unmuted);
        bgm.backend.events = vec![PlaybackEvent::Paused, PlaybackEvent::Played];
        bgm.handle_message(Message::Poll);
        assert!(bgm.is_playing());
        assert!(bgm.backend.events.is_empty());
    }

    #[test]
    fn track_end_reported_by_backend_stops_playing() {
        let mut bgm = BgmControl::new(ScriptedPlayback::default());
        bgm.start(StartMode::Unmuted);
        bgm.backend.events = vec![PlaybackEvent::Ended];
        bgm.handle_message(Message::Poll);
        assert!(!bgm.is_playing());
        assert_eq!(bgm.icon(), BgmIcon::VolumeMute);
    }

    #[test]
    fn silent_fallback_refuses_to_play() {
        let mut bgm = BgmControl::default();
        bgm.start(StartMode::MutedAutoplay);
        assert!(!bgm.is_playing());
        bgm.toggle();
        assert!(!bgm.is_playing());
    }

    #[test]
    fn missing_music_file_falls_back_to_silence() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut bgm = BgmControl::new(open_backend(&dir.path().join("bgm.mp3"), true));
        bgm.start(StartMode::Unmuted);
        assert!(!bgm.is_playing());
        bgm.handle_message(Message::Poll);
        assert!(!bgm.is_playing());
    }
}
