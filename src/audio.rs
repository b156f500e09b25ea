//! Sound cues
//!
//! The simulation fires named cues at an [`AudioSink`] and never waits on the
//! result. A frontend maps cues to whatever playback it has.

/// Sound cue names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Burger fires french fries
    BurgerShot,
    /// Two teddy bears bounce off each other
    TeddyBounce,
    /// Burger takes damage
    BurgerDamage,
    /// Bear explodes
    Explosion,
    /// Burger destroyed
    BurgerDeath,
    /// Bear fires a projectile
    TeddyShot,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::BurgerShot => "BurgerShot",
            SoundCue::TeddyBounce => "TeddyBounce",
            SoundCue::BurgerDamage => "BurgerDamage",
            SoundCue::Explosion => "Explosion",
            SoundCue::BurgerDeath => "BurgerDeath",
            SoundCue::TeddyShot => "TeddyShot",
        }
    }
}

/// Fire-and-forget cue playback
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink that writes cues to the log (headless runs)
#[derive(Debug, Default)]
pub struct LogAudio {
    muted: bool,
    played: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Number of cues played while unmuted
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::trace!("cue {}", cue.as_str());
    }
}

/// Sink that remembers every cue, in order
#[derive(Debug, Default, Clone)]
pub struct CueRecorder {
    pub cues: Vec<SoundCue>,
}

impl CueRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, cue: SoundCue) -> usize {
        self.cues.iter().filter(|&&c| c == cue).count()
    }

    pub fn clear(&mut self) {
        self.cues.clear();
    }
}

impl AudioSink for CueRecorder {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}
