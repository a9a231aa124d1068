//! Sound cues and playback
//!
//! The game names one of three cached sound assets per cue. Actual playback
//! is left to a `SoundBackend` supplied by the host.

use serde::{Deserialize, Serialize};

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Ball hits paddle
    PaddleHit,
    /// A point was scored
    Score,
    /// Match won
    Victory,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::PaddleHit, SoundCue::Score, SoundCue::Victory];

    /// Name of the cached asset for this cue
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundCue::PaddleHit => "paddle-hit",
            SoundCue::Score => "score",
            SoundCue::Victory => "victory",
        }
    }
}

/// Host-side playback of preloaded assets
pub trait SoundBackend {
    /// Play the asset named `asset` at `volume` (0.0 - 1.0)
    fn play(&mut self, asset: &str, volume: f32);
}

/// Backend that only logs what would have played
#[derive(Debug, Default)]
pub struct LogSoundBackend {
    pub played: u64,
}

impl SoundBackend for LogSoundBackend {
    fn play(&mut self, asset: &str, volume: f32) {
        self.played += 1;
        log::debug!("sound '{}' at volume {:.2}", asset, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: SoundBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: SoundBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound cue
    pub fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(cue.asset_name(), vol);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
