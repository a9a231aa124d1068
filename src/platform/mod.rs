//! Platform abstraction layer
//!
//! The host owns the window, clock, keyboard and renderer. The game talks to
//! it only through the traits here:
//! - Time/frame pacing (`Clock`)
//! - Input (`InputSource`)
//! - Shutdown signalling (`Window`)
//! - Presentation (`Renderer`)

pub mod headless;

use serde::{Deserialize, Serialize};

use crate::audio::{AudioManager, SoundBackend};
use crate::renderer::DrawCommand;
use crate::session::Session;
use crate::settings::{KeyBindings, Settings};
use crate::sim::{PaddleInput, Side, TickInput};

pub use headless::HeadlessHost;

/// Logical keys the game can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    E,
    D,
    I,
    K,
    O,
    L,
    Up,
    Down,
}

/// Frame clock and pacing
pub trait Clock {
    /// Seconds since the previous frame
    fn elapsed_seconds(&mut self) -> f32;
    /// Hold the loop to `target_fps`
    fn end_frame(&mut self, target_fps: u32);
    /// Block for `secs` seconds
    fn sleep(&mut self, secs: f32);
}

pub trait InputSource {
    fn is_key_held(&self, key: Key) -> bool;
}

pub trait Window {
    fn shutdown_requested(&self) -> bool;
}

pub trait Renderer {
    fn present(&mut self, commands: &[DrawCommand]);
}

/// A complete host
pub trait Host: Clock + InputSource + Window + Renderer {}

impl<T: Clock + InputSource + Window + Renderer> Host for T {}

/// Why the run loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Host asked to close
    Shutdown,
    /// A player won; the victory pause has already elapsed
    MatchOver(Side),
}

/// Sample held keys into tick input
pub fn read_input<I: InputSource + ?Sized>(input: &I, bindings: &KeyBindings) -> TickInput {
    TickInput {
        left: PaddleInput {
            up: input.is_key_held(bindings.left_up),
            down: input.is_key_held(bindings.left_down),
        },
        right: PaddleInput {
            up: input.is_key_held(bindings.right_up),
            down: input.is_key_held(bindings.right_down),
        },
    }
}

/// Run frames until the host closes or the match is won.
///
/// Each iteration reads input, simulates, presents and plays cues. On a win
/// the final frame is presented, the pause runs, and the loop returns.
pub fn run<H: Host, B: SoundBackend>(
    host: &mut H,
    session: &mut Session,
    audio: &mut AudioManager<B>,
    settings: &Settings,
) -> ExitReason {
    log::info!("{} running!", crate::consts::WINDOW_TITLE);

    loop {
        if host.shutdown_requested() {
            log::info!("Shutdown requested");
            return ExitReason::Shutdown;
        }

        let dt = host.elapsed_seconds();
        let input = read_input(&*host, &settings.key_bindings);
        let frame = session.frame(dt, &input);

        host.present(&frame.draws);
        for cue in &frame.sounds {
            audio.play(*cue);
        }

        if let Some(winner) = frame.winner {
            host.sleep(settings.victory_pause_secs);
            return ExitReason::MatchOver(winner);
        }

        host.end_frame(settings.target_fps);
    }
}
