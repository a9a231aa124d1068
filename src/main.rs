//! Paddle Duel entry point
//!
//! Loads settings and plays one match on the headless host. Exits with
//! success when the match ends or the host shuts down.

use paddle_duel::audio::{AudioManager, LogSoundBackend};
use paddle_duel::platform::{self, ExitReason, HeadlessHost};
use paddle_duel::{Session, Settings};

fn main() {
    env_logger::init();
    log::info!("Paddle Duel (native) starting...");

    let settings = Settings::load_or_default();

    let mut host = HeadlessHost::new(settings.frame_dt());
    host.real_time = settings.real_time;
    host.max_frames = settings.max_frames;

    let mut audio = AudioManager::new(LogSoundBackend::default());
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let mut session = Session::new(settings.seed);

    match platform::run(&mut host, &mut session, &mut audio, &settings) {
        ExitReason::MatchOver(winner) => {
            let result = serde_json::to_string(&session.state().match_state)
                .unwrap_or_else(|e| format!("<unserializable: {}>", e));
            log::info!("{} won after {} frames: {}", winner.label(), host.frames_presented, result);
        }
        ExitReason::Shutdown => {
            log::info!("Closed after {} frames", host.frames_presented);
        }
    }
}
