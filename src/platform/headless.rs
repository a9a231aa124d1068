//! Headless host: no window, no audio device
//!
//! Feeds a fixed frame time, reports a settable set of held keys and counts
//! presented frames. Useful for the native binary and for tests.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use super::{Clock, InputSource, Key, Renderer, Window};
use crate::renderer::DrawCommand;

#[derive(Debug)]
pub struct HeadlessHost {
    /// Frame time reported every frame (seconds)
    pub frame_dt: f32,
    held: HashSet<Key>,
    /// Raise shutdown once this many frames were presented
    pub max_frames: Option<u64>,
    /// Sleep to hold the target frame rate and honor pauses
    pub real_time: bool,
    pub frames_presented: u64,
    /// Total pause time requested through `sleep`
    pub slept_secs: f32,
    last_frame: Instant,
}

impl HeadlessHost {
    pub fn new(frame_dt: f32) -> Self {
        Self {
            frame_dt,
            held: HashSet::new(),
            max_frames: None,
            real_time: false,
            frames_presented: 0,
            slept_secs: 0.0,
            last_frame: Instant::now(),
        }
    }

    pub fn hold(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }
}

impl Clock for HeadlessHost {
    fn elapsed_seconds(&mut self) -> f32 {
        self.frame_dt
    }

    fn end_frame(&mut self, target_fps: u32) {
        if self.real_time {
            match Duration::try_from_secs_f32(1.0 / target_fps.max(1) as f32) {
                Ok(budget) => {
                    let spent = self.last_frame.elapsed();
                    if spent < budget {
                        std::thread::sleep(budget - spent);
                    }
                }
                Err(e) => log::warn!("Cannot pace to {} fps: {}", target_fps, e),
            }
        }
        self.last_frame = Instant::now();
    }

    fn sleep(&mut self, secs: f32) {
        self.slept_secs += secs;
        if self.real_time && secs > 0.0 {
            match Duration::try_from_secs_f32(secs) {
                Ok(pause) => std::thread::sleep(pause),
                Err(e) => log::warn!("Skipping pause of {} s: {}", secs, e),
            }
        }
    }
}

impl InputSource for HeadlessHost {
    fn is_key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

impl Window for HeadlessHost {
    fn shutdown_requested(&self) -> bool {
        self.max_frames
            .is_some_and(|max| self.frames_presented >= max)
    }
}

impl Renderer for HeadlessHost {
    fn present(&mut self, commands: &[DrawCommand]) {
        self.frames_presented += 1;
        log::trace!(
            "frame {}: {} draw commands",
            self.frames_presented,
            commands.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys() {
        let mut host = HeadlessHost::new(0.01);
        assert!(!host.is_key_held(Key::W));
        host.hold(Key::W);
        assert!(host.is_key_held(Key::W));
        host.release(Key::W);
        assert!(!host.is_key_held(Key::W));
    }

    #[test]
    fn test_frame_limit_raises_shutdown() {
        let mut host = HeadlessHost::new(0.01);
        host.max_frames = Some(2);
        assert!(!host.shutdown_requested());
        host.present(&[]);
        host.present(&[]);
        assert!(host.shutdown_requested());
        assert_eq!(host.elapsed_seconds(), 0.01);
    }

    #[test]
    fn test_unrepresentable_pause_does_not_panic() {
        let mut host = HeadlessHost::new(0.01);
        host.real_time = true;
        host.sleep(1e30);
        host.sleep(f32::INFINITY);
        assert!(host.slept_secs.is_infinite());
    }

    #[test]
    fn test_sleep_is_recorded_without_real_time() {
        let mut host = HeadlessHost::new(0.01);
        host.sleep(3.0);
        assert_eq!(host.slept_secs, 3.0);
    }
}
