//! Rendering requests
//!
//! The game never draws directly. It produces `DrawCommand`s that a host
//! renderer turns into pixels.

pub mod command;
pub mod scene;

pub use command::{DrawCommand, colors};
pub use scene::{build_scene, hud};
