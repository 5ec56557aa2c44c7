//! Host-facing contracts consumed by the core.
//!
//! The core renders nothing and polls no hardware. Hosts hand it a
//! `MessageSink` for transient on-screen messages and an `InputSource` for
//! the pause control; both are sampled only when the owning hook or control
//! method runs.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color carried by message hooks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Presentation surface: receives one message per firing message hook.
pub trait MessageSink {
    /// `duration` is how long the surface should keep the message visible,
    /// in the same time units the host feeds to `Sequencer::update`.
    fn add_message(&mut self, text: &str, color: Color, duration: f32);
}

/// Live pause-control signal, polled fresh inside `Sequencer::pause`,
/// never cached between calls.
pub trait InputSource {
    fn pause_held(&self) -> bool;
}

/// Input source for hosts without a pause control: the control is never held,
/// so `pause` always lowers the level.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl InputSource for NoInput {
    fn pause_held(&self) -> bool {
        false
    }
}
