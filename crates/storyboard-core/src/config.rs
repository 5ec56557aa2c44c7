//! Core configuration for storyboard-core.

use serde::{Deserialize, Serialize};

/// Floor applied to every scene duration at construction. Keeps
/// `elapsed / duration` well-defined for zero or negative inputs.
pub const MIN_SCENE_DURATION: f32 = 1e-4;

/// Configuration for playback nominal values.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Duration of a message-only scene added via `add_message_scene`.
    pub message_scene_duration: f32,

    /// On-screen duration handed to the presentation surface for message hooks
    /// that do not specify one.
    pub default_message_duration: f32,

    /// Ceiling for the pause level counter (see `Sequencer::play`).
    pub pause_debounce_cap: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_scene_duration: 1.0,
            default_message_duration: 5.0,
            pause_debounce_cap: 2,
        }
    }
}
