//! Canonical storyboard data model (StoredStoryboard).
//! Value kinds are defined in value.rs.

use serde::{Deserialize, Serialize};

use crate::host::Color;
use crate::interp::Ease;
use crate::stored_storyboard::StoryboardError;
use crate::value::Value;

/// One scene entry in a stored storyboard, tagged by kind.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneData {
    /// Plain timed scene with no body.
    Wait { duration: f32 },

    /// Nominal-duration scene posting one message when it starts.
    Message {
        text: String,
        #[serde(default)]
        color: Color,
        /// On-screen duration; the builder's config default applies when
        /// absent.
        #[serde(default)]
        display_duration: Option<f32>,
    },

    /// Interpolating scene driving the slot registered under `target`.
    Interpolate {
        /// Canonical target path (e.g., "hud.banner.alpha")
        target: String,
        /// Absent start means capture-on-activate.
        #[serde(default)]
        start: Option<Value>,
        end: Value,
        duration: f32,
        #[serde(default)]
        ease: Option<Ease>,
    },
}

/// Canonical StoredStoryboard format (standard, single supported schema).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoryboardData {
    pub name: String,
    pub scenes: Vec<SceneData>,
    #[serde(default)]
    pub looped: bool,
    #[serde(default)]
    pub pause_after_each: bool,
}

impl StoryboardData {
    /// Validate basic invariants (finite durations, non-empty target paths,
    /// kind-matched interpolation endpoints).
    pub fn validate_basic(&self) -> Result<(), StoryboardError> {
        for (index, scene) in self.scenes.iter().enumerate() {
            match scene {
                SceneData::Wait { duration } => {
                    if !duration.is_finite() {
                        return Err(StoryboardError::BadDuration {
                            index,
                            duration: *duration,
                        });
                    }
                }
                SceneData::Message {
                    display_duration, ..
                } => {
                    if let Some(d) = display_duration {
                        if !d.is_finite() {
                            return Err(StoryboardError::BadDuration {
                                index,
                                duration: *d,
                            });
                        }
                    }
                }
                SceneData::Interpolate {
                    target,
                    start,
                    end,
                    duration,
                    ..
                } => {
                    if !duration.is_finite() {
                        return Err(StoryboardError::BadDuration {
                            index,
                            duration: *duration,
                        });
                    }
                    if target.is_empty() {
                        return Err(StoryboardError::EmptyTarget { index });
                    }
                    if let Some(start) = start {
                        if start.kind() != end.kind() {
                            return Err(StoryboardError::KindMismatch { index });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
