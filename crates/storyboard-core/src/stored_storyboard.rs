//! Public API: parse StoredStoryboard-style JSON into the canonical
//! `StoryboardData` model (data.rs) and build a ready-to-play `Sequencer`
//! against a target resolver and a message sink.
//!
//! Notes:
//! - Durations are in the host's frame-time units, same as `update(dt)`.
//! - Interpolate entries without a `start` value capture it from the target
//!   slot on their first active frame.
//! - Building restarts playback once per appended scene; the returned
//!   sequencer sits at the first scene, paused, like any new sequencer.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::binding::TargetResolver;
use crate::config::Config;
use crate::data::{SceneData, StoryboardData};
use crate::host::MessageSink;
use crate::scene::Scene;
use crate::sequencer::Sequencer;

/// Errors produced while parsing or building stored storyboards.
#[derive(Debug, Error)]
pub enum StoryboardError {
    #[error("storyboard json parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scene {index}: duration must be finite, got {duration}")]
    BadDuration { index: usize, duration: f32 },
    #[error("scene {index}: target path must not be empty")]
    EmptyTarget { index: usize },
    #[error("scene {index}: start and end values must share a kind")]
    KindMismatch { index: usize },
    #[error("no target registered for path '{0}'")]
    UnresolvedTarget(String),
}

/// Parse stored-storyboard JSON and validate basic invariants.
pub fn parse_stored_storyboard_json(s: &str) -> Result<StoryboardData, StoryboardError> {
    let data: StoryboardData = serde_json::from_str(s)?;
    data.validate_basic()?;
    Ok(data)
}

/// Build a sequencer from storyboard data with the default config.
pub fn build_sequencer<G: MessageSink + 'static>(
    data: &StoryboardData,
    resolver: &mut dyn TargetResolver,
    sink: &Rc<RefCell<G>>,
) -> Result<Sequencer, StoryboardError> {
    build_sequencer_with_config(data, resolver, sink, Config::default())
}

/// Build a sequencer from storyboard data. Interpolation targets are looked
/// up through `resolver`; message scenes post to `sink`.
pub fn build_sequencer_with_config<G: MessageSink + 'static>(
    data: &StoryboardData,
    resolver: &mut dyn TargetResolver,
    sink: &Rc<RefCell<G>>,
    cfg: Config,
) -> Result<Sequencer, StoryboardError> {
    data.validate_basic()?;

    let default_display = cfg.default_message_duration;
    let message_duration = cfg.message_scene_duration;
    let mut seq = Sequencer::with_config(cfg);

    for scene_data in &data.scenes {
        match scene_data {
            SceneData::Wait { duration } => {
                seq.push_scene(Scene::wait(*duration));
            }
            SceneData::Message {
                text,
                color,
                display_duration,
            } => {
                let display = display_duration.unwrap_or(default_display);
                seq.push_scene(Scene::wait(message_duration)).add_start_message(
                    sink,
                    text.clone(),
                    *color,
                    display,
                );
            }
            SceneData::Interpolate {
                target,
                start,
                end,
                duration,
                ease,
            } => {
                let slot = resolver
                    .resolve(target)
                    .ok_or_else(|| StoryboardError::UnresolvedTarget(target.clone()))?;
                let scene = match start {
                    Some(start) => {
                        Scene::interpolate_from(&slot, start.clone(), end.clone(), *duration)
                    }
                    None => Scene::interpolate(&slot, end.clone(), *duration),
                };
                let scene = seq.push_scene(scene);
                if let Some(ease) = ease {
                    scene.ease(*ease);
                }
            }
        }
    }

    if data.looped {
        seq.set_loop(true);
    }
    if data.pause_after_each {
        seq.pause_after_every_scene(true);
    }
    Ok(seq)
}
