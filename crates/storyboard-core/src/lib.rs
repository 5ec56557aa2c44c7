//! Storyboard Core (engine-agnostic)
//!
//! A time-driven scene sequencer: ordered, timed scenes with start/finish
//! hook lists, generic interpolation into caller-owned value slots,
//! pause/resume behind a debounced level counter, pause-after-each-scene,
//! and looped playback. Hosts drive the core with one `Sequencer::update(dt)`
//! per frame and supply the presentation surface and pause input as traits;
//! the core renders nothing and polls no hardware itself.
//!
//! Hook panics are not caught anywhere in the core: a panicking start or
//! finish hook unwinds out of the `update` call that fired it.

pub mod binding;
pub mod config;
pub mod data;
pub mod host;
pub mod interp;
pub mod scene;
pub mod sequencer;
pub mod stored_storyboard;
pub mod target;
pub mod value;

// Re-exports for consumers (adapters)
pub use binding::{TargetRegistry, TargetResolver};
pub use config::{Config, MIN_SCENE_DURATION};
pub use data::{SceneData, StoryboardData};
pub use host::{Color, InputSource, MessageSink, NoInput};
pub use interp::{Blend, Ease};
pub use scene::{message_hook, Hook, Scene};
pub use sequencer::Sequencer;
pub use stored_storyboard::{
    build_sequencer, build_sequencer_with_config, parse_stored_storyboard_json, StoryboardError,
};
pub use target::Target;
pub use value::{Value, ValueKind};
