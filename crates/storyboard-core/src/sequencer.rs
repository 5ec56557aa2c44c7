//! Sequencer: owns an ordered list of scenes and advances a cursor through
//! them, one `update(dt)` per host frame.
//!
//! Single-threaded and cooperative. `update` must not be re-entered: hooks
//! must not call back into the sequencer that fired them. A panicking hook
//! unwinds out of `update`; nothing here catches it.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::config::Config;
use crate::host::{Color, InputSource, MessageSink, NoInput};
use crate::interp::Blend;
use crate::scene::Scene;
use crate::target::Target;

/// Plays scenes strictly in insertion order. The cursor only moves forward,
/// or wraps to the first scene when looping; `reset` is the only other way
/// back.
pub struct Sequencer {
    cfg: Config,
    scenes: Vec<Scene>,
    cursor: usize,
    current_started: bool,
    /// Pause level counter. The naming is inherited and inverted from the
    /// obvious reading: level 0 means paused, `play` raises the level toward
    /// the debounce cap, `pause` lowers it. See `paused`.
    paused: u8,
    pause_after_scene: bool,
    looping: bool,
    input: Box<dyn InputSource>,
}

impl std::fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("cfg", &self.cfg)
            .field("scenes", &self.scenes.len())
            .field("cursor", &self.cursor)
            .field("current_started", &self.current_started)
            .field("paused", &self.paused)
            .field("pause_after_scene", &self.pause_after_scene)
            .field("looping", &self.looping)
            .finish_non_exhaustive()
    }
}

impl Sequencer {
    /// A sequencer with default config and no pause control. Note that a new
    /// sequencer starts at pause level 0, i.e. paused: call `play` before the
    /// first `update` that should advance time.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(cfg: Config) -> Self {
        Sequencer {
            cfg,
            scenes: Vec::new(),
            cursor: 0,
            current_started: false,
            paused: 0,
            pause_after_scene: false,
            looping: false,
            input: Box::new(NoInput),
        }
    }

    /// Install the live pause-control signal polled by `pause`.
    pub fn set_input_source(&mut self, input: impl InputSource + 'static) {
        self.input = Box::new(input);
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// True once the cursor has moved past the last scene.
    pub fn past_end(&self) -> bool {
        self.cursor >= self.scenes.len()
    }

    pub fn current_scene(&self) -> Option<&Scene> {
        self.scenes.get(self.cursor)
    }

    pub fn current_scene_mut(&mut self) -> Option<&mut Scene> {
        self.scenes.get_mut(self.cursor)
    }

    /// Cursor back to the first scene, started flag cleared. Pause state is
    /// left untouched.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.current_started = false;
    }

    /// Advance playback by `dt`. At most one lifecycle step happens per call:
    /// a scene's finish and the next scene's start never share a call, nor do
    /// a scene's start and its first time advance.
    pub fn update(&mut self, dt: f32) {
        if self.past_end() {
            if self.looping {
                debug!("storyboard looped back to scene 0");
                self.reset();
            }
            return;
        }

        if self.paused() {
            return;
        }

        if self.scenes[self.cursor].finished() {
            self.scenes[self.cursor].on_finish();
            debug!("scene {} finished", self.cursor);
            self.cursor += 1;
            self.current_started = false;
            if self.pause_after_scene {
                self.pause();
            }
            return;
        }

        if !self.current_started {
            self.scenes[self.cursor].on_start();
            self.current_started = true;
            debug!("scene {} started", self.cursor);
            return;
        }

        self.scenes[self.cursor].update(dt);
    }

    /// Append a prebuilt scene and return it for hook chaining. Every append
    /// restarts playback from the first scene, so add all scenes up front or
    /// accept the restart.
    pub fn push_scene(&mut self, scene: Scene) -> &mut Scene {
        let idx = self.scenes.len();
        self.scenes.push(scene);
        self.reset();
        &mut self.scenes[idx]
    }

    /// Append an interpolating scene whose start value is captured from the
    /// target on its first active frame.
    pub fn add_scene<T: Blend>(&mut self, target: &Target<T>, end: T, duration: f32) -> &mut Scene {
        self.push_scene(Scene::interpolate(target, end, duration))
    }

    /// Append an interpolating scene with an explicit start value.
    pub fn add_scene_from<T: Blend>(
        &mut self,
        target: &Target<T>,
        start: T,
        end: T,
        duration: f32,
    ) -> &mut Scene {
        self.push_scene(Scene::interpolate_from(target, start, end, duration))
    }

    /// Append a message-only scene: a nominal-duration wait carrying a single
    /// start hook that posts `text` to the sink with the configured on-screen
    /// duration.
    pub fn add_message_scene<G: MessageSink + 'static>(
        &mut self,
        sink: &Rc<RefCell<G>>,
        text: impl Into<String>,
        color: Color,
    ) -> &mut Scene {
        let duration = self.cfg.message_scene_duration;
        let display = self.cfg.default_message_duration;
        let scene = self.push_scene(Scene::wait(duration));
        scene.add_start_message(sink, text, color, display);
        scene
    }

    /// True exactly when the pause level is 0 (the inherited inverted
    /// convention). A freshly constructed sequencer is paused.
    pub fn paused(&self) -> bool {
        self.paused == 0
    }

    /// Current pause level (0 = paused, up to the debounce cap).
    pub fn pause_level(&self) -> u8 {
        self.paused
    }

    /// Raise the pause level toward the debounce cap. One call resumes a
    /// paused sequencer; calls beyond the cap are absorbed.
    pub fn play(&mut self) {
        if self.paused < self.cfg.pause_debounce_cap {
            self.paused += 1;
        }
    }

    /// Lower the pause level toward 0 (paused), but only while the pause
    /// control is not held; the held key debounces repeated per-frame calls.
    /// The input source is polled live on every call.
    pub fn pause(&mut self) {
        if self.paused > 0 && !self.input.pause_held() {
            self.paused -= 1;
        }
    }

    /// When enabled, the sequencer pauses after each scene's finish hooks
    /// run; enabling pauses immediately.
    pub fn pause_after_every_scene(&mut self, enabled: bool) {
        self.pause_after_scene = enabled;
        if enabled {
            self.pause();
        }
    }

    pub fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn in_a_loop(&self) -> bool {
        self.looping
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}
