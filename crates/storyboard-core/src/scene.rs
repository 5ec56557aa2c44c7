//! Scenes: duration-bounded timers with start/finish hook lists, optionally
//! driving an interpolated value into a shared target slot on every update.
//!
//! The two scene bodies (plain wait vs. interpolating) form a closed set
//! dispatched through the private `Drive` interface; there is no inheritance
//! hierarchy to extend.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;

use crate::config::MIN_SCENE_DURATION;
use crate::host::{Color, MessageSink};
use crate::interp::{Blend, Ease};
use crate::target::Target;

/// Zero-argument side-effecting callback run when a scene starts or finishes.
/// Hooks are not guarded: one that panics unwinds out of the update call that
/// fired it.
pub type Hook = Box<dyn FnMut()>;

/// Per-kind update behavior, called with the eased progress fraction.
trait Drive {
    fn drive(&mut self, progress: f32);
}

/// Interpolating body: writes `blend(start, end, progress)` through the
/// target slot. With `capture_start` set, the first drive after activation
/// records `start` from the slot and writes nothing that frame, so the
/// just-captured value is not clobbered before it is known.
struct Lerp<T: Blend> {
    target: Target<T>,
    start: T,
    end: T,
    capture_start: bool,
}

impl<T: Blend> Drive for Lerp<T> {
    fn drive(&mut self, progress: f32) {
        if self.capture_start {
            self.start = self.target.get();
            self.capture_start = false;
            return;
        }
        self.target.set(T::blend(&self.start, &self.end, progress));
    }
}

/// One timed unit of playback within a sequence.
///
/// `duration` is floored to [`MIN_SCENE_DURATION`] at construction, so the
/// elapsed fraction is always well-defined. `elapsed` resets to 0 exactly
/// when `on_start` or `on_finish` fires.
pub struct Scene {
    duration: f32,
    elapsed: f32,
    ease: Ease,
    start_hooks: Vec<Hook>,
    finish_hooks: Vec<Hook>,
    driver: Option<Box<dyn Drive>>,
}

/// Build the "post a transient message" hook used by the message helpers.
/// The sink handle is cloned into the hook; the surface is called exactly
/// once each time the hook fires.
pub fn message_hook<G: MessageSink + 'static>(
    sink: &Rc<RefCell<G>>,
    text: String,
    color: Color,
    duration: f32,
) -> Hook {
    let sink = Rc::clone(sink);
    Box::new(move || {
        sink.borrow_mut().add_message(&text, color, duration);
    })
}

impl Scene {
    fn with_duration(duration: f32) -> Self {
        let clamped = duration.max(MIN_SCENE_DURATION);
        if clamped != duration {
            warn!("scene duration {duration} clamped to {MIN_SCENE_DURATION}");
        }
        Scene {
            duration: clamped,
            elapsed: 0.0,
            ease: Ease::Linear,
            start_hooks: Vec::new(),
            finish_hooks: Vec::new(),
            driver: None,
        }
    }

    /// A plain timed scene: runs for `duration`, fires hooks, drives nothing.
    pub fn wait(duration: f32) -> Self {
        Self::with_duration(duration)
    }

    /// Interpolating scene whose start value is captured from the target's
    /// current value on the first update after activation.
    pub fn interpolate<T: Blend>(target: &Target<T>, end: T, duration: f32) -> Self {
        let mut scene = Self::with_duration(duration);
        scene.driver = Some(Box::new(Lerp {
            target: target.clone(),
            start: target.get(),
            end,
            capture_start: true,
        }));
        scene
    }

    /// Interpolating scene with an explicit start value; no lazy capture.
    pub fn interpolate_from<T: Blend>(target: &Target<T>, start: T, end: T, duration: f32) -> Self {
        let mut scene = Self::with_duration(duration);
        scene.driver = Some(Box::new(Lerp {
            target: target.clone(),
            start,
            end,
            capture_start: false,
        }));
        scene
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed
    }

    pub fn elapsed_percentage(&self) -> f32 {
        self.elapsed / self.duration
    }

    pub fn remaining_time(&self) -> f32 {
        self.duration - self.elapsed
    }

    /// Strictly past the end: exactly-at-duration is not finished.
    pub fn finished(&self) -> bool {
        self.elapsed > self.duration
    }

    /// Advance elapsed time and run the body. The progress handed to an
    /// interpolating body is not clamped; callers stop updating once
    /// `finished()` reports true.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        let progress = self.ease.apply(self.elapsed / self.duration);
        if let Some(driver) = self.driver.as_mut() {
            driver.drive(progress);
        }
    }

    /// Run every start hook in insertion order, then reset elapsed time.
    pub fn on_start(&mut self) {
        for hook in &mut self.start_hooks {
            hook();
        }
        self.elapsed = 0.0;
    }

    /// Run every finish hook in insertion order, then reset elapsed time.
    pub fn on_finish(&mut self) {
        for hook in &mut self.finish_hooks {
            hook();
        }
        self.elapsed = 0.0;
    }

    /// Replace the easing curve applied to the progress fraction.
    pub fn ease(&mut self, ease: Ease) -> &mut Self {
        self.ease = ease;
        self
    }

    pub fn add_start_action(&mut self, f: impl FnMut() + 'static) -> &mut Self {
        self.start_hooks.push(Box::new(f));
        self
    }

    pub fn add_finish_action(&mut self, f: impl FnMut() + 'static) -> &mut Self {
        self.finish_hooks.push(Box::new(f));
        self
    }

    pub fn add_start_message<G: MessageSink + 'static>(
        &mut self,
        sink: &Rc<RefCell<G>>,
        text: impl Into<String>,
        color: Color,
        duration: f32,
    ) -> &mut Self {
        self.start_hooks
            .push(message_hook(sink, text.into(), color, duration));
        self
    }

    pub fn add_finish_message<G: MessageSink + 'static>(
        &mut self,
        sink: &Rc<RefCell<G>>,
        text: impl Into<String>,
        color: Color,
        duration: f32,
    ) -> &mut Self {
        self.finish_hooks
            .push(message_hook(sink, text.into(), color, duration));
        self
    }
}
