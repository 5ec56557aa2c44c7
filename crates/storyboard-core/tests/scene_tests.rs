use std::cell::RefCell;
use std::rc::Rc;

use storyboard_core::{Color, Ease, MessageSink, Scene, Target, MIN_SCENE_DURATION};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[derive(Default)]
struct RecordingSink {
    messages: Vec<(String, Color, f32)>,
}

impl MessageSink for RecordingSink {
    fn add_message(&mut self, text: &str, color: Color, duration: f32) {
        self.messages.push((text.to_string(), color, duration));
    }
}

/// it should clamp zero and negative durations to the minimum epsilon
#[test]
fn duration_clamped_to_epsilon() {
    assert_eq!(Scene::wait(0.0).duration(), MIN_SCENE_DURATION);
    assert_eq!(Scene::wait(-5.0).duration(), MIN_SCENE_DURATION);
    assert_eq!(Scene::wait(2.0).duration(), 2.0);
}

/// it should track elapsed time, percentage, and remaining time
#[test]
fn elapsed_accounting() {
    let mut scene = Scene::wait(2.0);
    scene.update(0.5);
    approx(scene.elapsed_time(), 0.5, 1e-6);
    approx(scene.elapsed_percentage(), 0.25, 1e-6);
    approx(scene.remaining_time(), 1.5, 1e-6);
    assert!(!scene.finished());

    // finished is strict: exactly-at-duration is not past the end
    scene.update(1.5);
    approx(scene.elapsed_time(), 2.0, 1e-6);
    assert!(!scene.finished());
    scene.update(0.1);
    assert!(scene.finished());
}

/// it should fire start hooks in insertion order and then reset elapsed time
#[test]
fn start_hooks_in_order_then_reset() {
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::wait(1.0);
    let l1 = Rc::clone(&log);
    let l2 = Rc::clone(&log);
    scene
        .add_start_action(move || l1.borrow_mut().push("first"))
        .add_start_action(move || l2.borrow_mut().push("second"));

    scene.update(0.7);
    scene.on_start();
    assert_eq!(*log.borrow(), vec!["first", "second"]);
    approx(scene.elapsed_time(), 0.0, 1e-6);
}

/// it should fire finish hooks in insertion order and then reset elapsed time
#[test]
fn finish_hooks_in_order_then_reset() {
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::wait(1.0);
    let l1 = Rc::clone(&log);
    let l2 = Rc::clone(&log);
    scene
        .add_finish_action(move || l1.borrow_mut().push("first"))
        .add_finish_action(move || l2.borrow_mut().push("second"));

    scene.update(2.0);
    scene.on_finish();
    assert_eq!(*log.borrow(), vec!["first", "second"]);
    approx(scene.elapsed_time(), 0.0, 1e-6);
}

/// it should capture the start value on the first update and write nothing
/// that frame when constructed without an explicit start
#[test]
fn lazy_capture_skips_first_write() {
    let target = Target::new(0.0f32);
    let mut scene = Scene::interpolate(&target, 10.0, 2.0);
    scene.on_start();

    // Capture reads the slot's value at activation time, not construction.
    target.set(4.0);
    scene.update(1.0);
    approx(target.get(), 4.0, 1e-6);

    // From the second update on, writes blend from the captured start.
    scene.update(0.5);
    approx(target.get(), 8.5, 1e-6); // blend(4, 10, 0.75)
}

/// it should write interpolated values immediately when a start is given
#[test]
fn explicit_start_writes_immediately() {
    let target = Target::new(0.0f32);
    let mut scene = Scene::interpolate_from(&target, 0.0, 10.0, 2.0);
    scene.on_start();
    scene.update(1.0);
    approx(target.get(), 5.0, 1e-6);
}

/// it should post messages through the sink exactly once per firing hook
#[test]
fn message_hooks_post_once() {
    let sink = Rc::new(RefCell::new(RecordingSink::default()));
    let mut scene = Scene::wait(1.0);
    scene
        .add_start_message(&sink, "begin", Color::YELLOW, 5.0)
        .add_finish_message(&sink, "done", Color::GREEN, 2.0);

    scene.on_start();
    assert_eq!(sink.borrow().messages.len(), 1);
    assert_eq!(sink.borrow().messages[0].0, "begin");
    assert_eq!(sink.borrow().messages[0].1, Color::YELLOW);

    scene.on_finish();
    assert_eq!(sink.borrow().messages.len(), 2);
    assert_eq!(sink.borrow().messages[1].0, "done");
    approx(sink.borrow().messages[1].2, 2.0, 1e-6);

    // Hooks fire again on the next activation; nothing is one-shot.
    scene.on_start();
    assert_eq!(sink.borrow().messages.len(), 3);
}

/// it should apply the easing curve to the progress fraction before blending
#[test]
fn eased_interpolation_pins_endpoints() {
    let target = Target::new(0.0f32);
    let mut scene = Scene::interpolate_from(&target, 0.0, 1.0, 1.0);
    scene.ease(Ease::in_out());
    scene.on_start();

    // The canonical in-out curve is symmetric around the midpoint.
    scene.update(0.5);
    approx(target.get(), 0.5, 1e-3);

    scene.update(0.5);
    approx(target.get(), 1.0, 1e-4);
}

/// it should interpolate vector targets component-wise
#[test]
fn vector_target_component_wise() {
    let target = Target::new([0.0f32, 10.0, 100.0]);
    let mut scene = Scene::interpolate_from(&target, [0.0, 10.0, 100.0], [10.0, 20.0, 200.0], 2.0);
    scene.on_start();
    scene.update(1.0);
    let v = target.get();
    approx(v[0], 5.0, 1e-6);
    approx(v[1], 15.0, 1e-6);
    approx(v[2], 150.0, 1e-6);
}
