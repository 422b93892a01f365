use std::cell::Cell;
use std::rc::Rc;

use approx::assert_relative_eq;
use tweenkit_core::{Config, Interpolator};

fn completion_counter() -> (Rc<Cell<u32>>, impl FnOnce()) {
    let count = Rc::new(Cell::new(0));
    let sink = Rc::clone(&count);
    (count, move || sink.set(sink.get() + 1))
}

/// Drive ticks until the ramp releases, with a runaway bound.
fn drive(tween: &mut Interpolator<f32>) -> u32 {
    let mut ticks = 0;
    while tween.tick() {
        ticks += 1;
        assert!(ticks < 10_000, "ramp never completed");
    }
    ticks + 1
}

/// it should land exactly on the target after roughly duration * tick_rate ticks
#[test]
fn ramp_reaches_target_exactly() {
    let (count, on_complete) = completion_counter();
    let mut tween = Interpolator::linear(0.0f32, 10.0, |_| {}).unwrap();

    tween.animate_then(1.0, 0.5, on_complete);
    assert!(tween.is_animating());

    let ticks = drive(&mut tween);
    // 0.5 s at 60 ticks/s, plus/minus float accumulation.
    assert!((29..=31).contains(&ticks), "took {ticks} ticks");
    assert_eq!(tween.progress(), 1.0);
    assert!(!tween.is_animating());
    assert_eq!(count.get(), 1);

    // Ramp is released: further ticks are no-ops.
    assert!(!tween.tick());
    assert_eq!(count.get(), 1);
}

/// it should ramp downward when the target is below current progress
#[test]
fn ramp_runs_downward() {
    let (count, on_complete) = completion_counter();
    let mut tween = Interpolator::linear(0.0f32, 10.0, |_| {}).unwrap();
    tween.set_progress(1.0);

    tween.animate_then(0.0, 0.25, on_complete);
    drive(&mut tween);
    assert_eq!(tween.progress(), 0.0);
    assert_relative_eq!(tween.value(), 0.0, epsilon = 1e-4);
    assert_eq!(count.get(), 1);
}

/// it should cancel the ramp and fire the completion early on stop
#[test]
fn stop_mid_ramp_fires_completion() {
    let (count, on_complete) = completion_counter();
    let mut tween = Interpolator::linear(0.0f32, 10.0, |_| {}).unwrap();

    tween.animate_then(1.0, 1.0, on_complete);
    for _ in 0..5 {
        assert!(tween.tick());
    }
    assert!(tween.progress() < 1.0);

    tween.stop_animation();
    assert!(!tween.is_animating());
    assert_eq!(count.get(), 1);

    // Stopping again is a no-op.
    tween.stop_animation();
    assert_eq!(count.get(), 1);
}

/// it should drop the superseded completion unfired when animate is re-issued
#[test]
fn superseding_animate_drops_old_completion() {
    let (first, first_done) = completion_counter();
    let (second, second_done) = completion_counter();
    let mut tween = Interpolator::linear(0.0f32, 10.0, |_| {}).unwrap();

    tween.animate_then(1.0, 1.0, first_done);
    for _ in 0..5 {
        tween.tick();
    }
    tween.animate_then(1.0, 0.1, second_done);

    drive(&mut tween);
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);
}

/// it should honor an injected tick rate in the duration math
#[test]
fn injected_tick_rate_changes_step() {
    let mut tween = Interpolator::linear(0.0f32, 10.0, |_| {}).unwrap();
    tween.set_config(Config { tick_rate: 10.0 });

    tween.animate(1.0, 1.0);
    let ticks = drive(&mut tween);
    assert!((9..=11).contains(&ticks), "took {ticks} ticks");
    assert_eq!(tween.progress(), 1.0);
}

/// it should reach the target on the first tick for a degenerate duration
#[test]
fn degenerate_duration_completes_immediately() {
    let (count, on_complete) = completion_counter();
    let mut tween = Interpolator::linear(0.0f32, 10.0, |_| {}).unwrap();

    tween.animate_then(1.0, 0.0, on_complete);
    assert!(!tween.tick());
    assert_eq!(tween.progress(), 1.0);
    assert_eq!(count.get(), 1);
}

/// it should treat stop and tick as no-ops while idle
#[test]
fn idle_engine_ignores_clock() {
    let mut tween = Interpolator::linear(0.0f32, 10.0, |_| {}).unwrap();
    assert!(!tween.is_animating());
    assert!(!tween.tick());
    tween.stop_animation();
    assert_eq!(tween.progress(), 0.0);
}

/// it should notify the apply callback on every tick of a ramp
#[test]
fn ramp_notifies_per_tick() {
    let seen = Rc::new(Cell::new(0u32));
    let sink = Rc::clone(&seen);
    let mut tween = Interpolator::linear(0.0f32, 10.0, move |_| sink.set(sink.get() + 1)).unwrap();

    tween.animate(1.0, 0.1);
    let ticks = drive(&mut tween);
    assert_eq!(seen.get(), ticks);
}
