use std::time::Duration;

use webdom::transitions::interpolate;
use webdom::{Easing, TransitionConfig};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in() {
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert!((Easing::EaseIn.apply(0.25) - 0.0625).abs() < 0.0001);
}

#[test]
fn test_easing_cubic_in_out_midpoint() {
    assert!((Easing::CubicInOut.apply(0.5) - 0.5).abs() < 0.0001);
    assert!(Easing::CubicInOut.apply(0.25) < 0.25);
    assert!(Easing::CubicInOut.apply(0.75) > 0.75);
}

#[test]
fn test_easing_boundaries() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicInOut,
    ] {
        assert!((easing.apply(0.0) - 0.0).abs() < 1e-6, "{:?} at 0", easing);
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

// =============================================================================
// Progress
// =============================================================================

#[test]
fn test_progress_clamps_past_duration() {
    let config = TransitionConfig::new(Duration::from_millis(100), Easing::Linear);
    assert_eq!(config.progress(Duration::ZERO), 0.0);
    assert!((config.progress(Duration::from_millis(50)) - 0.5).abs() < 0.001);
    assert_eq!(config.progress(Duration::from_secs(5)), 1.0);
}

#[test]
fn test_zero_duration_completes_immediately() {
    let config = TransitionConfig::new(Duration::ZERO, Easing::EaseIn);
    assert_eq!(config.progress(Duration::ZERO), 1.0);
}

#[test]
fn test_interpolate() {
    assert_eq!(interpolate(0.0, 10.0, 0.5), 5.0);
    assert_eq!(interpolate(220.0, 100.0, 1.0), 100.0);
}
