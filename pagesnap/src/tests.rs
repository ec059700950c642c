use crate::*;

use alloc::string::ToString;

fn three_sections() -> [SectionRect; 3] {
    [
        SectionRect::new(0.0, 800.0),
        SectionRect::new(800.0, 800.0),
        SectionRect::new(1600.0, 800.0),
    ]
}

#[test]
fn classify_uses_strict_deadband() {
    assert_eq!(classify(100.0, 104.0, 3.0), ScrollDirection::Forward);
    assert_eq!(classify(100.0, 103.0, 3.0), ScrollDirection::Stationary);
    assert_eq!(classify(100.0, 97.0, 3.0), ScrollDirection::Stationary);
    assert_eq!(classify(100.0, 96.0, 3.0), ScrollDirection::Backward);
    assert_eq!(classify(100.0, 100.0, 3.0), ScrollDirection::Stationary);
    assert_eq!(classify(100.0, 103.5, 3.0), ScrollDirection::Forward);
}

#[test]
fn classify_matches_delta_sign_over_a_grid() {
    for prev in [0.0, 10.0, 799.5, 1600.0] {
        for delta in [-50.0, -3.01, -3.0, -1.0, 0.0, 2.99, 3.0, 3.01, 50.0] {
            let expected = if delta > 3.0 {
                ScrollDirection::Forward
            } else if delta < -3.0 {
                ScrollDirection::Backward
            } else {
                ScrollDirection::Stationary
            };
            assert_eq!(
                classify(prev, prev + delta, DIRECTION_MARGIN),
                expected,
                "prev={prev} delta={delta}"
            );
        }
    }
}

#[test]
fn detector_records_every_sample() {
    let mut d = DirectionDetector::new(0.0);
    assert_eq!(d.direction(), ScrollDirection::Stationary);

    assert_eq!(d.sample(2.0), ScrollDirection::Stationary);
    assert_eq!(d.last_offset(), 2.0);

    // 2 -> 6 is a delta of 4, even though 0 -> 6 would also be forward.
    assert_eq!(d.sample(6.0), ScrollDirection::Forward);
    assert_eq!(d.last_offset(), 6.0);

    assert_eq!(d.sample(1.0), ScrollDirection::Backward);
    assert_eq!(d.direction(), ScrollDirection::Backward);
    assert_eq!(d.last_offset(), 1.0);
}

#[test]
fn detector_record_does_not_classify() {
    let mut d = DirectionDetector::new(0.0);
    d.sample(50.0);
    assert_eq!(d.direction(), ScrollDirection::Forward);

    d.record(800.0);
    assert_eq!(d.direction(), ScrollDirection::Forward);
    assert_eq!(d.last_offset(), 800.0);

    // Landing exactly on the recorded destination reads as no movement.
    assert_eq!(d.sample(800.0), ScrollDirection::Stationary);
}

#[test]
fn detector_custom_margin() {
    let mut d = DirectionDetector::new(0.0).with_margin(10.0);
    assert_eq!(d.margin(), 10.0);
    assert_eq!(d.sample(10.0), ScrollDirection::Stationary);
    assert_eq!(d.sample(21.0), ScrollDirection::Forward);
}

#[test]
fn touch_predicates_use_boundary_tolerance() {
    let current = SectionRect::new(800.0, 800.0);
    assert_eq!(current.bottom(), 1600.0);

    // viewport bottom 1598 is not > 1598
    assert!(!ScrollSample::new(798.0, 800.0).touches_next(current));
    assert!(ScrollSample::new(798.5, 800.0).touches_next(current));

    // 798 - 800 = -2 is not < -2
    assert!(!ScrollSample::new(798.0, 800.0).touches_previous(current));
    assert!(ScrollSample::new(797.0, 800.0).touches_previous(current));
}

#[test]
fn tracker_forward_scenario_targets_next_section() {
    let sections = three_sections();
    let tracker = SectionTracker::new(sections.len());

    let mut d = DirectionDetector::new(0.0);
    let direction = d.sample(50.0);
    assert_eq!(direction, ScrollDirection::Forward);

    let sample = ScrollSample::new(50.0, 800.0);
    assert_eq!(sample.viewport_bottom(), 850.0);
    let target = tracker.next_target(sample, sections[0], direction);
    assert_eq!(target, Some(1));

    let to = SectionTracker::destination(direction, sections[1], sample);
    assert_eq!(to, 800.0);
}

#[test]
fn tracker_requires_matching_direction() {
    let sections = three_sections();
    let tracker = SectionTracker::new(sections.len());
    let sample = ScrollSample::new(50.0, 800.0);

    assert_eq!(
        tracker.next_target(sample, sections[0], ScrollDirection::Stationary),
        None
    );
    assert_eq!(
        tracker.next_target(sample, sections[0], ScrollDirection::Backward),
        None
    );
}

#[test]
fn tracker_guards_first_and_last_sections() {
    let sections = three_sections();
    let mut tracker = SectionTracker::new(sections.len());

    // Backward from index 0 is rejected even when the viewport is above the section.
    let above = ScrollSample::new(0.0, 800.0);
    let shifted = SectionRect::new(100.0, 800.0);
    assert!(above.touches_previous(shifted));
    assert_eq!(
        tracker.next_target(above, shifted, ScrollDirection::Backward),
        None
    );

    // Forward from the last index is rejected.
    assert!(tracker.set_current(2));
    let past_end = ScrollSample::new(1700.0, 800.0);
    assert!(past_end.touches_next(sections[2]));
    assert_eq!(
        tracker.next_target(past_end, sections[2], ScrollDirection::Forward),
        None
    );

    // Backward from the last index is allowed.
    let back = ScrollSample::new(1500.0, 800.0);
    assert_eq!(
        tracker.next_target(back, sections[2], ScrollDirection::Backward),
        Some(1)
    );
}

#[test]
fn tracker_backward_destination_backs_up_one_viewport() {
    let sections = [
        SectionRect::new(0.0, 1000.0),
        SectionRect::new(1000.0, 1000.0),
    ];
    let sample = ScrollSample::new(1900.0, 800.0);
    let to = SectionTracker::destination(ScrollDirection::Backward, sections[0], sample);
    // Not sections[0].top.
    assert_eq!(to, 1100.0);

    // Stationary falls into the same branch.
    let to = SectionTracker::destination(ScrollDirection::Stationary, sections[0], sample);
    assert_eq!(to, 1100.0);
}

#[test]
fn tracker_destination_is_never_negative() {
    let sample = ScrollSample::new(120.0, 800.0);
    let to = SectionTracker::destination(
        ScrollDirection::Stationary,
        SectionRect::new(0.0, 800.0),
        sample,
    );
    assert_eq!(to, 0.0);
}

#[test]
fn tracker_set_current_ignores_out_of_range() {
    let mut tracker = SectionTracker::new(3);
    assert!(tracker.set_current(1));
    assert!(!tracker.set_current(3));
    assert_eq!(tracker.current_index(), 1);

    let empty = SectionTracker::new(0);
    assert!(empty.is_empty());
    assert_eq!(empty.last_index(), None);
    assert_eq!(
        empty.next_target(
            ScrollSample::new(500.0, 800.0),
            SectionRect::default(),
            ScrollDirection::Forward
        ),
        None
    );
}

#[test]
fn tracker_resize_clamps_current_index() {
    let mut tracker = SectionTracker::new(5);
    tracker.set_current(4);
    tracker.resize(2);
    assert_eq!(tracker.current_index(), 1);
    assert_eq!(tracker.len(), 2);

    tracker.resize(0);
    assert_eq!(tracker.current_index(), 0);
}

#[test]
fn easings_hit_endpoints() {
    for preset in EasingPreset::ALL {
        let f = preset.function();
        let start = f(0.0, 100.0, 700.0, 500.0);
        let end = f(500.0, 100.0, 700.0, 500.0);
        assert!((start - 100.0).abs() < 1e-9, "{preset} start={start}");
        assert!((end - 800.0).abs() < 1e-9, "{preset} end={end}");
    }
}

#[test]
fn easings_are_monotonic_within_duration() {
    for preset in EasingPreset::ALL {
        let f = preset.function();
        let mut last = f(0.0, 0.0, 1000.0, 400.0);
        for t in (10..=400).step_by(10) {
            let v = f(t as f64, 0.0, 1000.0, 400.0);
            assert!(v + 1e-9 >= last, "{preset} not monotonic at t={t}");
            last = v;
        }
    }
}

#[test]
fn ease_in_out_quad_is_symmetric_at_midpoint() {
    let mid = ease_in_out_quad(250.0, 0.0, 1000.0, 500.0);
    assert!((mid - 500.0).abs() < 1e-9);
    // Ease-in cubic is well below linear at the midpoint.
    assert!(ease_in_cubic(250.0, 0.0, 1000.0, 500.0) < 200.0);
}

#[test]
fn easing_preset_names_round_trip() {
    assert_eq!("easeInOutQuad".parse::<EasingPreset>(), Ok(EasingPreset::EaseInOutQuad));
    assert_eq!("easeInCubic".parse::<EasingPreset>(), Ok(EasingPreset::EaseInCubic));
    assert_eq!("inOutQuintic".parse::<EasingPreset>(), Ok(EasingPreset::InOutQuintic));
    assert_eq!(EasingPreset::InOutQuintic.to_string(), "inOutQuintic");
    assert_eq!(EasingPreset::default(), EasingPreset::EaseInOutQuad);

    let err = "bounce".parse::<EasingPreset>().unwrap_err();
    assert_eq!(err.name, "bounce");
    assert_eq!(err.to_string(), "unknown easing preset `bounce`");
}

#[test]
fn animation_samples_until_duration() {
    let a = ScrollAnimation::new(0.0, 800.0, 100.0, 500.0, EasingPreset::EaseInOutQuad.function());
    assert_eq!(a.sample(100.0), 0.0);
    assert!(!a.is_done(599.0));
    assert!(a.is_done(600.0));
    assert!((a.sample(600.0) - 800.0).abs() < 1e-9);

    // Timestamps before the start clamp to zero elapsed.
    assert_eq!(a.elapsed(50.0), 0.0);
    assert_eq!(a.sample(50.0), 0.0);
}

#[test]
fn animation_overshoots_past_duration_and_reports_residual() {
    let a = ScrollAnimation::new(0.0, 800.0, 0.0, 500.0, EasingPreset::EaseInCubic.function());
    let late = a.sample(520.0);
    assert!(late > 800.0);
    assert!(a.residual(late) < 0.0);
    assert_eq!(a.residual(799.0), 1.0);
}

#[test]
fn animation_clamps_degenerate_duration() {
    let a = ScrollAnimation::new(10.0, 20.0, 0.0, 0.0, EasingPreset::EaseInOutQuad.function());
    assert_eq!(a.duration_ms, 1.0);
    assert!(a.is_done(1.0));
    assert!(a.sample(1.0).is_finite());
}

#[test]
fn validate_duration_rejects_non_positive() {
    assert_eq!(validate_duration(500.0), Ok(500.0));
    assert_eq!(validate_duration(0.0), Err(SnapError::InvalidDuration(0.0)));
    assert_eq!(
        validate_duration(-1.0),
        Err(SnapError::InvalidDuration(-1.0))
    );
    assert!(validate_duration(f64::NAN).is_err());
    assert_eq!(
        SnapError::InvalidDuration(0.0).to_string(),
        "snap duration must be greater than 0ms, got 0ms"
    );
}
