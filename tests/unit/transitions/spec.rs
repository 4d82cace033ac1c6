use super::*;

#[test]
fn minimal_json_gets_defaults() {
    let spec = TransitionSpec::from_json_str(r#"{ "kind": "genie" }"#).unwrap();
    assert_eq!(spec, TransitionSpec::new(TransitionKind::Genie));
    assert_eq!(spec.duration_secs, 0.5);
    assert_eq!(spec.fps, 60);
    assert_eq!(spec.frame_count(), 31);
}

#[test]
fn full_json_parses() {
    let spec = TransitionSpec::from_json_str(
        r#"{
            "kind": "Spread",
            "duration_secs": 1.0,
            "fps": 24,
            "ease": "linear",
            "reverse": true,
            "center": { "x": 12.0, "y": 34.0 },
            "slow_motion": false
        }"#,
    )
    .unwrap();
    assert_eq!(spec.kind, TransitionKind::Spread);
    assert_eq!(spec.center, Some(Point::new(12.0, 34.0)));
    assert_eq!(spec.effective_ease(), Ease::Linear);
    assert_eq!(spec.frame_count(), 25);
}

#[test]
fn unknown_fields_are_serde_errors() {
    let err = TransitionSpec::from_json_str(r#"{ "kind": "tab", "speed": 2 }"#).unwrap_err();
    assert!(matches!(err, PushfxError::Serde(_)));
}

#[test]
fn validation_rejects_bad_timing() {
    let mut spec = TransitionSpec::new(TransitionKind::Tab);
    spec.duration_secs = 0.0;
    assert!(spec.validate().is_err());
    spec.duration_secs = f64::NAN;
    assert!(spec.validate().is_err());
    spec.duration_secs = 0.5;
    spec.fps = 0;
    assert!(spec.validate().is_err());
    spec.fps = 30;
    spec.center = Some(Point::new(f64::INFINITY, 0.0));
    assert!(spec.validate().is_err());
    spec.center = None;
    assert!(spec.validate().is_ok());
}

#[test]
fn slow_motion_triples_duration() {
    let mut spec = TransitionSpec::new(TransitionKind::Navigation);
    spec.slow_motion = true;
    assert_eq!(spec.effective_duration_secs(), 1.5);
    assert_eq!(spec.frame_count(), 91);
}

#[test]
fn short_transitions_still_have_both_endpoints() {
    let mut spec = TransitionSpec::new(TransitionKind::Navigation);
    spec.duration_secs = 0.001;
    assert_eq!(spec.frame_count(), 2);
    assert_eq!(spec.time_at(0), 0.0);
    assert_eq!(spec.time_at(1), 1.0);
}

#[test]
fn times_are_eased_and_monotonic() {
    let spec = TransitionSpec::new(TransitionKind::Tab);
    let last = spec.frame_count() - 1;
    assert_eq!(spec.time_at(0), 0.0);
    assert_eq!(spec.time_at(last), 1.0);
    assert_eq!(spec.time_at(last + 10), 1.0);
    // Ease-out runs ahead of linear time.
    assert!(spec.time_at(last / 2) > 0.5);
    for i in 1..=last {
        assert!(spec.time_at(i) >= spec.time_at(i - 1));
    }
}

#[test]
fn reverse_genie_defaults_to_ease_in() {
    let mut spec = TransitionSpec::new(TransitionKind::Genie);
    spec.reverse = true;
    assert_eq!(spec.effective_ease(), Ease::EaseIn);
    spec.ease = Some(Ease::EaseInOut);
    assert_eq!(spec.effective_ease(), Ease::EaseInOut);
}

#[test]
fn missing_file_is_reported() {
    let err = TransitionSpec::from_path(Path::new("/nonexistent/pushfx/spec.json")).unwrap_err();
    assert!(err.to_string().contains("open transition spec"));
}
