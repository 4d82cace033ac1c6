use super::*;

#[test]
fn time_is_a_unit_scalar() {
    let attrs = TransitionKind::Genie.attributes();
    let time = attrs.param("time").unwrap();
    assert_eq!(time.class, ParamClass::Scalar);
    assert_eq!(time.default, Some(ParamValue::Scalar(0.0)));
    assert_eq!((time.min, time.max), (Some(0.0), Some(1.0)));
    assert_eq!((time.slider_min, time.slider_max), (Some(0.0), Some(1.0)));
}

#[test]
fn only_spread_has_a_center() {
    for kind in TransitionKind::ALL {
        let attrs = kind.attributes();
        assert_eq!(attrs.param("center").is_some(), kind == TransitionKind::Spread);
        for key in [
            "time",
            "extent",
            "source",
            "destination",
            "is_reverse_transition",
        ] {
            assert!(attrs.param(key).is_some(), "{kind}: {key}");
        }
    }
    let center = TransitionKind::Spread.attributes().param("center").cloned();
    assert_eq!(
        center.and_then(|c| c.default),
        Some(ParamValue::Position { x: 100.0, y: 100.0 })
    );
}

#[test]
fn json_omits_unset_bounds() {
    let json = TransitionKind::Tab.attributes().to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["display_name"], "Tab Transition");
    assert_eq!(value["categories"][0], CATEGORY_TRANSITION);

    let reverse = &value["params"][4];
    assert_eq!(reverse["key"], "is_reverse_transition");
    assert_eq!(reverse["class"], "boolean");
    assert_eq!(reverse["default"], false);
    assert!(reverse.get("min").is_none());

    let extent = &value["params"][1];
    assert_eq!(extent["default"]["width"], 0.0);
}
