use super::*;

#[test]
fn parse_accepts_names_and_aliases() {
    assert_eq!(TransitionKind::parse("navigation").unwrap(), TransitionKind::Navigation);
    assert_eq!(TransitionKind::parse(" Push ").unwrap(), TransitionKind::Navigation);
    assert_eq!(TransitionKind::parse("SPREAD").unwrap(), TransitionKind::Spread);
    assert_eq!("genie".parse::<TransitionKind>().unwrap(), TransitionKind::Genie);
    assert_eq!("Tab".parse::<TransitionKind>().unwrap(), TransitionKind::Tab);
}

#[test]
fn parse_rejects_empty_and_unknown() {
    assert!(matches!(
        TransitionKind::parse("  "),
        Err(PushfxError::Validation(_))
    ));
    let err = TransitionKind::parse("dissolve").unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation error: unknown transition kind 'dissolve'"
    );
}

#[test]
fn names_round_trip_through_parse() {
    for kind in TransitionKind::ALL {
        assert_eq!(TransitionKind::parse(kind.name()).unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
}

#[test]
fn serde_uses_lowercase_names_and_aliases() {
    assert_eq!(
        serde_json::to_string(&TransitionKind::Genie).unwrap(),
        "\"genie\""
    );
    let kind: TransitionKind = serde_json::from_str("\"Push\"").unwrap();
    assert_eq!(kind, TransitionKind::Navigation);
    assert!(serde_json::from_str::<TransitionKind>("\"zoom\"").is_err());
}

#[test]
fn filters_report_their_kind() {
    for kind in TransitionKind::ALL {
        assert_eq!(kind.filter().kind(), kind);
    }
}

#[test]
fn display_names() {
    assert_eq!(TransitionKind::Tab.display_name(), "Tab Transition");
    assert_eq!(
        TransitionKind::Navigation.display_name(),
        "Navigation Transition"
    );
}

#[test]
fn genie_eases_in_when_reversed() {
    assert_eq!(TransitionKind::Genie.default_ease(true), Ease::EaseIn);
    assert_eq!(TransitionKind::Genie.default_ease(false), Ease::EaseOut);
    assert_eq!(TransitionKind::Spread.default_ease(true), Ease::EaseOut);
}
