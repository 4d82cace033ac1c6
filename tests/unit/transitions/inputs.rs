use super::*;
use crate::foundation::core::Rgba8Premul;

fn solid() -> Image {
    Image::solid(Rgba8Premul::opaque(1, 2, 3))
}

fn extent() -> Rect {
    Rect::new(0.0, 0.0, 200.0, 100.0)
}

#[test]
fn push_progress_clamps_then_flips() {
    assert_eq!(push_progress(0.25, false), 0.25);
    assert_eq!(push_progress(0.25, true), 0.75);
    assert_eq!(push_progress(-3.0, false), 0.0);
    assert_eq!(push_progress(7.0, true), 0.0);
    assert_eq!(push_progress(f64::NAN, true), 1.0);
}

#[test]
fn roles_swap_on_reverse() {
    assert_eq!(
        LayerRoles::assign("a", "b", false),
        LayerRoles {
            outgoing: "a",
            incoming: "b"
        }
    );
    assert_eq!(
        LayerRoles::assign("a", "b", true),
        LayerRoles {
            outgoing: "b",
            incoming: "a"
        }
    );
}

#[test]
fn missing_inputs_reported_in_order() {
    let none = TransitionInputs::default();
    assert!(matches!(
        none.prepare(),
        Err(PushfxError::MissingInput(InputKey::SourceImage))
    ));

    let only_source = TransitionInputs {
        source: Some(solid()),
        ..TransitionInputs::default()
    };
    assert!(matches!(
        only_source.prepare(),
        Err(PushfxError::MissingInput(InputKey::DestinationImage))
    ));

    let no_extent = TransitionInputs {
        extent: None,
        ..TransitionInputs::new(solid(), solid(), extent())
    };
    assert!(matches!(
        no_extent.prepare(),
        Err(PushfxError::MissingInput(InputKey::Extent))
    ));
}

#[test]
fn degenerate_extent_counts_as_missing() {
    for rect in [
        Rect::new(0.0, 0.0, 0.0, 100.0),
        Rect::new(0.0, 0.0, f64::INFINITY, 100.0),
    ] {
        let inputs = TransitionInputs::new(solid(), solid(), rect);
        assert!(matches!(
            inputs.prepare(),
            Err(PushfxError::MissingInput(InputKey::Extent))
        ));
    }
}

#[test]
fn prepare_assigns_roles_and_progress() {
    let a = solid();
    let b = solid();
    let inputs = TransitionInputs::new(a.clone(), b.clone(), extent())
        .with_time(0.2)
        .with_reverse(true);
    let prepared = inputs.prepare().unwrap();
    assert!(prepared.roles.outgoing.ptr_eq(&b));
    assert!(prepared.roles.incoming.ptr_eq(&a));
    assert!((prepared.push - 0.8).abs() < 1e-12);
    assert_eq!(prepared.extent, extent());
}

#[test]
fn compose_swallows_missing_inputs() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let inputs = TransitionInputs::default().with_time(0.5);
    for kind in TransitionKind::ALL {
        assert!(kind.filter().compose(&inputs).is_none());
        assert!(kind.filter().try_compose(&inputs).is_err());
    }
}

#[test]
fn back_darkens_quadratically() {
    assert_eq!(back_brightness(0.0), 0.0);
    assert!((back_brightness(0.5) + 0.025).abs() < 1e-12);
    assert!((back_brightness(1.0) + 0.1).abs() < 1e-12);
}

#[test]
fn failed_transform_skips_bump() {
    let front = solid();
    let failure = Err(stages::StageFailure::NonFinite {
        stage: "affine_transform",
        param: "transform",
    });
    let mut bump_ran = false;
    let out = transform_then_bump(&front, failure, |img| {
        bump_ran = true;
        Ok(img.clone())
    });
    assert!(!bump_ran);
    assert!(out.ptr_eq(&front));
}
