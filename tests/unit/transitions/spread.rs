use super::*;
use crate::foundation::core::Rgba8Premul;
use crate::graph::raster::Raster;

const RED: [f32; 4] = [200.0 / 255.0, 0.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 200.0 / 255.0, 1.0];

fn extent() -> Rect {
    Rect::new(0.0, 0.0, 200.0, 100.0)
}

fn inputs(time: f64) -> TransitionInputs {
    let layer = |c| Image::from_raster(Raster::solid(200, 100, c).unwrap());
    TransitionInputs::new(
        layer(Rgba8Premul::opaque(200, 0, 0)),
        layer(Rgba8Premul::opaque(0, 0, 200)),
        extent(),
    )
    .with_time(time)
}

#[test]
fn center_is_a_fixed_point() {
    let center = Point::new(40.0, 70.0);
    for push in [0.1, 0.5, 1.0] {
        let moved = front_transform(extent(), center, push) * center;
        assert!((moved - center).hypot() < 1e-9);
    }
}

#[test]
fn bump_grows_and_relaxes() {
    let center = Point::new(100.0, 100.0);
    let start = front_bump(extent(), center, 0.0);
    assert_eq!((start.radius, start.scale), (0.0, -1.5));

    let mid = front_bump(extent(), center, 0.75);
    assert!((mid.radius - 120.0).abs() < 1e-12);
    assert!((mid.scale + 0.75).abs() < 1e-12);

    let end = front_bump(extent(), center, 1.0);
    assert_eq!((end.radius, end.scale), (160.0, 0.0));
}

#[test]
fn start_collapses_destination() {
    let img = SpreadFilter.try_compose(&inputs(0.0)).unwrap();
    for p in [(0.5, 0.5), (100.5, 99.5), (199.5, 50.5)] {
        assert_eq!(img.sample(Point::new(p.0, p.1)), RED);
    }
}

#[test]
fn end_shows_destination() {
    let img = SpreadFilter.try_compose(&inputs(1.0)).unwrap();
    for p in [(0.5, 0.5), (100.5, 99.5), (199.5, 50.5)] {
        assert_eq!(img.sample(Point::new(p.0, p.1)), BLUE);
    }
}

#[test]
fn midway_destination_surrounds_center() {
    let center = Point::new(50.0, 50.0);
    let img = SpreadFilter
        .try_compose(&inputs(0.5).with_center(center))
        .unwrap();
    let at_center = img.sample(center);
    assert!((at_center[2] - BLUE[2]).abs() < 1e-3, "{at_center:?}");

    // Far corner lies outside the half-size destination: darkened source.
    let corner = img.sample(Point::new(199.5, 99.5));
    assert!((corner[0] - (RED[0] - 0.025)).abs() < 1e-3, "{corner:?}");
}

#[test]
fn missing_center_uses_default() {
    let with_default = SpreadFilter
        .try_compose(&inputs(0.5).with_center(DEFAULT_CENTER))
        .unwrap();
    let without = SpreadFilter.try_compose(&inputs(0.5)).unwrap();
    for p in [(10.5, 10.5), (100.5, 60.5), (150.5, 90.5)] {
        let p = Point::new(p.0, p.1);
        assert_eq!(with_default.sample(p), without.sample(p));
    }
}
