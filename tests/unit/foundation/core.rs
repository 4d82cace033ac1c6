use super::*;

#[test]
fn clamp_progress_handles_out_of_range_and_nan() {
    assert_eq!(clamp_progress(-0.5), 0.0);
    assert_eq!(clamp_progress(0.25), 0.25);
    assert_eq!(clamp_progress(3.0), 1.0);
    assert_eq!(clamp_progress(f64::NAN), 0.0);
}

#[test]
fn usable_extent_requires_positive_finite_area() {
    assert!(is_usable_extent(Rect::new(0.0, 0.0, 200.0, 100.0)));
    assert!(!is_usable_extent(Rect::new(0.0, 0.0, 0.0, 100.0)));
    assert!(!is_usable_extent(Rect::new(0.0, 0.0, 200.0, 0.0)));
    assert!(!is_usable_extent(Rect::new(0.0, 0.0, f64::INFINITY, 100.0)));
    assert!(!is_usable_extent(Rect::new(10.0, 0.0, 5.0, 100.0)));
}

#[test]
fn premultiply_and_back() {
    let px = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(px.a, 128);
    assert_eq!(px.r, 128);
    assert_eq!(px.b, 0);
    let straight = px.to_straight_rgba();
    assert_eq!(straight[0], 255);
    assert_eq!(straight[3], 128);
    assert_eq!(Rgba8Premul::transparent().to_straight_rgba(), [0, 0, 0, 0]);
}

#[test]
fn array_conversion_is_lossless() {
    let px = Rgba8Premul::opaque(1, 2, 3);
    assert_eq!(Rgba8Premul::from_array(px.to_array()), px);
}
