use super::*;

#[test]
fn over_transparent_front_is_noop() {
    let back = [0.1, 0.2, 0.3, 0.4];
    assert_eq!(over(TRANSPARENT, back), back);
}

#[test]
fn over_opaque_front_replaces_back() {
    let front = [1.0, 0.0, 0.0, 1.0];
    let back = [0.0, 0.0, 1.0, 1.0];
    assert_eq!(over(front, back), front);
}

#[test]
fn over_half_alpha_blends() {
    let front = [0.5, 0.0, 0.0, 0.5];
    let back = [0.0, 0.0, 1.0, 1.0];
    let out = over(front, back);
    assert!((out[0] - 0.5).abs() < 1e-6);
    assert!((out[2] - 0.5).abs() < 1e-6);
    assert!((out[3] - 1.0).abs() < 1e-6);
}

#[test]
fn over_transparent_back_returns_front() {
    let front = [0.2, 0.3, 0.1, 0.6];
    assert_eq!(over(front, TRANSPARENT), front);
}

#[test]
fn lerp_endpoints() {
    let a = [0.1, 0.2, 0.3, 0.4];
    let b = [0.9, 0.8, 0.7, 0.6];
    assert_eq!(lerp(a, b, 0.0), a);
    assert_eq!(lerp(a, b, 1.0), b);
}

#[test]
fn bilinear_zero_fraction_picks_first_texel() {
    let a = [1.0, 0.0, 0.0, 1.0];
    let b = [0.0, 1.0, 0.0, 1.0];
    assert_eq!(bilinear(a, b, b, b, 0.0, 0.0), a);
    let mid = bilinear(a, b, a, b, 0.5, 0.0);
    assert!((mid[0] - 0.5).abs() < 1e-6);
}

#[test]
fn rgba8_roundtrip_for_opaque_colors() {
    let px = Rgba8Premul::opaque(10, 200, 77);
    assert_eq!(to_rgba8(from_rgba8(px)), px);
}

#[test]
fn to_rgba8_keeps_channels_within_alpha() {
    let px = to_rgba8([1.0, 0.5, 0.0, 0.25]);
    assert_eq!(px.a, 64);
    assert!(px.r <= px.a);
}
