use crate::foundation::core::Rgba8Premul;
use crate::foundation::math::unit_to_u8;

/// Premultiplied RGBA in `[0, 1]` floats.
pub type PremulRgbaF = [f32; 4];

pub const TRANSPARENT: PremulRgbaF = [0.0; 4];

/// Porter-Duff source-over on premultiplied colors.
pub fn over(front: PremulRgbaF, back: PremulRgbaF) -> PremulRgbaF {
    let fa = front[3].clamp(0.0, 1.0);
    if fa <= 0.0 {
        return back;
    }
    if fa >= 1.0 {
        return front;
    }
    let inv = 1.0 - fa;
    [
        front[0] + back[0] * inv,
        front[1] + back[1] * inv,
        front[2] + back[2] * inv,
        fa + back[3] * inv,
    ]
}

/// Component-wise linear interpolation between premultiplied colors.
pub fn lerp(a: PremulRgbaF, b: PremulRgbaF, t: f32) -> PremulRgbaF {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

/// Bilinear blend of four texels with fractional weights `fx`, `fy`.
pub fn bilinear(
    p00: PremulRgbaF,
    p10: PremulRgbaF,
    p01: PremulRgbaF,
    p11: PremulRgbaF,
    fx: f32,
    fy: f32,
) -> PremulRgbaF {
    let mut out = [0.0f32; 4];
    for c in 0..4 {
        let top = p00[c] * (1.0 - fx) + p10[c] * fx;
        let bot = p01[c] * (1.0 - fx) + p11[c] * fx;
        out[c] = top * (1.0 - fy) + bot * fy;
    }
    out
}

pub fn from_rgba8(px: Rgba8Premul) -> PremulRgbaF {
    [
        f32::from(px.r) / 255.0,
        f32::from(px.g) / 255.0,
        f32::from(px.b) / 255.0,
        f32::from(px.a) / 255.0,
    ]
}

/// Quantize to RGBA8, keeping color channels within alpha.
pub fn to_rgba8(px: PremulRgbaF) -> Rgba8Premul {
    let a = unit_to_u8(px[3]);
    Rgba8Premul {
        r: unit_to_u8(px[0]).min(a),
        g: unit_to_u8(px[1]).min(a),
        b: unit_to_u8(px[2]).min(a),
        a,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
