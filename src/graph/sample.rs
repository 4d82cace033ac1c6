use crate::effects::composite::{self, PremulRgbaF, TRANSPARENT};
use crate::foundation::core::Point;
use crate::foundation::math::smoothstep;
use crate::graph::image::{Bump, ColorControls, Image, LinearGradient, Node};
use crate::graph::raster::Raster;

// Rec. 709 luma.
const LUMA: [f32; 3] = [0.2125, 0.7154, 0.0721];

impl Image {
    /// Evaluate the premultiplied color at point `p` in image space.
    pub fn sample(&self, p: Point) -> PremulRgbaF {
        match &*self.node {
            Node::Empty => TRANSPARENT,
            Node::Solid(c) => *c,
            Node::Raster(r) => sample_raster(r, p),
            Node::Gradient(g) => sample_gradient(g, p),
            Node::Transform { src, inverse, .. } => src.sample(*inverse * p),
            Node::Crop { src, rect } => {
                if p.x >= rect.x0 && p.x < rect.x1 && p.y >= rect.y0 && p.y < rect.y1 {
                    src.sample(p)
                } else {
                    TRANSPARENT
                }
            }
            Node::ColorControls { src, controls } => adjust_color(src.sample(p), controls),
            Node::Bump { src, bump } => src.sample(bump_source_point(bump, p)),
            Node::Over { front, back } => {
                let f = front.sample(p);
                if f[3] >= 1.0 {
                    return f;
                }
                composite::over(f, back.sample(p))
            }
        }
    }
}

fn texel(r: &Raster, x: i64, y: i64) -> PremulRgbaF {
    if x < 0 || y < 0 || x >= i64::from(r.width) || y >= i64::from(r.height) {
        return TRANSPARENT;
    }
    let idx = ((y as usize) * (r.width as usize) + (x as usize)) * 4;
    let px = &r.data[idx..idx + 4];
    [
        f32::from(px[0]) / 255.0,
        f32::from(px[1]) / 255.0,
        f32::from(px[2]) / 255.0,
        f32::from(px[3]) / 255.0,
    ]
}

// Pixel centers sit at half-integers; texels outside the raster read as transparent.
fn sample_raster(r: &Raster, p: Point) -> PremulRgbaF {
    let u = p.x - 0.5;
    let v = p.y - 0.5;
    if !u.is_finite() || !v.is_finite() {
        return TRANSPARENT;
    }
    if u <= -1.0 || v <= -1.0 || u >= f64::from(r.width) || v >= f64::from(r.height) {
        return TRANSPARENT;
    }
    let x0 = u.floor();
    let y0 = v.floor();
    let fx = (u - x0) as f32;
    let fy = (v - y0) as f32;
    let (x0, y0) = (x0 as i64, y0 as i64);
    if fx == 0.0 && fy == 0.0 {
        return texel(r, x0, y0);
    }
    composite::bilinear(
        texel(r, x0, y0),
        texel(r, x0 + 1, y0),
        texel(r, x0, y0 + 1),
        texel(r, x0 + 1, y0 + 1),
        fx,
        fy,
    )
}

fn sample_gradient(g: &LinearGradient, p: Point) -> PremulRgbaF {
    let d = g.point1 - g.point0;
    let len2 = d.hypot2();
    if len2 <= 0.0 {
        return g.color0;
    }
    let t = (p - g.point0).dot(d) / len2;
    let s = smoothstep(0.0, 1.0, t);
    composite::lerp(g.color0, g.color1, s as f32)
}

fn adjust_color(px: PremulRgbaF, c: &ColorControls) -> PremulRgbaF {
    let a = px[3];
    if a <= 0.0 {
        return TRANSPARENT;
    }
    let mut rgb = [px[0] / a, px[1] / a, px[2] / a];
    let luma = rgb[0] * LUMA[0] + rgb[1] * LUMA[1] + rgb[2] * LUMA[2];
    let saturation = c.saturation as f32;
    let brightness = c.brightness as f32;
    let contrast = c.contrast as f32;
    for ch in &mut rgb {
        let v = luma + (*ch - luma) * saturation;
        let v = v + brightness;
        let v = (v - 0.5) * contrast + 0.5;
        *ch = v.clamp(0.0, 1.0);
    }
    [rgb[0] * a, rgb[1] * a, rgb[2] * a, a]
}

/// Where a bump-distorted output point reads from in the undistorted source.
pub(crate) fn bump_source_point(bump: &Bump, p: Point) -> Point {
    let v = p - bump.center;
    let dist = v.hypot();
    if bump.radius <= 0.0 || dist >= bump.radius {
        return p;
    }
    let percent = 1.0 - ((bump.radius - dist) / bump.radius) * bump.scale;
    let percent = percent * percent;
    bump.center + v * percent
}

#[cfg(test)]
#[path = "../../tests/unit/graph/sample.rs"]
mod tests;
