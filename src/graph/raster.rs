use crate::foundation::core::{Rect, Rgba8Premul};
use crate::foundation::error::{PushfxError, PushfxResult};
use crate::foundation::math::mul_div255_u8;

/// A finite bitmap of premultiplied RGBA8 pixels.
///
/// As an image graph leaf, a raster occupies `[0, width) × [0, height)`; everything outside is
/// transparent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl Raster {
    /// Wrap premultiplied RGBA8 bytes, checking the buffer length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> PushfxResult<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(PushfxError::validation(format!(
                "raster expects {expected} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A raster filled with one color.
    pub fn solid(width: u32, height: u32, color: Rgba8Premul) -> PushfxResult<Self> {
        let len = byte_len(width, height)?;
        let data = color.to_array().repeat(len / 4);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Convert a straight-alpha `image::RgbaImage` into a premultiplied raster.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let mut data = img.as_raw().clone();
        for px in data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            px[0] = mul_div255_u8(u16::from(px[0]), a);
            px[1] = mul_div255_u8(u16::from(px[1]), a);
            px[2] = mul_div255_u8(u16::from(px[2]), a);
        }
        Self {
            width: img.width(),
            height: img.height(),
            data,
        }
    }

    /// Convert to a straight-alpha `image::RgbaImage` (for encoding).
    pub fn to_rgba_image(&self) -> PushfxResult<image::RgbaImage> {
        let mut straight = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let p = Rgba8Premul::from_array([px[0], px[1], px[2], px[3]]);
            straight.extend_from_slice(&p.to_straight_rgba());
        }
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .ok_or_else(|| PushfxError::render("raster buffer does not match its dimensions"))
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.data[idx..idx + 4];
        Some(Rgba8Premul::from_array([px[0], px[1], px[2], px[3]]))
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count_pixels(&self, color: Rgba8Premul) -> usize {
        let target = color.to_array();
        self.data
            .chunks_exact(4)
            .filter(|px| *px == target.as_slice())
            .count()
    }

    /// Bounds of the raster in image space.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

fn byte_len(width: u32, height: u32) -> PushfxResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| PushfxError::validation("raster buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/graph/raster.rs"]
mod tests;
