use rayon::prelude::*;

use crate::effects::composite::to_rgba8;
use crate::foundation::core::{Point, Rect, is_usable_extent};
use crate::foundation::error::{PushfxError, PushfxResult};
use crate::graph::image::Image;
use crate::graph::raster::Raster;

/// Largest width or height [`render_region`] will allocate.
pub const MAX_RENDER_DIM: u32 = 16_384;

/// Threading controls for rasterization.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Rasterize rows in parallel when `true`.
    pub parallel: bool,
    /// Override rayon worker threads (parallel mode only).
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// Realize the pixels of `image` over `region`.
///
/// Output pixel `(i, j)` is the image sampled at `(region.x0 + i + 0.5, region.y0 + j + 0.5)`;
/// output size is the region size rounded up. Pixels are premultiplied.
pub fn render_region(image: &Image, region: Rect) -> PushfxResult<Raster> {
    render_region_with(image, region, &RenderThreading::default())
}

/// [`render_region`] with explicit threading. Sequential and parallel output are identical.
pub fn render_region_with(
    image: &Image,
    region: Rect,
    threading: &RenderThreading,
) -> PushfxResult<Raster> {
    let (width, height) = region_size(region)?;
    let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
    if image.is_empty() {
        return Raster::new(width, height, data);
    }

    let stride = (width as usize) * 4;
    let fill_row = |(j, row): (usize, &mut [u8])| {
        let y = region.y0 + (j as f64) + 0.5;
        for (i, px) in row.chunks_exact_mut(4).enumerate() {
            let x = region.x0 + (i as f64) + 0.5;
            let c = to_rgba8(image.sample(Point::new(x, y)));
            px.copy_from_slice(&c.to_array());
        }
    };

    if !threading.parallel {
        data.chunks_exact_mut(stride).enumerate().for_each(fill_row);
    } else if let Some(threads) = threading.threads {
        let pool = build_thread_pool(threads)?;
        pool.install(|| {
            data.par_chunks_exact_mut(stride)
                .enumerate()
                .for_each(fill_row)
        });
    } else {
        data.par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(fill_row);
    }

    Raster::new(width, height, data)
}

pub(crate) fn region_size(region: Rect) -> PushfxResult<(u32, u32)> {
    if !is_usable_extent(region) {
        return Err(PushfxError::validation(
            "render region must be finite with positive width and height",
        ));
    }
    let w = region.width().ceil();
    let h = region.height().ceil();
    let max = f64::from(MAX_RENDER_DIM);
    if w > max || h > max {
        return Err(PushfxError::validation(format!(
            "render region {w}x{h} exceeds {MAX_RENDER_DIM}x{MAX_RENDER_DIM}"
        )));
    }
    Ok((w as u32, h as u32))
}

fn build_thread_pool(threads: usize) -> PushfxResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(PushfxError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| PushfxError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
