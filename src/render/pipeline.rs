use crate::effects::stages;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Rect, Rgba8Premul, is_usable_extent};
use crate::foundation::error::{PushfxError, PushfxResult};
use crate::graph::image::Image;
use crate::graph::raster::Raster;
use crate::render::cpu::{RenderThreading, region_size, render_region_with};
use crate::transitions::TransitionInputs;
use crate::transitions::kind::TransitionKind;
use crate::transitions::spec::TransitionSpec;

/// Counters reported by [`render_transition`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames sampled.
    pub frames_total: u64,
    /// Frames rendered and pushed to the sink.
    pub frames_rendered: u64,
    /// Frames for which the filter produced no output.
    pub frames_skipped: u64,
}

/// Compose and rasterize a single frame over the inputs' extent.
///
/// Returns `Ok(None)` when the filter produces no output (missing inputs).
pub fn render_frame(
    kind: TransitionKind,
    inputs: &TransitionInputs,
    threading: &RenderThreading,
) -> PushfxResult<Option<Raster>> {
    let Some(image) = kind.compose(inputs) else {
        return Ok(None);
    };
    let Some(extent) = inputs.extent else {
        return Ok(None);
    };
    render_region_with(&image, extent, threading).map(Some)
}

/// Render a whole transition into `sink`.
///
/// Samples [`TransitionSpec::frame_count`] frames at eased times, composes each with the spec's
/// filter and pushes the rasterized extent. The focal point defaults to the extent midpoint.
pub fn render_transition(
    spec: &TransitionSpec,
    source: &Image,
    destination: &Image,
    extent: Rect,
    sink: &mut dyn FrameSink,
) -> PushfxResult<RenderStats> {
    render_transition_with(
        spec,
        source,
        destination,
        extent,
        sink,
        &RenderThreading::default(),
    )
}

/// [`render_transition`] with explicit rasterization threading.
#[tracing::instrument(skip_all, fields(kind = %spec.kind, reverse = spec.reverse))]
pub fn render_transition_with(
    spec: &TransitionSpec,
    source: &Image,
    destination: &Image,
    extent: Rect,
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
) -> PushfxResult<RenderStats> {
    spec.validate()?;
    if !is_usable_extent(extent) {
        return Err(PushfxError::validation(
            "transition extent must be finite with positive width and height",
        ));
    }
    let (width, height) = region_size(extent)?;
    let frames = spec.frame_count();

    sink.begin(SinkConfig {
        width,
        height,
        fps: spec.fps,
        frame_count: frames,
        kind: spec.kind,
    })?;

    let base = TransitionInputs {
        center: Some(spec.center.unwrap_or_else(|| extent.center())),
        reverse: spec.reverse,
        ..TransitionInputs::new(source.clone(), destination.clone(), extent)
    };
    let mut stats = RenderStats::default();
    for idx in 0..frames {
        let time = spec.time_at(idx);
        let inputs = base.clone().with_time(time);
        stats.frames_total += 1;
        match render_frame(spec.kind, &inputs, threading)? {
            Some(frame) => {
                sink.push_frame(idx, time, &frame)?;
                stats.frames_rendered += 1;
            }
            None => {
                tracing::debug!(idx, time, "frame skipped");
                stats.frames_skipped += 1;
            }
        }
    }
    sink.end()?;

    tracing::debug!(?stats, "transition rendered");
    Ok(stats)
}

/// A color filling exactly `extent`.
///
/// [`Image::solid`] is unbounded, which would hide the sliding edges of the filters.
pub fn solid_layer(color: Rgba8Premul, extent: Rect) -> PushfxResult<Image> {
    let (width, height) = region_size(extent)?;
    let layer = Image::from_raster(Raster::solid(width, height, color)?);
    Ok(stages::keep_on_failure(
        &layer,
        stages::translate(&layer, extent.x0, extent.y0),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
