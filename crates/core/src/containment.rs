//! Span-to-annotation containment
//!
//! Decides which rendered text runs an annotation covers. The test is a
//! deliberate "mostly inside" heuristic rather than strict rectangle
//! containment: spans that merely touch an edge are excluded so a highlight
//! never bleeds into adjacent, unrelated text, and the visual padding added
//! when rescaling is compensated away before comparing.

use crate::layout::{content_element, LayoutNode};
use crate::OverlayError;
use overlay_geometry::{NormalizedRect, PercentScale, PixelRect, HIGHLIGHT_PADDING};

/// Whether a rendered span lies inside an annotation's rescaled box.
///
/// `span_box` and `layer_box` are viewport-space boxes; the span's offset
/// from the layer is scaled by `device_pixel_ratio` (values <= 0 fall back
/// to 1) before comparing against `annotation_box`, whose far edges are
/// pulled in by the compensated padding. All three checks are boundary
/// exclusive.
pub fn span_within_annotation(
    span_box: &PixelRect,
    layer_box: &PixelRect,
    annotation_box: &PixelRect,
    device_pixel_ratio: f32,
    padding: f32,
) -> bool {
    let dpr = if device_pixel_ratio > 0.0 { device_pixel_ratio } else { 1.0 };
    let offset_left = (span_box.x - layer_box.x) * dpr;
    let offset_top = (span_box.y - layer_box.y) * dpr;
    let compensated = padding * 2.0;

    if offset_left <= annotation_box.x || offset_top <= annotation_box.y {
        return false;
    }

    if annotation_box.y + annotation_box.height - compensated <= offset_top {
        return false;
    }

    if annotation_box.x + annotation_box.width - compensated <= offset_left {
        return false;
    }

    true
}

/// The spans of `container`'s content element covered by `annotation`.
///
/// A degenerate annotation rect is a caret, not an area, and covers nothing.
/// Unlike the span indexer, a missing content element here is an error; there
/// is no sensible partial result for a highlight request.
pub fn annotated_spans<N: LayoutNode>(
    container: &N,
    scale: PercentScale,
    annotation: &NormalizedRect,
    device_pixel_ratio: f32,
) -> Result<Vec<N>, OverlayError> {
    if annotation.is_degenerate() {
        return Ok(Vec::new());
    }

    let content = content_element(container).ok_or(OverlayError::NoContentLayer)?;
    let annotation_box = annotation.to_pixel(scale, HIGHLIGHT_PADDING);
    let layer_box = content.bounding_box();

    let spans = content
        .children()
        .into_iter()
        .filter(|span| span.is_element())
        .filter(|span| {
            span_within_annotation(
                &span.bounding_box(),
                &layer_box,
                &annotation_box,
                device_pixel_ratio,
                HIGHLIGHT_PADDING,
            )
        })
        .collect();

    Ok(spans)
}
