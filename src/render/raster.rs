use crate::foundation::core::{Point, Rgba8};
use crate::render::surface::Surface;

/// Horizontal indent of a chevron's arms, as a fraction of its half-height.
pub const CHEVRON_INDENT: f64 = 0.6;

/// Coverage alpha for a sample `dist` away from a shape whose edge sits at
/// `extent`. The outermost unit band fades linearly; `None` means nothing to
/// paint.
fn edge_alpha(alpha: u8, extent: f64, dist: f64) -> Option<u8> {
    if dist >= extent {
        return None;
    }
    let a = if dist > extent - 1.0 {
        (f64::from(alpha) * (extent - dist)) as u8
    } else {
        alpha
    };
    (a > 0).then_some(a)
}

fn clamp_span(lo: i64, hi_inclusive: i64, len: u32) -> Option<(i64, i64)> {
    let lo = lo.max(0);
    let hi = hi_inclusive.min(i64::from(len) - 1);
    (lo <= hi).then_some((lo, hi))
}

/// Stroke the segment `from -> to` with width `thickness`.
///
/// Distance is measured to the segment (projection clamped to `[0, 1]`), so
/// the stroke does not extend past its endpoints by more than half its width.
/// A zero-length segment draws nothing.
pub fn draw_thick_line(
    surface: &mut Surface,
    from: Point,
    to: Point,
    thickness: f64,
    color: Rgba8,
) {
    let d = to - from;
    let len_sq = d.hypot2();
    if len_sq == 0.0 {
        return;
    }

    let half = thickness / 2.0;
    let pad = half + 1.0;
    let Some((x0, x1)) = clamp_span(
        (from.x.min(to.x) - pad) as i64,
        (from.x.max(to.x) + pad) as i64,
        surface.width(),
    ) else {
        return;
    };
    let Some((y0, y1)) = clamp_span(
        (from.y.min(to.y) - pad) as i64,
        (from.y.max(to.y) + pad) as i64,
        surface.height(),
    ) else {
        return;
    };

    let mut painted = 0usize;
    for py in y0..=y1 {
        for px in x0..=x1 {
            let p = Point::new(px as f64, py as f64);
            let t = ((p - from).dot(d) / len_sq).clamp(0.0, 1.0);
            let dist = p.distance(from + d * t);
            if let Some(a) = edge_alpha(color.a, half, dist) {
                surface.set_pixel(px, py, color.with_alpha(a));
                painted += 1;
            }
        }
    }
    tracing::trace!(painted, "thick line");
}

/// Fill a disc, feathering the outer unit band.
pub fn draw_filled_circle(surface: &mut Surface, center: Point, radius: f64, color: Rgba8) {
    // Half-open upper bound `c + r + 2` becomes inclusive `- 1`.
    let Some((x0, x1)) = clamp_span(
        (center.x - radius - 1.0) as i64,
        ((center.x + radius + 2.0) as i64).saturating_sub(1),
        surface.width(),
    ) else {
        return;
    };
    let Some((y0, y1)) = clamp_span(
        (center.y - radius - 1.0) as i64,
        ((center.y + radius + 2.0) as i64).saturating_sub(1),
        surface.height(),
    ) else {
        return;
    };

    let mut painted = 0usize;
    for py in y0..=y1 {
        for px in x0..=x1 {
            let dist = Point::new(px as f64, py as f64).distance(center);
            if let Some(a) = edge_alpha(color.a, radius, dist) {
                surface.set_pixel(px, py, color.with_alpha(a));
                painted += 1;
            }
        }
    }
    tracing::trace!(painted, "filled circle");
}

/// Draw a `>` glyph: two strokes meeting at the rightmost point.
pub fn draw_chevron(
    surface: &mut Surface,
    center: Point,
    half_height: f64,
    thickness: f64,
    color: Rgba8,
) {
    let indent = half_height * CHEVRON_INDENT;
    let top = Point::new(center.x - indent, center.y - half_height);
    let tip = Point::new(center.x + indent, center.y);
    let bottom = Point::new(center.x - indent, center.y + half_height);

    draw_thick_line(surface, top, tip, thickness, color);
    draw_thick_line(surface, tip, bottom, thickness, color);
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
