use crate::foundation::core::Rgba8;
use crate::render::surface::Surface;

/// Composite `src` onto `dst`.
///
/// A fully transparent destination is overwritten outright. Otherwise RGB is
/// blended "over" with weight `src.a / 255`, truncating toward zero, and the
/// destination alpha accumulates additively (saturating at 255) so that
/// overlapping partial strokes converge to full coverage.
pub fn blend_pixel(dst: [u8; 4], src: Rgba8) -> [u8; 4] {
    if dst[3] == 0 {
        return src.to_array();
    }

    let fa = f64::from(src.a) / 255.0;
    let mix = |s: u8, d: u8| -> u8 {
        let v = f64::from(s) * fa + f64::from(d) * (1.0 - fa);
        v.clamp(0.0, 255.0) as u8
    };

    [
        mix(src.r, dst[0]),
        mix(src.g, dst[1]),
        mix(src.b, dst[2]),
        dst[3].saturating_add(src.a),
    ]
}

impl Surface {
    /// Blend `color` into the pixel at `(x, y)`. Coordinates outside the
    /// canvas are ignored.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgba8) {
        let Some(px) = self.pixel_mut(x, y) else {
            return;
        };
        let out = blend_pixel([px[0], px[1], px[2], px[3]], color);
        px.copy_from_slice(&out);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
