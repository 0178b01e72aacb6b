use crate::foundation::core::{Canvas, Rgba8};

// Icon placement shared with the DMG packaging script. Both sides must change
// together or the arrow no longer sits between the icons.
pub const APP_ICON_X: u32 = 160;
pub const APPS_ICON_X: u32 = 500;
pub const ICON_Y: u32 = 190;
pub const ICON_SIZE: u32 = 100;

pub const CANVAS: Canvas = Canvas::new(660, 400);

/// Top-to-bottom linear gradient. Alpha is ignored; the base layer is opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerticalGradient {
    pub top: Rgba8,
    pub bottom: Rgba8,
}

impl VerticalGradient {
    /// Color of row `y` on a surface `height` rows tall.
    pub fn at_row(&self, y: u32, height: u32) -> Rgba8 {
        let t = f64::from(y) / f64::from(height);
        let lerp = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + t * (f64::from(b) - f64::from(a));
            v.clamp(0.0, 255.0) as u8
        };
        Rgba8::opaque(
            lerp(self.top.r, self.bottom.r),
            lerp(self.top.g, self.bottom.g),
            lerp(self.top.b, self.bottom.b),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowStyle {
    /// Half-height of each chevron.
    pub half_height: f64,
    pub thickness: f64,
    /// Horizontal distance between the two chevron centers.
    pub spacing: u32,
    pub color: Rgba8,
}

/// Immutable description of the whole background image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub canvas: Canvas,
    pub app_icon_x: u32,
    pub apps_icon_x: u32,
    pub icon_y: u32,
    pub icon_size: u32,
    pub background: VerticalGradient,
    pub arrow: ArrowStyle,
}

impl SceneConfig {
    /// Midpoint between the two icons, in integer pixels.
    pub fn arrow_center(&self) -> (u32, u32) {
        (u32::midpoint(self.app_icon_x, self.apps_icon_x), self.icon_y)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas: CANVAS,
            app_icon_x: APP_ICON_X,
            apps_icon_x: APPS_ICON_X,
            icon_y: ICON_Y,
            icon_size: ICON_SIZE,
            background: VerticalGradient {
                top: Rgba8::opaque(42, 42, 45),
                bottom: Rgba8::opaque(48, 48, 51),
            },
            arrow: ArrowStyle {
                half_height: 28.0,
                thickness: 8.0,
                spacing: 22,
                color: Rgba8::new(200, 210, 230, 200),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
