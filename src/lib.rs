//! Build-time generator for the DMG installer background.
//!
//! The image is a subtle vertical gradient with a `>>` arrow between the
//! application icon and the Applications folder icon. Everything is drawn on
//! the CPU into a straight-alpha RGBA8 [`Surface`] and serialized with a small
//! built-in PNG writer.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `SceneConfig -> Surface` (gradient base layer, then chevrons)
//! 2. **Encode**: `Surface -> Vec<u8>` (signature, `IHDR`, one `IDAT`, `IEND`)
//! 3. **Write**: bytes to `dmg_background.png` next to the generator's sources
//!
//! Output is deterministic: the same [`SceneConfig`] always yields the same
//! bytes.
#![forbid(unsafe_code)]

pub mod encode;
pub mod foundation;
pub mod pipeline;
pub mod render;
pub mod scene;

pub use encode::{PNG_SIGNATURE, encode_png};
pub use foundation::core::{Canvas, Point, Rgba8};
pub use foundation::error::{BackgroundError, BackgroundResult};
pub use pipeline::{Generated, OUTPUT_FILE_NAME, default_output_path, generate, write_png};
pub use render::{
    CHEVRON_INDENT, Surface, blend_pixel, draw_chevron, draw_filled_circle, draw_thick_line,
};
pub use scene::{
    APP_ICON_X, APPS_ICON_X, ArrowStyle, ICON_SIZE, ICON_Y, SceneConfig, VerticalGradient,
    build_scene, draw_arrow, paint_vertical_gradient,
};
