//! Layout of the DMG background: gradient base layer plus the `>>` arrow
//! between the application icon and the Applications folder icon.

pub mod builder;
pub mod config;

pub use builder::{build_scene, draw_arrow, paint_vertical_gradient};
pub use config::{
    APP_ICON_X, APPS_ICON_X, ArrowStyle, ICON_SIZE, ICON_Y, SceneConfig, VerticalGradient,
};
