//! CPU drawing into a straight-alpha RGBA8 surface.
//!
//! Every write except the opaque base layer goes through
//! [`Surface::set_pixel`].

pub mod composite;
pub mod raster;
pub mod surface;

pub use composite::blend_pixel;
pub use raster::{CHEVRON_INDENT, draw_chevron, draw_filled_circle, draw_thick_line};
pub use surface::Surface;
