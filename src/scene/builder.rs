use crate::{
    foundation::{core::Point, error::BackgroundResult},
    render::{Surface, draw_chevron},
    scene::config::{SceneConfig, VerticalGradient},
};

/// Paint every pixel with the opaque gradient color of its row.
pub fn paint_vertical_gradient(surface: &mut Surface, gradient: &VerticalGradient) {
    let (w, h) = (surface.width(), surface.height());
    for y in 0..h {
        let color = gradient.at_row(y, h);
        for x in 0..w {
            surface.put_opaque(i64::from(x), i64::from(y), color);
        }
    }
}

/// Draw the `>>` arrow centered between the two icons.
pub fn draw_arrow(surface: &mut Surface, cfg: &SceneConfig) {
    let (cx, cy) = cfg.arrow_center();
    let style = &cfg.arrow;
    let offset = style.spacing / 2;

    for x in [cx.saturating_sub(offset), cx.saturating_add(offset)] {
        draw_chevron(
            surface,
            Point::new(f64::from(x), f64::from(cy)),
            style.half_height,
            style.thickness,
            style.color,
        );
    }
}

/// Allocate a surface and render the complete background into it.
#[tracing::instrument(skip(cfg), fields(width = cfg.canvas.width, height = cfg.canvas.height))]
pub fn build_scene(cfg: &SceneConfig) -> BackgroundResult<Surface> {
    let mut surface = Surface::new(cfg.canvas)?;
    paint_vertical_gradient(&mut surface, &cfg.background);
    draw_arrow(&mut surface, cfg);
    tracing::debug!("scene rendered");
    Ok(surface)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
