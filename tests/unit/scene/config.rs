use super::*;

#[test]
fn default_matches_packaging_layout() {
    let cfg = SceneConfig::default();
    assert_eq!(cfg.canvas, Canvas::new(660, 400));
    assert_eq!(
        (cfg.app_icon_x, cfg.apps_icon_x, cfg.icon_y, cfg.icon_size),
        (160, 500, 190, 100)
    );
    assert_eq!(cfg.arrow_center(), (330, 190));
}

#[test]
fn gradient_endpoints_and_midpoint() {
    let g = SceneConfig::default().background;
    assert_eq!(g.at_row(0, 400), Rgba8::opaque(42, 42, 45));
    assert_eq!(g.at_row(200, 400), Rgba8::opaque(45, 45, 48));
    // Last row stops one step short of the bottom color.
    assert_eq!(g.at_row(399, 400), Rgba8::opaque(47, 47, 50));
    assert_eq!(g.at_row(400, 400), Rgba8::opaque(48, 48, 51));
}

#[test]
fn gradient_can_run_darker_downwards() {
    let g = VerticalGradient {
        top: Rgba8::opaque(100, 0, 255),
        bottom: Rgba8::opaque(0, 100, 155),
    };
    assert_eq!(g.at_row(0, 10), Rgba8::opaque(100, 0, 255));
    assert_eq!(g.at_row(5, 10), Rgba8::opaque(50, 50, 205));
}

#[test]
fn arrow_center_rounds_down_without_overflow() {
    let cfg = SceneConfig {
        app_icon_x: u32::MAX - 1,
        apps_icon_x: u32::MAX,
        ..SceneConfig::default()
    };
    assert_eq!(cfg.arrow_center().0, u32::MAX - 1);
}
