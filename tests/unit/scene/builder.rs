use super::*;
use crate::foundation::core::{Canvas, Rgba8};

fn gradient_px(cfg: &SceneConfig, y: u32) -> [u8; 4] {
    cfg.background.at_row(y, cfg.canvas.height).to_array()
}

#[test]
fn background_corners_follow_gradient() {
    let cfg = SceneConfig::default();
    let s = build_scene(&cfg).unwrap();
    assert_eq!((s.width(), s.height()), (660, 400));
    assert_eq!(s.pixel(0, 0), Some([42, 42, 45, 255]));
    assert_eq!(s.pixel(659, 0), Some([42, 42, 45, 255]));
    assert_eq!(s.pixel(0, 399), Some([47, 47, 50, 255]));
    assert_eq!(s.pixel(659, 399), Some([47, 47, 50, 255]));
}

#[test]
fn scene_is_fully_opaque() {
    let s = build_scene(&SceneConfig::default()).unwrap();
    assert!(s.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn arrow_tips_are_highlighted() {
    let cfg = SceneConfig::default();
    let s = build_scene(&cfg).unwrap();
    // Chevron centers sit at 319 and 341; tips are 0.6 * 28 to the right.
    for x in [336, 358] {
        let px = s.pixel(x, 190).unwrap();
        assert!(px[0] > 150 && px[2] > 150, "tip at x={x} not painted: {px:?}");
        assert_eq!(px[3], 255);
    }
}

#[test]
fn arrow_mouth_shows_background() {
    let cfg = SceneConfig::default();
    let s = build_scene(&cfg).unwrap();
    assert_eq!(s.pixel(302, 190), Some(gradient_px(&cfg, 190)));
}

#[test]
fn nothing_drawn_away_from_arrow() {
    let cfg = SceneConfig::default();
    let s = build_scene(&cfg).unwrap();
    for y in 0..cfg.canvas.height {
        for x in 0..cfg.canvas.width {
            let inside = (290..=370).contains(&x) && (150..=230).contains(&y);
            if !inside {
                assert_eq!(
                    s.pixel(i64::from(x), i64::from(y)),
                    Some(gradient_px(&cfg, y)),
                    "unexpected paint at ({x}, {y})"
                );
            }
        }
    }
}

#[test]
fn arrow_follows_icon_layout() {
    let cfg = SceneConfig {
        canvas: Canvas::new(300, 200),
        app_icon_x: 100,
        apps_icon_x: 200,
        icon_y: 100,
        ..SceneConfig::default()
    };
    let s = build_scene(&cfg).unwrap();
    // Second chevron center at 161, tip near 177.8.
    assert_ne!(s.pixel(178, 100), Some(gradient_px(&cfg, 100)));
    assert_eq!(s.pixel(250, 100), Some(gradient_px(&cfg, 100)));
}

#[test]
fn arrow_alone_on_transparent_surface_keeps_color() {
    let cfg = SceneConfig::default();
    let mut s = Surface::new(cfg.canvas).unwrap();
    draw_arrow(&mut s, &cfg);
    let ink = cfg.arrow.color;
    // Upper arm start of the first chevron, touched by one stroke only.
    let px = s.pixel(302, 162).unwrap();
    assert_eq!(&px[..3], &[ink.r, ink.g, ink.b]);
    assert_eq!(s.pixel(0, 0), Some(Rgba8::TRANSPARENT.to_array()));
}

#[test]
fn saturated_icon_positions_do_not_overflow() {
    let cfg = SceneConfig {
        canvas: Canvas::new(64, 64),
        app_icon_x: u32::MAX,
        apps_icon_x: u32::MAX,
        icon_y: 32,
        ..SceneConfig::default()
    };
    assert_eq!(cfg.arrow_center(), (u32::MAX, 32));

    let s = build_scene(&cfg).unwrap();
    for y in 0..64u32 {
        assert_eq!(s.pixel(63, i64::from(y)), Some(gradient_px(&cfg, y)));
    }
}
