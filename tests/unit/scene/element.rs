use super::*;
use crate::scene::color::palette;

#[test]
fn line_is_centered_between_endpoints() {
    let line = Element::line(Point::new(-5.0, -1.0), Point::new(5.0, -1.0));
    assert_eq!(line.center, Point::new(0.0, -1.0));
    let (a, b) = line.endpoints().unwrap();
    assert!((a - Point::new(-5.0, -1.0)).hypot() < 1e-12);
    assert!((b - Point::new(5.0, -1.0)).hypot() < 1e-12);
    assert!((line.bounds().width() - 10.0).abs() < 1e-12);
}

#[test]
fn rotated_line_endpoints_swap_after_half_turn() {
    let mut line = Element::line(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
    line.rotation = std::f64::consts::PI;
    let (a, _) = line.endpoints().unwrap();
    assert!((a.x - 1.0).abs() < 1e-9);
}

#[test]
fn text_bounds_grow_with_length_and_size() {
    let short = Element::text("ab", 48.0).bounds();
    let long = Element::text("abcd", 48.0).bounds();
    let big = Element::text("ab", 96.0).bounds();
    assert!((long.width() - short.width() * 2.0).abs() < 1e-12);
    assert!((big.height() - short.height() * 2.0).abs() < 1e-12);
}

#[test]
fn scale_multiplies_dot_extent() {
    let dot = Element::dot().scaled(1.5);
    assert!((dot.bounds().width() - DEFAULT_DOT_RADIUS * 3.0).abs() < 1e-12);
}

#[test]
fn color_sets_fill_and_stroke_but_not_fill_opacity() {
    let c = Element::circle(1.0).color(palette::GREEN);
    assert_eq!(c.fill, Paint::Solid(palette::GREEN));
    assert_eq!(c.stroke.as_ref().unwrap().paint, Paint::Solid(palette::GREEN));
    assert_eq!(c.fill_opacity, 0.0);
}

#[test]
fn decimal_text_uses_configured_places() {
    let d = Element::decimal(7.9, 1, 36.0);
    assert_eq!(d.text_content().as_deref(), Some("7.9"));
    assert_eq!(format_decimal(0.0, 1), "0.0");
}

#[test]
fn validate_rejects_bad_geometry() {
    assert!(Element::dot_with_radius(0.0).validate().is_err());
    assert!(Element::text("  ", 24.0).validate().is_err());
    assert!(Element::text("ok", -1.0).validate().is_err());
    assert!(Element::line(Point::ORIGIN, Point::ORIGIN).validate().is_err());
    assert!(Element::rounded_rectangle(1.0, 1.0, 0.8).validate().is_err());
    assert!(Element::rounded_rectangle(4.0, 2.5, 0.5).validate().is_ok());

    let mut faded = Element::rectangle(1.0, 1.0);
    faded.opacity = 1.5;
    assert!(faded.validate().is_err());
}
