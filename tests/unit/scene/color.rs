use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));
}

#[test]
fn rejects_malformed_hex() {
    assert!(serde_json::from_value::<Color>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<Color>(json!("#zz0000")).is_err());
    assert!(Color::hex("#é00000").is_err());
}

#[test]
fn palette_matches_its_hex_spelling() {
    assert_eq!(palette::PINK.to_hex(), "#FF69B4");
    assert_eq!(Color::hex("#032B43").unwrap(), palette::BACKDROP_DEEP);
}

#[test]
fn gradient_resampling_hits_endpoints() {
    let p = Paint::gradient([palette::TEAL, palette::BLUE, palette::PURPLE]);
    assert_eq!(p.stop_count(), 3);
    assert_eq!(p.stop_at(0, 5), palette::TEAL);
    assert_eq!(p.stop_at(4, 5), palette::PURPLE);
    assert_eq!(p.stop_at(2, 5), palette::BLUE);
    assert_eq!(p.primary(), palette::TEAL);
}

#[test]
fn single_stop_gradient_collapses_to_solid() {
    assert_eq!(Paint::gradient([palette::GREEN]), Paint::Solid(palette::GREEN));
    assert!(Paint::Gradient(Vec::new()).validate().is_err());
}
