use super::*;
use crate::foundation::core::Canvas;
use crate::scene::color::{Paint, palette};
use rand::{SeedableRng, rngs::StdRng};

fn stage() -> Stage {
    Stage::new(
        Canvas {
            width: 1920,
            height: 1080,
        }
        .frame_size(),
    )
}

#[test]
fn scatter_spawns_color_major_dots_inside_the_field() {
    let mut s = stage();
    let mut rng = StdRng::seed_from_u64(1);
    let field = Rect::new(-7.0, -4.0, 7.0, 4.0);
    let g = scatter_particles(
        &mut s,
        &mut rng,
        &[palette::BLUE, palette::TEAL],
        5,
        0.05,
        field,
    )
    .unwrap();
    assert_eq!(g.len(), 10);
    for (i, id) in g.iter().enumerate() {
        let el = s.get(id).unwrap();
        assert!(field.contains(el.center));
        let expected = if i < 5 { palette::BLUE } else { palette::TEAL };
        assert_eq!(el.fill, Paint::Solid(expected));
    }
}

#[test]
fn same_seed_same_positions() {
    let field = Rect::new(-7.0, -4.0, 7.0, 4.0);
    let positions = |seed| {
        let mut s = stage();
        let mut rng = StdRng::seed_from_u64(seed);
        let g = scatter_particles(&mut s, &mut rng, &[palette::PINK], 8, 0.05, field).unwrap();
        g.iter()
            .map(|id| s.get(id).unwrap().center)
            .collect::<Vec<_>>()
    };
    assert_eq!(positions(5), positions(5));
    assert_ne!(positions(5), positions(6));
}

#[test]
fn offsets_stay_within_spread() {
    let mut rng = StdRng::seed_from_u64(3);
    let center = Point::new(1.0, 2.0);
    let pts = random_offsets(&mut rng, 50, center, Vec2::new(2.0, 1.0));
    assert_eq!(pts.len(), 50);
    assert!(
        pts.iter()
            .all(|p| (p.x - center.x).abs() <= 2.0 && (p.y - center.y).abs() <= 1.0)
    );
}

#[test]
fn degenerate_field_is_rejected() {
    let mut s = stage();
    let mut rng = StdRng::seed_from_u64(0);
    let flat = Rect::new(0.0, 0.0, 3.0, 0.0);
    assert!(scatter_particles(&mut s, &mut rng, &[palette::BLUE], 1, 0.05, flat).is_err());
    assert!(s.is_empty());
}
