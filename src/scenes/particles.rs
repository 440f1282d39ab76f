use rand::Rng;

use crate::{
    foundation::core::{Point, Rect, Vec2},
    foundation::error::{ReelError, ReelResult},
    scene::color::Color,
    scene::element::Element,
    scene::group::Group,
    scene::stage::Stage,
};

/// Spawn `per_color` dots of each color at uniform random positions inside `field`.
///
/// Dots are spawned color by color, so the group order is color-major.
pub fn scatter_particles(
    stage: &mut Stage,
    rng: &mut impl Rng,
    colors: &[Color],
    per_color: usize,
    radius: f64,
    field: Rect,
) -> ReelResult<Group> {
    check_field(field)?;
    let mut out = Group::new();
    for &color in colors {
        for _ in 0..per_color {
            let at = random_point(rng, field);
            out.push(stage.spawn(Element::dot_with_radius(radius).color(color).at(at))?);
        }
    }
    Ok(out)
}

pub fn random_point(rng: &mut impl Rng, field: Rect) -> Point {
    Point::new(
        rng.gen_range(field.x0..=field.x1),
        rng.gen_range(field.y0..=field.y1),
    )
}

/// `n` points around `center`, each offset by up to `spread` on either axis.
pub fn random_offsets(rng: &mut impl Rng, n: usize, center: Point, spread: Vec2) -> Vec<Point> {
    let (sx, sy) = (spread.x.abs(), spread.y.abs());
    let field = Rect::new(-sx, -sy, sx, sy);
    (0..n)
        .map(|_| center + random_point(rng, field).to_vec2())
        .collect()
}

fn check_field(field: Rect) -> ReelResult<()> {
    if !(field.width() > 0.0 && field.height() > 0.0) || !field.is_finite() {
        return Err(ReelError::layout(format!(
            "particle field must be finite with positive area, got {field:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/particles.rs"]
mod tests;
