use std::f64::consts::PI;

use crate::{
    animation::directive::Play,
    animation::ease::Ease,
    animation::ops::{animate, create, write},
    content::Contact,
    engine::Engine,
    foundation::core::DOWN,
    foundation::error::ReelResult,
    scene::color::palette,
    scene::element::Element,
    scene::group::Group,
    scenes::{SceneScope, TITLE_LABEL},
};

pub(crate) fn run<E: Engine + ?Sized>(
    scope: &mut SceneScope<'_, E>,
    contact: &Contact,
) -> ReelResult<()> {
    let heading = scope.spawn(
        Element::text(&contact.heading, 64.0)
            .gradient([palette::BLUE, palette::PURPLE])
            .label(TITLE_LABEL),
    )?;
    let mut lines = vec![Group::from(heading)];
    for line in &contact.lines {
        let mut el = Element::text(&line.text, 36.0);
        if let Some(color) = line.color {
            el = el.color(color);
        }
        lines.push(Group::from(scope.spawn(el)?));
    }
    let block = Group::concat(&lines);
    scope.stage_mut().arrange(&lines, DOWN, 0.5, None)?;
    scope.play(Play::one(write(&block)))?;

    let ring = scope.spawn(Element::circle(4.0).gradient([palette::BLUE, palette::PURPLE]))?;
    scope.stage_mut().surround(ring, &block)?;
    scope.play(Play::one(create(ring)))?;
    scope.play(
        Play::one(animate(ring).scale(1.2).rotate(PI).done()).ease(Ease::ThereAndBack),
    )?;

    scope.wait(2.0)
}
