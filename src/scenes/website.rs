use crate::{
    animation::directive::Play,
    animation::ease::Ease,
    animation::ops::{animate, create, write},
    content::{Feature, Website},
    engine::Engine,
    foundation::core::{DOWN, LEFT, UP},
    foundation::error::ReelResult,
    scene::color::palette,
    scene::element::{Element, ElementId},
    scene::group::Group,
    scenes::{SceneScope, marker_label},
};

const HIGHLIGHT_PAD_X: f64 = 0.5;
const HIGHLIGHT_PAD_Y: f64 = 0.3;

struct FeatureCard {
    highlight: ElementId,
    text: Group,
}

pub(crate) fn run<E: Engine + ?Sized>(
    scope: &mut SceneScope<'_, E>,
    website: &Website,
) -> ReelResult<()> {
    let title = scope.title(&website.headline, 64.0, &[palette::TEAL, palette::PURPLE])?;
    scope.play(Play::one(write(title)))?;

    let mut cards = Vec::with_capacity(website.features.len());
    for feature in &website.features {
        cards.push(build_card(scope, feature)?);
    }
    let parts: Vec<Group> = cards
        .iter()
        .map(|c| {
            let mut g = Group::from(c.highlight);
            g.extend(&c.text);
            g
        })
        .collect();
    let stage = scope.stage_mut();
    stage.arrange(&parts, DOWN, 0.5, Some(LEFT))?;
    stage.shift(&Group::concat(&parts), UP * 0.5)?;

    for card in &cards {
        scope.play(Play::new([create(card.highlight), write(&card.text)]).run_time(0.7))?;
        scope.play(
            Play::one(animate(card.highlight).scale(1.05).done())
                .ease(Ease::ThereAndBack)
                .run_time(0.3),
        )?;
    }

    scope.wait(1.0)
}

fn build_card<E: Engine + ?Sized>(
    scope: &mut SceneScope<'_, E>,
    feature: &Feature,
) -> ReelResult<FeatureCard> {
    let heading = scope.spawn(Element::text(&feature.title, 32.0).color(feature.color))?;
    let desc = scope.spawn(Element::text(&feature.description, 24.0).color(palette::GRAY))?;
    let lines = [Group::from(heading), Group::from(desc)];
    let text = Group::concat(&lines);
    scope.stage_mut().arrange(&lines, DOWN, 0.2, None)?;

    let bounds = scope.stage().bounds_of(&text)?;
    let highlight = scope.spawn(
        Element::rectangle(
            bounds.width() + HIGHLIGHT_PAD_X,
            bounds.height() + HIGHLIGHT_PAD_Y,
        )
        .color(feature.color)
        .fill_opacity(0.1)
        .stroke_opacity(0.5)
        .at(bounds.center())
        .label(marker_label(&feature.title)),
    )?;
    Ok(FeatureCard { highlight, text })
}
