use crate::{
    animation::directive::Play,
    animation::ease::Ease,
    animation::ops::{animate, create, write},
    content::Interest,
    engine::Engine,
    foundation::core::{DOWN, RIGHT, UP},
    foundation::error::ReelResult,
    scene::color::palette,
    scene::element::{Element, ElementId},
    scene::group::Group,
    scenes::{SceneScope, marker_label},
};

const CARD_WIDTH: f64 = 4.0;
const CARD_HEIGHT: f64 = 2.5;
const CARD_CORNER: f64 = 0.5;
const PULSE_SCALE: f64 = 1.1;

struct Card {
    background: ElementId,
    content: Group,
    pulse: ElementId,
}

impl Card {
    fn all(&self) -> Group {
        let mut g = Group::from(self.background);
        g.extend(&self.content);
        g.push(self.pulse);
        g
    }
}

pub(crate) fn run<E: Engine + ?Sized>(
    scope: &mut SceneScope<'_, E>,
    interests: &[Interest],
) -> ReelResult<()> {
    let title = scope.title("Beyond Coding", 64.0, &[palette::TEAL, palette::PURPLE])?;
    scope.play(Play::one(write(title)))?;

    let mut cards = Vec::with_capacity(interests.len());
    for interest in interests {
        cards.push(build_card(scope, interest)?);
    }
    let parts: Vec<Group> = cards.iter().map(Card::all).collect();
    let stage = scope.stage_mut();
    stage.arrange(&parts, RIGHT, 1.0, None)?;
    stage.shift(&Group::concat(&parts), UP)?;

    for card in &cards {
        scope.play(
            Play::new([create(card.background), write(&card.content)]).run_time(0.8),
        )?;
        scope.play(
            Play::one(animate(card.pulse).scale(PULSE_SCALE).stroke_opacity(0.0).done())
                .ease(Ease::ThereAndBack)
                .run_time(0.8),
        )?;
    }

    scope.wait(1.0)
}

fn build_card<E: Engine + ?Sized>(
    scope: &mut SceneScope<'_, E>,
    interest: &Interest,
) -> ReelResult<Card> {
    let background = scope.spawn(
        Element::rounded_rectangle(CARD_WIDTH, CARD_HEIGHT, CARD_CORNER)
            .color(interest.color)
            .fill_opacity(0.1)
            .label(marker_label(&interest.title)),
    )?;
    let heading = scope.spawn(Element::text(&interest.title, 36.0).color(interest.color))?;
    let desc = scope.spawn(Element::text(&interest.description, 24.0))?;
    let lines = [Group::from(heading), Group::from(desc)];
    let content = Group::concat(&lines);

    let pulse = scope.duplicate(background)?;
    let stage = scope.stage_mut();
    stage.arrange(&lines, DOWN, 0.3, None)?;
    let center = stage.center_of(&Group::from(background))?;
    stage.move_to(&content, center)?;
    {
        let copy = stage.get_mut(pulse)?;
        copy.label = None;
        copy.fill_opacity = 0.0;
    }
    stage.scale(&Group::from(pulse), PULSE_SCALE)?;

    Ok(Card {
        background,
        content,
        pulse,
    })
}
