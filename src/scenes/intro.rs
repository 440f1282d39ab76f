use rand::Rng;

use crate::{
    animation::directive::Play,
    animation::ease::Ease,
    animation::ops::{
        create, fade_in_shift, fade_out, fade_out_shift, lagged, move_to, type_letters,
    },
    content::Intro,
    engine::Engine,
    foundation::core::{DOWN, Rect, UP, Vec2},
    foundation::error::ReelResult,
    scene::color::palette,
    scene::element::Element,
    scene::group::Group,
    scene::layout::DEFAULT_BUFF,
    scenes::{
        SceneScope, TITLE_LABEL,
        particles::{random_offsets, random_point, scatter_particles},
    },
};

const PARTICLES_PER_COLOR: usize = 30;
const PARTICLE_RADIUS: f64 = 0.05;
const FIELD: Rect = Rect::new(-7.0, -4.0, 7.0, 4.0);
const CONVERGE_SPREAD: Vec2 = Vec2::new(2.0, 1.0);

pub(crate) fn run<E: Engine + ?Sized>(
    scope: &mut SceneScope<'_, E>,
    intro: &Intro,
    rng: &mut impl Rng,
) -> ReelResult<()> {
    let colors = [palette::BLUE, palette::PURPLE, palette::TEAL, palette::PINK];
    let particles = scope.build(|stage| {
        scatter_particles(stage, rng, &colors, PARTICLES_PER_COLOR, PARTICLE_RADIUS, FIELD)
    })?;
    scope.play(Play::one(lagged(0.1, particles.iter().map(create))))?;

    let name = scope.spawn(
        Element::text(&intro.name, 72.0)
            .gradient([palette::PINK, palette::BLUE, palette::PURPLE])
            .label(TITLE_LABEL),
    )?;
    scope.play(
        Play::one(type_letters(name))
            .run_time(1.5)
            .ease(Ease::Linear),
    )?;

    let center = scope.stage().center_of(&Group::from(name))?;
    let targets = random_offsets(rng, particles.len(), center, CONVERGE_SPREAD);
    scope.play(
        Play::new(particles.iter().zip(targets).map(|(p, to)| move_to(p, to))).run_time(1.5),
    )?;

    let subtitle = scope.spawn(Element::text(&intro.subtitle, 48.0))?;
    scope
        .stage_mut()
        .next_to(&Group::from(subtitle), &Group::from(name), DOWN, DEFAULT_BUFF)?;
    scope.play(Play::one(fade_in_shift(subtitle, UP)))?;

    let scattered: Vec<_> = particles
        .iter()
        .map(|p| move_to(p, random_point(rng, FIELD)))
        .collect();
    scope.play(Play::new(scattered).run_time(1.5))?;

    scope.play(Play::new([
        fade_out_shift(name, UP),
        fade_out_shift(subtitle, UP),
        fade_out(&particles),
    ]))
}
