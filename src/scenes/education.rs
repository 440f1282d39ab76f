use crate::{
    animation::directive::Play,
    animation::ease::Ease,
    animation::ops::{animate, change_value, create, fade_in_shift, write},
    content::Education,
    engine::Engine,
    foundation::core::{DOWN, LEFT, Point, RIGHT, UP},
    foundation::error::ReelResult,
    scene::color::palette,
    scene::element::Element,
    scene::group::Group,
    scene::layout::DEFAULT_BUFF,
    scenes::SceneScope,
};

pub const GPA_LABEL: &str = "gpa";

pub(crate) fn run<E: Engine + ?Sized>(
    scope: &mut SceneScope<'_, E>,
    education: &Education,
) -> ReelResult<()> {
    let title = scope.title(
        "Education",
        64.0,
        &[palette::TEAL, palette::BLUE, palette::PURPLE],
    )?;
    let underline = scope.spawn(
        Element::line(Point::ORIGIN + LEFT, Point::ORIGIN + RIGHT).color(palette::TEAL),
    )?;
    let stage = scope.stage_mut();
    stage.match_width(underline, &Group::from(title))?;
    stage.next_to(&Group::from(underline), &Group::from(title), DOWN, 0.1)?;

    scope.play(Play::one(write(title)))?;
    scope.play(Play::one(create(underline)))?;

    let uni = scope.spawn(Element::text(&education.university, 48.0).color(palette::PINK))?;
    let degree = scope.spawn(Element::text(&education.degree, 36.0))?;
    let gpa_text = scope.spawn(Element::text("GPA: ", 36.0).color(palette::TEAL))?;
    let gpa = scope.spawn(
        Element::decimal(0.0, 1, 36.0)
            .color(palette::GREEN)
            .label(GPA_LABEL),
    )?;

    let gpa_group: Group = [gpa_text, gpa].into_iter().collect();
    let parts = [Group::from(uni), Group::from(degree), gpa_group.clone()];
    let stage = scope.stage_mut();
    stage.next_to(&Group::from(gpa), &Group::from(gpa_text), RIGHT, DEFAULT_BUFF)?;
    stage.arrange(&parts, DOWN, 0.5, None)?;
    stage.shift(&Group::concat(&parts), UP)?;

    for id in [uni, degree, gpa_text] {
        scope.play(Play::one(fade_in_shift(id, RIGHT)))?;
    }
    scope.play(
        Play::one(change_value(gpa, education.gpa))
            .run_time(2.0)
            .ease(Ease::Smooth),
    )?;

    let highlight = scope.spawn(
        Element::circle(0.7)
            .color(palette::GREEN)
            .stroke_width(3.0),
    )?;
    scope.stage_mut().surround(highlight, &gpa_group)?;
    scope.play(Play::one(create(highlight)))?;
    scope.play(
        Play::one(animate(highlight).scale(1.2).color(palette::TEAL).done())
            .ease(Ease::ThereAndBack),
    )
}
