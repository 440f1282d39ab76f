use crate::{
    animation::directive::Play,
    animation::ops::{animate, create, lagged, move_along_path, write},
    content::Project,
    engine::Engine,
    foundation::core::{DOWN, Point, UP, Vec2},
    foundation::error::{ReelError, ReelResult},
    scene::color::palette,
    scene::element::{Element, ElementId},
    scene::group::Group,
    scenes::{SceneScope, marker_label},
};

const LINE_HALF_LENGTH: f64 = 5.0;
const DOT_SPACING: f64 = 3.2;
const FLOW_PARTICLES: usize = 10;
const LABEL_LIFT: f64 = 0.8;

pub(crate) fn run<E: Engine + ?Sized>(
    scope: &mut SceneScope<'_, E>,
    projects: &[Project],
) -> ReelResult<()> {
    let title = scope.title(
        "Notable Projects (and Work)",
        56.0,
        &[palette::TEAL, palette::PURPLE],
    )?;
    scope.play(Play::one(write(title)))?;

    let line = scope.spawn(
        Element::line(
            Point::new(-LINE_HALF_LENGTH, 0.0),
            Point::new(LINE_HALF_LENGTH, 0.0),
        )
        .color(palette::GRAY),
    )?;
    scope.stage_mut().shift(&Group::from(line), DOWN)?;
    scope.play(Play::one(create(line)))?;

    let (start, _) = scope
        .stage()
        .get(line)?
        .endpoints()
        .ok_or_else(|| ReelError::layout("timeline line has no endpoints"))?;
    let flow = (0..FLOW_PARTICLES)
        .map(|_| scope.spawn(Element::dot_with_radius(0.05).color(palette::TEAL).at(start)))
        .collect::<ReelResult<Vec<ElementId>>>()?;
    scope.play(Play::one(lagged(
        0.1,
        flow.iter().map(|&p| move_along_path(p, line)),
    )))?;

    let spacing = match projects.len() {
        0 | 1 => 0.0,
        n => DOT_SPACING.min(2.0 * LINE_HALF_LENGTH / (n - 1) as f64),
    };
    for (i, project) in projects.iter().enumerate() {
        let at = start + Vec2::new(i as f64 * spacing, 0.0);
        let dot = scope.spawn(
            Element::dot()
                .color(project.color)
                .scaled(1.5)
                .at(at)
                .label(marker_label(&project.name)),
        )?;

        let name = scope.spawn(
            Element::text(&project.name, 24.0)
                .bold()
                .color(project.color),
        )?;
        let desc = scope.spawn(Element::text(&project.description, 20.0).color(palette::WHITE))?;
        let year = scope.spawn(Element::text(&project.year, 16.0).color(palette::GRAY))?;
        let parts = [Group::from(name), Group::from(desc), Group::from(year)];
        let label = Group::concat(&parts);
        let stage = scope.stage_mut();
        stage.arrange(&parts, DOWN, 0.15, None)?;
        stage.move_to(&label, at + UP * LABEL_LIFT)?;

        let ripple = scope.spawn(Element::circle(0.3).color(project.color).at(at))?;
        scope.play(
            Play::new([
                create(dot),
                create(ripple),
                animate(ripple).scale(3.0).fade(1.0).done(),
                write(&label),
            ])
            .run_time(0.8),
        )?;
    }

    scope.wait(2.0)
}
