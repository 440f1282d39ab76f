use crate::{
    animation::directive::Play,
    animation::ops::{create, write},
    content::Skill,
    engine::Engine,
    foundation::error::ReelResult,
    scene::color::palette,
    scenes::{
        SceneScope,
        chart::{Bar, BarChartSpec, bar_chart},
    },
};

pub(crate) fn run<E: Engine + ?Sized>(
    scope: &mut SceneScope<'_, E>,
    skills: &[Skill],
) -> ReelResult<()> {
    let title = scope.title("Technical Skills", 64.0, &[palette::TEAL, palette::PURPLE])?;
    scope.play(Play::one(write(title)))?;

    let spec = BarChartSpec::new(
        skills
            .iter()
            .map(|s| Bar {
                name: s.name.clone(),
                value: s.level,
                color: s.color,
            })
            .collect(),
    );
    let chart = scope.build(|stage| bar_chart(stage, &spec))?;
    scope.play(Play::one(create(chart.body())))?;
    scope.play(Play::one(write(&chart.value_labels)))?;

    scope.wait(2.0)
}
