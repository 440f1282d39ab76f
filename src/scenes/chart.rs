use crate::{
    foundation::core::{Point, Vec2},
    foundation::error::{ReelError, ReelResult},
    scene::color::{Color, palette},
    scene::element::{Element, format_decimal},
    scene::group::Group,
    scene::stage::Stage,
    scenes::marker_label,
};

const LABEL_GAP: f64 = 0.35;
const MIN_BAR_HEIGHT: f64 = 0.01;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub name: String,
    pub value: f64,
    pub color: Color,
}

/// Bar chart layout. The plot area is centered on the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartSpec {
    pub bars: Vec<Bar>,
    pub y_max: f64,
    pub y_step: f64,
    pub y_length: f64,
    pub x_length: f64,
    pub font_size: f64,
    /// Share of each slot covered by its bar.
    pub bar_width_ratio: f64,
    pub bar_fill_opacity: f64,
}

impl BarChartSpec {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self {
            bars,
            y_max: 100.0,
            y_step: 20.0,
            y_length: 5.0,
            x_length: 12.0,
            font_size: 24.0,
            bar_width_ratio: 0.6,
            bar_fill_opacity: 0.7,
        }
    }

    fn validate(&self) -> ReelResult<()> {
        if self.bars.is_empty() {
            return Err(ReelError::layout("bar chart needs at least one bar"));
        }
        for (name, v) in [
            ("y_max", self.y_max),
            ("y_step", self.y_step),
            ("y_length", self.y_length),
            ("x_length", self.x_length),
            ("font_size", self.font_size),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ReelError::layout(format!(
                    "bar chart {name} must be finite and > 0, got {v}"
                )));
            }
        }
        if let Some(bar) = self
            .bars
            .iter()
            .find(|b| !(0.0..=self.y_max).contains(&b.value))
        {
            return Err(ReelError::layout(format!(
                "bar '{}' value {} is outside [0, {}]",
                bar.name, bar.value, self.y_max
            )));
        }
        Ok(())
    }
}

/// Spawned parts of a bar chart, grouped by how the skills scene animates them.
#[derive(Clone, Debug, Default)]
pub struct BarChart {
    pub axes: Group,
    pub ticks: Group,
    pub bars: Group,
    pub names: Group,
    pub value_labels: Group,
}

impl BarChart {
    /// Everything except the value labels.
    pub fn body(&self) -> Group {
        Group::concat([&self.axes, &self.ticks, &self.bars, &self.names])
    }
}

pub fn bar_chart(stage: &mut Stage, spec: &BarChartSpec) -> ReelResult<BarChart> {
    spec.validate()?;
    let origin = Point::new(-spec.x_length / 2.0, -spec.y_length / 2.0);
    let mut chart = BarChart::default();

    let axis = |to: Vec2| Element::line(origin, origin + to).color(palette::WHITE);
    chart
        .axes
        .push(stage.spawn(axis(Vec2::new(spec.x_length, 0.0)))?);
    chart
        .axes
        .push(stage.spawn(axis(Vec2::new(0.0, spec.y_length)))?);

    let steps = (spec.y_max / spec.y_step).floor() as u32;
    for k in 0..=steps {
        let v = f64::from(k) * spec.y_step;
        let y = origin.y + v / spec.y_max * spec.y_length;
        chart.ticks.push(stage.spawn(
            Element::text(format_decimal(v, 0), spec.font_size)
                .at(Point::new(origin.x - LABEL_GAP, y)),
        )?);
    }

    let slot = spec.x_length / spec.bars.len() as f64;
    for (i, bar) in spec.bars.iter().enumerate() {
        let x = origin.x + (i as f64 + 0.5) * slot;
        let h = (bar.value / spec.y_max * spec.y_length).max(MIN_BAR_HEIGHT);
        chart.bars.push(
            stage.spawn(
                Element::rectangle(slot * spec.bar_width_ratio, h)
                    .no_stroke()
                    .fill(bar.color, spec.bar_fill_opacity)
                    .at(Point::new(x, origin.y + h / 2.0))
                    .label(marker_label(&bar.name)),
            )?,
        );
        chart.names.push(stage.spawn(
            Element::text(&bar.name, spec.font_size).at(Point::new(x, origin.y - LABEL_GAP)),
        )?);
        let decimals = if bar.value.fract() == 0.0 { 0 } else { 1 };
        chart.value_labels.push(stage.spawn(
            Element::text(format_decimal(bar.value, decimals), spec.font_size)
                .at(Point::new(x, origin.y + h + LABEL_GAP)),
        )?);
    }
    Ok(chart)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/chart.rs"]
mod tests;
