use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::anim::{Accumulate, Lerp, Segment, Track},
    animation::directive::{Directive, DirectiveKind, Play, TransformSpec, lagged_windows},
    animation::ease::Ease,
    engine::Engine,
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point, Vec2},
    foundation::error::{ReelError, ReelResult},
    scene::color::Paint,
    scene::element::{ElementId, Shape, rotate_vec},
    scene::group::Group,
    scene::stage::Stage,
    timeline::model::{
        Command, CommandRecord, DirectiveRecord, ElementTimeline, SceneSpan, Timeline,
    },
};

/// Engine that realizes directives into a keyframe [`Timeline`] instead of pixels.
///
/// `play` and `wait` advance an internal frame clock, which is what "blocking" means here:
/// a batch issued after another always starts at or after the previous batch's last frame.
pub struct TimelineEngine {
    fps: Fps,
    canvas: Canvas,
    seed: u64,
    stage: Stage,
    clock: FrameIndex,
    tracks: BTreeMap<ElementId, ElementTimeline>,
    removed: BTreeSet<ElementId>,
    scenes: Vec<SceneSpan>,
    open_scene: Option<(String, FrameIndex)>,
    commands: Vec<CommandRecord>,
}

/// A non-lagged directive with its absolute frame window.
struct Leaf<'a> {
    directive: &'a Directive,
    range: FrameRange,
}

impl TimelineEngine {
    /// Create an engine with an empty stage sized for `canvas`. `seed` is recorded in the
    /// timeline.
    pub fn new(fps: Fps, canvas: Canvas, seed: u64) -> Self {
        Self {
            fps,
            canvas,
            seed,
            stage: Stage::new(canvas.frame_size()),
            clock: FrameIndex(0),
            tracks: BTreeMap::new(),
            removed: BTreeSet::new(),
            scenes: Vec::new(),
            open_scene: None,
            commands: Vec::new(),
        }
    }

    /// Frame the next batch starts at.
    pub fn clock(&self) -> FrameIndex {
        self.clock
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Every play, wait and clear issued so far.
    pub fn commands(&self) -> &[CommandRecord] {
        &self.commands
    }

    /// Close every open presence at the current clock and hand out the timeline.
    #[tracing::instrument(skip(self))]
    pub fn finish(self) -> ReelResult<Timeline> {
        if let Some((name, _)) = &self.open_scene {
            return Err(ReelError::evaluation(format!(
                "scene '{name}' is still open at the end of the run"
            )));
        }
        let duration = FrameIndex(self.clock.0.max(1));
        let mut elements: Vec<ElementTimeline> = self.tracks.into_values().collect();
        for el in &mut elements {
            if !self.removed.contains(&el.id) {
                el.presence.end = duration;
            }
        }

        let timeline = Timeline {
            fps: self.fps,
            canvas: self.canvas,
            frame_size: self.canvas.frame_size(),
            duration,
            seed: self.seed,
            elements,
            scenes: self.scenes,
            commands: self.commands,
        };
        timeline.validate()?;
        tracing::debug!(
            frames = duration.0,
            elements = timeline.elements.len(),
            "timeline finished"
        );
        Ok(timeline)
    }

    fn current_scene(&self) -> Option<String> {
        self.open_scene.as_ref().map(|(name, _)| name.clone())
    }

    fn flatten<'a>(
        d: &'a Directive,
        window: (f64, f64),
        out: &mut Vec<(&'a Directive, f64, f64)>,
    ) {
        match d {
            Directive::LaggedStart { parts, lag_ratio } => {
                let span = window.1 - window.0;
                for (part, (s, e)) in parts.iter().zip(lagged_windows(parts.len(), *lag_ratio)) {
                    Self::flatten(part, (window.0 + s * span, window.0 + e * span), out);
                }
            }
            leaf => out.push((leaf, window.0, window.1)),
        }
    }

    fn check_target(&self, id: ElementId) -> ReelResult<()> {
        self.stage.get(id)?;
        if self.removed.contains(&id) {
            return Err(ReelError::animation(format!(
                "element {} was faded out and cannot be animated again",
                id.0
            )));
        }
        Ok(())
    }

    fn check_leaf(&self, d: &Directive) -> ReelResult<()> {
        for id in d.targets().iter() {
            self.check_target(id)?;
        }
        match d {
            Directive::MoveAlongPath { path, .. } => {
                let p = self.stage.get(*path)?;
                if !matches!(p.shape, Shape::Line { .. }) {
                    return Err(ReelError::animation(format!(
                        "move along path expects a line, element {} is a {}",
                        path.0,
                        p.shape.kind_name()
                    )));
                }
            }
            Directive::ChangeValue { target, .. } => {
                let el = self.stage.get(*target)?;
                if !matches!(el.shape, Shape::Decimal { .. }) {
                    return Err(ReelError::animation(format!(
                        "change value expects a decimal, element {} is a {}",
                        target.0,
                        el.shape.kind_name()
                    )));
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Put `id` on stage at `at` if it is not there yet.
    fn ensure_present(
        &mut self,
        id: ElementId,
        at: FrameIndex,
        kind: DirectiveKind,
    ) -> ReelResult<()> {
        if self.tracks.contains_key(&id) {
            self.stage.set_visible(id, true);
            return Ok(());
        }
        let scene = self.current_scene();
        let el = self.stage.get(id)?;
        let opacity = if kind == DirectiveKind::FadeIn {
            0.0
        } else {
            el.opacity
        };
        let progress = if matches!(kind, DirectiveKind::Create | DirectiveKind::Write) {
            0.0
        } else {
            1.0
        };
        let value = match el.shape {
            Shape::Decimal { value, .. } => value,
            _ => 0.0,
        };
        let timeline = ElementTimeline {
            id,
            label: el.label.clone(),
            scene,
            shape: el.shape.clone(),
            fill_opacity: el.fill_opacity,
            stroke: el.stroke.clone(),
            presence: FrameRange { start: at, end: at },
            write_style: None,
            opacity: Track::constant(opacity),
            center: Track::constant(el.center),
            scale: Track::constant(el.scale),
            rotation: Track::constant(el.rotation),
            progress: Track::constant(progress),
            value: Track::constant(value),
            paint: Track::constant(el.fill.clone()),
            stroke_opacity: Track::constant(el.stroke.as_ref().map_or(0.0, |s| s.opacity)),
        };
        self.tracks.insert(id, timeline);
        self.stage.set_visible(id, true);
        Ok(())
    }

    fn track_mut(&mut self, id: ElementId) -> ReelResult<&mut ElementTimeline> {
        self.tracks
            .get_mut(&id)
            .ok_or_else(|| ReelError::animation(format!("element {} is not on stage", id.0)))
    }

    fn realize(&mut self, leaf: &Leaf<'_>, ease: Ease) -> ReelResult<()> {
        let range = leaf.range;
        let kind = leaf.directive.kind();
        let targets = leaf.directive.targets();
        for id in targets.iter() {
            self.ensure_present(id, range.start, kind)?;
        }

        match leaf.directive {
            Directive::FadeIn { target, shift } => {
                for id in target.iter() {
                    let rest = self.stage.get(id)?.center;
                    let full = self.stage.get(id)?.opacity;
                    let tl = self.track_mut(id)?;
                    let from = tl.opacity.final_value();
                    push(&mut tl.opacity, range, from, full, ease)?;
                    if *shift != Vec2::ZERO {
                        push_motion(&mut tl.center, range, rest - *shift, rest, ease)?;
                    }
                }
            }
            Directive::FadeOut { target, shift } => {
                for id in target.iter() {
                    let tl = self.track_mut(id)?;
                    let from = tl.opacity.final_value();
                    push(&mut tl.opacity, range, from, 0.0, ease)?;
                    if *shift != Vec2::ZERO {
                        let c = tl.center.final_value();
                        push_motion(&mut tl.center, range, c, c + *shift, ease)?;
                    }
                    tl.presence.end = range.end;
                    self.removed.insert(id);
                    self.stage.set_visible(id, false);
                }
            }
            Directive::Create { target } | Directive::Write { target, .. } => {
                let style = match leaf.directive {
                    Directive::Write { style, .. } => Some(*style),
                    _ => None,
                };
                for id in target.iter() {
                    let tl = self.track_mut(id)?;
                    if style.is_some() {
                        tl.write_style = style;
                    }
                    push(&mut tl.progress, range, 0.0, 1.0, ease)?;
                }
            }
            Directive::MoveTo { target, to } => {
                let by = *to - self.stage.center_of(target)?;
                for id in target.iter() {
                    let tl = self.track_mut(id)?;
                    let c = tl.center.final_value();
                    let end = push_motion(&mut tl.center, range, c, c + by, ease)?;
                    self.stage.get_mut(id)?.center = end;
                }
            }
            Directive::MoveAlongPath { target, path } => {
                let (a, b) = self
                    .stage
                    .get(*path)?
                    .endpoints()
                    .ok_or_else(|| ReelError::animation("path has no endpoints"))?;
                let tl = self.track_mut(*target)?;
                let end = push_motion(&mut tl.center, range, a, b, ease)?;
                self.stage.get_mut(*target)?.center = end;
            }
            Directive::ChangeValue { target, to } => {
                let tl = self.track_mut(*target)?;
                let from = tl.value.final_value();
                let end = push(&mut tl.value, range, from, *to, ease)?;
                if let Shape::Decimal { value, .. } = &mut self.stage.get_mut(*target)?.shape {
                    *value = end;
                }
            }
            Directive::Transform { target, spec } => {
                let pivot = self.stage.center_of(target)?;
                for id in target.iter() {
                    self.transform_one(id, pivot, spec, range, ease)?;
                }
            }
            Directive::LaggedStart { .. } => {
                return Err(ReelError::animation(
                    "lagged start must be flattened before realization",
                ));
            }
        }
        Ok(())
    }

    fn transform_one(
        &mut self,
        id: ElementId,
        pivot: Point,
        spec: &TransformSpec,
        range: FrameRange,
        ease: Ease,
    ) -> ReelResult<()> {
        let k = spec.scale.unwrap_or(1.0);
        let rot = spec.rotate.unwrap_or(0.0);
        let tl = self.track_mut(id)?;

        let c = tl.center.final_value();
        let offset = rotate_vec((c - pivot) * k, rot);
        let center = if spec.scale.is_some() || spec.rotate.is_some() {
            Some(push_motion(&mut tl.center, range, c, pivot + offset, ease)?)
        } else {
            None
        };
        let scale = match spec.scale {
            Some(k) => {
                let s = tl.scale.final_value();
                Some(push_motion(&mut tl.scale, range, s, s * k, ease)?)
            }
            None => None,
        };
        let rotation = match spec.rotate {
            Some(r) => {
                let r0 = tl.rotation.final_value();
                Some(push_motion(&mut tl.rotation, range, r0, r0 + r, ease)?)
            }
            None => None,
        };
        let paint = match spec.color {
            Some(color) => {
                let p = tl.paint.final_value();
                Some(push(&mut tl.paint, range, p, Paint::Solid(color), ease)?)
            }
            None => None,
        };
        let opacity = match spec.opacity {
            Some(o) => {
                let o0 = tl.opacity.final_value();
                Some(push(&mut tl.opacity, range, o0, o, ease)?)
            }
            None => None,
        };
        let stroke_opacity = match spec.stroke_opacity {
            Some(o) => {
                let o0 = tl.stroke_opacity.final_value();
                Some(push(&mut tl.stroke_opacity, range, o0, o, ease)?)
            }
            None => None,
        };

        let el = self.stage.get_mut(id)?;
        if let Some(c) = center {
            el.center = c;
        }
        if let Some(s) = scale {
            el.scale = s;
        }
        if let Some(r) = rotation {
            el.rotation = r;
        }
        if let Some(p) = paint {
            if let Some(stroke) = &mut el.stroke {
                stroke.paint = p.clone();
            }
            el.fill = p;
        }
        if let Some(o) = opacity {
            el.opacity = o;
        }
        if let (Some(o), Some(stroke)) = (stroke_opacity, &mut el.stroke) {
            stroke.opacity = o;
        }
        Ok(())
    }

    fn record(&mut self, at: FrameIndex, frames: u64, command: Command) {
        self.commands.push(CommandRecord {
            at,
            frames,
            scene: self.current_scene(),
            command,
        });
    }
}

/// Append a segment and return the value the property rests at afterwards.
fn push<T>(track: &mut Track<T>, range: FrameRange, from: T, to: T, ease: Ease) -> ReelResult<T>
where
    T: Lerp + Clone,
{
    track.push(Segment {
        range,
        from,
        to,
        ease,
    })?;
    Ok(track.final_value())
}

/// Like [`push`] for position, scale and rotation: motions from one batch add up.
fn push_motion<T>(
    track: &mut Track<T>,
    range: FrameRange,
    from: T,
    to: T,
    ease: Ease,
) -> ReelResult<T>
where
    T: Accumulate + Clone,
{
    track.push_composed(Segment {
        range,
        from,
        to,
        ease,
    })?;
    Ok(track.final_value())
}

impl Engine for TimelineEngine {
    fn stage(&self) -> &Stage {
        &self.stage
    }

    fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    #[tracing::instrument(
        level = "debug",
        skip(self, play),
        fields(at = self.clock.0, n = play.directives.len())
    )]
    fn play(&mut self, play: Play) -> ReelResult<()> {
        play.validate()?;
        let frames = self.fps.secs_to_frames(play.run_time)?;
        let start = self.clock.0;

        let mut flat = Vec::new();
        for d in &play.directives {
            Self::flatten(d, (0.0, 1.0), &mut flat);
        }
        for (d, _, _) in &flat {
            self.check_leaf(d)?;
        }

        let to_frame = |frac: f64| FrameIndex(start + (frac * frames as f64).round() as u64);
        let mut leaves: Vec<Leaf<'_>> = flat
            .into_iter()
            .map(|(directive, s, e)| {
                let (a, b) = (to_frame(s), to_frame(e));
                Leaf {
                    directive,
                    range: FrameRange {
                        start: a,
                        end: FrameIndex(b.0.max(a.0)),
                    },
                }
            })
            .collect();
        leaves.sort_by_key(|l| l.range.start);

        let mut records = Vec::with_capacity(leaves.len());
        for leaf in &leaves {
            self.realize(leaf, play.ease)?;
            records.push(DirectiveRecord {
                kind: leaf.directive.kind(),
                targets: leaf.directive.targets().ids().to_vec(),
                range: leaf.range,
            });
        }

        self.record(
            FrameIndex(start),
            frames,
            Command::Play {
                ease: play.ease,
                directives: records,
            },
        );
        self.clock = FrameIndex(start + frames);
        tracing::debug!(frames, ease = ?play.ease, "play realized");
        Ok(())
    }

    fn wait(&mut self, secs: f64) -> ReelResult<()> {
        let frames = self.fps.secs_to_frames(secs)?;
        let at = self.clock;
        self.record(at, frames, Command::Wait);
        self.clock = FrameIndex(at.0 + frames);
        tracing::debug!(at = at.0, frames, "wait");
        Ok(())
    }

    fn clear(&mut self, targets: &Group) -> ReelResult<()> {
        let at = self.clock;
        let mut cleared = Vec::new();
        for id in targets.iter() {
            if !self.stage.is_visible(id) {
                continue;
            }
            let tl = self.track_mut(id)?;
            tl.presence.end = at;
            self.removed.insert(id);
            self.stage.set_visible(id, false);
            cleared.push(id);
        }
        if !cleared.is_empty() {
            tracing::debug!(at = at.0, n = cleared.len(), "cleared without fade");
        }
        self.record(at, 0, Command::Clear { targets: cleared });
        Ok(())
    }

    fn begin_scene(&mut self, name: &str) {
        if let Some((open, _)) = &self.open_scene {
            tracing::warn!(open = %open, next = %name, "scene opened before previous one ended");
        }
        self.open_scene = Some((name.to_owned(), self.clock));
    }

    fn end_scene(&mut self, name: &str) {
        match self.open_scene.take() {
            Some((open, start)) if open == name => self.scenes.push(SceneSpan {
                name: open,
                range: FrameRange {
                    start,
                    end: self.clock,
                },
            }),
            other => {
                tracing::warn!(
                    expected = ?other.map(|(n, _)| n),
                    got = %name,
                    "unbalanced scene end"
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/timeline.rs"]
mod tests;
