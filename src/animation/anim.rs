use crate::{
    animation::ease::Ease,
    foundation::core::{FrameIndex, FrameRange, Point},
    foundation::error::{ReelError, ReelResult},
    scene::color::{Color, Paint},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

/// Values whose changes add up, so two motions over the same frames can share one segment.
pub trait Accumulate: Lerp {
    /// `base` moved by the change from `from` to `to`.
    fn accumulate(base: &Self, from: &Self, to: &Self) -> Self;
}

impl Accumulate for f64 {
    fn accumulate(base: &Self, from: &Self, to: &Self) -> Self {
        base + (to - from)
    }
}

impl Accumulate for Point {
    fn accumulate(base: &Self, from: &Self, to: &Self) -> Self {
        *base + (*to - *from)
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Color::rgba(
            f64::lerp(&a.r, &b.r, t),
            f64::lerp(&a.g, &b.g, t),
            f64::lerp(&a.b, &b.b, t),
            f64::lerp(&a.a, &b.a, t),
        )
    }
}

impl Lerp for Paint {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Paint::Solid(x), Paint::Solid(y)) => Paint::Solid(Color::lerp(x, y, t)),
            _ => {
                let n = a.stop_count().max(b.stop_count());
                let stops = (0..n)
                    .map(|i| Color::lerp(&a.stop_at(i, n), &b.stop_at(i, n), t))
                    .collect();
                Paint::Gradient(stops)
            }
        }
    }
}

/// One eased transition of a property over a frame range.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment<T> {
    pub range: FrameRange,
    pub from: T,
    pub to: T,
    pub ease: Ease,
}

impl<T> Segment<T>
where
    T: Lerp + Clone,
{
    /// Value the property holds once the segment is over.
    pub fn end_value(&self) -> T {
        T::lerp(&self.from, &self.to, self.ease.apply(1.0))
    }

    fn value_at(&self, f: FrameIndex) -> T {
        let len = self.range.len_frames();
        if len == 0 || f.0 >= self.range.end.0 {
            return self.end_value();
        }
        let t = (f.0.saturating_sub(self.range.start.0) as f64) / (len as f64);
        T::lerp(&self.from, &self.to, self.ease.apply(t))
    }
}

/// Property track: an initial value followed by segments ordered by start frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track<T> {
    pub initial: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<Segment<T>>, // sorted by range.start
}

impl<T> Track<T>
where
    T: Lerp + Clone,
{
    /// Track that holds `value` for the whole run.
    pub fn constant(value: T) -> Self {
        Self {
            initial: value,
            segments: Vec::new(),
        }
    }

    /// Append `seg`. It must start at or after the end of the last segment.
    pub fn push(&mut self, seg: Segment<T>) -> ReelResult<()> {
        if let Some(last) = self.segments.last() {
            if seg.range.start.0 < last.range.start.0 {
                return Err(ReelError::animation(
                    "track segments must be pushed in start-frame order",
                ));
            }
            if seg.range.start.0 < last.range.end.0 {
                return Err(ReelError::animation(format!(
                    "segment starting at frame {} overlaps one running until frame {}",
                    seg.range.start.0, last.range.end.0
                )));
            }
        }
        self.segments.push(seg);
        Ok(())
    }

    /// Value after every segment has completed.
    pub fn final_value(&self) -> T {
        self.segments
            .last()
            .map(Segment::end_value)
            .unwrap_or_else(|| self.initial.clone())
    }

    /// Value at frame `f`.
    pub fn sample(&self, f: FrameIndex) -> T {
        let idx = self.segments.partition_point(|s| s.range.start.0 <= f.0);
        if idx == 0 {
            return self.initial.clone();
        }
        self.segments[idx - 1].value_at(f)
    }

    pub fn validate(&self) -> ReelResult<()> {
        if !self
            .segments
            .windows(2)
            .all(|w| w[0].range.start.0 <= w[1].range.start.0)
        {
            return Err(ReelError::animation(
                "track segments must be sorted by start frame",
            ));
        }
        Ok(())
    }
}

impl<T> Track<T>
where
    T: Accumulate + Clone,
{
    /// Like [`Track::push`], but a segment covering the same frames with the same ease as the
    /// last one is folded into it, so both changes play out together.
    pub fn push_composed(&mut self, seg: Segment<T>) -> ReelResult<()> {
        if let Some(last) = self.segments.last_mut()
            && last.range == seg.range
            && last.ease == seg.ease
        {
            last.to = T::accumulate(&last.to, &seg.from, &seg.to);
            return Ok(());
        }
        self.push(seg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
