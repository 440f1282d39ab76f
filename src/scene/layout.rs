//! Placement helpers on the [`Stage`]: bounds, shifting, stacking and framing.
//!
//! Coordinates are scene units with the origin at the frame center and y pointing up.

use crate::{
    foundation::core::{Point, Rect, Vec2},
    foundation::error::{ReelError, ReelResult},
    scene::element::{ElementId, Shape},
    scene::group::Group,
    scene::stage::Stage,
};

/// Default gap between stacked or adjacent elements.
pub const DEFAULT_BUFF: f64 = 0.25;
/// Default gap between an element and the frame edge.
pub const EDGE_BUFF: f64 = 0.5;
/// `surround` grows the circle past the group's diagonal by this factor.
pub const SURROUND_FACTOR: f64 = 1.2;

impl Stage {
    pub fn bounds_of(&self, group: &Group) -> ReelResult<Rect> {
        let mut iter = group.iter();
        let first = iter
            .next()
            .ok_or_else(|| ReelError::layout("cannot measure an empty group"))?;
        let mut rect = self.get(first)?.bounds();
        for id in iter {
            rect = rect.union(self.get(id)?.bounds());
        }
        Ok(rect)
    }

    pub fn center_of(&self, group: &Group) -> ReelResult<Point> {
        Ok(self.bounds_of(group)?.center())
    }

    pub fn shift(&mut self, group: &Group, by: Vec2) -> ReelResult<()> {
        for id in group.iter() {
            let el = self.get_mut(id)?;
            el.center += by;
        }
        Ok(())
    }

    pub fn move_to(&mut self, group: &Group, to: Point) -> ReelResult<()> {
        let center = self.center_of(group)?;
        self.shift(group, to - center)
    }

    /// Place `group` beside `anchor` in `dir`, centered on the perpendicular axis.
    pub fn next_to(
        &mut self,
        group: &Group,
        anchor: &Group,
        dir: Vec2,
        buff: f64,
    ) -> ReelResult<()> {
        let a = self.bounds_of(anchor)?;
        let g = self.bounds_of(group)?;
        let to = if dir.x.abs() >= dir.y.abs() {
            let x = if dir.x >= 0.0 {
                a.max_x() + buff + g.width() / 2.0
            } else {
                a.min_x() - buff - g.width() / 2.0
            };
            Point::new(x, a.center().y)
        } else {
            let y = if dir.y >= 0.0 {
                a.max_y() + buff + g.height() / 2.0
            } else {
                a.min_y() - buff - g.height() / 2.0
            };
            Point::new(a.center().x, y)
        };
        self.move_to(group, to)
    }

    /// Push `group` against the frame edge in `dir`, keeping the other coordinate.
    pub fn to_edge(&mut self, group: &Group, dir: Vec2, buff: f64) -> ReelResult<()> {
        let frame = self.frame_size().rect();
        let g = self.bounds_of(group)?;
        let by = if dir.x.abs() >= dir.y.abs() {
            if dir.x >= 0.0 {
                Vec2::new(frame.max_x() - buff - g.max_x(), 0.0)
            } else {
                Vec2::new(frame.min_x() + buff - g.min_x(), 0.0)
            }
        } else if dir.y >= 0.0 {
            Vec2::new(0.0, frame.max_y() - buff - g.max_y())
        } else {
            Vec2::new(0.0, frame.min_y() + buff - g.min_y())
        };
        self.shift(group, by)
    }

    /// Stack `parts` one after another along `dir`, then center the whole stack on the origin.
    ///
    /// With `aligned_edge` set (e.g. `LEFT`), parts share that edge instead of their centers on
    /// the perpendicular axis.
    pub fn arrange(
        &mut self,
        parts: &[Group],
        dir: Vec2,
        buff: f64,
        aligned_edge: Option<Vec2>,
    ) -> ReelResult<()> {
        let Some((first, rest)) = parts.split_first() else {
            return Err(ReelError::layout("cannot arrange zero parts"));
        };
        let mut prev = first;
        for part in rest {
            self.next_to(part, prev, dir, buff)?;
            if let Some(edge) = aligned_edge {
                self.align_to(part, prev, edge)?;
            }
            prev = part;
        }
        let all = Group::concat(parts);
        self.move_to(&all, Point::ORIGIN)
    }

    /// Match the `edge` side of `group` to the same side of `anchor`.
    pub fn align_to(&mut self, group: &Group, anchor: &Group, edge: Vec2) -> ReelResult<()> {
        let a = self.bounds_of(anchor)?;
        let g = self.bounds_of(group)?;
        let mut by = Vec2::ZERO;
        if edge.x > 0.0 {
            by.x = a.max_x() - g.max_x();
        } else if edge.x < 0.0 {
            by.x = a.min_x() - g.min_x();
        }
        if edge.y > 0.0 {
            by.y = a.max_y() - g.max_y();
        } else if edge.y < 0.0 {
            by.y = a.min_y() - g.min_y();
        }
        self.shift(group, by)
    }

    /// Scale every member about the group center.
    pub fn scale(&mut self, group: &Group, factor: f64) -> ReelResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ReelError::layout(format!(
                "scale factor must be finite and > 0, got {factor}"
            )));
        }
        let pivot = self.center_of(group)?;
        for id in group.iter() {
            let el = self.get_mut(id)?;
            el.center = pivot + (el.center - pivot) * factor;
            el.scale *= factor;
        }
        Ok(())
    }

    /// Resize and move a circle so it encloses `group` with some breathing room.
    pub fn surround(&mut self, circle: ElementId, group: &Group) -> ReelResult<()> {
        let b = self.bounds_of(group)?;
        let el = self.get_mut(circle)?;
        let Shape::Circle { radius } = &mut el.shape else {
            return Err(ReelError::layout(format!(
                "surround expects a circle, element {} is a {}",
                circle.0,
                el.shape.kind_name()
            )));
        };
        *radius = (b.width().hypot(b.height()) / 2.0 * SURROUND_FACTOR).max(f64::EPSILON);
        el.scale = 1.0;
        el.center = b.center();
        Ok(())
    }

    /// Stretch a line so its length equals the width of `group`.
    pub fn match_width(&mut self, line: ElementId, group: &Group) -> ReelResult<()> {
        let width = self.bounds_of(group)?.width();
        let el = self.get_mut(line)?;
        let Shape::Line { delta } = &mut el.shape else {
            return Err(ReelError::layout(format!(
                "match_width expects a line, element {} is a {}",
                line.0,
                el.shape.kind_name()
            )));
        };
        let len = delta.hypot();
        if len == 0.0 || width <= 0.0 {
            return Err(ReelError::layout("match_width needs non-degenerate extents"));
        }
        *delta = *delta * (width / len / el.scale);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
