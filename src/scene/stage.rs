use std::collections::BTreeSet;

use crate::{
    foundation::core::FrameSize,
    foundation::error::{ReelError, ReelResult},
    scene::element::{Element, ElementId},
};

/// Arena of constructed elements plus the set currently visible.
///
/// Visibility is owned by the engine: elements enter the visible set when a directive first
/// touches them and leave it when they are faded out or cleared.
#[derive(Clone, Debug)]
pub struct Stage {
    frame: FrameSize,
    elements: Vec<Element>,
    visible: BTreeSet<ElementId>,
}

impl Stage {
    /// Create an empty stage for a frame of the given size.
    pub fn new(frame: FrameSize) -> Self {
        Self {
            frame,
            elements: Vec::new(),
            visible: BTreeSet::new(),
        }
    }

    /// Visible frame in scene units.
    pub fn frame_size(&self) -> FrameSize {
        self.frame
    }

    /// Validate `element` and add it to the arena. It stays hidden until a directive
    /// touches it.
    #[tracing::instrument(
        level = "trace",
        skip(self, element),
        fields(shape = element.shape.kind_name())
    )]
    pub fn spawn(&mut self, element: Element) -> ReelResult<ElementId> {
        element.validate().map_err(|e| {
            ReelError::validation(format!("invalid {}: {e}", element.shape.kind_name()))
        })?;
        let id = u32::try_from(self.elements.len())
            .map(ElementId)
            .map_err(|_| ReelError::validation("stage element count exceeds u32"))?;
        self.elements.push(element);
        Ok(id)
    }

    /// Spawn an independent copy of an existing element (not visible).
    pub fn duplicate(&mut self, id: ElementId) -> ReelResult<ElementId> {
        let copy = self.get(id)?.clone();
        self.spawn(copy)
    }

    /// Look up an element, failing with a layout error for unknown ids.
    pub fn get(&self, id: ElementId) -> ReelResult<&Element> {
        self.elements
            .get(id.0 as usize)
            .ok_or_else(|| ReelError::layout(format!("unknown element {}", id.0)))
    }

    pub fn get_mut(&mut self, id: ElementId) -> ReelResult<&mut Element> {
        self.elements
            .get_mut(id.0 as usize)
            .ok_or_else(|| ReelError::layout(format!("unknown element {}", id.0)))
    }

    /// Number of elements ever spawned, visible or not.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.visible.contains(&id)
    }

    /// Visible element ids in spawn order.
    pub fn visible(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.visible.iter().copied()
    }

    pub(crate) fn set_visible(&mut self, id: ElementId, on: bool) {
        if on {
            self.visible.insert(id);
        } else {
            self.visible.remove(&id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/stage.rs"]
mod tests;
