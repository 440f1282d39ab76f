//! The animation engine seam.
//!
//! Scenes only ever talk to an [`Engine`]: they spawn elements on its stage and hand it play
//! batches. How a batch is realized (pixels, a keyframe timeline, a log) is the engine's business.

pub(crate) mod timeline;

use crate::{
    animation::directive::Play,
    foundation::error::ReelResult,
    scene::element::{Element, ElementId},
    scene::group::Group,
    scene::stage::Stage,
};

/// Backend that realizes play batches. Implementations own the [`Stage`] scenes build on.
pub trait Engine {
    /// Elements constructed so far and which of them are visible.
    fn stage(&self) -> &Stage;

    fn stage_mut(&mut self) -> &mut Stage;

    /// Realize a batch of directives. Returns only once the batch has completed.
    fn play(&mut self, play: Play) -> ReelResult<()>;

    /// Hold the current picture for `secs`.
    fn wait(&mut self, secs: f64) -> ReelResult<()>;

    /// Remove elements from view immediately, without animation.
    fn clear(&mut self, targets: &Group) -> ReelResult<()>;

    /// Mark the start of a named scene. Ignored by default.
    fn begin_scene(&mut self, _name: &str) {}

    fn end_scene(&mut self, _name: &str) {}

    /// Add an element to the stage. It is not visible yet.
    fn spawn(&mut self, element: Element) -> ReelResult<ElementId> {
        self.stage_mut().spawn(element)
    }
}
