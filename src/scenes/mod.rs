//! Scene procedures and the helpers they share.
//!
//! Every scene runs inside a [`SceneScope`]: whatever it spawns is owned by the scope and is
//! gone from view once the scope ends, whether the scene finished or bailed out with an error.

pub(crate) mod background;
pub(crate) mod chart;
pub(crate) mod education;
pub(crate) mod interests;
pub(crate) mod intro;
pub(crate) mod outro;
pub(crate) mod particles;
pub(crate) mod projects;
pub(crate) mod skills;
pub(crate) mod website;

use crate::{
    animation::directive::Play,
    animation::ops::fade_out_shift,
    engine::Engine,
    foundation::core::UP,
    foundation::error::{ReelError, ReelResult},
    scene::color::Color,
    scene::element::{Element, ElementId},
    scene::group::Group,
    scene::layout::EDGE_BUFF,
    scene::stage::Stage,
};

/// Label carried by each scene's title element.
pub const TITLE_LABEL: &str = "title";

/// Run time of the closing fade-out of a scene.
pub const SCENE_FADE_OUT_SECS: f64 = 1.0;

/// Label carried by the per-entry marker of a list scene (project dot, skill bar, ...).
pub fn marker_label(name: &str) -> String {
    format!("marker:{name}")
}

/// Engine borrow plus the elements one scene has put on the stage.
pub struct SceneScope<'e, E: Engine + ?Sized> {
    engine: &'e mut E,
    name: &'static str,
    owned: Group,
    finished: bool,
}

impl<'e, E: Engine + ?Sized> SceneScope<'e, E> {
    pub fn open(engine: &'e mut E, name: &'static str) -> Self {
        engine.begin_scene(name);
        Self {
            engine,
            name,
            owned: Group::new(),
            finished: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn owned(&self) -> &Group {
        &self.owned
    }

    pub fn stage(&self) -> &Stage {
        self.engine.stage()
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        self.engine.stage_mut()
    }

    pub fn spawn(&mut self, element: Element) -> ReelResult<ElementId> {
        let id = self.engine.spawn(element)?;
        self.owned.push(id);
        Ok(id)
    }

    /// Copy an element; the copy is owned by this scope.
    pub fn duplicate(&mut self, id: ElementId) -> ReelResult<ElementId> {
        let copy = self.engine.stage_mut().duplicate(id)?;
        self.owned.push(copy);
        Ok(copy)
    }

    /// Run a factory directly against the stage and take ownership of everything it spawned.
    pub fn build<T>(&mut self, f: impl FnOnce(&mut Stage) -> ReelResult<T>) -> ReelResult<T> {
        let before = self.engine.stage().len();
        let out = f(self.engine.stage_mut());
        let after = self.engine.stage().len();
        for idx in before..after {
            let id = u32::try_from(idx)
                .map(ElementId)
                .map_err(|_| ReelError::validation("stage element count exceeds u32"))?;
            self.owned.push(id);
        }
        out
    }

    pub fn play(&mut self, play: Play) -> ReelResult<()> {
        self.engine.play(play)
    }

    pub fn wait(&mut self, secs: f64) -> ReelResult<()> {
        self.engine.wait(secs)
    }

    /// Spawn a scene title pinned to the top edge.
    pub fn title(&mut self, text: &str, font_size: f64, stops: &[Color]) -> ReelResult<ElementId> {
        let id = self.spawn(
            Element::text(text, font_size)
                .gradient(stops.iter().copied())
                .label(TITLE_LABEL),
        )?;
        self.stage_mut().to_edge(&Group::from(id), UP, EDGE_BUFF)?;
        Ok(id)
    }

    fn still_visible(&self) -> Group {
        let stage = self.engine.stage();
        self.owned.iter().filter(|&id| stage.is_visible(id)).collect()
    }

    /// Fade out whatever the scene still shows, then close the scene.
    ///
    /// Errors if an owned element is somehow still visible after the fade.
    pub fn finish(mut self) -> ReelResult<()> {
        let remaining = self.still_visible();
        if !remaining.is_empty() {
            self.engine.play(
                Play::one(fade_out_shift(&remaining, UP)).run_time(SCENE_FADE_OUT_SECS),
            )?;
        }
        if let Some(id) = self.still_visible().iter().next() {
            return Err(ReelError::animation(format!(
                "scene '{}' left element {} visible",
                self.name, id.0
            )));
        }
        self.finished = true;
        self.engine.end_scene(self.name);
        tracing::debug!(scene = self.name, owned = self.owned.len(), "scene closed");
        Ok(())
    }
}

impl<E: Engine + ?Sized> Drop for SceneScope<'_, E> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let remaining = self.still_visible();
        tracing::warn!(
            scene = self.name,
            visible = remaining.len(),
            "scene scope dropped without finish, clearing its elements"
        );
        if let Err(err) = self.engine.clear(&remaining) {
            tracing::warn!(scene = self.name, error = %err, "clearing scene elements failed");
        }
        self.engine.end_scene(self.name);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/scope.rs"]
mod tests;
