//! Runs the reel: background first, then every scene in a fixed order with a pause between.

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::ReelConfig,
    content::Portfolio,
    engine::{Engine, timeline::TimelineEngine},
    foundation::error::ReelResult,
    scenes::{self, SceneScope, background::create_gradient_background},
    timeline::model::Timeline,
};

/// The seven scenes of the reel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Intro,
    Education,
    Projects,
    Skills,
    Interests,
    Website,
    Outro,
}

impl SceneKind {
    /// Playback order.
    pub const ALL: [SceneKind; 7] = [
        Self::Intro,
        Self::Education,
        Self::Projects,
        Self::Skills,
        Self::Interests,
        Self::Website,
        Self::Outro,
    ];

    /// Stable name used for scene spans, log spans and element tags.
    pub fn name(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Interests => "interests",
            Self::Website => "website",
            Self::Outro => "outro",
        }
    }
}

/// Owns the content and render config of one reel and issues it to an [`Engine`].
pub struct Director {
    config: ReelConfig,
    content: Portfolio,
}

impl Director {
    /// Create a director. Nothing is validated until [`Director::run`].
    pub fn new(config: ReelConfig, content: Portfolio) -> Self {
        Self { config, content }
    }

    /// Render config this director runs with.
    pub fn config(&self) -> &ReelConfig {
        &self.config
    }

    /// Portfolio content the scenes draw from.
    pub fn content(&self) -> &Portfolio {
        &self.content
    }

    /// Issue the whole reel to `engine`. The first error aborts the run.
    #[tracing::instrument(skip_all, fields(seed = self.config.seed))]
    pub fn run<E: Engine + ?Sized>(&self, engine: &mut E) -> ReelResult<()> {
        self.config.validate()?;
        self.content.validate()?;

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        create_gradient_background(engine, &self.config.background)?;
        for (i, kind) in SceneKind::ALL.into_iter().enumerate() {
            if i > 0 {
                engine.wait(self.config.scene_pause_secs)?;
            }
            self.run_scene(kind, engine, &mut rng)?;
        }
        tracing::info!("reel complete");
        Ok(())
    }

    fn run_scene<E: Engine + ?Sized>(
        &self,
        kind: SceneKind,
        engine: &mut E,
        rng: &mut StdRng,
    ) -> ReelResult<()> {
        let _span = tracing::info_span!("scene", name = kind.name()).entered();
        tracing::info!("scene started");

        let mut scope = SceneScope::open(engine, kind.name());
        let c = &self.content;
        match kind {
            SceneKind::Intro => scenes::intro::run(&mut scope, &c.intro, rng)?,
            SceneKind::Education => scenes::education::run(&mut scope, &c.education)?,
            SceneKind::Projects => scenes::projects::run(&mut scope, &c.projects)?,
            SceneKind::Skills => scenes::skills::run(&mut scope, &c.skills)?,
            SceneKind::Interests => scenes::interests::run(&mut scope, &c.interests)?,
            SceneKind::Website => scenes::website::run(&mut scope, &c.website)?,
            SceneKind::Outro => scenes::outro::run(&mut scope, &c.contact)?,
        }
        scope.finish()
    }

    /// Run against a fresh [`TimelineEngine`] configured from this director's config.
    pub fn build_timeline(&self) -> ReelResult<Timeline> {
        let mut engine =
            TimelineEngine::new(self.config.fps(), self.config.canvas(), self.config.seed);
        self.run(&mut engine)?;
        engine.finish()
    }
}

#[cfg(test)]
#[path = "../tests/unit/director.rs"]
mod tests;
